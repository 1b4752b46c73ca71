//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the interactive menu operations.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::model::book::{Book, BookId, BookStatus};
use crate::repo::book_repo::{BookRepository, RepoResult};

/// Use-case service wrapper for catalog operations.
pub struct CatalogService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Adds a new book from user-entered fields.
    ///
    /// # Contract
    /// - Generates a fresh stable ID.
    /// - Sets `status = BookStatus::Available`.
    /// - Returns the created record so callers can echo it back.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> RepoResult<Book> {
        let book = Book::new(title, author, year);
        self.repo.add_book(&book)?;
        Ok(book)
    }

    /// Removes a book by stable ID.
    ///
    /// Returns the repository-level not-found error unchanged.
    pub fn remove_book(&mut self, id: BookId) -> RepoResult<()> {
        self.repo.remove_book(id)
    }

    /// Gets one book by ID.
    pub fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        self.repo.get_book(id)
    }

    /// Lists every book in the catalog.
    pub fn list_books(&self) -> RepoResult<Vec<Book>> {
        self.repo.list_books()
    }

    /// Searches books by free-text term over title, author and year.
    pub fn search_books(&self, term: &str) -> RepoResult<Vec<Book>> {
        self.repo.search_books(term)
    }

    /// Changes a book's availability status.
    pub fn set_status(&mut self, id: BookId, status: BookStatus) -> RepoResult<()> {
        self.repo.set_status(id, status)
    }
}
