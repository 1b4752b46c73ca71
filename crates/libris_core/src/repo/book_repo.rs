//! Book repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the catalog.
//! - Flush the whole catalog to disk after every successful mutation.
//!
//! # Invariants
//! - `NotFound` is returned before any mutation happens, so a failed
//!   delete or status change leaves the backing file unchanged.
//! - Read paths (`get`, `list`, `search`) never write to disk.

use crate::model::book::{Book, BookId, BookStatus};
use crate::search::matches_term;
use crate::store::{self, Catalog, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for catalog persistence and lookup operations.
#[derive(Debug)]
pub enum RepoError {
    NotFound(BookId),
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Repository interface for catalog CRUD operations.
pub trait BookRepository {
    fn add_book(&mut self, book: &Book) -> RepoResult<BookId>;
    fn remove_book(&mut self, id: BookId) -> RepoResult<()>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>>;
    fn set_status(&mut self, id: BookId, status: BookStatus) -> RepoResult<()>;
}

/// JSON-file-backed book repository.
///
/// Holds the catalog in memory and rewrites the backing file in full after
/// each mutation, mirroring the single-user, single-process access model.
pub struct JsonFileBookRepository {
    path: PathBuf,
    catalog: Catalog,
}

impl JsonFileBookRepository {
    /// Opens the repository, loading the catalog from `path`.
    ///
    /// A missing file opens as an empty catalog. Malformed content is an
    /// error so the caller can warn the user before discarding data.
    pub fn open(path: impl Into<PathBuf>) -> RepoResult<Self> {
        let path = path.into();
        let catalog = store::load_catalog(&path)?;
        Ok(Self { path, catalog })
    }

    /// Creates an empty repository over `path` without touching the file.
    ///
    /// Used when the caller chooses to continue past a corrupt backing
    /// file; prior content is only overwritten on the next save.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            catalog: Catalog::new(),
        }
    }

    /// Number of books currently in the catalog.
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    fn persist(&self) -> RepoResult<()> {
        store::save_catalog(&self.path, &self.catalog)?;
        Ok(())
    }
}

impl BookRepository for JsonFileBookRepository {
    fn add_book(&mut self, book: &Book) -> RepoResult<BookId> {
        self.catalog.insert(book.id, book.clone());
        self.persist()?;
        info!(
            "event=book_add module=repo status=ok id={} count={}",
            book.id,
            self.catalog.len()
        );
        Ok(book.id)
    }

    fn remove_book(&mut self, id: BookId) -> RepoResult<()> {
        if self.catalog.remove(&id).is_none() {
            return Err(RepoError::NotFound(id));
        }
        self.persist()?;
        info!(
            "event=book_remove module=repo status=ok id={} count={}",
            id,
            self.catalog.len()
        );
        Ok(())
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        Ok(self.catalog.get(&id).cloned())
    }

    fn list_books(&self) -> RepoResult<Vec<Book>> {
        Ok(self.catalog.values().cloned().collect())
    }

    fn search_books(&self, term: &str) -> RepoResult<Vec<Book>> {
        Ok(self
            .catalog
            .values()
            .filter(|book| matches_term(book, term))
            .cloned()
            .collect())
    }

    fn set_status(&mut self, id: BookId, status: BookStatus) -> RepoResult<()> {
        let book = self.catalog.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        book.status = status;
        self.persist()?;
        info!(
            "event=book_status module=repo status=ok id={} new_status={}",
            id, status
        );
        Ok(())
    }
}
