//! Substring search over catalog records.
//!
//! # Responsibility
//! - Provide the single match predicate used by repository search.
//!
//! # Invariants
//! - Title and author matching is case-insensitive.
//! - Year matching is a raw substring check on the decimal form.
//! - Matching never mutates the record.

use crate::model::book::Book;

/// Returns whether `book` matches a free-text search term.
///
/// The term matches when its lowercase form is a substring of the lowercase
/// title or author, or when the raw term is a substring of the year's
/// decimal string form.
pub fn matches_term(book: &Book, term: &str) -> bool {
    let needle = term.to_lowercase();
    book.title.to_lowercase().contains(&needle)
        || book.author.to_lowercase().contains(&needle)
        || book.year.to_string().contains(term)
}
