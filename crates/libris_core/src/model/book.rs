//! Book domain model.
//!
//! # Responsibility
//! - Define the canonical book record persisted in the catalog file.
//! - Provide construction helpers that enforce identity and status defaults.
//!
//! # Invariants
//! - `id` is stable and never reused for another book.
//! - A freshly created book always starts as `BookStatus::Available`.
//! - `year` is stored as provided; no range validation beyond parseability.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every book in the catalog.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type BookId = Uuid;

/// Availability state of a catalogued book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    /// On the shelf and available for lending.
    Available,
    /// Currently lent out to a reader.
    Lent,
}

impl BookStatus {
    /// Parses a user-supplied status value.
    ///
    /// Input is normalized to lowercase first; only the exact canonical
    /// values `available` and `lent` are accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "available" => Some(Self::Available),
            "lent" => Some(Self::Lent),
            _ => None,
        }
    }

    /// Returns the canonical lowercase label, matching the on-disk form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Lent => "lent",
        }
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record for one catalogued book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable global ID used as the catalog lookup key.
    pub id: BookId,
    /// Free-text title.
    pub title: String,
    /// Free-text author name.
    pub author: String,
    /// Publication year as entered by the user.
    pub year: i64,
    /// Mutable availability state.
    pub status: BookStatus,
}

impl Book {
    /// Creates a new book with a generated stable ID and default status.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self::with_id(Uuid::new_v4(), title, author, year)
    }

    /// Creates a book with a caller-provided stable ID.
    ///
    /// Used by tests and import paths where identity already exists.
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            status: BookStatus::Available,
        }
    }
}
