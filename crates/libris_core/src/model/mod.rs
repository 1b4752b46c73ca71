//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the canonical book record used by every other layer.
//!
//! # Invariants
//! - Every book is identified by a stable `BookId` that is never reused.
//! - Deletion is a hard removal; the catalog keeps no tombstones.

pub mod book;
