//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the catalog CRUD contract used by services.
//! - Isolate file persistence details behind the repository boundary.
//!
//! # Invariants
//! - Every successful mutation is followed by a full catalog save.
//! - Failed lookups (`NotFound`) leave memory and disk untouched.

pub mod book_repo;
