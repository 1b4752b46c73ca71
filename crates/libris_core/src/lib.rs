//! Core domain logic for Libris, a JSON-file book catalog.
//! This crate is the single source of truth for catalog invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookId, BookStatus};
pub use repo::book_repo::{BookRepository, JsonFileBookRepository, RepoError, RepoResult};
pub use search::matches_term;
pub use service::catalog_service::CatalogService;
pub use store::{load_catalog, save_catalog, Catalog, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
