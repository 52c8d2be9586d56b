//! Inventory article store.
//! This crate owns the article record, its SQLite persistence and the
//! create/list/update/search operations front ends build on.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod store;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::article::{Article, ArticleDraft, ArticleField, ArticleId, ArticleValidationError};
pub use repo::article_repo::{ArticleRepository, RepoError, RepoResult, SqliteArticleRepository};
pub use search::keyword::matches_keyword;
pub use service::article_service::ArticleService;
pub use store::{ArticleStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
