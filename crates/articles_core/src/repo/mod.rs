//! Repository layer for article persistence.
//!
//! # Responsibility
//! - Define the data access contract used by the article service.
//! - Isolate SQLite query details from use-case orchestration.
//!
//! # Invariants
//! - Repository writes enforce `ArticleDraft::validate()` before persistence.
//! - Updates of unknown ids surface `RepoError::NotFound`.

pub mod article_repo;
