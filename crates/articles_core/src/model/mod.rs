//! Article domain model.
//!
//! # Responsibility
//! - Define the canonical record stored by the article store.
//! - Own field-level validation rules shared by every write path.
//!
//! # Invariants
//! - Every stored article is identified by a store-assigned `ArticleId`.
//! - Articles are never deleted; records only change through updates.

pub mod article;
