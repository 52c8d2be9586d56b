//! Article use-case service.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::article::{Article, ArticleDraft, ArticleId};
use crate::repo::article_repo::{ArticleRepository, RepoResult};

/// Use-case wrapper for article operations.
pub struct ArticleService<R: ArticleRepository> {
    repo: R,
}

impl<R: ArticleRepository> ArticleService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an article and returns its store-assigned id.
    pub fn create(&self, draft: &ArticleDraft) -> RepoResult<ArticleId> {
        self.repo.create_article(draft)
    }

    /// Lists every article in ascending id order.
    pub fn list_all(&self) -> RepoResult<Vec<Article>> {
        self.repo.list_articles()
    }

    pub fn get(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        self.repo.get_article(id)
    }

    /// Overwrites the three mutable fields of article `id`.
    ///
    /// Returns `RepoError::NotFound` when no article has this id.
    pub fn update(&self, id: ArticleId, draft: &ArticleDraft) -> RepoResult<()> {
        self.repo.update_article(id, draft)
    }

    /// Returns articles whose designation contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> RepoResult<Vec<Article>> {
        self.repo.search_articles(keyword)
    }

    pub fn count(&self) -> RepoResult<u64> {
        self.repo.count_articles()
    }
}
