//! Article store facade owning its SQLite connection.
//!
//! # Responsibility
//! - Initialize the articles schema when the store is opened.
//! - Expose create/list/update/search on an explicitly constructed handle.
//!
//! # Invariants
//! - One connection per store, held for the store lifetime.
//! - Every write is a single autocommit statement, durable on return.
//! - Every read fetches fresh rows; nothing is cached.
//! - Log events carry ids and counts only, never designations or keywords.

use crate::config::StoreConfig;
use crate::db::migrations::apply_migrations;
use crate::db::{open_db, open_db_in_memory, DbError};
use crate::model::article::{Article, ArticleDraft, ArticleId};
use crate::repo::article_repo::{RepoError, SqliteArticleRepository};
use crate::service::article_service::ArticleService;
use log::{error, info};
use rusqlite::Connection;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surfaced by [`ArticleStore`] operations.
#[derive(Debug)]
pub enum StoreError {
    /// Storage could not be opened or initialized.
    Db(DbError),
    /// An article operation failed.
    Repo(RepoError),
}

impl StoreError {
    /// Returns whether the failure is a missing article on update.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Repo(RepoError::NotFound(_)))
    }

    /// Returns whether the failure is an input validation rejection.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Repo(RepoError::Validation(_)))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Persistent collection of articles.
pub struct ArticleStore {
    conn: Connection,
}

impl ArticleStore {
    /// Opens the database file at `path`, creating the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Opens the store at the configured database path.
    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::open(&config.db_path)
    }

    /// Ensures the schema exists. No-op when it is already current.
    pub fn initialize(&mut self) -> StoreResult<()> {
        apply_migrations(&mut self.conn)?;
        Ok(())
    }

    /// Appends an article and returns its assigned id.
    pub fn create(
        &self,
        designation: &str,
        purchase_price: f64,
        install_time: f64,
    ) -> StoreResult<ArticleId> {
        let draft = ArticleDraft::new(designation)
            .with_purchase_price(purchase_price)
            .with_install_time(install_time);
        self.create_draft(&draft)
    }

    pub fn create_draft(&self, draft: &ArticleDraft) -> StoreResult<ArticleId> {
        observe("article_create", || self.service().create(draft), |id| {
            format!("article_id={id}")
        })
    }

    /// Returns every article in ascending id order.
    pub fn list_all(&self) -> StoreResult<Vec<Article>> {
        observe("article_list", || self.service().list_all(), |articles| {
            format!("count={}", articles.len())
        })
    }

    pub fn get(&self, id: ArticleId) -> StoreResult<Option<Article>> {
        observe("article_get", || self.service().get(id), |article| {
            format!("article_id={id} found={}", article.is_some())
        })
    }

    /// Overwrites designation, price and time of article `id`.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when `id` does not exist; nothing is changed.
    /// - `RepoError::Validation` when the new values are invalid.
    pub fn update(
        &self,
        id: ArticleId,
        designation: &str,
        purchase_price: f64,
        install_time: f64,
    ) -> StoreResult<()> {
        let draft = ArticleDraft::new(designation)
            .with_purchase_price(purchase_price)
            .with_install_time(install_time);
        self.update_draft(id, &draft)
    }

    pub fn update_draft(&self, id: ArticleId, draft: &ArticleDraft) -> StoreResult<()> {
        observe("article_update", || self.service().update(id, draft), |_| {
            format!("article_id={id}")
        })
    }

    /// Returns articles whose designation contains `keyword`, ignoring case.
    ///
    /// An empty keyword returns every article.
    pub fn search(&self, keyword: &str) -> StoreResult<Vec<Article>> {
        observe("article_search", || self.service().search(keyword), |articles| {
            format!(
                "keyword_len={} count={}",
                keyword.chars().count(),
                articles.len()
            )
        })
    }

    pub fn count(&self) -> StoreResult<u64> {
        observe("article_count", || self.service().count(), |count| {
            format!("count={count}")
        })
    }

    fn service(&self) -> ArticleService<SqliteArticleRepository<'_>> {
        ArticleService::new(SqliteArticleRepository::new(&self.conn))
    }
}

fn observe<T, Op, Summary>(event: &str, op: Op, summary: Summary) -> StoreResult<T>
where
    Op: FnOnce() -> Result<T, RepoError>,
    Summary: FnOnce(&T) -> String,
{
    let started_at = Instant::now();
    match op() {
        Ok(value) => {
            info!(
                "event={event} module=store status=ok duration_ms={} {}",
                started_at.elapsed().as_millis(),
                summary(&value)
            );
            Ok(value)
        }
        Err(err) => {
            error!(
                "event={event} module=store status=error duration_ms={} error_code={} error={}",
                started_at.elapsed().as_millis(),
                error_code(&err),
                err
            );
            Err(err.into())
        }
    }
}

fn error_code(err: &RepoError) -> &'static str {
    match err {
        RepoError::Validation(_) => "validation_failed",
        RepoError::Db(_) => "storage_unavailable",
        RepoError::NotFound(_) => "not_found",
        RepoError::InvalidData(_) => "invalid_data",
    }
}
