//! Article repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide create/read/update/search APIs over the `articles` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `ArticleDraft::validate()` before SQL mutations.
//! - Read paths reject invalid persisted rows instead of masking them: one
//!   bad row fails the whole read and is logged with its id.
//! - Listing order is ascending `id`.

use crate::db::DbError;
use crate::model::article::{Article, ArticleDraft, ArticleId, ArticleValidationError};
use crate::search::keyword::filter_by_keyword;
use log::error;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ARTICLE_SELECT_SQL: &str = "SELECT
    id,
    designation,
    purchase_price,
    install_time
FROM articles";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for article persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ArticleValidationError),
    Db(DbError),
    NotFound(ArticleId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid article: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "article not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted article data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ArticleValidationError> for RepoError {
    fn from(value: ArticleValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for article operations.
pub trait ArticleRepository {
    fn create_article(&self, draft: &ArticleDraft) -> RepoResult<ArticleId>;
    fn update_article(&self, id: ArticleId, draft: &ArticleDraft) -> RepoResult<()>;
    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>>;
    fn list_articles(&self) -> RepoResult<Vec<Article>>;
    fn search_articles(&self, keyword: &str) -> RepoResult<Vec<Article>>;
    fn count_articles(&self) -> RepoResult<u64>;
}

/// SQLite-backed article repository.
pub struct SqliteArticleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteArticleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ArticleRepository for SqliteArticleRepository<'_> {
    fn create_article(&self, draft: &ArticleDraft) -> RepoResult<ArticleId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO articles (designation, purchase_price, install_time)
             VALUES (?1, ?2, ?3);",
            params![
                draft.designation.as_str(),
                draft.purchase_price,
                draft.install_time
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_article(&self, id: ArticleId, draft: &ArticleDraft) -> RepoResult<()> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE articles
             SET
                designation = ?1,
                purchase_price = ?2,
                install_time = ?3
             WHERE id = ?4;",
            params![
                draft.designation.as_str(),
                draft.purchase_price,
                draft.install_time,
                id
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn get_article(&self, id: ArticleId) -> RepoResult<Option<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} WHERE id = ?1;"))?;

        let article = stmt.query_row([id], read_article_row).optional()?;
        article.map(checked).transpose()
    }

    fn list_articles(&self) -> RepoResult<Vec<Article>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ARTICLE_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut articles = Vec::new();

        while let Some(row) = rows.next()? {
            articles.push(checked(read_article_row(row)?)?);
        }

        Ok(articles)
    }

    fn search_articles(&self, keyword: &str) -> RepoResult<Vec<Article>> {
        // SQLite LOWER() only folds ASCII, so matching happens on decoded rows.
        let articles = self.list_articles()?;
        Ok(filter_by_keyword(articles, keyword))
    }

    fn count_articles(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM articles;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("negative article count `{count}`")))
    }
}

fn read_article_row(row: &Row<'_>) -> rusqlite::Result<Article> {
    Ok(Article {
        id: row.get("id")?,
        designation: row.get("designation")?,
        purchase_price: row.get("purchase_price")?,
        install_time: row.get("install_time")?,
    })
}

fn checked(article: Article) -> RepoResult<Article> {
    if let Err(err) = article.validate() {
        error!(
            "event=article_row_invalid module=repo status=error article_id={} error_code=invalid_data error={}",
            article.id, err
        );
        return Err(RepoError::InvalidData(format!(
            "article {} violates invariants: {err}",
            article.id
        )));
    }
    Ok(article)
}
