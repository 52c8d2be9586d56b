//! Versioned schema migrations for the articles database.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - Applied version is mirrored to `PRAGMA user_version`.
//! - Re-applying on an up-to-date database is a no-op.
//! - An unversioned `articles` table is adopted only when its columns match,
//!   possibly after renaming the `prix_achat` / `temps_pose` legacy columns.

use crate::db::{DbError, DbResult};
use log::{info, warn};
use rusqlite::Connection;

const ARTICLES_TABLE: &str = "articles";
const ARTICLE_COLUMNS: [&str; 4] = ["id", "designation", "purchase_price", "install_time"];
const LEGACY_COLUMN_RENAMES: [(&str, &str); 2] = [
    ("prix_achat", "purchase_price"),
    ("temps_pose", "install_time"),
];

#[derive(Clone, Copy)]
struct Migration {
    version: u32,
    /// Runs inside the migration transaction before `sql`.
    prepare: Option<fn(&Connection) -> DbResult<()>>,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    prepare: Some(adopt_existing_articles_table),
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest schema version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations in a single transaction.
///
/// # Errors
/// - `UnsupportedSchemaVersion` when the file was written by a newer binary.
/// - `SchemaMismatch` when an existing `articles` table has foreign columns.
/// - `Sqlite` when any statement fails; nothing is committed in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS
        .iter()
        .filter(|migration| migration.version > current_version)
    {
        if let Some(prepare) = migration.prepare {
            prepare(&tx)?;
        }
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={current_version} to_version={latest}"
    );
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

/// Brings an `articles` table created before schema versioning in line with
/// the expected columns. A missing table is left for `0001_init.sql`.
fn adopt_existing_articles_table(conn: &Connection) -> DbResult<()> {
    let mut columns = table_columns(conn, ARTICLES_TABLE)?;
    if columns.is_empty() {
        return Ok(());
    }

    for (legacy, current) in LEGACY_COLUMN_RENAMES {
        let has_legacy = columns.iter().any(|column| column == legacy);
        let has_current = columns.iter().any(|column| column == current);
        if has_legacy && !has_current {
            conn.execute_batch(&format!(
                "ALTER TABLE {ARTICLES_TABLE} RENAME COLUMN {legacy} TO {current};"
            ))?;
            warn!(
                "event=db_migrate module=db status=adopt table={ARTICLES_TABLE} renamed_from={legacy} renamed_to={current}"
            );
        }
    }

    columns = table_columns(conn, ARTICLES_TABLE)?;
    let matches = columns.len() == ARTICLE_COLUMNS.len()
        && ARTICLE_COLUMNS
            .iter()
            .all(|expected| columns.iter().any(|column| column == expected));
    if !matches {
        return Err(DbError::SchemaMismatch {
            table: ARTICLES_TABLE,
            columns,
        });
    }

    Ok(())
}

fn table_columns(conn: &Connection, table: &str) -> DbResult<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>("name"))?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(columns)
}
