//! SQLite persistence for the seeded catalog.
#![forbid(unsafe_code)]

use camino::{Utf8Path, Utf8PathBuf};
use dishmatch_core::CATALOG_TABLE;
use dishmatch_fs::ensure_parent_dir;
use log::info;
use rusqlite::{Connection, Error as SqliteError, Transaction};
use serde_json::to_string;
use thiserror::Error;

use crate::SeedEntry;

/// Errors raised when persisting catalog documents to SQLite.
#[derive(Debug, Error)]
pub enum PersistCatalogError {
    /// Failed to create the parent directory for the database.
    #[error("failed to create parent directory for {path}")]
    CreateDirectory {
        /// Database path whose parent could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}")]
    Open {
        /// Destination database path.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the transaction failed.
    #[error("failed to begin catalog persistence transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating the catalog table failed.
    #[error("failed to create catalog table")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing the upsert statement failed.
    #[error("failed to prepare catalog insert statement")]
    PrepareInsert {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Serialising a record to JSON failed.
    #[error("failed to serialise catalog record {id}")]
    SerializeRecord {
        /// Identifier of the record.
        id: String,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing a row failed.
    #[error("failed to persist catalog record {id}")]
    PersistRow {
        /// Identifier of the record.
        id: String,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the transaction failed.
    #[error("failed to commit catalog persistence transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Write catalog documents to a SQLite database on disk.
///
/// The write is idempotent: rows are replaced when identifiers already
/// exist. Parent directories are created and the catalog table is initialised
/// if missing. Every entry is written in one transaction.
///
/// # Errors
///
/// Returns [`PersistCatalogError`] describing the step that failed; nothing
/// is committed in that case.
pub fn persist_catalog_to_sqlite(
    path: &Utf8Path,
    entries: &[SeedEntry],
) -> Result<(), PersistCatalogError> {
    ensure_parent_dir(path).map_err(|source| PersistCatalogError::CreateDirectory {
        path: path.to_path_buf(),
        source,
    })?;
    let mut connection =
        Connection::open(path.as_std_path()).map_err(|source| PersistCatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let transaction = connection
        .transaction()
        .map_err(|source| PersistCatalogError::BeginTransaction { source })?;

    create_schema(&transaction)?;
    persist_rows(&transaction, entries)?;

    transaction
        .commit()
        .map_err(|source| PersistCatalogError::Commit { source })?;
    info!("persisted {} catalog record(s) to {path}", entries.len());
    Ok(())
}

fn create_schema(transaction: &Transaction<'_>) -> Result<(), PersistCatalogError> {
    transaction
        .execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS {CATALOG_TABLE} (
                    id TEXT PRIMARY KEY,
                    document TEXT NOT NULL
                )"
            ),
            [],
        )
        .map(|_| ())
        .map_err(|source| PersistCatalogError::CreateSchema { source })
}

fn persist_rows(
    transaction: &Transaction<'_>,
    entries: &[SeedEntry],
) -> Result<(), PersistCatalogError> {
    if entries.is_empty() {
        return Ok(());
    }

    let mut statement = transaction
        .prepare(&format!(
            "INSERT OR REPLACE INTO {CATALOG_TABLE} (id, document) VALUES (?1, ?2)"
        ))
        .map_err(|source| PersistCatalogError::PrepareInsert { source })?;

    for entry in entries {
        let document =
            to_string(&entry.record).map_err(|source| PersistCatalogError::SerializeRecord {
                id: entry.id.clone(),
                source,
            })?;
        statement
            .execute((entry.id.as_str(), document))
            .map_err(|source| PersistCatalogError::PersistRow {
                id: entry.id.clone(),
                source,
            })?;
    }
    Ok(())
}
