//! SQLite-backed catalog store holding one JSON document per record.

use std::{fmt, path::Path};

use rusqlite::{Connection, OpenFlags};

use crate::CatalogRecord;

use super::{CatalogStore, CatalogStoreError};

/// Table holding catalog documents keyed by identifier.
pub const CATALOG_TABLE: &str = "catalog";

/// Read-only catalog store backed by a SQLite document table.
///
/// Documents are read on every call so the store always reflects the
/// database, and are returned ordered by identifier.
pub struct SqliteCatalogStore {
    connection: Connection,
}

impl fmt::Debug for SqliteCatalogStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqliteCatalogStore")
            .field("path", &self.connection.path())
            .finish_non_exhaustive()
    }
}

impl SqliteCatalogStore {
    /// Open the catalog database at `database_path` read-only.
    ///
    /// # Errors
    /// Returns [`CatalogStoreError::Unavailable`] when SQLite refuses to open
    /// the file.
    pub fn open<P: AsRef<Path>>(database_path: P) -> Result<Self, CatalogStoreError> {
        let database_path = database_path.as_ref();
        let connection =
            Connection::open_with_flags(database_path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(
                |source| CatalogStoreError::Unavailable {
                    message: format!(
                        "failed to open SQLite database at {}",
                        database_path.display()
                    ),
                    source: Some(source.into()),
                },
            )?;
        Ok(Self { connection })
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn all_records(&self) -> Result<Vec<CatalogRecord>, CatalogStoreError> {
        let query = format!("SELECT id, document FROM {CATALOG_TABLE} ORDER BY id");
        let mut statement = self
            .connection
            .prepare(&query)
            .map_err(|source| query_failed("prepare catalog read", source))?;
        let mut rows = statement
            .query([])
            .map_err(|source| query_failed("query catalog", source))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|source| query_failed("read catalog row", source))?
        {
            let id: String = row
                .get(0)
                .map_err(|source| query_failed("read document id", source))?;
            let document: String = row
                .get(1)
                .map_err(|source| query_failed("read document body", source))?;
            let record = serde_json::from_str(&document)
                .map_err(|source| CatalogStoreError::InvalidDocument { id, source })?;
            records.push(record);
        }
        Ok(records)
    }
}

fn query_failed(operation: &str, source: rusqlite::Error) -> CatalogStoreError {
    CatalogStoreError::Unavailable {
        message: format!("failed to {operation}"),
        source: Some(source.into()),
    }
}
