//! Data access traits for the dish catalog.
//!
//! The `CatalogStore` trait defines a bulk read of every stored
//! [`CatalogRecord`]. Stores do no filtering; ranking happens downstream.

use thiserror::Error;

use crate::CatalogRecord;

#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use sqlite::{CATALOG_TABLE, SqliteCatalogStore};

/// Errors raised while reading the catalog.
///
/// Catalog failures are not recovered from: callers propagate them.
#[derive(Debug, Error)]
pub enum CatalogStoreError {
    /// The backing store could not be opened or queried.
    #[error("catalog store unavailable: {message}")]
    Unavailable {
        /// Description of the failure.
        message: String,
        /// Underlying error, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// A stored document could not be decoded into a record.
    #[cfg(feature = "serde")]
    #[error("catalog document {id} is malformed: {source}")]
    InvalidDocument {
        /// Identifier of the offending document.
        id: String,
        /// JSON decoding failure.
        #[source]
        source: serde_json::Error,
    },
}

impl CatalogStoreError {
    /// Construct an [`CatalogStoreError::Unavailable`] without a source.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
            source: None,
        }
    }
}

/// Read-only access to the stored catalog.
///
/// Implementers return every record in a stable order; ties in ranking keep
/// this order.
///
/// # Examples
///
/// ```rust
/// use dishmatch_core::{CatalogRecord, CatalogStore, CatalogStoreError};
///
/// struct FixedStore(Vec<CatalogRecord>);
///
/// impl CatalogStore for FixedStore {
///     fn all_records(&self) -> Result<Vec<CatalogRecord>, CatalogStoreError> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let store = FixedStore(vec![CatalogRecord::default()]);
/// assert_eq!(store.all_records()?.len(), 1);
/// # Ok::<(), CatalogStoreError>(())
/// ```
pub trait CatalogStore {
    /// Return every stored record.
    fn all_records(&self) -> Result<Vec<CatalogRecord>, CatalogStoreError>;
}
