//! Core domain types for the dishmatch recommendation pipeline.
//!
//! The crate defines the catalog data model, the structured query
//! attributes, priced line items, and the traits at each collaborator seam:
//! [`CatalogStore`] for the document store, [`QueryInterpreter`] for the
//! natural-language service, [`Ranker`] for matching, and [`PriceSource`]
//! for price draws.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attributes;
pub mod interpreter;
mod line_item;
pub mod price;
pub mod ranking;
pub mod record;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use attributes::{Attribute, AttributeName, DIETARY_RESTRICTIONS, DietaryQuery, QueryAttributes};
pub use interpreter::{InterpretError, QueryInterpreter};
pub use line_item::LineItem;
pub use price::{Price, PriceSource};
pub use ranking::{Ranker, Ranking, ScoredRecord};
pub use record::{CatalogRecord, FieldValue, HealthFlag, Healthy};
pub use store::{CatalogStore, CatalogStoreError};

#[cfg(feature = "store-sqlite")]
pub use store::{CATALOG_TABLE, SqliteCatalogStore};
