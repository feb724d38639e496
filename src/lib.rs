//! Facade crate for the dishmatch recommendation pipeline.
//!
//! This crate re-exports the core domain types, the match scorer and the
//! session pricing components, and wires them together in
//! [`RecommendationSession`]: free text in, priced line items out.

#![forbid(unsafe_code)]

mod session;

pub use dishmatch_core::{
    Attribute, AttributeName, CatalogRecord, CatalogStore, CatalogStoreError, DietaryQuery,
    FieldValue, HealthFlag, Healthy, InterpretError, LineItem, Price, PriceSource, QueryAttributes,
    QueryInterpreter, Ranker, Ranking, ScoredRecord,
};

#[cfg(feature = "store-sqlite")]
pub use dishmatch_core::SqliteCatalogStore;

pub use dishmatch_pricing::{LineItemExpander, PriceAssigner, RandomPriceSource};
pub use dishmatch_scorer::MatchScorer;
pub use session::{Order, RecommendationSession, SessionError};
