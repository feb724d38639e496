//! Attribute matching for dishmatch catalog records.
//!
//! [`MatchScorer`] implements the [`Ranker`](dishmatch_core::Ranker) trait:
//! - **Exclusion**: a query naming a single dietary restriction removes
//!   every record carrying that same restriction, however well it matches
//!   otherwise.
//! - **Scoring**: each remaining record earns one point per query attribute
//!   it satisfies. Text attributes compare case-insensitively; a list of
//!   dietary restrictions scores when it shares an element with the
//!   record's own list.
//! - **Popularity fallback**: when no record scores, the whole catalog is
//!   returned ordered by average rating, with no dietary filtering.
//!
//! Both orderings are stable, so ties keep catalog order.
//!
//! # Examples
//!
//! ```
//! use dishmatch_core::{AttributeName, CatalogRecord, QueryAttributes, Ranker};
//! use dishmatch_scorer::MatchScorer;
//!
//! let catalog = vec![
//!     CatalogRecord { category: "Pizza".into(), taste: "Savory".into(), ..CatalogRecord::default() },
//!     CatalogRecord { category: "Milkshake".into(), taste: "Sweet".into(), ..CatalogRecord::default() },
//! ];
//! let query = QueryAttributes::new().with_text(AttributeName::Taste, "SWEET");
//!
//! let ranking = MatchScorer.rank(&query, catalog);
//!
//! let records = ranking.into_records();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.first().map(|r| r.category.as_str()), Some("Milkshake"));
//! ```

#![forbid(unsafe_code)]

mod matcher;
mod popularity;

pub use matcher::{MatchScorer, is_excluded, match_score};
pub use popularity::popularity_order;
