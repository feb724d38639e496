//! Session pricing and line-item expansion for ranked catalog records.
//!
//! A [`PriceAssigner`] remembers the first price drawn for every
//! (category, variant) pair so repeated searches in one session agree.
//! Every milkshake variant shares a single price. The
//! [`LineItemExpander`] turns ranked records into one
//! [`LineItem`](dishmatch_core::LineItem) per variant, pricing each through
//! its assigner.
//!
//! # Examples
//!
//! ```
//! use dishmatch_core::{CatalogRecord, FieldValue};
//! use dishmatch_pricing::{LineItemExpander, RandomPriceSource};
//!
//! let record = CatalogRecord {
//!     category: "Pizza".into(),
//!     subcategory: Some(FieldValue::List(vec!["Margherita".into(), "Pepperoni".into()])),
//!     ..CatalogRecord::default()
//! };
//! let mut expander = LineItemExpander::new(RandomPriceSource::seeded(7));
//!
//! let first = expander.expand(std::slice::from_ref(&record));
//! let second = expander.expand(&[record]);
//!
//! assert_eq!(first.len(), 2);
//! assert_eq!(first, second);
//! ```

#![forbid(unsafe_code)]

mod assigner;
mod expander;
mod source;

pub use assigner::{MILKSHAKE, PriceAssigner, PriceKey};
pub use expander::LineItemExpander;
pub use source::RandomPriceSource;
