//! Expand ranked records into priced line items.

use dishmatch_core::{CatalogRecord, LineItem, PriceSource};
use log::debug;

use crate::PriceAssigner;

/// Turns ranked records into one [`LineItem`] per variant.
///
/// A record with a list of variants yields one item per element, in list
/// order. A single variant yields one item; an absent variant yields one item
/// with an empty variant name. An empty list yields nothing.
#[derive(Debug)]
pub struct LineItemExpander<S> {
    prices: PriceAssigner<S>,
}

impl<S: PriceSource> LineItemExpander<S> {
    /// Create an expander with an empty price cache drawing from `source`.
    pub fn new(source: S) -> Self {
        Self::with_assigner(PriceAssigner::new(source))
    }

    /// Create an expander around an existing price cache.
    pub const fn with_assigner(prices: PriceAssigner<S>) -> Self {
        Self { prices }
    }

    /// Expand `records` in order, pricing every variant.
    pub fn expand(&mut self, records: &[CatalogRecord]) -> Vec<LineItem> {
        let mut items = Vec::new();
        for record in records {
            for variant in record.variant_names() {
                items.push(self.item(record, variant));
            }
        }
        debug!(
            "expanded {} record(s) into {} line item(s)",
            records.len(),
            items.len()
        );
        items
    }

    /// Borrow the session price cache.
    pub const fn prices(&self) -> &PriceAssigner<S> {
        &self.prices
    }

    fn item(&mut self, record: &CatalogRecord, variant: &str) -> LineItem {
        let price = self.prices.price_for(&record.category, variant);
        LineItem::from_record(record, variant, price)
    }
}
