//! One shopper's search-and-checkout session.

use std::collections::BTreeSet;

use dishmatch_core::{
    CatalogStore, CatalogStoreError, LineItem, PriceSource, QueryAttributes, QueryInterpreter,
    Ranker,
};
use dishmatch_pricing::LineItemExpander;
use log::{debug, info, warn};
use thiserror::Error;

/// Errors raised by [`RecommendationSession`].
#[derive(Debug, Error)]
pub enum SessionError {
    /// The catalog could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogStoreError),
    /// A checkout selection referred to a line item that is not shown.
    #[error("selection {index} is out of range; {available} line item(s) are available")]
    UnknownSelection {
        /// Offending index.
        index: usize,
        /// Number of line items in the current results.
        available: usize,
    },
}

/// Line items chosen at checkout and their combined price.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Order {
    /// Selected line items in ascending index order.
    pub items: Vec<LineItem>,
    /// Sum of the selected prices.
    pub total: u32,
}

/// Runs the recommendation pipeline for one shopper.
///
/// Each [`search`](Self::search) interprets the text, reads the whole
/// catalog, ranks it and expands the ranking into priced line items. The
/// price cache lives as long as the session, so a variant keeps its price
/// across searches. The latest search replaces the current results.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use dishmatch::{MatchScorer, RandomPriceSource, RecommendationSession};
/// use dishmatch_core::test_support::{MemoryCatalog, StubInterpreter};
/// use dishmatch_core::{AttributeName, CatalogRecord, QueryAttributes};
///
/// let catalog = MemoryCatalog::with_records([CatalogRecord {
///     category: "Pizza".into(),
///     ..CatalogRecord::default()
/// }]);
/// let interpreter = StubInterpreter::with_attributes(
///     QueryAttributes::new().with_text(AttributeName::Category, "pizza"),
/// );
/// let mut session = RecommendationSession::new(
///     catalog,
///     interpreter,
///     MatchScorer,
///     RandomPriceSource::seeded(3),
/// );
///
/// let prices: Vec<u32> = session
///     .search("a pizza please")?
///     .iter()
///     .map(|item| item.price.value())
///     .collect();
/// assert_eq!(prices.len(), 1);
///
/// let order = session.checkout(&BTreeSet::from([0]))?;
/// assert_eq!(Some(&order.total), prices.first());
/// # Ok::<(), dishmatch::SessionError>(())
/// ```
#[derive(Debug)]
pub struct RecommendationSession<C, I, R, S> {
    store: C,
    interpreter: I,
    ranker: R,
    expander: LineItemExpander<S>,
    results: Vec<LineItem>,
}

impl<C, I, R, S> RecommendationSession<C, I, R, S>
where
    C: CatalogStore,
    I: QueryInterpreter,
    R: Ranker,
    S: PriceSource,
{
    /// Create a session with an empty price cache and no results.
    #[must_use]
    pub fn new(store: C, interpreter: I, ranker: R, prices: S) -> Self {
        Self {
            store,
            interpreter,
            ranker,
            expander: LineItemExpander::new(prices),
            results: Vec::new(),
        }
    }

    /// Recommend priced line items for `text`.
    ///
    /// An interpreter failure is logged and treated as an empty query, which
    /// yields the popularity ranking. The catalog is read only after the
    /// interpreter has answered.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Catalog`] when the catalog cannot be read. The
    /// previous results are kept in that case.
    pub fn search(&mut self, text: &str) -> Result<&[LineItem], SessionError> {
        let attributes = self.interpreter.interpret(text).unwrap_or_else(|err| {
            warn!("query interpretation failed, using an empty query: {err}");
            QueryAttributes::new()
        });
        let catalog = self.store.all_records()?;
        debug!(
            "ranking {} catalog record(s) against {} attribute(s)",
            catalog.len(),
            attributes.len()
        );
        let ranking = self.ranker.rank(&attributes, catalog);
        let fallback = ranking.is_fallback();
        let records = ranking.into_records();
        self.results = self.expander.expand(&records);
        info!(
            "search returned {} line item(s) from {} record(s){}",
            self.results.len(),
            records.len(),
            if fallback { " by popularity" } else { "" }
        );
        Ok(&self.results)
    }

    /// Return the line items from the latest successful search.
    #[must_use]
    pub fn results(&self) -> &[LineItem] {
        &self.results
    }

    /// Resolve `selection` against the current results.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownSelection`] for the first index that
    /// does not name a current line item.
    pub fn checkout(&self, selection: &BTreeSet<usize>) -> Result<Order, SessionError> {
        let mut order = Order::default();
        for &index in selection {
            let item = self
                .results
                .get(index)
                .ok_or(SessionError::UnknownSelection {
                    index,
                    available: self.results.len(),
                })?;
            order.total = order.total.saturating_add(item.price.value());
            order.items.push(item.clone());
        }
        Ok(order)
    }

    /// Borrow the session's line-item expander and its price cache.
    pub const fn expander(&self) -> &LineItemExpander<S> {
        &self.expander
    }
}
