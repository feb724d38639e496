//! Rank catalog records against structured query attributes.
//!
//! The `Ranker` trait turns a [`QueryAttributes`](crate::QueryAttributes)
//! value and the full catalog into an ordered [`Ranking`]. Rankers are pure:
//! records in, ranked records out. Store and interpreter failures are the
//! caller's concern.

use crate::{CatalogRecord, QueryAttributes};

/// A catalog record together with its per-query match score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRecord {
    /// The scored record.
    pub record: CatalogRecord,
    /// Number of query attributes the record satisfies.
    pub match_score: u32,
}

/// Ordered output of a [`Ranker`].
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    /// Records that matched at least one attribute, best first.
    Matched(Vec<ScoredRecord>),
    /// Nothing matched; the whole catalog ordered by rating.
    Popular(Vec<CatalogRecord>),
}

impl Ranking {
    /// Report whether the popularity fallback produced this ranking.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Popular(_))
    }

    /// Return the number of ranked records.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Matched(records) => records.len(),
            Self::Popular(records) => records.len(),
        }
    }

    /// Report whether the ranking holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discard scores and return the records in ranked order.
    #[must_use]
    pub fn into_records(self) -> Vec<CatalogRecord> {
        match self {
            Self::Matched(records) => records.into_iter().map(|scored| scored.record).collect(),
            Self::Popular(records) => records,
        }
    }
}

/// Order catalog records by relevance to a query.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and infallible:
/// attribute values that cannot be compared simply do not match.
///
/// # Examples
///
/// ```rust
/// use dishmatch_core::{CatalogRecord, QueryAttributes, Ranker, Ranking};
///
/// struct CatalogOrder;
///
/// impl Ranker for CatalogOrder {
///     fn rank(&self, _attributes: &QueryAttributes, catalog: Vec<CatalogRecord>) -> Ranking {
///         Ranking::Popular(catalog)
///     }
/// }
///
/// let ranking = CatalogOrder.rank(&QueryAttributes::new(), vec![CatalogRecord::default()]);
/// assert!(ranking.is_fallback());
/// assert_eq!(ranking.len(), 1);
/// ```
pub trait Ranker: Send + Sync {
    /// Rank `catalog` against `attributes`.
    fn rank(&self, attributes: &QueryAttributes, catalog: Vec<CatalogRecord>) -> Ranking;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(category: &str) -> CatalogRecord {
        CatalogRecord {
            category: category.into(),
            ..CatalogRecord::default()
        }
    }

    #[rstest]
    fn matched_records_drop_scores_in_order() {
        let ranking = Ranking::Matched(vec![
            ScoredRecord {
                record: record("Pizza"),
                match_score: 2,
            },
            ScoredRecord {
                record: record("Salad"),
                match_score: 1,
            },
        ]);

        assert!(!ranking.is_fallback());
        let categories: Vec<_> = ranking
            .into_records()
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["Pizza", "Salad"]);
    }

    #[rstest]
    fn empty_fallback_reports_empty() {
        assert!(Ranking::Popular(Vec::new()).is_empty());
    }
}
