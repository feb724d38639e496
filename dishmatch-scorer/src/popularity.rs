//! Popularity ordering used when no record matches a query.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use dishmatch_core::CatalogRecord;

/// Order `catalog` by average rating, highest first.
///
/// The sort is stable so equal ratings keep catalog order. Non-finite
/// ratings sort after every finite rating.
///
/// # Examples
/// ```
/// use dishmatch_core::CatalogRecord;
/// use dishmatch_scorer::popularity_order;
///
/// let catalog: Vec<_> = [4.2, 3.8, 4.5]
///     .into_iter()
///     .map(|average_rating| CatalogRecord { average_rating, ..CatalogRecord::default() })
///     .collect();
///
/// let ratings: Vec<f64> = popularity_order(catalog)
///     .iter()
///     .map(|r| r.average_rating)
///     .collect();
/// assert_eq!(ratings, vec![4.5, 4.2, 3.8]);
/// ```
#[must_use]
pub fn popularity_order(mut catalog: Vec<CatalogRecord>) -> Vec<CatalogRecord> {
    catalog.sort_by(|left, right| compare_ratings(right.average_rating, left.average_rating));
    catalog
}

fn compare_ratings(left: f64, right: f64) -> Ordering {
    match (left.is_finite(), right.is_finite()) {
        (true, true) => left.total_cmp(&right),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => Ordering::Equal,
    }
}
