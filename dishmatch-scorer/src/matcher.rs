//! Exclusion and per-attribute scoring of catalog records.
#![forbid(unsafe_code)]

use dishmatch_core::{
    Attribute, CatalogRecord, DietaryQuery, QueryAttributes, Ranker, Ranking, ScoredRecord,
};
use log::debug;

use crate::popularity_order;

/// Ranker that counts satisfied query attributes per record.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchScorer;

impl Ranker for MatchScorer {
    fn rank(&self, attributes: &QueryAttributes, catalog: Vec<CatalogRecord>) -> Ranking {
        let scores: Vec<Option<u32>> = catalog
            .iter()
            .map(|record| {
                if is_excluded(attributes, record) {
                    None
                } else {
                    Some(match_score(attributes, record))
                }
            })
            .collect();

        if !scores.iter().flatten().any(|&score| score > 0) {
            debug!(
                "no catalog record matched {} attribute(s); ranking {} record(s) by popularity",
                attributes.len(),
                catalog.len()
            );
            return Ranking::Popular(popularity_order(catalog));
        }

        let excluded = scores.iter().filter(|score| score.is_none()).count();
        let mut matched: Vec<ScoredRecord> = catalog
            .into_iter()
            .zip(scores)
            .filter_map(|(record, score)| {
                score
                    .filter(|&points| points > 0)
                    .map(|match_score| ScoredRecord {
                        record,
                        match_score,
                    })
            })
            .collect();
        // `sort_by` is stable: equal scores keep catalog order.
        matched.sort_by(|left, right| right.match_score.cmp(&left.match_score));
        debug!(
            "{} record(s) matched, {excluded} excluded by dietary restriction",
            matched.len()
        );
        Ranking::Matched(matched)
    }
}

/// Report whether the query's single dietary restriction rules `record` out.
///
/// Only a single-valued query restriction against a single-valued record
/// restriction can exclude; list-valued restrictions take part in scoring
/// instead.
///
/// # Examples
/// ```
/// use dishmatch_core::{CatalogRecord, DietaryQuery, FieldValue, QueryAttributes};
/// use dishmatch_scorer::is_excluded;
///
/// let record = CatalogRecord {
///     dietary_restriction: Some(FieldValue::Text("Lactose Intolerant".into())),
///     ..CatalogRecord::default()
/// };
/// let query = QueryAttributes::new()
///     .with_dietary(DietaryQuery::Single("lactose intolerant".into()));
///
/// assert!(is_excluded(&query, &record));
/// ```
#[must_use]
pub fn is_excluded(attributes: &QueryAttributes, record: &CatalogRecord) -> bool {
    let Some(DietaryQuery::Single(requested)) = attributes.dietary() else {
        return false;
    };
    record
        .dietary_restriction
        .as_ref()
        .and_then(|restriction| restriction.as_text())
        .is_some_and(|restriction| eq_ignore_case(restriction, requested))
}

/// Count the query attributes `record` satisfies.
///
/// Missing record fields never match. A single-valued dietary restriction
/// never scores; it only drives [`is_excluded`].
#[must_use]
pub fn match_score(attributes: &QueryAttributes, record: &CatalogRecord) -> u32 {
    let mut score = 0_u32;
    for attribute in attributes {
        if attribute_matches(attribute, record) {
            score = score.saturating_add(1);
        }
    }
    score
}

fn attribute_matches(attribute: &Attribute, record: &CatalogRecord) -> bool {
    match attribute {
        Attribute::Text { name, value } => record
            .attribute_text(*name)
            .is_some_and(|text| eq_ignore_case(&text, value)),
        Attribute::DietaryRestrictions(DietaryQuery::AnyOf(requested)) => record
            .dietary_restriction
            .as_ref()
            .and_then(|restriction| restriction.as_list())
            .is_some_and(|held| held.iter().any(|item| requested.contains(item))),
        Attribute::DietaryRestrictions(DietaryQuery::Single(_)) => false,
    }
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}
