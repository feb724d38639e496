#![expect(
    clippy::expect_used,
    reason = "behaviour tests use expect for readable failures"
)]

//! Behavioural coverage for attribute matching and the popularity fallback.

use std::cell::RefCell;

use dishmatch_core::{
    AttributeName, CatalogRecord, DietaryQuery, FieldValue, QueryAttributes, Ranker, Ranking,
};
use dishmatch_scorer::MatchScorer;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// World state shared by the match scoring scenarios.
#[derive(Debug, Default)]
struct ScorerWorld {
    catalog: RefCell<Vec<CatalogRecord>>,
    ranking: RefCell<Option<Ranking>>,
}

impl ScorerWorld {
    fn rank(&self, query: &QueryAttributes) {
        let catalog = self.catalog.borrow().clone();
        self.ranking.replace(Some(MatchScorer.rank(query, catalog)));
    }

    fn ranking(&self) -> Ranking {
        self.ranking
            .borrow()
            .clone()
            .expect("ranking should be recorded")
    }
}

#[fixture]
fn world() -> ScorerWorld {
    ScorerWorld::default()
}

fn dish(category: &str, taste: &str, price_tier: &str, rating: f64) -> CatalogRecord {
    CatalogRecord {
        category: category.into(),
        taste: taste.into(),
        price_tier: price_tier.into(),
        average_rating: rating,
        ..CatalogRecord::default()
    }
}

#[given("a catalog with a lactose intolerant milkshake and a cookie")]
fn given_lactose_catalog(world: &ScorerWorld) {
    let shake = CatalogRecord {
        dietary_restriction: Some(FieldValue::Text("lactose intolerant".into())),
        ..dish("Milkshake", "Sweet", "medium", 4.8)
    };
    world
        .catalog
        .replace(vec![shake, dish("Cookie", "Sweet", "cheap", 3.2)]);
}

#[given("a catalog rated 4.2 then 3.8 then 4.5")]
fn given_rated_catalog(world: &ScorerWorld) {
    world.catalog.replace(vec![
        dish("Pizza", "Savory", "medium", 4.2),
        dish("Burger", "Savory", "cheap", 3.8),
        dish("Sushi", "Umami", "premium", 4.5),
    ]);
}

#[given("a catalog where one dish matches two attributes and another matches three")]
fn given_scoring_catalog(world: &ScorerWorld) {
    world.catalog.replace(vec![
        dish("Ice Cream", "Sweet", "medium", 4.9),
        dish("Ice Cream", "Sweet", "cheap", 3.1),
    ]);
}

#[given("a catalog with a sweet milkshake")]
fn given_sweet_catalog(world: &ScorerWorld) {
    world
        .catalog
        .replace(vec![dish("Milkshake", "Sweet", "medium", 4.0)]);
}

#[when("a shopper asks for a sweet medium milkshake without lactose")]
fn when_lactose_query(world: &ScorerWorld) {
    let query = QueryAttributes::new()
        .with_text(AttributeName::Category, "milkshake")
        .with_text(AttributeName::Taste, "sweet")
        .with_text(AttributeName::PriceTier, "medium")
        .with_dietary(DietaryQuery::Single("lactose intolerant".into()));
    world.rank(&query);
}

#[when("a shopper asks for something no dish offers")]
fn when_unmatched_query(world: &ScorerWorld) {
    let query = QueryAttributes::new()
        .with_text(AttributeName::Category, "ramen")
        .with_text(AttributeName::Taste, "bitter");
    world.rank(&query);
}

#[when("a shopper asks for a cheap sweet ice cream")]
fn when_ice_cream_query(world: &ScorerWorld) {
    let query = QueryAttributes::new()
        .with_text(AttributeName::Category, "ice cream")
        .with_text(AttributeName::Taste, "sweet")
        .with_text(AttributeName::PriceTier, "cheap");
    world.rank(&query);
}

#[when("a shopper asks for SWEET taste")]
fn when_upper_case_query(world: &ScorerWorld) {
    let query = QueryAttributes::new().with_text(AttributeName::Taste, "SWEET");
    world.rank(&query);
}

#[then("only the cookie is ranked")]
fn then_only_cookie(world: &ScorerWorld) {
    let records = world.ranking().into_records();
    let categories: Vec<_> = records.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["Cookie"]);
}

#[then("the ranked ratings are 4.5 then 4.2 then 3.8")]
#[expect(clippy::float_cmp, reason = "ratings are copied, not computed")]
fn then_popularity_order(world: &ScorerWorld) {
    let ranking = world.ranking();
    assert!(ranking.is_fallback(), "expected the popularity fallback");
    let ratings: Vec<f64> = ranking
        .into_records()
        .iter()
        .map(|r| r.average_rating)
        .collect();
    assert_eq!(ratings, vec![4.5, 4.2, 3.8]);
}

#[then("the three point dish ranks above the two point dish")]
fn then_scores_accumulate(world: &ScorerWorld) {
    let Ranking::Matched(scored) = world.ranking() else {
        panic!("expected matched ranking");
    };
    let scores: Vec<(&str, u32)> = scored
        .iter()
        .map(|s| (s.record.price_tier.as_str(), s.match_score))
        .collect();
    assert_eq!(scores, vec![("cheap", 3), ("medium", 2)]);
}

#[then("the milkshake is ranked with score 1")]
fn then_case_insensitive(world: &ScorerWorld) {
    let Ranking::Matched(scored) = world.ranking() else {
        panic!("expected matched ranking");
    };
    let scores: Vec<(&str, u32)> = scored
        .iter()
        .map(|s| (s.record.category.as_str(), s.match_score))
        .collect();
    assert_eq!(scores, vec![("Milkshake", 1)]);
}

#[scenario(path = "tests/features/match_scorer.feature", index = 0)]
fn dietary_exclusion(world: ScorerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_scorer.feature", index = 1)]
fn popularity_fallback(world: ScorerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_scorer.feature", index = 2)]
fn score_accumulation(world: ScorerWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/match_scorer.feature", index = 3)]
fn case_insensitive_matching(world: ScorerWorld) {
    let _ = world;
}
