//! Focused unit tests covering CLI configuration and command wiring.

use super::helpers::{StubInterpreterBuilder, Workspace};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, parse_selection, recommend_with,
    run_recommend_with,
};
use crate::seed::SeedConfig;
use camino::Utf8PathBuf;
use dishmatch::SessionError;
use dishmatch_core::test_support::StubInterpreter;
use dishmatch_core::{AttributeName, InterpretError, QueryAttributes};
use rstest::rstest;
use std::collections::BTreeSet;
use url::Url;

fn config(workspace: &Workspace, selection: Option<BTreeSet<usize>>) -> RecommendConfig {
    RecommendConfig {
        query: "something".to_owned(),
        database: workspace.database(),
        interpreter_url: Url::parse(dishmatch_data::DEFAULT_ENDPOINT)
            .unwrap_or_else(|err| panic!("default endpoint: {err}")),
        price_seed: Some(9),
        selection,
    }
}

fn pizza() -> StubInterpreter {
    StubInterpreter::with_attributes(
        QueryAttributes::new().with_text(AttributeName::Category, "pizza"),
    )
}

#[rstest]
fn converting_recommend_without_query_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default()).err();
    match err {
        Some(CliError::MissingArgument { field, env }) => {
            assert_eq!(field, ARG_QUERY);
            assert_eq!(env, ENV_QUERY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn recommend_config_applies_defaults() {
    let args = RecommendArgs {
        query: Some("pizza".to_owned()),
        ..RecommendArgs::default()
    };

    let config =
        RecommendConfig::try_from(args).unwrap_or_else(|err| panic!("config should build: {err}"));

    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
    assert_eq!(config.interpreter_url.as_str(), dishmatch_data::DEFAULT_ENDPOINT);
    assert_eq!(config.price_seed, None);
    assert_eq!(config.selection, None);
}

#[rstest]
fn malformed_interpreter_url_is_rejected() {
    let args = RecommendArgs {
        query: Some("pizza".to_owned()),
        interpreter_url: Some("localhost interpret".to_owned()),
        ..RecommendArgs::default()
    };

    let err = RecommendConfig::try_from(args).err();
    match err {
        Some(CliError::InvalidUrl { field, value, .. }) => {
            assert_eq!(field, ARG_INTERPRETER_URL);
            assert_eq!(value, "localhost interpret");
        }
        other => panic!("expected InvalidUrl, found {other:?}"),
    }
}

#[rstest]
#[case("0,2", &[0, 2])]
#[case(" 3 , 1,3 ", &[1, 3])]
#[case("", &[])]
#[case("4,", &[4])]
fn selections_parse_into_index_sets(#[case] value: &str, #[case] expected: &[usize]) {
    let parsed = parse_selection(value).unwrap_or_else(|err| panic!("parse {value:?}: {err}"));
    assert_eq!(parsed, expected.iter().copied().collect::<BTreeSet<_>>());
}

#[rstest]
#[case("one,two")]
#[case("-1")]
#[case("1;2")]
fn malformed_selections_are_rejected(#[case] value: &str) {
    let err = parse_selection(value).err();
    assert!(
        matches!(err, Some(CliError::InvalidSelection { field: ARG_SELECT, .. })),
        "expected InvalidSelection, found {err:?}"
    );
}

#[rstest]
fn missing_database_is_reported_before_searching() {
    let workspace = Workspace::new();

    let err = config(&workspace, None).validate_sources().err();

    match err {
        Some(CliError::MissingSourceFile { field, path }) => {
            assert_eq!(field, ARG_DATABASE);
            assert_eq!(path, workspace.database());
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn seed_reports_record_count() {
    let workspace = Workspace::new();

    let output = workspace.seed();

    let expected = dishmatch_data::seed_catalog().len();
    assert_eq!(
        output.trim(),
        format!(
            "seeded {expected} catalog record(s) into {}",
            workspace.database()
        )
    );
}

#[rstest]
fn seed_config_defaults_database() {
    let config = SeedConfig::from(crate::seed::SeedArgs::default());
    assert_eq!(config.database, Utf8PathBuf::from(DEFAULT_DATABASE));
}

#[rstest]
fn recommend_lists_matching_variants_with_seeded_prices() {
    let workspace = Workspace::new();
    workspace.seed();

    let first = recommend_with(&config(&workspace, None), pizza())
        .unwrap_or_else(|err| panic!("recommend: {err}"));
    let second = recommend_with(&config(&workspace, None), pizza())
        .unwrap_or_else(|err| panic!("recommend: {err}"));

    let names: Vec<_> = first.items.iter().map(|i| i.subcategory.as_str()).collect();
    assert_eq!(names, vec!["Margherita", "Farmhouse", "Pepperoni"]);
    assert_eq!(first.items, second.items);
    assert!(first.order.is_none());
}

#[rstest]
fn interpreter_failure_lists_the_whole_catalog() {
    let workspace = Workspace::new();
    workspace.seed();
    let failing = StubInterpreter::with_error(InterpretError::Network {
        url: dishmatch_data::DEFAULT_ENDPOINT.to_owned(),
        message: "connection refused".to_owned(),
    });

    let output = recommend_with(&config(&workspace, None), failing)
        .unwrap_or_else(|err| panic!("recommend: {err}"));

    let variant_count: usize = dishmatch_data::seed_catalog()
        .iter()
        .map(|entry| {
            entry
                .record
                .subcategory
                .as_ref()
                .and_then(|s| s.as_list().map(<[String]>::len))
                .unwrap_or(1)
        })
        .sum();
    assert_eq!(output.items.len(), variant_count);
    assert_eq!(
        output.items.first().map(|i| i.category.as_str()),
        Some("Sushi")
    );
}

#[rstest]
fn selection_produces_an_order() {
    let workspace = Workspace::new();
    workspace.seed();

    let output = recommend_with(&config(&workspace, Some(BTreeSet::from([0, 2]))), pizza())
        .unwrap_or_else(|err| panic!("recommend: {err}"));

    let order = output
        .order
        .unwrap_or_else(|| panic!("selection should produce an order"));
    let expected: u32 = [0, 2]
        .iter()
        .filter_map(|&i| output.items.get(i))
        .map(|item| item.price.value())
        .sum();
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.total, expected);
}

#[rstest]
fn out_of_range_selection_fails() {
    let workspace = Workspace::new();
    workspace.seed();

    let err = recommend_with(&config(&workspace, Some(BTreeSet::from([3]))), pizza()).err();

    assert!(
        matches!(
            err,
            Some(CliError::Session(SessionError::UnknownSelection {
                index: 3,
                available: 3
            }))
        ),
        "expected UnknownSelection, found {err:?}"
    );
}

#[rstest]
fn run_recommend_prints_json() {
    let workspace = Workspace::new();
    workspace.seed();
    let args = RecommendArgs {
        query: Some("pizza".to_owned()),
        database: Some(workspace.database()),
        price_seed: Some(1),
        select: Some("1".to_owned()),
        ..RecommendArgs::default()
    };
    let builder = StubInterpreterBuilder {
        interpreter: pizza(),
    };
    let mut stdout = Vec::new();

    run_recommend_with(args, &builder, &mut stdout)
        .unwrap_or_else(|err| panic!("run recommend: {err}"));

    let json: serde_json::Value =
        serde_json::from_slice(&stdout).unwrap_or_else(|err| panic!("JSON output: {err}"));
    assert_eq!(json["items"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["order"]["items"][0]["subcategory"], "Farmhouse");
    assert!(json["order"]["total"].is_u64());
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "price_seed": "not a number" }));

    let err = config_from_layers_for_test(composer.layers()).err();
    assert!(
        matches!(err, Some(CliError::Configuration(_))),
        "expected Configuration, found {err:?}"
    );
}

#[rstest]
fn merge_layers_honours_precedence() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "database": "from-file.db",
            "interpreter_url": "http://from-file:8000/interpret",
        }),
        None,
    );
    composer.push_environment(json!({
        "query": "from env",
        "database": "from-env.db",
    }));
    composer.push_cli(json!({ "database": "from-cli.db" }));

    let config = config_from_layers_for_test(composer.layers())
        .unwrap_or_else(|err| panic!("merged config should build: {err}"));

    assert_eq!(config.query, "from env");
    assert_eq!(config.database, Utf8PathBuf::from("from-cli.db"));
    assert_eq!(
        config.interpreter_url.as_str(),
        "http://from-file:8000/interpret"
    );
}

#[rstest]
fn cli_parses_recommend_arguments() {
    let cli = Cli::try_parse_from([
        "dishmatch",
        "recommend",
        "something sweet",
        "--database",
        "shop.db",
        "--price-seed",
        "4",
        "--select",
        "0,1",
    ])
    .unwrap_or_else(|err| panic!("parse: {err}"));

    match cli.command {
        Command::Recommend(args) => {
            assert_eq!(args.query.as_deref(), Some("something sweet"));
            assert_eq!(args.database, Some(Utf8PathBuf::from("shop.db")));
            assert_eq!(args.price_seed, Some(4));
            assert_eq!(args.select.as_deref(), Some("0,1"));
        }
        Command::Seed(_) => panic!("expected recommend command"),
    }
}
