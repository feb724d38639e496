//! Recommend command implementation for the dishmatch CLI.

use std::collections::BTreeSet;
use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dishmatch::{MatchScorer, Order, RecommendationSession};
use dishmatch_core::{LineItem, QueryInterpreter, SqliteCatalogStore};
use dishmatch_data::{DEFAULT_ENDPOINT, HttpQueryInterpreter, HttpQueryInterpreterConfig};
use dishmatch_pricing::RandomPriceSource;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    ARG_DATABASE, ARG_INTERPRETER_URL, ARG_PRICE_SEED, ARG_QUERY, ARG_SELECT, CliError,
    DEFAULT_DATABASE, ENV_QUERY,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Interpret a free-text request, rank the catalog against it \
                 and print the priced line items as JSON. Pass --select to \
                 check out a subset of the listed items.",
    about = "Recommend dishes for a request"
)]
#[ortho_config(prefix = "DISHMATCH")]
pub(crate) struct RecommendArgs {
    /// Free-text request, e.g. "something sweet without lactose".
    #[arg(value_name = "query")]
    #[serde(default)]
    pub(crate) query: Option<String>,
    /// Path to the SQLite catalog database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
    /// Endpoint of the query interpreter service.
    #[arg(long = ARG_INTERPRETER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) interpreter_url: Option<String>,
    /// Seed for reproducible prices.
    #[arg(long = ARG_PRICE_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) price_seed: Option<u64>,
    /// Comma-separated line item indices to check out.
    #[arg(long = ARG_SELECT, value_name = "i,j,...")]
    #[serde(default)]
    pub(crate) select: Option<String>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Free-text request.
    pub(crate) query: String,
    /// Catalog database.
    pub(crate) database: Utf8PathBuf,
    /// Validated interpreter endpoint.
    pub(crate) interpreter_url: Url,
    /// Seed for the price source, if prices should be reproducible.
    pub(crate) price_seed: Option<u64>,
    /// Selected line item indices, if checking out.
    pub(crate) selection: Option<BTreeSet<usize>>,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.database, ARG_DATABASE)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let query = args.query.ok_or(CliError::MissingArgument {
            field: ARG_QUERY,
            env: ENV_QUERY,
        })?;
        let database = args
            .database
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE));
        let endpoint = args
            .interpreter_url
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned());
        let interpreter_url = Url::parse(&endpoint).map_err(|source| CliError::InvalidUrl {
            field: ARG_INTERPRETER_URL,
            value: endpoint.clone(),
            source,
        })?;
        let selection = args.select.as_deref().map(parse_selection).transpose()?;
        Ok(Self {
            query,
            database,
            interpreter_url,
            price_seed: args.price_seed,
            selection,
        })
    }
}

/// Parse `"2, 0,5"` into a set of indices. Empty segments are ignored.
pub(crate) fn parse_selection(value: &str) -> Result<BTreeSet<usize>, CliError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<usize>()
                .map_err(|_| CliError::InvalidSelection {
                    field: ARG_SELECT,
                    value: value.to_owned(),
                })
        })
        .collect()
}

fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match dishmatch_fs::is_regular_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::MissingSourceFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// JSON document printed by `recommend`.
#[derive(Debug, Serialize)]
pub(crate) struct RecommendOutput {
    pub(crate) items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) order: Option<Order>,
}

/// Builds the interpreter for the current recommend invocation.
pub(crate) trait InterpreterBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn QueryInterpreter>, CliError>;
}

pub(crate) struct HttpInterpreterBuilder;

impl InterpreterBuilder for HttpInterpreterBuilder {
    fn build(&self, config: &RecommendConfig) -> Result<Box<dyn QueryInterpreter>, CliError> {
        let endpoint = config.interpreter_url.as_str();
        let interpreter =
            HttpQueryInterpreter::with_config(HttpQueryInterpreterConfig::new(endpoint))
                .map_err(|source| CliError::BuildInterpreter {
                    endpoint: endpoint.to_owned(),
                    source,
                })?;
        Ok(Box::new(interpreter))
    }
}

pub(crate) fn run_recommend(args: RecommendArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    run_recommend_with(args, &HttpInterpreterBuilder, writer)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    builder: &dyn InterpreterBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let interpreter = builder.build(&config)?;
    let output = recommend_with(&config, interpreter)?;
    write_output(writer, &output)
}

/// Run one search against the configured catalog with `interpreter`.
pub(crate) fn recommend_with<I: QueryInterpreter>(
    config: &RecommendConfig,
    interpreter: I,
) -> Result<RecommendOutput, CliError> {
    let store = SqliteCatalogStore::open(config.database.as_std_path())?;
    let prices = config
        .price_seed
        .map_or_else(RandomPriceSource::from_entropy, RandomPriceSource::seeded);
    let mut session = RecommendationSession::new(store, interpreter, MatchScorer, prices);

    let items = session.search(&config.query)?.to_vec();
    let order = config
        .selection
        .as_ref()
        .map(|selection| session.checkout(selection))
        .transpose()?;
    if let Some(placed) = &order {
        info!(
            "checked out {} line item(s) for {}",
            placed.items.len(),
            placed.total
        );
    }
    Ok(RecommendOutput { items, order })
}

fn write_output(writer: &mut dyn Write, output: &RecommendOutput) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(output).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
