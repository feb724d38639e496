//! Seed command implementation for the dishmatch CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use dishmatch_data::{persist_catalog_to_sqlite, seed_catalog};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{ARG_DATABASE, CliError, DEFAULT_DATABASE};

/// CLI arguments for the `seed` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Write the fixed dish catalog into a SQLite database. \
                 Existing records with the same identifiers are replaced, \
                 so the command can be re-run safely.",
    about = "Provision the catalog database"
)]
#[ortho_config(prefix = "DISHMATCH")]
pub(crate) struct SeedArgs {
    /// Path to the SQLite catalog database.
    #[arg(long = ARG_DATABASE, value_name = "path")]
    #[serde(default)]
    pub(crate) database: Option<Utf8PathBuf>,
}

impl SeedArgs {
    pub(crate) fn into_config(self) -> Result<SeedConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(SeedConfig::from(merged))
    }
}

/// Resolved `seed` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SeedConfig {
    /// Destination database.
    pub(crate) database: Utf8PathBuf,
}

impl From<SeedArgs> for SeedConfig {
    fn from(args: SeedArgs) -> Self {
        Self {
            database: args
                .database
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATABASE)),
        }
    }
}

pub(crate) fn run_seed(args: SeedArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    seed_with(&config, writer)
}

pub(crate) fn seed_with(config: &SeedConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let entries = seed_catalog();
    persist_catalog_to_sqlite(&config.database, &entries).map_err(|source| {
        CliError::PersistCatalog {
            path: config.database.clone(),
            source,
        }
    })?;
    writeln!(
        writer,
        "seeded {} catalog record(s) into {}",
        entries.len(),
        config.database
    )
    .map_err(CliError::WriteOutput)
}
