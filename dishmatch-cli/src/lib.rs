//! Command-line interface for provisioning and querying the dish catalog.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod recommend;
mod seed;

pub use error::CliError;

use recommend::{RecommendArgs, run_recommend};
use seed::{SeedArgs, run_seed};

pub(crate) const ARG_DATABASE: &str = "database";
pub(crate) const ARG_INTERPRETER_URL: &str = "interpreter-url";
pub(crate) const ARG_PRICE_SEED: &str = "price-seed";
pub(crate) const ARG_QUERY: &str = "query";
pub(crate) const ARG_SELECT: &str = "select";
pub(crate) const ENV_QUERY: &str = "DISHMATCH_CMDS_RECOMMEND_QUERY";

/// Catalog database used when no path is configured.
pub(crate) const DEFAULT_DATABASE: &str = "dishmatch.db";

/// Run the dishmatch CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments, configuration, the catalog, or the
/// output stream fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Seed(args) => run_seed(args, &mut stdout),
        Command::Recommend(args) => run_recommend(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dishmatch",
    about = "Recommend priced dishes from a catalog for free-text requests",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Write the fixed catalog into a SQLite database.
    Seed(SeedArgs),
    /// Recommend line items for a free-text request.
    Recommend(RecommendArgs),
}

#[cfg(test)]
mod tests;
