//! Error types emitted by the dishmatch CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use dishmatch::SessionError;
use dishmatch_core::CatalogStoreError;
use dishmatch_data::{InterpreterBuildError, PersistCatalogError};
use thiserror::Error;

/// Errors emitted by the dishmatch CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist; run `dishmatch seed` first")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// Path that was checked.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The interpreter endpoint is not a valid absolute URL.
    #[error("invalid {field} {value:?}: {source}")]
    InvalidUrl {
        /// Option naming the URL.
        field: &'static str,
        /// Value as configured.
        value: String,
        /// Parse failure.
        #[source]
        source: url::ParseError,
    },
    /// The checkout selection is not a comma-separated list of indices.
    #[error("invalid {field} {value:?}: expected comma-separated line item indices")]
    InvalidSelection {
        /// Option naming the selection.
        field: &'static str,
        /// Value as configured.
        value: String,
    },
    /// Persisting the catalog to SQLite failed.
    #[error("failed to seed catalog into {path:?}: {source}")]
    PersistCatalog {
        /// Destination database.
        path: Utf8PathBuf,
        /// Underlying persistence error.
        #[source]
        source: PersistCatalogError,
    },
    /// Opening the catalog store failed.
    #[error(transparent)]
    OpenCatalog(#[from] CatalogStoreError),
    /// Constructing the interpreter client failed.
    #[error("failed to build interpreter client for {endpoint:?}: {source}")]
    BuildInterpreter {
        /// Configured endpoint.
        endpoint: String,
        /// Underlying build error.
        #[source]
        source: InterpreterBuildError,
    },
    /// The search or checkout failed.
    #[error(transparent)]
    Session(#[from] SessionError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
