//! Adapters between the dishmatch pipeline and its external collaborators.
//!
//! Responsibilities:
//! - Call the natural-language interpreter over HTTP.
//! - Provision the fixed catalog into a SQLite document table.
//!
//! Boundaries:
//! - Do not encode ranking or pricing rules (live in `dishmatch-scorer` and
//!   `dishmatch-pricing`).
//! - Keep blocking I/O off async executors.

#![forbid(unsafe_code)]

pub mod interpreter;
mod persist;
mod seed;

pub use interpreter::{
    DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, HttpQueryInterpreter, HttpQueryInterpreterConfig,
    InterpreterBuildError,
};
pub use persist::{PersistCatalogError, persist_catalog_to_sqlite};
pub use seed::{SeedEntry, seed_catalog, seed_id};
