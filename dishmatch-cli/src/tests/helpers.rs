//! Test helpers for provisioning catalog databases and stub interpreters.

use crate::CliError;
use crate::recommend::{InterpreterBuilder, RecommendConfig};
use crate::seed::{SeedConfig, seed_with};
use camino::Utf8PathBuf;
use dishmatch_core::QueryInterpreter;
use dishmatch_core::test_support::StubInterpreter;
use tempfile::TempDir;

/// Temporary workspace holding a catalog database path.
pub(super) struct Workspace {
    _dir: TempDir,
    pub(super) root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf())
            .unwrap_or_else(|path| panic!("non-UTF-8 workspace {}", path.display()));
        Self { _dir: dir, root }
    }

    pub(super) fn database(&self) -> Utf8PathBuf {
        self.root.join("catalog.db")
    }

    /// Seed the fixed catalog and return the seed command's output.
    pub(super) fn seed(&self) -> String {
        let mut output = Vec::new();
        seed_with(
            &SeedConfig {
                database: self.database(),
            },
            &mut output,
        )
        .unwrap_or_else(|err| panic!("seed catalog: {err}"));
        String::from_utf8(output).unwrap_or_else(|err| panic!("utf-8 output: {err}"))
    }
}

/// Interpreter builder that hands out a clone of a stub.
pub(super) struct StubInterpreterBuilder {
    pub(super) interpreter: StubInterpreter,
}

impl InterpreterBuilder for StubInterpreterBuilder {
    fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn QueryInterpreter>, CliError> {
        Ok(Box::new(self.interpreter.clone()))
    }
}
