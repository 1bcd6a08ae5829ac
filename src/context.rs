use crate::error::OrchestratorError;
use std::path::{Path, PathBuf};

/// Directory the orchestrator was started from. Validated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    dir: PathBuf,
}

impl RunContext {
    /// Accept `dir` only if its base name equals `expected`.
    pub fn validate(dir: &Path, expected: &str) -> Result<Self, OrchestratorError> {
        let actual = dir
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();

        if actual != expected {
            return Err(OrchestratorError::WrongDirectory {
                expected: expected.to_string(),
                actual,
            });
        }

        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Resolve a configured relative path against the run directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.dir.join(path)
    }

    pub fn exists(&self, path: &Path) -> bool {
        self.resolve(path).is_file()
    }
}
