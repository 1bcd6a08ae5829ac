//! Error taxonomy for an orchestration run.
//!
//! Every variant is terminal: the binaries print it and exit with
//! [`OrchestratorError::exit_code`].

use crate::process::ProcessOutcome;
use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line, detected before any process is spawned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Too many arguments given; try again.")]
    TooMany { given: usize, allowed: usize },
    #[error("{0} is not a valid argument; try again.")]
    Unrecognized(String),
}

#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("Please run from the project/{expected}/ folder, not {actual}/")]
    WrongDirectory { expected: String, actual: String },

    #[error(transparent)]
    InvalidArguments(#[from] ArgumentError),

    #[error("Compiling {} failed ({outcome})", unit.display())]
    CompileFailure {
        unit: PathBuf,
        outcome: ProcessOutcome,
    },

    #[error("Linking {} failed ({outcome})", output.display())]
    LinkFailure {
        output: PathBuf,
        outcome: ProcessOutcome,
    },

    #[error(
        "Cannot link {}: object file {} does not exist",
        output.display(),
        object.display()
    )]
    MissingObject { output: PathBuf, object: PathBuf },

    #[error("Tests in {} failed ({outcome})", binary.display())]
    TestExecutionFailure {
        binary: PathBuf,
        outcome: ProcessOutcome,
    },

    #[error("Failed to run '{program}': {source}")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OrchestratorError {
    /// Process exit code reported for this error. Every failure maps to 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
