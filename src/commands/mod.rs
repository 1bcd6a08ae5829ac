//! Entry points behind the two binaries.
//!
//! Each handler runs the same state machine: load configuration, validate the
//! run directory, parse arguments, then drive the [`Orchestrator`]. The first
//! failure ends the run.
//!
//! [`Orchestrator`]: crate::build::Orchestrator

mod compile_train;
mod run_tests;

pub use compile_train::compile_train;
pub use run_tests::run_tests;

use crate::config::{OrchestratorConfig, load_config};
use crate::context::RunContext;
use crate::error::OrchestratorError;
use colored::*;
use std::path::Path;
use std::process::ExitCode;

/// Load configuration and validate `cwd` against its expected directory.
///
/// An unreadable config outside the default run directory reports the wrong
/// directory, not the config error.
fn prepare(cwd: &Path) -> Result<(OrchestratorConfig, RunContext), OrchestratorError> {
    let config = match load_config(cwd) {
        Ok(config) => config,
        Err(err) => {
            RunContext::validate(cwd, &OrchestratorConfig::default().expected_dir)?;
            return Err(err.into());
        }
    };
    let ctx = RunContext::validate(cwd, &config.expected_dir)?;
    Ok((config, ctx))
}

/// Print the outcome of a handler and turn it into the process exit code.
pub fn finish<T>(result: Result<T, OrchestratorError>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("{} {:#}", "x".red(), e);
            let code = u8::try_from(e.exit_code()).unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
