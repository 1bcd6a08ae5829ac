//! `compile-train`: compile and link the training program.
//!
//! Run from the project's `linux/` folder. Takes no arguments.

use anyhow::Context;
use netbuild::commands;
use netbuild::error::OrchestratorError;
use netbuild::logger;
use netbuild::process::SystemRunner;
use std::path::PathBuf;
use std::process::ExitCode;

fn run() -> Result<PathBuf, OrchestratorError> {
    let cwd = std::env::current_dir().context("Failed to determine the current directory")?;
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().to_string())
        .collect();
    commands::compile_train(&cwd, &args, std::env::var("CXX").ok(), &SystemRunner)
}

fn main() -> ExitCode {
    logger::init();
    commands::finish(run())
}
