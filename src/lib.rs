//! # netbuild - build orchestrator for the network training program
//!
//! netbuild replaces the hand-written compile scripts of the training
//! project. It runs a fixed, ordered list of compiler invocations and stops
//! at the first failure.
//!
//! ## Binaries
//!
//! - `compile-train` - compile the network, training-set loader and trainer,
//!   then link `train`
//! - `run-tests [-n]` - build the test framework entry point and network
//!   object on demand, compile and link `.catch.exe`, then run it
//!
//! Both must be started from the project's `linux/` folder.
//!
//! ## Module Organization
//!
//! - [`build`] - Compile/link steps and the orchestrator
//! - [`config`] - Step list, paths and flags (`netbuild.toml`)
//! - [`commands`] - Handlers behind the binaries
//! - [`process`] - External process abstraction

/// Compile and link steps, and the test runner flow.
pub mod build;

/// Argument parsing for both binaries.
pub mod cli;

/// Handlers behind `compile-train` and `run-tests`.
pub mod commands;

/// Configuration (`netbuild.toml`).
pub mod config;

/// Run directory validation.
pub mod context;

/// Error taxonomy and exit codes.
pub mod error;

/// Console backend for the `log` facade.
pub mod logger;

/// External process execution.
pub mod process;
