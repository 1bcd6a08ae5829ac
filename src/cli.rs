//! Command-line parsing for both binaries.
//!
//! The recognized flag set is exactly what each variant documents, so clap's
//! automatic `--help`/`--version` flags are turned off.

use crate::error::ArgumentError;
use clap::Parser;

/// `compile-train` takes no arguments.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "compile-train")]
#[command(about = "Compile and link the training program")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct TrainArgs {}

#[derive(Parser, Debug, PartialEq, Eq, Default)]
#[command(name = "run-tests")]
#[command(about = "Build and run the training test suite")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct TestArgs {
    /// Recompile the network object even if it already exists
    #[arg(short = 'n')]
    pub recompile_network: bool,
}

impl TrainArgs {
    pub const MAX_ARGS: usize = 0;
    pub const FLAGS: &'static [&'static str] = &[];

    /// Parse the arguments after the program name.
    pub fn parse_args(args: &[String]) -> Result<Self, ArgumentError> {
        parse_with_limit(args, Self::MAX_ARGS, Self::FLAGS, "compile-train")
    }
}

impl TestArgs {
    pub const MAX_ARGS: usize = 1;
    pub const FLAGS: &'static [&'static str] = &["-n"];

    pub fn parse_args(args: &[String]) -> Result<Self, ArgumentError> {
        parse_with_limit(args, Self::MAX_ARGS, Self::FLAGS, "run-tests")
    }
}

fn parse_with_limit<P: Parser>(
    args: &[String],
    allowed: usize,
    flags: &[&str],
    bin_name: &str,
) -> Result<P, ArgumentError> {
    if args.len() > allowed {
        return Err(ArgumentError::TooMany {
            given: args.len(),
            allowed,
        });
    }

    // clap gives `--` and clustered shorts their own meaning; only exact
    // matches against the flag set reach it.
    if let Some(bad) = args.iter().find(|arg| !flags.contains(&arg.as_str())) {
        return Err(ArgumentError::Unrecognized(bad.clone()));
    }

    let argv = std::iter::once(bin_name.to_string()).chain(args.iter().cloned());
    P::try_parse_from(argv).map_err(|err| {
        log::debug!("clap rejected arguments: {:?}", err.kind());
        ArgumentError::Unrecognized(args.first().cloned().unwrap_or_default())
    })
}
