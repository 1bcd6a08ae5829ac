use crate::build::{Orchestrator, Toolchain};
use crate::cli::TrainArgs;
use crate::error::OrchestratorError;
use crate::process::ProcessRunner;
use std::path::{Path, PathBuf};

/// Handle `compile-train`: build the training executable from `cwd`.
pub fn compile_train(
    cwd: &Path,
    args: &[String],
    env_cxx: Option<String>,
    runner: &dyn ProcessRunner,
) -> Result<PathBuf, OrchestratorError> {
    let (config, ctx) = super::prepare(cwd)?;
    TrainArgs::parse_args(args)?;

    let toolchain = Toolchain::from_config(&config, env_cxx);
    log::info!("Using compiler '{}'", toolchain.compiler);
    Orchestrator::new(&ctx, toolchain, runner).build_train(&config.train)
}
