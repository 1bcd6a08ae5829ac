use super::steps::Toolchain;
use crate::config::{CompileUnit, TrainConfig};
use crate::context::RunContext;
use crate::error::OrchestratorError;
use crate::process::{Invocation, ProcessOutcome, ProcessRunner, RunningProcess};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// What happened to an object that is only built on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectStatus {
    Compiled,
    Reused,
}

/// Runs build steps for one validated run directory.
pub struct Orchestrator<'a> {
    ctx: &'a RunContext,
    toolchain: Toolchain,
    runner: &'a dyn ProcessRunner,
}

impl<'a> Orchestrator<'a> {
    pub fn new(ctx: &'a RunContext, toolchain: Toolchain, runner: &'a dyn ProcessRunner) -> Self {
        Self {
            ctx,
            toolchain,
            runner,
        }
    }

    pub fn context(&self) -> &RunContext {
        self.ctx
    }

    pub(super) fn spawn_step(&self, inv: &Invocation) -> Result<Box<dyn RunningProcess>, OrchestratorError> {
        log::debug!("spawn: {}", inv.command_line());
        self.runner
            .spawn(inv)
            .map_err(|source| OrchestratorError::Process {
                program: inv.program_name(),
                source,
            })
    }

    pub(super) fn wait_step(
        &self,
        inv: &Invocation,
        process: &mut dyn RunningProcess,
    ) -> Result<ProcessOutcome, OrchestratorError> {
        let outcome = process
            .wait()
            .map_err(|source| OrchestratorError::Process {
                program: inv.program_name(),
                source,
            })?;
        log::debug!("{} -> {}", inv.command_line(), outcome);
        Ok(outcome)
    }

    /// Launch every unit back-to-back, then await them in order.
    ///
    /// Returns at the first failing unit. Processes launched after it are
    /// left running and objects already written stay on disk.
    pub fn compile_batch(&self, units: &[CompileUnit]) -> Result<(), OrchestratorError> {
        let mut running = Vec::with_capacity(units.len());
        for unit in units {
            let inv = self.toolchain.compile(unit, self.ctx.dir());
            let process = self.spawn_step(&inv)?;
            running.push((unit, inv, process));
        }

        for (unit, inv, mut process) in running {
            let outcome = self.wait_step(&inv, process.as_mut())?;
            if !outcome.success() {
                return Err(OrchestratorError::CompileFailure {
                    unit: unit.source.clone(),
                    outcome,
                });
            }
        }
        Ok(())
    }

    /// Compile `unit` unless its object already exists and `force` is unset.
    ///
    /// Existence is the only check: a stale object is reused as-is.
    pub fn ensure_object(
        &self,
        unit: &CompileUnit,
        force: bool,
    ) -> Result<ObjectStatus, OrchestratorError> {
        if !force && self.ctx.exists(&unit.object) {
            log::debug!("reusing existing object {}", unit.object.display());
            return Ok(ObjectStatus::Reused);
        }
        self.compile_batch(std::slice::from_ref(unit))?;
        Ok(ObjectStatus::Compiled)
    }

    /// Link `objects` into `output`. Every object must exist beforehand.
    pub fn link(&self, objects: &[PathBuf], output: &Path) -> Result<PathBuf, OrchestratorError> {
        if let Some(missing) = objects.iter().find(|obj| !self.ctx.exists(obj)) {
            return Err(OrchestratorError::MissingObject {
                output: output.to_path_buf(),
                object: missing.clone(),
            });
        }

        let inv = self.toolchain.link(objects, output, self.ctx.dir());
        let mut process = self.spawn_step(&inv)?;
        let outcome = self.wait_step(&inv, process.as_mut())?;
        if !outcome.success() {
            return Err(OrchestratorError::LinkFailure {
                output: output.to_path_buf(),
                outcome,
            });
        }
        Ok(self.ctx.resolve(output))
    }

    /// Compile every training unit, then link the training executable.
    pub fn build_train(&self, train: &TrainConfig) -> Result<PathBuf, OrchestratorError> {
        let start_time = Instant::now();

        println!("{} Compiling...", "⚙".cyan());
        self.compile_batch(&train.units)?;

        println!("   {} Linking...", "🔗".cyan());
        let executable = self.link(&train.link, &train.output)?;

        println!(
            "{} Built {} in {:.2?}",
            "✓".green(),
            train.output.display().to_string().bold(),
            start_time.elapsed()
        );
        Ok(executable)
    }
}
