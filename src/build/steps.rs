use crate::config::{CompileUnit, OrchestratorConfig, std_flag};
use crate::process::Invocation;
use std::path::{Path, PathBuf};

/// Compiler driver plus the flags every step shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub compiler: String,
    pub std_flag: String,
}

impl Toolchain {
    pub fn new(compiler: impl Into<String>, standard: &str) -> Self {
        Self {
            compiler: compiler.into(),
            std_flag: std_flag(standard),
        }
    }

    pub fn from_config(config: &OrchestratorConfig, env_cxx: Option<String>) -> Self {
        Self::new(config.resolve_compiler(env_cxx), &config.standard)
    }

    /// `<cc> -c -std=<std> <source> -o <object>`
    pub fn compile(&self, unit: &CompileUnit, dir: &Path) -> Invocation {
        Invocation::new(&self.compiler, dir)
            .arg("-c")
            .arg(self.std_flag.as_str())
            .path_arg(&unit.source)
            .arg("-o")
            .path_arg(&unit.object)
    }

    /// `<cc> <objects...> -o <output> -std=<std>`
    pub fn link(&self, objects: &[PathBuf], output: &Path, dir: &Path) -> Invocation {
        let mut inv = Invocation::new(&self.compiler, dir);
        for obj in objects {
            inv = inv.path_arg(obj);
        }
        inv.arg("-o").path_arg(output).arg(self.std_flag.as_str())
    }
}
