//! Orchestrator configuration.
//!
//! Every path and flag of both pipelines lives here. The defaults reproduce
//! the project layout exactly; an optional `netbuild.toml` in the run
//! directory can override any field.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "netbuild.toml";

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OrchestratorConfig {
    /// Required base name of the working directory.
    pub expected_dir: String,
    /// Compiler/linker driver. Falls back to `$CXX`, then `g++`.
    pub compiler: Option<String>,
    /// Language standard, e.g. `c++11`.
    pub standard: String,
    pub train: TrainConfig,
    pub test: TestConfig,
}

/// One translation unit and the object it produces.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompileUnit {
    pub source: PathBuf,
    pub object: PathBuf,
}

impl CompileUnit {
    pub fn new(source: &str, object: &str) -> Self {
        Self {
            source: PathBuf::from(source),
            object: PathBuf::from(object),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
    pub units: Vec<CompileUnit>,
    /// Objects passed to the linker, in this order.
    pub link: Vec<PathBuf>,
    pub output: PathBuf,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct TestConfig {
    /// Test framework entry point; compiled only when its object is missing.
    pub framework_main: CompileUnit,
    /// Network object; compiled when missing or when a recompile is forced.
    pub dependency: CompileUnit,
    pub training_units: Vec<CompileUnit>,
    pub test_units: Vec<CompileUnit>,
    pub link: Vec<PathBuf>,
    pub output: PathBuf,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            expected_dir: "linux".to_string(),
            compiler: None,
            standard: "c++11".to_string(),
            train: TrainConfig::default(),
            test: TestConfig::default(),
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            units: vec![
                CompileUnit::new(
                    "../network/src/network-linux.cpp",
                    "../network/network-linux.o",
                ),
                CompileUnit::new(
                    "../network/src/network-saveload-linux.cpp",
                    "../network/network-saveload-linux.o",
                ),
                CompileUnit::new("src/training-set.cpp", "training-set.o"),
                CompileUnit::new("src/train.cpp", "train.o"),
            ],
            link: vec![
                PathBuf::from("train.o"),
                PathBuf::from("training-set.o"),
                PathBuf::from("../network/network-linux.o"),
                PathBuf::from("../network/network-saveload-linux.o"),
            ],
            output: PathBuf::from("train"),
        }
    }
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            framework_main: CompileUnit::new("../catch-main.cpp", "../catch-main.o"),
            dependency: CompileUnit::new(
                "../network/src/network-linux.cpp",
                "../network/network-linux.o",
            ),
            training_units: vec![
                CompileUnit::new("src/training-set.cpp", "training-set.o"),
                CompileUnit::new("src/train.cpp", "train.o"),
            ],
            test_units: vec![CompileUnit::new(
                "test/training-io-tests.cpp",
                "training-io-tests.o",
            )],
            link: vec![
                PathBuf::from("../catch-main.o"),
                PathBuf::from("training-io-tests.o"),
                PathBuf::from("training-set.o"),
                PathBuf::from("../network/network-linux.o"),
            ],
            output: PathBuf::from(".catch.exe"),
        }
    }
}

impl OrchestratorConfig {
    /// Compiler driver: config value, then `$CXX`, then `g++`.
    pub fn resolve_compiler(&self, env_cxx: Option<String>) -> String {
        if let Some(compiler) = &self.compiler {
            return compiler.clone();
        }
        env_cxx
            .filter(|cxx| !cxx.trim().is_empty())
            .unwrap_or_else(|| "g++".to_string())
    }
}

/// Load `netbuild.toml` from `dir`, or the defaults when it is absent.
pub fn load_config(dir: &Path) -> Result<OrchestratorConfig> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(OrchestratorConfig::default());
    }

    let config_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {} - check file permissions", path.display()))?;
    let config: OrchestratorConfig = toml::from_str(&config_str).with_context(|| {
        format!(
            "Failed to parse {} - check for syntax errors or unknown keys",
            path.display()
        )
    })?;

    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// GCC/Clang `-std=` flag for a given edition.
pub fn std_flag(edition: &str) -> String {
    let normalized = edition.trim().to_lowercase();
    let edition_clean = normalized.strip_prefix("-std=").unwrap_or(&normalized);

    match edition_clean {
        "c++98" | "c++03" => "-std=c++03".to_string(),
        "c++11" | "c++0x" => "-std=c++11".to_string(),
        "c++14" | "c++1y" => "-std=c++14".to_string(),
        "c++17" | "c++1z" => "-std=c++17".to_string(),
        "c++20" | "c++2a" => "-std=c++20".to_string(),
        "c++23" | "c++2b" => "-std=c++23".to_string(),
        "gnu++11" | "gnu++0x" => "-std=gnu++11".to_string(),
        "gnu++14" | "gnu++1y" => "-std=gnu++14".to_string(),
        "gnu++17" | "gnu++1z" => "-std=gnu++17".to_string(),
        "gnu++20" | "gnu++2a" => "-std=gnu++20".to_string(),
        _ => format!("-std={}", edition_clean),
    }
}
