use crate::build::{Orchestrator, TestOptions, Toolchain};
use crate::cli::TestArgs;
use crate::error::OrchestratorError;
use crate::process::ProcessRunner;
use std::path::{Path, PathBuf};

/// Handle `run-tests [-n]`: build and execute the test binary from `cwd`.
pub fn run_tests(
    cwd: &Path,
    args: &[String],
    env_cxx: Option<String>,
    runner: &dyn ProcessRunner,
) -> Result<PathBuf, OrchestratorError> {
    let (config, ctx) = super::prepare(cwd)?;
    let parsed = TestArgs::parse_args(args)?;

    let toolchain = Toolchain::from_config(&config, env_cxx);
    log::info!("Using compiler '{}'", toolchain.compiler);
    let options = TestOptions {
        recompile_network: parsed.recompile_network,
    };
    Orchestrator::new(&ctx, toolchain, runner).run_tests(&config.test, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ArgumentError;
    use crate::process::testing::RecordingRunner;
    use std::fs;

    fn linux_dir() -> (tempfile::TempDir, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("linux");
        fs::create_dir_all(&dir).unwrap();
        (root, dir)
    }

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrong_directory_spawns_nothing() {
        let root = tempfile::tempdir().unwrap();
        let runner = RecordingRunner::new();

        let err = run_tests(root.path(), &args(&["-n"]), None, &runner).unwrap_err();

        assert!(matches!(err, OrchestratorError::WrongDirectory { .. }));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_two_arguments_rejected() {
        let (_root, dir) = linux_dir();
        let runner = RecordingRunner::new();

        let err = run_tests(&dir, &args(&["-n", "-n"]), None, &runner).unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::InvalidArguments(ArgumentError::TooMany { given: 2, .. })
        ));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let (_root, dir) = linux_dir();
        let runner = RecordingRunner::new();

        let err = run_tests(&dir, &args(&["-r"]), None, &runner).unwrap_err();

        assert_eq!(err.to_string(), "-r is not a valid argument; try again.");
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_double_dash_rejected() {
        let (_root, dir) = linux_dir();
        let runner = RecordingRunner::new();

        let err = run_tests(&dir, &args(&["--"]), None, &runner).unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::InvalidArguments(ArgumentError::Unrecognized(ref arg))
                if arg == "--"
        ));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_wrong_directory_wins_over_broken_config() {
        let root = tempfile::tempdir().unwrap();
        let dir = root.path().join("src");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("netbuild.toml"), "bogus_key = 1\n").unwrap();
        let runner = RecordingRunner::new();

        let err = run_tests(&dir, &[], None, &runner).unwrap_err();

        assert!(matches!(
            err,
            OrchestratorError::WrongDirectory { ref actual, .. } if actual == "src"
        ));
        assert!(runner.invocations().is_empty());
    }

    #[test]
    fn test_flag_forces_network_rebuild() {
        let (root, dir) = linux_dir();
        fs::create_dir_all(root.path().join("network")).unwrap();
        fs::write(root.path().join("network/network-linux.o"), b"").unwrap();

        let runner = RecordingRunner::new();
        run_tests(&dir, &[], None, &runner).unwrap();
        assert_eq!(runner.calls_mentioning("network-linux.cpp"), 0);

        let runner = RecordingRunner::new();
        run_tests(&dir, &args(&["-n"]), None, &runner).unwrap();
        assert_eq!(runner.calls_mentioning("network-linux.cpp"), 1);
    }
}
