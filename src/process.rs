//! External process execution.
//!
//! The orchestrator never touches `std::process` directly; it goes through
//! [`ProcessRunner`] so the step sequence can be exercised without a compiler.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};

/// A fully resolved command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, current_dir: &Path) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: current_dir.to_path_buf(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        let arg = path.to_string_lossy().to_string();
        self.arg(arg)
    }

    /// Program name for messages.
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().to_string()
    }

    /// The command as it would be typed in a shell, for logs.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.program_name()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }

    /// Value of the `-o` argument, if any.
    pub fn output(&self) -> Option<&str> {
        self.args
            .iter()
            .position(|a| a == "-o")
            .and_then(|i| self.args.get(i + 1))
            .map(String::as_str)
    }
}

/// Exit status of a finished process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    code: Option<i32>,
}

impl ProcessOutcome {
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Terminated without an exit code (killed by a signal on Unix).
    pub fn signaled() -> Self {
        Self { code: None }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ProcessOutcome {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {}", code),
            None => write!(f, "terminated by signal"),
        }
    }
}

/// A launched process that has not been awaited yet.
pub trait RunningProcess {
    /// Block until the process exits. There is no timeout.
    fn wait(&mut self) -> io::Result<ProcessOutcome>;
}

impl RunningProcess for Child {
    fn wait(&mut self) -> io::Result<ProcessOutcome> {
        Child::wait(self).map(ProcessOutcome::from)
    }
}

pub trait ProcessRunner {
    /// Launch `invocation` without waiting for it.
    fn spawn(&self, invocation: &Invocation) -> io::Result<Box<dyn RunningProcess>>;
}

/// Runs real processes. Children inherit stdio so diagnostics reach the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn spawn(&self, invocation: &Invocation) -> io::Result<Box<dyn RunningProcess>> {
        let child = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.current_dir)
            .spawn()?;
        Ok(Box::new(child))
    }
}
