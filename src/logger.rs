//! Console backend for the `log` facade.
//!
//! Progress lines are printed directly by the build code; this logger only
//! carries diagnostics (command lines, skip decisions) to stderr. The level
//! comes from `NETBUILD_LOG`.

use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::str::FromStr;

pub const LOG_ENV: &str = "NETBUILD_LOG";

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warn".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".cyan(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("   [{}] {}", tag, record.args());
    }

    fn flush(&self) {}
}

/// Parse a `NETBUILD_LOG` value. Unknown values fall back to `warn`.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| LevelFilter::from_str(v.trim()).ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the console logger. Calling it twice is harmless.
pub fn init() {
    let level = level_from_env(std::env::var(LOG_ENV).ok().as_deref());
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
