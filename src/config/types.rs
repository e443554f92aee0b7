//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of diagnostic output on stderr, from most restrictive
/// (Error) to most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied once the run has finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 when the run completes, even without a report
    Never,
    /// Exit 2 when too few sites were visited to print a report
    Insufficient,
    /// Exit 2 when any site failed to load
    AnyFailure,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through [`Cli`].
///
/// # Examples
///
/// ```no_run
/// use top_site_perf::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("sites.txt"),
///     verbose: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read domains from (`-` for stdin)
    pub file: PathBuf,

    /// Print per-site progress and run summary lines to stdout
    pub verbose: bool,

    /// Per-request timeout in seconds; `None` lets a request block indefinitely
    pub timeout_seconds: Option<u64>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Exit code policy
    pub fail_on: FailOn,
}

/// A configuration field with an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong and what is expected instead
    pub message: String,
}

impl Config {
    /// Checks field values that the type system cannot rule out.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.file.as_os_str().is_empty() {
            return Err(ConfigValidationError {
                field: "file",
                message: "site list path must not be empty (use - for stdin)".to_string(),
            });
        }
        if self.timeout_seconds == Some(0) {
            return Err(ConfigValidationError {
                field: "timeout_seconds",
                message: "must be greater than 0; omit it to disable the timeout".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from("sites.txt"),
            verbose: false,
            timeout_seconds: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fail_on: FailOn::Never,
        }
    }
}

/// Command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "top_site_perf",
    about = "Visit a list of domains and report the fastest, slowest and median homepages",
    version
)]
pub struct Cli {
    /// Path to file that contains a list of sites (`-` reads stdin)
    pub path: PathBuf,

    /// Show more verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Per-request timeout in seconds (requests never time out when unset)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Diagnostic log level (written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Diagnostic log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// When to exit with a non-zero status
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            file: cli.path,
            verbose: cli.verbose,
            timeout_seconds: cli.timeout_seconds,
            log_level: cli.log_level,
            log_format: cli.log_format,
            fail_on: cli.fail_on,
        }
    }
}
