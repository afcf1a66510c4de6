//! Stderr logging for testrig front ends.
//!
//! A [`Logger`] prints through its own methods and, once
//! [`Logger::install`] has run, also receives the library's `log` records:
//! configuration lookups, registry loading and sizing decisions.
//!
//! The level comes from the `--verbose`/`--quiet` flags, then
//! `TESTRIG_LOG_MODE`, then a truthy `TESTRIG_DEBUG`. See [`init_logger`].

use std::env;
use std::fmt;
use std::sync::OnceLock;

const LOG_MODE_VAR: &str = "TESTRIG_LOG_MODE";
const DEBUG_VAR: &str = "TESTRIG_DEBUG";

static INSTALLED: OnceLock<Logger> = OnceLock::new();

/// How much a front end prints to stderr.
///
/// # Examples
///
/// ```
/// use testrig::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Failures only.
    Quiet,
    /// Failures and warnings.
    Normal,
    /// Also the resolved configuration, host snapshot and sizing traces.
    Verbose,
}

impl LogLevel {
    const ALL: [Self; 3] = [Self::Quiet, Self::Normal, Self::Verbose];

    const fn as_str(self) -> &'static str {
        match self {
            Self::Quiet => "quiet",
            Self::Normal => "normal",
            Self::Verbose => "verbose",
        }
    }

    /// Parse `quiet`, `normal` or `verbose`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a message naming the rejected value.
    ///
    /// # Examples
    ///
    /// ```
    /// use testrig::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("chatty").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("invalid log level: {s}"))
    }

    /// Most detailed `log` level forwarded at this setting.
    #[must_use]
    pub const fn max_level(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Error,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Writes leveled messages to stderr.
///
/// Errors are printed at every level, `--quiet` included. Warnings need
/// [`LogLevel::Normal`]; info and debug lines need [`LogLevel::Verbose`].
///
/// # Examples
///
/// ```
/// use testrig::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.warn("TESTRIG_CONFIG_FILE is ignored when FILE is given");
/// logger.info("Host: 8 CPU(s), 16.00 GiB, linux"); // not printed
/// assert!(!logger.is_verbose());
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Logger at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// The configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether info and debug lines are printed.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.level >= LogLevel::Verbose
    }

    /// Whether a message of `level` would be printed.
    #[must_use]
    pub fn allows(&self, level: log::Level) -> bool {
        match level {
            log::Level::Error => true,
            log::Level::Warn => self.level >= LogLevel::Normal,
            log::Level::Info | log::Level::Debug => self.is_verbose(),
            log::Level::Trace => false,
        }
    }

    /// Print a failure.
    pub fn error(&self, message: &str) {
        self.emit(log::Level::Error, message);
    }

    /// Print a warning.
    pub fn warn(&self, message: &str) {
        self.emit(log::Level::Warn, message);
    }

    /// Print a diagnostic such as the host snapshot.
    pub fn info(&self, message: &str) {
        self.emit(log::Level::Info, message);
    }

    /// Print a low-level trace.
    pub fn debug(&self, message: &str) {
        self.emit(log::Level::Debug, message);
    }

    /// Route the library's `log` records through a copy of this logger.
    ///
    /// Only the first call in a process takes effect.
    ///
    /// # Errors
    ///
    /// Returns [`log::SetLoggerError`] if a `log` backend is already set.
    pub fn install(&self) -> Result<(), log::SetLoggerError> {
        let logger = INSTALLED.get_or_init(|| self.clone());
        log::set_logger(logger)?;
        log::set_max_level(logger.level.max_level());
        Ok(())
    }

    fn emit(&self, level: log::Level, message: impl fmt::Display) {
        if self.allows(level) {
            eprintln!("{level}: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.target().starts_with("testrig") && self.allows(metadata.level())
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            self.emit(record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Build a logger from the command-line flags and the environment.
///
/// Precedence: `verbose`, then `quiet`, then `TESTRIG_LOG_MODE` (ignored if
/// unparseable), then `TESTRIG_DEBUG` set to a truthy value (selects
/// Verbose), then Normal.
///
/// # Examples
///
/// ```
/// use testrig::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, true).level(), LogLevel::Verbose);
/// assert_eq!(init_logger(false, true).level(), LogLevel::Quiet);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        level_from_env(|key| env::var(key).ok())
    };
    Logger::new(level)
}

fn level_from_env<F>(lookup: F) -> LogLevel
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(level) = lookup(LOG_MODE_VAR).and_then(|v| LogLevel::parse(&v).ok()) {
        return level;
    }
    if lookup(DEBUG_VAR).is_some_and(|v| is_truthy(&v)) {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
