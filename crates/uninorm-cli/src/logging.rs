//! Log level selection and subscriber setup

use clap::ValueEnum;
use tracing::Level;

/// Accepted `--log_level` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    #[value(name = "DEBUG")]
    Debug,
    #[value(name = "INFO")]
    Info,
    #[value(name = "WARNING", alias = "WARN")]
    Warning,
    #[value(name = "ERROR")]
    Error,
    /// Same as ERROR; tracing has no higher level
    #[value(name = "CRITICAL")]
    Critical,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warning => Level::WARN,
            LogLevel::Error | LogLevel::Critical => Level::ERROR,
        }
    }
}

/// Install the global subscriber; logs go to stderr
pub fn init(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from(level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
