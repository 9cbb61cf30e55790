use thiserror::Error;

/// Failures surfaced by [`Logger::log`](crate::Logger::log) and
/// [`Logger::seed_from_env`](crate::Logger::seed_from_env).
///
/// Nothing is retried or swallowed internally; every failure is the
/// caller's to handle.
#[derive(Debug, Error)]
pub enum Error {
    /// The file sink is enabled but no log file path was configured.
    #[error("log file path not set")]
    LogFilePathNotSet,
    /// Appending to the log file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// An environment variable held a value that does not parse into the
    /// field it seeds.
    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidEnvValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// A string did not name a [`Level`](crate::Level).
#[derive(Debug, Clone, Error)]
#[error("unknown log level {value:?}")]
pub struct ParseLevelError {
    pub value: String,
}
