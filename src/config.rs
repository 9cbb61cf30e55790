use crate::error::Error;
use crate::level::Level;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// chrono rendering of the `MM/dd/yyyy HH:mm:ss.SSS` default pattern.
pub(crate) const DEFAULT_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S%.3f";

/// Configuration for the logging pipeline.
///
/// No field is validated at set-time; a misconfiguration (such as enabling
/// the file sink without a path) only surfaces on the write that needs it.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Minimum severity: messages ranked above this level are filtered
    /// (but still counted). `Level::Off` disables the logger entirely.
    pub level: Level,
    /// Whether per-level counters are incremented.
    pub count_messages: bool,
    /// Whether formatted entries are written to standard output.
    pub print_to_stdout: bool,
    /// Whether formatted entries are appended to the log file.
    pub print_to_file: bool,
    /// chrono strftime pattern for the entry timestamp.
    pub timestamp_format: String,
    /// Append target for the file sink; required once `print_to_file` is on.
    pub log_file_path: Option<PathBuf>,
}

impl LoggerConfig {
    /// Creates a new `LoggerConfig` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum severity level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables the per-level counters.
    pub fn count_messages(mut self, count: bool) -> Self {
        self.count_messages = count;
        self
    }

    /// Enables or disables the standard-output sink.
    pub fn print_to_stdout(mut self, enabled: bool) -> Self {
        self.print_to_stdout = enabled;
        self
    }

    /// Enables or disables the file sink.
    pub fn print_to_file(mut self, enabled: bool) -> Self {
        self.print_to_file = enabled;
        self
    }

    /// Sets the timestamp pattern used when formatting entries.
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    /// Sets the append target for the file sink.
    pub fn log_file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file_path = Some(path.into());
        self
    }

    /// Overwrites fields from same-named environment variables.
    ///
    /// One variable per field, unset or empty variables leave the field
    /// untouched. Counters are not part of the table and cannot be seeded.
    pub(crate) fn apply_env(&mut self) -> Result<(), Error> {
        if let Some(raw) = env_value("LOG_LEVEL") {
            self.level = parse_env("LOG_LEVEL", raw)?;
        }
        if let Some(raw) = env_value("COUNT_MESSAGES") {
            self.count_messages = parse_env("COUNT_MESSAGES", raw)?;
        }
        if let Some(raw) = env_value("PRINT_TO_STD_OUT") {
            self.print_to_stdout = parse_env("PRINT_TO_STD_OUT", raw)?;
        }
        if let Some(raw) = env_value("PRINT_TO_FILE") {
            self.print_to_file = parse_env("PRINT_TO_FILE", raw)?;
        }
        if let Some(raw) = env_value("TS_FORMAT") {
            self.timestamp_format = raw;
        }
        if let Some(raw) = env_value("LOG_FILE_PATH") {
            self.log_file_path = Some(PathBuf::from(raw));
        }
        Ok(())
    }
}

impl Default for LoggerConfig {
    /// The defaults the process starts with: `Info` threshold, counting on,
    /// stdout sink on, file sink off, no file path.
    fn default() -> Self {
        LoggerConfig {
            level: Level::Info,
            count_messages: true,
            print_to_stdout: true,
            print_to_file: false,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            log_file_path: None,
        }
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

fn parse_env<T>(name: &'static str, raw: String) -> Result<T, Error>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw.parse() {
        Ok(value) => Ok(value),
        Err(err) => Err(Error::InvalidEnvValue {
            name,
            value: raw,
            reason: err.to_string(),
        }),
    }
}
