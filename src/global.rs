use crate::error::Error;
use crate::level::Level;
use crate::logger::Logger;
use lazy_static::lazy_static;
use std::path::PathBuf;

lazy_static! {
    static ref GLOBAL_LOGGER: Logger = Logger::new(None);
}

/// Logs `message` at `level` through the process-wide logger.
///
/// See [`Logger::log`] for the pipeline and its errors.
pub fn log(message: &str, level: Level) -> Result<(), Error> {
    GLOBAL_LOGGER.log(message, level)
}

/// Seeds the process-wide configuration from environment variables.
///
/// See [`Logger::seed_from_env`].
pub fn seed_from_env() -> Result<(), Error> {
    GLOBAL_LOGGER.seed_from_env()
}

pub fn describe_config() -> String {
    GLOBAL_LOGGER.describe_config()
}

/// Cumulative count of messages received at `level` since process start.
pub fn count(level: Level) -> u64 {
    GLOBAL_LOGGER.count(level)
}

pub fn level() -> Level {
    GLOBAL_LOGGER.level()
}

pub fn set_level(level: Level) {
    GLOBAL_LOGGER.set_level(level);
}

pub fn count_messages() -> bool {
    GLOBAL_LOGGER.count_messages()
}

pub fn set_count_messages(count: bool) {
    GLOBAL_LOGGER.set_count_messages(count);
}

pub fn print_to_stdout() -> bool {
    GLOBAL_LOGGER.print_to_stdout()
}

pub fn set_print_to_stdout(enabled: bool) {
    GLOBAL_LOGGER.set_print_to_stdout(enabled);
}

pub fn print_to_file() -> bool {
    GLOBAL_LOGGER.print_to_file()
}

pub fn set_print_to_file(enabled: bool) {
    GLOBAL_LOGGER.set_print_to_file(enabled);
}

pub fn timestamp_format() -> String {
    GLOBAL_LOGGER.timestamp_format()
}

pub fn set_timestamp_format(format: impl Into<String>) {
    GLOBAL_LOGGER.set_timestamp_format(format);
}

pub fn log_file_path() -> Option<PathBuf> {
    GLOBAL_LOGGER.log_file_path()
}

pub fn set_log_file_path(path: impl Into<PathBuf>) {
    GLOBAL_LOGGER.set_log_file_path(path);
}
