mod config;
mod error;
mod global;
mod level;
mod log_macros;
mod logger;

pub use config::LoggerConfig;
pub use error::{Error, ParseLevelError};
pub use global::{
    count, count_messages, describe_config, level, log, log_file_path, print_to_file,
    print_to_stdout, seed_from_env, set_count_messages, set_level, set_log_file_path,
    set_print_to_file, set_print_to_stdout, set_timestamp_format, timestamp_format,
};
pub use level::Level;
pub use logger::Logger;
