mod common;

use jotter::{Error, Level, Logger, LoggerConfig};
use serial_test::serial;
use std::env;

const ALL_VARS: [&str; 6] = [
    "LOG_LEVEL",
    "COUNT_MESSAGES",
    "PRINT_TO_STD_OUT",
    "PRINT_TO_FILE",
    "TS_FORMAT",
    "LOG_FILE_PATH",
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn seeds_every_supported_field_type() {
    clear_env();
    env::set_var("LOG_LEVEL", "DEBUG");
    env::set_var("COUNT_MESSAGES", "false");
    env::set_var("PRINT_TO_STD_OUT", "false");
    env::set_var("PRINT_TO_FILE", "true");
    env::set_var("TS_FORMAT", "%H:%M");
    env::set_var("LOG_FILE_PATH", "seeded.log");

    let logger = Logger::new(None);
    logger.seed_from_env().unwrap();

    assert_eq!(logger.level(), Level::Debug);
    assert!(!logger.count_messages());
    assert!(!logger.print_to_stdout());
    assert!(logger.print_to_file());
    assert_eq!(logger.timestamp_format(), "%H:%M");
    assert_eq!(
        logger.log_file_path(),
        Some(std::path::PathBuf::from("seeded.log"))
    );

    clear_env();
}

#[test]
#[serial]
fn unset_variables_leave_fields_untouched() {
    clear_env();

    let logger = Logger::new(None);
    logger.seed_from_env().unwrap();

    assert_eq!(logger.level(), Level::Info);
    assert!(logger.count_messages());
    assert!(logger.print_to_stdout());
    assert!(!logger.print_to_file());
    assert_eq!(logger.timestamp_format(), "%m/%d/%Y %H:%M:%S%.3f");
    assert_eq!(logger.log_file_path(), None);
}

#[test]
#[serial]
fn empty_variables_are_treated_as_unset() {
    clear_env();
    env::set_var("TS_FORMAT", "");
    env::set_var("LOG_LEVEL", "");

    let logger = Logger::new(None);
    logger.seed_from_env().unwrap();

    assert_eq!(logger.level(), Level::Info);
    assert_eq!(logger.timestamp_format(), "%m/%d/%Y %H:%M:%S%.3f");

    clear_env();
}

#[test]
#[serial]
fn level_names_parse_case_insensitively() {
    clear_env();
    env::set_var("LOG_LEVEL", "warn");

    let logger = Logger::new(None);
    logger.seed_from_env().unwrap();

    assert_eq!(logger.level(), Level::Warn);

    clear_env();
}

#[test]
#[serial]
fn unparsable_level_fails_the_seed() {
    clear_env();
    env::set_var("LOG_LEVEL", "LOUD");

    let logger = Logger::new(None);
    let err = logger.seed_from_env().unwrap_err();

    match err {
        Error::InvalidEnvValue { name, value, .. } => {
            assert_eq!(name, "LOG_LEVEL");
            assert_eq!(value, "LOUD");
        }
        other => panic!("expected InvalidEnvValue, got {other:?}"),
    }

    clear_env();
}

#[test]
#[serial]
fn unparsable_bool_fails_the_seed() {
    clear_env();
    env::set_var("COUNT_MESSAGES", "yes");

    let logger = Logger::new(None);
    let err = logger.seed_from_env().unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidEnvValue {
            name: "COUNT_MESSAGES",
            ..
        }
    ));

    clear_env();
}

#[test]
#[serial]
fn counters_cannot_be_seeded() {
    clear_env();
    env::set_var("counter_fatal", "5");
    env::set_var("COUNTER_FATAL", "5");

    let logger = Logger::new(Some(LoggerConfig::new().print_to_stdout(false)));
    logger.seed_from_env().unwrap();

    assert_eq!(logger.count(Level::Fatal), 0);
    logger.log("still counts from zero", Level::Fatal).unwrap();
    assert_eq!(logger.count(Level::Fatal), 1);

    env::remove_var("counter_fatal");
    env::remove_var("COUNTER_FATAL");
    clear_env();
}

#[test]
#[serial]
fn seeded_config_drives_the_next_log_call() {
    clear_env();
    let log_file_path = common::generate_random_filename();
    env::set_var("LOG_LEVEL", "TRACE");
    env::set_var("PRINT_TO_STD_OUT", "false");
    env::set_var("PRINT_TO_FILE", "true");
    env::set_var("TS_FORMAT", "ts");
    env::set_var("LOG_FILE_PATH", &log_file_path);

    let logger = Logger::new(None);
    logger.seed_from_env().unwrap();
    logger.log("deep detail", Level::Trace).unwrap();

    let lines = common::read_log_lines(&log_file_path);
    assert_eq!(lines, vec!["[ts][TRACE]:deep detail".to_string()]);

    common::delete_file_if_exists(&log_file_path);
    clear_env();
}
