use crate::config::LoggerConfig;
use crate::error::Error;
use crate::level::Level;
use chrono::Local;
use parking_lot::RwLock;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// The logging pipeline: configuration, per-level counters, and the
/// stdout/file sinks.
///
/// One instance per process is the intended shape; the free functions in
/// the crate root delegate to a shared global instance. The configuration
/// is re-read on every call, so setter changes take effect immediately for
/// subsequent messages.
pub struct Logger {
    config: RwLock<LoggerConfig>,
    // One bucket per level, Fatal..Trace, indexed by rank - 1.
    counters: [AtomicU64; 6],
}

impl Logger {
    pub fn new(config: Option<LoggerConfig>) -> Self {
        Logger {
            config: RwLock::new(config.unwrap_or_default()),
            counters: Default::default(),
        }
    }

    /// Logs `message` at `level`.
    ///
    /// The pipeline runs in a fixed order: a minimum level of `Off`
    /// returns before anything else happens, counting runs before the
    /// sink and threshold checks (so suppressed messages are still
    /// counted), and the stdout line is written before the file append,
    /// so a file failure surfaces after the stdout line is already out.
    ///
    /// # Errors
    ///
    /// [`Error::LogFilePathNotSet`] when the file sink is enabled with no
    /// path configured, [`Error::Io`] when the append fails. The message
    /// is not retried and its counter increment is not rolled back.
    pub fn log(&self, message: &str, level: Level) -> Result<(), Error> {
        let config = self.config.read();

        if config.level == Level::Off {
            return Ok(());
        }

        if config.count_messages {
            if let Some(counter) = self.counter(level) {
                counter.fetch_add(1, Ordering::Relaxed);
            }
        }

        if !config.print_to_stdout && !config.print_to_file {
            return Ok(());
        }

        if level.rank() > config.level.rank() {
            return Ok(());
        }

        let entry = format_entry(message, level, &config.timestamp_format);

        if config.print_to_stdout {
            println!("{}", entry);
        }

        if config.print_to_file {
            let path = config
                .log_file_path
                .as_deref()
                .ok_or(Error::LogFilePathNotSet)?;
            append_entry(path, &entry)?;
        }

        Ok(())
    }

    /// Cumulative count of messages received at `level` since process
    /// start. Always 0 for `Level::Off`.
    pub fn count(&self, level: Level) -> u64 {
        self.counter(level)
            .map_or(0, |counter| counter.load(Ordering::Relaxed))
    }

    /// Overwrites configuration fields from same-named environment
    /// variables (`LOG_LEVEL`, `COUNT_MESSAGES`, `PRINT_TO_STD_OUT`,
    /// `PRINT_TO_FILE`, `TS_FORMAT`, `LOG_FILE_PATH`).
    ///
    /// Intended to run once at startup, before the first `log` call.
    /// Unset or empty variables leave their field untouched; a value that
    /// fails to parse fails the whole call.
    pub fn seed_from_env(&self) -> Result<(), Error> {
        self.config.write().apply_env()
    }

    /// Renders every configuration field and counter as `name:value`
    /// pairs joined by `" ; "`. Diagnostics only, the exact layout is not
    /// a stable contract.
    pub fn describe_config(&self) -> String {
        let config = self.config.read();
        let path = config
            .log_file_path
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "null".to_string());
        let pairs = [
            ("LOG_LEVEL", config.level.to_string()),
            ("COUNT_MESSAGES", config.count_messages.to_string()),
            ("PRINT_TO_STD_OUT", config.print_to_stdout.to_string()),
            ("PRINT_TO_FILE", config.print_to_file.to_string()),
            ("TS_FORMAT", config.timestamp_format.clone()),
            ("LOG_FILE_PATH", path),
            ("counter_fatal", self.count(Level::Fatal).to_string()),
            ("counter_error", self.count(Level::Error).to_string()),
            ("counter_warn", self.count(Level::Warn).to_string()),
            ("counter_info", self.count(Level::Info).to_string()),
            ("counter_debug", self.count(Level::Debug).to_string()),
            ("counter_trace", self.count(Level::Trace).to_string()),
        ];

        let mut out = String::new();
        for (name, value) in pairs {
            out.push_str(name);
            out.push(':');
            out.push_str(&value);
            out.push_str(" ; ");
        }
        out
    }

    pub fn level(&self) -> Level {
        self.config.read().level
    }

    pub fn set_level(&self, level: Level) {
        self.config.write().level = level;
    }

    pub fn count_messages(&self) -> bool {
        self.config.read().count_messages
    }

    pub fn set_count_messages(&self, count: bool) {
        self.config.write().count_messages = count;
    }

    pub fn print_to_stdout(&self) -> bool {
        self.config.read().print_to_stdout
    }

    pub fn set_print_to_stdout(&self, enabled: bool) {
        self.config.write().print_to_stdout = enabled;
    }

    pub fn print_to_file(&self) -> bool {
        self.config.read().print_to_file
    }

    pub fn set_print_to_file(&self, enabled: bool) {
        self.config.write().print_to_file = enabled;
    }

    pub fn timestamp_format(&self) -> String {
        self.config.read().timestamp_format.clone()
    }

    pub fn set_timestamp_format(&self, format: impl Into<String>) {
        self.config.write().timestamp_format = format.into();
    }

    pub fn log_file_path(&self) -> Option<PathBuf> {
        self.config.read().log_file_path.clone()
    }

    pub fn set_log_file_path(&self, path: impl Into<PathBuf>) {
        self.config.write().log_file_path = Some(path.into());
    }

    fn counter(&self, level: Level) -> Option<&AtomicU64> {
        if level == Level::Off {
            return None;
        }
        Some(&self.counters[(level.rank() - 1) as usize])
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::new(None)
    }
}

fn format_entry(message: &str, level: Level, timestamp_format: &str) -> String {
    let timestamp = Local::now().format(timestamp_format);
    format!("[{}][{}]:{}", timestamp, level, message)
}

// A fresh handle per entry: open in append mode, write, flush, close.
fn append_entry(path: &Path, entry: &str) -> Result<(), Error> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", entry)?;
    file.flush()?;
    Ok(())
}
