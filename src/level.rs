use crate::error::ParseLevelError;
use std::fmt;
use std::str::FromStr;

/// Severity of a log message.
///
/// Levels are ordered by rank; a message is emitted when its rank is at or
/// below the configured minimum level's rank. `Off` is a threshold-only
/// value: setting it as the minimum level disables the logger entirely,
/// and no counter bucket exists for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    Off = 0,
    Fatal = 1,
    Error = 2,
    Warn = 3,
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl Level {
    /// Numeric rank used for threshold comparisons.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// The level's name as it appears in formatted entries.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Off => "OFF",
            Level::Fatal => "FATAL",
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const ALL: [Level; 7] = [
            Level::Off,
            Level::Fatal,
            Level::Error,
            Level::Warn,
            Level::Info,
            Level::Debug,
            Level::Trace,
        ];
        ALL.into_iter()
            .find(|level| s.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| ParseLevelError {
                value: s.to_string(),
            })
    }
}
