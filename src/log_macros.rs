//! Per-level convenience macros over the process-wide logger.
//!
//! Each macro takes `format!`-style arguments and yields the `Result` of
//! the underlying [`log`](crate::log) call.

#[macro_export]
macro_rules! log_fatal {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Fatal)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Error)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Warn)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Info)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Debug)
    };
}

#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {
        $crate::log(&format!($($arg)*), $crate::Level::Trace)
    };
}
