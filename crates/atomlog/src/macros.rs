//! crates/atomlog/src/macros.rs
//! `format!`-style logging macros over the process-wide logger.
//!
//! Every macro checks the threshold before formatting its arguments, so a
//! suppressed call costs one atomic load.

#[doc(hidden)]
#[macro_export]
macro_rules! __atomlog_emit {
    ($level:expr, $file:expr, $line:expr, $($arg:tt)+) => {{
        let logger = $crate::Logger::instance();
        let level: $crate::LogLevel = $level;
        if logger.enabled(level) {
            logger.log(level, &::std::format!($($arg)+), $file, $line);
        }
    }};
}

/// Logs an `INFO` message.
///
/// ```
/// atomlog::log_info!("listening on port {}", 8080);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)+) => {
        $crate::__atomlog_emit!($crate::LogLevel::Info, ::std::option::Option::None, 0, $($arg)+)
    };
}

/// Logs a `DEBUG` message.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)+) => {
        $crate::__atomlog_emit!($crate::LogLevel::Debug, ::std::option::Option::None, 0, $($arg)+)
    };
}

/// Logs a `WARN` message tagged with the invoking file and line.
///
/// ```
/// atomlog::log_warn!("Disk space below {}%", 20);
/// ```
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)+) => {
        $crate::__atomlog_emit!(
            $crate::LogLevel::Warn,
            ::std::option::Option::Some(::std::file!()),
            ::std::line!(),
            $($arg)+
        )
    };
}

/// Logs an `ERROR` message tagged with the invoking file and line.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)+) => {
        $crate::__atomlog_emit!(
            $crate::LogLevel::Error,
            ::std::option::Option::Some(::std::file!()),
            ::std::line!(),
            $($arg)+
        )
    };
}

/// Logs a message at an explicit level, without a location.
///
/// ```
/// use atomlog::LogLevel;
///
/// atomlog::log_custom!(LogLevel::Warn, "Custom warning: Network latency high");
/// ```
#[macro_export]
macro_rules! log_custom {
    ($level:expr, $($arg:tt)+) => {
        $crate::__atomlog_emit!($level, ::std::option::Option::None, 0, $($arg)+)
    };
}

/// Logs an `ERROR` message prefixed with a bold `CRITICAL:` marker, tagged
/// with the invoking file and line.
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)+) => {
        $crate::__atomlog_emit!(
            $crate::LogLevel::Error,
            ::std::option::Option::Some(::std::file!()),
            ::std::line!(),
            "{}{}",
            $crate::CRITICAL_MARKER,
            ::std::format_args!($($arg)+)
        )
    };
}

/// Logs at an explicit level only when the condition holds.
///
/// The condition is evaluated exactly once.
///
/// ```
/// use atomlog::LogLevel;
///
/// let retry = 3;
/// atomlog::log_if!(retry > 2, LogLevel::Error, "Exceeded max retry attempts: {}", retry);
/// ```
#[macro_export]
macro_rules! log_if {
    ($condition:expr, $level:expr, $($arg:tt)+) => {
        if $condition {
            $crate::log_custom!($level, $($arg)+);
        }
    };
}
