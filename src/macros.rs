//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and hand the result to
//! [`Log::log`](crate::Log::log). They accept any logger: a base [`Logger`](crate::Logger),
//! a decorator, a `Box<dyn Log>` or an `Arc`.
//!
//! # Examples
//!
//! ```
//! use layered_logger::prelude::*;
//! use layered_logger::info;
//!
//! let logger = LoggerBuilder::new().console().tag_level().build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use layered_logger::prelude::*;
/// # let logger = Logger::new(ConsoleSink::new());
/// use layered_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        use $crate::Log as _;
        $logger.log($level, &format!($($arg)+))
    }};
}

/// Log a fatal-level message.
///
/// ```
/// # use layered_logger::prelude::*;
/// # let logger = Logger::new(ConsoleSink::new());
/// use layered_logger::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use layered_logger::prelude::*;
/// # let logger = Logger::new(ConsoleSink::new());
/// use layered_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a noise-level message, the least severe level.
#[macro_export]
macro_rules! noise {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Noise, $($arg)+)
    };
}
