//! Decorator prefixing each message with the current local time

use super::LogDecorator;
use crate::core::{Log, LogLevel, Result, TimestampFormat};

/// Rewrites `message` to `"[<timestamp>] message"` using the wall-clock time
/// at the moment `log` runs, then always delegates.
///
/// The default format is `YYYY-MM-DD HH:MM:SS` in local time.
pub struct Timestamper<L> {
    inner: L,
    format: TimestampFormat,
}

impl<L: Log> Timestamper<L> {
    pub fn new(inner: L) -> Self {
        Self::with_format(inner, TimestampFormat::default())
    }

    /// Use a different timestamp format
    ///
    /// ```
    /// use layered_logger::prelude::*;
    ///
    /// let logger = Timestamper::with_format(
    ///     Logger::new(ConsoleSink::new()),
    ///     TimestampFormat::Rfc3339,
    /// );
    /// assert_eq!(logger.format(), &TimestampFormat::Rfc3339);
    /// ```
    pub fn with_format(inner: L, format: TimestampFormat) -> Self {
        Self { inner, format }
    }

    pub fn format(&self) -> &TimestampFormat {
        &self.format
    }
}

impl<L: Log> Log for Timestamper<L> {
    fn log(&self, level: LogLevel, message: &str) {
        let stamped = format!("[{}] {}", self.format.now(), message);
        self.inner.log(level, &stamped);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}

impl<L: Log> LogDecorator for Timestamper<L> {
    type Inner = L;

    fn inner(&self) -> &L {
        &self.inner
    }

    fn into_inner(self) -> L {
        self.inner
    }
}
