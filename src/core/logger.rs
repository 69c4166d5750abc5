//! Logger trait and the base sink-backed logger

use super::{error::Result, log_level::LogLevel, sink::OutputSink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Anything that accepts a level and a message.
///
/// Implemented by the base [`Logger`] and by every decorator in
/// [`crate::decorators`]. Logging never fails from the caller's point of view.
pub trait Log: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);

    /// Flush buffered output further down the chain
    fn flush(&self) -> Result<()> {
        Ok(())
    }

    #[inline]
    fn fatal(&self, message: &str) {
        self.log(LogLevel::Fatal, message);
    }

    #[inline]
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    #[inline]
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    fn noise(&self, message: &str) {
        self.log(LogLevel::Noise, message);
    }
}

impl<L: Log + ?Sized> Log for Box<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

impl<L: Log + ?Sized> Log for Arc<L> {
    fn log(&self, level: LogLevel, message: &str) {
        (**self).log(level, message);
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// Base logger: forwards every message, unchanged, to exactly one sink.
///
/// The level is ignored here; filtering and tagging are the decorators' job.
/// The sink sits behind a mutex so one chain can be shared across threads.
pub struct Logger {
    sink: Mutex<Box<dyn OutputSink>>,
}

impl Logger {
    #[must_use]
    pub fn new<S: OutputSink + 'static>(sink: S) -> Self {
        Self::from_boxed(Box::new(sink))
    }

    #[must_use]
    pub fn from_boxed(sink: Box<dyn OutputSink>) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Name of the owned sink
    pub fn sink_name(&self) -> String {
        self.sink.lock().name().to_string()
    }
}

impl Log for Logger {
    fn log(&self, _level: LogLevel, message: &str) {
        let mut sink = self.sink.lock();
        if let Err(e) = sink.output(message) {
            eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
        }
    }

    fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let sink = self.sink.get_mut();
        if let Err(e) = sink.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush sink '{}' during shutdown: {}",
                sink.name(),
                e
            );
        }
    }
}
