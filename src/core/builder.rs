//! Logger construction helpers
//!
//! [`LoggerBuilder`] offers a handful of preset stacks plus a fluent API for
//! assembling any combination of sinks and decorators.

use super::{error::Result, log_level::LogLevel, logger::Log, logger::Logger, sink::OutputSink};
use super::timestamp::TimestampFormat;
use crate::decorators::{LevelFilter, LevelTagger, LogExt, Timestamper};
use crate::sinks::{ConsoleSink, FileSink, MultiSink, NetworkSink};
use std::path::PathBuf;

enum Layer {
    LevelTag,
    MinLevel(LogLevel),
    Timestamp(TimestampFormat),
}

/// Builder for constructing logger chains with a fluent API
///
/// Sinks receive each line in the order they were added. Decorator layers wrap
/// in call order: the first layer sits directly on the base logger, so its
/// prefix appears first in the output line.
///
/// # Example
/// ```
/// use layered_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = LoggerBuilder::new()
///     .sink(ConsoleSink::with_writer(buffer.clone()))
///     .network("syslog://localhost:514")
///     .timestamp_format(TimestampFormat::Custom("12:00".to_string()))
///     .tag_level()
///     .min_level(LogLevel::Warning)
///     .build();
///
/// logger.info("filtered out");
/// logger.warning("low disk");
/// assert_eq!(buffer.contents(), "[12:00] [2] low disk\n");
/// ```
pub struct LoggerBuilder {
    sinks: Vec<Box<dyn OutputSink>>,
    layers: Vec<Layer>,
}

impl LoggerBuilder {
    /// Create a builder with no sinks and no decorators
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// Console logger that tags each message with its level
    pub fn console_with_level() -> LevelTagger<Logger> {
        Logger::new(ConsoleSink::new()).tagged()
    }

    /// File logger that drops messages below `Info`
    ///
    /// The returned filter keeps its setter reachable, so the threshold can be
    /// changed later with [`LevelFilter::set_min_level`].
    pub fn file_with_level_filter(path: impl Into<PathBuf>) -> Result<LevelFilter<Logger>> {
        Ok(LevelFilter::new(Logger::new(FileSink::new(path)?)))
    }

    /// File logger that prefixes each message with a local timestamp
    pub fn file_with_timestamp(path: impl Into<PathBuf>) -> Result<Timestamper<Logger>> {
        Ok(Logger::new(FileSink::new(path)?).timestamped())
    }

    /// Add a sink
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: OutputSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Add a stdout sink
    #[must_use = "builder methods return a new value"]
    pub fn console(self) -> Self {
        self.sink(ConsoleSink::new())
    }

    /// Add a file sink, opening `path` immediately
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be opened for appending; nothing is built.
    pub fn file(self, path: impl Into<PathBuf>) -> Result<Self> {
        Ok(self.sink(FileSink::new(path)?))
    }

    /// Add a network sink for `address`
    #[must_use = "builder methods return a new value"]
    pub fn network(self, address: impl Into<String>) -> Self {
        self.sink(NetworkSink::new(address))
    }

    /// Prefix messages with the local time
    #[must_use = "builder methods return a new value"]
    pub fn timestamp(self) -> Self {
        self.timestamp_format(TimestampFormat::default())
    }

    /// Prefix messages with a timestamp in `format`
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.layers.push(Layer::Timestamp(format));
        self
    }

    /// Prefix messages with their level ordinal
    #[must_use = "builder methods return a new value"]
    pub fn tag_level(mut self) -> Self {
        self.layers.push(Layer::LevelTag);
        self
    }

    /// Drop messages less severe than `level`
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.layers.push(Layer::MinLevel(level));
        self
    }

    /// Build the chain
    pub fn build(self) -> Box<dyn Log> {
        let mut sinks = self.sinks;
        let sink: Box<dyn OutputSink> = if sinks.len() == 1 {
            sinks.remove(0)
        } else {
            Box::new(MultiSink::new(sinks))
        };

        let mut logger = Logger::from_boxed(sink).boxed();
        for layer in self.layers {
            logger = match layer {
                Layer::LevelTag => logger.tagged().boxed(),
                Layer::MinLevel(level) => logger.filtered(level).boxed(),
                Layer::Timestamp(format) => logger.timestamped_with(format).boxed(),
            };
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for a logger chain
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
