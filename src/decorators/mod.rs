//! Logger decorators
//!
//! Each decorator owns exactly one inner logger and transforms or drops a
//! message before delegating to it. Decorators nest freely; the outermost one
//! sees the message first, so an inner decorator's prefix ends up further left
//! in the final line:
//!
//! ```
//! use layered_logger::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(ConsoleSink::with_writer(buffer.clone()))
//!     .tagged()
//!     .filtered(LogLevel::Warning);
//!
//! logger.info("dropped by the filter");
//! logger.error("disk failure");
//! assert_eq!(buffer.contents(), "[1] disk failure\n");
//! ```

pub mod level_filter;
pub mod level_tagger;
pub mod timestamper;

pub use level_filter::LevelFilter;
pub use level_tagger::LevelTagger;
pub use timestamper::Timestamper;

use crate::core::{Log, LogLevel, TimestampFormat};

/// A logger that wraps exactly one other logger
pub trait LogDecorator: Log {
    type Inner: Log;

    fn inner(&self) -> &Self::Inner;

    /// Unwrap the decorator, returning the logger it owned
    fn into_inner(self) -> Self::Inner
    where
        Self: Sized;
}

/// Fluent wrapping for any logger, building a chain bottom-up
pub trait LogExt: Log + Sized {
    #[must_use]
    fn tagged(self) -> LevelTagger<Self> {
        LevelTagger::new(self)
    }

    #[must_use]
    fn filtered(self, min_level: LogLevel) -> LevelFilter<Self> {
        LevelFilter::with_min_level(self, min_level)
    }

    #[must_use]
    fn timestamped(self) -> Timestamper<Self> {
        Timestamper::new(self)
    }

    #[must_use]
    fn timestamped_with(self, format: TimestampFormat) -> Timestamper<Self> {
        Timestamper::with_format(self, format)
    }

    #[must_use]
    fn boxed(self) -> Box<dyn Log>
    where
        Self: 'static,
    {
        Box::new(self)
    }
}

impl<L: Log + Sized> LogExt for L {}
