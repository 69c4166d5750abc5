//! # Layered Logger
//!
//! A composable logging facade. Where a message goes and how it is rewritten
//! on the way are chosen independently:
//!
//! - **Sinks** deliver finished lines: console, file, network (placeholder),
//!   or several at once through a fan-out sink
//! - **Logger** forwards messages to exactly one sink
//! - **Decorators** wrap a logger to filter by level, tag with the level, or
//!   prefix a timestamp, and can be stacked in any order
//!
//! ```
//! use layered_logger::prelude::*;
//!
//! let buffer = SharedBuffer::new();
//! let logger = Logger::new(ConsoleSink::with_writer(buffer.clone()))
//!     .filtered(LogLevel::Warning);
//!
//! logger.info("x");
//! assert!(buffer.is_empty());
//!
//! logger.set_min_level(LogLevel::Info);
//! logger.info("x");
//! assert_eq!(buffer.contents(), "x\n");
//! ```

pub mod core;
pub mod decorators;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Log, LogLevel, Logger, LoggerBuilder, LoggerError, OutputSink, Result, TimestampFormat,
    };
    pub use crate::decorators::{LevelFilter, LevelTagger, LogDecorator, LogExt, Timestamper};
    pub use crate::sinks::{ConsoleSink, FileSink, MultiSink, NetworkSink, SharedBuffer};
}

pub use crate::core::{
    Log, LogLevel, Logger, LoggerBuilder, LoggerError, OutputSink, Result, TimestampFormat,
};
pub use crate::decorators::{LevelFilter, LevelTagger, LogDecorator, LogExt, Timestamper};
pub use crate::sinks::{ConsoleSink, FileSink, MultiSink, NetworkSink, SharedBuffer};
