//! Core logger types and traits

pub mod builder;
pub mod error;
pub mod log_level;
pub mod logger;
pub mod sink;
pub mod timestamp;

pub use builder::LoggerBuilder;
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use logger::{Log, Logger};
pub use sink::OutputSink;
pub use timestamp::TimestampFormat;
