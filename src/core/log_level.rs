//! Log level definitions
//!
//! Levels are ordered from most to least severe. A lower ordinal means a more
//! severe message, so `LogLevel::Fatal < LogLevel::Noise`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LogLevel {
    Fatal = 0,
    Error = 1,
    Warning = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Noise = 5,
}

impl LogLevel {
    /// Every level, most severe first
    pub const ALL: [LogLevel; 6] = [
        LogLevel::Fatal,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Noise,
    ];

    /// Numeric position of the level, `0` for `Fatal` up to `5` for `Noise`
    #[inline]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns `true` if `self` is as severe as `threshold` or more severe.
    ///
    /// ```
    /// use layered_logger::LogLevel;
    ///
    /// assert!(LogLevel::Error.is_at_least(LogLevel::Warning));
    /// assert!(LogLevel::Warning.is_at_least(LogLevel::Warning));
    /// assert!(!LogLevel::Info.is_at_least(LogLevel::Warning));
    /// ```
    #[inline]
    pub const fn is_at_least(self, threshold: LogLevel) -> bool {
        self.ordinal() <= threshold.ordinal()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::Fatal => "FATAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Noise => "NOISE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "FATAL" => Ok(LogLevel::Fatal),
            "ERROR" => Ok(LogLevel::Error),
            "WARN" | "WARNING" => Ok(LogLevel::Warning),
            "INFO" => Ok(LogLevel::Info),
            "DEBUG" => Ok(LogLevel::Debug),
            "NOISE" => Ok(LogLevel::Noise),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}
