//! Decorator dropping messages less severe than a threshold

use super::LogDecorator;
use crate::core::{Log, LogLevel, Result};
use parking_lot::RwLock;

/// Delegates a message only if its level is at least as severe as
/// `min_level`; everything else is dropped silently.
///
/// The threshold is the one piece of a chain that can change after
/// construction. [`set_min_level`](Self::set_min_level) takes `&self`, so a
/// filter shared through an `Arc` can be retuned while other threads log; a
/// `log` call that starts after `set_min_level` returns sees the new value.
pub struct LevelFilter<L> {
    inner: L,
    min_level: RwLock<LogLevel>,
}

impl<L: Log> LevelFilter<L> {
    /// Wrap `inner` with the default `Info` threshold
    pub fn new(inner: L) -> Self {
        Self::with_min_level(inner, LogLevel::default())
    }

    pub fn with_min_level(inner: L, min_level: LogLevel) -> Self {
        Self {
            inner,
            min_level: RwLock::new(min_level),
        }
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    /// Whether a message at `level` would currently pass
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.is_at_least(self.min_level())
    }
}

impl<L: Log> Log for LevelFilter<L> {
    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        self.inner.log(level, message);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}

impl<L: Log> LogDecorator for LevelFilter<L> {
    type Inner = L;

    fn inner(&self) -> &L {
        &self.inner
    }

    fn into_inner(self) -> L {
        self.inner
    }
}
