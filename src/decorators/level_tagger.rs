//! Decorator prefixing each message with its numeric level

use super::LogDecorator;
use crate::core::{Log, LogLevel, Result};

/// Rewrites `message` to `"[<ordinal>] message"` and always delegates.
///
/// ```
/// use layered_logger::prelude::*;
///
/// let buffer = SharedBuffer::new();
/// let logger = LevelTagger::new(Logger::new(ConsoleSink::with_writer(buffer.clone())));
/// logger.warning("disk almost full");
/// assert_eq!(buffer.contents(), "[2] disk almost full\n");
/// ```
pub struct LevelTagger<L> {
    inner: L,
}

impl<L: Log> LevelTagger<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: Log> Log for LevelTagger<L> {
    fn log(&self, level: LogLevel, message: &str) {
        let tagged = format!("[{}] {}", level.ordinal(), message);
        self.inner.log(level, &tagged);
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}

impl<L: Log> LogDecorator for LevelTagger<L> {
    type Inner = L;

    fn inner(&self) -> &L {
        &self.inner
    }

    fn into_inner(self) -> L {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::{ConsoleSink, SharedBuffer};
    use crate::Logger;

    #[test]
    fn test_tag_uses_ordinal() {
        let buffer = SharedBuffer::new();
        let logger = LevelTagger::new(Logger::new(ConsoleSink::with_writer(buffer.clone())));

        logger.fatal("f");
        logger.noise("n");

        assert_eq!(buffer.contents(), "[0] f\n[5] n\n");
    }

    #[test]
    fn test_repeated_tagging() {
        let buffer = SharedBuffer::new();
        let logger = LevelTagger::new(LevelTagger::new(Logger::new(ConsoleSink::with_writer(
            buffer.clone(),
        ))));

        logger.info("twice");

        assert_eq!(buffer.contents(), "[3] [3] twice\n");
    }
}
