//! Console sink implementation

use crate::core::{OutputSink, Result};
use std::io::Write;

/// Writes each line to standard output.
///
/// An alternative writer can be injected with [`ConsoleSink::with_writer`],
/// which is how tests capture console output without touching the process
/// stdout.
pub struct ConsoleSink {
    writer: Option<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { writer: None }
    }

    /// Route console output to `writer` instead of stdout
    ///
    /// # Examples
    ///
    /// ```
    /// use layered_logger::prelude::*;
    ///
    /// let buffer = SharedBuffer::new();
    /// let logger = Logger::new(ConsoleSink::with_writer(buffer.clone()));
    /// logger.info("plain");
    /// assert_eq!(buffer.contents(), "plain\n");
    /// ```
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Some(Box::new(writer)),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputSink for ConsoleSink {
    fn output(&mut self, text: &str) -> Result<()> {
        match self.writer {
            Some(ref mut writer) => writeln!(writer, "{}", text)?,
            None => writeln!(std::io::stdout().lock(), "{}", text)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.writer {
            Some(ref mut writer) => writer.flush()?,
            None => std::io::stdout().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::SharedBuffer;

    #[test]
    fn test_appends_line_terminator() {
        let buffer = SharedBuffer::new();
        let mut sink = ConsoleSink::with_writer(buffer.clone());

        sink.output("first").expect("output");
        sink.output("second").expect("output");

        assert_eq!(buffer.contents(), "first\nsecond\n");
    }

    #[test]
    fn test_embedded_newlines_are_not_escaped() {
        let buffer = SharedBuffer::new();
        let mut sink = ConsoleSink::with_writer(buffer.clone());

        sink.output("line one\nline two").expect("output");

        assert_eq!(buffer.contents(), "line one\nline two\n");
    }

    #[test]
    fn test_stdout_sink() {
        let mut sink = ConsoleSink::new();
        assert_eq!(sink.name(), "console");
        sink.flush().expect("flush stdout");
    }
}
