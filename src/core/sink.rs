//! Output sink trait for log destinations

use super::error::Result;

/// A destination for fully formatted log lines.
///
/// `output` receives the final text without a line terminator; each sink
/// appends exactly one `\n` itself.
pub trait OutputSink: Send {
    fn output(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn output(&mut self, text: &str) -> Result<()> {
        (**self).output(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
