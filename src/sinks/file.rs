//! File sink implementation

use crate::core::{LoggerError, OutputSink, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends each line to a file opened once at construction.
///
/// Writes go through a [`BufWriter`] and are not flushed per line; call
/// [`Log::flush`](crate::Log::flush) or drop the owning logger when the bytes
/// need to be on disk.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open `path` for appending, creating the file if needed
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::FileOpen`] if the file cannot be created or
    /// opened for appending.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(&path, e))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OutputSink for FileSink {
    fn output(&mut self, text: &str) -> Result<()> {
        self.writer.write_all(text.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // BufWriter would flush on its own drop too, but would swallow the error
        if let Err(e) = self.writer.flush() {
            eprintln!(
                "[LOGGER ERROR] Failed to flush '{}' on close: {}",
                self.path.display(),
                e
            );
        }
    }
}
