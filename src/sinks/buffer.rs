//! In-memory writer for capturing console output

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

/// Cloneable byte buffer; every clone writes into the same storage.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
