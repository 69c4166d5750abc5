//! Network sink placeholder
//!
//! Holds the address of a remote log collector. No transport exists yet, so
//! every line is accepted and discarded.

use crate::core::{OutputSink, Result};

/// Network sink that records its destination but performs no I/O
///
/// # Example
///
/// ```
/// use layered_logger::prelude::*;
///
/// let logger = Logger::new(NetworkSink::new("syslog://localhost:514"));
/// logger.info("accepted, not delivered");
/// ```
#[derive(Debug, Clone)]
pub struct NetworkSink {
    address: String,
}

impl NetworkSink {
    /// Create a sink for `address`; the address is stored as given, unparsed
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl OutputSink for NetworkSink {
    fn output(&mut self, _text: &str) -> Result<()> {
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "network"
    }
}
