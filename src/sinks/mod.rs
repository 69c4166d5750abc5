//! Output sink implementations

pub mod buffer;
pub mod console;
pub mod file;
pub mod multi;
pub mod network;

pub use buffer::SharedBuffer;
pub use console::ConsoleSink;
pub use file::FileSink;
pub use multi::MultiSink;
pub use network::NetworkSink;

pub use crate::core::OutputSink;
