//! Clipboard Adapters
//!
//! - **InMemoryClipboard** - Holds the last text (testing, server sessions)
//! - **FileClipboard** - Writes the text to a file (command line)

mod file_clipboard;
mod in_memory;

pub use file_clipboard::FileClipboard;
pub use in_memory::InMemoryClipboard;
