//! Content Adapters
//!
//! Implementations of the ContentSource port.
//!
//! - **FileContentSource** - Reads the document from disk
//! - **HttpContentSource** - Fetches the document from a published site

mod file_content_source;
mod http_content_source;

pub use file_content_source::FileContentSource;
pub use http_content_source::HttpContentSource;
