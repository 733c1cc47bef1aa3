//! Page session - explicit per-reader state driven by events.

mod events;
mod page_session;

pub use events::{PageEvent, PageUpdate};
pub use page_session::{PageSession, SessionOptions, SessionPorts};
