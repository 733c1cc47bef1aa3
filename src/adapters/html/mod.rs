//! HTML adapters - server-side page rendering.
//!
//! - `node` - escaped element/text tree
//! - `stats`, `chart`, `timeline`, `quiz`, `closing` - section renderers
//! - `page` - `HtmlPageRenderer`, the `PageRenderer` implementation

mod chart;
mod closing;
mod node;
mod page;
mod quiz;
mod stats;
mod timeline;

pub use node::{el, escape, render_nodes, text, Element, Node};
pub use page::{HtmlPageRenderer, PAGE_TITLE};
