//! HTML post-processing collaborators
//!
//! The fetch pipeline never interprets HTML itself; it hands bodies to two
//! narrow collaborators: a text renderer for human-readable output and a
//! link extractor for search result pages.

mod links;
mod text;

pub use links::extract_result_links;
pub use text::{LynxRenderer, TextRenderer};
