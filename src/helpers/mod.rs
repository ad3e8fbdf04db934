//! Helper functions shared by the renderer and generator
//!
//! Escaping, URL construction, date formatting and slug assignment
//! live here so every page is built from the same primitives.

mod date;
mod html;
mod slug;
mod url;

pub use date::*;
pub use html::*;
pub use slug::*;
pub use url::*;
