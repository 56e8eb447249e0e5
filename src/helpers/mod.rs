//! Helper functions for page rendering
//!
//! Small pure functions shared by the metadata, structured-data, and
//! rendering layers.

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
