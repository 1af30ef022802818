//! Common utility functions

pub mod duration;
pub mod sanitize;

pub use duration::parse_duration;
pub use sanitize::{escape_html, mask_email};
