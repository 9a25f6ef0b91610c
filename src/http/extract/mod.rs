//! Request extractors.
//!
//! These wrap axum's own extractors so that rejections are reported in the same `{"error": …}`
//! shape as every other error.

pub mod json;
pub use json::Json;

pub mod path;
pub use path::Path;
