//! CLI presentation: text and json formatters per command family.

mod concat;
mod namespace;

pub use concat::{format_concat_json, format_concat_text};
pub use namespace::{format_namespace_json, format_namespace_text};
