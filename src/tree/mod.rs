//! Directory tree traversal
//!
//! Shared pre-order walk used by both the concatenator and the namespace
//! mapper, plus the path helpers they need.

pub mod path;
pub mod walker;
