//! dirdump: Source Tree Dumping and Namespace Mapping
//!
//! Two single-pass utilities over a directory tree: the concatenator writes
//! every file of every subdirectory into one annotated text artifact, and the
//! namespace mapper groups files with a given extension by their dotted
//! directory namespace.

pub mod cli;
pub mod concat;
pub mod config;
pub mod error;
pub mod logging;
pub mod namespace;
pub mod tree;
