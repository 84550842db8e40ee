//! Shared test utilities for integration tests

use std::fs;
use std::path::Path;

/// Create `relative` (and its parents) under `root` with `contents`.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

/// Create an empty directory (and its parents) under `root`.
pub fn make_dir(root: &Path, relative: &str) {
    fs::create_dir_all(root.join(relative)).unwrap();
}

/// The section header the concatenator writes for `name`.
pub fn section(name: &str) -> String {
    let rule = "=".repeat(40);
    format!("\n{rule}\nDIRECTORY: {name}\n{rule}\n\n")
}

/// The block the concatenator writes for a readable file.
pub fn file_block(name: &str, contents: &str) -> String {
    format!("\n--- FILE: {name} ---\n\n{contents}\n\n")
}
