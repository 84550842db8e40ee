//! Path helpers: canonicalization, namespace derivation and base-names

use crate::error::DumpError;
use std::path::{Component, Path, PathBuf};

/// Canonicalize a path for identity comparisons.
///
/// Uses dunce so Windows paths stay in their familiar (non-UNC) form.
pub fn canonicalize_path(path: &Path) -> Result<PathBuf, DumpError> {
    dunce::canonicalize(path).map_err(|e| {
        DumpError::InvalidPath(format!("Failed to canonicalize {:?}: {}", path, e))
    })
}

/// Dotted namespace for `dir` relative to `root`.
///
/// Each normal path component becomes one namespace segment, so the result
/// does not depend on the platform separator. The root itself maps to the
/// empty string.
pub fn namespace_for(root: &Path, dir: &Path) -> Result<String, DumpError> {
    let relative = dir.strip_prefix(root).map_err(|_| {
        DumpError::InvalidPath(format!("{:?} is not inside {:?}", dir, root))
    })?;

    let segments: Vec<String> = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    Ok(segments.join("."))
}

/// Normalize a target extension to its dotted suffix form (`java` -> `.java`).
pub fn normalize_extension(extension: &str) -> Result<String, DumpError> {
    let trimmed = extension.trim();
    let bare = trimmed.trim_start_matches('.');
    if bare.is_empty() {
        return Err(DumpError::ConfigError(format!(
            "Invalid extension: {:?} (must name a file suffix such as .java)",
            extension
        )));
    }
    Ok(format!(".{}", bare))
}

/// Strip `suffix` from a file name.
///
/// A name consisting only of the suffix (e.g. `.java`) is a hidden file, not
/// an empty base-name, and is returned whole.
pub fn base_name<'a>(file_name: &'a str, suffix: &str) -> &'a str {
    match file_name.strip_suffix(suffix) {
        Some(stem) if !stem.is_empty() => stem,
        _ => file_name,
    }
}
