//! Filesystem walker for traversing directory structures
//!
//! Yields one [`DirVisit`] per directory in pre-order: a directory is visited
//! before any of its descendants, and each visit carries only that
//! directory's direct files.

use crate::error::DumpError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A visited directory and its direct (non-directory) entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirVisit {
    /// Path of the directory, as produced by joining onto the walk root
    pub path: PathBuf,
    /// Distance from the walk root (the root itself is 0)
    pub depth: usize,
    /// Direct files of the directory, in enumeration order
    pub files: Vec<PathBuf>,
}

impl DirVisit {
    /// Whether this visit is the walk root itself.
    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// Last path component of the directory.
    pub fn dir_name(&self) -> String {
        display_name(&self.path)
    }
}

/// File name of `path` for headers and namespace entries.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Filesystem walker configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerConfig {
    /// Whether to descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,
    /// Entry names to skip; an ignored directory prunes its whole subtree
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Maximum depth to traverse (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
    /// Visit directories and files in file-name order instead of filesystem order
    #[serde(default)]
    pub sort_entries: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_patterns: Vec::new(),
            max_depth: None,
            sort_entries: false,
        }
    }
}

impl WalkerConfig {
    fn is_ignored(&self, name: &str) -> bool {
        self.ignore_patterns.iter().any(|pattern| pattern == name)
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Stream directory visits in pre-order.
    ///
    /// The first error ends the useful part of the walk; callers treat it as fatal.
    pub fn visits(&self) -> DirVisits {
        let mut walk = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .max_depth(self.config.max_depth.unwrap_or(usize::MAX));
        if self.config.sort_entries {
            walk = walk.sort_by_file_name();
        }

        let filter_config = self.config.clone();
        let entries = walk.into_iter().filter_entry(move |entry| {
            entry.depth() == 0 || !filter_config.is_ignored(&entry.file_name().to_string_lossy())
        });

        DirVisits {
            root: self.root.clone(),
            config: self.config.clone(),
            entries: Box::new(entries),
        }
    }

    /// Collect every visit up front.
    pub fn walk(&self) -> Result<Vec<DirVisit>, DumpError> {
        self.visits().collect()
    }
}

/// Iterator over the directories of a walk
pub struct DirVisits {
    root: PathBuf,
    config: WalkerConfig,
    entries: Box<dyn Iterator<Item = walkdir::Result<DirEntry>>>,
}

impl Iterator for DirVisits {
    type Item = Result<DirVisit, DumpError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(source) => {
                    return Some(Err(DumpError::Walk {
                        root: self.root.clone(),
                        source,
                    }))
                }
            };

            // Files are listed with their directory; symlinks to directories
            // only show up here as directories when they are being followed.
            if !entry.file_type().is_dir() {
                continue;
            }

            let path = entry.path().to_path_buf();
            return Some(list_files(&path, &self.config).map(|files| DirVisit {
                path,
                depth: entry.depth(),
                files,
            }));
        }
    }
}

/// Direct non-directory entries of `dir`.
///
/// A symlink whose target is a directory counts as a directory; a broken
/// symlink counts as a file.
fn list_files(dir: &Path, config: &WalkerConfig) -> Result<Vec<PathBuf>, DumpError> {
    let read_dir_error = |source| DumpError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        if config.is_ignored(&entry.file_name().to_string_lossy()) {
            continue;
        }

        let path = entry.path();
        let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
        if !is_dir {
            files.push(path);
        }
    }

    if config.sort_entries {
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    }

    Ok(files)
}
