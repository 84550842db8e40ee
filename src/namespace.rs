//! Namespace Mapper
//!
//! Groups files with a target extension by the directory they live in,
//! naming each directory by its dotted path relative to the walk root.

use crate::error::DumpError;
use crate::tree::path::{base_name, namespace_for, normalize_extension};
use crate::tree::walker::{display_name, Walker, WalkerConfig};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Extension matched when none is configured.
pub const DEFAULT_EXTENSION: &str = ".java";

/// Namespace -> base-names, in the order they were first encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NamespaceMap(IndexMap<String, Vec<String>>);

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a base-name under `namespace`; repeated namespaces accumulate.
    pub fn push(&mut self, namespace: &str, base_name: String) {
        self.0
            .entry(namespace.to_string())
            .or_default()
            .push(base_name);
    }

    pub fn get(&self, namespace: &str) -> Option<&[String]> {
        self.0.get(namespace).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// Builds a [`NamespaceMap`] for a directory tree
pub struct NamespaceMapper {
    root: PathBuf,
    extension: String,
    walker_config: WalkerConfig,
}

impl NamespaceMapper {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extension: DEFAULT_EXTENSION.to_string(),
            walker_config: WalkerConfig::default(),
        }
    }

    /// Match files ending in `extension` (`java` and `.java` are equivalent).
    pub fn with_extension(mut self, extension: &str) -> Result<Self, DumpError> {
        self.extension = normalize_extension(extension)?;
        Ok(self)
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Walk the tree and group matching files by namespace.
    ///
    /// Directories without a matching file get no entry. Any walk failure
    /// aborts the run.
    pub fn map(&self) -> Result<NamespaceMap, DumpError> {
        info!(
            root = %self.root.display(),
            extension = %self.extension,
            "Mapping namespaces"
        );

        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());
        let mut mapping = NamespaceMap::new();

        for visit in walker.visits() {
            let visit = visit?;
            let matching: Vec<String> = visit
                .files
                .iter()
                .map(|path| display_name(path))
                .filter(|name| name.ends_with(&self.extension))
                .collect();

            if matching.is_empty() {
                continue;
            }

            let namespace = namespace_for(&self.root, &visit.path)?;
            debug!(namespace = %namespace, count = matching.len(), "Found namespace");
            for name in &matching {
                mapping.push(&namespace, base_name(name, &self.extension).to_string());
            }
        }

        info!(namespaces = mapping.len(), "Namespace mapping complete");
        Ok(mapping)
    }
}
