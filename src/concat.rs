//! Concatenator
//!
//! Walks a source tree and writes every file of every subdirectory into one
//! annotated text artifact. The walk root's own files are skipped. Each
//! visited subdirectory contributes one section header, and each of its
//! direct files contributes either its contents or an inline read error.

use crate::error::DumpError;
use crate::tree::path::canonicalize_path;
use crate::tree::walker::{display_name, DirVisit, Walker, WalkerConfig};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const SEPARATOR_WIDTH: usize = 40;

/// Counts reported once a dump completes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConcatSummary {
    /// Directory sections written
    pub directories: usize,
    /// Files whose contents were written
    pub files: usize,
    /// Files recorded as read errors
    pub unreadable: usize,
}

/// One file's contribution to the artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileBlock {
    Contents { name: String, text: String },
    Unreadable { name: String, reason: String },
}

impl FileBlock {
    /// Read `path` fully as UTF-8 text. Never fails: read errors become
    /// [`FileBlock::Unreadable`].
    pub fn read(path: &Path) -> Self {
        let name = display_name(path);
        match std::fs::read_to_string(path) {
            Ok(text) => FileBlock::Contents { name, text },
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Failed to read file");
                FileBlock::Unreadable {
                    name,
                    reason: e.to_string(),
                }
            }
        }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        match self {
            FileBlock::Contents { name, text } => {
                write!(out, "\n--- FILE: {} ---\n\n", name)?;
                out.write_all(text.as_bytes())?;
                out.write_all(b"\n\n")
            }
            FileBlock::Unreadable { name, reason } => {
                write!(out, "\n[Error reading {}: {}]\n\n", name, reason)
            }
        }
    }
}

/// Write the section header for a directory.
pub fn write_section_header<W: Write>(out: &mut W, dir_name: &str) -> std::io::Result<()> {
    let rule = "=".repeat(SEPARATOR_WIDTH);
    write!(out, "\n{}\nDIRECTORY: {}\n{}\n\n", rule, dir_name, rule)
}

/// Dumps a directory tree into a single text artifact
pub struct Concatenator {
    base_path: PathBuf,
    walker_config: WalkerConfig,
    exclude_output: bool,
}

impl Concatenator {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            walker_config: WalkerConfig::default(),
            exclude_output: true,
        }
    }

    pub fn with_walker_config(mut self, config: WalkerConfig) -> Self {
        self.walker_config = config;
        self
    }

    /// Whether an output file inside the walked tree is skipped (default: true)
    pub fn exclude_output(mut self, exclude: bool) -> Self {
        self.exclude_output = exclude;
        self
    }

    /// Create (or truncate) `output_file` and dump the tree into it.
    ///
    /// The handle is dropped on every exit path; buffered data is flushed
    /// explicitly on success so write errors surface.
    pub fn dump_to_file(&self, output_file: &Path) -> Result<ConcatSummary, DumpError> {
        info!(
            base_path = %self.base_path.display(),
            output = %output_file.display(),
            "Starting dump"
        );

        let file = File::create(output_file).map_err(|source| DumpError::OutputCreate {
            path: output_file.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let excluded = if self.exclude_output {
            canonicalize_path(output_file).ok()
        } else {
            None
        };

        let summary = self.write_filtered(&mut writer, excluded.as_deref())?;
        writer.flush()?;

        info!(
            directories = summary.directories,
            files = summary.files,
            unreadable = summary.unreadable,
            "Dump complete"
        );
        Ok(summary)
    }

    /// Dump the tree into any writer.
    pub fn write_dump<W: Write>(&self, out: &mut W) -> Result<ConcatSummary, DumpError> {
        self.write_filtered(out, None)
    }

    fn write_filtered<W: Write>(
        &self,
        out: &mut W,
        excluded: Option<&Path>,
    ) -> Result<ConcatSummary, DumpError> {
        let walker = Walker::with_config(self.base_path.clone(), self.walker_config.clone());
        let mut summary = ConcatSummary::default();

        for visit in walker.visits() {
            let visit = visit?;
            if visit.is_root() {
                continue;
            }
            self.write_directory(out, &visit, excluded, &mut summary)?;
        }

        Ok(summary)
    }

    fn write_directory<W: Write>(
        &self,
        out: &mut W,
        visit: &DirVisit,
        excluded: Option<&Path>,
        summary: &mut ConcatSummary,
    ) -> Result<(), DumpError> {
        debug!(directory = %visit.path.display(), files = visit.files.len(), "Dumping directory");

        write_section_header(out, &visit.dir_name())?;
        summary.directories += 1;

        for path in &visit.files {
            if is_excluded(path, excluded) {
                debug!(file = %path.display(), "Skipping output file");
                continue;
            }

            let block = FileBlock::read(path);
            match block {
                FileBlock::Contents { .. } => summary.files += 1,
                FileBlock::Unreadable { .. } => summary.unreadable += 1,
            }
            block.write_to(out)?;
        }

        Ok(())
    }
}

fn is_excluded(path: &Path, excluded: Option<&Path>) -> bool {
    match excluded {
        Some(excluded) => canonicalize_path(path)
            .map(|canonical| canonical == excluded)
            .unwrap_or(false),
        None => false,
    }
}
