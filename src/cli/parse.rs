//! CLI parse: clap types for dirdump. No behavior; definitions only.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dirdump - dump source trees and map them into namespaces
#[derive(Parser)]
#[command(name = "dirdump")]
#[command(about = "Dump source trees into one annotated file, or map them into dotted namespaces")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (used when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Concatenate every file under each subdirectory into one text file
    Concat {
        /// Root directory to dump (its own files are skipped)
        base_path: PathBuf,
        /// File to create or overwrite
        output_file: PathBuf,
        #[command(flatten)]
        walk: WalkArgs,
        /// Also dump the output file if it lies inside the tree
        #[arg(long)]
        include_output: bool,
        /// Completion notice format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Group files with a given extension by dotted directory namespace
    Map {
        /// Root directory to map
        directory: PathBuf,
        /// File extension to collect (default from config, ".java")
        #[arg(long)]
        extension: Option<String>,
        #[command(flatten)]
        walk: WalkArgs,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Print the effective configuration as TOML
    Config,
}

/// Traversal flags shared by concat and map
#[derive(Args, Debug, Clone, Default)]
pub struct WalkArgs {
    /// Descend into symlinked directories
    #[arg(long)]
    pub follow_symlinks: bool,
    /// Skip entries with this name (repeatable)
    #[arg(long = "ignore", value_name = "NAME")]
    pub ignore: Vec<String>,
    /// Maximum directory depth below the root
    #[arg(long)]
    pub max_depth: Option<usize>,
    /// Visit entries in file-name order for reproducible output
    #[arg(long)]
    pub sort: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
