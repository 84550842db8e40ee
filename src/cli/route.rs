//! CLI route: single route table and run context. Dispatches to the concat and
//! namespace services and to presentation.

use crate::cli::parse::{Commands, OutputFormat, WalkArgs};
use crate::cli::presentation::{
    format_concat_json, format_concat_text, format_namespace_json, format_namespace_text,
};
use crate::concat::Concatenator;
use crate::config::{ConfigLoader, DirdumpConfig};
use crate::error::DumpError;
use crate::namespace::NamespaceMapper;
use crate::tree::walker::WalkerConfig;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;

/// Runtime context for CLI execution: the effective configuration.
pub struct RunContext {
    config: DirdumpConfig,
}

impl RunContext {
    /// Load configuration from `config_path`, or from the layered sources
    /// rooted at the working directory, and validate it.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, DumpError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(Path::new("."))?,
        };
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn from_config(config: DirdumpConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DirdumpConfig {
        &self.config
    }

    /// Run a command and return the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> Result<String, DumpError> {
        let started = Instant::now();
        let result = match command {
            Commands::Concat {
                base_path,
                output_file,
                walk,
                include_output,
                format,
            } => self.handle_concat(base_path, output_file, walk, *include_output, *format),
            Commands::Map {
                directory,
                extension,
                walk,
                format,
            } => self.handle_map(directory, extension.as_deref(), walk, *format),
            Commands::Config => self.config.to_toml(),
        };
        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            ok = result.is_ok(),
            "Command finished"
        );
        result
    }

    fn handle_concat(
        &self,
        base_path: &Path,
        output_file: &Path,
        walk: &WalkArgs,
        include_output: bool,
        format: OutputFormat,
    ) -> Result<String, DumpError> {
        let summary = Concatenator::new(base_path.to_path_buf())
            .with_walker_config(self.walker_config(walk))
            .exclude_output(self.config.concat.exclude_output && !include_output)
            .dump_to_file(output_file)?;

        Ok(match format {
            OutputFormat::Text => format_concat_text(output_file),
            OutputFormat::Json => format_concat_json(output_file, &summary),
        })
    }

    fn handle_map(
        &self,
        directory: &Path,
        extension: Option<&str>,
        walk: &WalkArgs,
        format: OutputFormat,
    ) -> Result<String, DumpError> {
        let extension = extension.unwrap_or(self.config.map.extension.as_str());
        let mapping = NamespaceMapper::new(directory.to_path_buf())
            .with_extension(extension)?
            .with_walker_config(self.walker_config(walk))
            .map()?;

        Ok(match format {
            OutputFormat::Text => format_namespace_text(&mapping),
            OutputFormat::Json => format_namespace_json(&mapping),
        })
    }

    /// Configured walk settings with command-line flags applied on top.
    fn walker_config(&self, args: &WalkArgs) -> WalkerConfig {
        let mut config = self.config.walk.clone();
        config.follow_symlinks |= args.follow_symlinks;
        config.sort_entries |= args.sort;
        if args.max_depth.is_some() {
            config.max_depth = args.max_depth;
        }
        for pattern in &args.ignore {
            if !config.ignore_patterns.contains(pattern) {
                config.ignore_patterns.push(pattern.clone());
            }
        }
        config
    }
}
