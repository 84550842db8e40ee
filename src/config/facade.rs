//! Config loader facade: assembles sources in precedence order.

use super::merge::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, local_file};
use super::DirdumpConfig;
use crate::error::DumpError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads [`DirdumpConfig`] from its layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a run started in `base_dir`.
    ///
    /// Precedence (lowest to highest): defaults, global file,
    /// `<base_dir>/dirdump.toml`, `DIRDUMP_*` environment variables.
    pub fn load(base_dir: &Path) -> Result<DirdumpConfig, DumpError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, base_dir)?;
        let builder = environment::add_to_builder(builder);

        let config: DirdumpConfig = builder.build()?.try_deserialize()?;
        debug!(base_dir = %base_dir.display(), "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file, replacing the file layers.
    ///
    /// Environment overrides still apply.
    pub fn load_from_file(path: &Path) -> Result<DirdumpConfig, DumpError> {
        if !path.is_file() {
            return Err(DumpError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);

        let config: DirdumpConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }
}
