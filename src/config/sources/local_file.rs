//! Local config file source: dirdump.toml in the working directory

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;

/// File name looked up in the base directory.
pub const LOCAL_CONFIG_FILE: &str = "dirdump.toml";

/// Add `<base_dir>/dirdump.toml` to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    base_dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let local_path = base_dir.join(LOCAL_CONFIG_FILE);
    if local_path.is_file() {
        return Ok(builder.add_source(File::from(local_path).required(false)));
    }
    Ok(builder)
}
