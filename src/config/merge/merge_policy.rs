//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override these per key; unset keys fall back to serde defaults.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("map.extension", crate::namespace::DEFAULT_EXTENSION)?
        .set_default("concat.exclude_output", true)?
        .set_default("walk.follow_symlinks", false)?
        .set_default("walk.sort_entries", false)
}
