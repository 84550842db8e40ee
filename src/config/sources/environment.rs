//! Environment source: DIRDUMP_<SECTION>__<KEY> variables

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

/// Add `DIRDUMP_*` overrides, e.g. `DIRDUMP_MAP__EXTENSION=.kt`.
///
/// Values stay strings; typed fields are converted on deserialization, so
/// an extension like `.1` is never read as a number.
///
/// Single-underscore variables such as `DIRDUMP_LOG` belong to the logging
/// bootstrap and do not map onto any section key.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("DIRDUMP")
            .prefix_separator("_")
            .separator("__"),
    )
}
