//! CLI domain: parse, route, output, and presentation only.
//! No traversal logic; the route table dispatches to the concat and namespace services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, WalkArgs};
pub use presentation::{
    format_concat_json, format_concat_text, format_namespace_json, format_namespace_text,
};
pub use route::RunContext;
