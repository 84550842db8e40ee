//! Completion notice for the concat command.

use crate::concat::ConcatSummary;
use serde_json::json;
use std::path::Path;

pub fn format_concat_text(output_file: &Path) -> String {
    format!("All files dumped into {}", output_file.display())
}

pub fn format_concat_json(output_file: &Path, summary: &ConcatSummary) -> String {
    let value = json!({
        "output": output_file.display().to_string(),
        "directories": summary.directories,
        "files": summary.files,
        "unreadable": summary.unreadable,
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
}
