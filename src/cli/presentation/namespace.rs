//! Namespace listing for the map command.

use crate::namespace::NamespaceMap;
use std::fmt::Write;

/// One `Package:` block per namespace, in insertion order, each followed by a
/// blank line. An empty mapping renders as an empty string.
pub fn format_namespace_text(mapping: &NamespaceMap) -> String {
    let mut out = String::new();
    for (namespace, names) in mapping.iter() {
        let _ = writeln!(out, "Package: {}", namespace);
        for name in names {
            let _ = writeln!(out, "  - {}", name);
        }
        out.push('\n');
    }
    out
}

pub fn format_namespace_json(mapping: &NamespaceMap) -> String {
    serde_json::to_string_pretty(mapping).unwrap_or_else(|_| "{}".to_string())
}
