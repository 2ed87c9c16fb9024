//! Terminal output for the commands that do not print JSON

use std::fmt::Write;

use colored::Colorize;
use elevation_core::substance::SUBSTANCES;
use serde::Serialize;

/// Indented JSON, as every lookup command prints it
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// The human-readable menu
pub fn menu() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{}\n", "🌿 ═══ THE ELEVATION MENU ═══ 🌿".green().bold());
    for s in SUBSTANCES.iter() {
        let _ = writeln!(out, "  {:12} │ {}", s.key, s.name.bold());
        let _ = writeln!(out, "             │ Effects: {}", s.effects.join(", "));
        let _ = writeln!(out, "             │ Duration: {}", s.duration);
        let _ = writeln!(out);
    }
    out
}

/// One line naming every substance key
pub fn substance_list() -> String {
    format!(
        "Available substances: {}",
        elevation_core::substance_keys().join(", ")
    )
}
