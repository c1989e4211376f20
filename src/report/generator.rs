//! Output generation.
//!
//! This module renders the function list, the name list, the plain-text
//! summary and the JSON summary document, and writes them to disk.

use crate::models::{Breakdown, Record, SkipStats, Summary, SummaryDocument};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Render one `name|trigger|location|memory|runtime` line per record.
pub fn render_function_list(records: &[Record]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&record.list_line());
        output.push('\n');
    }

    output
}

/// Render one function name per line.
pub fn render_name_list(records: &[Record]) -> String {
    let mut output = String::new();

    for record in records {
        output.push_str(&record.name);
        output.push('\n');
    }

    output
}

/// Render the human-readable summary printed to stdout.
pub fn render_summary(summary: &Summary) -> String {
    let mut output = String::new();

    output.push_str(&format!("TOTAL DEPLOYED FUNCTIONS: {}\n", summary.total));
    output.push_str(&render_breakdown("By Region", &summary.by_region));
    output.push_str(&render_breakdown("By Trigger Type", &summary.by_trigger));
    output.push_str(&render_breakdown("By Runtime", &summary.by_runtime));

    output
}

/// Render one labeled breakdown, preceded by a blank line.
fn render_breakdown(label: &str, counts: &Breakdown) -> String {
    let mut section = String::new();

    section.push_str(&format!("\n{}:\n", label));
    for (key, count) in counts {
        section.push_str(&format!("  {}: {}\n", key, count));
    }

    section
}

/// Render the skipped-line tally shown with `--show-skipped`.
pub fn render_skipped(skipped: &SkipStats) -> String {
    let mut section = String::new();

    section.push_str(&format!("\nSkipped Lines: {}\n", skipped.total()));
    section.push_str(&format!("  header: {}\n", skipped.header));
    section.push_str(&format!("  border: {}\n", skipped.border));
    section.push_str(&format!("  empty name: {}\n", skipped.empty_name));
    section.push_str(&format!("  too few columns: {}\n", skipped.too_few_columns));
    section.push_str(&format!("  no separator: {}\n", skipped.no_separator));

    section
}

/// Generate a JSON summary document.
pub fn generate_json_summary(document: &SummaryDocument) -> Result<String> {
    serde_json::to_string_pretty(document).map_err(Into::into)
}

/// Write rendered output to `path`, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
