//! Table row parser for boxed deployment listings.
//!
//! The listing is a fixed six-column table drawn with box characters:
//!
//! ```text
//! ┌───────────┬─────────┬─────────┬──────────┬────────┬──────────┐
//! │ Function  │ Version │ Trigger │ Location │ Memory │ Runtime  │
//! ├───────────┼─────────┼─────────┼──────────┼────────┼──────────┤
//! │ sendEmail │ v2      │ https   │ us-east1 │ 256MB  │ nodejs18 │
//! └───────────┴─────────┴─────────┴──────────┴────────┴──────────┘
//! ```
//!
//! Columns are taken by position. Cell content is never validated.

use crate::models::{ParseOutcome, Record, SkipReason};
use tracing::debug;

/// Vertical bar separating cells (U+2502).
pub const COLUMN_SEPARATOR: char = '│';

/// Horizontal rule character (U+2500).
pub const RULE_CHAR: char = '─';

/// Label of the name column in the header row.
pub const HEADER_LABEL: &str = "Function";

/// Leading border + six data columns + trailing border.
const MIN_SEGMENTS: usize = 7;

/// Result of parsing a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Record(Record),
    Skipped(SkipReason),
}

/// Parse one line of sanitized report text.
///
/// Segments past the sixth data column are ignored.
pub fn parse_row(line: &str) -> RowOutcome {
    if !line.contains(COLUMN_SEPARATOR) {
        return RowOutcome::Skipped(SkipReason::NoSeparator);
    }

    let cells: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    if cells.len() < MIN_SEGMENTS {
        return RowOutcome::Skipped(SkipReason::TooFewColumns);
    }

    let name = cells[1].trim();
    if name.is_empty() {
        return RowOutcome::Skipped(SkipReason::EmptyName);
    }
    if name == HEADER_LABEL {
        return RowOutcome::Skipped(SkipReason::Header);
    }
    if name.starts_with(RULE_CHAR) {
        return RowOutcome::Skipped(SkipReason::Border);
    }

    RowOutcome::Record(Record {
        name: name.to_string(),
        version: cells[2].trim().to_string(),
        trigger: cells[3].trim().to_string(),
        location: cells[4].trim().to_string(),
        memory: cells[5].trim().to_string(),
        runtime: cells[6].trim().to_string(),
    })
}

/// Parse every line of sanitized report text, in input order.
pub fn parse_table(text: &str) -> ParseOutcome {
    let mut outcome = ParseOutcome::default();

    for (index, line) in text.lines().enumerate() {
        match parse_row(line) {
            RowOutcome::Record(record) => outcome.records.push(record),
            RowOutcome::Skipped(reason) => {
                // Blank and title lines are expected; only note table-looking ones.
                if reason != SkipReason::NoSeparator {
                    debug!("Skipping line {}: {}", index + 1, reason);
                }
                outcome.skipped.record(reason);
            }
        }
    }

    debug!(
        "Parsed {} records, skipped {} lines",
        outcome.records.len(),
        outcome.skipped.total()
    );

    outcome
}
