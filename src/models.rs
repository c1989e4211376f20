//! Data models for the deployment report parser.
//!
//! This module contains the core data structures used throughout
//! the application for representing parsed functions, skipped rows,
//! and summary statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single deployed function parsed from one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Function identifier (never empty, never the header label).
    pub name: String,
    /// Version token, kept uninterpreted.
    pub version: String,
    /// Trigger type (e.g. `https`, `firestore`).
    pub trigger: String,
    /// Deployment region.
    pub location: String,
    /// Memory allocation descriptor.
    pub memory: String,
    /// Execution environment.
    pub runtime: String,
}

impl Record {
    /// Formats the record as a full-list line: `name|trigger|location|memory|runtime`.
    ///
    /// The version column is not part of this format.
    pub fn list_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}",
            self.name, self.trigger, self.location, self.memory, self.runtime
        )
    }
}

/// Reason a table line did not produce a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line has no vertical-bar box character.
    NoSeparator,
    /// Fewer than seven segments after splitting.
    TooFewColumns,
    /// The name cell is blank.
    EmptyName,
    /// The column header row.
    Header,
    /// A rule row drawn with `─`.
    Border,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSeparator => write!(f, "no column separator"),
            SkipReason::TooFewColumns => write!(f, "too few columns"),
            SkipReason::EmptyName => write!(f, "empty name"),
            SkipReason::Header => write!(f, "header row"),
            SkipReason::Border => write!(f, "border row"),
        }
    }
}

/// Tally of lines that were dropped while parsing, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SkipStats {
    pub no_separator: usize,
    pub too_few_columns: usize,
    pub empty_name: usize,
    pub header: usize,
    pub border: usize,
}

impl SkipStats {
    /// Counts one skipped line.
    pub fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::NoSeparator => self.no_separator += 1,
            SkipReason::TooFewColumns => self.too_few_columns += 1,
            SkipReason::EmptyName => self.empty_name += 1,
            SkipReason::Header => self.header += 1,
            SkipReason::Border => self.border += 1,
        }
    }

    /// Total number of skipped lines.
    pub fn total(&self) -> usize {
        self.no_separator + self.too_few_columns + self.empty_name + self.header + self.border
    }
}

/// Everything the row parser produced from one report.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Parsed records, in input order until sorted.
    pub records: Vec<Record>,
    /// Lines that did not become records.
    pub skipped: SkipStats,
}

impl ParseOutcome {
    /// Sorts records by name, byte-wise. Stable, so duplicates keep input order.
    pub fn sort_by_name(&mut self) {
        self.records.sort_by(|a, b| a.name.cmp(&b.name));
    }
}

/// Category value → count, enumerated in ascending key order.
pub type Breakdown = BTreeMap<String, usize>;

/// Aggregate counts over all parsed records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub total: usize,
    /// Counts by deployment region.
    pub by_region: Breakdown,
    /// Counts by trigger type.
    pub by_trigger: Breakdown,
    /// Counts by runtime.
    pub by_runtime: Breakdown,
}

/// Summary document written by `--summary-json`.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryDocument {
    /// Input report the summary was computed from.
    pub source: String,
    /// When the summary was generated.
    pub generated_at: DateTime<Utc>,
    /// The aggregate counts.
    pub summary: Summary,
    /// Lines dropped by the parser.
    pub skipped: SkipStats,
}
