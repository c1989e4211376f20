//! Record aggregation and statistics.
//!
//! This module tallies parsed records by the categorical columns of the
//! listing and builds the [`Summary`] used by the reporters.

use crate::models::{Breakdown, Record, Summary};

/// Count records by an arbitrary categorical column.
///
/// Only observed values appear as keys; there is no zero fill.
pub fn count_by<F>(records: &[Record], key: F) -> Breakdown
where
    F: Fn(&Record) -> &str,
{
    let mut counts = Breakdown::new();

    for record in records {
        *counts.entry(key(record).to_string()).or_default() += 1;
    }

    counts
}

/// Count records by deployment region.
pub fn count_by_region(records: &[Record]) -> Breakdown {
    count_by(records, |r| r.location.as_str())
}

/// Count records by trigger type.
pub fn count_by_trigger(records: &[Record]) -> Breakdown {
    count_by(records, |r| r.trigger.as_str())
}

/// Count records by runtime.
pub fn count_by_runtime(records: &[Record]) -> Breakdown {
    count_by(records, |r| r.runtime.as_str())
}

/// Build the full summary over all records.
pub fn summarize(records: &[Record]) -> Summary {
    Summary {
        total: records.len(),
        by_region: count_by_region(records),
        by_trigger: count_by_trigger(records),
        by_runtime: count_by_runtime(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(name: &str, trigger: &str, location: &str, runtime: &str) -> Record {
        Record {
            name: name.to_string(),
            version: "v2".to_string(),
            trigger: trigger.to_string(),
            location: location.to_string(),
            memory: "256MB".to_string(),
            runtime: runtime.to_string(),
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            create_test_record("sendEmail", "https", "us-central1", "nodejs18"),
            create_test_record("onUserCreate", "firestore", "europe-west1", "nodejs18"),
            create_test_record("nightlyBackup", "scheduled", "us-central1", "nodejs20"),
            create_test_record("resize", "storage", "us-central1", "python311"),
        ]
    }

    #[test]
    fn test_count_by_region() {
        let counts = count_by_region(&sample_records());

        assert_eq!(counts.get("us-central1"), Some(&3));
        assert_eq!(counts.get("europe-west1"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_keys_enumerate_sorted() {
        let counts = count_by_trigger(&sample_records());
        let keys: Vec<&str> = counts.keys().map(String::as_str).collect();

        assert_eq!(keys, vec!["firestore", "https", "scheduled", "storage"]);
    }

    #[test]
    fn test_breakdowns_sum_to_total() {
        let summary = summarize(&sample_records());

        assert_eq!(summary.total, 4);
        assert_eq!(summary.by_region.values().sum::<usize>(), summary.total);
        assert_eq!(summary.by_trigger.values().sum::<usize>(), summary.total);
        assert_eq!(summary.by_runtime.values().sum::<usize>(), summary.total);
    }

    #[test]
    fn test_count_by_custom_column() {
        let counts = count_by(&sample_records(), |r| r.memory.as_str());
        assert_eq!(counts.get("256MB"), Some(&4));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);

        assert_eq!(summary.total, 0);
        assert!(summary.by_region.is_empty());
        assert!(summary.by_trigger.is_empty());
        assert!(summary.by_runtime.is_empty());
    }
}
