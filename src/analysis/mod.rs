//! Analysis modules.
//!
//! Aggregation of parsed records into summary statistics.

pub mod aggregator;

pub use aggregator::*;
