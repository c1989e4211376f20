//! Loading and cleaning raw report text.

pub mod loader;
pub mod sanitize;

pub use loader::{load_report, LoadError};
pub use sanitize::strip_ansi;
