//! Report rendering and output files.

pub mod generator;

pub use generator::*;
