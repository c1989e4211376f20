//! Reading the raw deployment report from disk.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Failure to read the input report.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input report not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read input report {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the whole report as UTF-8 text.
///
/// Invalid UTF-8 surfaces as [`LoadError::Io`] with `InvalidData`.
pub fn load_report(path: &Path) -> Result<String, LoadError> {
    match std::fs::read_to_string(path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(LoadError::NotFound {
            path: path.to_path_buf(),
        }),
        Err(source) => Err(LoadError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
