// report/src/error.rs: errors of the snapshot and palette adapters.

use thiserror::Error;

/// Errors raised while loading engine input or configuration.
///
/// Preparation itself never fails; these only come from the adapters that
/// read snapshots and palettes.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReportError>;
