use std::path::PathBuf;

use thiserror::Error;

/// Problems with an arm geometry or its on-disk representation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must be greater than 0, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("joint limit must be within (0, 180], got {0}")]
    JointLimit(f64),

    #[error("failed to read geometry file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse geometry: {0}")]
    Parse(#[from] serde_json::Error),
}
