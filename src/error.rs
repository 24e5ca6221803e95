//! Error types for loading quotes and writing statistics.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while reading quotes or writing statistics.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("failed to read quotes file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode quotes file {} (expected a JSON array of objects)", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write statistics to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode statistics")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StatsError>;
