//! Error types for the dataset layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    /// A sampling stage rejected its parameters or input.
    #[error(transparent)]
    Core(#[from] lidarseg_core::Error),

    #[error("frame index {index} out of range for dataset of {len} frames")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DatasetError>;
