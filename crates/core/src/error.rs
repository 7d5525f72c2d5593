use thiserror::Error;

/// Caller-contract violations raised by the downsampling and sampling stages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("voxel size must be finite and > 0, got {0}")]
    InvalidVoxelSize(f32),

    #[error("target point count must be >= 1, got {0}")]
    InvalidTargetCount(usize),

    #[error("cannot sample from an empty point set")]
    EmptyPointSet,

    #[error("invalid augmentation parameter `{field}`: {value}")]
    InvalidAugmentation { field: &'static str, value: String },

    #[error("point/label length mismatch: {points} points, {labels} labels")]
    LengthMismatch { points: usize, labels: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
