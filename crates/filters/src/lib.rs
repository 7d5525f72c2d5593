#![forbid(unsafe_code)]

pub mod augment;
pub mod resample;
pub mod voxel_downsample;

pub use augment::{augment, AugmentParams, Flip};
pub use resample::{resample, resample_indices};
pub use voxel_downsample::{voxel_downsample, voxel_key, VoxelKey};
