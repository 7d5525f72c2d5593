//! Sampling configuration for [`crate::FrameDataset`].

use std::path::Path;

use lidarseg_core::Error;
use lidarseg_filters::AugmentParams;
use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Rows in every delivered sample.
    #[serde(default = "default_num_points")]
    pub num_points: usize,

    /// Voxel edge length in metres.
    #[serde(default = "default_voxel_size")]
    pub voxel_size: f32,

    /// Apply random geometric augmentation on every access.
    #[serde(default = "default_augment")]
    pub augment: bool,

    #[serde(default)]
    pub augmentation: AugmentParams,
}

fn default_num_points() -> usize {
    16_384
}

fn default_voxel_size() -> f32 {
    0.05
}

fn default_augment() -> bool {
    true
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            num_points: default_num_points(),
            voxel_size: default_voxel_size(),
            augment: default_augment(),
            augmentation: AugmentParams::default(),
        }
    }
}

impl DatasetConfig {
    /// Reject parameters that every access would fail on.
    pub fn validate(&self) -> std::result::Result<(), Error> {
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(Error::InvalidVoxelSize(self.voxel_size));
        }
        if self.num_points == 0 {
            return Err(Error::InvalidTargetCount(self.num_points));
        }
        self.augmentation.validate()
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: DatasetConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a YAML file.
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
