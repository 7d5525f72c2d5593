//! Indexed access to training samples.

use lidarseg_core::{ClassId, LabeledCloud, PointCloud, RandomSource};
use lidarseg_filters::{augment, resample, voxel_downsample};
use tracing::{debug, info};

use crate::config::DatasetConfig;
use crate::ego::{frame_to_ego, EgoTransform, PoseInverse};
use crate::error::{DatasetError, Result};
use crate::validate::ValidatedScenes;

/// One training example: exactly `num_points` rows, xyz centered on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub points: PointCloud,
    pub labels: Vec<ClassId>,
}

impl Sample {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn to_rows(&self) -> Vec<[f32; 4]> {
        self.points.to_rows()
    }

    /// Row-major `(K, 4)` buffer.
    pub fn flat_points(&self) -> Vec<f32> {
        self.points.to_array()
    }
}

/// Ego-frame sweeps cached at construction, sampled on demand.
///
/// Each [`FrameDataset::get_with`] call voxel-downsamples the cached frame,
/// resamples it to `num_points` rows, optionally augments it, and recenters
/// xyz. The cache itself is never modified, so a shared `&FrameDataset` can
/// serve several workers.
#[derive(Debug, Clone)]
pub struct FrameDataset {
    frames: Vec<LabeledCloud>,
    config: DatasetConfig,
}

impl FrameDataset {
    /// Convert every validated frame into its ego frame using the sweep pose.
    pub fn new(scenes: &ValidatedScenes, config: DatasetConfig) -> Result<Self> {
        Self::with_transform(scenes, config, &PoseInverse)
    }

    pub fn with_transform(
        scenes: &ValidatedScenes,
        config: DatasetConfig,
        transform: &dyn EgoTransform,
    ) -> Result<Self> {
        config.validate()?;
        let frames = scenes
            .frames()
            .map(|(table, labels, pose)| frame_to_ego(table, labels, pose, transform))
            .collect::<lidarseg_core::Result<Vec<_>>>()?;

        info!(
            frames = frames.len(),
            num_points = config.num_points,
            voxel_size = config.voxel_size,
            augment = config.augment,
            "frame dataset ready"
        );
        Ok(Self { frames, config })
    }

    /// Build from clouds that are already in the ego frame.
    pub fn from_frames(frames: Vec<LabeledCloud>, config: DatasetConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { frames, config })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// The cached ego-frame cloud for `index`.
    pub fn frame(&self, index: usize) -> Result<&LabeledCloud> {
        self.frames.get(index).ok_or(DatasetError::IndexOutOfRange {
            index,
            len: self.frames.len(),
        })
    }

    /// Sample `index` using the thread-local generator.
    pub fn get(&self, index: usize) -> Result<Sample> {
        self.get_with(index, &mut rand::thread_rng())
    }

    /// Sample `index`, drawing all randomness from `rng`.
    pub fn get_with<R: RandomSource + ?Sized>(&self, index: usize, rng: &mut R) -> Result<Sample> {
        let frame = self.frame(index)?;

        let reduced = voxel_downsample(frame, self.config.voxel_size)?;
        // resample gathers into fresh buffers; the cached frame is never touched
        let LabeledCloud { mut points, labels } =
            resample(&reduced, self.config.num_points, rng)?;

        if self.config.augment {
            augment(&mut points, &self.config.augmentation, rng);
        }
        points.recenter();

        debug!(
            index,
            raw = frame.len(),
            voxels = reduced.len(),
            rows = labels.len(),
            "sampled frame"
        );
        Ok(Sample { points, labels })
    }
}
