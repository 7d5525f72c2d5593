#![forbid(unsafe_code)]

//! Scene validation and per-frame sample access for segmentation training.
//!
//! Typical flow: the scene loader's tables go through [`filter_frames`], the
//! result is cached in ego coordinates by [`FrameDataset::new`], and a
//! training loop pulls fixed-size samples with [`FrameDataset::get`] or
//! whole batches with [`collate`].

pub mod batch;
pub mod class_map;
pub mod config;
pub mod dataset;
pub mod ego;
pub mod error;
pub mod summary;
pub mod table;
pub mod validate;

pub use batch::{collate, Batch};
pub use class_map::{ClassMap, UNKNOWN_CLASS};
pub use config::DatasetConfig;
pub use dataset::{FrameDataset, Sample};
pub use ego::{frame_to_ego, EgoTransform, PoseInverse};
pub use error::{DatasetError, Result};
pub use summary::{DatasetSummary, Stats};
pub use table::{LabelTable, LidarRecord, PointTable, SemsegRecord};
pub use validate::{filter_frames, Exclusion, ExclusionReason, ValidatedScenes};
