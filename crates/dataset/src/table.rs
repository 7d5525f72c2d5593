//! Per-frame tables handed over by the scene loader.
//!
//! Only the columns this crate consumes are modelled: `x`, `y`, `z`, `i` on
//! sweep rows and `class` on segmentation rows. Any other loader columns are
//! ignored when deserializing.

use lidarseg_core::ClassId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LidarRecord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Return intensity.
    pub i: f32,
}

/// One sweep in world coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable {
    pub rows: Vec<LidarRecord>,
}

impl PointTable {
    pub fn new(rows: Vec<LidarRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn xyz(&self) -> Vec<[f64; 3]> {
        self.rows.iter().map(|r| [r.x, r.y, r.z]).collect()
    }

    pub fn intensity(&self) -> Vec<f32> {
        self.rows.iter().map(|r| r.i).collect()
    }
}

impl FromIterator<LidarRecord> for PointTable {
    fn from_iter<T: IntoIterator<Item = LidarRecord>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemsegRecord {
    pub class: ClassId,
}

/// Per-point semantic annotations for one sweep.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTable {
    pub rows: Vec<SemsegRecord>,
}

impl LabelTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The `class` column.
    pub fn class_ids(&self) -> Vec<ClassId> {
        self.rows.iter().map(|r| r.class).collect()
    }
}

impl FromIterator<ClassId> for LabelTable {
    fn from_iter<T: IntoIterator<Item = ClassId>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().map(|class| SemsegRecord { class }).collect(),
        }
    }
}
