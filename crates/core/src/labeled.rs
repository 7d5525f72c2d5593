use crate::{Error, PointCloud, Result};

/// Semantic class identifier carried per point.
pub type ClassId = i64;

/// A point cloud paired index-for-index with its semantic labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabeledCloud {
    pub points: PointCloud,
    pub labels: Vec<ClassId>,
}

impl LabeledCloud {
    pub fn new(points: PointCloud, labels: Vec<ClassId>) -> Result<Self> {
        if points.len() != labels.len() {
            return Err(Error::LengthMismatch {
                points: points.len(),
                labels: labels.len(),
            });
        }
        Ok(Self { points, labels })
    }

    pub fn from_rows(rows: &[[f32; 4]], labels: Vec<ClassId>) -> Result<Self> {
        Self::new(PointCloud::from_rows(rows), labels)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Gather the same rows from points and labels.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            points: self.points.select(indices),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    pub fn into_parts(self) -> (PointCloud, Vec<ClassId>) {
        (self.points, self.labels)
    }
}
