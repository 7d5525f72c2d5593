//! World → ego conversion of loader sweeps.

use lidarseg_core::{ClassId, LabeledCloud, PointCloud, Pose};

use crate::table::PointTable;

/// Maps world-frame sweep coordinates into the vehicle frame of `pose`.
pub trait EgoTransform {
    fn to_ego(&self, xyz: &[[f64; 3]], pose: &Pose) -> Vec<[f64; 3]>;
}

/// Applies the inverse of the sweep pose: `Rᵀ (p - t)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseInverse;

impl EgoTransform for PoseInverse {
    fn to_ego(&self, xyz: &[[f64; 3]], pose: &Pose) -> Vec<[f64; 3]> {
        pose.points_to_ego(xyz)
    }
}

/// Build the `(N, 4)` ego-frame cloud `[x, y, z, i]` for one validated frame.
///
/// `labels` must already match the table length, which validation guarantees.
pub fn frame_to_ego(
    table: &PointTable,
    labels: &[ClassId],
    pose: &Pose,
    transform: &dyn EgoTransform,
) -> lidarseg_core::Result<LabeledCloud> {
    let ego = transform.to_ego(&table.xyz(), pose);
    let mut cloud = PointCloud::with_capacity(ego.len());
    for (p, i) in ego.iter().zip(table.rows.iter().map(|r| r.i)) {
        cloud.push([p[0] as f32, p[1] as f32, p[2] as f32, i]);
    }
    LabeledCloud::new(cloud, labels.to_vec())
}
