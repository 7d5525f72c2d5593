use hashbrown::HashMap;
use lidarseg_core::{ClassId, Error, LabeledCloud, PointCloud, Result};

/// Integer voxel coordinates. 64-bit so fine grids over large scenes do not saturate.
pub type VoxelKey = (i64, i64, i64);

#[derive(Default, Clone)]
struct VoxelAccum {
    sx: f64,
    sy: f64,
    sz: f64,
    si: f64,
    n: usize,
    // (label, count) in first-seen order
    votes: Vec<(ClassId, u32)>,
}

impl VoxelAccum {
    fn add(&mut self, row: [f32; 4], label: ClassId) {
        self.sx += row[0] as f64;
        self.sy += row[1] as f64;
        self.sz += row[2] as f64;
        self.si += row[3] as f64;
        self.n += 1;
        match self.votes.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => self.votes.push((label, 1)),
        }
    }

    /// Most frequent label; ties go to the label seen first in this voxel.
    fn majority(&self) -> ClassId {
        let mut best = self.votes[0];
        for &(label, count) in &self.votes[1..] {
            if count > best.1 {
                best = (label, count);
            }
        }
        best.0
    }

    fn row(&self) -> [f32; 4] {
        let denom = self.n as f64;
        [
            (self.sx / denom) as f32,
            (self.sy / denom) as f32,
            (self.sz / denom) as f32,
            (self.si / denom) as f32,
        ]
    }
}

/// Integer cell coordinates of `p` for cubic voxels of edge `voxel_size`.
#[inline]
pub fn voxel_key(p: [f32; 3], voxel_size: f32) -> VoxelKey {
    (
        (p[0] / voxel_size).floor() as i64,
        (p[1] / voxel_size).floor() as i64,
        (p[2] / voxel_size).floor() as i64,
    )
}

/// Replace every occupied voxel with one point: the centroid of its members,
/// their mean intensity, and their majority label.
///
/// Output cells follow the order in which each voxel was first hit. Points
/// with a non-finite coordinate have no cell and are dropped.
///
/// # Errors
///
/// Returns [`Error::InvalidVoxelSize`] unless `voxel_size` is finite and > 0.
pub fn voxel_downsample(cloud: &LabeledCloud, voxel_size: f32) -> Result<LabeledCloud> {
    if !voxel_size.is_finite() || voxel_size <= 0.0 {
        return Err(Error::InvalidVoxelSize(voxel_size));
    }

    if cloud.is_empty() {
        return Ok(LabeledCloud::default());
    }

    let points = &cloud.points;
    let mut slots: HashMap<VoxelKey, usize> = HashMap::new();
    let mut cells: Vec<VoxelAccum> = Vec::new();
    let mut skipped = 0usize;

    for i in 0..cloud.len() {
        let row = points.row(i);
        if !row[0].is_finite() || !row[1].is_finite() || !row[2].is_finite() {
            skipped += 1;
            continue;
        }

        let key = voxel_key([row[0], row[1], row[2]], voxel_size);
        let slot = *slots.entry(key).or_insert_with(|| {
            cells.push(VoxelAccum::default());
            cells.len() - 1
        });
        cells[slot].add(row, cloud.labels[i]);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "voxel_downsample dropped non-finite points");
    }

    let mut out = PointCloud::with_capacity(cells.len());
    let mut labels = Vec::with_capacity(cells.len());
    for cell in &cells {
        out.push(cell.row());
        labels.push(cell.majority());
    }

    LabeledCloud::new(out, labels)
}
