//! Parallel collation of samples into contiguous batch buffers.

use lidarseg_core::{seeded, ClassId};
use rayon::prelude::*;

use crate::dataset::{FrameDataset, Sample};
use crate::error::Result;

/// `batch_size` samples laid out back to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// `(batch_size, num_points, 4)` row-major.
    pub points: Vec<f32>,
    /// `(batch_size, num_points)` row-major.
    pub labels: Vec<ClassId>,
    pub batch_size: usize,
    pub num_points: usize,
}

/// Seed for the sample at `position` within a batch drawn with `seed`.
fn item_seed(seed: u64, position: usize) -> u64 {
    seed.wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(position as u64)
}

/// Sample `indices` in parallel and pack them into one [`Batch`].
///
/// Every item draws from its own generator seeded by `(seed, position)`, so
/// the batch is the same for a given seed regardless of thread scheduling.
pub fn collate(dataset: &FrameDataset, indices: &[usize], seed: u64) -> Result<Batch> {
    let samples: Vec<Sample> = indices
        .par_iter()
        .enumerate()
        .map(|(pos, &index)| {
            let mut rng = seeded(item_seed(seed, pos));
            dataset.get_with(index, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;

    let num_points = dataset.config().num_points;
    let mut points = Vec::with_capacity(samples.len() * num_points * 4);
    let mut labels = Vec::with_capacity(samples.len() * num_points);
    for sample in &samples {
        points.extend(sample.flat_points());
        labels.extend_from_slice(&sample.labels);
    }

    Ok(Batch {
        points,
        labels,
        batch_size: samples.len(),
        num_points,
    })
}
