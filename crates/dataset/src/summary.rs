//! Exploratory statistics over validated scenes.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use lidarseg_core::{Aabb, ClassId};
use tracing::info;

use crate::class_map::ClassMap;
use crate::validate::ValidatedScenes;

/// min / max / mean / population standard deviation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std: f64,
}

impl Stats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean,
            std: var.sqrt(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub num_scenes: usize,
    pub num_frames: usize,
    pub points_per_frame: Option<Stats>,
    /// Per-frame world extent (`max - min`) along x, y, z.
    pub extent: [Option<Stats>; 3],
    pub classes_per_frame: Option<Stats>,
    /// Point count per class id, ascending by id.
    pub class_counts: BTreeMap<ClassId, usize>,
}

impl DatasetSummary {
    pub fn compute(scenes: &ValidatedScenes) -> Self {
        let mut points_per_frame = Vec::new();
        let mut extents: [Vec<f64>; 3] = Default::default();
        let mut classes_per_frame = Vec::new();
        let mut class_counts = BTreeMap::new();

        for (table, labels, _) in scenes.frames() {
            points_per_frame.push(table.len() as f64);

            let aabb: Aabb = table
                .rows
                .iter()
                .map(|r| [r.x as f32, r.y as f32, r.z as f32])
                .collect();
            if let Some(e) = aabb.extent() {
                for axis in 0..3 {
                    extents[axis].push(e[axis] as f64);
                }
            }

            let mut frame_classes = BTreeSet::new();
            for &label in labels {
                *class_counts.entry(label).or_insert(0usize) += 1;
                frame_classes.insert(label);
            }
            classes_per_frame.push(frame_classes.len() as f64);
        }

        Self {
            num_scenes: scenes.num_scenes(),
            num_frames: scenes.total_frames(),
            points_per_frame: Stats::from_values(&points_per_frame),
            extent: [
                Stats::from_values(&extents[0]),
                Stats::from_values(&extents[1]),
                Stats::from_values(&extents[2]),
            ],
            classes_per_frame: Stats::from_values(&classes_per_frame),
            class_counts,
        }
    }

    pub fn unique_classes(&self) -> Vec<ClassId> {
        self.class_counts.keys().copied().collect()
    }

    /// The `k` most frequent classes with their names, most frequent first.
    /// Equal counts are ordered by ascending class id.
    pub fn top_classes<'a>(
        &self,
        k: usize,
        names: &'a ClassMap,
    ) -> Vec<(ClassId, &'a str, usize)> {
        let mut ranked: Vec<(ClassId, usize)> =
            self.class_counts.iter().map(|(id, n)| (*id, *n)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
            .into_iter()
            .take(k)
            .map(|(id, n)| (id, names.name(id), n))
            .collect()
    }

    /// Render the report with top-`k` class names resolved through `names`.
    pub fn report(&self, k: usize, names: &ClassMap) -> String {
        let mut out = self.to_string();
        out.push_str(&format!("\nTop {k} most common classes:\n"));
        for (id, name, count) in self.top_classes(k, names) {
            out.push_str(&format!("  Class {id} ({name}): {count} points\n"));
        }
        out
    }

    /// Emit [`DatasetSummary::report`] through `tracing`, one line per event.
    pub fn log(&self, k: usize, names: &ClassMap) {
        for line in self.report(k, names).lines() {
            info!("{line}");
        }
    }
}

fn write_stats(f: &mut fmt::Formatter<'_>, title: &str, stats: Option<Stats>) -> fmt::Result {
    writeln!(f, "{title}:")?;
    match stats {
        Some(s) => {
            writeln!(f, "  min  = {:.2}", s.min)?;
            writeln!(f, "  max  = {:.2}", s.max)?;
            writeln!(f, "  mean = {:.2}", s.mean)?;
            writeln!(f, "  std  = {:.2}", s.std)
        }
        None => writeln!(f, "  n/a"),
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== DATASET SUMMARY =====")?;
        writeln!(f, "Number of scenes: {}", self.num_scenes)?;
        writeln!(f, "Number of frames: {}", self.num_frames)?;
        write_stats(f, "Points per frame", self.points_per_frame)?;
        for (axis, stats) in ["x", "y", "z"].iter().zip(self.extent) {
            write_stats(f, &format!("Spatial extent {axis}"), stats)?;
        }
        writeln!(f, "Semantic classes:")?;
        writeln!(f, "  total unique = {}", self.class_counts.len())?;
        writeln!(f, "  present      = {:?}", self.unique_classes())?;
        write_stats(f, "Classes per frame", self.classes_per_frame)
    }
}
