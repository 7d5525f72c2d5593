//! Frame validation: drops sweeps whose points and labels cannot be paired.

use std::fmt;

use lidarseg_core::{ClassId, Pose};
use tracing::{info, warn};

use crate::table::{LabelTable, PointTable};

/// Why a frame was left out. Checks run in declaration order and the first
/// failing one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionReason {
    EmptyPoints,
    EmptyLabels,
    CountMismatch { points: usize, labels: usize },
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::EmptyPoints => write!(f, "empty LiDAR frame"),
            ExclusionReason::EmptyLabels => write!(f, "empty label array"),
            ExclusionReason::CountMismatch { points, labels } => {
                write!(f, "point mismatch: LiDAR={points}, labels={labels}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exclusion {
    pub scene: usize,
    pub frame: usize,
    pub reason: ExclusionReason,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "scene {}, frame {}: {}",
            self.scene, self.frame, self.reason
        )
    }
}

/// Scene-nested frames that passed validation.
///
/// The three outer vectors always have one entry per input scene, in input
/// order; a scene whose frames were all dropped is kept as an empty entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedScenes {
    pub points: Vec<Vec<PointTable>>,
    pub labels: Vec<Vec<Vec<ClassId>>>,
    pub poses: Vec<Vec<Pose>>,
    pub exclusions: Vec<Exclusion>,
}

impl ValidatedScenes {
    pub fn num_scenes(&self) -> usize {
        self.points.len()
    }

    pub fn total_frames(&self) -> usize {
        self.points.iter().map(Vec::len).sum()
    }

    /// All retained frames, flattened scene by scene.
    pub fn frames(&self) -> impl Iterator<Item = (&PointTable, &[ClassId], &Pose)> + '_ {
        self.points
            .iter()
            .zip(&self.labels)
            .zip(&self.poses)
            .flat_map(|((pts, lbls), poses)| {
                pts.iter()
                    .zip(lbls)
                    .zip(poses)
                    .map(|((p, l), pose)| (p, l.as_slice(), pose))
            })
    }
}

fn check_frame(
    points: Option<&PointTable>,
    labels: Option<&LabelTable>,
) -> Result<Vec<ClassId>, ExclusionReason> {
    let points = match points {
        Some(p) if !p.is_empty() => p,
        _ => return Err(ExclusionReason::EmptyPoints),
    };

    let labels = match labels {
        Some(l) if !l.is_empty() => l.class_ids(),
        _ => return Err(ExclusionReason::EmptyLabels),
    };

    if points.len() != labels.len() {
        return Err(ExclusionReason::CountMismatch {
            points: points.len(),
            labels: labels.len(),
        });
    }

    Ok(labels)
}

/// Keep only frames with a non-empty sweep whose row count matches its labels.
///
/// Inputs are parallel per-scene, per-frame sequences. Sequences of unequal
/// length are paired up to the shorter one. Every exclusion is logged and
/// recorded in [`ValidatedScenes::exclusions`]; retained frames are moved
/// through unchanged.
pub fn filter_frames(
    points: Vec<Vec<Option<PointTable>>>,
    labels: Vec<Vec<Option<LabelTable>>>,
    poses: Vec<Vec<Pose>>,
) -> ValidatedScenes {
    if points.len() != labels.len() || points.len() != poses.len() {
        warn!(
            points = points.len(),
            labels = labels.len(),
            poses = poses.len(),
            "scene counts differ; pairing up to the shortest"
        );
    }

    let mut out = ValidatedScenes::default();

    for (scene_idx, ((scene_pts, scene_lbls), scene_poses)) in
        points.into_iter().zip(labels).zip(poses).enumerate()
    {
        if scene_pts.len() != scene_lbls.len() || scene_pts.len() != scene_poses.len() {
            warn!(
                scene = scene_idx,
                points = scene_pts.len(),
                labels = scene_lbls.len(),
                poses = scene_poses.len(),
                "frame counts differ within scene; pairing up to the shortest"
            );
        }

        let mut kept_pts = Vec::new();
        let mut kept_lbls = Vec::new();
        let mut kept_poses = Vec::new();

        for (frame_idx, ((frame_pts, frame_lbls), pose)) in scene_pts
            .into_iter()
            .zip(scene_lbls)
            .zip(scene_poses)
            .enumerate()
        {
            match check_frame(frame_pts.as_ref(), frame_lbls.as_ref()) {
                Ok(class_ids) => {
                    // check_frame only succeeds on Some
                    if let Some(table) = frame_pts {
                        kept_pts.push(table);
                        kept_lbls.push(class_ids);
                        kept_poses.push(pose);
                    }
                }
                Err(reason) => {
                    let exclusion = Exclusion {
                        scene: scene_idx,
                        frame: frame_idx,
                        reason,
                    };
                    warn!("[SKIP] {exclusion}");
                    out.exclusions.push(exclusion);
                }
            }
        }

        out.points.push(kept_pts);
        out.labels.push(kept_lbls);
        out.poses.push(kept_poses);
    }

    info!(
        removed = out.exclusions.len(),
        "removed invalid frames (empty or mismatched)"
    );
    info!(total = out.total_frames(), "total valid frames");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::LidarRecord;

    fn sweep(n: usize) -> Option<PointTable> {
        Some(
            (0..n)
                .map(|k| LidarRecord {
                    x: k as f64,
                    y: 0.0,
                    z: 0.0,
                    i: 1.0,
                })
                .collect(),
        )
    }

    fn labels(n: usize) -> Option<LabelTable> {
        Some((0..n as i64).collect())
    }

    #[test]
    fn mismatch_is_excluded_with_counts() {
        let out = filter_frames(
            vec![vec![sweep(10), sweep(4)]],
            vec![vec![labels(8), labels(4)]],
            vec![vec![Pose::identity(); 2]],
        );
        assert_eq!(out.total_frames(), 1);
        assert_eq!(out.points[0][0].len(), 4);
        assert_eq!(
            out.exclusions,
            vec![Exclusion {
                scene: 0,
                frame: 0,
                reason: ExclusionReason::CountMismatch {
                    points: 10,
                    labels: 8
                },
            }]
        );
        assert_eq!(
            out.exclusions[0].to_string(),
            "scene 0, frame 0: point mismatch: LiDAR=10, labels=8"
        );
    }

    #[test]
    fn first_failing_check_wins() {
        let out = filter_frames(
            vec![vec![None, sweep(0), sweep(3), sweep(3)]],
            vec![vec![None, None, None, Some(LabelTable::default())]],
            vec![vec![Pose::identity(); 4]],
        );
        let reasons: Vec<_> = out.exclusions.iter().map(|e| e.reason).collect();
        assert_eq!(
            reasons,
            vec![
                ExclusionReason::EmptyPoints,
                ExclusionReason::EmptyPoints,
                ExclusionReason::EmptyLabels,
                ExclusionReason::EmptyLabels,
            ]
        );
        assert_eq!(out.total_frames(), 0);
    }

    #[test]
    fn emptied_scene_keeps_its_slot() {
        let out = filter_frames(
            vec![vec![None], vec![sweep(2)]],
            vec![vec![labels(1)], vec![labels(2)]],
            vec![vec![Pose::identity()], vec![Pose::identity()]],
        );
        assert_eq!(out.num_scenes(), 2);
        assert!(out.points[0].is_empty());
        assert!(out.labels[0].is_empty());
        assert!(out.poses[0].is_empty());
        assert_eq!(out.points[1].len(), 1);
        assert_eq!(out.exclusions[0].scene, 0);
    }

    #[test]
    fn retained_frames_are_unchanged_and_aligned() {
        let pose = Pose::from_yaw_translation(0.3, [1.0, 2.0, 3.0]);
        let out = filter_frames(
            vec![vec![sweep(3), sweep(5)]],
            vec![vec![labels(3), labels(5)]],
            vec![vec![Pose::identity(), pose]],
        );
        assert!(out.exclusions.is_empty());
        let frames: Vec<_> = out.frames().collect();
        assert_eq!(frames.len(), 2);
        for (pts, lbls, _) in &frames {
            assert_eq!(pts.len(), lbls.len());
        }
        assert_eq!(frames[1].0, &sweep(5).unwrap());
        assert_eq!(frames[1].1, &[0, 1, 2, 3, 4]);
        assert_eq!(*frames[1].2, pose);
    }

    #[test]
    fn unequal_scene_counts_pair_up_to_shortest() {
        let out = filter_frames(
            vec![vec![sweep(1)], vec![sweep(1)]],
            vec![vec![labels(1)]],
            vec![vec![Pose::identity()], vec![Pose::identity()]],
        );
        assert_eq!(out.num_scenes(), 1);
        assert_eq!(out.total_frames(), 1);
    }
}
