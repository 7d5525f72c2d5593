use lidarseg_core::{LabeledCloud, Pose};
use lidarseg_dataset::{
    filter_frames, DatasetConfig, ExclusionReason, FrameDataset, LabelTable, LidarRecord,
    PointTable,
};
use lidarseg_filters::{resample, voxel_downsample, AugmentParams};
use rand::prelude::*;

fn sweep(rows: &[[f64; 4]]) -> Option<PointTable> {
    Some(
        rows.iter()
            .map(|r| LidarRecord {
                x: r[0],
                y: r[1],
                z: r[2],
                i: r[3] as f32,
            })
            .collect(),
    )
}

fn labels(ids: &[i64]) -> Option<LabelTable> {
    Some(ids.iter().copied().collect())
}

/// downsample → resample on the three-point reference frame
#[test]
fn pipeline_downsample_then_pad() {
    let frame = LabeledCloud::from_rows(
        &[[0.0, 0.0, 0.0, 1.0], [0.01, 0.0, 0.0, 2.0], [5.0, 5.0, 5.0, 3.0]],
        vec![7, 7, 9],
    )
    .unwrap();

    let ds = voxel_downsample(&frame, 1.0).unwrap();
    assert_eq!(ds.len(), 2);
    let near = ds.points.row(0);
    assert!((near[0] - 0.005).abs() < 1e-6);
    assert!((near[3] - 1.5).abs() < 1e-6);
    assert_eq!(ds.labels[0], 7);
    assert_eq!(ds.points.row(1), [5.0, 5.0, 5.0, 3.0]);
    assert_eq!(ds.labels[1], 9);

    let mut rng = StdRng::seed_from_u64(42);
    let out = resample(&ds, 4, &mut rng).unwrap();
    assert_eq!(out.len(), 4);
    // both voxels survive, followed by two duplicates
    assert_eq!(out.points.row(0), ds.points.row(0));
    assert_eq!(out.points.row(1), ds.points.row(1));
    for i in 2..4 {
        let row = out.points.row(i);
        assert!(row == ds.points.row(0) || row == ds.points.row(1));
    }
}

#[test]
fn pipeline_validator_reports_mismatch() {
    let ten: Vec<[f64; 4]> = (0..10).map(|k| [k as f64, 0.0, 0.0, 1.0]).collect();
    let out = filter_frames(
        vec![vec![sweep(&ten)]],
        vec![vec![labels(&[1; 8])]],
        vec![vec![Pose::identity()]],
    );
    assert_eq!(out.total_frames(), 0);
    assert_eq!(out.exclusions.len(), 1);
    assert_eq!(
        out.exclusions[0].reason,
        ExclusionReason::CountMismatch {
            points: 10,
            labels: 8
        }
    );
}

/// loader tables → validate → ego cache → sample
#[test]
fn pipeline_tables_to_samples() {
    let pose = Pose::from_yaw_translation(0.0, [100.0, -50.0, 2.0]);
    let rows: Vec<[f64; 4]> = (0..200)
        .map(|k| {
            let k = k as f64;
            [100.0 + (k * 0.37) % 8.0, -50.0 + (k * 0.21) % 6.0, 2.0 + (k * 0.05) % 1.5, k]
        })
        .collect();
    let ids: Vec<i64> = (0..200).map(|k| (k % 4) as i64).collect();

    let scenes = filter_frames(
        vec![vec![sweep(&rows), None], vec![sweep(&rows)]],
        vec![vec![labels(&ids), labels(&ids)], vec![labels(&ids)]],
        vec![vec![pose, pose], vec![pose]],
    );
    assert_eq!(scenes.total_frames(), 2);
    assert_eq!(scenes.exclusions[0].reason, ExclusionReason::EmptyPoints);

    let config = DatasetConfig {
        num_points: 128,
        voxel_size: 0.5,
        augment: true,
        augmentation: AugmentParams::default(),
    };
    let dataset = FrameDataset::new(&scenes, config).unwrap();
    assert_eq!(dataset.len(), 2);

    // cached frames are in the ego frame: translation removed
    let cached = dataset.frame(0).unwrap();
    let aabb = cached.points.aabb();
    assert!(aabb.min[0] >= -0.01 && aabb.max[0] <= 8.01);
    assert!(aabb.min[1] >= -0.01 && aabb.max[1] <= 6.01);

    let mut rng = StdRng::seed_from_u64(7);
    for idx in 0..dataset.len() {
        let sample = dataset.get_with(idx, &mut rng).unwrap();
        assert_eq!(sample.points.len(), 128);
        assert_eq!(sample.labels.len(), 128);
        assert!(sample.labels.iter().all(|l| (0..4).contains(l)));
        for v in sample.points.centroid().unwrap() {
            assert!(v.abs() < 1e-4);
        }
    }
}

#[test]
fn pipeline_without_augmentation_preserves_shape() {
    // a 2 x 2 x 1 grid of voxels, one point each
    let frame = LabeledCloud::from_rows(
        &[
            [0.5, 0.5, 0.5, 0.1],
            [1.5, 0.5, 0.5, 0.2],
            [0.5, 1.5, 0.5, 0.3],
            [1.5, 1.5, 0.5, 0.4],
        ],
        vec![1, 2, 3, 4],
    )
    .unwrap();
    let config = DatasetConfig {
        num_points: 4,
        voxel_size: 1.0,
        augment: false,
        ..DatasetConfig::default()
    };
    let dataset = FrameDataset::from_frames(vec![frame], config).unwrap();
    let sample = dataset.get_with(0, &mut StdRng::seed_from_u64(3)).unwrap();

    // N == K: a permutation of the four voxels, recentered on (1, 1, 0.5)
    let mut labels = sample.labels.clone();
    labels.sort_unstable();
    assert_eq!(labels, vec![1, 2, 3, 4]);
    for row in sample.to_rows() {
        assert!((row[0].abs() - 0.5).abs() < 1e-6);
        assert!((row[1].abs() - 0.5).abs() < 1e-6);
        assert!(row[2].abs() < 1e-6);
    }
}

/// JSON records from the scene loader → validated, ego-frame samples
#[test]
fn pipeline_from_loader_json() {
    // loader rows carry extra columns that the tables ignore
    let sweep_json = r#"[
        {"x": 11.0, "y": 5.0, "z": 1.0, "i": 12.0, "t": 0.1, "d": 0},
        {"x": 11.2, "y": 5.1, "z": 1.0, "i": 14.0, "t": 0.1, "d": 0},
        {"x": 14.0, "y": 9.0, "z": 2.0, "i": 40.0, "t": 0.2, "d": 1}
    ]"#;
    let labels_json = r#"[{"class": 7}, {"class": 7}, {"class": 13}]"#;
    let pose_json = r#"{
        "position": {"x": 10.0, "y": 5.0, "z": 1.0},
        "heading": {"w": 1.0, "x": 0.0, "y": 0.0, "z": 0.0}
    }"#;

    let table: PointTable = serde_json::from_str(sweep_json).unwrap();
    let label_table: LabelTable = serde_json::from_str(labels_json).unwrap();
    let pose: Pose = serde_json::from_str(pose_json).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(label_table.class_ids(), vec![7, 7, 13]);

    let scenes = filter_frames(
        vec![vec![Some(table)]],
        vec![vec![Some(label_table)]],
        vec![vec![pose]],
    );
    let config = DatasetConfig {
        num_points: 8,
        voxel_size: 1.0,
        augment: false,
        ..DatasetConfig::default()
    };
    let dataset = FrameDataset::new(&scenes, config).unwrap();

    let cached = dataset.frame(0).unwrap();
    assert_eq!(cached.labels, vec![7, 7, 13]);
    let first = cached.points.row(0);
    assert!((first[0] - 1.0).abs() < 1e-5 && first[1].abs() < 1e-5 && first[2].abs() < 1e-5);
    assert_eq!(first[3], 12.0);

    let sample = dataset.get_with(0, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(sample.len(), 8);
    assert_eq!(&sample.labels[..2], &[7, 13]);
}
