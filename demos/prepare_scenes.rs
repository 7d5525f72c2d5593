//! Validate a handful of posed scenes, print their summary, and draw one batch.
//!
//! Run with `RUST_LOG=info cargo run --example prepare_scenes`.

use lidarseg_core::Pose;
use lidarseg_dataset::{
    collate, filter_frames, ClassMap, DatasetConfig, DatasetSummary, FrameDataset, LabelTable,
    LidarRecord, PointTable,
};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

fn sweep(rng: &mut StdRng, pose: &Pose, n: usize) -> (PointTable, LabelTable) {
    let mut points = Vec::with_capacity(n);
    let mut labels: Vec<i64> = Vec::with_capacity(n);
    for _ in 0..n {
        let ego = [
            rng.gen_range(-30.0..30.0),
            rng.gen_range(-30.0..30.0),
            rng.gen_range(-0.5..4.0),
        ];
        let w = pose.to_world(ego);
        points.push(LidarRecord {
            x: w[0],
            y: w[1],
            z: w[2],
            i: rng.gen_range(0.0..100.0),
        });
        // ground below half a metre, vehicles above
        labels.push(if ego[2] < 0.5 { 7 } else { 13 });
    }
    (PointTable::new(points), labels.into_iter().collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = StdRng::seed_from_u64(7);
    let (mut points, mut labels, mut poses) = (Vec::new(), Vec::new(), Vec::new());
    for s in 0..2 {
        let (mut sp, mut sl, mut so) = (Vec::new(), Vec::new(), Vec::new());
        for f in 0..3 {
            let pose = Pose::from_yaw_translation(0.2 * f as f64, [100.0 * s as f64, 0.0, 1.5]);
            let (p, l) = sweep(&mut rng, &pose, 20_000);
            sp.push(Some(p));
            sl.push(Some(l));
            so.push(pose);
        }
        points.push(sp);
        labels.push(sl);
        poses.push(so);
    }
    // a frame whose labels never arrived
    labels[1][2] = None;

    let scenes = filter_frames(points, labels, poses);
    let names = ClassMap::from_json_str(r#"{"7": "Road", "13": "Car"}"#)?;
    DatasetSummary::compute(&scenes).log(5, &names);

    let config = DatasetConfig {
        num_points: 4_096,
        ..DatasetConfig::default()
    };
    let dataset = FrameDataset::new(&scenes, config)?;
    let indices: Vec<usize> = (0..dataset.len()).collect();
    let batch = collate(&dataset, &indices, 0)?;
    println!(
        "Batch: {} samples x {} points ({} floats)",
        batch.batch_size,
        batch.num_points,
        batch.points.len()
    );
    Ok(())
}
