use lidarseg_core::{LabeledCloud, PointCloud};
use lidarseg_filters::{augment, resample, voxel_downsample, AugmentParams};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    // Create a synthetic labeled sweep: 1000 random-ish points, 4 classes
    let n = 1000;
    let x: Vec<f32> = (0..n).map(|i| (i as f32 * 0.731) % 10.0).collect();
    let y: Vec<f32> = (0..n).map(|i| (i as f32 * 0.419) % 10.0).collect();
    let z: Vec<f32> = (0..n).map(|i| (i as f32 * 0.257) % 2.0).collect();
    let intensity: Vec<f32> = (0..n).map(|i| (i % 100) as f32).collect();
    let labels = (0..n).map(|i| (i % 4) as i64).collect();
    let cloud = LabeledCloud::new(PointCloud::from_xyzi(x, y, z, intensity), labels)
        .expect("columns and labels have equal length");
    println!("Original cloud: {} points", cloud.len());

    // Voxel downsample with voxel size 1.0, majority label per voxel
    let downsampled = voxel_downsample(&cloud, 1.0).expect("positive voxel size");
    println!("After voxel downsample (size=1.0): {} points", downsampled.len());

    // Resample to a fixed 256 rows
    let mut rng = StdRng::seed_from_u64(42);
    let fixed = resample(&downsampled, 256, &mut rng).expect("non-empty cloud");
    println!("After resample (k=256): {} points", fixed.len());

    // Augment and recenter
    let LabeledCloud { mut points, .. } = fixed;
    augment(&mut points, &AugmentParams::default(), &mut rng);
    let offset = points.recenter();
    println!("Recentered by {:?}", offset);

    let aabb = points.aabb();
    println!("Bounding box: min={:?}, max={:?}", aabb.min, aabb.max);
}
