use std::f32::consts::PI;

use lidarseg_core::{Error, PointCloud, RandomSource, Result};
use serde::{Deserialize, Serialize};

/// Reflection applied in the horizontal plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flip {
    None,
    /// Negate x.
    X,
    /// Negate y.
    Y,
    /// Negate x and y (a half turn about z).
    XY,
}

impl Flip {
    /// One of the four outcomes, each with probability 1/4.
    pub fn sample<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        match rng.index(4) {
            0 => Flip::None,
            1 => Flip::X,
            2 => Flip::Y,
            _ => Flip::XY,
        }
    }

    pub fn apply(self, cloud: &mut PointCloud) {
        let (fx, fy) = match self {
            Flip::None => return,
            Flip::X => (true, false),
            Flip::Y => (false, true),
            Flip::XY => (true, true),
        };
        if fx {
            cloud.x.iter_mut().for_each(|v| *v = -*v);
        }
        if fy {
            cloud.y.iter_mut().for_each(|v| *v = -*v);
        }
    }
}

/// Ranges for the random geometric augmentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AugmentParams {
    /// Yaw is drawn from `[-max_rotation, max_rotation]` radians.
    #[serde(default = "default_max_rotation")]
    pub max_rotation: f32,

    /// Uniform scale factor range `[lo, hi]`.
    #[serde(default = "default_scale_range")]
    pub scale_range: (f32, f32),

    /// Draw one of {none, x, y, xy} reflections.
    #[serde(default = "default_flip")]
    pub flip: bool,

    /// Standard deviation of per-coordinate Gaussian jitter.
    #[serde(default = "default_jitter_std")]
    pub jitter_std: f32,
}

fn default_max_rotation() -> f32 {
    PI
}

fn default_scale_range() -> (f32, f32) {
    (0.9, 1.1)
}

fn default_flip() -> bool {
    true
}

fn default_jitter_std() -> f32 {
    0.01
}

impl Default for AugmentParams {
    fn default() -> Self {
        Self {
            max_rotation: default_max_rotation(),
            scale_range: default_scale_range(),
            flip: default_flip(),
            jitter_std: default_jitter_std(),
        }
    }
}

impl AugmentParams {
    /// Parameters under which [`augment`] leaves the cloud untouched.
    pub fn identity() -> Self {
        Self {
            max_rotation: 0.0,
            scale_range: (1.0, 1.0),
            flip: false,
            jitter_std: 0.0,
        }
    }

    /// Reject ranges that [`augment`] cannot draw from.
    ///
    /// `max_rotation` and `jitter_std` must be finite and non-negative;
    /// `scale_range` must be finite with `lo <= hi`.
    pub fn validate(&self) -> Result<()> {
        if !self.max_rotation.is_finite() || self.max_rotation < 0.0 {
            return Err(invalid("max_rotation", self.max_rotation));
        }
        let (lo, hi) = self.scale_range;
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(invalid("scale_range", self.scale_range));
        }
        if !self.jitter_std.is_finite() || self.jitter_std < 0.0 {
            return Err(invalid("jitter_std", self.jitter_std));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: impl std::fmt::Debug) -> Error {
    Error::InvalidAugmentation {
        field,
        value: format!("{value:?}"),
    }
}

/// Rotate about z, scale, flip, then jitter the xyz columns in place.
///
/// Intensity is never read or written. Each call draws fresh randomness from `rng`.
/// `params` must pass [`AugmentParams::validate`].
pub fn augment<R: RandomSource + ?Sized>(
    cloud: &mut PointCloud,
    params: &AugmentParams,
    rng: &mut R,
) {
    let theta = rng.uniform(-params.max_rotation, params.max_rotation);
    if theta != 0.0 {
        let (s, c) = theta.sin_cos();
        for (x, y) in cloud.x.iter_mut().zip(cloud.y.iter_mut()) {
            let (px, py) = (*x, *y);
            *x = c * px - s * py;
            *y = s * px + c * py;
        }
    }

    let scale = rng.uniform(params.scale_range.0, params.scale_range.1);
    if scale != 1.0 {
        for col in [&mut cloud.x, &mut cloud.y, &mut cloud.z] {
            col.iter_mut().for_each(|v| *v *= scale);
        }
    }

    if params.flip {
        Flip::sample(rng).apply(cloud);
    }

    if params.jitter_std > 0.0 {
        for col in [&mut cloud.x, &mut cloud.y, &mut cloud.z] {
            for v in col.iter_mut() {
                *v += rng.normal(0.0, params.jitter_std);
            }
        }
    }
}
