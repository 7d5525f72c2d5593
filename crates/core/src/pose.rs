use nalgebra::{Isometry3, Point3, Quaternion, Translation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientation quaternion in `w, x, y, z` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Heading {
    fn default() -> Self {
        Self {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }
}

/// Vehicle pose at capture time: maps ego-frame coordinates into the world frame.
///
/// Serialized as `{"position": {"x", "y", "z"}, "heading": {"w", "x", "y", "z"}}`,
/// the shape the scene loader emits per sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Position,
    pub heading: Heading,
}

impl Pose {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Pose with a pure rotation of `yaw` radians about +z followed by a translation.
    pub fn from_yaw_translation(yaw: f64, translation: [f64; 3]) -> Self {
        let q = UnitQuaternion::from_axis_angle(&nalgebra::Vector3::z_axis(), yaw);
        Self {
            position: Position {
                x: translation[0],
                y: translation[1],
                z: translation[2],
            },
            heading: Heading {
                w: q.w,
                x: q.i,
                y: q.j,
                z: q.k,
            },
        }
    }

    /// The heading as a unit quaternion. The stored heading is normalized; a
    /// zero quaternion is not a valid heading.
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        let h = &self.heading;
        UnitQuaternion::from_quaternion(Quaternion::new(h.w, h.x, h.y, h.z))
    }

    pub fn isometry(&self) -> Isometry3<f64> {
        let p = &self.position;
        Isometry3::from_parts(Translation3::new(p.x, p.y, p.z), self.rotation())
    }

    /// Ego → world: `R * p + t`.
    pub fn to_world(&self, p: [f64; 3]) -> [f64; 3] {
        let out = self.isometry().transform_point(&Point3::new(p[0], p[1], p[2]));
        [out.x, out.y, out.z]
    }

    /// World → ego: `Rᵀ * (p - t)`.
    pub fn to_ego(&self, p: [f64; 3]) -> [f64; 3] {
        let out = self
            .isometry()
            .inverse_transform_point(&Point3::new(p[0], p[1], p[2]));
        [out.x, out.y, out.z]
    }

    /// [`Pose::to_ego`] over a whole sweep.
    pub fn points_to_ego(&self, points: &[[f64; 3]]) -> Vec<[f64; 3]> {
        let iso = self.isometry();
        points
            .iter()
            .map(|p| {
                let q = iso.inverse_transform_point(&Point3::new(p[0], p[1], p[2]));
                [q.x, q.y, q.z]
            })
            .collect()
    }
}
