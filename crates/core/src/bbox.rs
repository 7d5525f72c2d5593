/// Axis-aligned bounds of the finite points in a sweep.
///
/// Points with a NaN or infinite coordinate are ignored, so a frame with a
/// few corrupt returns still reports the extent of the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Aabb {
    pub min: [f32; 3],
    pub max: [f32; 3],
    empty: bool,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: [f32::INFINITY; 3],
            max: [f32::NEG_INFINITY; 3],
            empty: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.empty
    }

    /// Grow to cover `point`; non-finite points leave the box as is.
    pub fn include(&mut self, point: [f32; 3]) {
        if !point.iter().all(|v| v.is_finite()) {
            return;
        }
        if self.empty {
            self.min = point;
            self.max = point;
            self.empty = false;
            return;
        }
        for axis in 0..3 {
            self.min[axis] = self.min[axis].min(point[axis]);
            self.max[axis] = self.max[axis].max(point[axis]);
        }
    }

    /// Per-axis `max - min`, or `None` when no finite point was seen.
    pub fn extent(&self) -> Option<[f32; 3]> {
        if self.empty {
            return None;
        }
        Some([
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ])
    }
}

impl FromIterator<[f32; 3]> for Aabb {
    fn from_iter<I: IntoIterator<Item = [f32; 3]>>(iter: I) -> Self {
        let mut aabb = Self::empty();
        for p in iter {
            aabb.include(p);
        }
        aabb
    }
}
