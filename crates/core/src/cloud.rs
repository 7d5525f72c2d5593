use crate::Aabb;

/// A LiDAR sweep stored column-wise: `x, y, z, intensity`.
///
/// Row `i` of the cloud is the `(N, 4)` record `[x[i], y[i], z[i], intensity[i]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    pub x: Vec<f32>,
    pub y: Vec<f32>,
    pub z: Vec<f32>,
    pub intensity: Vec<f32>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            z: Vec::new(),
            intensity: Vec::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            z: Vec::with_capacity(n),
            intensity: Vec::with_capacity(n),
        }
    }

    pub fn from_xyzi(x: Vec<f32>, y: Vec<f32>, z: Vec<f32>, intensity: Vec<f32>) -> Self {
        assert_eq!(x.len(), y.len(), "x and y must have same length");
        assert_eq!(x.len(), z.len(), "x and z must have same length");
        assert_eq!(
            x.len(),
            intensity.len(),
            "x and intensity must have same length"
        );

        Self { x, y, z, intensity }
    }

    pub fn from_rows(rows: &[[f32; 4]]) -> Self {
        let mut cloud = Self::with_capacity(rows.len());
        for row in rows {
            cloud.push(*row);
        }
        cloud
    }

    pub fn push(&mut self, row: [f32; 4]) {
        self.x.push(row[0]);
        self.y.push(row[1]);
        self.z.push(row[2]);
        self.intensity.push(row[3]);
    }

    pub fn len(&self) -> usize {
        debug_assert_eq!(self.x.len(), self.y.len());
        debug_assert_eq!(self.x.len(), self.z.len());
        debug_assert_eq!(self.x.len(), self.intensity.len());
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn aabb(&self) -> Aabb {
        self.iter_points().collect()
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        [self.x[i], self.y[i], self.z[i]]
    }

    pub fn row(&self, i: usize) -> [f32; 4] {
        [self.x[i], self.y[i], self.z[i], self.intensity[i]]
    }

    pub fn iter_points(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| [*x, *y, *z])
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = [f32; 4]> + '_ {
        self.iter_points()
            .zip(&self.intensity)
            .map(|(p, i)| [p[0], p[1], p[2], *i])
    }

    /// Gather rows in the order given. Repeated indices produce repeated rows.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        let mut out = Self::with_capacity(indices.len());
        for &idx in indices {
            assert!(idx < self.len(), "index out of bounds in select");
            out.push(self.row(idx));
        }
        out
    }

    pub fn to_rows(&self) -> Vec<[f32; 4]> {
        self.iter_rows().collect()
    }

    /// Row-major `[x, y, z, i, x, y, z, i, ...]`.
    pub fn to_array(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.len() * 4);
        for row in self.iter_rows() {
            out.extend_from_slice(&row);
        }
        out
    }

    /// Arithmetic mean of the xyz columns, or `None` for an empty cloud.
    pub fn centroid(&self) -> Option<[f32; 3]> {
        if self.is_empty() {
            return None;
        }
        let n = self.len() as f64;
        let mean = |col: &[f32]| (col.iter().map(|v| *v as f64).sum::<f64>() / n) as f32;
        Some([mean(&self.x), mean(&self.y), mean(&self.z)])
    }

    /// Shift xyz so their mean is zero. Intensity is left untouched.
    ///
    /// Returns the offset that was subtracted, `None` for an empty cloud.
    pub fn recenter(&mut self) -> Option<[f32; 3]> {
        let c = self.centroid()?;
        for v in &mut self.x {
            *v -= c[0];
        }
        for v in &mut self.y {
            *v -= c[1];
        }
        for v in &mut self.z {
            *v -= c[2];
        }
        Some(c)
    }
}

impl Default for PointCloud {
    fn default() -> Self {
        Self::new()
    }
}
