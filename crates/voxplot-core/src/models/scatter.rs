use crate::geom::{Point3, point3};
use serde::{Deserialize, Serialize};

/// Observed `[min, max]` of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Starts an empty range that any finite value will widen.
    pub fn empty() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Inverse-lerp into `[0, 1]`. A collapsed range maps everything to `0`.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.span();
        if !(span.is_finite() && span > 0.0) {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// Scatter points with both raw and normalized positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterData {
    original: Vec<Point3>,
    normalized: Vec<Point3>,
    x: AxisRange,
    y: AxisRange,
    z: AxisRange,
}

impl ScatterData {
    /// Computes per-axis ranges, then normalizes every point against them.
    ///
    /// Returns `None` for an empty point set, which has no defined range.
    pub fn from_points(original: Vec<Point3>) -> Option<Self> {
        if original.is_empty() {
            return None;
        }

        let mut x = AxisRange::empty();
        let mut y = AxisRange::empty();
        let mut z = AxisRange::empty();
        for p in &original {
            x.include(p.x);
            y.include(p.y);
            z.include(p.z);
        }

        let normalized = original
            .iter()
            .map(|p| point3(x.normalize(p.x), y.normalize(p.y), z.normalize(p.z)))
            .collect();

        Some(Self {
            original,
            normalized,
            x,
            y,
            z,
        })
    }

    pub fn original(&self) -> &[Point3] {
        &self.original
    }

    pub fn normalized(&self) -> &[Point3] {
        &self.normalized
    }

    pub fn len(&self) -> usize {
        self.original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.original.is_empty()
    }

    pub fn x_range(&self) -> AxisRange {
        self.x
    }

    pub fn y_range(&self) -> AxisRange {
        self.y
    }

    pub fn z_range(&self) -> AxisRange {
        self.z
    }

    pub fn min_x(&self) -> f64 {
        self.x.min
    }

    pub fn max_x(&self) -> f64 {
        self.x.max
    }

    pub fn min_y(&self) -> f64 {
        self.y.min
    }

    pub fn max_y(&self) -> f64 {
        self.y.max
    }

    pub fn min_z(&self) -> f64 {
        self.z.min
    }

    pub fn max_z(&self) -> f64 {
        self.z.max
    }
}
