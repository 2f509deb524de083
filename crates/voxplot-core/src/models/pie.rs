use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSliceData {
    pub label: String,
    pub value: f64,
}

impl PieSliceData {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub slices: Vec<PieSliceData>,
}

impl PieChartData {
    pub fn new(slices: Vec<PieSliceData>) -> Self {
        Self { slices }
    }

    pub fn push_slice(&mut self, slice: PieSliceData) {
        self.slices.push(slice);
    }

    pub fn clear(&mut self) {
        self.slices.clear();
    }

    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    /// Angular size of each slice in degrees, or `None` when the total is not positive.
    pub fn angle_sizes(&self) -> Option<Vec<f64>> {
        let total = self.total();
        if !(total.is_finite() && total > 0.0) {
            return None;
        }
        Some(
            self.slices
                .iter()
                .map(|s| s.value / total * 360.0)
                .collect(),
        )
    }
}
