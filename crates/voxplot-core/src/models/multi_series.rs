use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesData {
    #[serde(default)]
    pub altitude: f64,
    #[serde(default)]
    pub values: Vec<f64>,
}

impl SeriesData {
    pub fn new(altitude: f64, values: Vec<f64>) -> Self {
        Self { altitude, values }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MultiSeriesData {
    pub series: Vec<SeriesData>,
}

impl MultiSeriesData {
    pub fn new(series: Vec<SeriesData>) -> Self {
        Self { series }
    }

    pub fn push_series(&mut self, series: SeriesData) {
        self.series.push(series);
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    /// Largest bar value across all series, never below zero.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .fold(0.0, f64::max)
    }

    /// Largest series altitude, never below zero.
    pub fn max_altitude(&self) -> f64 {
        self.series.iter().map(|s| s.altitude).fold(0.0, f64::max)
    }

    pub fn value_count(&self) -> usize {
        self.series.iter().map(|s| s.values.len()).sum()
    }
}
