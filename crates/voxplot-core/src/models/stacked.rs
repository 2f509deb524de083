use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedBarData {
    #[serde(default, alias = "segment_values")]
    pub segments: Vec<f64>,
}

impl StackedBarData {
    pub fn new(segments: Vec<f64>) -> Self {
        Self { segments }
    }

    pub fn total(&self) -> f64 {
        self.segments.iter().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedSeriesData {
    #[serde(default)]
    pub bars: Vec<StackedBarData>,
}

impl StackedSeriesData {
    pub fn new(bars: Vec<StackedBarData>) -> Self {
        Self { bars }
    }
}

/// A bar whose segment count differs from the first bar of its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCountMismatch {
    pub series_index: usize,
    pub bar_index: usize,
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedMultiSeriesData {
    pub series: Vec<StackedSeriesData>,
}

impl StackedMultiSeriesData {
    pub fn new(series: Vec<StackedSeriesData>) -> Self {
        Self { series }
    }

    pub fn push_series(&mut self, series: StackedSeriesData) {
        self.series.push(series);
    }

    pub fn clear(&mut self) {
        self.series.clear();
    }

    /// Largest cumulative bar total, never below zero.
    pub fn max_stacked_total(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.bars.iter())
            .map(StackedBarData::total)
            .fold(0.0, f64::max)
    }

    /// Bar count of the first series; drives the category axis.
    pub fn leading_bar_count(&self) -> usize {
        self.series.first().map_or(0, |s| s.bars.len())
    }

    pub fn segment_count_mismatches(&self) -> Vec<SegmentCountMismatch> {
        let mut out = Vec::new();
        for (series_index, series) in self.series.iter().enumerate() {
            let Some(first) = series.bars.first() else {
                continue;
            };
            let expected = first.segments.len();
            for (bar_index, bar) in series.bars.iter().enumerate().skip(1) {
                if bar.segments.len() != expected {
                    out.push(SegmentCountMismatch {
                        series_index,
                        bar_index,
                        expected,
                        found: bar.segments.len(),
                    });
                }
            }
        }
        out
    }
}
