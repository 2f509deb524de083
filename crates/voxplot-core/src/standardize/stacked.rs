use super::{DataStandardizer, parse_json};
use crate::{ProcessedData, Result, StackedMultiSeriesData, StackedSeriesData, VisualizationKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StackedPayload {
    series: Vec<StackedSeriesData>,
}

/// `{"series": [{"bars": [{"segments": [3, 8, 2]}, ..]}, ..]}` → [`StackedMultiSeriesData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StackedMultiSeriesStandardizer;

impl DataStandardizer for StackedMultiSeriesStandardizer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::StackedMultiSeriesBarChart
    }

    fn standardize(&self, raw: &str) -> Result<ProcessedData> {
        let payload: StackedPayload = parse_json(self.kind(), raw)?;
        let data = StackedMultiSeriesData::new(payload.series);

        for m in data.segment_count_mismatches() {
            tracing::warn!(
                series = m.series_index,
                bar = m.bar_index,
                expected = m.expected,
                found = m.found,
                "stacked bar segment count differs within series"
            );
        }

        Ok(ProcessedData::StackedMultiSeries(data))
    }
}
