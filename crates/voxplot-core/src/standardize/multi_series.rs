use super::{DataStandardizer, parse_json};
use crate::{MultiSeriesData, ProcessedData, Result, SeriesData, VisualizationKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MultiSeriesPayload {
    series: Vec<SeriesData>,
}

/// `{"series": [{"altitude": 0, "values": [10, 20]}, ..]}` → [`MultiSeriesData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSeriesStandardizer;

impl DataStandardizer for MultiSeriesStandardizer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::MultiSeriesBarChart
    }

    fn standardize(&self, raw: &str) -> Result<ProcessedData> {
        let payload: MultiSeriesPayload = parse_json(self.kind(), raw)?;
        Ok(ProcessedData::MultiSeries(MultiSeriesData::new(
            payload.series,
        )))
    }
}
