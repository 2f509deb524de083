use super::{DataStandardizer, parse_json};
use crate::{Error, PieChartData, PieSliceData, ProcessedData, Result, VisualizationKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct PiePayload {
    slices: Vec<PieSliceData>,
}

/// `{"slices": [{"label": "A", "value": 10}, ..]}` → [`PieChartData`].
///
/// Negative slices and a non-positive total are rejected here so that angle computation never
/// divides by zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieChartStandardizer;

impl DataStandardizer for PieChartStandardizer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::PieChart
    }

    fn standardize(&self, raw: &str) -> Result<ProcessedData> {
        let kind = self.kind();
        let payload: PiePayload = parse_json(kind, raw)?;

        if let Some(bad) = payload.slices.iter().find(|s| s.value < 0.0) {
            return Err(Error::degenerate(
                kind,
                format!(
                    "\"{}\" has invalid value: {}. Slice values must be >= 0.",
                    bad.label, bad.value
                ),
            ));
        }

        let data = PieChartData::new(payload.slices);
        let total = data.total();
        if !(total.is_finite() && total > 0.0) {
            return Err(Error::degenerate(
                kind,
                format!("total slice value must be > 0 (got {total})"),
            ));
        }

        Ok(ProcessedData::PieChart(data))
    }
}
