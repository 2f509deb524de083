use super::{DataStandardizer, parse_json};
use crate::{HeatMapCell, HeatMapData, ProcessedData, Result, VisualizationKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct HeatMapPayload {
    cells: Vec<HeatMapCell>,
}

/// `{"cells": [{"x": 0, "z": 0, "intensity": 0.2}, ..]}` → [`HeatMapData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeatMapStandardizer;

impl DataStandardizer for HeatMapStandardizer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::HeatMapUsingBars
    }

    fn standardize(&self, raw: &str) -> Result<ProcessedData> {
        let payload: HeatMapPayload = parse_json(self.kind(), raw)?;
        Ok(ProcessedData::HeatMap(HeatMapData::new(payload.cells)))
    }
}
