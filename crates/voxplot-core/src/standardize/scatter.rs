use super::{DataStandardizer, parse_json};
use crate::geom::point3;
use crate::{Error, ProcessedData, Result, ScatterData, VisualizationKind};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ScatterValues {
    x_values: Vec<f64>,
    y_values: Vec<f64>,
    z_values: Vec<f64>,
}

/// `{"x_values": [..], "y_values": [..], "z_values": [..]}` → [`ScatterData`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterPlotStandardizer;

impl DataStandardizer for ScatterPlotStandardizer {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::ScatterPlot
    }

    fn standardize(&self, raw: &str) -> Result<ProcessedData> {
        let kind = self.kind();
        let values: ScatterValues = parse_json(kind, raw)?;

        let n = values.x_values.len();
        if values.y_values.len() != n || values.z_values.len() != n {
            return Err(Error::parse(
                kind,
                format!(
                    "coordinate arrays differ in length: x={}, y={}, z={}",
                    n,
                    values.y_values.len(),
                    values.z_values.len()
                ),
            ));
        }

        let points = values
            .x_values
            .iter()
            .zip(&values.y_values)
            .zip(&values.z_values)
            .map(|((&x, &y), &z)| point3(x, y, z))
            .collect();

        let data = ScatterData::from_points(points)
            .ok_or_else(|| Error::degenerate(kind, "scatter plot has no points"))?;
        Ok(ProcessedData::Scatter(data))
    }
}
