//! Canonical per-chart data models.
//!
//! Each model is produced once per render pass by a standardizer and is treated as an immutable
//! value afterwards. The `push_*`/`clear` helpers exist for callers that build data by hand.

mod heat_map;
mod multi_series;
mod pie;
mod scatter;
mod stacked;

pub use heat_map::{GridDimensions, HeatMapCell, HeatMapData};
pub use multi_series::{MultiSeriesData, SeriesData};
pub use pie::{PieChartData, PieSliceData};
pub use scatter::{AxisRange, ScatterData};
pub use stacked::{SegmentCountMismatch, StackedBarData, StackedMultiSeriesData, StackedSeriesData};

use crate::VisualizationKind;
use serde::{Deserialize, Serialize};

/// A standardized data set for exactly one visualization kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum ProcessedData {
    #[serde(rename = "scatter_plot")]
    Scatter(ScatterData),
    #[serde(rename = "heat_map_using_bars")]
    HeatMap(HeatMapData),
    #[serde(rename = "multi_series_bar_chart")]
    MultiSeries(MultiSeriesData),
    #[serde(rename = "stacked_multi_series_bar_chart")]
    StackedMultiSeries(StackedMultiSeriesData),
    #[serde(rename = "pie_chart")]
    PieChart(PieChartData),
}

impl ProcessedData {
    pub fn kind(&self) -> VisualizationKind {
        match self {
            ProcessedData::Scatter(_) => VisualizationKind::ScatterPlot,
            ProcessedData::HeatMap(_) => VisualizationKind::HeatMapUsingBars,
            ProcessedData::MultiSeries(_) => VisualizationKind::MultiSeriesBarChart,
            ProcessedData::StackedMultiSeries(_) => VisualizationKind::StackedMultiSeriesBarChart,
            ProcessedData::PieChart(_) => VisualizationKind::PieChart,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterData> {
        match self {
            ProcessedData::Scatter(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_heat_map(&self) -> Option<&HeatMapData> {
        match self {
            ProcessedData::HeatMap(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_multi_series(&self) -> Option<&MultiSeriesData> {
        match self {
            ProcessedData::MultiSeries(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_stacked_multi_series(&self) -> Option<&StackedMultiSeriesData> {
        match self {
            ProcessedData::StackedMultiSeries(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_pie_chart(&self) -> Option<&PieChartData> {
        match self {
            ProcessedData::PieChart(d) => Some(d),
            _ => None,
        }
    }
}

impl From<ScatterData> for ProcessedData {
    fn from(value: ScatterData) -> Self {
        ProcessedData::Scatter(value)
    }
}

impl From<HeatMapData> for ProcessedData {
    fn from(value: HeatMapData) -> Self {
        ProcessedData::HeatMap(value)
    }
}

impl From<MultiSeriesData> for ProcessedData {
    fn from(value: MultiSeriesData) -> Self {
        ProcessedData::MultiSeries(value)
    }
}

impl From<StackedMultiSeriesData> for ProcessedData {
    fn from(value: StackedMultiSeriesData) -> Self {
        ProcessedData::StackedMultiSeries(value)
    }
}

impl From<PieChartData> for ProcessedData {
    fn from(value: PieChartData) -> Self {
        ProcessedData::PieChart(value)
    }
}
