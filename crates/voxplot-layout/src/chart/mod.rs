//! Per-kind orchestration: element layout → colors → bounding volume → axes.

mod heat_map;
mod multi_series;
mod pie;
mod scatter;
mod stacked;

pub use heat_map::HeatMapUsingBars;
pub use multi_series::MultiSeriesBarChart;
pub use pie::PieChart;
pub use scatter::ScatterPlot;
pub use stacked::StackedMultiSeriesBarChart;

use crate::Result;
use crate::axis::AxisLayout;
use crate::bounds::BoundingVolume;
use crate::model::{PassStage, RenderPass};
use voxplot_core::{ProcessedData, VisualizationKind};

pub trait VisualizationHandler: std::fmt::Debug {
    fn kind(&self) -> VisualizationKind;

    /// Builds a fresh pass; nothing from an earlier call is carried over.
    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass>;
}

/// Adds axis descriptors to `pass`, or records a diagnostic when the axis layout rejects `data`.
pub(crate) fn annotate_axes(
    pass: &mut RenderPass,
    axes: &dyn AxisLayout,
    volume: &BoundingVolume,
    data: &ProcessedData,
) {
    match axes.add_axis_numbers(volume, data) {
        Ok(descriptors) => {
            pass.labels.extend(descriptors.labels);
            pass.lines.extend(descriptors.lines);
        }
        Err(err) => pass.skip(PassStage::AxisNumbers, err.to_string()),
    }
}

pub(crate) fn log_pass(pass: &RenderPass) {
    tracing::debug!(
        kind = %pass.kind,
        primitives = pass.primitives.len(),
        labels = pass.labels.len(),
        lines = pass.lines.len(),
        diagnostics = pass.diagnostics.len(),
        "render pass built"
    );
}
