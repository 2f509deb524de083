use super::{VisualizationHandler, annotate_axes, log_pass};
use crate::axis::{AxisLayout, StackedMultiSeriesAxes};
use crate::bounds::{BoundingVolume, VolumeShape};
use crate::color::BarColorManager;
use crate::config::LayoutConfig;
use crate::element::{StackedBarArgs, StackedBarLayout};
use crate::model::{Primitive, PrimitiveShape, RenderPass};
use crate::{Error, Result};
use voxplot_core::{ProcessedData, VisualizationKind};

/// Stacked bars; bar index along X, series along Z, segments colored by position in the stack.
#[derive(Debug)]
pub struct StackedMultiSeriesBarChart {
    bars: StackedBarLayout,
    colors: BarColorManager,
    axes: Box<dyn AxisLayout>,
    padding: f64,
}

impl StackedMultiSeriesBarChart {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            bars: StackedBarLayout::new(config.stacked_bar.clone()),
            colors: BarColorManager,
            axes: Box::new(StackedMultiSeriesAxes),
            padding: config.volume_padding,
        }
    }

    pub fn with_axis_layout(mut self, axes: Box<dyn AxisLayout>) -> Self {
        self.axes = axes;
        self
    }
}

impl Default for StackedMultiSeriesBarChart {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl VisualizationHandler for StackedMultiSeriesBarChart {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::StackedMultiSeriesBarChart
    }

    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass> {
        let Some(chart) = data.as_stacked_multi_series() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut pass = RenderPass::new(self.kind());

        for (series_index, series) in chart.series.iter().enumerate() {
            for (value_index, bar) in series.bars.iter().enumerate() {
                let placements = self.bars.layout(StackedBarArgs {
                    segments: &bar.segments,
                    value_index,
                    series_index,
                });
                let mut segments: Vec<Primitive> = placements
                    .into_iter()
                    .zip(&bar.segments)
                    .enumerate()
                    .map(|(k, (placement, value))| {
                        Primitive::new(
                            format!("Bar_{series_index}_{value_index}_Segment_{k}"),
                            PrimitiveShape::Cube,
                            placement,
                        )
                        .with_tooltip(format!("{value}"))
                    })
                    .collect();
                self.colors.apply_colors_to_stacked_bar(&mut segments);
                pass.primitives.extend(segments);
            }
        }

        let volume =
            BoundingVolume::initialize_padded(&pass.primitives, VolumeShape::Cube, self.padding);
        pass.planes = volume.grid_planes();
        pass.lines = volume.axis_lines();
        annotate_axes(&mut pass, self.axes.as_ref(), &volume, data);
        pass.volume = Some(volume);

        log_pass(&pass);
        Ok(pass)
    }
}
