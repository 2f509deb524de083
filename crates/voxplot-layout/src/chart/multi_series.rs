use super::{VisualizationHandler, annotate_axes, log_pass};
use crate::axis::{AxisLayout, MultiSeriesAxes};
use crate::bounds::{BoundingVolume, VolumeShape};
use crate::color::{BarColorManager, ColorManager};
use crate::config::LayoutConfig;
use crate::element::{BarArgs, BarLayout};
use crate::model::{Primitive, PrimitiveShape, RenderPass};
use crate::{Error, Result};
use voxplot_core::{ProcessedData, VisualizationKind};

/// One row of bars per series; series along Z, values along X.
#[derive(Debug)]
pub struct MultiSeriesBarChart {
    bars: BarLayout,
    colors: BarColorManager,
    axes: Box<dyn AxisLayout>,
    padding: f64,
}

impl MultiSeriesBarChart {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            bars: BarLayout::new(config.bar.clone()),
            colors: BarColorManager,
            axes: Box::new(MultiSeriesAxes),
            padding: config.volume_padding,
        }
    }

    pub fn with_axis_layout(mut self, axes: Box<dyn AxisLayout>) -> Self {
        self.axes = axes;
        self
    }
}

impl Default for MultiSeriesBarChart {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl VisualizationHandler for MultiSeriesBarChart {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::MultiSeriesBarChart
    }

    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass> {
        let Some(chart) = data.as_multi_series() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut pass = RenderPass::new(self.kind());

        for (series_index, series) in chart.series.iter().enumerate() {
            let entry = self.colors.color_for(series_index);
            for (value_index, &value) in series.values.iter().enumerate() {
                let placement = self.bars.layout(BarArgs {
                    value,
                    value_index,
                    series_index,
                });
                let mut bar = Primitive::new(
                    format!("Bar_{series_index}_{value_index}"),
                    PrimitiveShape::Cube,
                    placement,
                )
                .with_tooltip(format!("{value}"));
                self.colors.apply_color(Some(&mut bar), &entry);
                pass.primitives.push(bar);
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
