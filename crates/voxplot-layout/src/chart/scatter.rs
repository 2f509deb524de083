use super::{VisualizationHandler, annotate_axes, log_pass};
use crate::axis::{AxisLayout, ScatterAxes};
use crate::bounds::{BoundingVolume, VolumeShape};
use crate::color::Color;
use crate::config::LayoutConfig;
use crate::model::{ColorRef, ElementPlacement, Primitive, PrimitiveShape, RenderPass};
use crate::{Error, Result};
use voxplot_core::geom::vector3;
use voxplot_core::{ProcessedData, VisualizationKind};

/// Points placed inside a fixed bounding cube by their normalized coordinates.
#[derive(Debug)]
pub struct ScatterPlot {
    volume: BoundingVolume,
    point_size: f64,
    axes: Box<dyn AxisLayout>,
}

impl ScatterPlot {
    pub fn new(config: &LayoutConfig) -> Self {
        let style = &config.scatter;
        Self {
            volume: BoundingVolume::fixed(VolumeShape::Cube, style.center, style.size),
            point_size: style.point_size,
            axes: Box::new(ScatterAxes),
        }
    }

    pub fn with_axis_layout(mut self, axes: Box<dyn AxisLayout>) -> Self {
        self.axes = axes;
        self
    }
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl VisualizationHandler for ScatterPlot {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::ScatterPlot
    }

    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass> {
        let Some(scatter) = data.as_scatter() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut pass = RenderPass::new(self.kind());
        let frame = self.volume.frame();
        let size = self.point_size;

        for (i, (normalized, original)) in scatter
            .normalized()
            .iter()
            .zip(scatter.original())
            .enumerate()
        {
            let placement = ElementPlacement {
                position: frame.to_world(*normalized),
                scale: vector3(size, size, size),
            };
            let mut point = Primitive::new(format!("Point_{i}"), PrimitiveShape::Sphere, placement)
                .with_tooltip(format!("{}, {}, {}", original.x, original.y, original.z));
            point.color = ColorRef::Rgba {
                color: Color::WHITE,
            };
            pass.primitives.push(point);
        }

        annotate_axes(&mut pass, self.axes.as_ref(), &self.volume, data);
        pass.volume = Some(self.volume);

        log_pass(&pass);
        Ok(pass)
    }
}
