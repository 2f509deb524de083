use super::{VisualizationHandler, log_pass};
use crate::bounds::{BoundingVolume, VolumeShape};
use crate::color::{Color, ColorManager, PieSliceColorManager};
use crate::config::LayoutConfig;
use crate::element::{PieSliceArgs, PieSliceLayout};
use crate::model::{Anchor, ElementPlacement, Label, Primitive, PrimitiveShape, RenderPass};
use crate::{Error, Result};
use voxplot_core::geom::vector3;
use voxplot_core::{ProcessedData, VisualizationKind};

/// Wedges laid out clockwise in slice order, each sized by its share of the total.
#[derive(Debug)]
pub struct PieChart {
    slices: PieSliceLayout,
    colors: PieSliceColorManager,
}

impl PieChart {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            slices: PieSliceLayout::new(config.pie.clone()),
            colors: PieSliceColorManager,
        }
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl VisualizationHandler for PieChart {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::PieChart
    }

    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass> {
        let Some(pie) = data.as_pie_chart() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let Some(angle_sizes) = pie.angle_sizes() else {
            return Err(Error::DegenerateInput {
                kind: self.kind(),
                message: format!("total slice value must be > 0 (got {})", pie.total()),
            });
        };
        let mut pass = RenderPass::new(self.kind());
        let total = pie.total();

        let mut current_angle = 0.0;
        for (i, (slice, angle_size)) in pie.slices.iter().zip(angle_sizes).enumerate() {
            let wedge = self.slices.layout(PieSliceArgs {
                slice,
                start_angle: current_angle,
                angle_size,
            });
            current_angle += angle_size;

            let diameter = wedge.radius * 2.0;
            let placement = ElementPlacement {
                position: wedge.position,
                scale: vector3(diameter, wedge.height, diameter),
            };
            let shape = PrimitiveShape::Wedge {
                start_angle: wedge.start_angle,
                angle_size: wedge.angle_size,
                radius: wedge.radius,
                height: wedge.height,
            };
            let mut primitive = Primitive::new(format!("Slice_{i}"), shape, placement)
                .with_rotation(wedge.rotation)
                .with_tooltip(format!(
                    "{}: {} ({:.1}%)",
                    slice.label,
                    slice.value,
                    slice.value / total * 100.0
                ));
            let entry = self.colors.color_for(i);
            self.colors.apply_color(Some(&mut primitive), &entry);
            pass.primitives.push(primitive);

            pass.labels.push(Label {
                position: wedge.label_position,
                text: slice.label.clone(),
                anchor: Anchor::MiddleCenter,
                color: Color::WHITE,
            });
        }

        pass.volume = Some(BoundingVolume::initialize(
            &pass.primitives,
            VolumeShape::Cylinder,
        ));

        log_pass(&pass);
        Ok(pass)
    }
}
