use super::{VisualizationHandler, log_pass};
use crate::bounds::{BoundingVolume, VolumeShape};
use crate::color::GradientColorMapper;
use crate::config::LayoutConfig;
use crate::element::{HeatMapCellArgs, HeatMapCellLayout};
use crate::model::{ColorRef, PassStage, Primitive, PrimitiveShape, RenderPass};
use crate::{Error, Result};
use voxplot_core::{ProcessedData, VisualizationKind};

/// Intensities are clamped to `[0, 100]` before the gradient lookup, which saturates above 1.
const MAX_COLOR_INTENSITY: f64 = 100.0;

/// A near-square grid of bars whose height and color follow the cell intensity.
#[derive(Debug)]
pub struct HeatMapUsingBars {
    cells: HeatMapCellLayout,
    mapper: GradientColorMapper,
    padding: f64,
}

impl HeatMapUsingBars {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            cells: HeatMapCellLayout::new(config.heat_map.clone()),
            mapper: GradientColorMapper,
            padding: config.volume_padding,
        }
    }
}

impl Default for HeatMapUsingBars {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl VisualizationHandler for HeatMapUsingBars {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::HeatMapUsingBars
    }

    fn render(&mut self, data: &ProcessedData) -> Result<RenderPass> {
        let Some(heat_map) = data.as_heat_map() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut pass = RenderPass::new(self.kind());
        let grid = heat_map.grid();

        for (index, cell) in heat_map.cells.iter().enumerate() {
            let Some(placement) = self.cells.layout(HeatMapCellArgs {
                cell,
                index,
                grid,
            }) else {
                pass.skip(
                    PassStage::Elements,
                    format!("cell {index} does not fit a {}x{} grid", grid.width, grid.height),
                );
                continue;
            };
            let mut bar = Primitive::new(
                format!("Cell_{}_{}_Value_{:.2}", cell.x, cell.z, cell.intensity),
                PrimitiveShape::Cube,
                placement,
            )
            .with_tooltip(format!("{:.2}", cell.intensity));
            bar.color = ColorRef::Rgba {
                color: self.mapper.color_for(cell.intensity.clamp(0.0, MAX_COLOR_INTENSITY)),
            };
            pass.primitives.push(bar);
        }

        let volume =
            BoundingVolume::initialize_padded(&pass.primitives, VolumeShape::Cube, self.padding);
        if !pass.primitives.is_empty() {
            pass.planes = volume.grid_planes();
        }
        pass.volume = Some(volume);

        log_pass(&pass);
        Ok(pass)
    }
}
