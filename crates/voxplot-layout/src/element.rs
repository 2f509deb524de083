//! Per-element geometry: bars, stacked bar segments, pie wedges and heat map cells.

use crate::config::{BarStyle, HeatMapStyle, PieStyle, StackedBarStyle};
use crate::model::ElementPlacement;
use serde::{Deserialize, Serialize};
use voxplot_core::geom::{Point3, Vector3, point3, vector3};
use voxplot_core::{GridDimensions, HeatMapCell, PieSliceData};

fn value_height(value: f64, divisor: f64, min_height: f64) -> f64 {
    let height = if divisor == 0.0 { value } else { value / divisor };
    // `max` drops NaN in favour of the floor.
    height.max(min_height)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarArgs {
    pub value: f64,
    pub value_index: usize,
    pub series_index: usize,
}

/// Places single bars on an X (value index) by Z (series index) grid.
#[derive(Debug, Clone, Default)]
pub struct BarLayout {
    style: BarStyle,
}

impl BarLayout {
    pub fn new(style: BarStyle) -> Self {
        Self { style }
    }

    pub fn adjusted_width(&self) -> f64 {
        self.style.base_width * self.style.scaling_factor
    }

    pub fn spacing(&self) -> f64 {
        self.adjusted_width() * self.style.spacing_factor
    }

    pub fn layout(&self, args: BarArgs) -> ElementPlacement {
        let width = self.adjusted_width();
        let spacing = self.spacing();
        let height = value_height(args.value, self.style.value_divisor, self.style.min_height);
        ElementPlacement {
            position: point3(
                args.value_index as f64 * spacing,
                height / 2.0,
                args.series_index as f64 * spacing,
            ),
            scale: vector3(width, height, width),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedBarArgs<'a> {
    pub segments: &'a [f64],
    pub value_index: usize,
    pub series_index: usize,
}

/// Places the segments of one stacked bar bottom-up, each resting on the previous one.
#[derive(Debug, Clone, Default)]
pub struct StackedBarLayout {
    style: StackedBarStyle,
}

impl StackedBarLayout {
    pub fn new(style: StackedBarStyle) -> Self {
        Self { style }
    }

    pub fn adjusted_width(&self) -> f64 {
        self.style.base_width * self.style.scaling_factor
    }

    pub fn spacing(&self) -> f64 {
        self.adjusted_width() * self.style.spacing_factor
    }

    pub fn segment_height(&self, value: f64) -> f64 {
        value_height(value, self.style.value_divisor, self.style.min_height)
    }

    pub fn layout(&self, args: StackedBarArgs<'_>) -> Vec<ElementPlacement> {
        let width = self.adjusted_width();
        let spacing = self.spacing();
        let x = args.value_index as f64 * spacing;
        let z = args.series_index as f64 * spacing;

        let mut cumulative = 0.0;
        args.segments
            .iter()
            .map(|&value| {
                let height = self.segment_height(value);
                let placement = ElementPlacement {
                    position: point3(x, cumulative + height / 2.0, z),
                    scale: vector3(width, height, width),
                };
                cumulative += height;
                placement
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSliceArgs<'a> {
    pub slice: &'a PieSliceData,
    pub start_angle: f64,
    pub angle_size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WedgeGeometry {
    pub start_angle: f64,
    pub angle_size: f64,
    pub radius: f64,
    pub height: f64,
    pub position: Point3,
    /// Euler angles in degrees; only Y is used.
    pub rotation: Vector3,
    pub label_position: Point3,
}

impl WedgeGeometry {
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.angle_size
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.angle_size / 2.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PieSliceLayout {
    style: PieStyle,
}

impl PieSliceLayout {
    pub fn new(style: PieStyle) -> Self {
        Self { style }
    }

    pub fn radius(&self) -> f64 {
        self.style.radius
    }

    pub fn height(&self) -> f64 {
        self.style.height
    }

    pub fn layout(&self, args: PieSliceArgs<'_>) -> WedgeGeometry {
        let radius = self.style.radius;
        let height = self.style.height;
        // Clockwise from +Z seen from above, matching a Y-axis rotation.
        let mid = (args.start_angle + args.angle_size / 2.0).to_radians();
        let label_radius = radius * self.style.label_radius_factor;
        WedgeGeometry {
            start_angle: args.start_angle,
            angle_size: args.angle_size,
            radius,
            height,
            position: point3(0.0, height / 2.0, 0.0),
            rotation: vector3(0.0, args.start_angle, 0.0),
            label_position: point3(label_radius * mid.sin(), height, label_radius * mid.cos()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatMapCellArgs<'a> {
    pub cell: &'a HeatMapCell,
    pub index: usize,
    pub grid: GridDimensions,
}

/// Lays heat map cells out column-major on a `width x height` grid.
#[derive(Debug, Clone, Default)]
pub struct HeatMapCellLayout {
    style: HeatMapStyle,
}

impl HeatMapCellLayout {
    pub fn new(style: HeatMapStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &HeatMapStyle {
        &self.style
    }

    pub fn cell_height(&self, intensity: f64) -> f64 {
        intensity.max(0.0) * self.style.height_scale
    }

    /// `None` when the index does not fit the grid.
    pub fn layout(&self, args: HeatMapCellArgs<'_>) -> Option<ElementPlacement> {
        let (column, row) = args.grid.slot(args.index)?;
        let height = self.cell_height(args.cell.intensity);
        let origin = self.style.origin;
        let pitch = self.style.pitch;
        Some(ElementPlacement {
            position: point3(
                origin.x + column as f64 * pitch,
                origin.y + height / 2.0,
                origin.z - row as f64 * pitch,
            ),
            scale: vector3(self.style.cell_width, height, self.style.cell_width),
        })
    }
}
