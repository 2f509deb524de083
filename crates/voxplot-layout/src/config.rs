//! Layout tuning knobs. Every field has a default, so `{}` is a valid configuration.

use crate::Result;
use serde::{Deserialize, Serialize};
use voxplot_core::geom::{Point3, Vector3, point3, vector3};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub bar: BarStyle,
    pub stacked_bar: StackedBarStyle,
    pub pie: PieStyle,
    pub heat_map: HeatMapStyle,
    pub scatter: ScatterStyle,
    /// Added to every side length of a cube bounding volume.
    pub volume_padding: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bar: BarStyle::default(),
            stacked_bar: StackedBarStyle::default(),
            pie: PieStyle::default(),
            heat_map: HeatMapStyle::default(),
            scatter: ScatterStyle::default(),
            volume_padding: 0.01,
        }
    }
}

impl LayoutConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    pub base_width: f64,
    pub scaling_factor: f64,
    /// Distance between neighbouring bars, in multiples of the adjusted width.
    pub spacing_factor: f64,
    pub value_divisor: f64,
    pub min_height: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            base_width: 0.5,
            scaling_factor: 0.2,
            spacing_factor: 2.0,
            value_divisor: 10.0,
            min_height: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedBarStyle {
    pub base_width: f64,
    pub scaling_factor: f64,
    pub spacing_factor: f64,
    pub value_divisor: f64,
    pub min_height: f64,
}

impl Default for StackedBarStyle {
    fn default() -> Self {
        Self {
            base_width: 0.25,
            scaling_factor: 0.4,
            spacing_factor: 1.0,
            value_divisor: 10.0,
            min_height: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieStyle {
    pub radius: f64,
    pub height: f64,
    pub label_radius_factor: f64,
}

impl Default for PieStyle {
    fn default() -> Self {
        Self {
            radius: 0.3,
            height: 0.3,
            label_radius_factor: 1.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapStyle {
    pub origin: Point3,
    pub pitch: f64,
    pub cell_width: f64,
    pub height_scale: f64,
}

impl Default for HeatMapStyle {
    fn default() -> Self {
        Self {
            origin: point3(-2.4, 0.0, 2.15),
            pitch: 1.0,
            cell_width: 1.0,
            height_scale: 0.01,
        }
    }
}

/// Scatter points live in a fixed frame rather than one fitted around them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterStyle {
    pub center: Point3,
    pub size: Vector3,
    pub point_size: f64,
}

impl Default for ScatterStyle {
    fn default() -> Self {
        Self {
            center: point3(0.0, 0.5, 0.0),
            size: vector3(1.0, 1.0, 1.0),
            point_size: 0.03,
        }
    }
}
