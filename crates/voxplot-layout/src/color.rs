//! Continuous gradient mapping and discrete per-series palettes.

use crate::model::{ColorRef, Primitive};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

const GRADIENT: [Color; 15] = [
    Color::BLUE,
    Color::rgb(0.0, 0.2, 1.0),
    Color::rgb(0.0, 0.4, 1.0),
    Color::rgb(0.0, 0.6, 1.0),
    Color::CYAN,
    Color::rgb(0.0, 1.0, 0.6),
    Color::rgb(0.0, 1.0, 0.4),
    Color::GREEN,
    Color::rgb(0.6, 1.0, 0.0),
    Color::rgb(0.8, 1.0, 0.0),
    Color::YELLOW,
    Color::rgb(1.0, 0.8, 0.0),
    Color::rgb(1.0, 0.6, 0.0),
    Color::rgb(1.0, 0.4, 0.0),
    Color::RED,
];

/// Maps a scalar in `[0, 1]` onto a blue → cyan → green → yellow → red ramp.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientColorMapper;

impl GradientColorMapper {
    pub fn palette(&self) -> &'static [Color] {
        &GRADIENT
    }

    /// Out-of-range input is clamped, NaN maps to the low end.
    pub fn color_for(&self, value: f64) -> Color {
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        let last = GRADIENT.len() - 1;
        let scaled = value * last as f64;
        let low = (scaled.floor() as usize).min(last);
        let high = (low + 1).min(last);
        let t = (scaled - low as f64) as f32;
        GRADIENT[low].lerp(GRADIENT[high], t)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteEntry {
    pub index: usize,
    pub name: &'static str,
    pub color: Color,
}

impl PaletteEntry {
    fn color_ref(&self) -> ColorRef {
        ColorRef::Palette {
            index: self.index,
            name: self.name.to_string(),
        }
    }
}

const SERIES_PALETTE: [(&str, Color); 5] = [
    ("BlueGradient", Color::rgb(0.16, 0.38, 0.92)),
    ("TurquoiseGradient", Color::rgb(0.11, 0.78, 0.75)),
    ("GreenGradient", Color::rgb(0.25, 0.8, 0.3)),
    ("OrangeGradient", Color::rgb(0.98, 0.58, 0.13)),
    ("RedGradient", Color::rgb(0.9, 0.2, 0.2)),
];

fn series_entry(index: usize) -> PaletteEntry {
    let slot = index % SERIES_PALETTE.len();
    let (name, color) = SERIES_PALETTE[slot];
    PaletteEntry {
        index: slot,
        name,
        color,
    }
}

/// Discrete, cyclic color assignment.
pub trait ColorManager {
    fn color_for(&self, index: usize) -> PaletteEntry;

    /// Returns `false` (and logs) when there is nothing to color.
    fn apply_color(&self, target: Option<&mut Primitive>, entry: &PaletteEntry) -> bool {
        match target {
            Some(primitive) => {
                primitive.color = entry.color_ref();
                true
            }
            None => {
                tracing::warn!(palette = entry.name, "color target missing; skipping");
                false
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BarColorManager;

impl ColorManager for BarColorManager {
    fn color_for(&self, index: usize) -> PaletteEntry {
        series_entry(index)
    }
}

impl BarColorManager {
    /// Colors segment `k` of a stacked bar with palette slot `k mod 5`.
    ///
    /// Returns the number of segments colored.
    pub fn apply_colors_to_stacked_bar(&self, segments: &mut [Primitive]) -> usize {
        let mut colored = 0;
        for (k, segment) in segments.iter_mut().enumerate() {
            let entry = self.color_for(k);
            if self.apply_color(Some(segment), &entry) {
                colored += 1;
            }
        }
        colored
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PieSliceColorManager;

impl ColorManager for PieSliceColorManager {
    fn color_for(&self, index: usize) -> PaletteEntry {
        series_entry(index)
    }
}
