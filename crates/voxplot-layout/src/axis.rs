//! Axis labels, axis lines and gridlines computed against a bounding volume.

use crate::bounds::BoundingVolume;
use crate::color::Color;
use crate::format::{grouped_integer, one_decimal};
use crate::model::{Anchor, Label, LineKind, LineSegment};
use crate::{Error, Result};
use voxplot_core::geom::{Point3, vector3};
use voxplot_core::{ProcessedData, ScatterData, VisualizationKind};

pub const MIN_VALUE_STEPS: usize = 5;
/// Beyond this many steps (a max value above ~10,000) the value axis is skipped.
pub const MAX_VALUE_STEPS: usize = 1000;
/// Labels sit this much further out than the volume's face.
pub const LABEL_OFFSET_FACTOR: f64 = 1.1;
pub const GRIDLINE_WIDTH: f64 = 0.005;
pub const SCATTER_AXIS_WIDTH: f64 = 0.01;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisDescriptors {
    pub labels: Vec<Label>,
    pub lines: Vec<LineSegment>,
}

pub trait AxisLayout: std::fmt::Debug {
    /// The data variant this layout understands.
    fn kind(&self) -> VisualizationKind;

    /// Fails with [`Error::TypeMismatch`] when handed another variant.
    fn add_axis_numbers(
        &self,
        volume: &BoundingVolume,
        data: &ProcessedData,
    ) -> Result<AxisDescriptors>;
}

/// `max(5, floor(max_value / 10))`, saturating at `usize::MAX`.
pub fn value_steps(max_value: f64) -> usize {
    let tenth = (max_value / 10.0).floor();
    if tenth.is_finite() && tenth > MIN_VALUE_STEPS as f64 {
        tenth as usize
    } else {
        MIN_VALUE_STEPS
    }
}

/// Offsets along each axis for `count` evenly spaced categories across `length`.
///
/// A single category sits in the middle.
pub fn category_offsets(count: usize, length: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![length / 2.0],
        n => {
            let spacing = length / (n - 1) as f64;
            (0..n).map(|i| i as f64 * spacing).collect()
        }
    }
}

fn label(position: Point3, text: String, anchor: Anchor) -> Label {
    Label {
        position,
        text,
        anchor,
        color: Color::GRAY,
    }
}

/// Y value labels on the left edge plus one gridline per step across the back face.
///
/// Fails with [`Error::DegenerateInput`] when the step count exceeds [`MAX_VALUE_STEPS`].
fn value_axis(
    kind: VisualizationKind,
    volume: &BoundingVolume,
    max_value: f64,
    out: &mut AxisDescriptors,
) -> Result<()> {
    let steps = value_steps(max_value);
    if steps > MAX_VALUE_STEPS {
        return Err(Error::DegenerateInput {
            kind,
            message: format!(
                "value axis for max value {max_value} needs {steps} steps (limit {MAX_VALUE_STEPS})"
            ),
        });
    }
    let c = volume.center;
    let h = volume.half_size();
    for i in 0..=steps {
        let fraction = i as f64 / steps as f64;
        let y = -h.y + fraction * volume.size.y;
        out.labels.push(label(
            c + vector3(-h.x * LABEL_OFFSET_FACTOR, y, h.z),
            one_decimal(fraction * max_value),
            Anchor::MiddleRight,
        ));
        out.lines.push(LineSegment {
            kind: LineKind::Gridline,
            start: c + vector3(-h.x, y, h.z),
            end: c + vector3(h.x, y, h.z),
            color: Color::GRAY,
            width: GRIDLINE_WIDTH,
        });
    }
    Ok(())
}

/// `S1..Sn` labels along Z in front of the left edge.
fn series_labels_along_z(volume: &BoundingVolume, count: usize, out: &mut AxisDescriptors) {
    let c = volume.center;
    let h = volume.half_size();
    for (i, offset) in category_offsets(count, volume.size.z).into_iter().enumerate() {
        out.labels.push(label(
            c + vector3(-h.x * LABEL_OFFSET_FACTOR, -h.y, -h.z + offset),
            format!("S{}", i + 1),
            Anchor::MiddleCenter,
        ));
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MultiSeriesAxes;

impl AxisLayout for MultiSeriesAxes {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::MultiSeriesBarChart
    }

    fn add_axis_numbers(
        &self,
        volume: &BoundingVolume,
        data: &ProcessedData,
    ) -> Result<AxisDescriptors> {
        let Some(data) = data.as_multi_series() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut out = AxisDescriptors::default();
        value_axis(self.kind(), volume, data.max_value(), &mut out)?;
        series_labels_along_z(volume, data.series.len(), &mut out);

        let c = volume.center;
        let h = volume.half_size();
        let max_altitude = data.max_altitude();
        for series in &data.series {
            let fraction = if max_altitude > 0.0 {
                series.altitude / max_altitude
            } else {
                0.0
            };
            out.labels.push(label(
                c + vector3(
                    -h.x + fraction * volume.size.x,
                    -h.y,
                    -h.z * LABEL_OFFSET_FACTOR,
                ),
                one_decimal(series.altitude),
                Anchor::MiddleCenter,
            ));
        }
        Ok(out)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StackedMultiSeriesAxes;

impl AxisLayout for StackedMultiSeriesAxes {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::StackedMultiSeriesBarChart
    }

    fn add_axis_numbers(
        &self,
        volume: &BoundingVolume,
        data: &ProcessedData,
    ) -> Result<AxisDescriptors> {
        let Some(data) = data.as_stacked_multi_series() else {
            return Err(Error::type_mismatch(self.kind(), data.kind()));
        };
        let mut out = AxisDescriptors::default();
        value_axis(self.kind(), volume, data.max_stacked_total(), &mut out)?;
        series_labels_along_z(volume, data.series.len(), &mut out);

        let c = volume.center;
        let h = volume.half_size();
        let offsets = category_offsets(data.leading_bar_count(), volume.size.x);
        for (i, offset) in offsets.into_iter().enumerate() {
            out.labels.push(label(
                c + vector3(-h.x + offset, -h.y, -h.z * LABEL_OFFSET_FACTOR),
                format!("S{}", i + 1),
                Anchor::MiddleCenter,
            ));
        }
        Ok(out)
    }
}

/// Colored X/Y/Z axes from the lowest corner, labelled with the data ranges.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScatterAxes;

impl ScatterAxes {
    fn axis(
        out: &mut AxisDescriptors,
        start: Point3,
        end: Point3,
        color: Color,
        min: f64,
        max: f64,
    ) {
        out.lines.push(LineSegment {
            kind: LineKind::Axis,
            start,
            end,
            color,
            width: SCATTER_AXIS_WIDTH,
        });
        let mid = start.lerp(end, 0.5);
        for (position, value) in [(mid, (min + max) / 2.0), (end, max)] {
            out.labels.push(Label {
                position,
                text: grouped_integer(value),
                anchor: Anchor::MiddleCenter,
                color: Color::WHITE,
            });
        }
    }

    fn describe(volume: &BoundingVolume, data: &ScatterData) -> AxisDescriptors {
        let origin = volume.min_corner();
        let s = volume.size;
        let mut out = AxisDescriptors::default();
        Self::axis(
            &mut out,
            origin,
            origin + vector3(s.x, 0.0, 0.0),
            Color::RED,
            data.min_x(),
            data.max_x(),
        );
        Self::axis(
            &mut out,
            origin,
            origin + vector3(0.0, s.y, 0.0),
            Color::GREEN,
            data.min_y(),
            data.max_y(),
        );
        Self::axis(
            &mut out,
            origin,
            origin + vector3(0.0, 0.0, s.z),
            Color::BLUE,
            data.min_z(),
            data.max_z(),
        );
        out
    }
}

impl AxisLayout for ScatterAxes {
    fn kind(&self) -> VisualizationKind {
        VisualizationKind::ScatterPlot
    }

    fn add_axis_numbers(
        &self,
        volume: &BoundingVolume,
        data: &ProcessedData,
    ) -> Result<AxisDescriptors> {
        match data.as_scatter() {
            Some(scatter) => Ok(Self::describe(volume, scatter)),
            None => Err(Error::type_mismatch(self.kind(), data.kind())),
        }
    }
}
