//! Enclosing volume of a chart's placed elements, plus the helpers derived from it.

use crate::color::Color;
use crate::model::{GridPlane, LineKind, LineSegment, PlaneFace, Primitive, PrimitiveShape};
use serde::{Deserialize, Serialize};
use voxplot_core::geom::{Bounds3, Point3, Vector3, point3, vector3};

pub const DEFAULT_PADDING: f64 = 0.01;
pub const PLANE_THICKNESS: f64 = 0.01;
pub const AXIS_LINE_WIDTH: f64 = 0.03;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeShape {
    Cube,
    Cylinder,
}

/// Origin + extent of a volume; maps world points into `[0, 1]` local space and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFrame {
    /// The lowest corner of the volume.
    pub origin: Point3,
    pub extent: Vector3,
}

impl CoordinateFrame {
    pub fn to_local(&self, world: Point3) -> Point3 {
        let d = world - self.origin;
        point3(
            ratio(d.x, self.extent.x),
            ratio(d.y, self.extent.y),
            ratio(d.z, self.extent.z),
        )
    }

    pub fn to_world(&self, local: Point3) -> Point3 {
        self.origin
            + vector3(
                local.x * self.extent.x,
                local.y * self.extent.y,
                local.z * self.extent.z,
            )
    }
}

fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 { 0.0 } else { num / den }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingVolume {
    pub shape: VolumeShape,
    pub center: Point3,
    pub size: Vector3,
}

impl BoundingVolume {
    /// A volume with an explicit placement, used by charts drawn in a fixed frame.
    pub fn fixed(shape: VolumeShape, center: Point3, size: Vector3) -> Self {
        Self {
            shape,
            center,
            size,
        }
    }

    /// Union of the render bounds of every primitive; `None` for an empty slice.
    pub fn compute_bounds(elements: &[Primitive]) -> Option<Bounds3> {
        let mut iter = elements.iter().map(element_bounds);
        let first = iter.next()?;
        Some(iter.fold(first, |acc, b| {
            Bounds3::new(
                point3(
                    acc.min.x.min(b.min.x),
                    acc.min.y.min(b.min.y),
                    acc.min.z.min(b.min.z),
                ),
                point3(
                    acc.max.x.max(b.max.x),
                    acc.max.y.max(b.max.y),
                    acc.max.z.max(b.max.z),
                ),
            )
        }))
    }

    pub fn initialize(elements: &[Primitive], shape: VolumeShape) -> Self {
        Self::initialize_padded(elements, shape, DEFAULT_PADDING)
    }

    /// Like [`BoundingVolume::initialize`], with an explicit cube padding.
    pub fn initialize_padded(elements: &[Primitive], shape: VolumeShape, padding: f64) -> Self {
        let Some(bounds) = Self::compute_bounds(elements) else {
            return Self::fixed(shape, point3(0.0, 0.0, 0.0), vector3(0.0, 0.0, 0.0));
        };
        let center = point3(
            (bounds.min.x + bounds.max.x) / 2.0,
            (bounds.min.y + bounds.max.y) / 2.0,
            (bounds.min.z + bounds.max.z) / 2.0,
        );
        let extent = bounds.max - bounds.min;
        let size = match shape {
            VolumeShape::Cube => extent + vector3(padding, padding, padding),
            VolumeShape::Cylinder => {
                let diameter = extent.x.max(extent.z);
                vector3(diameter, extent.y / 2.0, diameter)
            }
        };
        Self {
            shape,
            center,
            size,
        }
    }

    pub fn half_size(&self) -> Vector3 {
        self.size / 2.0
    }

    pub fn min_corner(&self) -> Point3 {
        self.center - self.half_size()
    }

    pub fn frame(&self) -> CoordinateFrame {
        CoordinateFrame {
            origin: self.min_corner(),
            extent: self.size,
        }
    }

    pub fn contains(&self, point: Point3) -> bool {
        let h = self.half_size();
        let d = point - self.center;
        d.x.abs() <= h.x && d.y.abs() <= h.y && d.z.abs() <= h.z
    }

    /// Bottom, back and right faces as thin slabs.
    pub fn grid_planes(&self) -> Vec<GridPlane> {
        let c = self.center;
        let h = self.half_size();
        let s = self.size;
        vec![
            GridPlane {
                face: PlaneFace::Bottom,
                center: point3(c.x, c.y - h.y, c.z),
                scale: vector3(s.x, PLANE_THICKNESS, s.z),
                rotation: vector3(0.0, 0.0, 0.0),
            },
            GridPlane {
                face: PlaneFace::Back,
                center: point3(c.x, c.y, c.z + h.z),
                scale: vector3(s.y, PLANE_THICKNESS, s.x),
                rotation: vector3(0.0, 90.0, 90.0),
            },
            GridPlane {
                face: PlaneFace::Right,
                center: point3(c.x + h.x, c.y, c.z),
                scale: vector3(s.z, PLANE_THICKNESS, s.y),
                rotation: vector3(90.0, 90.0, 0.0),
            },
        ]
    }

    /// Y, Z and X axis segments along the left/front/bottom edges.
    pub fn axis_lines(&self) -> Vec<LineSegment> {
        let c = self.center;
        let h = self.half_size();
        let at = |x: f64, y: f64, z: f64| c + vector3(x, y, z);
        let axis = |start: Point3, end: Point3| LineSegment {
            kind: LineKind::Axis,
            start,
            end,
            color: Color::GRAY,
            width: AXIS_LINE_WIDTH,
        };
        vec![
            axis(at(-h.x, -h.y, h.z), at(-h.x, h.y, h.z)),
            axis(at(-h.x, -h.y, -h.z), at(-h.x, -h.y, h.z)),
            axis(at(-h.x, -h.y, -h.z), at(h.x, -h.y, -h.z)),
        ]
    }
}

fn element_bounds(p: &Primitive) -> Bounds3 {
    let half = match p.shape {
        PrimitiveShape::Cube | PrimitiveShape::Sphere => p.scale / 2.0,
        PrimitiveShape::Wedge { radius, height, .. } => vector3(radius, height / 2.0, radius),
    };
    let half = vector3(half.x.abs(), half.y.abs(), half.z.abs());
    Bounds3::new(p.position - half, p.position + half)
}
