//! Renderer-facing descriptors produced by one render pass.

use crate::bounds::BoundingVolume;
use crate::color::Color;
use serde::{Deserialize, Serialize};
use voxplot_core::VisualizationKind;
use voxplot_core::geom::{Point3, Vector3, vector3};

/// Position and scale of one placed element, before it becomes a [`Primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementPlacement {
    pub position: Point3,
    pub scale: Vector3,
}

impl ElementPlacement {
    /// Bottom face height (`position.y - scale.y / 2`).
    pub fn bottom(&self) -> f64 {
        self.position.y - self.scale.y / 2.0
    }

    /// Top face height (`position.y + scale.y / 2`).
    pub fn top(&self) -> f64 {
        self.position.y + self.scale.y / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PrimitiveShape {
    Cube,
    Sphere,
    /// A pie wedge; angles in degrees, clockwise from +Z when viewed from above.
    Wedge {
        start_angle: f64,
        angle_size: f64,
        radius: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ColorRef {
    #[default]
    Unassigned,
    /// Discrete palette slot (bars, slices).
    Palette { index: usize, name: String },
    /// Continuous color (heat map cells).
    Rgba { color: Color },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub id: String,
    pub shape: PrimitiveShape,
    pub position: Point3,
    pub scale: Vector3,
    /// Euler angles in degrees.
    pub rotation: Vector3,
    pub color: ColorRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl Primitive {
    pub fn new(id: impl Into<String>, shape: PrimitiveShape, placement: ElementPlacement) -> Self {
        Self {
            id: id.into(),
            shape,
            position: placement.position,
            scale: placement.scale,
            rotation: vector3(0.0, 0.0, 0.0),
            color: ColorRef::Unassigned,
            tooltip: None,
        }
    }

    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    pub fn color_index(&self) -> Option<usize> {
        match self.color {
            ColorRef::Palette { index, .. } => Some(index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    MiddleCenter,
    MiddleRight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub position: Point3,
    pub text: String,
    pub anchor: Anchor,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Axis,
    Gridline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub kind: LineKind,
    pub start: Point3,
    pub end: Point3,
    pub color: Color,
    pub width: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaneFace {
    Bottom,
    Back,
    Right,
}

/// A thin textured slab on one face of the bounding volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridPlane {
    pub face: PlaneFace,
    pub center: Point3,
    pub scale: Vector3,
    /// Euler angles in degrees.
    pub rotation: Vector3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassStage {
    Elements,
    Colors,
    AxisNumbers,
}

/// A sub-step that was skipped; the rest of the pass is still usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub stage: PassStage,
    pub message: String,
}

/// Everything the external renderer needs for one chart, generated from scratch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPass {
    pub kind: VisualizationKind,
    pub primitives: Vec<Primitive>,
    pub labels: Vec<Label>,
    pub lines: Vec<LineSegment>,
    pub planes: Vec<GridPlane>,
    pub volume: Option<BoundingVolume>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderPass {
    pub fn new(kind: VisualizationKind) -> Self {
        Self {
            kind,
            primitives: Vec::new(),
            labels: Vec::new(),
            lines: Vec::new(),
            planes: Vec::new(),
            volume: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn lines_of(&self, kind: LineKind) -> impl Iterator<Item = &LineSegment> {
        self.lines.iter().filter(move |l| l.kind == kind)
    }

    pub(crate) fn skip(&mut self, stage: PassStage, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(kind = %self.kind, ?stage, %message, "render sub-step skipped");
        self.diagnostics.push(Diagnostic { stage, message });
    }
}
