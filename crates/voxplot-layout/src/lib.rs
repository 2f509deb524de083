#![forbid(unsafe_code)]

//! Headless 3D chart layout.
//!
//! Consumes the canonical models from `voxplot-core` and produces a [`RenderPass`]: placed
//! primitives, labels, axis/grid lines and the enclosing bounding volume. Rendering itself is
//! someone else's job.

pub mod axis;
pub mod bounds;
pub mod chart;
pub mod color;
pub mod config;
pub mod dispatch;
pub mod element;
pub mod format;
pub mod model;

pub use axis::{AxisDescriptors, AxisLayout, MultiSeriesAxes, ScatterAxes, StackedMultiSeriesAxes};
pub use bounds::{BoundingVolume, CoordinateFrame, VolumeShape};
pub use chart::VisualizationHandler;
pub use color::{
    BarColorManager, Color, ColorManager, GradientColorMapper, PaletteEntry, PieSliceColorManager,
};
pub use config::LayoutConfig;
pub use dispatch::VisualizationDispatcher;
pub use element::{BarLayout, HeatMapCellLayout, PieSliceLayout, StackedBarLayout, WedgeGeometry};
pub use model::{
    Anchor, ColorRef, Diagnostic, ElementPlacement, GridPlane, Label, LineKind, LineSegment,
    PassStage, PlaneFace, Primitive, PrimitiveShape, RenderPass,
};

use voxplot_core::VisualizationKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Type mismatch: expected {expected} data, got {found}")]
    TypeMismatch {
        expected: VisualizationKind,
        found: VisualizationKind,
    },

    #[error("Degenerate input ({kind}): {message}")]
    DegenerateInput {
        kind: VisualizationKind,
        message: String,
    },

    #[error("Invalid layout configuration JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Core(#[from] voxplot_core::Error),
}

impl Error {
    pub(crate) fn type_mismatch(expected: VisualizationKind, found: VisualizationKind) -> Self {
        Error::TypeMismatch { expected, found }
    }
}
