#![forbid(unsafe_code)]

//! `voxplot` turns raw chart data into renderer-ready 3D chart descriptors, headlessly.
//!
//! The canonical models and standardizers come from `voxplot-core` and are re-exported at the
//! crate root.
//!
//! # Features
//!
//! - `layout` (default): element/axis layout and the end-to-end [`layout::Pipeline`]

pub use voxplot_core::*;

#[cfg(feature = "layout")]
pub mod layout {
    mod pipeline;
    mod session;

    pub use pipeline::Pipeline;
    pub use session::{Frame, RenderSession};
    pub use voxplot_layout::{
        BoundingVolume, LayoutConfig, RenderPass, VisualizationDispatcher, VisualizationHandler,
        model,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum PipelineError {
        #[error(transparent)]
        Standardize(#[from] voxplot_core::Error),
        #[error(transparent)]
        Layout(#[from] voxplot_layout::Error),
    }

    impl PipelineError {
        /// Only failed fetches are worth retrying.
        pub fn is_retryable(&self) -> bool {
            match self {
                PipelineError::Standardize(err) => err.is_retryable(),
                PipelineError::Layout(voxplot_layout::Error::Core(err)) => err.is_retryable(),
                PipelineError::Layout(_) => false,
            }
        }
    }

    pub type Result<T> = std::result::Result<T, PipelineError>;
}
