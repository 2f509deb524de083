#![forbid(unsafe_code)]

//! Chart data standardization + canonical data models (headless).
//!
//! Raw JSON fetched from a data service is turned into one canonical model per visualization
//! kind ([`ProcessedData`]). The layout engine (`voxplot-layout`) consumes these models; nothing
//! in this crate knows about geometry beyond normalized positions.
//!
//! Design goals:
//! - a closed, stable set of visualization kinds with a bidirectional wire vocabulary
//! - explicit errors for malformed and degenerate input (no silent NaN/infinity downstream)
//! - runtime-agnostic async fetch seam (no specific executor or HTTP client required)

pub mod config;
pub mod error;
pub mod geom;
pub mod kind;
pub mod models;
pub mod source;
pub mod standardize;

pub use config::EndpointTable;
pub use error::{Error, Result};
pub use kind::VisualizationKind;
pub use models::{
    AxisRange, GridDimensions, HeatMapCell, HeatMapData, MultiSeriesData, PieChartData,
    PieSliceData, ProcessedData, ScatterData, SegmentCountMismatch, SeriesData, StackedBarData,
    StackedMultiSeriesData, StackedSeriesData,
};
pub use source::{RawDataSource, StaticSource, fetch_raw};
pub use standardize::{DataStandardizer, StandardizerRegistry};

#[cfg(test)]
mod tests;
