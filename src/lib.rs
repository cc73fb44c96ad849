//! linechart-rs: line-series geometry and rendering core.
//!
//! This crate turns an ordered `(x, y)` point sequence into drawable
//! geometry: line segments partitioned by visual treatment (solid, dotted
//! gap indicator, limit-band recolored), clipped fill polygons, and bezier
//! spline paths. Drawing itself goes through a backend-agnostic `Surface`
//! so software raster, GPU canvas, or SVG backends are substitutable.

pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use core::{
    AugmentedPoint, Bounds, DataPoint, FillContext, FillRegion, FillShape, FillShapes, LimitBand,
    LimitLine, LineMode, LineSeries, SegmentBuffer, SegmentSet, Transformer, Viewport,
    annotate_series, classify_segments,
};
pub use error::{ChartError, ChartResult};
pub use render::{LineChartRenderer, RenderEnv, Surface};
