pub mod annotate;
pub mod classify;
pub mod fill;
pub mod limit;
pub mod scale;
pub mod series;
pub mod spline;
pub mod transform;
pub mod types;
pub mod windowing;

pub use annotate::{AugmentedPoint, annotate_series};
pub use classify::{SegmentBuffer, SegmentSet, classify_segments, marker_uses_limit_color};
pub use fill::{FillContext, FillRegion, FillShape, FillShapes};
pub use limit::{LimitBand, LimitLine};
pub use scale::{LinearScale, ValueScale};
pub use series::{
    DEFAULT_CUBIC_INTENSITY, FillPosition, FillPositionDefault, LineMode, LineSeries,
};
pub use spline::{close_spline_fill, cubic_spline_path, horizontal_spline_path};
pub use transform::Transformer;
pub use types::{DataPoint, Viewport};
pub use windowing::Bounds;
