pub mod offscreen;
pub mod path;
pub mod primitives;
pub mod recording;
pub mod renderer;

pub use offscreen::{SurfaceCache, SurfaceFactory};
pub use path::{Path, PathVerb};
pub use primitives::{Color, DashPattern, Stroke};
pub use recording::{DrawCommand, RecordingSurface};
pub use renderer::{LineChartRenderer, RenderEnv};

use crate::error::ChartResult;

/// Capability set implemented by any 2D drawing backend.
///
/// The geometry pipeline hands backends fully transformed pixel-space
/// primitives, so a software raster, GPU-backed canvas, or SVG emitter are
/// equally substitutable.
pub trait Surface {
    /// Clears the whole surface to transparent. Reused offscreen surfaces
    /// must be cleared before each pass to avoid ghosting.
    fn clear(&mut self) -> ChartResult<()>;

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) -> ChartResult<()>;

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()>;

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> ChartResult<()>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &Stroke)
    -> ChartResult<()>;
}
