use crate::core::scale::{LinearScale, ValueScale};
use crate::core::types::Viewport;
use crate::error::ChartResult;
use crate::render::path::{Path, PathVerb};

/// Affine data-space to pixel-space mapping for one axis pair.
///
/// Both axes are linear, which keeps crossing-point interpolation done in
/// data space valid after projection to pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformer {
    x_scale: LinearScale,
    y_scale: ValueScale,
    viewport: Viewport,
}

impl Transformer {
    #[must_use]
    pub fn new(x_scale: LinearScale, y_scale: ValueScale, viewport: Viewport) -> Self {
        Self {
            x_scale,
            y_scale,
            viewport,
        }
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn y_scale(self) -> ValueScale {
        self.y_scale
    }

    pub fn point_to_pixel(self, x: f64, y: f64) -> ChartResult<(f64, f64)> {
        let px = self.x_scale.domain_to_pixel(x, self.viewport)?;
        let py = self.y_scale.value_to_pixel(y, self.viewport)?;
        Ok((px, py))
    }

    /// Maps a flat `[x0, y0, x1, y1, ..]` buffer in place.
    ///
    /// Only the first `float_count` entries are touched so segment buffers
    /// can be transformed without copying out their used prefix.
    pub fn points_to_pixel(self, floats: &mut [f64], float_count: usize) -> ChartResult<()> {
        for pair in floats[..float_count].chunks_exact_mut(2) {
            let (px, py) = self.point_to_pixel(pair[0], pair[1])?;
            pair[0] = px;
            pair[1] = py;
        }
        Ok(())
    }

    /// Maps every coordinate of a path from data space to pixel space.
    pub fn path_to_pixel(self, path: &mut Path) -> ChartResult<()> {
        for verb in path.verbs_mut() {
            match verb {
                PathVerb::MoveTo { x, y } | PathVerb::LineTo { x, y } => {
                    let (px, py) = self.point_to_pixel(*x, *y)?;
                    *x = px;
                    *y = py;
                }
                PathVerb::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => {
                    let (p1x, p1y) = self.point_to_pixel(*c1x, *c1y)?;
                    let (p2x, p2y) = self.point_to_pixel(*c2x, *c2y)?;
                    let (px, py) = self.point_to_pixel(*x, *y)?;
                    *c1x = p1x;
                    *c1y = p1y;
                    *c2x = p2x;
                    *c2y = p2y;
                    *x = px;
                    *y = py;
                }
                PathVerb::Close => {}
            }
        }
        Ok(())
    }
}
