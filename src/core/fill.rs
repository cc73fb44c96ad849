use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::annotate::AugmentedPoint;
use crate::core::limit::LimitBand;
use crate::render::path::Path;

/// Upper bound on points per fill polygon. Large windows are split into
/// chunks of this many indices so one draw pass never materializes an
/// arbitrarily large polygon.
pub const FILL_CHUNK_INTERVAL: usize = 128;

/// Which clip region of the value axis a fill shape belongs to; selects the
/// fill color (series fill for the band, limit color for the overflows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillRegion {
    Band,
    AboveTop,
    BelowBottom,
}

/// One drawable fill element produced by the fill pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FillShape {
    /// Closed polygon in data space, ready for the pixel transform.
    Polygon { path: Path, region: FillRegion },
    /// Degenerate fill for an isolated point: a vertical segment from the
    /// region baseline to the point's (clamped, phase-scaled) y.
    Vertical {
        x: f64,
        y_from: f64,
        y_to: f64,
        region: FillRegion,
    },
}

/// Per-pass inputs for fill generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillContext {
    /// Value-axis level the fill closes against.
    pub fill_min: f64,
    /// Vertical reveal animation scalar in [0, 1], applied to data y only,
    /// never to baselines.
    pub phase_y: f64,
    pub axis_min: f64,
    pub axis_max: f64,
}

/// Lazy single-pass producer of fill shapes over an augmented sequence.
///
/// Chunks of up to [`FILL_CHUNK_INTERVAL`] points become closed polygons; a
/// gap point forces an early chunk boundary so no fill bridges a gap, and
/// isolated points yield vertical fills instead of polygons. The iterator
/// is finite and not restartable; start a fresh pass per draw call.
#[derive(Debug)]
pub struct FillShapes<'a> {
    points: &'a [AugmentedPoint],
    band: Option<LimitBand>,
    ctx: FillContext,
    index: usize,
    chunk_start: usize,
    pending: SmallVec<[FillShape; 4]>,
}

impl<'a> FillShapes<'a> {
    #[must_use]
    pub fn new(points: &'a [AugmentedPoint], band: Option<&LimitBand>, ctx: FillContext) -> Self {
        Self {
            points,
            band: band.copied(),
            ctx,
            index: 0,
            chunk_start: 0,
            pending: SmallVec::new(),
        }
    }

    fn emit_chunk(&mut self, start: usize, end: usize) {
        let ctx = self.ctx;
        match self.band {
            None => {
                let path = self.chunk_polygon(start, end, ctx.fill_min, |y| y);
                self.pending.push(FillShape::Polygon {
                    path,
                    region: FillRegion::Band,
                });
            }
            Some(band) => {
                if band_visible(band, ctx) {
                    let baseline = band_baseline(band, ctx.fill_min);
                    let path =
                        self.chunk_polygon(start, end, baseline, |y| y.clamp(band.bottom, band.top));
                    self.pending.push(FillShape::Polygon {
                        path,
                        region: FillRegion::Band,
                    });
                }
                if top_visible(band, ctx) {
                    let baseline = band.top.max(ctx.fill_min);
                    let path = self.chunk_polygon(start, end, baseline, |y| y.max(band.top));
                    self.pending.push(FillShape::Polygon {
                        path,
                        region: FillRegion::AboveTop,
                    });
                }
                if bottom_visible(band, ctx) {
                    let baseline = band.bottom.min(ctx.fill_min);
                    let path = self.chunk_polygon(start, end, baseline, |y| y.min(band.bottom));
                    self.pending.push(FillShape::Polygon {
                        path,
                        region: FillRegion::BelowBottom,
                    });
                }
            }
        }
    }

    /// Builds one closed chunk polygon: baseline under the first point, up
    /// through the (clamped, phase-scaled) points, back down to the
    /// baseline under the last point.
    fn chunk_polygon(
        &self,
        start: usize,
        end: usize,
        baseline: f64,
        clamp: impl Fn(f64) -> f64,
    ) -> Path {
        let phase_y = self.ctx.phase_y;
        let mut path = Path::new();

        let first = self.points[start];
        path.move_to(first.x, baseline);
        path.line_to(first.x, clamp(first.y) * phase_y);
        for point in &self.points[start + 1..=end] {
            path.line_to(point.x, clamp(point.y) * phase_y);
        }
        path.line_to(self.points[end].x, baseline);
        path.close();
        path
    }

    fn emit_isolated(&mut self, point: AugmentedPoint) {
        let ctx = self.ctx;
        let (x, y) = (point.x, point.y);

        match self.band {
            None => self.pending.push(FillShape::Vertical {
                x,
                y_from: ctx.fill_min,
                y_to: y * ctx.phase_y,
                region: FillRegion::Band,
            }),
            Some(band) => {
                if top_visible(band, ctx) {
                    let baseline = band.top.max(ctx.fill_min);
                    self.pending.push(FillShape::Vertical {
                        x,
                        y_from: baseline,
                        y_to: baseline.max(y) * ctx.phase_y,
                        region: FillRegion::AboveTop,
                    });
                }
                if bottom_visible(band, ctx) {
                    let baseline = band.bottom.min(ctx.fill_min);
                    self.pending.push(FillShape::Vertical {
                        x,
                        y_from: baseline,
                        y_to: band.bottom.min(y) * ctx.phase_y,
                        region: FillRegion::BelowBottom,
                    });
                }
                if band_visible(band, ctx) {
                    let baseline = band_baseline(band, ctx.fill_min);
                    let clamped = y.clamp(band.bottom, band.top);
                    self.pending.push(FillShape::Vertical {
                        x,
                        y_from: baseline,
                        y_to: baseline.max(clamped) * ctx.phase_y,
                        region: FillRegion::Band,
                    });
                }
            }
        }
    }
}

impl Iterator for FillShapes<'_> {
    type Item = FillShape;

    fn next(&mut self) -> Option<FillShape> {
        loop {
            if !self.pending.is_empty() {
                return Some(self.pending.remove(0));
            }
            if self.index >= self.points.len() {
                return None;
            }

            let last = self.points.len() - 1;
            let point = self.points[self.index];
            let break_in_data = point.is_gap_start;

            if break_in_data
                || self.index - self.chunk_start >= FILL_CHUNK_INTERVAL
                || self.index == last
            {
                let chunk_end = if break_in_data {
                    self.index.saturating_sub(1)
                } else {
                    self.index
                };
                if self.chunk_start != chunk_end {
                    self.emit_chunk(self.chunk_start, chunk_end);
                }
                if point.is_isolated {
                    self.emit_isolated(point);
                }
                self.chunk_start = self.index;
            }

            self.index += 1;
        }
    }
}

/// In-band fill baseline: the greater of bottom threshold and global fill
/// level, unless the top threshold sits below the fill level entirely.
fn band_baseline(band: LimitBand, fill_min: f64) -> f64 {
    if band.top >= fill_min {
        band.bottom.max(fill_min)
    } else {
        band.top
    }
}

fn band_visible(band: LimitBand, ctx: FillContext) -> bool {
    ctx.axis_max >= band.bottom && ctx.axis_min <= band.top
}

fn top_visible(band: LimitBand, ctx: FillContext) -> bool {
    band.top < ctx.axis_max
}

fn bottom_visible(band: LimitBand, ctx: FillContext) -> bool {
    band.bottom > ctx.axis_min
}
