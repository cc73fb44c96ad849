use tracing::{debug, trace};

use crate::core::annotate::annotate_series;
use crate::core::classify::{SegmentBuffer, classify_segments, marker_uses_limit_color};
use crate::core::fill::{FillContext, FillRegion, FillShape, FillShapes};
use crate::core::limit::{LimitBand, LimitLine};
use crate::core::series::{FillPosition, FillPositionDefault, LineMode, LineSeries};
use crate::core::spline::{close_spline_fill, cubic_spline_path, horizontal_spline_path};
use crate::core::transform::Transformer;
use crate::core::windowing::Bounds;
use crate::error::ChartResult;
use crate::render::Surface;
use crate::render::offscreen::{SurfaceCache, SurfaceFactory};
use crate::render::primitives::{Color, Stroke};

/// Pixel radius of the standalone dot drawn for gap and isolated points.
const GAP_MARKER_RADIUS_PX: f64 = 0.7;
const DOTTED_DASH_ON_PX: f64 = 4.0;
const DOTTED_DASH_OFF_PX: f64 = 4.0;

/// Per-pass collaborators supplied by the host chart.
#[derive(Debug, Clone, Copy)]
pub struct RenderEnv<'a> {
    pub transformer: Transformer,
    /// Value-axis limit lines; the top/bottom band is derived from them.
    pub limit_lines: &'a [LimitLine],
    /// Vertical reveal animation scalar in [0, 1], supplied externally.
    pub phase_y: f64,
    /// Visible x window; `None` renders the whole series.
    pub visible_x: Option<(f64, f64)>,
}

impl<'a> RenderEnv<'a> {
    #[must_use]
    pub fn new(transformer: Transformer) -> Self {
        Self {
            transformer,
            limit_lines: &[],
            phase_y: 1.0,
            visible_x: None,
        }
    }

    #[must_use]
    pub fn with_limit_lines(mut self, lines: &'a [LimitLine]) -> Self {
        self.limit_lines = lines;
        self
    }

    #[must_use]
    pub fn with_phase_y(mut self, phase_y: f64) -> Self {
        self.phase_y = phase_y;
        self
    }

    #[must_use]
    pub fn with_visible_x(mut self, start: f64, end: f64) -> Self {
        self.visible_x = Some((start, end));
        self
    }
}

/// Line-chart draw orchestration: annotates, classifies, fills, strokes and
/// dots each series onto a cached offscreen surface.
///
/// Draw passes are synchronous and single-threaded; callers serialize draw
/// calls per chart instance. The only state shared between frames is the
/// offscreen surface, reused while the viewport size is unchanged.
#[derive(Debug, Default)]
pub struct LineChartRenderer<S: Surface, P: FillPosition = FillPositionDefault> {
    offscreen: SurfaceCache<S>,
    fill_position: P,
}

impl<S: Surface> LineChartRenderer<S, FillPositionDefault> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            offscreen: SurfaceCache::new(),
            fill_position: FillPositionDefault,
        }
    }
}

impl<S: Surface, P: FillPosition> LineChartRenderer<S, P> {
    #[must_use]
    pub fn with_fill_position(fill_position: P) -> Self {
        Self {
            offscreen: SurfaceCache::new(),
            fill_position,
        }
    }

    /// Runs one full draw pass over all visible series and returns the
    /// rendered offscreen surface for the host to compose.
    pub fn draw_data<F>(
        &mut self,
        factory: &mut F,
        data: &[LineSeries],
        env: &RenderEnv<'_>,
    ) -> ChartResult<&S>
    where
        F: SurfaceFactory<Surface = S>,
    {
        debug!(series_count = data.len(), "line chart draw pass");

        let fill_position = &self.fill_position;
        let surface = self
            .offscreen
            .acquire(env.transformer.viewport(), factory)?;

        for series in data {
            draw_series_on(fill_position, surface, series, env)?;
            draw_circles_on(surface, series, env)?;
        }

        Ok(surface)
    }

    /// Draws one series directly onto the given surface.
    pub fn draw_series(
        &self,
        surface: &mut S,
        series: &LineSeries,
        env: &RenderEnv<'_>,
    ) -> ChartResult<()> {
        draw_series_on(&self.fill_position, surface, series, env)
    }

    /// Draws the per-point circle pass for one series.
    pub fn draw_circles(
        &self,
        surface: &mut S,
        series: &LineSeries,
        env: &RenderEnv<'_>,
    ) -> ChartResult<()> {
        draw_circles_on(surface, series, env)
    }

    /// Drops the cached offscreen surface. Call on chart teardown.
    pub fn release(&mut self) {
        self.offscreen.release();
    }
}

fn visible_bounds(series: &LineSeries, env: &RenderEnv<'_>) -> Option<Bounds> {
    if series.points.is_empty() {
        return None;
    }
    match env.visible_x {
        Some((start, end)) => Bounds::of_window(&series.points, start, end),
        None => Some(Bounds::all(&series.points)),
    }
}

fn draw_series_on<P: FillPosition, S: Surface>(
    fill_position: &P,
    surface: &mut S,
    series: &LineSeries,
    env: &RenderEnv<'_>,
) -> ChartResult<()> {
    if !series.visible {
        return Ok(());
    }
    let Some(bounds) = visible_bounds(series, env) else {
        return Ok(());
    };

    trace!(label = %series.label, mode = ?series.mode, "drawing series");

    match series.mode {
        // Stepped shares the segment pipeline with linear rendering.
        LineMode::Linear | LineMode::Stepped => {
            draw_linear(fill_position, surface, series, env, bounds)
        }
        LineMode::CubicBezier => draw_bezier(fill_position, surface, series, env, bounds, false),
        LineMode::HorizontalBezier => {
            draw_bezier(fill_position, surface, series, env, bounds, true)
        }
    }
}

fn draw_linear<P: FillPosition, S: Surface>(
    fill_position: &P,
    surface: &mut S,
    series: &LineSeries,
    env: &RenderEnv<'_>,
    bounds: Bounds,
) -> ChartResult<()> {
    let window = &series.points[bounds.min..=bounds.max()];
    let band = LimitBand::from_lines(env.limit_lines);
    let augmented = annotate_series(window, band.as_ref(), series.max_point_gap);
    if augmented.is_empty() {
        return Ok(());
    }

    if series.draw_filled {
        let axis = env.transformer.y_scale();
        let ctx = FillContext {
            fill_min: fill_position.fill_line_position(series, axis),
            phase_y: env.phase_y,
            axis_min: axis.axis_min(),
            axis_max: axis.axis_max(),
        };
        let band_fill = series.fill_color.with_alpha(series.fill_alpha);
        let limit_fill = band.map(|b| b.color.with_alpha(series.fill_alpha));

        for shape in FillShapes::new(&augmented, band.as_ref(), ctx) {
            match shape {
                FillShape::Polygon { mut path, region } => {
                    env.transformer.path_to_pixel(&mut path)?;
                    surface.fill_path(&path, fill_color_for(region, band_fill, limit_fill))?;
                }
                FillShape::Vertical {
                    x,
                    y_from,
                    y_to,
                    region,
                } => {
                    let (x1, y1) = env.transformer.point_to_pixel(x, y_from)?;
                    let (x2, y2) = env.transformer.point_to_pixel(x, y_to)?;
                    let stroke = Stroke::solid(
                        series.line_width,
                        fill_color_for(region, band_fill, limit_fill),
                    );
                    surface.draw_line(x1, y1, x2, y2, &stroke)?;
                }
            }
        }
    }

    let mut set = classify_segments(&augmented, band.as_ref(), env.phase_y);

    let solid = Stroke::solid(series.line_width, series.color);
    let dotted = Stroke::dashed(
        series.line_width,
        series.color,
        DOTTED_DASH_ON_PX,
        DOTTED_DASH_OFF_PX,
    );
    stroke_buffer(surface, env, &mut set.solid, &solid)?;
    stroke_buffer(surface, env, &mut set.dotted, &dotted)?;

    if let Some(band) = band {
        let limit_solid = Stroke::solid(series.line_width, band.color);
        let limit_dotted = Stroke::dashed(
            series.line_width,
            band.color,
            DOTTED_DASH_ON_PX,
            DOTTED_DASH_OFF_PX,
        );
        stroke_buffer(surface, env, &mut set.solid_limit, &limit_solid)?;
        stroke_buffer(surface, env, &mut set.dotted_limit, &limit_dotted)?;
    }

    for marker in &set.markers {
        let (px, py) = env
            .transformer
            .point_to_pixel(marker.x, marker.y * env.phase_y)?;
        let color = if marker_uses_limit_color(*marker, band.as_ref()) {
            band.map_or(series.color, |b| b.color)
        } else {
            series.color
        };
        surface.draw_circle(px, py, GAP_MARKER_RADIUS_PX, color)?;
    }

    Ok(())
}

fn stroke_buffer<S: Surface>(
    surface: &mut S,
    env: &RenderEnv<'_>,
    buffer: &mut SegmentBuffer,
    stroke: &Stroke,
) -> ChartResult<()> {
    if buffer.is_empty() {
        return Ok(());
    }

    let float_count = buffer.float_count();
    env.transformer
        .points_to_pixel(buffer.floats_mut(), float_count)?;

    for segment in buffer.floats().chunks_exact(4) {
        surface.draw_line(segment[0], segment[1], segment[2], segment[3], stroke)?;
    }
    Ok(())
}

fn draw_bezier<P: FillPosition, S: Surface>(
    fill_position: &P,
    surface: &mut S,
    series: &LineSeries,
    env: &RenderEnv<'_>,
    bounds: Bounds,
    horizontal: bool,
) -> ChartResult<()> {
    let mut spline = if horizontal {
        horizontal_spline_path(&series.points, bounds, env.phase_y)
    } else {
        cubic_spline_path(&series.points, bounds, series.cubic_intensity(), env.phase_y)
    };
    if spline.is_empty() {
        return Ok(());
    }

    if series.draw_filled {
        let axis = env.transformer.y_scale();
        let fill_min = fill_position.fill_line_position(series, axis);
        let mut fill = close_spline_fill(&spline, &series.points, bounds, fill_min);
        env.transformer.path_to_pixel(&mut fill)?;
        surface.fill_path(&fill, series.fill_color.with_alpha(series.fill_alpha))?;
    }

    env.transformer.path_to_pixel(&mut spline)?;
    surface.stroke_path(&spline, &Stroke::solid(series.line_width, series.color))
}

fn draw_circles_on<S: Surface>(
    surface: &mut S,
    series: &LineSeries,
    env: &RenderEnv<'_>,
) -> ChartResult<()> {
    if !series.visible || !series.draw_circles {
        return Ok(());
    }
    let Some(bounds) = visible_bounds(series, env) else {
        return Ok(());
    };

    let band = LimitBand::from_lines(env.limit_lines);
    let viewport = env.transformer.viewport();

    for point in &series.points[bounds.min..=bounds.max()] {
        let (px, py) = env
            .transformer
            .point_to_pixel(point.x, point.y * env.phase_y)?;

        // Points are x-ordered, nothing further right can be visible.
        if px > f64::from(viewport.width) {
            break;
        }
        if px < 0.0 || py < 0.0 || py > f64::from(viewport.height) {
            continue;
        }

        let color = band
            .filter(|b| b.at_or_beyond(point.y))
            .map_or(series.color, |b| b.color);
        surface.draw_circle(px, py, series.circle_radius, color)?;
    }

    Ok(())
}

fn fill_color_for(region: FillRegion, band_fill: Color, limit_fill: Option<Color>) -> Color {
    match region {
        FillRegion::Band => band_fill,
        FillRegion::AboveTop | FillRegion::BelowBottom => limit_fill.unwrap_or(band_fill),
    }
}
