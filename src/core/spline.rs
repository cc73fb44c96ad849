use crate::core::types::DataPoint;
use crate::core::windowing::Bounds;
use crate::render::path::Path;

/// Builds the cubic bezier path through the bounded window.
///
/// Each window uses four anchors (j-2, j-1, j, j+1) with indices clamped to
/// the slice at both ends; clamping reuses the nearest valid point instead
/// of extrapolating, which keeps the curve stable on the first and last
/// couple of points. Control offsets are scaled by `intensity`.
#[must_use]
pub fn cubic_spline_path(
    points: &[DataPoint],
    bounds: Bounds,
    intensity: f64,
    phase_y: f64,
) -> Path {
    let mut path = Path::new();
    if points.is_empty() || bounds.range < 1 || bounds.max() >= points.len() {
        return path;
    }

    let first_index = bounds.min + 1;
    let mut prev = points[first_index.saturating_sub(2)];
    let mut cur = points[first_index - 1];

    path.move_to(cur.x, cur.y * phase_y);

    for j in (bounds.min + 1)..=bounds.max() {
        let prev_prev = prev;
        prev = cur;
        cur = points[j];
        let next = points[(j + 1).min(points.len() - 1)];

        let prev_dx = (cur.x - prev_prev.x) * intensity;
        let prev_dy = (cur.y - prev_prev.y) * intensity;
        let cur_dx = (next.x - prev.x) * intensity;
        let cur_dy = (next.y - prev.y) * intensity;

        path.cubic_to(
            prev.x + prev_dx,
            (prev.y + prev_dy) * phase_y,
            cur.x - cur_dx,
            (cur.y - cur_dy) * phase_y,
            cur.x,
            cur.y * phase_y,
        );
    }

    path
}

/// Builds the horizontal bezier path: both control points of each pair sit
/// at the horizontal midpoint, each keeping its endpoint's y, so the curve
/// approaches every point horizontally.
#[must_use]
pub fn horizontal_spline_path(points: &[DataPoint], bounds: Bounds, phase_y: f64) -> Path {
    let mut path = Path::new();
    if points.is_empty() || bounds.range < 1 || bounds.max() >= points.len() {
        return path;
    }

    let mut cur = points[bounds.min];
    path.move_to(cur.x, cur.y * phase_y);

    for j in (bounds.min + 1)..=bounds.max() {
        let prev = cur;
        cur = points[j];

        let cpx = prev.x + (cur.x - prev.x) / 2.0;
        path.cubic_to(
            cpx,
            prev.y * phase_y,
            cpx,
            cur.y * phase_y,
            cur.x,
            cur.y * phase_y,
        );
    }

    path
}

/// Closes a copy of a spline path against the fill baseline: drop to the
/// baseline under the last bound point, back under the first, then close.
/// The stroke keeps using the original open path.
#[must_use]
pub fn close_spline_fill(
    spline: &Path,
    points: &[DataPoint],
    bounds: Bounds,
    fill_position: f64,
) -> Path {
    let mut fill = spline.clone();
    if fill.is_empty() || points.is_empty() || bounds.max() >= points.len() {
        return fill;
    }

    fill.line_to(points[bounds.max()].x, fill_position);
    fill.line_to(points[bounds.min].x, fill_position);
    fill.close();
    fill
}
