use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::limit::LimitBand;
use crate::core::types::DataPoint;

/// A data point augmented with rendering flags by the annotation pass.
///
/// `is_gap_start` marks a point that begins a region rendered as a gap
/// indicator instead of a solid connector; the first emitted point always
/// carries it (nothing is drawn before the first sample). `is_isolated`
/// marks a point with no solid neighbor on either side, drawn as a
/// standalone marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AugmentedPoint {
    pub x: f64,
    pub y: f64,
    pub is_gap_start: bool,
    pub is_isolated: bool,
}

impl AugmentedPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, is_gap_start: bool) -> Self {
        Self {
            x,
            y,
            is_gap_start,
            is_isolated: false,
        }
    }
}

/// Walks the raw sequence once, flagging gap starts and isolated points and
/// inserting interpolated boundary points wherever the path crosses the
/// limit thresholds.
///
/// `max_gap <= 0` disables gap detection. The augmented sequence is at
/// least as long as the input and keeps x non-decreasing.
#[must_use]
pub fn annotate_series(
    points: &[DataPoint],
    band: Option<&LimitBand>,
    max_gap: f64,
) -> Vec<AugmentedPoint> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let use_gaps = max_gap > 0.0;

    let mut result = Vec::with_capacity(points.len());
    result.push(AugmentedPoint::new(first.x, first.y, true));
    let mut prev_raw = 0usize;

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);
        let is_gap = use_gaps && (p2.x - p1.x) > max_gap;

        // A gap on both sides leaves the previous point without a solid
        // neighbor; it must be drawn as a dot, not a line endpoint.
        if is_gap && result[prev_raw].is_gap_start {
            result[prev_raw].is_isolated = true;
        }

        let mut crossings: SmallVec<[AugmentedPoint; 2]> = SmallVec::new();
        if let Some(band) = band {
            if LimitBand::crosses(p1.y, p2.y, band.top) {
                crossings.push(interpolate_crossing(p1, p2, band.top, is_gap));
            }
            if band.bottom != band.top && LimitBand::crosses(p1.y, p2.y, band.bottom) {
                crossings.push(interpolate_crossing(p1, p2, band.bottom, is_gap));
            }
        }
        // A segment can cross both thresholds in either direction; keep the
        // inserted points ordered by ascending x.
        crossings.sort_by_key(|p| OrderedFloat(p.x));
        result.extend(crossings);

        result.push(AugmentedPoint::new(p2.x, p2.y, is_gap));
        prev_raw = result.len() - 1;
    }

    if let Some(last) = result.last_mut() {
        if last.is_gap_start {
            last.is_isolated = true;
        }
    }

    result
}

/// Linear interpolation of the crossing point at `threshold`. Equal-y input
/// cannot coexist with a crossing but is guarded with a midpoint fallback.
fn interpolate_crossing(
    p1: DataPoint,
    p2: DataPoint,
    threshold: f64,
    is_gap: bool,
) -> AugmentedPoint {
    if p1.y == p2.y {
        return AugmentedPoint::new((p1.x + p2.x) / 2.0, threshold, is_gap);
    }
    let t = (threshold - p1.y) / (p2.y - p1.y);
    AugmentedPoint::new(p1.x + t * (p2.x - p1.x), threshold, is_gap)
}
