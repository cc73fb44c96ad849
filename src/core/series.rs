use serde::{Deserialize, Serialize};

use crate::core::scale::ValueScale;
use crate::core::types::DataPoint;
use crate::render::primitives::Color;

/// Rendering mode for a line series. The set is fixed; rendering dispatches
/// exhaustively on the tag once per series per draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LineMode {
    #[default]
    Linear,
    Stepped,
    CubicBezier,
    HorizontalBezier,
}

pub const DEFAULT_CUBIC_INTENSITY: f64 = 0.2;

const CUBIC_INTENSITY_MIN: f64 = 0.05;
const CUBIC_INTENSITY_MAX: f64 = 1.0;

/// One line series with its styling, owned by the caller and read-only to
/// the geometry pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeries {
    pub points: Vec<DataPoint>,
    pub label: String,
    pub mode: LineMode,
    pub visible: bool,
    pub color: Color,
    pub line_width: f64,
    /// Maximum allowed x distance between neighbors before the connector is
    /// rendered as a gap. Values <= 0 disable gap detection.
    pub max_point_gap: f64,
    pub draw_filled: bool,
    pub fill_color: Color,
    pub fill_alpha: f64,
    pub draw_circles: bool,
    pub circle_radius: f64,
    cubic_intensity: f64,
}

impl LineSeries {
    #[must_use]
    pub fn new(points: Vec<DataPoint>, label: impl Into<String>) -> Self {
        Self {
            points,
            label: label.into(),
            mode: LineMode::Linear,
            visible: true,
            color: Color::rgb(0.2, 0.4, 0.9),
            line_width: 1.5,
            max_point_gap: 0.0,
            draw_filled: false,
            fill_color: Color::rgba(0.2, 0.4, 0.9, 0.35),
            fill_alpha: 0.35,
            draw_circles: false,
            circle_radius: 3.0,
            cubic_intensity: DEFAULT_CUBIC_INTENSITY,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: LineMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_max_point_gap(mut self, max_gap: f64) -> Self {
        self.max_point_gap = max_gap;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill_color: Color, fill_alpha: f64) -> Self {
        self.draw_filled = true;
        self.fill_color = fill_color;
        self.fill_alpha = fill_alpha;
        self
    }

    #[must_use]
    pub fn with_circles(mut self, radius: f64) -> Self {
        self.draw_circles = true;
        self.circle_radius = radius;
        self
    }

    /// Sets spline tension, clamped to the range the cubic generator is
    /// stable in.
    pub fn set_cubic_intensity(&mut self, intensity: f64) {
        self.cubic_intensity = intensity.clamp(CUBIC_INTENSITY_MIN, CUBIC_INTENSITY_MAX);
    }

    #[must_use]
    pub fn cubic_intensity(&self) -> f64 {
        self.cubic_intensity
    }

    /// Returns `(y_min, y_max)` over all points, or `None` for an empty series.
    #[must_use]
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        let first = self.points.first()?;
        let mut min = first.y;
        let mut max = first.y;
        for point in &self.points[1..] {
            min = min.min(point.y);
            max = max.max(point.y);
        }
        Some((min, max))
    }
}

/// External policy for where a filled area closes on the value axis.
pub trait FillPosition {
    fn fill_line_position(&self, series: &LineSeries, axis: ValueScale) -> f64;
}

/// Default fill closure policy: series spanning zero close at zero,
/// all-non-negative series close at the axis minimum, all-negative series
/// at the axis maximum.
#[derive(Debug, Default, Clone, Copy)]
pub struct FillPositionDefault;

impl FillPosition for FillPositionDefault {
    fn fill_line_position(&self, series: &LineSeries, axis: ValueScale) -> f64 {
        let Some((y_min, y_max)) = series.y_extent() else {
            return 0.0;
        };

        if y_max > 0.0 && y_min < 0.0 {
            0.0
        } else if y_min >= 0.0 {
            axis.axis_min()
        } else {
            axis.axis_max()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DataPoint;

    #[test]
    fn cubic_intensity_is_clamped_to_stable_range() {
        let mut series = LineSeries::new(Vec::new(), "s");
        series.set_cubic_intensity(5.0);
        assert_eq!(series.cubic_intensity(), 1.0);
        series.set_cubic_intensity(0.0);
        assert_eq!(series.cubic_intensity(), 0.05);
    }

    #[test]
    fn default_fill_position_prefers_zero_for_sign_spanning_data() {
        let axis = ValueScale::new(-10.0, 10.0).expect("valid axis");
        let series = LineSeries::new(
            vec![DataPoint::new(0.0, -3.0), DataPoint::new(1.0, 4.0)],
            "s",
        );
        assert_eq!(FillPositionDefault.fill_line_position(&series, axis), 0.0);
    }

    #[test]
    fn default_fill_position_uses_axis_edges_for_one_sided_data() {
        let axis = ValueScale::new(-10.0, 10.0).expect("valid axis");

        let positive = LineSeries::new(vec![DataPoint::new(0.0, 2.0)], "p");
        assert_eq!(
            FillPositionDefault.fill_line_position(&positive, axis),
            -10.0
        );

        let negative = LineSeries::new(vec![DataPoint::new(0.0, -2.0)], "n");
        assert_eq!(
            FillPositionDefault.fill_line_position(&negative, axis),
            10.0
        );
    }
}
