use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::render::primitives::Color;

/// One horizontal value-axis threshold with its recolor style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitLine {
    pub value: f64,
    pub color: Color,
}

impl LimitLine {
    #[must_use]
    pub fn new(value: f64, color: Color) -> Self {
        Self { value, color }
    }
}

/// Value-axis band outside which segments and markers are restyled.
///
/// Both thresholds are always present; a single limit line yields a
/// degenerate band with `top == bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LimitBand {
    pub top: f64,
    pub bottom: f64,
    pub color: Color,
}

impl LimitBand {
    /// Builds a band, treating an inverted pair as "band disabled" by
    /// convention rather than an error.
    #[must_use]
    pub fn new(top: f64, bottom: f64, color: Color) -> Option<Self> {
        if top < bottom {
            warn!(top, bottom, "inverted limit band treated as disabled");
            return None;
        }
        Some(Self { top, bottom, color })
    }

    /// Derives the band from an axis limit-line list: top is the highest
    /// configured limit, bottom the lowest, styled after the first line.
    #[must_use]
    pub fn from_lines(lines: &[LimitLine]) -> Option<Self> {
        let first = lines.first()?;
        let mut top = first.value;
        let mut bottom = first.value;
        for line in &lines[1..] {
            top = top.max(line.value);
            bottom = bottom.min(line.value);
        }
        Some(Self {
            top,
            bottom,
            color: first.color,
        })
    }

    /// Strict outside-the-band test used for segment recoloring.
    #[must_use]
    pub fn is_outside(&self, y: f64) -> bool {
        y > self.top || y < self.bottom
    }

    /// Non-strict at-or-beyond test used for marker coloring. Looser than
    /// the strict crossing/outside tests on purpose; both behaviors are
    /// observable in rendered output and must not be unified silently.
    #[must_use]
    pub fn at_or_beyond(&self, y: f64) -> bool {
        y >= self.top || y <= self.bottom
    }

    /// Strict crossing test: equality with the threshold at either endpoint
    /// does not count as a crossing.
    #[must_use]
    pub fn crosses(y1: f64, y2: f64, threshold: f64) -> bool {
        (y1 < threshold && y2 > threshold) || (y1 > threshold && y2 < threshold)
    }
}
