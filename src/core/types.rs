use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One raw sample of a line series. Immutable once created; callers keep
/// series ordered by non-decreasing `x` (the core does not re-sort).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a point from a timestamped sample, mapping time to unix
    /// seconds on the x axis.
    #[must_use]
    pub fn from_datetime(time: DateTime<Utc>, value: f64) -> Self {
        Self {
            x: time.timestamp_millis() as f64 / 1000.0,
            y: value,
        }
    }
}
