use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Linear mapping from an x-axis data domain onto viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    pub fn domain_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(normalized * f64::from(viewport.width))
    }

    pub fn pixel_to_domain(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = pixel / f64::from(viewport.width);
        Ok(self.domain_start + normalized * span)
    }
}

/// Value-axis mapping onto an inverted Y pixel axis: the domain maximum
/// lands at pixel 0, the minimum at the viewport bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    domain_min: f64,
    domain_max: f64,
}

impl ValueScale {
    pub fn new(domain_min: f64, domain_max: f64) -> ChartResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(ChartError::InvalidData(
                "value scale domain must be finite with min < max".to_owned(),
            ));
        }

        Ok(Self {
            domain_min,
            domain_max,
        })
    }

    /// Autoscales to the y extent of the given points, padding flat data so
    /// the domain never collapses.
    pub fn from_data(points: &[crate::core::DataPoint]) -> ChartResult<Self> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            min = min.min(point.y);
            max = max.max(point.y);
        }
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "cannot autoscale from empty or non-finite data".to_owned(),
            ));
        }
        if min == max {
            min -= 0.5;
            max += 0.5;
        }
        Self::new(min, max)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn axis_min(self) -> f64 {
        self.domain_min
    }

    #[must_use]
    pub fn axis_max(self) -> f64 {
        self.domain_max
    }

    pub fn value_to_pixel(self, value: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = (value - self.domain_min) / span;
        Ok((1.0 - normalized) * f64::from(viewport.height))
    }

    pub fn pixel_to_value(self, pixel: f64, viewport: Viewport) -> ChartResult<f64> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let span = self.domain_max - self.domain_min;
        let normalized = 1.0 - pixel / f64::from(viewport.height);
        Ok(self.domain_min + normalized * span)
    }
}
