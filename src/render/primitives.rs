use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Dash policy for stroked lines and paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum DashPattern {
    #[default]
    Solid,
    Dashed {
        on_px: f64,
        off_px: f64,
    },
}

/// Stroke style for line and path drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f64,
    pub color: Color,
    pub dash: DashPattern,
}

impl Stroke {
    #[must_use]
    pub const fn solid(width: f64, color: Color) -> Self {
        Self {
            width,
            color,
            dash: DashPattern::Solid,
        }
    }

    #[must_use]
    pub const fn dashed(width: f64, color: Color, on_px: f64, off_px: f64) -> Self {
        Self {
            width,
            color,
            dash: DashPattern::Dashed { on_px, off_px },
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and > 0".to_owned(),
            ));
        }
        if let DashPattern::Dashed { on_px, off_px } = self.dash {
            if !on_px.is_finite() || !off_px.is_finite() || on_px <= 0.0 || off_px <= 0.0 {
                return Err(ChartError::InvalidData(
                    "dash segment lengths must be finite and > 0".to_owned(),
                ));
            }
        }
        self.color.validate()
    }
}
