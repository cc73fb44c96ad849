use serde::{Deserialize, Serialize};

/// One path command. Coordinates start in data space and are mapped to
/// pixel space in place by `Transformer::path_to_pixel`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathVerb {
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    CubicTo {
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    },
    Close,
}

/// Backend-agnostic vector path built from move/line/cubic/close verbs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.verbs.push(PathVerb::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.verbs.push(PathVerb::LineTo { x, y });
    }

    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.verbs.push(PathVerb::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.verbs.push(PathVerb::Close);
    }

    pub fn reset(&mut self) {
        self.verbs.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    #[must_use]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    pub(crate) fn verbs_mut(&mut self) -> &mut [PathVerb] {
        &mut self.verbs
    }

    /// All coordinates are finite, including control points.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.verbs.iter().all(|verb| match *verb {
            PathVerb::MoveTo { x, y } | PathVerb::LineTo { x, y } => x.is_finite() && y.is_finite(),
            PathVerb::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => {
                c1x.is_finite()
                    && c1y.is_finite()
                    && c2x.is_finite()
                    && c2y.is_finite()
                    && x.is_finite()
                    && y.is_finite()
            }
            PathVerb::Close => true,
        })
    }
}
