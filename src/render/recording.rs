use crate::error::{ChartError, ChartResult};
use crate::render::Surface;
use crate::render::path::Path;
use crate::render::primitives::{Color, Stroke};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    StrokePath { path: Path, stroke: Stroke },
    FillPath { path: Path, color: Color },
    Circle { x: f64, y: f64, radius: f64, color: Color },
    Line { x1: f64, y1: f64, x2: f64, y2: f64, stroke: Stroke },
}

/// Command-recording backend used by tests and headless rendering.
///
/// Every call is validated before it is recorded so tests catch
/// non-finite geometry and invalid styles without a real backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokePath { .. }))
            .count()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillPath { .. }))
            .count()
    }

    #[must_use]
    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

fn require_finite(values: &[f64]) -> ChartResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(ChartError::InvalidData(
            "draw coordinates must be finite".to_owned(),
        ));
    }
    Ok(())
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> ChartResult<()> {
        self.commands.push(DrawCommand::Clear);
        Ok(())
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke) -> ChartResult<()> {
        if !path.is_finite() {
            return Err(ChartError::InvalidData(
                "stroked path coordinates must be finite".to_owned(),
            ));
        }
        stroke.validate()?;
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: *stroke,
        });
        Ok(())
    }

    fn fill_path(&mut self, path: &Path, color: Color) -> ChartResult<()> {
        if !path.is_finite() {
            return Err(ChartError::InvalidData(
                "filled path coordinates must be finite".to_owned(),
            ));
        }
        color.validate()?;
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
        Ok(())
    }

    fn draw_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) -> ChartResult<()> {
        require_finite(&[x, y, radius])?;
        color.validate()?;
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: &Stroke,
    ) -> ChartResult<()> {
        require_finite(&[x1, y1, x2, y2])?;
        stroke.validate()?;
        self.commands.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            stroke: *stroke,
        });
        Ok(())
    }
}
