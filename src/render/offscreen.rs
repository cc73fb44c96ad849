use tracing::debug;

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Surface;

/// Creates backend surfaces at a requested size.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(&mut self, viewport: Viewport) -> ChartResult<Self::Surface>;
}

impl<S: Surface, F> SurfaceFactory for F
where
    F: FnMut(Viewport) -> ChartResult<S>,
{
    type Surface = S;

    fn create(&mut self, viewport: Viewport) -> ChartResult<S> {
        self(viewport)
    }
}

/// Resize-or-reuse holder for the offscreen surface shared across frames.
///
/// The surface is reused while its dimensions match and recreated
/// otherwise; a reused surface is cleared to transparent before it is
/// handed out. `release` drops the held surface deterministically so a
/// torn-down chart does not retain a large allocation.
#[derive(Debug, Default)]
pub struct SurfaceCache<S: Surface> {
    slot: Option<(S, Viewport)>,
}

impl<S: Surface> SurfaceCache<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { slot: None }
    }

    pub fn acquire<F>(&mut self, viewport: Viewport, factory: &mut F) -> ChartResult<&mut S>
    where
        F: SurfaceFactory<Surface = S>,
    {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let reusable = matches!(self.slot, Some((_, held)) if held == viewport);
        if !reusable {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "allocating offscreen surface"
            );
            self.slot = Some((factory.create(viewport)?, viewport));
        }

        match self.slot.as_mut() {
            Some((surface, _)) => {
                surface.clear()?;
                Ok(surface)
            }
            None => Err(ChartError::Surface(
                "offscreen cache slot empty after allocation".to_owned(),
            )),
        }
    }

    #[must_use]
    pub fn surface(&self) -> Option<&S> {
        self.slot.as_ref().map(|(surface, _)| surface)
    }

    pub fn release(&mut self) {
        self.slot = None;
    }
}
