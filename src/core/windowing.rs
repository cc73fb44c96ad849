use crate::core::types::DataPoint;

/// Visible index window over an x-ordered point slice: `min` is the first
/// visible index, `range` the number of following visible indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub range: usize,
}

impl Bounds {
    #[must_use]
    pub fn new(min: usize, range: usize) -> Self {
        Self { min, range }
    }

    /// Covers a whole slice. Empty input yields an empty window at index 0.
    #[must_use]
    pub fn all(points: &[DataPoint]) -> Self {
        Self {
            min: 0,
            range: points.len().saturating_sub(1),
        }
    }

    /// Computes the inclusive index window for the x range `[start, end]`,
    /// widened by one index on each side (clamped) so partial segments
    /// entering from an off-screen neighbor still draw. Returns `None` when
    /// the whole series sits on one side of the window.
    #[must_use]
    pub fn of_window(points: &[DataPoint], start: f64, end: f64) -> Option<Self> {
        let (min_x, max_x) = if start <= end {
            (start, end)
        } else {
            (end, start)
        };

        let first = points.iter().position(|p| p.x >= min_x)?;
        let last = points.iter().rposition(|p| p.x <= max_x)?;

        let min = first.saturating_sub(1);
        let max = (last + 1).min(points.len() - 1);
        Some(Self {
            min,
            range: max - min,
        })
    }

    /// Index of the last point inside the window.
    #[must_use]
    pub fn max(self) -> usize {
        self.min + self.range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<DataPoint> {
        (0..10).map(|i| DataPoint::new(f64::from(i), 0.0)).collect()
    }

    #[test]
    fn window_includes_one_neighbor_beyond_each_edge() {
        let bounds = Bounds::of_window(&points(), 2.5, 7.5).expect("visible window");
        assert_eq!(bounds.min, 2);
        assert_eq!(bounds.max(), 8);
    }

    #[test]
    fn widening_is_clamped_at_the_slice_ends() {
        let bounds = Bounds::of_window(&points(), -5.0, 20.0).expect("visible window");
        assert_eq!(bounds.min, 0);
        assert_eq!(bounds.max(), 9);
    }

    #[test]
    fn window_between_two_points_keeps_the_spanning_segment() {
        let bounds = Bounds::of_window(&points(), 4.2, 4.8).expect("visible window");
        assert_eq!(bounds.min, 4);
        assert_eq!(bounds.max(), 5);
    }

    #[test]
    fn reversed_window_is_normalized() {
        let bounds = Bounds::of_window(&points(), 7.5, 2.5).expect("visible window");
        assert_eq!(bounds.min, 2);
        assert_eq!(bounds.max(), 8);
    }

    #[test]
    fn disjoint_window_is_empty() {
        assert!(Bounds::of_window(&points(), 20.0, 30.0).is_none());
    }
}
