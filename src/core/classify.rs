use crate::core::annotate::AugmentedPoint;
use crate::core::limit::LimitBand;

/// Fixed-capacity flat buffer of line-segment endpoints, laid out as
/// `[x1, y1, x2, y2]` per segment.
///
/// Capacity is sized up front for the worst case so no reallocation happens
/// mid-pass; the buffer is pass-scoped and discarded (or reset) afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentBuffer {
    floats: Vec<f64>,
    cursor: usize,
    segments: usize,
}

impl SegmentBuffer {
    /// Sizes the buffer so every consecutive pair of `entry_count` points
    /// fits as one segment.
    #[must_use]
    pub fn with_entry_capacity(entry_count: usize) -> Self {
        Self {
            floats: vec![0.0; entry_count * 4],
            cursor: 0,
            segments: 0,
        }
    }

    /// Appends one segment, scaling both y values by `phase_y`. Silently
    /// ignored when the buffer is full; capacity pre-sizing guarantees that
    /// never happens within one classification pass.
    pub fn add(&mut self, p1: AugmentedPoint, p2: AugmentedPoint, phase_y: f64) {
        if self.cursor + 4 > self.floats.len() {
            return;
        }
        self.floats[self.cursor] = p1.x;
        self.floats[self.cursor + 1] = p1.y * phase_y;
        self.floats[self.cursor + 2] = p2.x;
        self.floats[self.cursor + 3] = p2.y * phase_y;
        self.cursor += 4;
        self.segments += 1;
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments
    }

    /// Number of meaningful floats from the start of the backing array.
    #[must_use]
    pub fn float_count(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    /// The used prefix of the backing array.
    #[must_use]
    pub fn floats(&self) -> &[f64] {
        &self.floats[..self.cursor]
    }

    pub fn floats_mut(&mut self) -> &mut [f64] {
        &mut self.floats
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.segments = 0;
    }
}

/// Output of one classification pass: four segment buffers partitioned by
/// limit-band membership and gap style, plus the standalone marker queue.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet {
    pub solid: SegmentBuffer,
    pub dotted: SegmentBuffer,
    pub solid_limit: SegmentBuffer,
    pub dotted_limit: SegmentBuffer,
    pub markers: Vec<AugmentedPoint>,
}

impl SegmentSet {
    #[must_use]
    fn with_entry_capacity(entry_count: usize) -> Self {
        Self {
            solid: SegmentBuffer::with_entry_capacity(entry_count),
            dotted: SegmentBuffer::with_entry_capacity(entry_count),
            solid_limit: SegmentBuffer::with_entry_capacity(entry_count),
            dotted_limit: SegmentBuffer::with_entry_capacity(entry_count),
            markers: Vec::new(),
        }
    }

    /// Total segments across all four buffers.
    #[must_use]
    pub fn total_segments(&self) -> usize {
        self.solid.segment_count()
            + self.dotted.segment_count()
            + self.solid_limit.segment_count()
            + self.dotted_limit.segment_count()
    }
}

/// Walks the augmented sequence pairwise and routes every consecutive pair
/// into exactly one of the four buffers.
///
/// A pair lands in a limit buffer when either endpoint is strictly outside
/// the band, and in a dotted buffer when its second point starts a gap.
/// Gap-start points and an isolated first point are queued as standalone
/// markers.
#[must_use]
pub fn classify_segments(
    augmented: &[AugmentedPoint],
    band: Option<&LimitBand>,
    phase_y: f64,
) -> SegmentSet {
    let mut set = SegmentSet::with_entry_capacity(augmented.len());

    let Some(first) = augmented.first() else {
        return set;
    };
    if first.is_isolated {
        set.markers.push(*first);
    }

    for pair in augmented.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        let outside = band.is_some_and(|b| b.is_outside(p1.y) || b.is_outside(p2.y));
        let buffer = match (outside, p2.is_gap_start) {
            (false, false) => &mut set.solid,
            (false, true) => &mut set.dotted,
            (true, false) => &mut set.solid_limit,
            (true, true) => &mut set.dotted_limit,
        };
        buffer.add(p1, p2, phase_y);

        if p2.is_gap_start {
            set.markers.push(p2);
        }
    }

    set
}

/// Marker coloring rule: a marker takes the limit color when its y sits at
/// or beyond a threshold. Non-strict on purpose, unlike crossing detection.
#[must_use]
pub fn marker_uses_limit_color(point: AugmentedPoint, band: Option<&LimitBand>) -> bool {
    band.is_some_and(|b| b.at_or_beyond(point.y))
}
