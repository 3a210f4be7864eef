//! Angular layout of the ring segments.
//!
//! Angles are in degrees. 0° points at 3 o'clock and angles grow clockwise,
//! so the top of the ring sits at 270°.

use crate::types::{Family, RotationDirection};

/// Angle of the top of the ring, where the first even segment starts.
pub const CIRCLE_TOP: f32 = 270.0;

/// Degrees in a full turn.
pub const TOTAL_DEGREES: f32 = 360.0;

/// Cosmetic gap left between neighbouring segments.
pub const GAP_BETWEEN_SEGMENTS: f32 = 2.5;

/// Extra sweep given to an active segment's shadow.
pub const SHADOW_OFFSET: f32 = 6.0;

/// How far a shadow starts before its segment.
pub const NEGATIVE_SHADOW_OFFSET: f32 = 2.0;

/// Blur radius of active segment shadows, at scale 1.0.
pub const BLUR_RADIUS: f32 = 4.0;

/// Segment layout derived from the segment count.
///
/// Only even counts of at least two are representable: the ring has to
/// split evenly into two interleaved families.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentGeometry {
    segment_count: usize,
    segment_width: f32,
}

impl SegmentGeometry {
    /// Creates the layout for `segment_count` segments.
    ///
    /// Returns `None` if the count is odd or below two.
    pub fn new(segment_count: usize) -> Option<Self> {
        if !is_valid_segment_count(segment_count) {
            return None;
        }

        Some(Self {
            segment_count,
            segment_width: TOTAL_DEGREES / segment_count as f32,
        })
    }

    /// Changes the segment count.
    ///
    /// Odd counts and counts below two are ignored and the previous layout
    /// is kept. No error is reported.
    pub fn set_segment_count(&mut self, segment_count: usize) {
        if let Some(geometry) = Self::new(segment_count) {
            *self = geometry;
        }
    }

    /// Total number of segments, both families together.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of segments in one family.
    #[inline]
    pub fn segments_per_family(&self) -> usize {
        self.segment_count / 2
    }

    /// Angular slot occupied by one segment, `360 / segment_count`.
    #[inline]
    pub fn segment_width(&self) -> f32 {
        self.segment_width
    }

    /// Rendered arc sweep of one segment, leaving the cosmetic gap.
    #[inline]
    pub fn sweep(&self) -> f32 {
        self.segment_width - GAP_BETWEEN_SEGMENTS
    }

    /// Distance the active family travels during one rotation phase.
    #[inline]
    pub fn rotation_span(&self) -> f32 {
        self.segment_width * 2.0
    }

    /// Resting start angle of a family's first segment.
    #[inline]
    pub fn base_offset(&self, family: Family) -> f32 {
        CIRCLE_TOP + family.first_index() as f32 * self.segment_width
    }

    /// Start angle of a family's first segment after rotating by
    /// `rotation_offset` degrees in `direction`.
    ///
    /// The result is not normalized.
    #[inline]
    pub fn active_offset(
        &self,
        family: Family,
        rotation_offset: f32,
        direction: RotationDirection,
    ) -> f32 {
        match direction {
            RotationDirection::Clockwise => self.base_offset(family) + rotation_offset,
            RotationDirection::Counterclockwise => self.base_offset(family) - rotation_offset,
        }
    }

    /// Resting start angles of every segment in `family`.
    pub fn segment_start_offsets(&self, family: Family) -> SegmentOffsets {
        self.offsets_from(self.base_offset(family))
    }

    /// Start angles of one family's segments when its first segment starts
    /// at `start`.
    pub fn offsets_from(&self, start: f32) -> SegmentOffsets {
        SegmentOffsets {
            next: start,
            step: self.rotation_span(),
            remaining: self.segments_per_family(),
        }
    }
}

impl Default for SegmentGeometry {
    fn default() -> Self {
        Self {
            segment_count: 6,
            segment_width: TOTAL_DEGREES / 6.0,
        }
    }
}

/// Returns true if `segment_count` is even and at least two.
#[inline]
pub fn is_valid_segment_count(segment_count: usize) -> bool {
    segment_count >= 2 && segment_count % 2 == 0
}

/// Wraps an angle into `0.0..360.0`.
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle % TOTAL_DEGREES;
    if wrapped < 0.0 {
        wrapped + TOTAL_DEGREES
    } else {
        wrapped
    }
}

/// Iterator over the start angles of one family's segments.
///
/// Cloning restarts from the clone point.
#[derive(Debug, Clone)]
pub struct SegmentOffsets {
    next: f32,
    step: f32,
    remaining: usize,
}

impl Iterator for SegmentOffsets {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.remaining == 0 {
            return None;
        }

        let offset = self.next;
        self.next += self.step;
        self.remaining -= 1;
        Some(offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for SegmentOffsets {}

impl core::iter::FusedIterator for SegmentOffsets {}
