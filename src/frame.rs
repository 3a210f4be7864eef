//! Fully resolved draw parameters for one tick.

use crate::geometry::{SegmentGeometry, SegmentOffsets};
use crate::types::{Family, Phase};
use palette::Srgba;

/// Everything needed to draw the loader at one instant.
///
/// Offsets are the start angle of each family's first segment in degrees,
/// not normalized: a clockwise sweep from the top ends at `270 + 2w`, past
/// 360. Use [`normalize_degrees`](crate::geometry::normalize_degrees) if
/// the drawing surface needs a wrapped angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderFrame {
    /// Family currently highlighted and rotating.
    pub active_family: Family,
    /// Phase the frame was resolved in.
    pub phase: Phase,
    /// Segment layout used for this frame.
    pub geometry: SegmentGeometry,
    pub even_color: Srgba,
    pub odd_color: Srgba,
    pub even_offset: f32,
    pub odd_offset: f32,
    /// Scale of the active family, `1.0..=max_scale`.
    pub active_scale: f32,
    /// Scale of the passive family, falls as the active scale rises.
    pub passive_scale: f32,
}

impl LoaderFrame {
    /// Family currently dimmed and stationary.
    #[inline]
    pub fn passive_family(&self) -> Family {
        self.active_family.other()
    }

    #[inline]
    pub fn color(&self, family: Family) -> Srgba {
        match family {
            Family::Even => self.even_color,
            Family::Odd => self.odd_color,
        }
    }

    #[inline]
    pub fn offset(&self, family: Family) -> f32 {
        match family {
            Family::Even => self.even_offset,
            Family::Odd => self.odd_offset,
        }
    }

    #[inline]
    pub fn scale(&self, family: Family) -> f32 {
        if family == self.active_family {
            self.active_scale
        } else {
            self.passive_scale
        }
    }

    /// Start angles of every segment of `family` in this frame.
    #[inline]
    pub fn segments(&self, family: Family) -> SegmentOffsets {
        self.geometry.offsets_from(self.offset(family))
    }
}
