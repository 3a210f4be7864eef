//! Core types shared by the geometry, the animation cycle and the painter.

/// One of the two interleaved sets of alternating segments around the ring.
///
/// EVEN owns segment indices 0, 2, 4, … and ODD owns 1, 3, 5, ….
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Family {
    /// Segments at even indices, starting at the top of the ring.
    Even,
    /// Segments at odd indices, one segment width after the even ones.
    Odd,
}

impl Family {
    /// Returns the other family.
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Family::Even => Family::Odd,
            Family::Odd => Family::Even,
        }
    }

    /// Index of the first segment belonging to this family.
    #[inline]
    pub fn first_index(self) -> usize {
        match self {
            Family::Even => 0,
            Family::Odd => 1,
        }
    }
}

/// Direction in which the active family sweeps during the rotation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RotationDirection {
    #[default]
    Clockwise,
    Counterclockwise,
}

/// Half of an animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Colors cross-fade and the active family grows to its peak scale.
    Transform,
    /// The active family glides two segment widths forward.
    Rotation,
}

/// The state of an animation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleState {
    /// Not animating. Ticks render nothing.
    #[default]
    Idle,
    /// Animating, currently in the given phase.
    Running(Phase),
}

impl CycleState {
    /// Returns the current phase, if running.
    #[inline]
    pub fn phase(self) -> Option<Phase> {
        match self {
            CycleState::Idle => None,
            CycleState::Running(phase) => Some(phase),
        }
    }
}

/// Shape of an interpolation curve over normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,

    /// Quadratic ease-in: slow start, accelerating toward end.
    EaseIn,

    /// Quadratic ease-out: fast start, decelerating toward end.
    EaseOut,

    /// Quadratic ease-in-out: slow start and end, fast middle.
    EaseInOut,
}

impl Easing {
    /// Maps linear progress `t` (clamped to `0.0..=1.0`) onto the curve.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Segment count is not even.
    OddSegmentCount(usize),

    /// Fewer than two segments.
    TooFewSegments(usize),

    /// A phase duration is zero.
    ZeroDuration,

    /// A stroke width is zero, negative or NaN.
    NonPositiveStrokeWidth,

    /// Peak scale is below 1.0, infinite or NaN.
    ScaleBelowOne,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::OddSegmentCount(count) => {
                write!(f, "segment count must be even, got {}", count)
            }
            ConfigError::TooFewSegments(count) => {
                write!(f, "at least two segments are required, got {}", count)
            }
            ConfigError::ZeroDuration => {
                write!(f, "transform and rotation durations must be non-zero")
            }
            ConfigError::NonPositiveStrokeWidth => {
                write!(f, "stroke widths must be positive")
            }
            ConfigError::ScaleBelowOne => {
                write!(f, "max scale must be at least 1.0")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
