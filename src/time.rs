//! Time abstraction traits for platform-agnostic frame timing.
//!
//! The loader never reads a clock itself. The host supplies one through
//! [`TimeSource`], typically backed by its display refresh or a timer.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;

    /// Saturating subtraction (returns ZERO on underflow).
    fn saturating_sub(self, other: Self) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;

    /// Adds duration to instant, returns None on overflow.
    fn checked_add(self, duration: Self::Duration) -> Option<Self>;
}

/// Fraction of `duration` covered by `elapsed`, clamped to `0.0..=1.0`.
///
/// A zero duration counts as already complete.
#[inline]
pub(crate) fn fraction<D: TimeDuration>(elapsed: D, duration: D) -> f32 {
    let total = duration.as_millis();
    if total == 0 {
        return 1.0;
    }

    let progress = (elapsed.as_millis() as f32) / (total as f32);
    progress.clamp(0.0, 1.0)
}
