//! The animation cycle state machine.
//!
//! A cycle is a transform phase (colors cross-fade, the active family
//! grows) followed by a rotation phase (the active family glides two
//! segment widths forward under an accelerating curve). When the rotation
//! completes the families swap roles and the next cycle starts right away.
//!
//! ```text
//! Idle --start--> Running(Transform) --> Running(Rotation) --flip--> Running(Transform) ...
//!   ^                                                                        |
//!   +--------------------------------- stop ---------------------------------+
//! ```
//!
//! [`AnimationCycle`] only computes. It owns no clock and draws nothing:
//! the caller passes the current instant and gets back a resolved
//! [`LoaderFrame`].

use crate::config::LoaderConfig;
use crate::frame::LoaderFrame;
use crate::geometry::SegmentGeometry;
use crate::time::{TimeDuration, TimeInstant, fraction};
use crate::types::{CycleState, Easing, Family, Phase};
use palette::Mix;

/// Scale of a family at rest.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Curve of the rotation sweep.
pub const ROTATION_EASING: Easing = Easing::EaseIn;

/// Interpolation state of the in-flight cycle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleProgress {
    /// Active family's fade from passive to active color, `0.0..=1.0`.
    pub active_color: f32,
    /// Passive family's fade from active to passive color, `0.0..=1.0`.
    pub passive_color: f32,
    /// Scale gained by the active family, `0.0..=max_scale - 1.0`.
    pub scale: f32,
    /// Degrees swept by the active family, `0.0..=2 * segment_width`.
    pub rotation_offset: f32,
}

/// Result of advancing a running cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleStep {
    /// Frame resolved at the requested instant.
    pub frame: LoaderFrame,
    /// True if this step completed a cycle and flipped the active family.
    ///
    /// The frame still shows the family that just finished rotating.
    pub flipped: bool,
}

/// State machine driving one loader's repeating cycle.
#[derive(Debug, Clone)]
pub struct AnimationCycle<I: TimeInstant> {
    state: CycleState,
    active_family: Family,
    phase_start: Option<I>,
    progress: CycleProgress,
}

impl<I: TimeInstant> AnimationCycle<I> {
    /// Creates an idle cycle with the even family active.
    pub fn new() -> Self {
        Self {
            state: CycleState::Idle,
            active_family: Family::Even,
            phase_start: None,
            progress: CycleProgress::default(),
        }
    }

    /// Starts a new cycle at `now`.
    ///
    /// The active family carries over from the previous run. Returns false
    /// without touching anything if already running.
    pub fn start(&mut self, now: I) -> bool {
        if self.is_running() {
            return false;
        }

        self.progress = CycleProgress::default();
        self.phase_start = Some(now);
        self.state = CycleState::Running(Phase::Transform);

        #[cfg(feature = "defmt")]
        defmt::debug!("loop loader started, {} family active", self.active_family);

        true
    }

    /// Halts the in-flight phase and resets progress.
    ///
    /// The active family does not flip. Returns false if already idle.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }

        self.progress = CycleProgress::default();
        self.phase_start = None;
        self.state = CycleState::Idle;

        #[cfg(feature = "defmt")]
        defmt::debug!("loop loader stopped");

        true
    }

    /// Advances the cycle to `now` and resolves the frame to draw.
    ///
    /// Returns `None` while idle. A tick that lands past the end of the
    /// transform phase continues into the rotation phase, which starts at
    /// the exact end of the transform. If the overshoot would also cover
    /// the whole next phase (the host stopped ticking for a while), that
    /// phase starts at `now` instead, so missed cycles are never replayed.
    /// At most one family flip happens per call, and it is applied after
    /// the frame is resolved.
    ///
    /// `now` must not be earlier than the instant passed to the previous
    /// call or to [`start`](Self::start).
    pub fn advance(
        &mut self,
        now: I,
        config: &LoaderConfig<I::Duration>,
        geometry: &SegmentGeometry,
    ) -> Option<CycleStep> {
        let mut phase = self.state.phase()?;
        let mut start = self.phase_start?;
        let mut elapsed = now.duration_since(start);

        if phase == Phase::Transform {
            let duration = config.transform_duration();
            let t = fraction(elapsed, duration);
            self.set_transform_progress(config.transform_easing().apply(t), config.max_scale());

            if t < 1.0 {
                return Some(CycleStep {
                    frame: self.resolve(phase, config, geometry),
                    flipped: false,
                });
            }

            (start, elapsed) =
                next_phase(start, now, elapsed, duration, config.rotation_duration());
            phase = Phase::Rotation;
            self.phase_start = Some(start);
            self.state = CycleState::Running(phase);
        }

        let duration = config.rotation_duration();
        let t = fraction(elapsed, duration);
        self.progress.rotation_offset = geometry.rotation_span() * ROTATION_EASING.apply(t);

        let frame = self.resolve(phase, config, geometry);
        if t < 1.0 {
            return Some(CycleStep {
                frame,
                flipped: false,
            });
        }

        let (next_start, _) =
            next_phase(start, now, elapsed, duration, config.transform_duration());
        self.phase_start = Some(next_start);
        self.progress = CycleProgress::default();
        self.active_family = self.active_family.other();
        self.state = CycleState::Running(Phase::Transform);

        #[cfg(feature = "defmt")]
        defmt::trace!("cycle complete, {} family active", self.active_family);

        Some(CycleStep {
            frame,
            flipped: true,
        })
    }

    fn set_transform_progress(&mut self, eased: f32, max_scale: f32) {
        self.progress.active_color = eased;
        self.progress.passive_color = eased;
        self.progress.scale = (max_scale - DEFAULT_SCALE) * eased;
        self.progress.rotation_offset = 0.0;
    }

    fn resolve(
        &self,
        phase: Phase,
        config: &LoaderConfig<I::Duration>,
        geometry: &SegmentGeometry,
    ) -> LoaderFrame {
        let active = self.active_family;
        let passive = active.other();

        let active_color = config
            .passive_color()
            .mix(config.active_color(), self.progress.active_color);
        let passive_color = config
            .active_color()
            .mix(config.passive_color(), self.progress.passive_color);

        let active_offset = geometry.active_offset(
            active,
            self.progress.rotation_offset,
            config.rotation_direction(),
        );
        let passive_offset = geometry.base_offset(passive);

        let (even_color, odd_color, even_offset, odd_offset) = match active {
            Family::Even => (active_color, passive_color, active_offset, passive_offset),
            Family::Odd => (passive_color, active_color, passive_offset, active_offset),
        };

        LoaderFrame {
            active_family: active,
            phase,
            geometry: *geometry,
            even_color,
            odd_color,
            even_offset,
            odd_offset,
            active_scale: DEFAULT_SCALE + self.progress.scale,
            passive_scale: config.max_scale() - self.progress.scale,
        }
    }

    /// Current state.
    pub fn state(&self) -> CycleState {
        self.state
    }

    /// Returns true while the cycle is running.
    pub fn is_running(&self) -> bool {
        self.state != CycleState::Idle
    }

    /// Family currently highlighted.
    pub fn active_family(&self) -> Family {
        self.active_family
    }

    /// Interpolation state as of the last advance.
    pub fn progress(&self) -> CycleProgress {
        self.progress
    }

    /// Instant the current phase began, if running.
    pub fn phase_start(&self) -> Option<I> {
        self.phase_start
    }
}

impl<I: TimeInstant> Default for AnimationCycle<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// Start of the phase following one that began at `start` and lasted
/// `duration`, with the time already spent in it.
///
/// The overshoot carries over only while it fits within `next_duration`.
/// A longer gap, or an overflowing instant type, restarts the next phase
/// at `now`.
fn next_phase<I: TimeInstant>(
    start: I,
    now: I,
    elapsed: I::Duration,
    duration: I::Duration,
    next_duration: I::Duration,
) -> (I, I::Duration) {
    let overshoot = elapsed.saturating_sub(duration);
    if overshoot.as_millis() > next_duration.as_millis() {
        return (now, I::Duration::ZERO);
    }

    match start.checked_add(duration) {
        Some(next) => (next, overshoot),
        None => (now, I::Duration::ZERO),
    }
}
