//! Loop loader with lifecycle management and frame timing.
//!
//! Provides [`LoopLoader`], which owns one loader's configuration and
//! animation cycle, reads the host clock, and hands every resolved frame to
//! a [`FrameRenderer`]. Drawing itself stays with the host.

use crate::command::LoaderAction;
use crate::config::LoaderConfig;
use crate::cycle::AnimationCycle;
use crate::frame::LoaderFrame;
use crate::geometry::SegmentGeometry;
use crate::time::{TimeInstant, TimeSource};
use crate::types::{CycleState, Family};

/// Receives the resolved frame once per tick.
///
/// Implemented for any `FnMut(&LoaderFrame)`, so a closure can be passed
/// wherever a renderer is expected. Implementations typically forward the
/// frame to a [`LoaderPainter`](crate::paint::LoaderPainter) together with
/// the host's canvas, or store it until the next redraw.
pub trait FrameRenderer {
    /// Draws or records `frame`. This method cannot fail; handle surface
    /// errors internally.
    fn render(&mut self, frame: &LoaderFrame);
}

impl<F> FrameRenderer for F
where
    F: FnMut(&LoaderFrame),
{
    #[inline]
    fn render(&mut self, frame: &LoaderFrame) {
        self(frame)
    }
}

/// Tells the host whether to keep scheduling ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceTiming {
    /// Animation in progress. Tick again at your frame rate, typically
    /// every 16-33ms (30-60 FPS).
    Continuous,

    /// Loader is stopped. No ticks are needed until it is started again.
    Idle,
}

/// Drives a single loop loader.
///
/// Configuration changes made while the loader runs are staged and take
/// effect at the next cycle boundary, or at the next start if the loader is
/// stopped first. A cycle in flight always sees one configuration.
///
/// # Type Parameters
/// * `'t` - Lifetime of the time source reference
/// * `I` - Time instant type
/// * `R` - Frame renderer type
/// * `T` - Time source implementation type
pub struct LoopLoader<'t, I: TimeInstant, R: FrameRenderer, T: TimeSource<I>> {
    renderer: R,
    time_source: &'t T,
    config: LoaderConfig<I::Duration>,
    staged: Option<LoaderConfig<I::Duration>>,
    geometry: SegmentGeometry,
    cycle: AnimationCycle<I>,
    last_frame: Option<LoaderFrame>,
}

impl<'t, I: TimeInstant, R: FrameRenderer, T: TimeSource<I>> LoopLoader<'t, I, R, T> {
    /// Creates an idle loader. Nothing is rendered until [`start`](Self::start).
    pub fn new(config: LoaderConfig<I::Duration>, renderer: R, time_source: &'t T) -> Self {
        Self {
            renderer,
            time_source,
            geometry: config.geometry(),
            config,
            staged: None,
            cycle: AnimationCycle::new(),
            last_frame: None,
        }
    }

    /// Replaces the frame renderer, keeping all animation state.
    pub fn on_frame<R2: FrameRenderer>(self, renderer: R2) -> LoopLoader<'t, I, R2, T> {
        LoopLoader {
            renderer,
            time_source: self.time_source,
            config: self.config,
            staged: self.staged,
            geometry: self.geometry,
            cycle: self.cycle,
            last_frame: self.last_frame,
        }
    }

    /// Handles a loader action by dispatching to the appropriate method.
    ///
    /// Returns the timing the loader is left in.
    pub fn handle_action(&mut self, action: LoaderAction<I::Duration>) -> ServiceTiming {
        match action {
            LoaderAction::Start => self.start(),
            LoaderAction::Stop => {
                self.stop();
                ServiceTiming::Idle
            }
            LoaderAction::Restart => self.restart(),
            LoaderAction::Configure(config) => {
                self.configure(config);
                self.timing()
            }
        }
    }

    /// Replaces the configuration.
    ///
    /// Applied immediately when stopped, staged until the next cycle
    /// boundary when running.
    pub fn configure(&mut self, config: LoaderConfig<I::Duration>) {
        if self.cycle.is_running() {
            self.staged = Some(config);
        } else {
            self.apply_config(config);
        }
    }

    /// Edits the most recent configuration (staged, if any) in place and
    /// re-applies it with [`configure`](Self::configure).
    ///
    /// The `set_*` methods of [`LoaderConfig`] silently ignore invalid
    /// values, so an odd segment count leaves the count unchanged.
    pub fn update_config<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut LoaderConfig<I::Duration>),
    {
        let mut config = self.staged.unwrap_or(self.config);
        edit(&mut config);
        self.configure(config);
    }

    fn apply_config(&mut self, config: LoaderConfig<I::Duration>) {
        self.geometry = config.geometry();
        self.config = config;
        self.staged = None;

        #[cfg(feature = "defmt")]
        defmt::debug!("loop loader configured with {} segments", self.geometry.segment_count());
    }

    /// Starts animating and renders the first frame.
    ///
    /// Does nothing if already running: there is never more than one
    /// cycle in flight.
    pub fn start(&mut self) -> ServiceTiming {
        if self.cycle.is_running() {
            return ServiceTiming::Continuous;
        }

        if let Some(config) = self.staged.take() {
            self.apply_config(config);
        }

        let now = self.time_source.now();
        self.cycle.start(now);
        self.tick_at(now)
    }

    /// Stops animating immediately.
    ///
    /// The in-flight phase is abandoned without flipping families, and the
    /// next tick renders nothing. Does nothing if already stopped.
    pub fn stop(&mut self) {
        if !self.cycle.stop() {
            return;
        }

        if let Some(config) = self.staged.take() {
            self.apply_config(config);
        }
    }

    /// Stops, then starts again from the beginning of a cycle.
    pub fn restart(&mut self) -> ServiceTiming {
        self.stop();
        self.start()
    }

    /// Ticks at the time source's current instant.
    pub fn tick(&mut self) -> ServiceTiming {
        let now = self.time_source.now();
        self.tick_at(now)
    }

    /// Advances the animation to `now` and renders the resulting frame.
    ///
    /// Instants must not go backwards between ticks.
    ///
    /// # Returns
    /// - `ServiceTiming::Continuous` - A frame was rendered, keep ticking
    /// - `ServiceTiming::Idle` - The loader is stopped, nothing was rendered
    pub fn tick_at(&mut self, now: I) -> ServiceTiming {
        let Some(step) = self.cycle.advance(now, &self.config, &self.geometry) else {
            return ServiceTiming::Idle;
        };

        self.renderer.render(&step.frame);
        self.last_frame = Some(step.frame);

        if step.flipped {
            if let Some(config) = self.staged.take() {
                self.apply_config(config);
            }
        }

        ServiceTiming::Continuous
    }

    fn timing(&self) -> ServiceTiming {
        if self.cycle.is_running() {
            ServiceTiming::Continuous
        } else {
            ServiceTiming::Idle
        }
    }

    /// Returns the current state of the animation cycle.
    pub fn state(&self) -> CycleState {
        self.cycle.state()
    }

    /// Returns true if the loader is currently animating.
    pub fn is_running(&self) -> bool {
        self.cycle.is_running()
    }

    /// Family currently highlighted.
    pub fn active_family(&self) -> Family {
        self.cycle.active_family()
    }

    /// Configuration in effect for the current cycle.
    pub fn config(&self) -> &LoaderConfig<I::Duration> {
        &self.config
    }

    /// Configuration waiting for the next cycle boundary, if any.
    pub fn staged_config(&self) -> Option<&LoaderConfig<I::Duration>> {
        self.staged.as_ref()
    }

    /// Segment layout in effect for the current cycle.
    pub fn geometry(&self) -> &SegmentGeometry {
        &self.geometry
    }

    /// Returns the most recently rendered frame, if any.
    pub fn last_frame(&self) -> Option<&LoaderFrame> {
        self.last_frame.as_ref()
    }

    /// Returns the time spent in the current phase, if running.
    pub fn elapsed_in_phase(&self) -> Option<I::Duration> {
        self.cycle.phase_start().map(|start| {
            let now = self.time_source.now();
            now.duration_since(start)
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Consumes the loader, returning its renderer.
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
