#![no_std]
#![no_main]

use cortex_m_rt::entry;
use loop_loader::{
    ArcSpec, Canvas, DrawPlan, LoaderConfig, LoaderFrame, LoaderPainter, LoopLoader, Point,
    RotationDirection, Srgba, Stroke, TimeDuration, TimeInstant, TimeSource, Viewport,
    draw_op_count,
};
use panic_halt as _;

// ============================================================================
// Minimal Time Types
// ============================================================================

/// Minimal 32-bit millisecond duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration32(u32);

impl Duration32 {
    const fn new(millis: u32) -> Self {
        Duration32(millis)
    }
}

impl TimeDuration for Duration32 {
    const ZERO: Self = Duration32(0);

    fn as_millis(&self) -> u64 {
        self.0 as u64
    }

    fn from_millis(millis: u64) -> Self {
        Duration32(millis as u32)
    }

    fn saturating_sub(self, other: Self) -> Self {
        Duration32(self.0.saturating_sub(other.0))
    }
}

/// Minimal 32-bit millisecond instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Instant32(u32);

impl TimeInstant for Instant32 {
    type Duration = Duration32;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        Duration32(self.0.saturating_sub(earlier.0))
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(Instant32)
    }
}

// ============================================================================
// Minimal TimeSource and Canvas
// ============================================================================

pub struct MinimalTimeSource;

impl TimeSource<Instant32> for MinimalTimeSource {
    fn now(&self) -> Instant32 {
        Instant32(0)
    }
}

/// Canvas that discards every call, for measuring library overhead
pub struct NullCanvas;

impl Canvas for NullCanvas {
    fn clip_circle(&mut self, center: Point, radius: f32) {
        core::hint::black_box((center, radius));
    }

    fn draw_arc(&mut self, arc: &ArcSpec, stroke: &Stroke) {
        core::hint::black_box((arc, stroke));
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba) {
        core::hint::black_box((center, radius, color));
    }
}

// ============================================================================
// Test Loaders
// ============================================================================

// This function uses the library to prevent optimizer from removing code
#[inline(never)]
fn test_loaders() {
    let time_source = MinimalTimeSource;
    let viewport = Viewport::new(240.0, 240.0);

    // Default six-segment loader painted straight to a canvas
    let config = LoaderConfig::<Duration32>::default();
    let painter = LoaderPainter::new(&config, viewport);
    let mut canvas = NullCanvas;
    let mut loader = LoopLoader::<Instant32, _, _>::new(
        config,
        |frame: &LoaderFrame| painter.paint(frame, &mut canvas),
        &time_source,
    );
    let _ = loader.start();
    let _ = loader.tick();
    loader.stop();
    core::hint::black_box(loader.last_frame());

    // Larger ring recorded into a fixed-capacity plan
    let config = LoaderConfig::builder()
        .segment_count(12)
        .rotation_direction(RotationDirection::Counterclockwise)
        .rotation_duration(Duration32::new(900))
        .transform_duration(Duration32::new(150))
        .build();

    if let Ok(config) = config {
        let painter = LoaderPainter::new(&config, viewport);
        let mut loader =
            LoopLoader::<Instant32, _, _>::new(config, |_: &LoaderFrame| {}, &time_source);
        let _ = loader.start();
        let _ = loader.restart();

        if let Some(frame) = loader.last_frame() {
            let plan = painter.plan::<{ draw_op_count(12) }>(frame);
            if let Ok(plan) = plan {
                plan.replay(&mut NullCanvas);
                core::hint::black_box(plan.len());
            }
        }

        let _ = loader.tick();
        core::hint::black_box(loader);
    }

    let mut plan = DrawPlan::<4>::new();
    plan.clear();
    core::hint::black_box(plan.is_truncated());
}

#[entry]
fn main() -> ! {
    // Call test function to ensure all code is included
    test_loaders();

    // Halt - this is a size analysis binary, not meant to run
    loop {
        cortex_m::asm::nop();
    }
}
