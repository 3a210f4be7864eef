//! Shared test infrastructure for loop-loader integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use loop_loader::{
    ArcSpec, Canvas, LoaderConfig, LoaderFrame, Point, Srgba, Stroke, TimeDuration, TimeInstant,
    TimeSource,
};

// ============================================================================
// Mock Time Types
// ============================================================================

/// Mock duration type for testing (wraps milliseconds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestDuration(pub u64);

impl TimeDuration for TestDuration {
    const ZERO: Self = TestDuration(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        TestDuration(millis)
    }

    fn saturating_sub(self, other: Self) -> Self {
        TestDuration(self.0.saturating_sub(other.0))
    }
}

/// Mock instant type for testing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TestInstant(pub u64);

impl TimeInstant for TestInstant {
    type Duration = TestDuration;

    fn duration_since(&self, earlier: Self) -> Self::Duration {
        TestDuration(self.0 - earlier.0)
    }

    fn checked_add(self, duration: Self::Duration) -> Option<Self> {
        self.0.checked_add(duration.0).map(TestInstant)
    }
}

// ============================================================================
// Mock Time Source
// ============================================================================

/// Mock time source with controllable time advancement
pub struct MockTimeSource {
    current_time: core::cell::Cell<TestInstant>,
}

impl MockTimeSource {
    pub fn new() -> Self {
        Self {
            current_time: core::cell::Cell::new(TestInstant(0)),
        }
    }

    /// Advance time by the given number of milliseconds
    pub fn advance(&self, millis: u64) {
        let current = self.current_time.get();
        self.current_time.set(TestInstant(current.0 + millis));
    }

    pub fn set_time(&self, millis: u64) {
        self.current_time.set(TestInstant(millis));
    }
}

impl TimeSource<TestInstant> for MockTimeSource {
    fn now(&self) -> TestInstant {
        self.current_time.get()
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

/// Renderer that records the first 64 frames it receives
///
/// The latest frame and the total count are tracked separately, so long
/// runs never read a stale frame from the full history.
pub struct RecordingRenderer {
    frames: heapless::Vec<LoaderFrame, 64>,
    last: Option<LoaderFrame>,
    count: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self {
            frames: heapless::Vec::new(),
            last: None,
            count: 0,
        }
    }

    pub fn frames(&self) -> &[LoaderFrame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&LoaderFrame> {
        self.last.as_ref()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl loop_loader::FrameRenderer for RecordingRenderer {
    fn render(&mut self, frame: &LoaderFrame) {
        // History is capped; `last` and `count` are not
        let _ = self.frames.push(*frame);
        self.last = Some(*frame);
        self.count += 1;
    }
}

// ============================================================================
// Mock Canvas
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasCall {
    Clip { center: Point, radius: f32 },
    Arc { arc: ArcSpec, stroke: Stroke },
    Circle { center: Point, radius: f32, color: Srgba },
}

/// Canvas that records calls in order
pub struct MockCanvas {
    calls: heapless::Vec<CanvasCall, 64>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self {
            calls: heapless::Vec::new(),
        }
    }

    pub fn calls(&self) -> &[CanvasCall] {
        &self.calls
    }

    pub fn arcs(&self) -> impl Iterator<Item = (&ArcSpec, &Stroke)> {
        self.calls.iter().filter_map(|call| match call {
            CanvasCall::Arc { arc, stroke } => Some((arc, stroke)),
            _ => None,
        })
    }
}

impl Canvas for MockCanvas {
    fn clip_circle(&mut self, center: Point, radius: f32) {
        let _ = self.calls.push(CanvasCall::Clip { center, radius });
    }

    fn draw_arc(&mut self, arc: &ArcSpec, stroke: &Stroke) {
        let _ = self.calls.push(CanvasCall::Arc {
            arc: *arc,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba) {
        let _ = self.calls.push(CanvasCall::Circle {
            center,
            radius,
            color,
        });
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Configuration used by the reference scenario: 6 segments, peak scale
/// 1.05, 200ms transform, 700ms rotation, clockwise.
pub fn scenario_config() -> LoaderConfig<TestDuration> {
    LoaderConfig::builder()
        .segment_count(6)
        .max_scale(1.05)
        .transform_duration(TestDuration(200))
        .rotation_duration(TestDuration(700))
        .build()
        .unwrap()
}

/// Compare two floats with tolerance
pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.001
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgba, b: Srgba) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
        && (a.alpha - b.alpha).abs() < EPSILON
}
