//! Turns resolved frames into canvas calls.
//!
//! Each frame is painted back to front:
//!
//! 1. a circular clip that trims the outward growth of scaled segments,
//! 2. the passive family, optionally shaded with a radial gradient,
//! 3. the active family, each segment over a blurred shadow,
//! 4. the inner circle covering the ring's center.
//!
//! Scaling a family thickens its strokes around a fixed ring radius, so
//! scaled segments grow both inward and outward from the ring.

use crate::canvas::{ArcSpec, Canvas, Point, RadialGradient, Stroke};
use crate::config::LoaderConfig;
use crate::frame::LoaderFrame;
use crate::geometry::{BLUR_RADIUS, NEGATIVE_SHADOW_OFFSET, SHADOW_OFFSET, normalize_degrees};
use crate::time::TimeDuration;
use heapless::Vec;
use palette::Srgba;

/// Gradient stops used on passive segments: solid up to 60% of the
/// gradient radius, fully shadow-colored from 80%.
pub const GRADIENT_STOPS: [f32; 2] = [0.6, 0.8];

/// The square area the loader occupies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: f32,
    center: Point,
}

impl Viewport {
    /// Centers the largest square that fits in a `width` x `height` box.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: width.min(height),
            center: Point::new(width / 2.0, height / 2.0),
        }
    }

    /// Side length of the square.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
}

/// Painting errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintError {
    /// A draw plan was too small for the frame.
    CapacityExceeded { required: usize, capacity: usize },
}

impl core::fmt::Display for PaintError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PaintError::CapacityExceeded { required, capacity } => {
                write!(
                    f,
                    "frame needs {} draw operations, plan holds {}",
                    required, capacity
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PaintError {}

/// Number of canvas calls needed to paint one frame.
#[inline]
pub const fn draw_op_count(segment_count: usize) -> usize {
    // clip + inner circle, one arc per passive segment, shadow + arc per active one
    2 + (segment_count / 2) * 3
}

/// Paints frames onto a canvas.
///
/// Holds a snapshot of the configuration's visual fields. Rebuild it when
/// the configuration or the viewport changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderPainter {
    viewport: Viewport,
    stroke_width: f32,
    shadow_stroke_width: f32,
    shadow_color: Srgba,
    inner_circle_color: Srgba,
    max_scale: f32,
    gradient_enabled: bool,
}

impl LoaderPainter {
    pub fn new<D: TimeDuration>(config: &LoaderConfig<D>, viewport: Viewport) -> Self {
        Self {
            viewport,
            stroke_width: config.segment_stroke_width(),
            shadow_stroke_width: config.shadow_stroke_width(),
            shadow_color: config.shadow_color(),
            inner_circle_color: config.inner_circle_color(),
            max_scale: config.max_scale(),
            gradient_enabled: config.gradient_enabled(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Radius of the ring's center line. Leaves room for a fully scaled
    /// stroke inside the viewport.
    pub fn ring_radius(&self) -> f32 {
        (self.viewport.size / 2.0 - self.stroke_width / 2.0 * self.max_scale).max(0.0)
    }

    /// Radius of the clip circle.
    pub fn outer_clip_radius(&self) -> f32 {
        (self.viewport.size / 2.0 - (self.stroke_width * self.max_scale - self.stroke_width))
            .max(0.0)
    }

    /// Radius of the filled center disc.
    pub fn inner_circle_radius(&self) -> f32 {
        (self.viewport.size / 2.0 - self.stroke_width).max(0.0)
    }

    /// Issues every canvas call for `frame`.
    pub fn paint<C: Canvas + ?Sized>(&self, frame: &LoaderFrame, canvas: &mut C) {
        let center = self.viewport.center;
        canvas.clip_circle(center, self.outer_clip_radius());

        self.paint_passive(frame, canvas);
        self.paint_active(frame, canvas);

        canvas.fill_circle(center, self.inner_circle_radius(), self.inner_circle_color);
    }

    /// Records the canvas calls for `frame` into a new plan.
    ///
    /// # Errors
    /// * `CapacityExceeded` - `N` is smaller than [`draw_op_count`]
    pub fn plan<const N: usize>(&self, frame: &LoaderFrame) -> Result<DrawPlan<N>, PaintError> {
        let required = draw_op_count(frame.geometry.segment_count());
        if required > N {
            return Err(PaintError::CapacityExceeded {
                required,
                capacity: N,
            });
        }

        let mut plan = DrawPlan::new();
        self.paint(frame, &mut plan);
        Ok(plan)
    }

    fn paint_passive<C: Canvas + ?Sized>(&self, frame: &LoaderFrame, canvas: &mut C) {
        let family = frame.passive_family();
        let color = frame.color(family);
        let width = self.stroke_width * frame.scale(family);
        let radius = self.ring_radius();

        let stroke = if self.gradient_enabled {
            Stroke::gradient(
                width,
                RadialGradient {
                    center: self.viewport.center,
                    radius: radius * 2.0,
                    colors: [color, self.shadow_color],
                    stops: GRADIENT_STOPS,
                },
            )
        } else {
            Stroke::solid(width, color)
        };

        for start in frame.segments(family) {
            canvas.draw_arc(&self.arc(start, frame.geometry.sweep()), &stroke);
        }
    }

    fn paint_active<C: Canvas + ?Sized>(&self, frame: &LoaderFrame, canvas: &mut C) {
        let family = frame.active_family;
        let scale = frame.scale(family);
        let sweep = frame.geometry.sweep();

        let shadow = Stroke::solid(self.shadow_stroke_width * scale, self.shadow_color)
            .with_blur(BLUR_RADIUS * scale);
        let stroke = Stroke::solid(self.stroke_width * scale, frame.color(family));

        for start in frame.segments(family) {
            let shadow_arc = self.arc(start - NEGATIVE_SHADOW_OFFSET, sweep + SHADOW_OFFSET);
            canvas.draw_arc(&shadow_arc, &shadow);
            canvas.draw_arc(&self.arc(start, sweep), &stroke);
        }
    }

    fn arc(&self, start: f32, sweep: f32) -> ArcSpec {
        ArcSpec {
            center: self.viewport.center,
            radius: self.ring_radius(),
            start_angle: normalize_degrees(start),
            sweep_angle: sweep,
        }
    }
}

/// One recorded canvas call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawOp {
    ClipCircle { center: Point, radius: f32 },
    Arc { arc: ArcSpec, stroke: Stroke },
    FillCircle { center: Point, radius: f32, color: Srgba },
}

/// A canvas that records calls instead of drawing them.
///
/// Holds at most `N` operations; calls beyond that are dropped and the
/// plan is marked truncated.
#[derive(Debug, Clone, Default)]
pub struct DrawPlan<const N: usize> {
    ops: Vec<DrawOp, N>,
    truncated: bool,
}

impl<const N: usize> DrawPlan<N> {
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            truncated: false,
        }
    }

    /// Recorded operations, in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns true if any call was dropped for lack of capacity.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.truncated = false;
    }

    /// Issues the recorded operations on another canvas.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for op in &self.ops {
            match op {
                DrawOp::ClipCircle { center, radius } => canvas.clip_circle(*center, *radius),
                DrawOp::Arc { arc, stroke } => canvas.draw_arc(arc, stroke),
                DrawOp::FillCircle {
                    center,
                    radius,
                    color,
                } => canvas.fill_circle(*center, *radius, *color),
            }
        }
    }

    fn record(&mut self, op: DrawOp) {
        if self.ops.push(op).is_err() {
            self.truncated = true;
        }
    }
}

impl<const N: usize> Canvas for DrawPlan<N> {
    fn clip_circle(&mut self, center: Point, radius: f32) {
        self.record(DrawOp::ClipCircle { center, radius });
    }

    fn draw_arc(&mut self, arc: &ArcSpec, stroke: &Stroke) {
        self.record(DrawOp::Arc {
            arc: *arc,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba) {
        self.record(DrawOp::FillCircle {
            center,
            radius,
            color,
        });
    }
}
