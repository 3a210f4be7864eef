//! Drawing surface abstraction.
//!
//! The loader never rasterizes anything. The host implements [`Canvas`] on
//! top of its graphics stack (a GPU canvas, a framebuffer, a terminal cell
//! grid, ...) and the painter calls into it. All angles are in degrees,
//! 0° at 3 o'clock, growing clockwise.

use palette::Srgba;

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Square of half-size `radius` around `center`.
    #[inline]
    pub fn around(center: Point, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new((self.left + self.right) / 2.0, (self.top + self.bottom) / 2.0)
    }
}

/// A circular arc, stroked along its center line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub radius: f32,
    /// Start angle in `0.0..360.0`.
    pub start_angle: f32,
    /// Clockwise sweep.
    pub sweep_angle: f32,
}

impl ArcSpec {
    /// Bounding box of the full circle the arc lies on, as expected by
    /// oval-based arc APIs.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }
}

/// Two-stop radial gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f32,
    pub colors: [Srgba; 2],
    /// Positions of `colors` along the radius, `0.0..=1.0`. Colors clamp
    /// outside the stops.
    pub stops: [f32; 2],
}

/// How a stroke is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Srgba),
    RadialGradient(RadialGradient),
}

/// Stroke style for arcs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub paint: Paint,
    /// Gaussian blur radius, if the stroke is blurred.
    pub blur: Option<f32>,
}

impl Stroke {
    /// Unblurred stroke of one color.
    #[inline]
    pub fn solid(width: f32, color: Srgba) -> Self {
        Self {
            width,
            paint: Paint::Solid(color),
            blur: None,
        }
    }

    /// Unblurred stroke colored by a radial gradient.
    #[inline]
    pub fn gradient(width: f32, gradient: RadialGradient) -> Self {
        Self {
            width,
            paint: Paint::RadialGradient(gradient),
            blur: None,
        }
    }

    #[inline]
    pub fn with_blur(mut self, radius: f32) -> Self {
        self.blur = Some(radius);
        self
    }
}

/// Trait for abstracting the drawing surface.
///
/// Calls arrive in painter's order; later calls draw on top. A clip set by
/// [`clip_circle`](Canvas::clip_circle) applies to the rest of the frame.
pub trait Canvas {
    /// Restricts further drawing to the inside of a circle.
    fn clip_circle(&mut self, center: Point, radius: f32);

    /// Strokes an arc.
    fn draw_arc(&mut self, arc: &ArcSpec, stroke: &Stroke);

    /// Fills a circle with a solid color.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba);
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    #[inline]
    fn clip_circle(&mut self, center: Point, radius: f32) {
        (**self).clip_circle(center, radius)
    }

    #[inline]
    fn draw_arc(&mut self, arc: &ArcSpec, stroke: &Stroke) {
        (**self).draw_arc(arc, stroke)
    }

    #[inline]
    fn fill_circle(&mut self, center: Point, radius: f32, color: Srgba) {
        (**self).fill_circle(center, radius, color)
    }
}
