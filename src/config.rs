//! Loader configuration.
//!
//! [`LoaderConfig`] is the single configuration surface of the loader. It
//! is built and validated through [`ConfigBuilder`]. Once built it can still
//! be edited through its `set_*` methods, which mirror widget properties:
//! an invalid value is ignored and the previous one is kept, without any
//! error being reported. Use the builder when you need to know why a value
//! was refused.

use crate::colors::{DARK_GRAY, LIGHT_GRAY, WHITE};
use crate::geometry::{BLUR_RADIUS, SegmentGeometry, is_valid_segment_count};
use crate::time::TimeDuration;
use crate::types::{ConfigError, Easing, RotationDirection};
use palette::Srgba;

const DEFAULT_SEGMENT_COUNT: usize = 6;
const DEFAULT_STROKE_WIDTH: f32 = 100.0;
const DEFAULT_ROTATION_MILLIS: u64 = 700;
const DEFAULT_TRANSFORM_MILLIS: u64 = 200;
const DEFAULT_MAX_SCALE: f32 = 1.05;

/// Complete loader configuration.
///
/// # Type Parameters
/// * `D` - The duration type used for the phase durations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoaderConfig<D: TimeDuration> {
    segment_count: usize,
    rotation_direction: RotationDirection,
    segment_stroke_width: f32,
    shadow_stroke_width: f32,
    rotation_duration: D,
    transform_duration: D,
    active_color: Srgba,
    passive_color: Srgba,
    shadow_color: Srgba,
    inner_circle_color: Srgba,
    max_scale: f32,
    gradient_enabled: bool,
    transform_easing: Easing,
}

impl<D: TimeDuration> LoaderConfig<D> {
    /// Creates a new builder seeded with the default configuration.
    pub fn builder() -> ConfigBuilder<D> {
        ConfigBuilder::new()
    }

    /// Total number of segments.
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Sweep direction of the rotation phase.
    pub fn rotation_direction(&self) -> RotationDirection {
        self.rotation_direction
    }

    /// Segment stroke width at scale 1.0.
    pub fn segment_stroke_width(&self) -> f32 {
        self.segment_stroke_width
    }

    /// Shadow stroke width at scale 1.0.
    pub fn shadow_stroke_width(&self) -> f32 {
        self.shadow_stroke_width
    }

    /// Duration of the rotation phase.
    pub fn rotation_duration(&self) -> D {
        self.rotation_duration
    }

    /// Duration of the transform phase.
    pub fn transform_duration(&self) -> D {
        self.transform_duration
    }

    pub fn active_color(&self) -> Srgba {
        self.active_color
    }

    pub fn passive_color(&self) -> Srgba {
        self.passive_color
    }

    pub fn shadow_color(&self) -> Srgba {
        self.shadow_color
    }

    pub fn inner_circle_color(&self) -> Srgba {
        self.inner_circle_color
    }

    /// Peak scale of the active family.
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Whether passive segments are painted with a radial gradient.
    pub fn gradient_enabled(&self) -> bool {
        self.gradient_enabled
    }

    /// Curve used by the transform phase interpolations.
    pub fn transform_easing(&self) -> Easing {
        self.transform_easing
    }

    /// Segment layout for the configured segment count.
    pub fn geometry(&self) -> SegmentGeometry {
        SegmentGeometry::new(self.segment_count).unwrap_or_default()
    }

    /// Sets the segment count. Odd counts and counts below two are ignored.
    pub fn set_segment_count(&mut self, segment_count: usize) {
        if is_valid_segment_count(segment_count) {
            self.segment_count = segment_count;
        }
    }

    pub fn set_rotation_direction(&mut self, direction: RotationDirection) {
        self.rotation_direction = direction;
    }

    /// Sets the segment stroke width. Non-positive widths are ignored.
    pub fn set_segment_stroke_width(&mut self, width: f32) {
        if is_positive(width) {
            self.segment_stroke_width = width;
        }
    }

    /// Sets the shadow stroke width. Non-positive widths are ignored.
    pub fn set_shadow_stroke_width(&mut self, width: f32) {
        if is_positive(width) {
            self.shadow_stroke_width = width;
        }
    }

    /// Sets the rotation phase duration. Zero is ignored.
    pub fn set_rotation_duration(&mut self, duration: D) {
        if duration.as_millis() != 0 {
            self.rotation_duration = duration;
        }
    }

    /// Sets the transform phase duration. Zero is ignored.
    pub fn set_transform_duration(&mut self, duration: D) {
        if duration.as_millis() != 0 {
            self.transform_duration = duration;
        }
    }

    pub fn set_active_color(&mut self, color: Srgba) {
        self.active_color = color;
    }

    pub fn set_passive_color(&mut self, color: Srgba) {
        self.passive_color = color;
    }

    pub fn set_shadow_color(&mut self, color: Srgba) {
        self.shadow_color = color;
    }

    pub fn set_inner_circle_color(&mut self, color: Srgba) {
        self.inner_circle_color = color;
    }

    /// Alias for [`set_inner_circle_color`](Self::set_inner_circle_color):
    /// the loader's background shows through its center disc.
    pub fn set_background_color(&mut self, color: Srgba) {
        self.set_inner_circle_color(color);
    }

    /// Sets the peak scale. Values below 1.0 or not finite are ignored.
    pub fn set_max_scale(&mut self, max_scale: f32) {
        if is_valid_scale(max_scale) {
            self.max_scale = max_scale;
        }
    }

    pub fn set_gradient_enabled(&mut self, enabled: bool) {
        self.gradient_enabled = enabled;
    }

    pub fn set_transform_easing(&mut self, easing: Easing) {
        self.transform_easing = easing;
    }
}

impl<D: TimeDuration> Default for LoaderConfig<D> {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            rotation_direction: RotationDirection::Clockwise,
            segment_stroke_width: DEFAULT_STROKE_WIDTH,
            shadow_stroke_width: DEFAULT_STROKE_WIDTH - BLUR_RADIUS * 2.0,
            rotation_duration: D::from_millis(DEFAULT_ROTATION_MILLIS),
            transform_duration: D::from_millis(DEFAULT_TRANSFORM_MILLIS),
            active_color: WHITE,
            passive_color: LIGHT_GRAY,
            shadow_color: DARK_GRAY,
            inner_circle_color: DARK_GRAY,
            max_scale: DEFAULT_MAX_SCALE,
            gradient_enabled: true,
            transform_easing: Easing::Linear,
        }
    }
}

/// Builder for constructing validated loader configurations.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBuilder<D: TimeDuration> {
    config: LoaderConfig<D>,
}

impl<D: TimeDuration> ConfigBuilder<D> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Sets the total number of segments. Must be even and at least two.
    pub fn segment_count(mut self, segment_count: usize) -> Self {
        self.config.segment_count = segment_count;
        self
    }

    pub fn rotation_direction(mut self, direction: RotationDirection) -> Self {
        self.config.rotation_direction = direction;
        self
    }

    pub fn segment_stroke_width(mut self, width: f32) -> Self {
        self.config.segment_stroke_width = width;
        self
    }

    pub fn shadow_stroke_width(mut self, width: f32) -> Self {
        self.config.shadow_stroke_width = width;
        self
    }

    pub fn rotation_duration(mut self, duration: D) -> Self {
        self.config.rotation_duration = duration;
        self
    }

    pub fn transform_duration(mut self, duration: D) -> Self {
        self.config.transform_duration = duration;
        self
    }

    pub fn active_color(mut self, color: Srgba) -> Self {
        self.config.active_color = color;
        self
    }

    pub fn passive_color(mut self, color: Srgba) -> Self {
        self.config.passive_color = color;
        self
    }

    pub fn shadow_color(mut self, color: Srgba) -> Self {
        self.config.shadow_color = color;
        self
    }

    pub fn inner_circle_color(mut self, color: Srgba) -> Self {
        self.config.inner_circle_color = color;
        self
    }

    pub fn max_scale(mut self, max_scale: f32) -> Self {
        self.config.max_scale = max_scale;
        self
    }

    pub fn gradient_enabled(mut self, enabled: bool) -> Self {
        self.config.gradient_enabled = enabled;
        self
    }

    pub fn transform_easing(mut self, easing: Easing) -> Self {
        self.config.transform_easing = easing;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `TooFewSegments` - Fewer than two segments
    /// * `OddSegmentCount` - Segment count is odd
    /// * `ZeroDuration` - A phase duration is zero
    /// * `NonPositiveStrokeWidth` - A stroke width is not positive
    /// * `ScaleBelowOne` - Peak scale is below 1.0
    pub fn build(self) -> Result<LoaderConfig<D>, ConfigError> {
        let config = self.config;

        if config.segment_count < 2 {
            return Err(ConfigError::TooFewSegments(config.segment_count));
        }
        if config.segment_count % 2 != 0 {
            return Err(ConfigError::OddSegmentCount(config.segment_count));
        }
        if config.rotation_duration.as_millis() == 0 || config.transform_duration.as_millis() == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if !is_positive(config.segment_stroke_width) || !is_positive(config.shadow_stroke_width) {
            return Err(ConfigError::NonPositiveStrokeWidth);
        }
        if !is_valid_scale(config.max_scale) {
            return Err(ConfigError::ScaleBelowOne);
        }

        Ok(config)
    }
}

impl<D: TimeDuration> Default for ConfigBuilder<D> {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn is_positive(value: f32) -> bool {
    !value.is_nan() && value > 0.0
}

#[inline]
fn is_valid_scale(value: f32) -> bool {
    value.is_finite() && value >= 1.0
}
