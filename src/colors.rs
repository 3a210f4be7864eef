//! Color helpers.
//!
//! Colors are `palette::Srgba` (0.0-1.0 components). Hosts coming from
//! packed 32-bit ARGB color ints can convert with [`argb`], and HSV helpers
//! are provided for building themed palettes.

use palette::{FromColor, Hsva, Srgba};

/// Opaque white, the default active segment color.
pub const WHITE: Srgba = Srgba::new(1.0, 1.0, 1.0, 1.0);

/// Default passive segment color.
pub const LIGHT_GRAY: Srgba = Srgba::new(0.8, 0.8, 0.8, 1.0);

/// Default shadow and inner circle color.
pub const DARK_GRAY: Srgba = Srgba::new(0.2, 0.2, 0.2, 1.0);

/// Opaque black.
pub const BLACK: Srgba = Srgba::new(0.0, 0.0, 0.0, 1.0);

/// Converts a packed `0xAARRGGBB` color int.
#[inline]
pub fn argb(packed: u32) -> Srgba {
    let [alpha, red, green, blue] = packed.to_be_bytes();
    Srgba::<u8>::new(red, green, blue, alpha).into_format()
}

/// Creates a color from HSV (Hue, Saturation, Value) components and alpha.
#[inline]
pub fn hsva(hue: f32, saturation: f32, value: f32, alpha: f32) -> Srgba {
    Srgba::from_color(Hsva::new(hue, saturation, value, alpha))
}

/// Creates an opaque color from HSV components.
#[inline]
pub fn hsv(hue: f32, saturation: f32, value: f32) -> Srgba {
    hsva(hue, saturation, value, 1.0)
}
