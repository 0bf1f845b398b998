//! sRGB color type
//!
//! Gamma-encoded channels normalized to 0.0..=1.0. This is the space hex
//! codes and PNG pixels live in.

use super::linear_rgb::LinearRgb;
use super::lut::linear_to_srgb;

/// A color in gamma-encoded sRGB, channels in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    /// Red channel (gamma-encoded, 0.0..=1.0)
    pub r: f32,
    /// Green channel (gamma-encoded, 0.0..=1.0)
    pub g: f32,
    /// Blue channel (gamma-encoded, 0.0..=1.0)
    pub b: f32,
}

impl Srgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create an Srgb color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use cube_lerp::Srgb;
    /// let red = Srgb::from_u8(255, 0, 0);
    /// assert_eq!(red.r, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Convert to 8-bit channels, rounding and clamping to 0..=255.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [
            unit_to_byte(self.r),
            unit_to_byte(self.g),
            unit_to_byte(self.b),
        ]
    }
}

#[inline]
fn unit_to_byte(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<LinearRgb> for Srgb {
    /// Gamma compression through the lookup table. Out-of-gamut channels
    /// are clamped to the displayable range first.
    fn from(linear: LinearRgb) -> Self {
        Self {
            r: linear_to_srgb(linear.r),
            g: linear_to_srgb(linear.g),
            b: linear_to_srgb(linear.b),
        }
    }
}
