//! Linear RGB color type
//!
//! Linear light intensity; the intermediate space between gamma-encoded
//! sRGB and Oklab.

use super::lut::srgb_to_linear;
use super::srgb::Srgb;

/// A color in linear RGB.
///
/// Values are nominally 0.0..=1.0 but are not clamped, since colors coming
/// back from interpolated Oklab coordinates may leave the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    /// Gamma expansion through the lookup table.
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}
