//! Working color spaces and the format dispatcher
//!
//! A [`ColorFormat`] decides which space the cube is interpolated in.
//! [`ColorFormat::to_working`] projects raw RGBA input (0–255 per channel)
//! into that space; [`ColorFormat::encode`] brings any working-space vector
//! back to an 8-bit [`Rgba`].
//!
//! | Format  | Working vector                       |
//! |---------|--------------------------------------|
//! | `rgba`  | raw channels, 0.0..=255.0            |
//! | `oklab` | `[L, a, b]` plus raw alpha if present |

use std::fmt;
use std::str::FromStr;

use crate::api::CubeError;
use crate::color::{LinearRgb, Oklab, Rgba, Srgb};
use crate::vector::Vector;

/// Working space for interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFormat {
    /// Interpolate raw 8-bit channel values.
    #[default]
    Rgba,
    /// Interpolate in Oklab; alpha, when present, stays raw.
    Oklab,
}

/// Every accepted format name, in the order they are reported.
pub static SUPPORTED_FORMATS: &[(&str, ColorFormat)] = &[
    ("rgba", ColorFormat::Rgba),
    ("oklab", ColorFormat::Oklab),
    ("oklab-like", ColorFormat::Oklab),
];

pub(crate) fn supported_names() -> Vec<&'static str> {
    SUPPORTED_FORMATS.iter().map(|(name, _)| *name).collect()
}

impl ColorFormat {
    /// Canonical name of the format.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Rgba => "rgba",
            ColorFormat::Oklab => "oklab",
        }
    }

    /// Project a raw RGBA vector (3 or 4 channels, 0–255) into the working
    /// space.
    ///
    /// ```
    /// use cube_lerp::{ColorFormat, Vector};
    ///
    /// let white = Vector::new3(255.0, 255.0, 255.0);
    /// let lab = ColorFormat::Oklab.to_working(white);
    /// assert!((lab.as_slice()[0] - 1.0).abs() < 1e-3);
    /// ```
    pub fn to_working(self, rgba: Vector) -> Vector {
        match self {
            ColorFormat::Rgba => rgba,
            ColorFormat::Oklab => {
                let c = rgba.as_slice();
                let unit = |v: f32| (v / 255.0).clamp(0.0, 1.0);
                let lab = Oklab::from(LinearRgb::from(Srgb::new(
                    unit(c[0]),
                    unit(c[1]),
                    unit(c[2]),
                )));
                match rgba.alpha() {
                    Some(a) => Vector::new4(lab.l, lab.a, lab.b, a),
                    None => Vector::new3(lab.l, lab.a, lab.b),
                }
            }
        }
    }

    /// Encode a working-space vector as 8-bit RGBA. Channels are rounded
    /// and clamped; 3-channel vectors come out fully opaque.
    pub fn encode(self, working: Vector) -> Rgba {
        let alpha = working.alpha().map_or(u8::MAX, to_byte);
        let c = working.as_slice();
        let [r, g, b] = match self {
            ColorFormat::Rgba => [to_byte(c[0]), to_byte(c[1]), to_byte(c[2])],
            ColorFormat::Oklab => {
                let linear = LinearRgb::from(Oklab::new(c[0], c[1], c[2]));
                Srgb::from(linear).to_bytes()
            }
        };
        Rgba::new(r, g, b, alpha)
    }
}

#[inline]
fn to_byte(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl FromStr for ColorFormat {
    type Err = CubeError;

    /// Look a format up by name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SUPPORTED_FORMATS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|(_, format)| *format)
            .ok_or_else(|| CubeError::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!("rgba".parse::<ColorFormat>(), Ok(ColorFormat::Rgba));
        assert_eq!("OKLAB".parse::<ColorFormat>(), Ok(ColorFormat::Oklab));
        assert_eq!("oklab-like".parse::<ColorFormat>(), Ok(ColorFormat::Oklab));
        assert_eq!(
            "cmyk".parse::<ColorFormat>(),
            Err(CubeError::UnsupportedFormat("cmyk".to_string()))
        );
    }

    #[test]
    fn test_rgba_working_space_is_identity() {
        let v = Vector::new4(12.0, 200.0, 0.0, 128.0);
        assert_eq!(ColorFormat::Rgba.to_working(v), v);
        assert_eq!(ColorFormat::Rgba.encode(v), Rgba::new(12, 200, 0, 128));
    }

    #[test]
    fn test_rgba_encode_rounds_and_clamps() {
        let v = Vector::new3(127.5, -4.0, 300.0);
        assert_eq!(ColorFormat::Rgba.encode(v), Rgba::opaque(128, 0, 255));
    }

    #[test]
    fn test_oklab_keeps_raw_alpha() {
        let lab = ColorFormat::Oklab.to_working(Vector::new4(255.0, 0.0, 0.0, 64.0));
        assert_eq!(lab.alpha(), Some(64.0));
        assert_eq!(ColorFormat::Oklab.encode(lab), Rgba::new(255, 0, 0, 64));
    }

    #[test]
    fn test_oklab_three_channels_encode_opaque() {
        let lab = ColorFormat::Oklab.to_working(Vector::new3(0.0, 0.0, 255.0));
        assert_eq!(lab.channels().count(), 3);
        assert_eq!(ColorFormat::Oklab.encode(lab), Rgba::opaque(0, 0, 255));
    }

    #[test]
    fn test_oklab_out_of_gamut_is_clamped() {
        // Lightness above white with strong chroma
        let rgba = ColorFormat::Oklab.encode(Vector::new3(1.2, 0.4, -0.4));
        assert_eq!(rgba.a, 255);
        assert_eq!(rgba.r, 255);
    }
}
