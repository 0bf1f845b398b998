//! 8-bit RGBA, the renderable form of every working-space color
//!
//! Every export path ends here: PNG pixels are written from the raw bytes,
//! terminal cells are drawn with 24-bit ANSI escape sequences.

use std::fmt;
use std::str::FromStr;

use crate::api::ParseColorError;
use crate::vector::{Channels, Vector};

/// Reset all terminal attributes.
pub const ANSI_RESET: &str = "\x1b[0m";

/// An 8-bit RGBA color, ready for pixel or terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque color.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, u8::MAX)
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Raw channel values as a vector, with or without the alpha channel.
    pub fn to_vector(self, channels: Channels) -> Vector {
        let [r, g, b, a] = self.to_bytes().map(f32::from);
        match channels {
            Channels::Three => Vector::new3(r, g, b),
            Channels::Four => Vector::new4(r, g, b, a),
        }
    }

    /// Lowercase hex code: `#rrggbb` when opaque, `#rrggbbaa` otherwise.
    ///
    /// ```
    /// use cube_lerp::Rgba;
    /// assert_eq!(Rgba::opaque(255, 0, 16).to_hex(), "#ff0010");
    /// assert_eq!(Rgba::new(0, 0, 0, 128).to_hex(), "#00000080");
    /// ```
    pub fn to_hex(self) -> String {
        if self.a == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// 24-bit background escape sequence. Terminals have no alpha, so the
    /// alpha channel is ignored.
    pub fn ansi_background(self) -> String {
        format!("\x1b[48;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// 24-bit foreground escape sequence.
    pub fn ansi_foreground(self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }

    /// Rec. 709 luma of the encoded channels, 0.0..=255.0.
    pub fn luma(self) -> f32 {
        0.2126 * f32::from(self.r) + 0.7152 * f32::from(self.g) + 0.0722 * f32::from(self.b)
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrasting_text(self) -> Rgba {
        if self.luma() > 140.0 {
            Rgba::opaque(0, 0, 0)
        } else {
            Rgba::opaque(255, 255, 255)
        }
    }

    /// `text` drawn on a solid block of this color, attributes reset after.
    pub fn glyph(self, text: &str) -> String {
        format!(
            "{}{}{text}{ANSI_RESET}",
            self.ansi_background(),
            self.contrasting_text().ansi_foreground()
        )
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[inline]
fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse `#RRGGBB` or `#RRGGBBAA`. The `#` is optional, case is
    /// ignored and surrounding whitespace is trimmed. Six digits yield an
    /// opaque color.
    ///
    /// ```
    /// use cube_lerp::Rgba;
    /// let teal: Rgba = "#008080".parse().unwrap();
    /// assert_eq!(teal, Rgba::opaque(0, 128, 128));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        let bytes: Vec<u8> = digits
            .as_bytes()
            .chunks(2)
            .map(|pair| (nibble(pair[0]) << 4) | nibble(*pair.get(1).unwrap_or(&b'0')))
            .collect();

        match (digits.len(), bytes.as_slice()) {
            (6, &[r, g, b]) => Ok(Self::opaque(r, g, b)),
            (8, &[r, g, b, a]) => Ok(Self::new(r, g, b, a)),
            (len, _) => Err(ParseColorError::InvalidLength(len)),
        }
    }
}
