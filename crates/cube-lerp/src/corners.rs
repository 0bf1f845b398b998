//! The eight corners of the color cube
//!
//! Corners are addressed along three axes: front/back, top/bottom and
//! left/right. Input position `n` (0..8) maps to
//! `[(n >> 2) & 1][(n >> 1) & 1][n & 1]`, so the list reads
//! front-top (0, 1), front-bottom (2, 3), back-top (4, 5), back-bottom (6, 7),
//! each pair left then right.

use std::ops::Index;

use rand::Rng;

use crate::api::{CubeError, MalformedInput};
use crate::color::Rgba;
use crate::vector::{Channels, Vector};

/// Number of corners on a cube.
pub const CORNER_COUNT: usize = 8;

/// The fixed cube used by `--debug`: black at the front-top-left, white at
/// the back-bottom-right, primaries and secondaries in between.
pub const DEBUG_CUBE: [Rgba; CORNER_COUNT] = [
    Rgba::opaque(0, 0, 0),
    Rgba::opaque(0, 0, 255),
    Rgba::opaque(0, 255, 0),
    Rgba::opaque(0, 255, 255),
    Rgba::opaque(255, 0, 0),
    Rgba::opaque(255, 0, 255),
    Rgba::opaque(255, 255, 0),
    Rgba::opaque(255, 255, 255),
];

/// A corner of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerPosition {
    FrontTopLeft,
    FrontTopRight,
    FrontBottomLeft,
    FrontBottomRight,
    BackTopLeft,
    BackTopRight,
    BackBottomLeft,
    BackBottomRight,
}

impl CornerPosition {
    /// All corners in input order.
    pub const ALL: [CornerPosition; CORNER_COUNT] = [
        CornerPosition::FrontTopLeft,
        CornerPosition::FrontTopRight,
        CornerPosition::FrontBottomLeft,
        CornerPosition::FrontBottomRight,
        CornerPosition::BackTopLeft,
        CornerPosition::BackTopRight,
        CornerPosition::BackBottomLeft,
        CornerPosition::BackBottomRight,
    ];

    /// Position in the input list.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `(front/back, top/bottom, left/right)`, each 0 or 1.
    #[inline]
    pub fn axes(self) -> (usize, usize, usize) {
        let n = self.index();
        ((n >> 2) & 1, (n >> 1) & 1, n & 1)
    }

    /// Corner at the given axis coordinates (only the lowest bit is used).
    pub fn from_axes(depth: usize, vertical: usize, horizontal: usize) -> Self {
        Self::ALL[((depth & 1) << 2) | ((vertical & 1) << 1) | (horizontal & 1)]
    }
}

/// One value per corner of the cube.
#[derive(Debug, Clone, PartialEq)]
pub struct Corners<T> {
    values: [T; CORNER_COUNT],
}

impl<T> Corners<T> {
    /// Corners in input order (see the module docs).
    pub fn new(values: [T; CORNER_COUNT]) -> Self {
        Self { values }
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Corners<U> {
        Corners {
            values: self.values.each_ref().map(f),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (CornerPosition, &T)> {
        CornerPosition::ALL.into_iter().zip(self.values.iter())
    }

    pub fn as_array(&self) -> &[T; CORNER_COUNT] {
        &self.values
    }
}

impl Corners<Vector> {
    /// Shared channel count, or `ChannelMismatch` if the corners disagree.
    pub fn channels(&self) -> Result<Channels, CubeError> {
        let first = self.values[0].channels();
        if self.values.iter().all(|v| v.channels() == first) {
            Ok(first)
        } else {
            Err(MalformedInput::ChannelMismatch.into())
        }
    }
}

impl<T> Index<CornerPosition> for Corners<T> {
    type Output = T;

    fn index(&self, position: CornerPosition) -> &T {
        &self.values[position.index()]
    }
}

impl<T> Index<(usize, usize, usize)> for Corners<T> {
    type Output = T;

    fn index(&self, (depth, vertical, horizontal): (usize, usize, usize)) -> &T {
        &self[CornerPosition::from_axes(depth, vertical, horizontal)]
    }
}

/// Parsed corner colors in raw RGBA space.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerInput {
    colors: Corners<Rgba>,
    channels: Channels,
}

impl CornerInput {
    pub fn new(colors: [Rgba; CORNER_COUNT], channels: Channels) -> Self {
        Self {
            colors: Corners::new(colors),
            channels,
        }
    }

    /// The documented debug cube, with explicit alpha.
    pub fn debug_cube() -> Self {
        Self::new(DEBUG_CUBE, Channels::Four)
    }

    /// Random corners: every channel of corner `i` is drawn from
    /// `[0, 30 * (i + 1))`, alpha is 255.
    ///
    /// Later corners get wider ranges on purpose; it keeps random cubes
    /// from collapsing into one muddy color.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let colors = std::array::from_fn(|i| {
            let upper = 30 * (i as u32 + 1);
            let mut channel = || rng.gen_range(0..upper) as u8;
            Rgba::opaque(channel(), channel(), channel())
        });
        Self::new(colors, Channels::Four)
    }

    pub fn colors(&self) -> &Corners<Rgba> {
        &self.colors
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw RGBA vectors, 3 or 4 channels as parsed.
    pub fn vectors(&self) -> Corners<Vector> {
        self.colors.map(|c| c.to_vector(self.channels))
    }
}

/// Parse a comma-separated list of corner codes.
///
/// An empty (or all-whitespace) list yields random corners drawn from
/// `rng`; otherwise it must be eight comma-separated `#` codes of
/// equal length with 6 or 8 hex digits.
///
/// # Errors
///
/// [`CubeError::MalformedCornerInput`] describing the first problem found.
///
/// # Example
///
/// ```
/// use cube_lerp::{parse_corners, Channels};
///
/// let verts = "#000000,#0000FF,#00FF00,#00FFFF,#FF0000,#FF00FF,#FFFF00,#FFFFFF";
/// let input = parse_corners(verts, &mut rand::thread_rng()).unwrap();
/// assert_eq!(input.channels(), Channels::Three);
/// ```
pub fn parse_corners<R: Rng>(verts: &str, rng: &mut R) -> Result<CornerInput, CubeError> {
    let verts = verts.trim();
    if verts.is_empty() {
        return Ok(CornerInput::random(rng));
    }

    let entries: Vec<&str> = verts.split(',').map(str::trim).collect();
    if entries.len() != CORNER_COUNT {
        return Err(MalformedInput::WrongCount {
            found: entries.len(),
        }
        .into());
    }

    let digits_of = |index: usize, entry: &str| -> Result<usize, MalformedInput> {
        entry
            .strip_prefix('#')
            .map(|digits| digits.chars().count())
            .ok_or(MalformedInput::MissingMarker { index })
    };

    let expected = digits_of(0, entries[0])?;
    let channels = match expected {
        6 => Channels::Three,
        8 => Channels::Four,
        digits => return Err(MalformedInput::UnsupportedChannelCount { digits }.into()),
    };

    let mut colors = [Rgba::opaque(0, 0, 0); CORNER_COUNT];
    for (index, entry) in entries.iter().enumerate() {
        let found = digits_of(index, entry)?;
        if found != expected {
            return Err(MalformedInput::LengthMismatch {
                index,
                expected,
                found,
            }
            .into());
        }
        colors[index] = entry
            .parse()
            .map_err(|source| MalformedInput::InvalidHex { index, source })?;
    }

    Ok(CornerInput::new(colors, channels))
}
