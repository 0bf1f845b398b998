//! Depth-slice images.

use crate::color::Rgba;
use crate::format::ColorFormat;
use crate::interpolate::Grid;

/// One depth-slice of the grid as square RGBA pixels.
///
/// # Example
///
/// ```
/// use cube_lerp::{export_raster, interpolate, ColorFormat, CornerInput};
///
/// let grid = interpolate(&CornerInput::debug_cube().vectors(), 4).unwrap();
/// let images = export_raster(&grid, ColorFormat::Rgba);
///
/// assert_eq!(images.len(), 4);
/// assert_eq!(images[0].width(), 4);
/// assert_eq!(images[0].to_rgba_bytes().len(), 4 * 4 * 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SliceImage {
    /// Depth-slice this image was taken from.
    index: usize,
    /// Edge length in pixels.
    size: usize,
    /// Row-major pixels.
    pixels: Vec<Rgba>,
}

impl SliceImage {
    pub fn new(index: usize, size: usize, pixels: Vec<Rgba>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            size * size,
            "pixel count ({}) must match size² ({size}²)",
            pixels.len(),
        );
        Self {
            index,
            size,
            pixels,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Rgba {
        self.pixels[row * self.size + col]
    }

    /// Flat `[R, G, B, A, ...]` buffer of length `width * height * 4`.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}

/// Encode every depth-slice of `grid` as an image. Image `d` holds
/// `grid[d][row][col]` at pixel `(row, col)`.
pub fn export_raster(grid: &Grid, format: ColorFormat) -> Vec<SliceImage> {
    (0..grid.depth())
        .map(|d| {
            let pixels = grid
                .slice(d)
                .iter()
                .map(|&cell| format.encode(cell))
                .collect();
            SliceImage::new(d, grid.depth(), pixels)
        })
        .collect()
}
