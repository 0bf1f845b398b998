//! CubeInterpolator builder -- the primary entry point for the crate.
//!
//! [`CubeInterpolator`] ties a working color space and a grid depth to the
//! conversion, interpolation and export steps.

use crate::corners::{CornerInput, Corners};
use crate::format::ColorFormat;
use crate::interpolate::{interpolate, Grid};
use crate::output::{export_raster, export_terminal, SliceImage, TerminalOptions};
use crate::vector::Vector;

use super::CubeError;

/// Grid depth used when none is configured.
pub const DEFAULT_DEPTH: usize = 6;

/// High-level pipeline: corners in, grid and exports out.
///
/// - The format is fixed at construction, so an unknown format name fails
///   in [`from_format_name`](Self::from_format_name) before any corners
///   are touched.
/// - Configuration methods consume and return `self`.
/// - Everything else takes `&self`, so one interpolator can process many
///   corner sets.
///
/// # Example
///
/// ```
/// use cube_lerp::{CornerInput, CubeInterpolator};
///
/// let interpolator = CubeInterpolator::from_format_name("oklab")
///     .unwrap()
///     .depth(5);
///
/// let grid = interpolator.interpolate(&CornerInput::debug_cube()).unwrap();
/// let images = interpolator.export_raster(&grid);
///
/// assert_eq!(images.len(), 5);
/// assert_eq!(images[4].height(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeInterpolator {
    format: ColorFormat,
    depth: usize,
}

impl CubeInterpolator {
    /// Create an interpolator for `format` with [`DEFAULT_DEPTH`].
    pub fn new(format: ColorFormat) -> Self {
        Self {
            format,
            depth: DEFAULT_DEPTH,
        }
    }

    /// Look the working space up by name.
    ///
    /// # Errors
    ///
    /// [`CubeError::UnsupportedFormat`] for unknown names.
    pub fn from_format_name(name: &str) -> Result<Self, CubeError> {
        Ok(Self::new(name.parse()?))
    }

    /// Set the grid depth. Zero is rejected when interpolating.
    #[inline]
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    #[inline]
    pub fn format(&self) -> ColorFormat {
        self.format
    }

    #[inline]
    pub fn grid_depth(&self) -> usize {
        self.depth
    }

    /// Project parsed corners into the working space.
    pub fn working_corners(&self, input: &CornerInput) -> Corners<Vector> {
        input.vectors().map(|&v| self.format.to_working(v))
    }

    /// Convert and interpolate in one step.
    ///
    /// # Errors
    ///
    /// [`CubeError::InvalidDepth`] when the depth is 0 or above
    /// [`MAX_DEPTH`](crate::MAX_DEPTH).
    pub fn interpolate(&self, input: &CornerInput) -> Result<Grid, CubeError> {
        interpolate(&self.working_corners(input), self.depth)
    }

    /// One image per depth-slice.
    pub fn export_raster(&self, grid: &Grid) -> Vec<SliceImage> {
        export_raster(grid, self.format)
    }

    /// Terminal rows per depth-slice.
    pub fn export_terminal(&self, grid: &Grid, options: &TerminalOptions) -> Vec<Vec<String>> {
        export_terminal(grid, self.format, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::corners::CornerPosition;

    #[test]
    fn test_defaults() {
        let interpolator = CubeInterpolator::new(ColorFormat::default());
        assert_eq!(interpolator.format(), ColorFormat::Rgba);
        assert_eq!(interpolator.grid_depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn test_unknown_format_name() {
        assert_eq!(
            CubeInterpolator::from_format_name("cmyk"),
            Err(CubeError::UnsupportedFormat("cmyk".to_string()))
        );
    }

    #[test]
    fn test_zero_depth() {
        let interpolator = CubeInterpolator::new(ColorFormat::Rgba).depth(0);
        assert_eq!(
            interpolator.interpolate(&CornerInput::debug_cube()),
            Err(CubeError::InvalidDepth(0))
        );
    }

    #[test]
    fn test_oklab_corners_survive_export() {
        let interpolator = CubeInterpolator::new(ColorFormat::Oklab).depth(4);
        let input = CornerInput::debug_cube();
        let grid = interpolator.interpolate(&input).unwrap();
        let images = interpolator.export_raster(&grid);

        let back_top_right = images[3].pixel(0, 3);
        let expected = input.colors()[CornerPosition::BackTopRight];
        assert_eq!(expected, Rgba::opaque(255, 0, 255));
        assert!(back_top_right.r.abs_diff(expected.r) <= 1);
        assert!(back_top_right.g.abs_diff(expected.g) <= 1);
        assert!(back_top_right.b.abs_diff(expected.b) <= 1);
        assert_eq!(back_top_right.a, 255);
    }
}
