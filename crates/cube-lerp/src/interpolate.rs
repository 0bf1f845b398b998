//! Trilinear interpolation of the color cube
//!
//! The eight corner vectors are expanded into a dense
//! `depth × depth × depth` [`Grid`]. Cell `(slice, row, col)` sits at
//! parameters `(slice, row, col) / (depth - 1)` along the front/back,
//! top/bottom and left/right axes respectively.
//!
//! Blending always runs left/right first, then top/bottom, then
//! front/back. The order is fixed so results are bit-for-bit reproducible;
//! any order gives the same value up to rounding.

use crate::api::CubeError;
use crate::corners::{CornerPosition, Corners};
use crate::vector::{Channels, Vector};

/// Largest accepted grid depth. The grid is held in memory as `depth³`
/// vectors, so 256 already means 16.7M cells.
pub const MAX_DEPTH: usize = 256;

/// Convert a user-supplied depth into a grid size.
///
/// # Errors
///
/// [`CubeError::InvalidDepth`] for anything below 1 or above [`MAX_DEPTH`].
pub fn validate_depth(depth: i64) -> Result<usize, CubeError> {
    usize::try_from(depth)
        .ok()
        .filter(|d| (1..=MAX_DEPTH).contains(d))
        .ok_or(CubeError::InvalidDepth(depth))
}

/// A fully materialized `depth³` grid of working-space vectors.
///
/// Cells are stored slice-major: slice (front/back), then row
/// (top/bottom), then column (left/right).
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    depth: usize,
    channels: Channels,
    cells: Vec<Vector>,
}

impl Grid {
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Total number of cells (`depth³`).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(slice, row, col)`.
    ///
    /// # Panics
    ///
    /// If any coordinate is `>= depth`.
    #[inline]
    pub fn get(&self, slice: usize, row: usize, col: usize) -> Vector {
        assert!(
            slice < self.depth && row < self.depth && col < self.depth,
            "grid index ({slice}, {row}, {col}) out of bounds for depth {}",
            self.depth
        );
        self.cells[(slice * self.depth + row) * self.depth + col]
    }

    /// The cells of one depth-slice, row-major.
    pub fn slice(&self, slice: usize) -> &[Vector] {
        let area = self.depth * self.depth;
        &self.cells[slice * area..(slice + 1) * area]
    }

    /// Rows of one depth-slice.
    pub fn rows(&self, slice: usize) -> impl Iterator<Item = &[Vector]> {
        self.slice(slice).chunks(self.depth)
    }

    /// The grid cell that coincides with a cube corner.
    pub fn corner(&self, position: CornerPosition) -> Vector {
        let last = self.depth - 1;
        let (d, v, h) = position.axes();
        self.get(d * last, v * last, h * last)
    }

    /// All cells in slice, row, column order.
    pub fn cells(&self) -> &[Vector] {
        &self.cells
    }
}

/// Interpolation parameter for grid index `i`; 0.0 when the grid has a
/// single cell per axis.
#[inline]
fn parameter(i: usize, depth: usize) -> f32 {
    if depth == 1 {
        0.0
    } else {
        i as f32 / (depth - 1) as f32
    }
}

/// Blend the eight corners at `(tz, ty, tx)`: front/back, top/bottom,
/// left/right.
fn trilerp(c: &Corners<Vector>, tz: f32, ty: f32, tx: f32) -> Vector {
    // 4 edges along left/right
    let front_top = Vector::lerp(c[(0, 0, 0)], c[(0, 0, 1)], tx);
    let front_bottom = Vector::lerp(c[(0, 1, 0)], c[(0, 1, 1)], tx);
    let back_top = Vector::lerp(c[(1, 0, 0)], c[(1, 0, 1)], tx);
    let back_bottom = Vector::lerp(c[(1, 1, 0)], c[(1, 1, 1)], tx);

    // 2 faces along top/bottom
    let front = Vector::lerp(front_top, front_bottom, ty);
    let back = Vector::lerp(back_top, back_bottom, ty);

    Vector::lerp(front, back, tz)
}

/// Expand eight corners into a `depth³` grid.
///
/// # Errors
///
/// - [`CubeError::InvalidDepth`] when `depth` is 0 or above [`MAX_DEPTH`]
/// - [`CubeError::MalformedCornerInput`] when the corners do not share a
///   channel count
///
/// # Example
///
/// ```
/// use cube_lerp::{interpolate, Corners, Vector};
///
/// let black = Vector::new3(0.0, 0.0, 0.0);
/// let white = Vector::new3(255.0, 255.0, 255.0);
/// let corners = Corners::new([black, black, black, black, white, white, white, white]);
///
/// let grid = interpolate(&corners, 3).unwrap();
/// assert_eq!(grid.get(1, 0, 0).as_slice(), &[127.5, 127.5, 127.5]);
/// ```
pub fn interpolate(corners: &Corners<Vector>, depth: usize) -> Result<Grid, CubeError> {
    if !(1..=MAX_DEPTH).contains(&depth) {
        return Err(CubeError::InvalidDepth(
            i64::try_from(depth).unwrap_or(i64::MAX),
        ));
    }
    let channels = corners.channels()?;

    let mut cells = Vec::with_capacity(depth * depth * depth);
    for slice in 0..depth {
        let tz = parameter(slice, depth);
        for row in 0..depth {
            let ty = parameter(row, depth);
            for col in 0..depth {
                cells.push(trilerp(corners, tz, ty, parameter(col, depth)));
            }
        }
    }

    Ok(Grid {
        depth,
        channels,
        cells,
    })
}
