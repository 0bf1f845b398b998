//! Cube export
//!
//! A [`Grid`](crate::Grid) leaves the crate in one of two shapes:
//!
//! - **Raster** ([`export_raster`]): one [`SliceImage`] per depth-slice,
//!   `depth × depth` pixels, ready for a PNG encoder.
//! - **Terminal** ([`export_terminal`]): one string per row per slice,
//!   each cell drawn with ANSI background colors or as its hex code.
//!   [`layout_planes`] arranges the slices side by side for printing.
//!
//! Both visit every cell exactly once in grid order.

mod raster;
mod terminal;

pub use raster::{export_raster, SliceImage};
pub use terminal::{export_terminal, layout_planes, PlaneLayout, TerminalOptions, CELL_BLOCK};
