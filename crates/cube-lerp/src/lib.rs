// Oklab matrix constants are quoted at their published precision.
#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception
)]

//! cube-lerp: trilinear color-cube interpolation
//!
//! Eight corner colors define a cube. This crate expands them into a dense
//! `depth × depth × depth` grid and exports the grid as images or as
//! ANSI-colored terminal text.
//!
//! # Quick Start
//!
//! ```
//! use cube_lerp::{layout_planes, parse_corners, CubeInterpolator, PlaneLayout, TerminalOptions};
//!
//! let verts = "#000000,#0000FF,#00FF00,#00FFFF,#FF0000,#FF00FF,#FFFF00,#FFFFFF";
//!
//! // Validate the format before touching the corners
//! let interpolator = CubeInterpolator::from_format_name("rgba").unwrap().depth(3);
//! let corners = parse_corners(verts, &mut rand::thread_rng()).unwrap();
//!
//! let grid = interpolator.interpolate(&corners).unwrap();
//! assert_eq!(grid.len(), 27);
//!
//! let planes = interpolator.export_terminal(&grid, &TerminalOptions::new());
//! let text = layout_planes(&planes, &PlaneLayout::default());
//! assert_eq!(text.lines().count(), 3 + 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! "#rrggbb,..." ──parse_corners──▶ CornerInput (raw RGBA, 3 or 4 channels)
//!                                      │ ColorFormat::to_working
//!                                      ▼
//!                               Corners<Vector>
//!                                      │ interpolate
//!                                      ▼
//!                                Grid (depth³)
//!                                      │ ColorFormat::encode
//!                        ┌─────────────┴─────────────┐
//!                        ▼                           ▼
//!              export_raster                 export_terminal
//!            Vec<SliceImage>              Vec<Vec<String>> (ANSI)
//! ```
//!
//! # Working Spaces
//!
//! | Format  | Interpolates                | Notes                           |
//! |---------|-----------------------------|---------------------------------|
//! | `rgba`  | raw 0–255 channel values    | fast, gamma-encoded blending    |
//! | `oklab` | Oklab `L, a, b` (+ alpha)   | perceptually even gradients     |
//!
//! Interpolation is purely per-channel linear blending; any perceptual
//! behavior comes from the chosen space. In Oklab the path from
//! 8-bit input is: normalize to 0..=1, gamma-expand through a build-time
//! lookup table, LMS matrix, cube root, Lab matrix. [`ColorFormat::encode`]
//! reverses each step and clamps out-of-gamut results only at the very end.
//!
//! # Corner Order
//!
//! Corners are listed front-top (left, right), front-bottom, back-top,
//! back-bottom; see [`CornerPosition`]. Grid cell `(slice, row, col)`
//! runs front→back, top→bottom, left→right.

pub mod api;
pub mod color;
pub mod corners;
pub mod format;
pub mod interpolate;
pub mod output;
pub mod vector;


pub use api::{CubeError, CubeInterpolator, MalformedInput, ParseColorError, DEFAULT_DEPTH};
pub use color::{LinearRgb, Oklab, Rgba, Srgb, ANSI_RESET};
pub use corners::{parse_corners, CornerInput, CornerPosition, Corners, CORNER_COUNT, DEBUG_CUBE};
pub use format::{ColorFormat, SUPPORTED_FORMATS};
pub use interpolate::{interpolate, validate_depth, Grid, MAX_DEPTH};
pub use output::{
    export_raster, export_terminal, layout_planes, PlaneLayout, SliceImage, TerminalOptions,
    CELL_BLOCK,
};
pub use vector::{Channels, Vector};
