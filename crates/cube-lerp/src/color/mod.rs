//! Color types and conversions
//!
//! - [`Rgba`]: 8-bit channels; parsed from hex, rendered to pixels and ANSI
//! - [`Srgb`]: gamma-encoded channels normalized to 0.0..=1.0
//! - [`LinearRgb`]: linear light, the bridge between sRGB and Oklab
//! - [`Oklab`]: perceptually uniform space used for lab-like interpolation
//!
//! ```
//! use cube_lerp::{LinearRgb, Oklab, Srgb};
//!
//! let srgb = Srgb::from_u8(200, 30, 90);
//! let lab = Oklab::from(LinearRgb::from(srgb));
//! let back = Srgb::from(LinearRgb::from(lab)).to_bytes();
//! assert!(back[0].abs_diff(200) <= 1 && back[1].abs_diff(30) <= 1 && back[2].abs_diff(90) <= 1);
//! ```

mod linear_rgb;
mod lut;
mod oklab;
mod rgba;
mod srgb;

pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use rgba::{Rgba, ANSI_RESET};
pub use srgb::Srgb;
