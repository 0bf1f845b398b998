//! Public API surface: the [`CubeInterpolator`] builder and error types.

mod builder;
mod error;

pub use builder::{CubeInterpolator, DEFAULT_DEPTH};
pub use error::{CubeError, MalformedInput, ParseColorError};
