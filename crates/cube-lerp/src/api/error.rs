//! Error types for the cube-lerp public API.
//!
//! [`CubeError`] is the single error type returned by validation,
//! parsing and interpolation. Every variant is fatal to a run.

use std::fmt;

/// Error type for parsing a single hex color code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Digit count after the optional `#` (must be 6 or 8)
    InvalidLength(usize),
    /// A character that is not a hexadecimal digit
    InvalidDigit(char),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength(len) => {
                write!(f, "invalid hex color length {} (expected 6 or 8 digits)", len)
            }
            ParseColorError::InvalidDigit(c) => write!(f, "invalid hex digit {:?}", c),
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Why a corner list was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedInput {
    /// Not exactly eight comma-separated codes
    WrongCount {
        /// Number of codes found
        found: usize,
    },
    /// Code does not start with the `#` marker
    MissingMarker {
        /// Position of the code in the list
        index: usize,
    },
    /// Code length differs from the first code
    LengthMismatch {
        /// Position of the code in the list
        index: usize,
        /// Digit count of the first code
        expected: usize,
        /// Digit count of this code
        found: usize,
    },
    /// First code has neither 6 nor 8 digits
    UnsupportedChannelCount {
        /// Digit count of the first code
        digits: usize,
    },
    /// Code contains a non-hex character
    InvalidHex {
        /// Position of the code in the list
        index: usize,
        /// Underlying parse failure
        source: ParseColorError,
    },
    /// Corner vectors do not all share one channel count
    ChannelMismatch,
}

impl fmt::Display for MalformedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedInput::WrongCount { found } => {
                write!(f, "must contain exactly 8 codes, found {}", found)
            }
            MalformedInput::MissingMarker { index } => {
                write!(f, "code {} must start with '#'", index)
            }
            MalformedInput::LengthMismatch {
                index,
                expected,
                found,
            } => write!(
                f,
                "all hex codes must be of same length: code {} has {} digits, expected {}",
                index, found, expected
            ),
            MalformedInput::UnsupportedChannelCount { digits } => write!(
                f,
                "all hex codes must contain 3 or 4 channels (6 or 8 digits), got {} digits",
                digits
            ),
            MalformedInput::InvalidHex { index, source } => {
                write!(f, "code {}: {}", index, source)
            }
            MalformedInput::ChannelMismatch => {
                write!(f, "all corners must have the same number of channels")
            }
        }
    }
}

/// Unified error type for the cube-lerp public API.
///
/// # Example
///
/// ```
/// use cube_lerp::{ColorFormat, CubeError};
///
/// let err = "cmyk".parse::<ColorFormat>().unwrap_err();
/// assert!(matches!(err, CubeError::UnsupportedFormat(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CubeError {
    /// The eight-code corner list is invalid
    MalformedCornerInput(MalformedInput),
    /// Unknown working color space name
    UnsupportedFormat(String),
    /// Grid depth below 1 or above [`MAX_DEPTH`](crate::MAX_DEPTH)
    InvalidDepth(i64),
}

impl fmt::Display for CubeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CubeError::MalformedCornerInput(reason) => {
                write!(f, "malformed corner input: {}", reason)
            }
            CubeError::UnsupportedFormat(name) => write!(
                f,
                "unsupported format {:?} (supported: {})",
                name,
                crate::format::supported_names().join(", ")
            ),
            CubeError::InvalidDepth(depth) => {
                write!(
                    f,
                    "invalid depth {} (must be between 1 and {})",
                    depth,
                    crate::interpolate::MAX_DEPTH
                )
            }
        }
    }
}

impl std::error::Error for CubeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CubeError::MalformedCornerInput(MalformedInput::InvalidHex { source, .. }) => {
                Some(source)
            }
            _ => None,
        }
    }
}

impl From<MalformedInput> for CubeError {
    fn from(reason: MalformedInput) -> Self {
        CubeError::MalformedCornerInput(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_messages() {
        assert_eq!(
            CubeError::InvalidDepth(0).to_string(),
            "invalid depth 0 (must be between 1 and 256)"
        );
        assert_eq!(
            CubeError::from(MalformedInput::WrongCount { found: 7 }).to_string(),
            "malformed corner input: must contain exactly 8 codes, found 7"
        );
        assert_eq!(
            CubeError::UnsupportedFormat("cmyk".into()).to_string(),
            "unsupported format \"cmyk\" (supported: rgba, oklab, oklab-like)"
        );
    }

    #[test]
    fn test_source_chain() {
        let err = CubeError::from(MalformedInput::InvalidHex {
            index: 2,
            source: ParseColorError::InvalidDigit('z'),
        });
        assert!(err.source().is_some());
        assert!(CubeError::InvalidDepth(-3).source().is_none());
    }
}
