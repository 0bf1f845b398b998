//! Gamma lookup tables
//!
//! The tables are generated by build.rs; lookups interpolate linearly
//! between adjacent entries.

include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

// Matches LUT_SIZE - 1 in build.rs.
const LAST: usize = 4095;

#[inline]
fn lookup(table: &[f32], value: f32) -> f32 {
    let scaled = value.clamp(0.0, 1.0) * LAST as f32;
    let index = scaled as usize;
    if index >= LAST {
        return table[LAST];
    }

    let frac = scaled - index as f32;
    let lo = table[index];
    let hi = table[index + 1];
    lo + (hi - lo) * frac
}

/// Gamma-expand an encoded sRGB channel (0.0..=1.0) to linear light.
///
/// Inputs outside 0.0..=1.0 are clamped.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    lookup(&SRGB_TO_LINEAR, srgb)
}

/// Gamma-compress a linear light channel (0.0..=1.0) to encoded sRGB.
///
/// Inputs outside 0.0..=1.0 are clamped, so out-of-gamut values coming
/// back from Oklab land on the nearest displayable value.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    lookup(&LINEAR_TO_SRGB, linear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_boundaries() {
        assert!(srgb_to_linear(0.0).abs() < 1e-6);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
        assert!(linear_to_srgb(0.0).abs() < 1e-6);
        assert!((linear_to_srgb(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(linear_to_srgb(-0.25), linear_to_srgb(0.0));
        assert_eq!(linear_to_srgb(1.75), linear_to_srgb(1.0));
        assert_eq!(srgb_to_linear(-1.0), srgb_to_linear(0.0));
    }

    #[test]
    fn test_monotonicity() {
        let mut prev_linear = srgb_to_linear(0.0);
        let mut prev_srgb = linear_to_srgb(0.0);
        for i in 1..=1000 {
            let x = i as f32 / 1000.0;
            let linear = srgb_to_linear(x);
            let srgb = linear_to_srgb(x);
            assert!(linear >= prev_linear, "srgb_to_linear not monotonic at {i}");
            assert!(srgb >= prev_srgb, "linear_to_srgb not monotonic at {i}");
            prev_linear = linear;
            prev_srgb = srgb;
        }
    }
}
