//! The second stage: undoing sRGB companding. Values coming off a display or out of an image file
//! are gamma-compressed, and the matrix in the next stage only makes sense on linear light.

use consts::{SRGB_EXPONENT, SRGB_LINEAR_SLOPE, SRGB_OFFSET, SRGB_SCALE, SRGB_THRESHOLD};

/// Linearizes a single normalized channel value using the piecewise sRGB inverse transfer function:
/// a straight line up to and including 0.04045, and `((c + 0.055) / 1.055) ^ 2.4` above it. The two
/// pieces don't quite meet: there's a jump of about 2e-9 at the cutoff, which is how the standard is
/// written and not something to fix.
/// # Example
/// ```
/// # use rgbxy::gamma::gamma_correct;
/// assert_eq!(gamma_correct(0.0), 0.0);
/// assert_eq!(gamma_correct(1.0), 1.0);
/// // mid-gray is much darker in linear light
/// assert!((gamma_correct(0.5) - 0.214).abs() <= 1e-3);
/// ```
pub fn gamma_correct(c: f64) -> f64 {
    if c > SRGB_THRESHOLD {
        ((c + SRGB_OFFSET) / SRGB_SCALE).powf(SRGB_EXPONENT)
    } else {
        c / SRGB_LINEAR_SLOPE
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_threshold_is_linear() {
        assert_eq!(gamma_correct(0.04045), 0.04045 / 12.92);
    }

    #[test]
    fn test_above_threshold_is_power_law() {
        let c = 0.040451;
        assert_eq!(gamma_correct(c), ((c + 0.055) / 1.055).powf(2.4));
        assert!(gamma_correct(c) != c / 12.92);
    }

    #[test]
    fn test_threshold_continuity() {
        let below = gamma_correct(0.04045);
        let above = ((0.04045 + 0.055) / 1.055f64).powf(2.4);
        println!("{} {}", below, above);
        assert!((above - below).abs() <= 1e-8);
        // the power law is the larger of the two at the cutoff
        assert!(above > below);
    }

    #[test]
    fn test_monotonic() {
        let mut last = gamma_correct(0.0);
        for i in 1..=1000 {
            let next = gamma_correct(f64::from(i) / 1000.0);
            assert!(next > last);
            last = next;
        }
    }

    #[test]
    fn test_endpoints_fixed() {
        assert_eq!(gamma_correct(0.0), 0.0);
        assert_eq!(gamma_correct(1.0), 1.0);
    }
}
