//! This module defines [`XYZColor`], a point in the CIE 1931 XYZ color space, and the third stage of
//! the pipeline that produces one from linear RGB.

use chromaticity::{Chromaticity, ChromaticityError};
use consts::RGB_TO_XYZ;

/// A point in the CIE 1931 XYZ color space. For anything this crate produces all three components
/// are non-negative, and `y` is the relative luminance of the color: white is very close to 1.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X tristimulus value.
    pub x: f64,
    /// The Y tristimulus value, or luminance.
    pub y: f64,
    /// The Z tristimulus value.
    pub z: f64,
}

impl XYZColor {
    /// The sum X + Y + Z. Projecting onto the chromaticity diagram divides by this.
    pub fn sum(&self) -> f64 {
        self.x + self.y + self.z
    }

    /// Projects onto the chromaticity diagram, throwing luminance away. Pure black has nowhere to go,
    /// and like any other float division by zero it comes out as NaN in both coordinates: use
    /// [`try_chromaticity`](#method.try_chromaticity) to get an error instead.
    /// # Example
    /// ```
    /// # use rgbxy::xyz::XYZColor;
    /// let xyz = XYZColor{x: 0.25, y: 0.5, z: 0.25};
    /// let xy = xyz.chromaticity();
    /// assert_eq!((xy.x, xy.y), (0.25, 0.5));
    /// let black = XYZColor{x: 0., y: 0., z: 0.};
    /// assert!(!black.chromaticity().is_defined());
    /// ```
    pub fn chromaticity(&self) -> Chromaticity {
        let sum = self.sum();
        Chromaticity {
            x: self.x / sum,
            y: self.y / sum,
        }
    }

    /// Like [`chromaticity`](#method.chromaticity), but reports the degenerate black case.
    /// # Errors
    /// Returns `ChromaticityError::ZeroLuminance` if X + Y + Z is zero.
    pub fn try_chromaticity(&self) -> Result<Chromaticity, ChromaticityError> {
        if self.sum() == 0.0 {
            Err(ChromaticityError::ZeroLuminance)
        } else {
            Ok(self.chromaticity())
        }
    }
}

/// Applies the fixed RGB to XYZ matrix to three *linearized* channel values. Each row is summed in
/// channel order, red first.
/// # Example
/// ```
/// # use rgbxy::xyz::linear_rgb_to_xyz;
/// let red = linear_rgb_to_xyz(1., 0., 0.);
/// assert_eq!(red.z, 0.);
/// assert_eq!(red.x, 0.6491852651246980);
/// ```
pub fn linear_rgb_to_xyz(r: f64, g: f64, b: f64) -> XYZColor {
    let m = &*RGB_TO_XYZ;
    let row = |i: usize| r * m[[i, 0]] + g * m[[i, 1]] + b * m[[i, 2]];
    XYZColor {
        x: row(0),
        y: row(1),
        z: row(2),
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_primaries_pick_columns() {
        let green = linear_rgb_to_xyz(0., 1., 0.);
        assert_eq!(green.x, 0.1034883891428110);
        assert_eq!(green.y, 0.7433166037561910);
        assert_eq!(green.z, 0.0530940431254422);
        let blue = linear_rgb_to_xyz(0., 0., 1.);
        assert_eq!(blue.x, 0.1973263457324920);
        assert_eq!(blue.y, 0.0226234026954449);
        assert_eq!(blue.z, 1.0369059568745600);
    }

    #[test]
    fn test_black_maps_to_origin() {
        let black = linear_rgb_to_xyz(0., 0., 0.);
        assert_eq!(black, XYZColor{x: 0., y: 0., z: 0.});
        assert_eq!(black.sum(), 0.);
    }

    #[test]
    fn test_linearity() {
        let a = linear_rgb_to_xyz(0.2, 0.4, 0.1);
        let b = linear_rgb_to_xyz(0.4, 0.8, 0.2);
        assert!((b.x - 2. * a.x).abs() <= 1e-12);
        assert!((b.y - 2. * a.y).abs() <= 1e-12);
        assert!((b.z - 2. * a.z).abs() <= 1e-12);
    }

    #[test]
    fn test_try_chromaticity_black() {
        let black = XYZColor{x: 0., y: 0., z: 0.};
        assert_eq!(black.try_chromaticity(), Err(ChromaticityError::ZeroLuminance));
        let xy = black.chromaticity();
        assert!(xy.x.is_nan());
        assert!(xy.y.is_nan());
    }

    #[test]
    fn test_try_chromaticity_matches_plain() {
        let xyz = linear_rgb_to_xyz(0.3, 0.6, 0.9);
        assert_eq!(xyz.try_chromaticity(), Ok(xyz.chromaticity()));
    }
}
