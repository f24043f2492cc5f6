//! This module holds the fixed numbers the conversion pipeline is built on: the sRGB companding
//! constants and the matrix taking linear RGB to CIE 1931 XYZ. None of these may be tuned. Changing
//! any digit changes the coordinates handed to every light that has ever been driven by this crate,
//! so they are kept as literals in one place where they can be checked against their sources.

use rulinalg::matrix::Matrix;

/// Normalized values at or below this cutoff lie on the linear toe of the sRGB curve.
pub const SRGB_THRESHOLD: f64 = 0.04045;
/// Slope divisor of the linear toe.
pub const SRGB_LINEAR_SLOPE: f64 = 12.92;
/// Offset of the power-law segment.
pub const SRGB_OFFSET: f64 = 0.055;
/// Scale of the power-law segment. Written out as a literal rather than `1.0 + SRGB_OFFSET`: the
/// float sum is not guaranteed to land on the same bits.
pub const SRGB_SCALE: f64 = 1.055;
/// Exponent of the power-law segment.
pub const SRGB_EXPONENT: f64 = 2.4;

lazy_static! {
    /// The matrix from linearized RGB to XYZ, one row per tristimulus value and one column per
    /// channel. These are wide-gamut primaries, *not* the usual sRGB/D65 matrix: for the source see
    /// [this gist](https://gist.github.com/popcorn245/30afa0f98eea1c2fd34d). Note how the red
    /// primary contributes nothing to Z.
    ///
    /// # Example
    /// ```
    /// # use rgbxy::consts::RGB_TO_XYZ;
    /// // white lands on the row sums
    /// let y_white = RGB_TO_XYZ[[1, 0]] + RGB_TO_XYZ[[1, 1]] + RGB_TO_XYZ[[1, 2]];
    /// assert!((y_white - 1.).abs() <= 1e-12);
    /// assert_eq!(RGB_TO_XYZ[[2, 0]], 0.0);
    /// ```
    pub static ref RGB_TO_XYZ: Matrix<f64> = matrix![
        0.6491852651246980, 0.1034883891428110, 0.1973263457324920;
        0.2340599935483600, 0.7433166037561910, 0.0226234026954449;
        0.0000000000000000, 0.0530940431254422, 1.0369059568745600
    ];
}
