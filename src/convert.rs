//! The conversion pipeline, end to end: normalize, linearize, transform to XYZ, project. The
//! functions here are the main entry points of the crate. They are all pure and can be called from
//! any number of threads at once.
//!
//! Each conversion comes in two flavors that differ only in how pure black is handled. Black has no
//! chromaticity. The plain functions let the division by zero happen and hand back NaN for both
//! coordinates, matching what a straightforward float implementation does. The `try_` functions
//! check for it and return [`ChromaticityError::ZeroLuminance`] instead.

use channel::normalize_triple;
use chromaticity::{Chromaticity, ChromaticityError};
use color::{normalize_color, Color};
use gamma::gamma_correct;
use xyz::{linear_rgb_to_xyz, XYZColor};

/// Normalizes three byte channels onto [0, 1] by dividing by 255.
pub fn normalize_rgb(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    normalize_triple(r, g, b)
}

// the shared middle of every entry point
fn normalized_to_xyz(r: f64, g: f64, b: f64) -> XYZColor {
    linear_rgb_to_xyz(gamma_correct(r), gamma_correct(g), gamma_correct(b))
}

/// Gets the chromaticity coordinates `(x, y)` of three normalized, gamma-encoded channel values,
/// each between 0 and 1. Black (all zeros) gives `(NaN, NaN)`.
/// # Example
/// ```
/// # use rgbxy::prelude::*;
/// let (x, y) = normalized_to_xy(1., 1., 1.);
/// assert_eq!((x, y), (0.3125000000000004, 0.3289473684210514));
/// ```
pub fn normalized_to_xy(r: f64, g: f64, b: f64) -> (f64, f64) {
    normalized_to_xyz(r, g, b).chromaticity().into()
}

/// Like [`normalized_to_xy`], but returns an error for black.
/// # Errors
/// Returns `ChromaticityError::ZeroLuminance` if all three channels are 0.
pub fn try_normalized_to_xy(r: f64, g: f64, b: f64) -> Result<Chromaticity, ChromaticityError> {
    normalized_to_xyz(r, g, b).try_chromaticity()
}

/// Gets the chromaticity coordinates `(x, y)` of a color given as three bytes. Black gives
/// `(NaN, NaN)`.
/// # Example
/// Convert the primaries of a light strip.
///
/// ```
/// # use rgbxy::prelude::*;
/// assert_eq!(rgb_to_xy(255, 0, 0), (0.7350000000000004, 0.26499999999999957));
/// assert_eq!(rgb_to_xy(0, 255, 0), (0.11499999999999991, 0.8260000000000001));
/// assert_eq!(rgb_to_xy(0, 0, 255), (0.157, 0.017999999999999964));
/// ```
pub fn rgb_to_xy(r: u8, g: u8, b: u8) -> (f64, f64) {
    let (r_n, g_n, b_n) = normalize_rgb(r, g, b);
    normalized_to_xy(r_n, g_n, b_n)
}

/// Like [`rgb_to_xy`], but returns an error for black.
/// # Errors
/// Returns `ChromaticityError::ZeroLuminance` for `(0, 0, 0)`.
/// # Example
/// ```
/// # use rgbxy::prelude::*;
/// assert_eq!(try_rgb_to_xy(0, 0, 0), Err(ChromaticityError::ZeroLuminance));
/// assert!(try_rgb_to_xy(0, 0, 1).is_ok());
/// ```
pub fn try_rgb_to_xy(r: u8, g: u8, b: u8) -> Result<Chromaticity, ChromaticityError> {
    let (r_n, g_n, b_n) = normalize_rgb(r, g, b);
    try_normalized_to_xy(r_n, g_n, b_n)
}

/// Gets the chromaticity coordinates `(x, y)` of any [`Color`], reading its 16-bit red, green and
/// blue and ignoring alpha. Black gives `(NaN, NaN)`.
/// # Example
/// ```
/// # use rgbxy::prelude::*;
/// let red = RGBA64Color{r: 0xffff, g: 0, b: 0, a: 0xffff};
/// assert_eq!(color_to_xy(&red), rgb_to_xy(255, 0, 0));
/// ```
pub fn color_to_xy<C: Color + ?Sized>(color: &C) -> (f64, f64) {
    let (r, g, b) = normalize_color(color);
    normalized_to_xy(r, g, b)
}

/// Like [`color_to_xy`], but returns an error for black.
/// # Errors
/// Returns `ChromaticityError::ZeroLuminance` if red, green and blue are all 0.
pub fn try_color_to_xy<C: Color + ?Sized>(color: &C) -> Result<Chromaticity, ChromaticityError> {
    let (r, g, b) = normalize_color(color);
    try_normalized_to_xy(r, g, b)
}
