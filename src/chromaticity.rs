//! This module contains [`Chromaticity`], a point on the CIE 1931 xy diagram, which is what the whole
//! crate exists to produce. Two colors that differ only in brightness share a chromaticity, which is
//! exactly what a smart bulb wants: it takes brightness on a separate channel.

use float_cmp::ApproxEqUlps;
use std::error::Error;
use std::fmt;

/// The number of units in the last place two chromaticities may differ by and still be considered
/// the same color in [`Chromaticity::approx_equal`].
const ULPS_TOLERANCE: i64 = 4;

/// A pair of chromaticity coordinates: the location of a color's hue and saturation on the CIE 1931
/// diagram, independent of how bright it is. For any real color both lie in (0, 1) and `x + y < 1`.
/// The one exception is the chromaticity of pure black, which doesn't exist: that is represented as
/// NaN in both coordinates (see [`is_defined`](#method.is_defined)).
/// # Example
/// Lights on the same point of the diagram look like the same color at any brightness.
///
/// ```
/// # use rgbxy::prelude::*;
/// let dim: Chromaticity = RGBColor{r: 60, g: 0, b: 0}.into();
/// let bright: Chromaticity = RGBColor{r: 255, g: 0, b: 0}.into();
/// assert!(dim.approx_equal(&bright));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chromaticity {
    /// The x coordinate: X / (X + Y + Z).
    pub x: f64,
    /// The y coordinate: Y / (X + Y + Z).
    pub y: f64,
}

impl Chromaticity {
    /// The implied third coordinate, `1 - x - y`, which is Z / (X + Y + Z).
    pub fn z(&self) -> f64 {
        1.0 - self.x - self.y
    }

    /// Returns `false` for the placeholder chromaticity of pure black, and `true` for anything else.
    pub fn is_defined(&self) -> bool {
        !(self.x.is_nan() || self.y.is_nan())
    }

    /// Returns `true` if both coordinates agree to within a few floating-point steps. Undefined
    /// chromaticities are never approximately equal to anything, including each other.
    pub fn approx_equal(&self, other: &Chromaticity) -> bool {
        self.is_defined()
            && other.is_defined()
            && self.x.approx_eq_ulps(&other.x, ULPS_TOLERANCE)
            && self.y.approx_eq_ulps(&other.y, ULPS_TOLERANCE)
    }
}

impl From<Chromaticity> for (f64, f64) {
    fn from(xy: Chromaticity) -> (f64, f64) {
        (xy.x, xy.y)
    }
}

impl From<(f64, f64)> for Chromaticity {
    fn from(xy: (f64, f64)) -> Chromaticity {
        Chromaticity { x: xy.0, y: xy.1 }
    }
}

/// An error in projecting a color onto the chromaticity diagram.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum ChromaticityError {
    /// X + Y + Z was zero, which only happens for pure black. Black has no hue, so it has no
    /// chromaticity either.
    ZeroLuminance,
}

impl fmt::Display for ChromaticityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ChromaticityError::ZeroLuminance => write!(f, "black has no chromaticity"),
        }
    }
}

impl Error for ChromaticityError {}
