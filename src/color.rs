//! This file defines the [`Color`] trait: the one thing the pipeline needs from a color type coming
//! from elsewhere, which is its red, green, blue and alpha components at 16-bit precision. Anything
//! that can say that much can be placed on the chromaticity diagram.

use channel::normalize_triple;
use chromaticity::{Chromaticity, ChromaticityError};
use convert::{normalized_to_xy, try_normalized_to_xy};

/// A trait that includes any color representation that can report its components as 16-bit values,
/// 0x0000 meaning off and 0xffff meaning fully on. Whether those components are premultiplied by
/// alpha is up to the implementor: the conversion here only ever reads red, green and blue, and
/// alpha is dropped on the floor.
///
/// Only [`rgba`](#tymethod.rgba) is required. The other methods have default implementations that
/// go through the 16-bit pipeline, and may be overridden by types that know a more direct route
/// to the same numbers.
/// # Example
/// Any type from another library can be hooked up with a few lines.
///
/// ```
/// # use rgbxy::prelude::*;
/// struct Gray(u16);
///
/// impl Color for Gray {
///     fn rgba(&self) -> (u16, u16, u16, u16) {
///         (self.0, self.0, self.0, 0xffff)
///     }
/// }
///
/// let (x, y) = Gray(0x7777).to_xy();
/// // grays all sit on the white point
/// let (x_white, y_white) = rgb_to_xy(255, 255, 255);
/// assert!((x - x_white).abs() <= 1e-12);
/// assert!((y - y_white).abs() <= 1e-12);
/// ```
pub trait Color {
    /// Gets the red, green, blue and alpha components, in that order, scaled to 0-0xffff.
    fn rgba(&self) -> (u16, u16, u16, u16);

    /// Gets red, green and blue as floats between 0 and 1, ignoring alpha.
    fn normalized(&self) -> (f64, f64, f64) {
        normalize_color(self)
    }

    /// Gets the chromaticity coordinates `(x, y)` of this color. Black gives NaN in both places.
    fn to_xy(&self) -> (f64, f64) {
        let (r, g, b) = self.normalized();
        normalized_to_xy(r, g, b)
    }

    /// Gets the chromaticity of this color as a [`Chromaticity`].
    fn to_chromaticity(&self) -> Chromaticity {
        self.to_xy().into()
    }

    /// Gets the chromaticity of this color, or an error if the color is black.
    /// # Errors
    /// Returns `ChromaticityError::ZeroLuminance` if every channel is 0.
    fn try_to_chromaticity(&self) -> Result<Chromaticity, ChromaticityError> {
        let (r, g, b) = self.normalized();
        try_normalized_to_xy(r, g, b)
    }
}

/// Reads red, green and blue from any [`Color`] and maps them onto [0, 1] by dividing by 0xffff.
/// Alpha is read and discarded.
pub fn normalize_color<C: Color + ?Sized>(color: &C) -> (f64, f64, f64) {
    let (r, g, b, _a) = color.rgba();
    normalize_triple(r, g, b)
}

impl Color for [u16; 4] {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (self[0], self[1], self[2], self[3])
    }
}

impl Color for (u16, u16, u16, u16) {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        *self
    }
}

impl<'a, C: Color + ?Sized> Color for &'a C {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (**self).rgba()
    }
    fn normalized(&self) -> (f64, f64, f64) {
        (**self).normalized()
    }
}

impl<C: Color + ?Sized> Color for Box<C> {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (**self).rgba()
    }
    fn normalized(&self) -> (f64, f64, f64) {
        (**self).normalized()
    }
}
