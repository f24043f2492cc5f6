//! This module simply brings the most common rgbxy functionality under a single namespace, to
//! prevent excessive imports. The prelude includes the [`Color`] trait, every color type, the
//! [`Chromaticity`] result type, both error types and the conversion entry points. The individual
//! pipeline stages (normalizing, gamma correction, the XYZ matrix) are not included.
//!
//! [`Color`]: ../color/trait.Color.html
//! [`Chromaticity`]: ../chromaticity/struct.Chromaticity.html

pub use chromaticity::{Chromaticity, ChromaticityError};
pub use color::Color;
pub use colors::{RGBA64Color, RGBAColor, RGBColor};
pub use convert::{
    color_to_xy, normalized_to_xy, rgb_to_xy, try_color_to_xy, try_normalized_to_xy,
    try_rgb_to_xy,
};
pub use csscolor::RGBParseError;
pub use xyz::XYZColor;
