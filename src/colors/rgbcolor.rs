//! This module holds the 8-bit color types: [`RGBColor`], the byte triple most lighting APIs and
//! config files hand around, and [`RGBAColor`], the same with an alpha byte. Both can be parsed from
//! hex codes and CSS `rgb()` notation.

use std::fmt;
use std::str::FromStr;

use chromaticity::{Chromaticity, ChromaticityError};
use color::Color;
use convert::{normalize_rgb, rgb_to_xy, try_rgb_to_xy};
use csscolor::{parse_color_str, RGBParseError};

/// Scales a byte up to 16 bits so that 0xff becomes 0xffff.
fn widen(c: u8) -> u16 {
    u16::from(c) * 0x101
}

/// A color given as three bytes, 0 meaning off and 255 meaning fully on. This is what most lights,
/// LED strips and color pickers speak.
/// # Example
/// ```
/// # use rgbxy::prelude::*;
/// let orange: RGBColor = "#ff8000".parse().unwrap();
/// assert_eq!(orange, RGBColor{r: 255, g: 128, b: 0});
/// assert_eq!(orange.to_xy(), rgb_to_xy(255, 128, 0));
/// assert_eq!(orange.to_string(), "#FF8000");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
}

impl Color for RGBColor {
    /// Widens each byte to 16 bits, with full opacity.
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (widen(self.r), widen(self.g), widen(self.b), 0xffff)
    }
    // bytes take the byte pipeline directly instead of a round trip through 16 bits
    fn normalized(&self) -> (f64, f64, f64) {
        normalize_rgb(self.r, self.g, self.b)
    }
    fn to_xy(&self) -> (f64, f64) {
        rgb_to_xy(self.r, self.g, self.b)
    }
    fn try_to_chromaticity(&self) -> Result<Chromaticity, ChromaticityError> {
        try_rgb_to_xy(self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for RGBColor {
    fn from(rgb: (u8, u8, u8)) -> RGBColor {
        RGBColor {
            r: rgb.0,
            g: rgb.1,
            b: rgb.2,
        }
    }
}

impl From<RGBColor> for (u8, u8, u8) {
    fn from(val: RGBColor) -> Self {
        (val.r, val.g, val.b)
    }
}

impl From<RGBColor> for Chromaticity {
    /// Converts through the byte pipeline. Black becomes an undefined chromaticity.
    fn from(val: RGBColor) -> Self {
        val.to_chromaticity()
    }
}

impl FromStr for RGBColor {
    type Err = RGBParseError;

    /// Parses "#rgb", "#rrggbb" or "rgb(r, g, b)". Forms with an alpha component are rejected: use
    /// [`RGBAColor`] for those.
    fn from_str(s: &str) -> Result<RGBColor, RGBParseError> {
        let trimmed = s.trim();
        match parse_color_str(trimmed)? {
            (r, g, b, None) => Ok(RGBColor { r, g, b }),
            (_, _, _, Some(_)) => {
                if trimmed.starts_with('#') {
                    Err(RGBParseError::InvalidHexSyntax)
                } else {
                    Err(RGBParseError::InvalidFunctionSyntax)
                }
            }
        }
    }
}

impl fmt::Display for RGBColor {
    /// Writes the color as an uppercase hex code, like "#FF8000".
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A byte triple with an alpha byte. Alpha has no effect on chromaticity: it exists so that colors
/// from sources that carry one can be taken as they come.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBAColor {
    /// The red component.
    pub r: u8,
    /// The green component.
    pub g: u8,
    /// The blue component.
    pub b: u8,
    /// The alpha component, 255 for opaque.
    pub a: u8,
}

impl Color for RGBAColor {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (widen(self.r), widen(self.g), widen(self.b), widen(self.a))
    }
}

impl From<RGBColor> for RGBAColor {
    /// Makes an opaque color.
    fn from(rgb: RGBColor) -> RGBAColor {
        RGBAColor {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            a: 255,
        }
    }
}

impl FromStr for RGBAColor {
    type Err = RGBParseError;

    /// Parses every notation [`RGBColor`] does, plus "#rrggbbaa" and "rgba(r, g, b, a)". Without an
    /// alpha component the color is opaque.
    fn from_str(s: &str) -> Result<RGBAColor, RGBParseError> {
        let (r, g, b, a) = parse_color_str(s)?;
        Ok(RGBAColor {
            r,
            g,
            b,
            a: a.unwrap_or(255),
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use color::normalize_color;

    #[test]
    fn test_notations_agree() {
        let red = RGBColor{r: 255, g: 0, b: 0};
        assert_eq!("#ff0000".parse::<RGBColor>(), Ok(red));
        assert_eq!("#f00".parse::<RGBColor>(), Ok(red));
        assert_eq!("rgb(255, 0, 0)".parse::<RGBColor>(), Ok(red));
        assert_eq!(RGBColor::from((255u8, 0u8, 0u8)), red);
    }

    #[test]
    fn test_alpha_rejected() {
        assert_eq!("#ff000080".parse::<RGBColor>(), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(
            "rgba(255, 0, 0, 128)".parse::<RGBColor>(),
            Err(RGBParseError::InvalidFunctionSyntax)
        );
    }

    #[test]
    fn test_rgba_parsing() {
        assert_eq!(
            "#ff000080".parse::<RGBAColor>(),
            Ok(RGBAColor{r: 255, g: 0, b: 0, a: 128})
        );
        assert_eq!(
            "rgb(1, 2, 3)".parse::<RGBAColor>(),
            Ok(RGBAColor{r: 1, g: 2, b: 3, a: 255})
        );
        assert_eq!("rgba(1, 2, 3, 300)".parse::<RGBAColor>(), Err(RGBParseError::OutOfRange));
    }

    #[test]
    fn test_display_round_trip() {
        let c = RGBColor{r: 18, g: 171, b: 5};
        assert_eq!(c.to_string(), "#12AB05");
        assert_eq!(c.to_string().parse::<RGBColor>(), Ok(c));
    }

    #[test]
    fn test_byte_route_matches_wide_route() {
        let c = RGBColor{r: 200, g: 17, b: 90};
        assert_eq!(c.normalized(), normalize_color(&c));
        assert_eq!(c.to_xy(), c.rgba().to_xy());
    }

    #[test]
    fn test_rgba_alpha_independence() {
        let opaque = RGBAColor{r: 30, g: 60, b: 90, a: 255};
        for a in 0..=255u8 {
            let c = RGBAColor{a, ..opaque};
            assert_eq!(c.to_xy(), opaque.to_xy());
        }
        assert_eq!(opaque.to_xy(), RGBColor{r: 30, g: 60, b: 90}.to_xy());
    }

    #[test]
    fn test_chromaticity_from_rgb() {
        let xy: Chromaticity = RGBColor{r: 0, g: 0, b: 255}.into();
        assert_eq!(xy, Chromaticity{x: 0.157, y: 0.017999999999999964});
        let black: Chromaticity = RGBColor{r: 0, g: 0, b: 0}.into();
        assert!(!black.is_defined());
        assert_eq!(
            RGBColor{r: 0, g: 0, b: 0}.try_to_chromaticity(),
            Err(ChromaticityError::ZeroLuminance)
        );
    }
}
