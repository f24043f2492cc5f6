//! A module for [`RGBA64Color`], the plain 16-bit-per-channel color. This is the native shape of the
//! [`Color`] trait, and a convenient target when bridging from an image library or from hardware
//! that reports deeper samples than a byte.
//!
//! [`Color`]: ../../color/trait.Color.html

use color::Color;

/// A color with four 16-bit components, 0 meaning off and 0xffff meaning fully on. The alpha
/// component is carried along but has no effect on chromaticity.
/// # Example
/// ```
/// # use rgbxy::prelude::*;
/// let translucent_white = RGBA64Color{r: 0xffff, g: 0xffff, b: 0xffff, a: 0x4000};
/// assert_eq!(translucent_white.to_xy(), (0.3125000000000004, 0.3289473684210514));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBA64Color {
    /// The red component.
    pub r: u16,
    /// The green component.
    pub g: u16,
    /// The blue component.
    pub b: u16,
    /// The alpha component, 0xffff for opaque.
    pub a: u16,
}

impl Color for RGBA64Color {
    fn rgba(&self) -> (u16, u16, u16, u16) {
        (self.r, self.g, self.b, self.a)
    }
}

impl From<(u16, u16, u16, u16)> for RGBA64Color {
    fn from(rgba: (u16, u16, u16, u16)) -> RGBA64Color {
        RGBA64Color {
            r: rgba.0,
            g: rgba.1,
            b: rgba.2,
            a: rgba.3,
        }
    }
}

impl From<[u16; 4]> for RGBA64Color {
    fn from(rgba: [u16; 4]) -> RGBA64Color {
        RGBA64Color {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}
