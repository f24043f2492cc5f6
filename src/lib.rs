//! rgbxy turns device RGB into CIE 1931 chromaticity coordinates (x, y), the color language of most
//! smart lights. A light that takes xy wants to know *where* on the chromaticity diagram to sit and
//! takes brightness separately, so converting RGB means throwing luminance away carefully: first
//! undoing the sRGB gamma curve, then moving to XYZ with a fixed matrix, then projecting.
//!
//! Colors come in either as bytes ([`rgb_to_xy`], [`RGBColor`]) or as anything implementing the
//! [`Color`] trait, which only asks for 16-bit RGBA components ([`color_to_xy`]). Both routes give
//! bit-identical answers for the same proportional input.
//!
//! ```
//! # use rgbxy::prelude::*;
//! let (x, y) = rgb_to_xy(255, 255, 255);
//! assert_eq!((x, y), (0.3125000000000004, 0.3289473684210514));
//! ```
//!
//! Pure black has no chromaticity. The plain functions return NaN for it; every one of them has a
//! `try_` twin that returns [`ChromaticityError::ZeroLuminance`] instead.
//!
//! [`rgb_to_xy`]: convert/fn.rgb_to_xy.html
//! [`color_to_xy`]: convert/fn.color_to_xy.html
//! [`RGBColor`]: colors/rgbcolor/struct.RGBColor.html
//! [`Color`]: color/trait.Color.html
//! [`ChromaticityError::ZeroLuminance`]: chromaticity/enum.ChromaticityError.html

#![doc(html_root_url = "https://docs.rs/rgbxy/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but the matrix literals are copied digit for digit and
// separators would only make them harder to check
#![allow(clippy::unreadable_literal)]

extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;

pub mod channel;
pub mod chromaticity;
pub mod color;
pub mod colors;
pub mod consts;
pub mod convert;
mod csscolor;
pub mod gamma;
pub mod prelude;
pub mod xyz;

pub use csscolor::RGBParseError;
