//! This module contains the color types that come with the crate, all of which implement
//! [`Color`]. For convenience, each type is imported into this module's namespace directly.
//!
//! [`Color`]: ../color/trait.Color.html
pub mod rgba64color;
pub mod rgbcolor;

// for convenience, use this namespace for the color objects
pub use self::rgba64color::RGBA64Color;
pub use self::rgbcolor::{RGBAColor, RGBColor};
