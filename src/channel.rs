//! This module is the first stage of the pipeline: it turns integer channel values into floats
//! between 0 and 1. A channel is any unsigned integer type whose full scale is its own maximum value,
//! so `255u8` and `65535u16` both mean "fully on".

use num::{Bounded, Unsigned};

/// Describes an integer type that can hold a single color channel, described using the common
/// numeric traits in [`num`]. Anything unsigned, bounded and losslessly convertible to `f64` counts:
/// in practice, `u8`, `u16` and `u32`. This has no added functionality: it's just for convenience.
pub trait Channel: Unsigned + Bounded + Into<f64> + Copy {}

impl<T: Unsigned + Bounded + Into<f64> + Copy> Channel for T {}

/// Maps a channel value onto the range [0, 1] by dividing by the largest value of its type. Every
/// representable value has a well-defined result, so this never fails.
/// # Example
/// ```
/// # use rgbxy::channel::normalize;
/// assert_eq!(normalize(255u8), 1.0);
/// assert_eq!(normalize(0u16), 0.0);
/// assert!((normalize(0x8000u16) - 0.5).abs() <= 1e-4);
/// ```
pub fn normalize<T: Channel>(value: T) -> f64 {
    let value: f64 = value.into();
    let max: f64 = T::max_value().into();
    value / max
}

/// Normalizes three channels of the same width at once.
pub fn normalize_triple<T: Channel>(r: T, g: T, b: T) -> (f64, f64, f64) {
    (normalize(r), normalize(g), normalize(b))
}
