//! This file parses the two text notations device colors usually arrive in: HTML hex codes like
//! "#ff8000" and CSS functional notation like "rgb(255, 128, 0)". Its end goal is the
//! implementation of `FromStr` for [`RGBColor`] and [`RGBAColor`], although the specific `impl`
//! blocks are in their respective source files. Only integer components 0-255 are accepted in
//! functional notation: percentages and floats are not, as no lighting config writes them.
//!
//! [`RGBColor`]: ../colors/rgbcolor/struct.RGBColor.html
//! [`RGBAColor`]: ../colors/rgbcolor/struct.RGBAColor.html

use regex::Regex;
use std::error::Error;
use std::fmt;

lazy_static! {
    static ref HEX_RE: Regex =
        Regex::new(r"^#([[:xdigit:]]{3}|[[:xdigit:]]{6}|[[:xdigit:]]{8})$").expect("valid regex");
    static ref FUNC_RE: Regex = Regex::new(
        r"^(rgba?)\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*(?:,\s*([0-9]{1,3})\s*)?\)$"
    ).expect("valid regex");
}

/// An error in parsing a color string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum RGBParseError {
    /// The string started with '#' but wasn't 3, 6 or 8 hex digits, or had an alpha component where
    /// none is allowed.
    InvalidHexSyntax,
    /// The string wasn't a well-formed `rgb(r, g, b)` or `rgba(r, g, b, a)`, or used the form with
    /// alpha where none is allowed.
    InvalidFunctionSyntax,
    /// A component in functional notation was larger than 255.
    OutOfRange,
}

impl fmt::Display for RGBParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match *self {
            RGBParseError::InvalidHexSyntax => "invalid hex color syntax",
            RGBParseError::InvalidFunctionSyntax => "invalid rgb() color syntax",
            RGBParseError::OutOfRange => "color component out of range 0-255",
        };
        write!(f, "{}", msg)
    }
}

impl Error for RGBParseError {}

/// Red, green, blue, and alpha if the notation carried one.
pub(crate) type ParsedRGBA = (u8, u8, u8, Option<u8>);

/// Parses "#rgb", "#rrggbb" or "#rrggbbaa", case-insensitively. Each digit of the short form is
/// doubled, so "#f80" is "#ff8800".
pub(crate) fn parse_hex_str(hex: &str) -> Result<ParsedRGBA, RGBParseError> {
    let digits = match HEX_RE.captures(hex).and_then(|caps| caps.get(1)) {
        Some(m) => m.as_str(),
        None => return Err(RGBParseError::InvalidHexSyntax),
    };
    // it's easier to do math on the hex value than it is to slice strings
    let mut full_num =
        u32::from_str_radix(digits, 16).map_err(|_| RGBParseError::InvalidHexSyntax)?;
    if digits.len() == 3 {
        let b = (full_num & 0xf) as u8;
        let g = ((full_num >> 4) & 0xf) as u8;
        let r = ((full_num >> 8) & 0xf) as u8;
        return Ok((r * 17, g * 17, b * 17, None));
    }
    let a = if digits.len() == 8 {
        let a = (full_num & 0xff) as u8;
        full_num >>= 8;
        Some(a)
    } else {
        None
    };
    // now guaranteed to be rrggbb
    let b = (full_num & 0xff) as u8;
    let g = ((full_num >> 8) & 0xff) as u8;
    let r = ((full_num >> 16) & 0xff) as u8;
    Ok((r, g, b, a))
}

fn parse_component(num: &str) -> Result<u8, RGBParseError> {
    // at most three digits, so u16 can't overflow and values past 255 are caught below
    let val: u16 = num.parse().map_err(|_| RGBParseError::InvalidFunctionSyntax)?;
    if val > 255 {
        Err(RGBParseError::OutOfRange)
    } else {
        Ok(val as u8)
    }
}

/// Parses "rgb(r, g, b)" or "rgba(r, g, b, a)" with integer components, allowing any whitespace
/// around the numbers. The function name has to match the number of components.
pub(crate) fn parse_func_str(func: &str) -> Result<ParsedRGBA, RGBParseError> {
    let caps = match FUNC_RE.captures(func) {
        Some(caps) => caps,
        None => return Err(RGBParseError::InvalidFunctionSyntax),
    };
    let has_alpha = &caps[1] == "rgba";
    let alpha = caps.get(5);
    if has_alpha != alpha.is_some() {
        return Err(RGBParseError::InvalidFunctionSyntax);
    }
    let r = parse_component(&caps[2])?;
    let g = parse_component(&caps[3])?;
    let b = parse_component(&caps[4])?;
    let a = match alpha {
        Some(m) => Some(parse_component(m.as_str())?),
        None => None,
    };
    Ok((r, g, b, a))
}

/// Parses either notation, deciding by the first character. Surrounding whitespace is ignored.
pub(crate) fn parse_color_str(s: &str) -> Result<ParsedRGBA, RGBParseError> {
    let trimmed = s.trim();
    if trimmed.starts_with('#') {
        parse_hex_str(trimmed)
    } else {
        parse_func_str(trimmed)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_hex_str("#ff8000"), Ok((255, 128, 0, None)));
        assert_eq!(parse_hex_str("#FF8000"), Ok((255, 128, 0, None)));
        assert_eq!(parse_hex_str("#f80"), Ok((255, 136, 0, None)));
        assert_eq!(parse_hex_str("#ff800040"), Ok((255, 128, 0, Some(64))));
        assert_eq!(parse_hex_str("#000000"), Ok((0, 0, 0, None)));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_hex_str("ff8000"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(parse_hex_str("#ff80"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(parse_hex_str("#gg8000"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(parse_hex_str("#ff8000ff00"), Err(RGBParseError::InvalidHexSyntax));
        assert_eq!(parse_hex_str("#"), Err(RGBParseError::InvalidHexSyntax));
    }

    #[test]
    fn test_func_parsing() {
        assert_eq!(parse_func_str("rgb(255, 128, 0)"), Ok((255, 128, 0, None)));
        assert_eq!(parse_func_str("rgb(255,128,0)"), Ok((255, 128, 0, None)));
        assert_eq!(parse_func_str("rgb(  7 ,8,  9  )"), Ok((7, 8, 9, None)));
        assert_eq!(parse_func_str("rgba(1, 2, 3, 4)"), Ok((1, 2, 3, Some(4))));
    }

    #[test]
    fn test_func_errors() {
        assert_eq!(parse_func_str("rgb(256, 0, 0)"), Err(RGBParseError::OutOfRange));
        assert_eq!(parse_func_str("rgba(0, 0, 0, 999)"), Err(RGBParseError::OutOfRange));
        assert_eq!(parse_func_str("rgb(1, 2, 3, 4)"), Err(RGBParseError::InvalidFunctionSyntax));
        assert_eq!(parse_func_str("rgba(1, 2, 3)"), Err(RGBParseError::InvalidFunctionSyntax));
        assert_eq!(parse_func_str("rgB(1, 2, 3)"), Err(RGBParseError::InvalidFunctionSyntax));
        assert_eq!(parse_func_str("rgb(1, 2)"), Err(RGBParseError::InvalidFunctionSyntax));
        assert_eq!(parse_func_str("rgb(-1, 2, 3)"), Err(RGBParseError::InvalidFunctionSyntax));
        assert_eq!(parse_func_str("rgb(1000, 2, 3)"), Err(RGBParseError::InvalidFunctionSyntax));
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(parse_color_str("  #00ff00 "), Ok((0, 255, 0, None)));
        assert_eq!(parse_color_str("rgb(0, 255, 0)\n"), Ok((0, 255, 0, None)));
        assert_eq!(parse_color_str("green"), Err(RGBParseError::InvalidFunctionSyntax));
    }
}
