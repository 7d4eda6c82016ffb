//! This file defines the two color representations used throughout the crate: [`HSLColor`], the
//! canonical value every palette transform works on, and [`RGBColor`], the 8-bit sRGB view used for
//! display as `#RRGGBB` hex codes. HSL here is the usual web HSL: hue is an angle in degrees, while
//! saturation and lightness are percentages from 0 to 100 (not fractions, unlike most color
//! libraries), because that is how the palettes are described and displayed.
//!
//! Conversion from HSL to hex is exact and deterministic: hue wraps around the circle, saturation and
//! lightness are clamped into range, and each channel is rounded half away from zero. Conversion the
//! other way is limited by the 8-bit channels, so a round trip only holds to within rounding.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::bound::Bound;
use crate::coord::Coord;

lazy_static! {
    static ref HEX_RE: Regex = Regex::new(r"^#?([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$")
        .expect("hex code pattern is valid");
    static ref HSL_RE: Regex = Regex::new(
        r"^(?i)hsl\(\s*(-?\d+(?:\.\d+)?)\s*,\s*(-?\d+(?:\.\d+)?)%?\s*,\s*(-?\d+(?:\.\d+)?)%?\s*\)$"
    )
    .expect("hsl function pattern is valid");
}

/// An error in parsing a color from a string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum ColorParseError {
    /// The string was not a hex code of the form `#RGB` or `#RRGGBB` (the `#` is optional).
    InvalidHexCode,
    /// The string looked like, but was not, a valid `hsl(h, s, l)` function.
    InvalidHSLSyntax,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ColorParseError::InvalidHexCode => write!(f, "invalid hex color code"),
            ColorParseError::InvalidHSLSyntax => write!(f, "invalid hsl() color syntax"),
        }
    }
}

impl Error for ColorParseError {}

/// A color in 8-bit sRGB, the form that ends up on screen. Its `Display` is the uppercase hex code.
/// # Example
/// ```
/// # use hashtint::color::RGBColor;
/// let rgb = RGBColor::from_hex_code("#aa1660").unwrap();
/// assert_eq!((rgb.r, rgb.g, rgb.b), (170, 22, 96));
/// assert_eq!(rgb.to_string(), "#AA1660");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red channel.
    pub r: u8,
    /// The green channel.
    pub g: u8,
    /// The blue channel.
    pub b: u8,
}

impl RGBColor {
    /// Parses a hex code, either `#RRGGBB` or the shorthand `#RGB`, in either case. The leading `#` may
    /// be left off.
    pub fn from_hex_code(hex: &str) -> Result<RGBColor, ColorParseError> {
        let caps = HEX_RE
            .captures(hex.trim())
            .ok_or(ColorParseError::InvalidHexCode)?;
        let digits = &caps[1];
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidHexCode);
        if digits.len() == 3 {
            // shorthand: each digit is doubled, so "a" means "aa"
            Ok(RGBColor {
                r: channel(&digits[0..1])? * 17,
                g: channel(&digits[1..2])? * 17,
                b: channel(&digits[2..3])? * 17,
            })
        } else {
            Ok(RGBColor {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            })
        }
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for RGBColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<RGBColor, ColorParseError> {
        RGBColor::from_hex_code(s)
    }
}

/// A color in the HSL color space. This is the value every palette transform consumes and produces;
/// hex codes are only a view of it.
///
/// None of the components are validated on construction: hue may leave 0-360 and the percentages may
/// leave 0-100 while a transform is working. Everything is brought back into range when the color is
/// displayed.
/// # Example
/// ```
/// # use hashtint::prelude::*;
/// let pink = HSLColor{h: 330., s: 77., l: 38.};
/// assert_eq!(pink.to_hex(), "#AC1661");
/// assert_eq!(pink.to_string(), "hsl(330,77,38)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSLColor {
    /// The hue, as an angle in degrees. Circular: 360 is the same as 0.
    pub h: f64,
    /// The saturation, as a percentage from 0 (gray) to 100 (fully saturated).
    pub s: f64,
    /// The lightness, as a percentage from 0 (black) through 50 (pure hue) to 100 (white).
    pub l: f64,
}

impl HSLColor {
    /// Parses a hex code into HSL. Gray colors get a hue of 0.
    /// # Example
    /// ```
    /// # use hashtint::prelude::*;
    /// let pink = HSLColor::from_hex_code("#AA1660").unwrap();
    /// assert!((pink.h - 330.).abs() < 1e-9);
    /// assert!(HSLColor::from_hex_code("#AA166").is_err());
    /// ```
    pub fn from_hex_code(hex: &str) -> Result<HSLColor, ColorParseError> {
        RGBColor::from_hex_code(hex).map(HSLColor::from)
    }

    /// Converts to 8-bit sRGB, wrapping the hue and clamping saturation and lightness first.
    pub fn to_rgb(&self) -> RGBColor {
        let bounded = self.clamped();
        let h = bounded.h.rem_euclid(360.0);
        let s = bounded.s / 100.0;
        let l = bounded.l / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        // the second-largest channel before the lightness offset is added
        let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let (r1, g1, b1) = if h < 60.0 {
            (chroma, x, 0.0)
        } else if h < 120.0 {
            (x, chroma, 0.0)
        } else if h < 180.0 {
            (0.0, chroma, x)
        } else if h < 240.0 {
            (0.0, x, chroma)
        } else if h < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };
        let offset = l - chroma / 2.0;
        RGBColor {
            r: to_channel(r1 + offset),
            g: to_channel(g1 + offset),
            b: to_channel(b1 + offset),
        }
    }

    /// The uppercase `#RRGGBB` hex code of this color.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_string()
    }

}

// (v * 255).round() saturates on the cast, so out-of-range values can't wrap around
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

// rounding -0.4 gives -0, which would print as "-0"
fn display_component(v: f64) -> f64 {
    v.round() + 0.0
}

impl From<RGBColor> for HSLColor {
    fn from(rgb: RGBColor) -> HSLColor {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max_c = r.max(g).max(b);
        let min_c = r.min(g).min(b);
        let chroma = max_c - min_c;

        let hue = if chroma == 0.0 {
            0.0
        } else if max_c == r {
            ((g - b) / chroma).rem_euclid(6.0) * 60.0
        } else if max_c == g {
            ((b - r) / chroma) * 60.0 + 120.0
        } else {
            ((r - g) / chroma) * 60.0 + 240.0
        };

        let lightness = (max_c + min_c) / 2.0;
        let saturation = if lightness == 1.0 || lightness == 0.0 {
            0.0
        } else {
            chroma / (1.0 - (2.0 * lightness - 1.0).abs())
        };

        HSLColor {
            h: hue,
            s: saturation * 100.0,
            l: lightness * 100.0,
        }
    }
}

impl From<Coord> for HSLColor {
    fn from(c: Coord) -> HSLColor {
        HSLColor {
            h: c.x,
            s: c.y,
            l: c.z,
        }
    }
}

impl From<HSLColor> for Coord {
    fn from(c: HSLColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.l,
        }
    }
}

impl Bound for HSLColor {
    fn bounds() -> [(f64, f64); 3] {
        [
            (f64::NEG_INFINITY, f64::INFINITY),
            (0., 100.),
            (0., 100.),
        ]
    }
}

/// Displays as `hsl(h,s,l)` with every component rounded to a whole number.
impl fmt::Display for HSLColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "hsl({},{},{})",
            display_component(self.h),
            display_component(self.s),
            display_component(self.l)
        )
    }
}

/// Parses either an `hsl(h, s, l)` function (in any letter case, percent signs optional) or a hex
/// code.
impl FromStr for HSLColor {
    type Err = ColorParseError;
    fn from_str(s: &str) -> Result<HSLColor, ColorParseError> {
        let trimmed = s.trim();
        let is_function = trimmed
            .get(..3)
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case("hsl"));
        if !is_function {
            return HSLColor::from_hex_code(trimmed);
        }
        let caps = HSL_RE
            .captures(trimmed)
            .ok_or(ColorParseError::InvalidHSLSyntax)?;
        let component = |i: usize| {
            caps[i]
                .parse::<f64>()
                .map_err(|_| ColorParseError::InvalidHSLSyntax)
        };
        Ok(HSLColor {
            h: component(1)?,
            s: component(2)?,
            l: component(3)?,
        })
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;
    use float_cmp::approx_eq;

    fn approx_equal(a: &HSLColor, b: &HSLColor) -> bool {
        approx_eq!(f64, a.h, b.h, epsilon = 1e-9)
            && approx_eq!(f64, a.s, b.s, epsilon = 1e-9)
            && approx_eq!(f64, a.l, b.l, epsilon = 1e-9)
    }

    #[test]
    fn test_hsl_rgb_conversion() {
        let red = HSLColor{h: 0., s: 100., l: 50.};
        assert_eq!(red.to_hex(), "#FF0000");
        let lavender = HSLColor{h: 245., s: 50., l: 60.};
        assert_eq!(lavender.to_hex(), "#6E66CC");
        let dark_green = HSLColor{h: 120., s: 100., l: 25.};
        assert_eq!(dark_green.to_hex(), "#008000");
        let blue = HSLColor{h: 240., s: 80., l: 50.};
        assert_eq!(blue.to_hex(), "#1919E6");
    }

    #[test]
    fn test_out_of_range_components() {
        // hue wraps, percentages clamp
        let wrapped = HSLColor{h: 360. + 245., s: 50., l: 60.};
        assert_eq!(wrapped.to_hex(), "#6E66CC");
        let negative = HSLColor{h: -115., s: 50., l: 60.};
        assert_eq!(negative.to_hex(), "#6E66CC");
        let white = HSLColor{h: 12., s: 250., l: 140.};
        assert_eq!(white.to_hex(), "#FFFFFF");
        let black = HSLColor{h: 12., s: 50., l: -3.};
        assert_eq!(black.to_hex(), "#000000");
    }

    #[test]
    fn test_rgb_hsl_conversion() {
        let pink = HSLColor::from_hex_code("#AA1660").unwrap();
        assert!((pink.h - 330.).abs() <= 1e-9);
        assert!((pink.s - 77.0833333).abs() <= 1e-6);
        assert!((pink.l - 37.6470588).abs() <= 1e-6);
        let gray = HSLColor::from_hex_code("#808080").unwrap();
        assert_eq!(gray.h, 0.);
        assert_eq!(gray.s, 0.);
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in &["#AA1660", "#1919E6", "#E66419", "#000000", "#FFFFFF", "#6E66CC", "#19E6BD"] {
            let hsl = HSLColor::from_hex_code(hex).unwrap();
            assert_eq!(&hsl.to_hex(), hex);
        }
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(RGBColor::from_hex_code("aa1660"), RGBColor::from_hex_code("#AA1660"));
        assert_eq!(
            RGBColor::from_hex_code("#f0a").unwrap(),
            RGBColor{r: 255, g: 0, b: 170}
        );
        assert_eq!(RGBColor::from_hex_code("#12345"), Err(ColorParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code("#12345g"), Err(ColorParseError::InvalidHexCode));
        assert_eq!(RGBColor::from_hex_code(""), Err(ColorParseError::InvalidHexCode));
        assert_eq!("#00ff00".parse::<RGBColor>().unwrap().to_string(), "#00FF00");
    }

    #[test]
    fn test_hsl_display() {
        let pink = HSLColor::from_hex_code("#AA1660").unwrap();
        assert_eq!(pink.to_string(), "hsl(330,77,38)");
        let almost_zero = HSLColor{h: -0.3, s: 0., l: 0.};
        assert_eq!(almost_zero.to_string(), "hsl(0,0,0)");
    }

    #[test]
    fn test_hsl_parsing() {
        let parsed: HSLColor = "hsl(330, 77%, 38%)".parse().unwrap();
        assert_eq!(parsed, HSLColor{h: 330., s: 77., l: 38.});
        let bare: HSLColor = "hsl(12.5,80,50)".parse().unwrap();
        assert_eq!(bare, HSLColor{h: 12.5, s: 80., l: 50.});
        let from_hex: HSLColor = "#FF0000".parse().unwrap();
        assert_eq!(from_hex, HSLColor{h: 0., s: 100., l: 50.});
        assert_eq!("hsl(1, 2)".parse::<HSLColor>(), Err(ColorParseError::InvalidHSLSyntax));
        assert_eq!("hsla(1, 2, 3, 4)".parse::<HSLColor>(), Err(ColorParseError::InvalidHSLSyntax));
        assert_eq!("red".parse::<HSLColor>(), Err(ColorParseError::InvalidHexCode));
    }

    #[test]
    fn test_parse_hsl_any_case() {
        let upper: HSLColor = "HSL(330, 77%, 38%)".parse().unwrap();
        assert_eq!(upper, HSLColor{h: 330., s: 77., l: 38.});
        assert_eq!("HSL(1,2,3)".parse::<HSLColor>().map(|c| c.h), Ok(1.));
        assert_eq!("Hsl(1, 2)".parse::<HSLColor>(), Err(ColorParseError::InvalidHSLSyntax));
        assert_eq!("HSLA(1, 2, 3, 4)".parse::<HSLColor>(), Err(ColorParseError::InvalidHSLSyntax));
    }

    #[test]
    fn test_display_parse_agree() {
        let c = HSLColor{h: 168., s: 80., l: 50.};
        let back: HSLColor = c.to_string().parse().unwrap();
        assert!(approx_equal(&c, &back));
        assert_eq!(c.to_hex(), back.to_hex());
    }
}
