//! The palette transforms: turning text into a handful of base colors, and turning single colors into
//! whole palettes (gradients, lightness ramps, and a sweep to the complementary hue). Also the small
//! accessors used to pick which base color a derived palette starts from.
//!
//! Every generator takes a count and returns exactly that many colors, so a count of 0 simply gives
//! back an empty palette.

use std::error::Error;
use std::fmt;

use crate::color::HSLColor;
use crate::colormap::{ColorMap, GradientColorMap, ListedColorMap};
use crate::digest::digest;

/// An ordered list of colors. Order matters: the first, middle, and last colors are all picked out by
/// later steps.
pub type Palette = Vec<HSLColor>;

/// The lightness a relative-lightness ramp starts from.
pub const RELATIVE_LIGHTNESS_START: f64 = 10.0;
/// How many points of lightness a relative-lightness ramp climbs in total.
pub const RELATIVE_LIGHTNESS_SPAN: f64 = 80.0;
/// The saturation control points of the hue-and-opposite path: high, dip, high.
pub const OPPOSITE_SATURATIONS: [f64; 3] = [100.0, 40.0, 100.0];
/// The lightness held along the hue-and-opposite path.
pub const OPPOSITE_LIGHTNESS: f64 = 80.0;

/// Errors from reading colors out of a palette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PaletteError {
    /// The palette has no colors to pick from.
    EmptyPalette,
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PaletteError::EmptyPalette => write!(f, "palette is empty"),
        }
    }
}

impl Error for PaletteError {}

/// Derives `count` colors from `text`. The `i`-th color takes its hue straight from the `i`-th pair of
/// hex digits of the text's MD5 digest (cycling after 16), read as a number from 0 to 255 and used
/// as degrees without any rescaling, so hues past 255 never come out of this. Saturation and
/// lightness are used as given, unchecked. The colors come back sorted by descending hue.
/// # Example
/// ```
/// # use hashtint::prelude::*;
/// let colors = base_colors("Deno", 5, 80., 50.);
/// let hexes: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
/// assert_eq!(hexes, vec!["#1919E6", "#194DE6", "#19E6BD", "#19E66B", "#E66419"]);
/// ```
pub fn base_colors(text: &str, count: usize, saturation: f64, lightness: f64) -> Palette {
    let sum = digest(text);
    let colors: Palette = (0..count)
        .map(|i| {
            let hue = sum.hue_source(i);
            trace!("base color {}: hue {} from digest {}", i, hue, sum);
            HSLColor {
                h: f64::from(hue),
                s: saturation,
                l: lightness,
            }
        })
        .collect();
    sorted_by_hue(&colors)
}

/// A gradient of `n` colors from `from` to `to`. With at least two colors, the first is exactly
/// `from` and the last exactly `to`, with the rest evenly spaced between them. Saturation and
/// lightness move in a straight line, and hue takes the shorter way around the wheel. A single color
/// is just `from`.
pub fn generate_palette(from: HSLColor, to: HSLColor, n: usize) -> Palette {
    GradientColorMap::new_shortest_arc(from, to).sample(n)
}

/// A gradient of `n` colors whose hue runs from the pivot's hue down to the absolute hue 0, as a
/// plain number rather than the short way round, so it sweeps across the color wheel. Saturation and
/// lightness stay those of the pivot. The pivot itself is the first color.
pub fn generate_absolute_gradient(pivot: HSLColor, n: usize) -> Palette {
    let end = HSLColor { h: 0.0, ..pivot };
    GradientColorMap::new_linear(pivot, end).sample(n)
}

/// `n` shades of one hue: hue and saturation come from `base`, and lightness climbs evenly from 10 to
/// 90, so each color is lighter than the one before it.
pub fn generate_relative_lightness(base: HSLColor, n: usize) -> Palette {
    let start = HSLColor {
        l: RELATIVE_LIGHTNESS_START,
        ..base
    };
    let end = HSLColor {
        l: RELATIVE_LIGHTNESS_START + RELATIVE_LIGHTNESS_SPAN,
        ..base
    };
    GradientColorMap::new_shortest_arc(start, end).sample(n)
}

/// `n` colors sampled evenly along a path that holds the base hue through its first half and then
/// turns all the way to the complementary hue (base + 180) in its second. Saturation dips from 100
/// to 40 at the middle of the path and recovers to 100; lightness stays at 80 throughout.
pub fn generate_shade_with_opposite(base: HSLColor, n: usize) -> Palette {
    let hues = [base.h, base.h, base.h + 180.0];
    let points = hues
        .iter()
        .zip(OPPOSITE_SATURATIONS.iter())
        .map(|(&h, &s)| HSLColor {
            h,
            s,
            l: OPPOSITE_LIGHTNESS,
        })
        .collect();
    ListedColorMap::new(points).map_or_else(Vec::new, |path| path.sample(n))
}

/// A copy of the palette sorted by descending hue. The sort is stable, so colors with equal hues keep
/// their relative order, and sorting an already-sorted palette changes nothing.
pub fn sorted_by_hue(palette: &[HSLColor]) -> Palette {
    let mut sorted = palette.to_vec();
    sorted.sort_by(|a, b| b.h.total_cmp(&a.h));
    sorted
}

/// The color at index `round(len / 2)`, with halves rounding up: the third of five colors is index 3,
/// not 2. A one-color palette gives its only color.
/// # Errors
/// Returns `PaletteError::EmptyPalette` if there are no colors.
pub fn middle_color(palette: &[HSLColor]) -> Result<HSLColor, PaletteError> {
    let last = palette.len().checked_sub(1).ok_or(PaletteError::EmptyPalette)?;
    let middle = (palette.len() + 1) / 2;
    Ok(palette[middle.min(last)])
}

/// The color with the highest hue, **provided the palette is sorted by descending hue**, as
/// [`base_colors`] and [`sorted_by_hue`] leave it. This simply returns the first color: on a palette
/// in any other order, the result is not the maximum. Sort first if in doubt.
/// # Errors
/// Returns `PaletteError::EmptyPalette` if there are no colors.
pub fn highest_hue(palette: &[HSLColor]) -> Result<HSLColor, PaletteError> {
    palette.first().copied().ok_or(PaletteError::EmptyPalette)
}

/// The `#RRGGBB` hex codes of every color, for display.
pub fn hex_codes(palette: &[HSLColor]) -> Vec<String> {
    palette.iter().map(HSLColor::to_hex).collect()
}
