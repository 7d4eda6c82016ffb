//! The full set of named palettes generated for one piece of text: the base colors themselves and the
//! four palettes derived from them.

use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::config::PaletteConfig;
use crate::palette::{
    base_colors, generate_absolute_gradient, generate_palette, generate_relative_lightness,
    generate_shade_with_opposite, highest_hue, middle_color, Palette,
};

/// The palettes in a palette set. Ordered as they are presented.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaletteName {
    /// The colors derived from the text's digest, sorted by descending hue.
    BasicColors,
    /// A gradient from the first base color to the last.
    BasicGradient,
    /// An absolute gradient from the middle base color.
    AbsoluteGradient,
    /// A lightness ramp on the base color with the highest hue.
    RelativeLightness,
    /// A sweep from the base color with the highest hue to its complement.
    HueAndOpposite,
}

/// Every palette name, in presentation order.
pub static PALETTE_NAMES: [PaletteName; 5] = [
    PaletteName::BasicColors,
    PaletteName::BasicGradient,
    PaletteName::AbsoluteGradient,
    PaletteName::RelativeLightness,
    PaletteName::HueAndOpposite,
];

impl PaletteName {
    /// The label used to refer to the palette, which is also what `Display` writes and `FromStr`
    /// reads.
    pub fn label(self) -> &'static str {
        match self {
            PaletteName::BasicColors => "BasicColors",
            PaletteName::BasicGradient => "BasicGradient",
            PaletteName::AbsoluteGradient => "AbsoluteGradient",
            PaletteName::RelativeLightness => "RelativeLightness",
            PaletteName::HueAndOpposite => "HueAndOpposite",
        }
    }

    /// A human-readable heading for the palette.
    pub fn title(self) -> &'static str {
        match self {
            PaletteName::BasicColors => "Initial colors",
            PaletteName::BasicGradient => "Basic gradient",
            PaletteName::AbsoluteGradient => "Absolute gradient",
            PaletteName::RelativeLightness => "Relative lightness",
            PaletteName::HueAndOpposite => "Hue and opposite",
        }
    }
}

impl fmt::Display for PaletteName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The error returned when a string is not the label of any palette.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownPaletteName(pub String);

impl fmt::Display for UnknownPaletteName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown palette name `{}`", self.0)
    }
}

impl Error for UnknownPaletteName {}

impl FromStr for PaletteName {
    type Err = UnknownPaletteName;
    fn from_str(s: &str) -> Result<PaletteName, UnknownPaletteName> {
        PALETTE_NAMES
            .iter()
            .copied()
            .find(|name| name.label() == s)
            .ok_or_else(|| UnknownPaletteName(s.to_string()))
    }
}

/// Generates every named palette for `text`. The base colors come from [`base_colors`] with the
/// configured count, saturation, and lightness; each derived palette has `gradient_size` colors:
///
/// - `BasicGradient` runs from the first base color to the last.
/// - `AbsoluteGradient` starts from the middle base color.
/// - `RelativeLightness` and `HueAndOpposite` start from the base color with the highest hue.
///
/// With no base colors, the derived palettes are all empty.
/// # Example
/// ```
/// # use hashtint::prelude::*;
/// let palettes = create_palette_map("Deno", &PaletteConfig::default());
/// assert_eq!(palettes.len(), 5);
/// assert_eq!(palettes[&PaletteName::BasicGradient].len(), 7);
/// ```
pub fn create_palette_map(text: &str, config: &PaletteConfig) -> BTreeMap<PaletteName, Palette> {
    let PaletteConfig {
        base_count,
        base_saturation,
        base_lightness,
        gradient_size,
    } = *config;
    debug!(
        "generating palettes for {:?}: {} base colors, {} per gradient",
        text, base_count, gradient_size
    );
    let colors = base_colors(text, base_count, base_saturation, base_lightness);

    let basic_gradient = match (colors.first(), colors.last()) {
        (Some(&first), Some(&last)) => generate_palette(first, last, gradient_size),
        _ => Palette::new(),
    };
    let absolute = middle_color(&colors)
        .map(|c| generate_absolute_gradient(c, gradient_size))
        .unwrap_or_default();
    // base_colors sorts by descending hue, so the first color really is the highest
    let top = highest_hue(&colors);
    let relative = top
        .map(|c| generate_relative_lightness(c, gradient_size))
        .unwrap_or_default();
    let opposite = top
        .map(|c| generate_shade_with_opposite(c, gradient_size))
        .unwrap_or_default();

    btreemap! {
        PaletteName::BasicColors => colors,
        PaletteName::BasicGradient => basic_gradient,
        PaletteName::AbsoluteGradient => absolute,
        PaletteName::RelativeLightness => relative,
        PaletteName::HueAndOpposite => opposite,
    }
}
