//! This module brings the most common functionality under a single namespace, to prevent excessive
//! imports: every trait, the color types and their parse error, the palette transforms, and the
//! palette set with its configuration.

pub use crate::bound::Bound;
pub use crate::color::{ColorParseError, HSLColor, RGBColor};
pub use crate::colormap::{ColorMap, GradientColorMap, HueInterpolation, ListedColorMap};
pub use crate::config::PaletteConfig;
pub use crate::digest::{digest, Digest};
pub use crate::palette::{
    base_colors, generate_absolute_gradient, generate_palette, generate_relative_lightness,
    generate_shade_with_opposite, hex_codes, highest_hue, middle_color, sorted_by_hue, Palette,
    PaletteError,
};
pub use crate::palettes::{create_palette_map, PaletteName, UnknownPaletteName, PALETTE_NAMES};
pub use crate::shade::Shade;
