//! hashtint turns text into color. Any string is hashed to an MD5 digest, the digest is read off as a
//! handful of hues, and those base colors seed a family of palettes: gradients, lightness ramps, and
//! sweeps to the complementary hue. The same text always gives the same colors.
//!
//! Everything works on [`HSLColor`](color::HSLColor), with hex codes as a display format only, and
//! every function is pure: there is no state to set up and nothing to tear down.
//!
//! ```
//! use hashtint::prelude::*;
//!
//! let palettes = create_palette_map("Deno", &PaletteConfig::default());
//! for name in PALETTE_NAMES.iter() {
//!     println!("{}: {:?}", name.title(), hex_codes(&palettes[name]));
//! }
//! let first = palettes[&PaletteName::BasicColors][0];
//! assert_eq!(first.to_hex(), "#1919E6");
//! // text drawn over the swatch
//! assert_eq!(first.inverse().to_hex(), "#0A0A5C");
//! ```

// we don't mess around with documentation
#![deny(missing_docs)]

#[cfg(test)]
extern crate float_cmp;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate maplit;
extern crate md5;
extern crate num;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[cfg(test)]
extern crate serde_json;

pub mod bound;
pub mod color;
pub mod colormap;
pub mod config;
pub mod coord;
pub mod digest;
pub mod palette;
pub mod palettes;
pub mod prelude;
pub mod shade;
