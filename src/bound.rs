//! This module describes the Bound trait, which describes what values each component of a color is
//! allowed to take. HSL saturation and lightness are percentages and can't leave 0-100, while hue is
//! an angle and wraps around the circle instead of being bounded.

use crate::coord::Coord;

/// Describes a color whose components have explicit bounds when embedded in 3D space. Palette
/// transforms are free to push components out of range (lightening an already-white color, for
/// example): this trait pulls them back in.
/// # Example
/// Bound a lightness that has been pushed past white.
///
/// ```
/// # use hashtint::prelude::*;
/// let too_light = HSLColor{h: 200., s: 120., l: 130.};
/// let bounded = too_light.clamped();
/// assert_eq!(bounded, HSLColor{h: 200., s: 100., l: 100.});
/// ```
pub trait Bound: Into<Coord> + From<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in the order that they appear in the Coord representation. Unbounded components use
    /// infinities.
    fn bounds() -> [(f64, f64); 3];

    /// Given a Coord, returns a Coord such that each component has been clamped to the correct
    /// bounds.
    fn clamp_coord(point: Coord) -> Coord {
        let [(min_x, max_x), (min_y, max_y), (min_z, max_z)] = Self::bounds();
        Coord {
            x: num::clamp(point.x, min_x, max_x),
            y: num::clamp(point.y, min_y, max_y),
            z: num::clamp(point.z, min_z, max_z),
        }
    }

    /// Returns a copy of this color with every component inside its bounds. Colors already in range
    /// come back unchanged.
    fn clamped(self) -> Self {
        Self::from(Self::clamp_coord(self.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::Bound;
    use crate::color::HSLColor;

    #[test]
    fn test_percent_bounds() {
        let color = HSLColor{h: 120., s: -0.2, l: 101.};
        assert_eq!(color.clamped(), HSLColor{h: 120., s: 0., l: 100.});
    }

    #[test]
    fn test_hue_unbounded() {
        // hue wraps on conversion instead, so clamping leaves it alone
        let color = HSLColor{h: 375., s: 20., l: 50.};
        assert_eq!(color.clamped(), color);
        let in_range = HSLColor{h: 255., s: 60., l: 70.};
        assert_eq!(in_range.clamped(), in_range);
    }
}
