//! This module contains a struct, [`Coord`], that models a point in the three-dimensional HSL
//! cylinder unrolled into plain Cartesian axes. Every interpolation in the crate happens on `Coord`s:
//! a color is projected into this space, blended, and brought back.

use std::ops::{Add, Div, Mul, Sub};

/// A point in 3D space. Supports the arithmetic needed for blending colors.
/// `Coord` has three axes, denoted `x`, `y`, and `z`. An [`HSLColor`] maps hue onto `x`, saturation
/// onto `y`, and lightness onto `z`. Note that the hue axis is treated as a straight line here, not a
/// circle: whoever builds the coordinates decides which way around the wheel a blend travels.
///
/// [`HSLColor`]: ../color/struct.HSLColor.html
/// # Example
/// ```
/// # use hashtint::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;  // the point (8, 10, 10)
/// let diff = point_1 - point_2;  // the point (-6, 6, 4)
/// let prod = point_1 * 2.; // the point (2, 16, 14)
/// let quot = point_1 / 2.; // the point (0.5, 4, 3.5)
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// assert_eq!(quot, Coord{x: 0.5, y: 4., z: 3.5});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication and division only: there's no single sensible product of two points
impl Mul<f64> for Coord {
    type Output = Coord;
    fn mul(self, rhs: f64) -> Coord {
        Coord {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Div<f64> for Coord {
    type Output = Coord;
    fn div(self, rhs: f64) -> Coord {
        Coord {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

impl Coord {
    /// Linear interpolation from `self` towards `other`: a weight of 0 gives `self` back exactly and a
    /// weight of 1 gives `other` (down to floating-point error). Weights outside of 0 to 1 extrapolate.
    /// # Example
    /// ```
    /// # use hashtint::coord::Coord;
    /// let point1 = Coord{x: 0.2, y: 0., z: 1.};
    /// let point2 = Coord{x: 1., y: 0.8, z: 1.};
    /// let mid = point1.lerp(&point2, 0.25);
    /// assert!((mid.x - 0.4).abs() <= 1e-10);
    /// assert!((mid.y - 0.2).abs() <= 1e-10);
    /// assert!((mid.z - 1.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, weight: f64) -> Coord {
        *self + (*other - *self) * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Coord{x: 330., y: 77., z: 37.};
        let b = Coord{x: 0., y: 77., z: 37.};
        assert_eq!(a.lerp(&b, 0.), a);
        assert_eq!(a.lerp(&b, 1.), b);
        assert_eq!(a.lerp(&b, 0.5), Coord{x: 165., y: 77., z: 37.});
    }
}
