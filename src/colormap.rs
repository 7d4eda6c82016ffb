//! This module defines a generalized trait for a colormap (a continuous mapping of the numbers between
//! 0 and 1 to colors) and the two kinds of map every palette in the crate is sampled from: a
//! two-color gradient and a path through a list of control colors.

use crate::color::HSLColor;
use crate::coord::Coord;

/// A continuous mapping of the numbers between 0 and 1 to colors. Palettes are produced by sampling a
/// colormap at evenly spaced points.
pub trait ColorMap {
    /// Maps a given number between 0 and 1 to a color. Out-of-range input is clamped: this should
    /// never panic, though NaN in gives NaN components out.
    fn transform_single(&self, x: f64) -> HSLColor;

    /// Maps each of the given numbers to a color, in order.
    fn transform<U: IntoIterator<Item = f64>>(&self, inputs: U) -> Vec<HSLColor> {
        inputs.into_iter().map(|x| self.transform_single(x)).collect()
    }

    /// Samples `n` evenly spaced colors, including both ends of the map when `n` is at least 2. A
    /// single sample is taken at the start of the map, and zero samples give an empty palette.
    /// # Example
    /// ```
    /// # use hashtint::prelude::*;
    /// let red = HSLColor{h: 0., s: 100., l: 50.};
    /// let blue = HSLColor{h: 240., s: 100., l: 50.};
    /// let cmap = GradientColorMap::new_linear(red, blue);
    /// let hexes: Vec<String> = cmap.sample(3).iter().map(|c| c.to_hex()).collect();
    /// assert_eq!(hexes, vec!["#FF0000", "#00FF00", "#0000FF"]);
    /// assert!(cmap.sample(0).is_empty());
    /// ```
    fn sample(&self, n: usize) -> Vec<HSLColor> {
        match n {
            0 => Vec::new(),
            1 => vec![self.transform_single(0.)],
            _ => {
                let last = (n - 1) as f64;
                self.transform((0..n).map(|i| i as f64 / last))
            }
        }
    }
}

/// How a gradient travels between two hues. Hue is an angle, so there are always two ways around the
/// wheel from one hue to another.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum HueInterpolation {
    /// Take whichever way around the wheel is shorter. Hues exactly opposite each other go the
    /// decreasing way.
    ShortestArc,
    /// Treat hue as an ordinary number: 330 to 0 runs down through every hue in between instead of
    /// crossing the 30 degrees through red.
    Linear,
}

impl HueInterpolation {
    /// The signed number of degrees a gradient moves through going from hue `from` to hue `to`.
    pub fn hue_delta(self, from: f64, to: f64) -> f64 {
        match self {
            HueInterpolation::ShortestArc => (to - from + 180.0).rem_euclid(360.0) - 180.0,
            HueInterpolation::Linear => to - from,
        }
    }
}

/// A gradient colormap: an evenly-spaced shift between two colors A and B such that 0 maps to A, 1
/// maps to B, and anything in between to a linear blend of their HSL components, with hue traveling
/// as its [`HueInterpolation`] says. Values outside of 0 to 1 are clamped, and the ends are returned
/// exactly as given.
#[derive(Debug, Clone)]
pub struct GradientColorMap {
    /// The start of the gradient.
    pub start: HSLColor,
    /// The end of the gradient.
    pub end: HSLColor,
    /// Which way around the wheel the hue moves.
    pub hue_interpolation: HueInterpolation,
}

impl GradientColorMap {
    /// A gradient whose hue takes the shortest way around the wheel.
    pub fn new_shortest_arc(start: HSLColor, end: HSLColor) -> GradientColorMap {
        GradientColorMap {
            start,
            end,
            hue_interpolation: HueInterpolation::ShortestArc,
        }
    }
    /// A gradient whose hue is blended as a plain number.
    pub fn new_linear(start: HSLColor, end: HSLColor) -> GradientColorMap {
        GradientColorMap {
            start,
            end,
            hue_interpolation: HueInterpolation::Linear,
        }
    }
}

impl ColorMap for GradientColorMap {
    fn transform_single(&self, x: f64) -> HSLColor {
        if x <= 0. {
            return self.start;
        } else if x >= 1. {
            return self.end;
        }
        let c1: Coord = self.start.into();
        let mut c2: Coord = self.end.into();
        // unroll the end hue so that a straight line from c1 goes the chosen way around
        c2.x = c1.x + self.hue_interpolation.hue_delta(c1.x, c2.x);
        let mut color = HSLColor::from(c1.lerp(&c2, x));
        color.h = color.h.rem_euclid(360.0);
        color
    }
}

/// A colormap that runs through a list of control colors, equally spaced, blending linearly between
/// neighbors. Hue is blended as a plain number, so control hues past 360 are how a path is made to go
/// the long way around. Clamps values outside of 0 to 1.
#[derive(Debug, Clone)]
pub struct ListedColorMap {
    // never empty
    points: Vec<HSLColor>,
}

impl ListedColorMap {
    /// Builds a path through the given control colors, or `None` if there are none.
    pub fn new(points: Vec<HSLColor>) -> Option<ListedColorMap> {
        if points.is_empty() {
            None
        } else {
            Some(ListedColorMap { points })
        }
    }

    /// The control colors, in order.
    pub fn points(&self) -> &[HSLColor] {
        &self.points
    }
}

impl ColorMap for ListedColorMap {
    /// Finds the two control colors on either side of `x` and blends between just those two.
    fn transform_single(&self, x: f64) -> HSLColor {
        let points = self.points();
        let clamped = num::clamp(x, 0., 1.);
        // the integers on either side of float_ind index the bounding control colors
        let float_ind = clamped * (points.len() - 1) as f64;
        let ind1 = float_ind.floor() as usize;
        let ind2 = float_ind.ceil() as usize;
        let mut color = if ind1 == ind2 {
            points[ind1]
        } else {
            let c1: Coord = points[ind1].into();
            let c2: Coord = points[ind2].into();
            HSLColor::from(c1.lerp(&c2, float_ind - ind1 as f64))
        };
        color.h = color.h.rem_euclid(360.0);
        color
    }
}
