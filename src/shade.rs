//! Lightness adjustments: making a color lighter or darker, and picking a readable text color to
//! put on top of a swatch.

use crate::bound::Bound;
use crate::color::HSLColor;

/// How far [`Shade::lighter`] and [`Shade::darker`] move lightness, in percentage points.
pub const SHADE_STEP: f64 = 30.0;

/// Lightness at or above which a color counts as light.
pub const LIGHT_THRESHOLD: f64 = 50.0;

/// A color whose lightness can be read and replaced. Everything else is built on those two methods,
/// and every result is clamped into the valid lightness range.
pub trait Shade: Bound {
    /// The lightness of the color, as a percentage.
    fn light(&self) -> f64;

    /// A copy of this color with the lightness replaced. Need not clamp.
    fn with_light(self, light: f64) -> Self;

    /// Shifts lightness by `delta` percentage points, clamping to 0-100. Hue and saturation are left
    /// alone.
    fn update_light(self, delta: f64) -> Self {
        let light = self.light();
        self.with_light(light + delta).clamped()
    }

    /// Thirty points lighter.
    fn lighter(self) -> Self {
        self.update_light(SHADE_STEP)
    }

    /// Thirty points darker.
    fn darker(self) -> Self {
        self.update_light(-SHADE_STEP)
    }

    /// Whether the color is on the light side of the 50% threshold.
    fn is_light(&self) -> bool {
        self.light() >= LIGHT_THRESHOLD
    }

    /// A color to draw text in on top of this one. Light colors get darker and dark colors get
    /// lighter, by at least 30 points and always far enough to end up on the other side of the 50%
    /// threshold: if 30 points isn't enough, lightness is mirrored through 50 instead.
    /// # Example
    /// ```
    /// # use hashtint::prelude::*;
    /// let pale = HSLColor{h: 60., s: 80., l: 90.};
    /// assert_eq!(pale.inverse().l, 10.);
    /// let mid = HSLColor{h: 60., s: 80., l: 60.};
    /// assert_eq!(mid.inverse().l, 30.);
    /// ```
    fn inverse(self) -> Self {
        let light = self.light();
        let target = if self.is_light() {
            (light - SHADE_STEP).min(2.0 * LIGHT_THRESHOLD - light)
        } else {
            (light + SHADE_STEP).max(2.0 * LIGHT_THRESHOLD - light)
        };
        self.with_light(target).clamped()
    }
}

impl Shade for HSLColor {
    fn light(&self) -> f64 {
        self.l
    }

    fn with_light(self, light: f64) -> HSLColor {
        HSLColor { l: light, ..self }
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lighter_darker() {
        let base = HSLColor{h: 168., s: 80., l: 50.};
        assert_eq!(base.lighter(), HSLColor{h: 168., s: 80., l: 80.});
        assert_eq!(base.darker(), HSLColor{h: 168., s: 80., l: 20.});
        let pale = HSLColor{h: 168., s: 80., l: 85.};
        assert_eq!(pale.lighter().l, 100.);
        let dark = HSLColor{h: 168., s: 80., l: 12.};
        assert_eq!(dark.darker().l, 0.);
    }

    #[test]
    fn test_update_light() {
        let base = HSLColor{h: 10., s: 20., l: 50.};
        assert_eq!(base.update_light(-5.).l, 45.);
        assert_eq!(base.update_light(70.).l, 100.);
        assert_eq!(base.update_light(0.), base);
    }

    #[test]
    fn test_is_light() {
        assert!(HSLColor{h: 0., s: 0., l: 50.}.is_light());
        assert!(!HSLColor{h: 0., s: 0., l: 49.9}.is_light());
    }

    #[test]
    fn test_inverse_plain_steps() {
        assert_eq!(HSLColor{h: 0., s: 50., l: 50.}.inverse().l, 20.);
        assert_eq!(HSLColor{h: 0., s: 50., l: 40.}.inverse().l, 70.);
        assert_eq!(HSLColor{h: 0., s: 50., l: 0.}.inverse().l, 100.);
        assert_eq!(HSLColor{h: 0., s: 50., l: 100.}.inverse().l, 0.);
    }

    #[test]
    fn test_inverse_crosses_threshold() {
        let mut l = -20.0;
        while l <= 120.0 {
            let color = HSLColor{h: 200., s: 60., l};
            let inv = color.inverse();
            assert!(inv.l >= 0. && inv.l <= 100., "{} gave {}", l, inv.l);
            assert_ne!(color.is_light(), inv.is_light(), "{} gave {}", l, inv.l);
            assert_eq!((inv.h, inv.s), (200., 60.));
            l += 0.5;
        }
    }
}
