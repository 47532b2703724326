//! Interpolation in HSV space.
//!
//! Saturation and value move linearly. The hue always travels the shorter
//! of the two arcs around the color wheel: when the hues are more than 180
//! degrees apart the path crosses the 0/360 boundary instead of sweeping
//! through the rest of the wheel.

use super::alpha::AlphaSource;
use super::Interpolate;
use crate::color::{Color, Hsv};

/// Hues further apart than this take the path across 0/360.
const HALF_TURN: f32 = 180.0;

/// True when the short arc between two hues crosses 0/360.
///
/// Exactly 180 degrees apart counts as forward.
pub fn is_backwards(from_hue: f32, to_hue: f32) -> bool {
    (to_hue - from_hue).abs() > HALF_TURN
}

/// How the hue moves as the fraction advances.
pub trait HuePath {
    fn hue_at(&self, fraction: f32) -> f32;
}

/// Straight line between the hues, no wraparound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardHue {
    from: f32,
    diff: f32,
}

impl ForwardHue {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            diff: to - from,
        }
    }
}

impl HuePath for ForwardHue {
    fn hue_at(&self, fraction: f32) -> f32 {
        self.from + self.diff * fraction
    }
}

/// Path that wraps through 0/360.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackwardHue {
    from: f32,
    /// Length of the short arc
    diff: f32,
    from_is_bigger: bool,
}

impl BackwardHue {
    pub fn new(from: f32, to: f32) -> Self {
        Self {
            from,
            diff: 360.0 - (to - from).abs(),
            from_is_bigger: from > to,
        }
    }
}

impl HuePath for BackwardHue {
    fn hue_at(&self, fraction: f32) -> f32 {
        let travelled = self.diff * fraction;

        if self.from_is_bigger {
            let hue = self.from + travelled;
            if hue > 360.0 {
                return hue - 360.0;
            }
            return hue;
        }

        let hue = self.from - travelled;
        if hue < 0.0 {
            return 360.0 - hue.abs();
        }
        hue
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HsvInterpolator<H> {
    alpha: AlphaSource,
    from: Hsv,
    to: Hsv,
    hue: H,
}

impl<H: HuePath> HsvInterpolator<H> {
    pub fn new(alpha: AlphaSource, from: Hsv, to: Hsv, hue: H) -> Self {
        Self {
            alpha,
            from,
            to,
            hue,
        }
    }

    pub fn hsv_at(&self, fraction: f32) -> Hsv {
        Hsv {
            hue: self.hue.hue_at(fraction),
            saturation: self.from.saturation
                + (self.to.saturation - self.from.saturation) * fraction,
            value: self.from.value + (self.to.value - self.from.value) * fraction,
        }
    }
}

impl<H: HuePath> Interpolate for HsvInterpolator<H> {
    fn color_at(&self, fraction: f32) -> Color {
        Color::from_ahsv(self.alpha.alpha_at(fraction), self.hsv_at(fraction))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    /// Angular distance covered between two successive hues.
    fn step_len(a: f32, b: f32) -> f32 {
        let d = (b - a).abs() % 360.0;
        d.min(360.0 - d)
    }

    fn path_len(path: &dyn HuePath) -> f32 {
        let mut total = 0.0;
        let mut previous = path.hue_at(0.0);
        for step in 1..=1000 {
            let hue = path.hue_at(step as f32 / 1000.0);
            total += step_len(previous, hue);
            previous = hue;
        }
        total
    }

    fn path_for(from: f32, to: f32) -> Box<dyn HuePath> {
        if is_backwards(from, to) {
            Box::new(BackwardHue::new(from, to))
        } else {
            Box::new(ForwardHue::new(from, to))
        }
    }

    #[test]
    fn test_direction_tie_break() {
        assert!(!is_backwards(0.0, 180.0));
        assert!(!is_backwards(270.0, 90.0));
        assert!(is_backwards(0.0, 180.5));
        assert!(is_backwards(350.0, 10.0));
        assert!(!is_backwards(42.0, 42.0));
    }

    #[test]
    fn test_wrap_from_bigger_hue() {
        let path = BackwardHue::new(350.0, 10.0);
        assert_relative_eq!(path.hue_at(0.0), 350.0);
        assert_relative_eq!(path.hue_at(0.5) % 360.0, 0.0);
        assert_relative_eq!(path.hue_at(0.75), 5.0);
        assert_relative_eq!(path.hue_at(1.0), 10.0);
    }

    #[test]
    fn test_wrap_from_smaller_hue() {
        let path = BackwardHue::new(10.0, 350.0);
        assert_relative_eq!(path.hue_at(0.0), 10.0);
        assert_relative_eq!(path.hue_at(0.5), 0.0);
        assert_relative_eq!(path.hue_at(0.75), 355.0);
        assert_relative_eq!(path.hue_at(1.0), 350.0);
    }

    #[test]
    fn test_forward_path() {
        let path = ForwardHue::new(200.0, 20.0);
        assert_relative_eq!(path.hue_at(0.5), 110.0);
        assert_relative_eq!(path.hue_at(1.0), 20.0);
    }

    #[test]
    fn test_always_takes_short_arc() {
        let hues: [f32; 9] = [0.0, 15.0, 90.0, 179.0, 180.0, 181.0, 270.0, 345.0, 359.0];
        for from in hues {
            for to in hues {
                let direct = (to - from).abs();
                let expected = direct.min(360.0 - direct);
                let travelled = path_len(path_for(from, to).as_ref());
                assert!(
                    (travelled - expected).abs() < 0.01,
                    "{from} -> {to}: travelled {travelled}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_saturation_and_value_are_linear() {
        let from = Hsv::new(350.0, 0.2, 1.0);
        let to = Hsv::new(10.0, 1.0, 0.5);
        let hue = BackwardHue::new(from.hue, to.hue);
        let hsv = HsvInterpolator::new(AlphaSource::Opaque, from, to, hue);

        let mid = hsv.hsv_at(0.5);
        assert_relative_eq!(mid.saturation, 0.6, epsilon = 1e-6);
        assert_relative_eq!(mid.value, 0.75, epsilon = 1e-6);
    }
}
