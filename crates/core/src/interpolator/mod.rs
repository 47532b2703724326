//! Color interpolators.
//!
//! Every strategy maps a fraction in 0.0..=1.0 to a [`Color`]. Construction
//! fixes the endpoints and the strategy; evaluation is pure and may run from
//! any number of threads at once.

mod alpha;
mod concat;
mod hsv;
mod rgb;

pub use alpha::{AlphaEvaluator, AlphaSource};
pub use concat::ConcatInterpolator;
pub use hsv::{is_backwards, BackwardHue, ForwardHue, HsvInterpolator, HuePath};
pub use rgb::RgbInterpolator;

use crate::color::Color;
use crate::error::InterpolatorError;

/// Anything that yields a color for an animation fraction.
pub trait Interpolate {
    /// Color at `fraction`. Values outside 0.0..=1.0 are not checked.
    fn color_at(&self, fraction: f32) -> Color;

    /// Sample evenly spaced fractions from 0.0 to 1.0 into `out`.
    fn fill(&self, out: &mut [Color]) {
        let last = out.len().saturating_sub(1);
        for (i, slot) in out.iter_mut().enumerate() {
            let fraction = if last == 0 {
                0.0
            } else {
                i as f32 / last as f32
            };
            *slot = self.color_at(fraction);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Interpolator {
    Rgb(RgbInterpolator),
    HsvForward(HsvInterpolator<ForwardHue>),
    HsvBackward(HsvInterpolator<BackwardHue>),
    Concat(ConcatInterpolator),
}

impl Interpolate for Interpolator {
    fn color_at(&self, fraction: f32) -> Color {
        match self {
            Self::Rgb(rgb) => rgb.color_at(fraction),
            Self::HsvForward(hsv) => hsv.color_at(fraction),
            Self::HsvBackward(hsv) => hsv.color_at(fraction),
            Self::Concat(concat) => concat.color_at(fraction),
        }
    }
}

impl Interpolator {
    /// RGB cross-fade. Source alpha is ignored and the result is opaque.
    pub fn rgb(from: Color, to: Color) -> Self {
        Self::Rgb(RgbInterpolator::new(AlphaSource::Opaque, from, to))
    }

    /// RGB cross-fade that also fades alpha. Equal alphas are kept as is.
    pub fn argb(from: Color, to: Color) -> Self {
        let alpha = AlphaSource::preserving(from.alpha(), to.alpha());
        Self::Rgb(RgbInterpolator::new(alpha, from, to))
    }

    /// Fade only the alpha of `color` towards `to_alpha`.
    pub fn alpha(color: Color, to_alpha: u8) -> Self {
        Self::argb(color, color.with_alpha(to_alpha))
    }

    /// HSV cross-fade. Source alpha is ignored and the result is opaque.
    pub fn hsv(from: Color, to: Color) -> Self {
        Self::hsv_with_alpha(from, to, 0, 0)
    }

    /// HSV cross-fade with explicit alphas. Equal alphas give an opaque
    /// result.
    pub fn hsv_with_alpha(from: Color, to: Color, from_alpha: u8, to_alpha: u8) -> Self {
        let alpha = AlphaSource::for_endpoints(from_alpha, to_alpha);
        let from_hsv = from.to_hsv();
        let to_hsv = to.to_hsv();

        if is_backwards(from_hsv.hue, to_hsv.hue) {
            log::debug!(
                "HSV {} -> {}: hue wraps through 0 ({:.1} -> {:.1})",
                from,
                to,
                from_hsv.hue,
                to_hsv.hue
            );
            let hue = BackwardHue::new(from_hsv.hue, to_hsv.hue);
            return Self::HsvBackward(HsvInterpolator::new(alpha, from_hsv, to_hsv, hue));
        }

        let hue = ForwardHue::new(from_hsv.hue, to_hsv.hue);
        Self::HsvForward(HsvInterpolator::new(alpha, from_hsv, to_hsv, hue))
    }

    /// Run `interpolators` one after another, each taking an equal share of
    /// the timeline. Strategies may be mixed.
    pub fn concat(interpolators: Vec<Interpolator>) -> Result<Self, InterpolatorError> {
        ConcatInterpolator::new(interpolators).map(Self::Concat)
    }

    /// RGB cross-fade through every color in order.
    pub fn rgb_sequence(colors: &[Color]) -> Result<Self, InterpolatorError> {
        Self::sequence(colors, Self::rgb)
    }

    /// ARGB cross-fade through every color in order.
    pub fn argb_sequence(colors: &[Color]) -> Result<Self, InterpolatorError> {
        Self::sequence(colors, Self::argb)
    }

    /// HSV cross-fade through every color in order. Alpha is ignored.
    pub fn hsv_sequence(colors: &[Color]) -> Result<Self, InterpolatorError> {
        Self::sequence(colors, Self::hsv)
    }

    /// Pair up consecutive colors with `pair` and chain the results.
    pub(crate) fn sequence(
        colors: &[Color],
        pair: impl Fn(Color, Color) -> Interpolator,
    ) -> Result<Self, InterpolatorError> {
        if colors.len() < 2 {
            return Err(InterpolatorError::NotEnoughColors {
                count: colors.len(),
            });
        }

        let mut segments: Vec<Interpolator> =
            colors.windows(2).map(|w| pair(w[0], w[1])).collect();

        if segments.len() == 1 {
            return Ok(segments.remove(0));
        }

        log::debug!("Chaining {} color segments", segments.len());
        Self::concat(segments)
    }

    /// Short name of the strategy, for logs and display.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rgb(_) => "rgb",
            Self::HsvForward(_) => "hsv",
            Self::HsvBackward(_) => "hsv-wrap",
            Self::Concat(_) => "concat",
        }
    }
}
