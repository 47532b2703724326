use super::alpha::AlphaSource;
use super::Interpolate;
use crate::color::{round_channel, Color};

/// Per-channel linear interpolation in RGB space.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbInterpolator {
    alpha: AlphaSource,
    from: [f32; 3],
    to: [f32; 3],
}

impl RgbInterpolator {
    pub fn new(alpha: AlphaSource, from: Color, to: Color) -> Self {
        Self {
            alpha,
            from: channels(from),
            to: channels(to),
        }
    }
}

fn channels(color: Color) -> [f32; 3] {
    let (r, g, b) = color.rgb();
    [r as f32, g as f32, b as f32]
}

impl Interpolate for RgbInterpolator {
    fn color_at(&self, fraction: f32) -> Color {
        let channel =
            |i: usize| round_channel(self.from[i] + (self.to[i] - self.from[i]) * fraction);

        Color::from_argb(
            self.alpha.alpha_at(fraction),
            channel(0),
            channel(1),
            channel(2),
        )
    }
}
