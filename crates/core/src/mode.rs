use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Interpolator, InterpolatorError};

/// Which interpolation strategy to build from plain colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrossfadeMode {
    /// RGB, always opaque
    Rgb,
    /// RGB plus alpha
    Argb,
    /// HSV with the short hue arc, always opaque
    #[default]
    Hsv,
    /// HSV fading between each color's own alpha
    #[serde(rename = "hsv-alpha")]
    HsvWithAlpha,
}

impl CrossfadeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Argb => "argb",
            Self::Hsv => "hsv",
            Self::HsvWithAlpha => "hsv-alpha",
        }
    }

    pub fn all() -> Vec<CrossfadeMode> {
        vec![
            CrossfadeMode::Rgb,
            CrossfadeMode::Argb,
            CrossfadeMode::Hsv,
            CrossfadeMode::HsvWithAlpha,
        ]
    }

    /// Interpolator for a single transition.
    pub fn build(&self, from: Color, to: Color) -> Interpolator {
        match self {
            Self::Rgb => Interpolator::rgb(from, to),
            Self::Argb => Interpolator::argb(from, to),
            Self::Hsv => Interpolator::hsv(from, to),
            Self::HsvWithAlpha => Interpolator::hsv_with_alpha(from, to, from.alpha(), to.alpha()),
        }
    }

    /// Interpolator running through every color in order.
    pub fn build_sequence(&self, colors: &[Color]) -> Result<Interpolator, InterpolatorError> {
        Interpolator::sequence(colors, |from, to| self.build(from, to))
    }
}

impl fmt::Display for CrossfadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown crossfade mode {0:?}, expected one of rgb, argb, hsv, hsv-alpha")]
pub struct ParseModeError(pub String);

impl FromStr for CrossfadeMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseModeError(s.to_string()))
    }
}
