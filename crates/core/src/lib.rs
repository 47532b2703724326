//! Crossfade core
//!
//! Computes the color at any point of a cross-fade between colors, for an
//! animation driver that advances a fraction from 0.0 to 1.0.
//!
//! # Strategies
//!
//! - **RGB**: per-channel linear interpolation, optionally fading alpha
//! - **HSV**: hue takes the shorter arc around the wheel, saturation and
//!   value move linearly
//! - **Concat**: several interpolators played back to back on one timeline

pub use animator::{AnimatorState, ColorAnimator, DEFAULT_DURATION};
pub use color::{Color, ColorParseError, Hsv};
pub use config::{ConfigError, ConfigFile, FadeConfig};
pub use easing::{Easing, ParseEasingError};
pub use error::InterpolatorError;
pub use interpolator::{
    AlphaEvaluator, AlphaSource, BackwardHue, ConcatInterpolator, ForwardHue, HsvInterpolator,
    HuePath, Interpolate, Interpolator, RgbInterpolator,
};
pub use mode::{CrossfadeMode, ParseModeError};

mod animator;
mod color;
mod config;
mod easing;
mod error;
pub mod interpolator;
mod mode;
