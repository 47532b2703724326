use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default tension for the anticipate and overshoot curves.
const TENSION: f32 = 2.0;

/// Time curves applied to the raw animation fraction before it reaches the
/// interpolator. Anticipate, overshoot and bounce leave 0.0..=1.0 briefly.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    #[default]
    Linear,
    Accelerate,
    Decelerate,
    AccelerateDecelerate,
    Anticipate,
    Overshoot,
    AnticipateOvershoot,
    Bounce,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::Accelerate => "accelerate",
            Easing::Decelerate => "decelerate",
            Easing::AccelerateDecelerate => "accelerate-decelerate",
            Easing::Anticipate => "anticipate",
            Easing::Overshoot => "overshoot",
            Easing::AnticipateOvershoot => "anticipate-overshoot",
            Easing::Bounce => "bounce",
        }
    }

    pub fn all() -> Vec<Easing> {
        vec![
            Easing::Linear,
            Easing::Accelerate,
            Easing::Decelerate,
            Easing::AccelerateDecelerate,
            Easing::Anticipate,
            Easing::Overshoot,
            Easing::AnticipateOvershoot,
            Easing::Bounce,
        ]
    }

    // Takes the raw fraction (0.0 to 1.0) and returns the eased one
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Accelerate => t * t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::AccelerateDecelerate => ((t + 1.0) * PI).cos() / 2.0 + 0.5,
            Easing::Anticipate => anticipate(t, TENSION),
            Easing::Overshoot => overshoot(t - 1.0, TENSION) + 1.0,
            Easing::AnticipateOvershoot => {
                let tension = TENSION * 1.5;
                if t < 0.5 {
                    0.5 * anticipate(t * 2.0, tension)
                } else {
                    0.5 * (overshoot(t * 2.0 - 2.0, tension) + 2.0)
                }
            }
            Easing::Bounce => bounce_effect(t),
        }
    }
}

fn anticipate(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t - tension)
}

fn overshoot(t: f32, tension: f32) -> f32 {
    t * t * ((tension + 1.0) * t + tension)
}

fn bounce_effect(t: f32) -> f32 {
    let bounce = |t: f32| t * t * 8.0;

    let t = t * 1.1226;
    if t < 0.3535 {
        bounce(t)
    } else if t < 0.7408 {
        bounce(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce(t - 0.8526) + 0.9
    } else {
        bounce(t - 1.0435) + 0.95
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown easing {0:?}")]
pub struct ParseEasingError(pub String);

impl FromStr for Easing {
    type Err = ParseEasingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|easing| easing.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEasingError(s.to_string()))
    }
}
