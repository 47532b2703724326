use crate::color::round_channel;

/// Linear interpolation of the alpha channel alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaEvaluator {
    from: u8,
    to: u8,
}

impl AlphaEvaluator {
    pub fn new(from: u8, to: u8) -> Self {
        Self { from, to }
    }

    pub fn evaluate(&self, fraction: f32) -> u8 {
        let from = self.from as f32;
        let to = self.to as f32;
        round_channel(from + (to - from) * fraction)
    }
}

/// Where a strategy takes its output alpha from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlphaSource {
    /// Always 255.
    #[default]
    Opaque,
    /// A fixed alpha, used when both endpoints share one.
    Constant(u8),
    Evaluated(AlphaEvaluator),
}

impl AlphaSource {
    /// An evaluator when the alphas differ, opaque otherwise.
    pub fn for_endpoints(from: u8, to: u8) -> Self {
        if from != to {
            Self::Evaluated(AlphaEvaluator::new(from, to))
        } else {
            Self::Opaque
        }
    }

    /// Like [`AlphaSource::for_endpoints`] but keeps a shared alpha instead
    /// of forcing the result opaque.
    pub fn preserving(from: u8, to: u8) -> Self {
        if from != to {
            Self::Evaluated(AlphaEvaluator::new(from, to))
        } else {
            Self::Constant(from)
        }
    }

    pub fn alpha_at(&self, fraction: f32) -> u8 {
        match self {
            Self::Opaque => 0xFF,
            Self::Constant(alpha) => *alpha,
            Self::Evaluated(evaluator) => evaluator.evaluate(fraction),
        }
    }
}
