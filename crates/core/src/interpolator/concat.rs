use super::{Interpolate, Interpolator};
use crate::color::Color;
use crate::error::InterpolatorError;

/// Chains interpolators into one timeline. Each child owns an equal slice
/// of the fraction domain and sees its own 0.0 to 1.0 range.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcatInterpolator {
    children: Vec<Interpolator>,
}

impl ConcatInterpolator {
    pub fn new(children: Vec<Interpolator>) -> Result<Self, InterpolatorError> {
        if children.is_empty() {
            return Err(InterpolatorError::EmptyConcat);
        }

        Ok(Self { children })
    }

    pub fn children(&self) -> &[Interpolator] {
        &self.children
    }

    /// Map a global fraction onto (child index, local fraction).
    ///
    /// The local fraction is the position inside the child's slice of width
    /// `1 / len`, scaled back up to 0.0..1.0.
    pub fn locate(&self, fraction: f32) -> (usize, f32) {
        let len = self.children.len();
        let scaled = fraction * len as f32;
        let i = scaled as usize;

        // fraction 1.0 lands one past the last slice
        if i >= len {
            return (len - 1, 1.0);
        }

        (i, scaled - i as f32)
    }
}

impl Interpolate for ConcatInterpolator {
    fn color_at(&self, fraction: f32) -> Color {
        let (index, local) = self.locate(fraction);
        self.children[index].color_at(local)
    }
}
