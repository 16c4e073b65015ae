//! Index-driven range sampling
//!
//! The i-th sample is computed as `lower + i * step`, so long ranges do
//! not accumulate rounding drift the way repeated addition does.

/// Samples of the half-open range `[lower, upper)` at a fixed step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    lower: f64,
    step: f64,
    count: usize,
}

impl SampleRange {
    /// `step` must be positive; an empty or inverted range has no samples
    pub fn new(lower: f64, upper: f64, step: f64) -> Self {
        let count = if step > 0.0 && upper > lower {
            let ratio = (upper - lower) / step;
            // keep 0.1 / 0.05 == 2.0000000000000004 at two samples
            (ratio - ratio.abs() * 1e-9).ceil().max(0.0) as usize
        } else {
            0
        };
        Self { lower, step, count }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The i-th sample
    pub fn at(&self, i: usize) -> f64 {
        self.lower + i as f64 * self.step
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.count).map(move |i| self.at(i))
    }
}
