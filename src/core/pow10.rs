//! Purpose: Memoized powers of ten for scaling fractional and exponent parts.
//! Exports: `Pow10Cache`.
//! Role: Shared arithmetic support for the floating-point token scanner.
//! Invariants: Tables are append-only; entry `i` is always `10^i` / `10^-i`
//! (up to floating-point rounding) and is never mutated after creation.
//! Invariants: Each new entry derives from the previous one by one multiply,
//! so rounding error accumulates identically regardless of query order.

#[derive(Debug)]
pub struct Pow10Cache {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl Pow10Cache {
    pub fn new() -> Self {
        Self {
            positive: vec![1.0],
            negative: vec![1.0],
        }
    }

    /// Returns an approximation of `10^exponent`. Precision degrades as the
    /// exponent grows; callers must not assume exact values for large inputs.
    pub fn positive(&mut self, exponent: usize) -> f64 {
        while self.positive.len() <= exponent {
            let last = self.positive[self.positive.len() - 1];
            self.positive.push(last * 10.0);
        }
        self.positive[exponent]
    }

    /// Returns an approximation of `10^-exponent`.
    pub fn negative(&mut self, exponent: usize) -> f64 {
        while self.negative.len() <= exponent {
            let last = self.negative[self.negative.len() - 1];
            self.negative.push(last * 0.1);
        }
        self.negative[exponent]
    }
}

impl Default for Pow10Cache {
    fn default() -> Self {
        Self::new()
    }
}
