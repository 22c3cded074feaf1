//! Frame-by-frame state for the decorative effects. Nothing in here touches
//! the DOM; components feed in viewport and pointer data and draw the result.

use std::ops::Range;

pub mod cursor;
pub mod easing;
pub mod matrix;
pub mod ocean;
pub mod scatter;
pub mod starfield;

/// SplitMix64 generator. Effects take it by `&mut` so tests can pin a seed.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform index into a slice of `len` items. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f64_01() * len as f64) as usize).min(len.saturating_sub(1))
    }

    pub fn range_u32(&mut self, range: Range<u32>) -> u32 {
        let span = range.end.saturating_sub(range.start);
        range.start + ((self.next_f64_01() * span as f64) as u32).min(span.saturating_sub(1))
    }

    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64_01() < p
    }
}

/// A fresh generator for one effect instance, seeded from the clock.
pub fn seeded_rng() -> Rng64 {
    Rng64::new(chrono::Utc::now().timestamp_millis() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = Rng64::new(123);
        let mut b = Rng64::new(123);
        for _ in 0..10 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_rng_ranges_are_respected() {
        let mut rng = Rng64::new(9);
        for _ in 0..1000 {
            let unit = rng.next_f64_01();
            assert!((0.0..1.0).contains(&unit));
            assert!(rng.index(3) < 3);
            assert!((5..8).contains(&rng.range_u32(5..8)));
        }
        assert!(!rng.chance(0.0));
        assert!(rng.chance(1.0));
    }
}
