use rand::prelude::*;

use crate::errs::{
    Error,
    Result,
};

/// Upon the insertion of a new node in the list, the node is replicated to high
/// levels with a certain probability as determined by a `LevelGenerator`.
pub trait LevelGenerator {
    /// The total number of levels that are assumed to exist for this level
    /// generator.
    fn total(&self) -> usize;
    /// Generate a random level for a new node in the range `[0, total)`.
    ///
    /// This must never return a level that is `>= self.total()`.
    fn random(&mut self) -> usize;
}

/// A level generator which will produce geometrically distributed numbers.
///
/// The probability of generating level `n` is `p` times the probability of
/// generating level `n-1`, with the probability truncated at the maximum number
/// of levels allowed.
#[derive(Debug, Clone)]
pub struct GeometricalLevelGenerator {
    total: usize,
    p: f64,
    rng: SmallRng, // Fast generator
}

impl GeometricalLevelGenerator {
    /// Create a new GeometricalLevelGenerator with `total` number of levels,
    /// and `p` as the probability that a given node is present in the next
    /// level. The generator is seeded from the OS.
    ///
    /// `p` must be strictly between 0 and 1, and `total` must be at least 1.
    pub fn new(total: usize, p: f64) -> Result<Self> {
        Self::with_rng(total, p, SmallRng::from_entropy())
    }

    /// Same as [`GeometricalLevelGenerator::new`], but reproducible.
    pub fn with_seed(total: usize, p: f64, seed: u64) -> Result<Self> {
        Self::with_rng(total, p, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(total: usize, p: f64, rng: SmallRng) -> Result<Self> {
        if total == 0 {
            return Err(Error::InvalidArgument("total must be non-zero"));
        }
        if !(p > 0.0 && p < 1.0) {
            return Err(Error::InvalidArgument("p must be in (0, 1)"));
        }
        Ok(GeometricalLevelGenerator { total, p, rng })
    }
}

impl LevelGenerator for GeometricalLevelGenerator {
    fn random(&mut self) -> usize {
        let mut h = 0;
        let mut x = self.p;
        let f = 1.0 - self.rng.gen::<f64>();
        while x > f && h + 1 < self.total {
            h += 1;
            x *= self.p
        }
        h
    }

    fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::{
        GeometricalLevelGenerator,
        LevelGenerator,
    };

    #[test]
    fn invalid_total() {
        assert!(GeometricalLevelGenerator::new(0, 0.5).is_err());
    }

    #[test]
    fn invalid_p_0() {
        assert!(GeometricalLevelGenerator::new(1, 0.0).is_err());
    }

    #[test]
    fn invalid_p_1() {
        assert!(GeometricalLevelGenerator::new(1, 1.0).is_err());
    }

    #[test]
    fn invalid_p_nan() {
        assert!(GeometricalLevelGenerator::new(4, f64::NAN).is_err());
    }

    #[test]
    fn new() {
        assert!(GeometricalLevelGenerator::new(1, 0.5).is_ok());
    }

    #[test]
    fn levels_stay_in_range() {
        let mut generator = GeometricalLevelGenerator::with_seed(4, 0.5, 7).unwrap();
        for _ in 0..10_000 {
            assert!(generator.random() < generator.total());
        }
    }

    #[test]
    fn roughly_geometric() {
        let mut generator = GeometricalLevelGenerator::with_seed(16, 0.5, 11).unwrap();
        let samples = 100_000;
        let base = (0..samples).filter(|_| generator.random() == 0).count();
        // half of the nodes should stay on level 0
        let ratio = base as f64 / samples as f64;
        assert!((0.47..0.53).contains(&ratio), "level 0 ratio was {}", ratio);
    }

    #[test]
    fn same_seed_same_levels() {
        let mut a = GeometricalLevelGenerator::with_seed(8, 0.5, 42).unwrap();
        let mut b = GeometricalLevelGenerator::with_seed(8, 0.5, 42).unwrap();
        let a: Vec<_> = (0..64).map(|_| a.random()).collect();
        let b: Vec<_> = (0..64).map(|_| b.random()).collect();
        assert_eq!(a, b);
    }
}
