use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// The random draws the sampling and augmentation stages need.
///
/// Every [`rand::Rng`] is a `RandomSource`, so callers pass
/// `rand::thread_rng()` for process-wide randomness or a seeded
/// [`StdRng`] for reproducible runs.
pub trait RandomSource {
    /// Uniform draw from the closed interval `[low, high]`.
    /// `low == high` returns `low` without consuming randomness.
    fn uniform(&mut self, low: f32, high: f32) -> f32;

    /// Gaussian draw. A zero standard deviation returns `mean` exactly.
    fn normal(&mut self, mean: f32, std_dev: f32) -> f32;

    /// Uniform index in `0..n`. `n` must be non-zero.
    fn index(&mut self, n: usize) -> usize;

    /// `k` distinct indices from `0..n`, uniformly without replacement.
    /// Requires `k <= n`.
    fn choose_distinct(&mut self, n: usize, k: usize) -> Vec<usize>;

    /// `k` indices from `0..n`, uniformly with replacement.
    fn choose_with_replacement(&mut self, n: usize, k: usize) -> Vec<usize> {
        (0..k).map(|_| self.index(n)).collect()
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform(&mut self, low: f32, high: f32) -> f32 {
        debug_assert!(low <= high, "uniform range is inverted: {low} > {high}");
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }

    fn normal(&mut self, mean: f32, std_dev: f32) -> f32 {
        if std_dev == 0.0 {
            return mean;
        }
        let z: f32 = self.sample(StandardNormal);
        mean + z * std_dev
    }

    fn index(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }

    fn choose_distinct(&mut self, n: usize, k: usize) -> Vec<usize> {
        index::sample(self, n, k).into_vec()
    }
}

/// Deterministic generator for reproducible sampling.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::{seeded, RandomSource};
    use proptest::prelude::*;

    #[test]
    fn degenerate_ranges_are_exact() {
        let mut rng = seeded(1);
        assert_eq!(rng.uniform(1.0, 1.0), 1.0);
        assert_eq!(rng.normal(0.25, 0.0), 0.25);
    }

    #[test]
    fn same_seed_same_draws() {
        let mut a = seeded(42);
        let mut b = seeded(42);
        for _ in 0..50 {
            assert_eq!(a.uniform(-1.0, 1.0), b.uniform(-1.0, 1.0));
            assert_eq!(a.normal(0.0, 0.01), b.normal(0.0, 0.01));
        }
        assert_eq!(a.choose_distinct(100, 10), b.choose_distinct(100, 10));
    }

    proptest! {
        #[test]
        fn choose_distinct_has_no_duplicates(n in 1usize..500, seed in any::<u64>()) {
            let mut rng = seeded(seed);
            let k = n / 2 + 1;
            let mut idx = rng.choose_distinct(n, k);
            prop_assert_eq!(idx.len(), k);
            idx.sort_unstable();
            idx.dedup();
            prop_assert_eq!(idx.len(), k);
            prop_assert!(idx.iter().all(|&i| i < n));
        }

        #[test]
        fn uniform_stays_in_range(low in -10.0f32..0.0, high in 0.0f32..10.0, seed in any::<u64>()) {
            let mut rng = seeded(seed);
            let v = rng.uniform(low, high);
            prop_assert!(v >= low && v <= high);
        }
    }
}
