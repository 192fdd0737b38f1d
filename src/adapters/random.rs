use crate::domain::ports::RandomSource;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

/// Uses the calling thread's RNG, so concurrent requests never share state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut rand::thread_rng(), len, amount).into_vec()
    }

    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible draws for `--seed` and tests.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn sample_indices(&self, len: usize, amount: usize) -> Vec<usize> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        index::sample(&mut *rng, len, amount).into_vec()
    }

    fn pick_index(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_indices_are_distinct() {
        let random = ThreadRandom;
        for _ in 0..50 {
            let picks = random.sample_indices(5, 3);
            assert_eq!(picks.len(), 3);
            assert!(picks.iter().all(|i| *i < 5));
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_sample_all_indices() {
        let random = SeededRandom::new(7);
        let mut picks = random.sample_indices(3, 3);
        picks.sort();
        assert_eq!(picks, vec![0, 1, 2]);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = SeededRandom::new(42);
        let b = SeededRandom::new(42);

        assert_eq!(a.sample_indices(22, 3), b.sample_indices(22, 3));
        assert_eq!(a.pick_index(10), b.pick_index(10));
    }

    #[test]
    fn test_pick_index_in_range() {
        let random = ThreadRandom;
        for _ in 0..50 {
            assert!(random.pick_index(4) < 4);
        }
        assert_eq!(random.pick_index(1), 0);
    }
}
