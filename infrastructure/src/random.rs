//! [`RandomSource`] adapters backed by `rand`

use prep_application::RandomSource;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::{Mutex, PoisonError};

fn identity(len: usize) -> Vec<usize> {
    (0..len).collect()
}

/// Unseeded shuffling via the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order = identity(len);
        order.shuffle(&mut rand::thread_rng());
        order
    }
}

/// Reproducible shuffling from a fixed seed (`--seed`)
#[derive(Debug)]
pub struct SeededRandomSource {
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn permutation(&self, len: usize) -> Vec<usize> {
        let mut order = identity(len);
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        order.shuffle(&mut *rng);
        order
    }
}
