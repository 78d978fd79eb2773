//! Seedable random source for opponent moves.
//!
//! The environment never reaches for ambient global randomness. It owns an
//! `EnvRng` built from `EnvConfig::seed`, so the same seed replays the same
//! opponent moves.
//!
//! ```
//! use numeric_ttt::core::EnvRng;
//!
//! let mut a = EnvRng::new(7);
//! let mut b = EnvRng::new(7);
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//!
//! // Forks give independent streams for parallel episodes.
//! let mut worker = a.fork();
//! let _ = worker.gen_index(10);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8 generator with forking and checkpointing.
#[derive(Clone, Debug)]
pub struct EnvRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl EnvRng {
    /// Create a generator from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a generator seeded from the thread-local entropy source.
    ///
    /// The chosen seed is still recorded, so `seed()` can be logged to
    /// replay the run later.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive an independent stream.
    ///
    /// Each fork gets a different but deterministic seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Uniform index in `0..upper`.
    ///
    /// # Panics
    ///
    /// Panics if `upper == 0`.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }

    /// Choose a random element from a slice, `None` if it is empty.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> EnvRngState {
        EnvRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore a generator from a checkpoint.
    #[must_use]
    pub fn from_state(state: &EnvRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable generator position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Forks taken so far
    pub fork_counter: u64,
}
