//! Support for external training loops.
//!
//! The crate does not learn anything itself. This module gives drivers:
//!
//! - **Episode**: every agent step of one game, serializable for replay
//! - **play_episode**: runs a game with a caller-supplied agent closure
//! - **EpisodeBuffer**: bounded FIFO store with reproducible sampling
//!
//! ## Usage
//!
//! ```
//! use numeric_ttt::core::{EnvConfig, EnvRng};
//! use numeric_ttt::env::NumericTicTacToe;
//! use numeric_ttt::training::{play_episode, random_agent, EpisodeBuffer};
//!
//! let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(42));
//! let mut agent_rng = EnvRng::new(7);
//!
//! let mut buffer = EpisodeBuffer::new(100);
//! for _ in 0..10 {
//!     let episode = play_episode(&mut env, random_agent(&mut agent_rng)).unwrap();
//!     buffer.push(episode);
//! }
//!
//! let batch = buffer.sample_batch(16, 1);
//! assert!(batch.len() <= 16);
//! ```

pub mod episode;

pub use episode::{play_episode, random_agent, Episode, EpisodeBuffer, Transition};
