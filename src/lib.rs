//! # numeric-ttt
//!
//! Numeric Tic-Tac-Toe as a reinforcement-learning environment.
//!
//! ## Rules
//!
//! 1. **Board**: a 3x3 grid. Each cell is empty or holds one of 1-9, and
//!    every integer is used at most once.
//!
//! 2. **Players**: the agent places odd values, the environment's opponent
//!    places even values.
//!
//! 3. **Winning**: a row, column or diagonal whose values sum to 15. A full
//!    board with no such line is a tie.
//!
//! ## Architecture
//!
//! - **Pure rules**: `Rules` holds no mutable state. Transitions return a
//!   new `Board` and never touch the input.
//!
//! - **Injected randomness**: the opponent draws from a seedable `EnvRng`
//!   owned by the environment, so episodes replay exactly for a fixed seed.
//!
//! - **Checked steps**: `NumericTicTacToe::step` rejects illegal agent
//!   placements with an `EnvError` instead of corrupting the board.
//!
//! ## Modules
//!
//! - `core`: Board, placements, RNG, configuration
//! - `rules`: Win detection, terminal classification, action space
//! - `env`: The step function and opponent policies
//! - `training`: Episode recording for external training loops
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod env;
pub mod error;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, ALL_VALUES, BOARD_SIZE,
    EnvRng, EnvRngState,
    EnvConfig, LineRule, RewardTable,
    Mover, Placement,
};

pub use crate::error::{EnvError, Result};

pub use crate::rules::{Outcome, Rules, RulesEngine, LINES};

pub use crate::env::{
    NumericTicTacToe, StepInfo, StepResult,
    OpponentPolicy, UniformOpponent, FirstLegalOpponent,
};

pub use crate::training::{play_episode, random_agent, Episode, EpisodeBuffer, Transition};
