//! Core types: board, placements, RNG, configuration.

pub mod action;
pub mod board;
pub mod config;
pub mod rng;

pub use action::{Mover, Placement};
pub use board::{Board, Cell, ALL_VALUES, BOARD_SIDE, BOARD_SIZE};
pub use config::{EnvConfig, LineRule, RewardTable, DEFAULT_WIN_TARGET};
pub use rng::{EnvRng, EnvRngState};
