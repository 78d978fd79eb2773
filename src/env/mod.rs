//! The environment an agent interacts with.
//!
//! `NumericTicTacToe::step` applies the agent's odd-valued placement,
//! checks for a finished game, and otherwise lets the opponent policy reply
//! with an even-valued placement before scoring the result.

pub mod opponent;
pub mod step;

pub use opponent::{FirstLegalOpponent, OpponentPolicy, UniformOpponent};
pub use step::{NumericTicTacToe, StepInfo, StepResult};
