//! Rules of numeric Tic-Tac-Toe.
//!
//! `RulesEngine` defines:
//! - Win detection over rows, columns and diagonals
//! - Legal positions and the odd/even value split
//! - The pure state transition
//!
//! Terminal classification, the action space and placement validation are
//! provided on top of those.

pub mod engine;

pub use engine::{Outcome, Rules, RulesEngine, Values, LINES};
