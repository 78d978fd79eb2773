//! Rule engine for numeric Tic-Tac-Toe.
//!
//! All rule functions are pure: they read a `Board` and return a value or a
//! new `Board`. Nothing here owns mutable state, so one `Rules` value can be
//! shared by any number of episodes.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::board::{Board, Cell, ALL_VALUES, BOARD_SIZE};
use crate::core::config::{EnvConfig, LineRule, DEFAULT_WIN_TARGET};
use crate::core::{Mover, Placement};
use crate::error::{EnvError, Result};

/// Rows, columns and diagonals, by cell index.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Unused values of one parity. Never more than 5.
pub type Values = SmallVec<[u8; 5]>;

/// Classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Game continues.
    Resume,
    /// Some line reached the win target.
    Win,
    /// Board is full and no line wins.
    Tie,
}

impl Outcome {
    /// Check if the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Resume)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Resume => write!(f, "Resume"),
            Outcome::Win => write!(f, "Win"),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Rules engine trait.
///
/// Implementors supply win detection, the legal positions and values, and
/// the transition function. Terminal classification, the action space and
/// validation are built on top of those.
pub trait RulesEngine {
    /// Check if any line wins.
    fn is_winning(&self, state: &Board) -> bool;

    /// Empty cell indices, ascending.
    fn allowed_positions(&self, state: &Board) -> Vec<usize>;

    /// Unused values split into `(agent_values, env_values)`.
    fn allowed_values(&self, state: &Board) -> (Values, Values);

    /// New board with the placement applied.
    ///
    /// Precondition: `action.position` is empty and `action.value` is unused.
    /// This is not checked; see `validate`.
    fn state_transitions(&self, state: &Board, action: Placement) -> Board;

    // === Convenience Methods ===

    /// Classify the board. Win detection runs before the full-board check,
    /// so a full board with a winning line is a Win.
    fn is_terminal(&self, state: &Board) -> (bool, Outcome) {
        if self.is_winning(state) {
            (true, Outcome::Win)
        } else if state.is_full() {
            (true, Outcome::Tie)
        } else {
            (false, Outcome::Resume)
        }
    }

    /// `(agent_actions, env_actions)`: legal positions crossed with each
    /// side's legal values, position-major.
    fn action_space(&self, state: &Board) -> (Vec<Placement>, Vec<Placement>) {
        let positions = self.allowed_positions(state);
        let (agent_values, env_values) = self.allowed_values(state);
        (
            cartesian(&positions, &agent_values),
            cartesian(&positions, &env_values),
        )
    }

    /// Legal actions for one side.
    fn legal_actions(&self, state: &Board, mover: Mover) -> Vec<Placement> {
        let positions = self.allowed_positions(state);
        let (agent_values, env_values) = self.allowed_values(state);
        match mover {
            Mover::Agent => cartesian(&positions, &agent_values),
            Mover::Env => cartesian(&positions, &env_values),
        }
    }

    /// Check a placement against the board and the mover's parity.
    fn validate(&self, state: &Board, action: Placement, mover: Mover) -> Result<()> {
        let Placement { position, value } = action;
        if position >= BOARD_SIZE {
            return Err(EnvError::PositionOutOfRange { position });
        }
        if let Cell::Occupied(held) = state.get(position) {
            return Err(EnvError::PositionOccupied {
                position,
                value: held,
            });
        }
        if !(1..=9).contains(&value) {
            return Err(EnvError::ValueOutOfRange { value });
        }
        if state.contains_value(value) {
            return Err(EnvError::ValueAlreadyUsed { value });
        }
        if !mover.owns_value(value) {
            return Err(EnvError::WrongParity { value, mover });
        }
        Ok(())
    }
}

fn is_diagonal(line: &[usize; 3]) -> bool {
    *line == LINES[6] || *line == LINES[7]
}

fn is_full_line(state: &Board, line: &[usize; 3]) -> bool {
    line.iter().all(|&idx| !state.is_empty(idx))
}

fn cartesian(positions: &[usize], values: &[u8]) -> Vec<Placement> {
    let mut out = Vec::with_capacity(positions.len() * values.len());
    for &position in positions {
        for &value in values {
            out.push(Placement::new(position, value));
        }
    }
    out
}

/// The standard numeric Tic-Tac-Toe rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rules {
    win_target: i32,
    line_rule: LineRule,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            win_target: DEFAULT_WIN_TARGET,
            line_rule: LineRule::PartialRowsColumns,
        }
    }
}

impl Rules {
    /// Rules with the standard target of 15, partial row and column sums,
    /// and diagonals that count only when full.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rules taking target and line rule from a config.
    #[must_use]
    pub fn from_config(config: &EnvConfig) -> Self {
        Self {
            win_target: config.win_target,
            line_rule: config.line_rule,
        }
    }

    /// Line sum that wins.
    #[must_use]
    pub const fn win_target(&self) -> i32 {
        self.win_target
    }

    /// How partial lines are treated.
    #[must_use]
    pub const fn line_rule(&self) -> LineRule {
        self.line_rule
    }

    /// Sum of each of the 8 lines, in `LINES` order. Empty cells add zero.
    #[must_use]
    pub fn line_sums(state: &Board) -> [i32; 8] {
        LINES.map(|line| line.iter().map(|&idx| state.get(idx).sum_value()).sum())
    }

    /// Lines that currently reach the target.
    #[must_use]
    pub fn winning_lines(&self, state: &Board) -> Vec<[usize; 3]> {
        LINES
            .iter()
            .zip(Self::line_sums(state))
            .filter(|(line, sum)| *sum == self.win_target && self.line_counts(state, line))
            .map(|(line, _)| *line)
            .collect()
    }

    fn line_counts(&self, state: &Board, line: &[usize; 3]) -> bool {
        match self.line_rule {
            LineRule::PartialSums => true,
            LineRule::PartialRowsColumns => !is_diagonal(line) || is_full_line(state, line),
            LineRule::FullLines => is_full_line(state, line),
        }
    }
}

impl RulesEngine for Rules {
    fn is_winning(&self, state: &Board) -> bool {
        LINES
            .iter()
            .zip(Self::line_sums(state))
            .any(|(line, sum)| sum == self.win_target && self.line_counts(state, line))
    }

    fn allowed_positions(&self, state: &Board) -> Vec<usize> {
        state.empties().collect()
    }

    fn allowed_values(&self, state: &Board) -> (Values, Values) {
        ALL_VALUES
            .iter()
            .copied()
            .filter(|&v| !state.contains_value(v))
            .partition(|&v| Mover::Agent.owns_value(v))
    }

    fn state_transitions(&self, state: &Board, action: Placement) -> Board {
        trace!(position = action.position, value = action.value, "placement");
        state.with_placement(action.position, action.value)
    }
}
