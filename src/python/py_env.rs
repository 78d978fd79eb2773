//! Environment bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EnvConfig, LineRule, Placement};
use crate::env::NumericTicTacToe;
use crate::rules::RulesEngine;

use super::py_core::{board_from_py, board_to_py, placements_to_py};

type PyBoard = Vec<Option<u8>>;

/// Python wrapper for the numeric Tic-Tac-Toe environment.
///
/// Boards are lists of 9 entries with `None` for empty cells; actions are
/// `(position, value)` tuples.
#[pyclass(name = "NumericTicTacToe")]
pub struct PyNumericTicTacToe {
    env: NumericTicTacToe,
}

#[pymethods]
impl PyNumericTicTacToe {
    /// Create a new environment.
    ///
    /// # Arguments
    /// - seed: Opponent RNG seed (None draws one from OS entropy)
    /// - line_rule: "partial_rows_columns" (default), "partial_sums" or "full_lines"
    #[new]
    #[pyo3(signature = (seed = None, line_rule = "partial_rows_columns"))]
    fn new(seed: Option<u64>, line_rule: &str) -> PyResult<Self> {
        let line_rule: LineRule = line_rule.parse().map_err(PyValueError::new_err)?;
        let mut config = EnvConfig::default().with_line_rule(line_rule);
        if let Some(seed) = seed {
            config = config.with_seed(seed);
        }
        Ok(Self {
            env: NumericTicTacToe::new(config),
        })
    }

    /// Seed of the opponent RNG.
    #[getter]
    fn seed(&self) -> u64 {
        self.env.seed()
    }

    /// Fresh empty board.
    fn reset(&mut self) -> PyBoard {
        board_to_py(&self.env.reset())
    }

    /// Apply the agent's action and the opponent's reply.
    ///
    /// Returns `(next_state, reward, done, info)`.
    fn step(&mut self, state: PyBoard, action: (usize, u8)) -> PyResult<(PyBoard, i32, bool, &'static str)> {
        let board = board_from_py(state)?;
        let result = self.env.step(&board, Placement::from(action))?;
        let (next_state, reward, done, info) = result.into_tuple();
        Ok((board_to_py(&next_state), reward, done, info))
    }

    /// `(agent_actions, env_actions)` for a board.
    fn action_space(&self, state: PyBoard) -> PyResult<(Vec<(usize, u8)>, Vec<(usize, u8)>)> {
        let board = board_from_py(state)?;
        let (agent, env) = self.env.rules().action_space(&board);
        Ok((placements_to_py(agent), placements_to_py(env)))
    }

    /// Indices of empty cells.
    fn allowed_positions(&self, state: PyBoard) -> PyResult<Vec<usize>> {
        let board = board_from_py(state)?;
        Ok(self.env.rules().allowed_positions(&board))
    }

    /// `(agent_values, env_values)`: unused odd and even values.
    fn allowed_values(&self, state: PyBoard) -> PyResult<(Vec<u8>, Vec<u8>)> {
        let board = board_from_py(state)?;
        let (agent, env) = self.env.rules().allowed_values(&board);
        Ok((agent.to_vec(), env.to_vec()))
    }

    /// Check if any line reaches the win target.
    fn is_winning(&self, state: PyBoard) -> PyResult<bool> {
        let board = board_from_py(state)?;
        Ok(self.env.rules().is_winning(&board))
    }

    /// `(terminal, "Win" | "Tie" | "Resume")`.
    fn is_terminal(&self, state: PyBoard) -> PyResult<(bool, String)> {
        let board = board_from_py(state)?;
        let (done, outcome) = self.env.rules().is_terminal(&board);
        Ok((done, outcome.to_string()))
    }

    /// Board with the action written in. Position and value must be in
    /// range; occupancy, reuse and parity are not checked.
    fn state_transitions(&self, state: PyBoard, action: (usize, u8)) -> PyResult<PyBoard> {
        let board = board_from_py(state)?;
        let action = Placement::from(action).check_bounds()?;
        let next = self.env.rules().state_transitions(&board, action);
        Ok(board_to_py(&next))
    }

    fn __repr__(&self) -> String {
        format!("NumericTicTacToe(seed={})", self.env.seed())
    }
}
