//! Python bindings for the numeric Tic-Tac-Toe environment.
//!
//! # Quick Start
//!
//! ```python
//! import numeric_ttt
//!
//! env = numeric_ttt.NumericTicTacToe(seed=42)
//! state = env.reset()
//!
//! agent_actions, _ = env.action_space(state)
//! state, reward, done, info = env.step(state, agent_actions[0])
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_env::PyNumericTicTacToe;

/// numeric_ttt: numeric Tic-Tac-Toe environment for RL agents.
#[pymodule]
fn numeric_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyNumericTicTacToe>()?;
    Ok(())
}
