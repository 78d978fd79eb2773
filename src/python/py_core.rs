//! Conversions between Python values and core types.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Placement, BOARD_SIZE};
use crate::error::EnvError;

impl From<EnvError> for PyErr {
    fn from(err: EnvError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Parse a Python board: a list of 9 entries, `None` for empty cells.
pub(crate) fn board_from_py(values: Vec<Option<u8>>) -> PyResult<Board> {
    let len = values.len();
    let cells: [Option<u8>; BOARD_SIZE] = values.try_into().map_err(|_| {
        PyValueError::new_err(format!("board must have {BOARD_SIZE} cells, got {len}"))
    })?;
    Ok(Board::from_values(cells)?)
}

/// Board as a Python list.
pub(crate) fn board_to_py(board: &Board) -> Vec<Option<u8>> {
    board.to_values().to_vec()
}

pub(crate) fn placements_to_py(actions: Vec<Placement>) -> Vec<(usize, u8)> {
    actions.into_iter().map(Into::into).collect()
}
