//! Board representation for numeric Tic-Tac-Toe.
//!
//! The board is a row-major 3x3 grid stored as 9 cells. A cell is either
//! empty or holds one of the integers 1-9, and each integer appears at most
//! once on the board.
//!
//! ```
//! use numeric_ttt::core::{Board, Cell};
//!
//! let board = Board::empty().with_placement(4, 5);
//! assert_eq!(board.get(4), Cell::Occupied(5));
//! assert_eq!(board.empties().count(), 8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EnvError, Result};

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Side length of the grid.
pub const BOARD_SIDE: usize = 3;

/// Every integer that may be placed, in ascending order.
pub const ALL_VALUES: [u8; BOARD_SIZE] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// A single board cell.
///
/// Serializes as `Option<u8>` so external callers see `null` for empty cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<u8>", into = "Option<u8>")]
pub enum Cell {
    /// No value placed.
    #[default]
    Empty,
    /// Holds an integer in 1..=9.
    Occupied(u8),
}

impl Cell {
    /// The placed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(v) => Some(v),
        }
    }

    /// Check if nothing has been placed here.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Contribution of this cell to a line sum. Empty counts as zero.
    #[must_use]
    pub const fn sum_value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(v) => v as i32,
        }
    }
}

impl From<Option<u8>> for Cell {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

impl From<Cell> for Option<u8> {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

/// The 3x3 board, read in row-major order.
///
/// `Board` is `Copy`: every transition produces a new snapshot and the
/// caller's board is never touched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// A board with all 9 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Build a board from its external representation, `None` meaning empty.
    ///
    /// Rejects values outside 1..=9 and values that appear more than once.
    pub fn from_values(values: [Option<u8>; BOARD_SIZE]) -> Result<Self> {
        let mut seen = 0u16;
        for value in values.iter().flatten().copied() {
            if !(1..=9).contains(&value) {
                return Err(EnvError::ValueOutOfRange { value });
            }
            let bit = 1u16 << value;
            if seen & bit != 0 {
                return Err(EnvError::DuplicateValue { value });
            }
            seen |= bit;
        }
        Ok(Self {
            cells: values.map(Cell::from),
        })
    }

    /// External representation, `None` for empty cells.
    #[must_use]
    pub fn to_values(&self) -> [Option<u8>; BOARD_SIZE] {
        self.cells.map(Cell::value)
    }

    /// All cells in row-major order.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Cell at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= 9`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    /// Cell at grid coordinates.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * BOARD_SIDE + col]
    }

    /// Check if the cell at `idx` is empty.
    #[must_use]
    pub fn is_empty(&self, idx: usize) -> bool {
        self.cells[idx].is_empty()
    }

    /// Indices of empty cells in ascending order.
    pub fn empties(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(idx, _)| idx)
    }

    /// Check if no empty cell remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Check if `value` is already on the board.
    #[must_use]
    pub fn contains_value(&self, value: u8) -> bool {
        self.cells.iter().any(|cell| cell.value() == Some(value))
    }

    /// Position holding `value`, if placed.
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<usize> {
        self.cells.iter().position(|cell| cell.value() == Some(value))
    }

    /// Values not yet placed, ascending.
    pub fn unused_values(&self) -> impl Iterator<Item = u8> + '_ {
        ALL_VALUES
            .iter()
            .copied()
            .filter(move |&v| !self.contains_value(v))
    }

    /// Copy of this board with `value` written at `position`.
    ///
    /// Overwrites whatever the cell held. Callers that need the placement
    /// rules enforced go through `Rules::validate` first.
    ///
    /// # Panics
    ///
    /// Panics if `position >= 9`.
    #[must_use]
    pub fn with_placement(mut self, position: usize, value: u8) -> Self {
        self.cells[position] = Cell::Occupied(value);
        self
    }

    /// Stable string key for tabular lookups, e.g. `"1-2-x-x-x-x-x-x-x"`.
    #[must_use]
    pub fn key(&self) -> String {
        self.cells
            .iter()
            .map(|cell| match cell {
                Cell::Empty => "x".to_string(),
                Cell::Occupied(v) => v.to_string(),
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIDE {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.at(row, col) {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(v) => write!(f, "{v}")?,
                }
            }
        }
        Ok(())
    }
}
