//! Actions: a value placed at a position.
//!
//! The agent places odd values and the environment's opponent places even
//! values. `Mover` records which side an action belongs to so validation
//! can enforce that split.

use serde::{Deserialize, Serialize};

use crate::core::board::BOARD_SIZE;
use crate::error::{EnvError, Result};

/// Which side makes a placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mover {
    /// The learner. Places odd values.
    Agent,
    /// The automatic opponent. Places even values.
    Env,
}

impl Mover {
    /// Check if `value` has the parity this side is allowed to place.
    #[must_use]
    pub const fn owns_value(self, value: u8) -> bool {
        match self {
            Mover::Agent => value % 2 == 1,
            Mover::Env => value % 2 == 0,
        }
    }
}

impl std::fmt::Display for Mover {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mover::Agent => write!(f, "agent"),
            Mover::Env => write!(f, "env"),
        }
    }
}

/// A single placement: write `value` into the cell at `position`.
///
/// ## Example
///
/// ```
/// use numeric_ttt::core::Placement;
///
/// let action = Placement::new(7, 9);
/// assert_eq!(action.position, 7);
/// assert_eq!(action.value, 9);
/// assert_eq!(Placement::from((7, 9)), action);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Placement {
    /// Cell index in 0..9, row-major.
    pub position: usize,
    /// Integer in 1..=9.
    pub value: u8,
}

impl Placement {
    /// Create a placement.
    #[must_use]
    pub const fn new(position: usize, value: u8) -> Self {
        Self { position, value }
    }

    /// Check the position is on the board and the value is in 1..=9.
    ///
    /// Says nothing about the board the placement is applied to; see
    /// `RulesEngine::validate` for the full check.
    pub fn check_bounds(self) -> Result<Self> {
        if self.position >= BOARD_SIZE {
            return Err(EnvError::PositionOutOfRange {
                position: self.position,
            });
        }
        if !(1..=9).contains(&self.value) {
            return Err(EnvError::ValueOutOfRange { value: self.value });
        }
        Ok(self)
    }
}

impl From<(usize, u8)> for Placement {
    fn from((position, value): (usize, u8)) -> Self {
        Self { position, value }
    }
}

impl From<Placement> for (usize, u8) {
    fn from(action: Placement) -> Self {
        (action.position, action.value)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}
