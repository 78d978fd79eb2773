//! Error types for the environment.

use thiserror::Error;

use crate::core::Mover;

/// Errors raised by board construction, action validation and replay decoding.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EnvError {
    #[error("position {position} is off the board (expected 0..9)")]
    PositionOutOfRange { position: usize },

    #[error("position {position} already holds {value}")]
    PositionOccupied { position: usize, value: u8 },

    #[error("value {value} is outside 1..=9")]
    ValueOutOfRange { value: u8 },

    #[error("value {value} is already on the board")]
    ValueAlreadyUsed { value: u8 },

    #[error("value {value} has the wrong parity for the {mover}")]
    WrongParity { value: u8, mover: Mover },

    #[error("value {value} appears more than once")]
    DuplicateValue { value: u8 },

    #[error("opponent has no legal move on a non-terminal board")]
    NoOpponentMove,

    #[error("agent has no legal move on a non-terminal board")]
    NoAgentMove,

    #[error("episode encoding error: {0}")]
    Codec(#[from] bincode::Error),
}

impl EnvError {
    /// Check if this error comes from an illegal placement.
    #[must_use]
    pub fn is_invalid_action(&self) -> bool {
        matches!(
            self,
            EnvError::PositionOutOfRange { .. }
                | EnvError::PositionOccupied { .. }
                | EnvError::ValueOutOfRange { .. }
                | EnvError::ValueAlreadyUsed { .. }
                | EnvError::WrongParity { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
