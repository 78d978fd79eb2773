//! Opponent policies.
//!
//! After every non-terminal agent move the environment asks its opponent
//! policy for an even-valued placement.

use crate::core::{Board, EnvRng, Mover, Placement};
use crate::rules::RulesEngine;

/// Policy for choosing the environment's reply.
pub trait OpponentPolicy<E: RulesEngine>: Send + Sync {
    /// Choose an opponent placement.
    ///
    /// Returns `None` if no legal placement exists.
    fn choose_action(&self, engine: &E, state: &Board, rng: &mut EnvRng) -> Option<Placement>;
}

/// Uniform random opponent.
///
/// Draws one action uniformly from the legal opponent actions.
#[derive(Clone, Debug, Default)]
pub struct UniformOpponent;

impl<E: RulesEngine> OpponentPolicy<E> for UniformOpponent {
    fn choose_action(&self, engine: &E, state: &Board, rng: &mut EnvRng) -> Option<Placement> {
        let actions = engine.legal_actions(state, Mover::Env);
        rng.choose(&actions).copied()
    }
}

/// Always plays the first legal opponent action (lowest position, then
/// lowest value). Gives reproducible episodes without fixing a seed.
#[derive(Clone, Debug, Default)]
pub struct FirstLegalOpponent;

impl<E: RulesEngine> OpponentPolicy<E> for FirstLegalOpponent {
    fn choose_action(&self, engine: &E, state: &Board, _rng: &mut EnvRng) -> Option<Placement> {
        engine.legal_actions(state, Mover::Env).first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Rules;

    #[test]
    fn test_uniform_picks_legal_even_action() {
        let rules = Rules::new();
        let state = Board::empty().with_placement(0, 1).with_placement(4, 5);
        let mut rng = EnvRng::new(3);

        for _ in 0..50 {
            let action = UniformOpponent.choose_action(&rules, &state, &mut rng).unwrap();
            assert!(state.is_empty(action.position));
            assert_eq!(action.value % 2, 0);
        }
    }

    #[test]
    fn test_uniform_covers_every_action() {
        let rules = Rules::new();
        let state = Board::empty();
        let mut rng = EnvRng::new(11);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..2000 {
            seen.insert(UniformOpponent.choose_action(&rules, &state, &mut rng).unwrap());
        }

        // 9 positions x 4 even values
        assert_eq!(seen.len(), 36);
    }

    #[test]
    fn test_no_action_when_evens_exhausted() {
        let rules = Rules::new();
        let state = Board::empty()
            .with_placement(0, 2)
            .with_placement(1, 4)
            .with_placement(2, 6)
            .with_placement(3, 8);
        let mut rng = EnvRng::new(0);

        assert!(UniformOpponent.choose_action(&rules, &state, &mut rng).is_none());
        assert!(FirstLegalOpponent.choose_action(&rules, &state, &mut rng).is_none());
    }

    #[test]
    fn test_first_legal() {
        let rules = Rules::new();
        let state = Board::empty().with_placement(0, 1).with_placement(1, 2);
        let mut rng = EnvRng::new(0);

        assert_eq!(
            FirstLegalOpponent.choose_action(&rules, &state, &mut rng),
            Some(Placement::new(2, 4))
        );
    }
}
