//! Environment step integration tests.
//!
//! These tests play concrete positions through `NumericTicTacToe::step`
//! and check the exact board, reward, terminal flag and label.

use numeric_ttt::{
    Board, EnvConfig, EnvError, FirstLegalOpponent, LineRule, NumericTicTacToe, Outcome,
    Placement, RulesEngine, StepInfo,
};

fn board(values: [Option<u8>; 9]) -> Board {
    Board::from_values(values).unwrap()
}

fn fixed_env(config: EnvConfig) -> NumericTicTacToe<FirstLegalOpponent> {
    NumericTicTacToe::with_opponent(config, FirstLegalOpponent)
}

// =============================================================================
// Documented Scenarios
// =============================================================================

/// Agent move that neither wins nor fills, with a fixed opponent reply.
#[test]
fn test_partial_board_with_fixed_opponent() {
    let mut env = fixed_env(EnvConfig::default());
    let state = board([Some(1), Some(2), Some(3), Some(4), None, None, None, None, None]);
    let action = Placement::new(7, 9);

    let after_agent = env.rules().state_transitions(&state, action);
    assert_eq!(
        after_agent.to_values(),
        [Some(1), Some(2), Some(3), Some(4), None, None, None, Some(9), None]
    );
    assert!(!env.rules().is_winning(&after_agent));

    let result = env.step(&state, action).unwrap();
    assert_eq!(
        result.next_state.to_values(),
        [Some(1), Some(2), Some(3), Some(4), Some(6), None, None, Some(9), None]
    );
    assert_eq!(result.into_tuple(), (result.next_state, -1, false, "resume"));
}

/// Agent completes 1 + 5 + 9 along the top row.
#[test]
fn test_agent_win_returns_agent_board() {
    let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(42));
    let state = board([Some(1), Some(5), None, None, Some(2), None, None, None, None]);

    let result = env.step(&state, Placement::new(2, 9)).unwrap();

    assert_eq!(result.reward, 10);
    assert!(result.done);
    assert_eq!(result.info.as_str(), "agent_won");
    assert_eq!(result.next_state, state.with_placement(2, 9));
    assert_eq!(result.next_state.occupied_count(), 4);
}

/// Full board without a line is a tie; reaching it through the
/// opponent's forced last move also scores a tie.
#[test]
fn test_tie() {
    let full = board([
        Some(1), Some(2), Some(3),
        Some(4), Some(6), Some(7),
        Some(5), Some(8), Some(9),
    ]);
    let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(3));
    assert_eq!(env.rules().is_terminal(&full), (true, Outcome::Tie));

    let state = board([
        Some(1), Some(2), Some(3),
        Some(4), Some(6), Some(7),
        Some(5), None, None,
    ]);
    let result = env.step(&state, Placement::new(8, 9)).unwrap();

    assert_eq!(result.env_action, Some(Placement::new(7, 8)));
    assert_eq!(result.next_state, full);
    assert_eq!(result.reward, 0);
    assert!(result.done);
    assert_eq!(result.info, StepInfo::Tie);
}

/// First moves of a game keep it running.
#[test]
fn test_ongoing_game() {
    let mut env = fixed_env(EnvConfig::default());
    let state = env.reset();

    let result = env.step(&state, Placement::new(0, 1)).unwrap();

    assert_eq!(result.env_action, Some(Placement::new(1, 2)));
    assert_eq!(result.reward, -1);
    assert!(!result.done);
    assert_eq!(result.info.as_str(), "resume");
}

// =============================================================================
// Line Rule
// =============================================================================

/// 7 next to an opponent 8 sums to 15 with the third cell still empty.
#[test]
fn test_partial_line_wins_by_default() {
    let state = board([None, Some(8), None, Some(1), None, None, None, None, None]);

    let mut env = fixed_env(EnvConfig::default());
    let result = env.step(&state, Placement::new(0, 7)).unwrap();
    assert_eq!(result.info, StepInfo::AgentWon);
    assert_eq!(result.reward, 10);

    let mut strict = fixed_env(EnvConfig::default().with_line_rule(LineRule::FullLines));
    let result = strict.step(&state, Placement::new(0, 7)).unwrap();
    assert_eq!(result.env_action, Some(Placement::new(2, 2)));
    assert_eq!(result.info, StepInfo::Resume);
    assert_eq!(result.reward, -1);
}

/// 8 and 7 on the main diagonal sum to 15, but the corner is still empty.
#[test]
fn test_partial_diagonal_does_not_win_by_default() {
    let state = board([Some(8), None, None, None, None, None, None, None, None]);

    let mut env = fixed_env(EnvConfig::default());
    let result = env.step(&state, Placement::new(4, 7)).unwrap();
    assert_eq!(result.env_action, Some(Placement::new(1, 2)));
    assert_eq!(result.info, StepInfo::Resume);
    assert_eq!(result.reward, -1);
    assert!(!result.done);

    let mut loose = fixed_env(EnvConfig::default().with_line_rule(LineRule::PartialSums));
    let result = loose.step(&state, Placement::new(4, 7)).unwrap();
    assert_eq!(result.env_action, None);
    assert_eq!(result.info, StepInfo::AgentWon);
    assert_eq!(result.reward, 10);
}

// =============================================================================
// Rejected Actions
// =============================================================================

#[test]
fn test_step_rejects_illegal_actions() {
    let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(0));
    let state = board([Some(1), Some(2), None, None, None, None, None, None, None]);

    for action in [
        Placement::new(0, 3),
        Placement::new(9, 3),
        Placement::new(2, 1),
        Placement::new(2, 4),
        Placement::new(2, 11),
    ] {
        let err = env.step(&state, action).unwrap_err();
        assert!(err.is_invalid_action(), "{action} should be rejected, got {err}");
    }
}

#[test]
fn test_rejection_leaves_rng_untouched() {
    let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(8));
    let mut twin = NumericTicTacToe::new(EnvConfig::default().with_seed(8));
    let state = env.reset();

    assert!(matches!(
        env.step(&state, Placement::new(0, 2)),
        Err(EnvError::WrongParity { .. })
    ));

    let a = env.step(&state, Placement::new(4, 5)).unwrap();
    let b = twin.step(&state, Placement::new(4, 5)).unwrap();
    assert_eq!(a, b);
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_rng_checkpoint_replays_opponent() {
    let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(21));
    let state = env.reset();
    let checkpoint = env.rng_state();

    let first = env.step(&state, Placement::new(4, 5)).unwrap();
    env.restore_rng(&checkpoint);
    let replay = env.step(&state, Placement::new(4, 5)).unwrap();

    assert_eq!(first, replay);
}

#[test]
fn test_unseeded_env_reports_seed() {
    let env = NumericTicTacToe::default();
    let replay = NumericTicTacToe::new(EnvConfig::default().with_seed(env.seed()));
    assert_eq!(env.rng_state(), replay.rng_state());
}
