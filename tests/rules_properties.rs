//! Property tests for the rule engine and episode invariants.

use proptest::prelude::*;
use proptest::sample::Index;

use numeric_ttt::{
    play_episode, random_agent, Board, EnvConfig, EnvRng, Mover, NumericTicTacToe, Placement, Rules,
    RulesEngine, StepInfo, ALL_VALUES, BOARD_SIZE,
};

/// Any legal board: a shuffled 1-9 with a random subset of cells cleared.
fn arb_board() -> impl Strategy<Value = Board> {
    (
        Just(ALL_VALUES.to_vec()).prop_shuffle(),
        prop::array::uniform9(any::<bool>()),
    )
        .prop_map(|(values, occupied)| {
            let mut cells = [None; BOARD_SIZE];
            for idx in 0..BOARD_SIZE {
                if occupied[idx] {
                    cells[idx] = Some(values[idx]);
                }
            }
            Board::from_values(cells).unwrap()
        })
}

proptest! {
    #[test]
    fn allowed_values_partition_unused(state in arb_board()) {
        let (agent, env) = Rules::new().allowed_values(&state);

        prop_assert!(agent.iter().all(|v| v % 2 == 1));
        prop_assert!(env.iter().all(|v| v % 2 == 0));
        prop_assert!(agent.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(env.windows(2).all(|w| w[0] < w[1]));

        let mut union: Vec<u8> = agent.iter().chain(env.iter()).copied().collect();
        union.sort_unstable();
        let unused: Vec<u8> = state.unused_values().collect();
        prop_assert_eq!(union, unused);
    }

    #[test]
    fn allowed_positions_are_empty_cells_in_order(state in arb_board()) {
        let positions = Rules::new().allowed_positions(&state);

        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(positions.iter().all(|&p| state.is_empty(p)));
        prop_assert_eq!(positions.len(), BOARD_SIZE - state.occupied_count());
    }

    #[test]
    fn action_space_matches_positions_and_values(state in arb_board()) {
        let rules = Rules::new();
        let positions = rules.allowed_positions(&state);
        let (agent_values, env_values) = rules.allowed_values(&state);
        let (agent, env) = rules.action_space(&state);

        prop_assert_eq!(agent.len(), positions.len() * agent_values.len());
        prop_assert_eq!(env.len(), positions.len() * env_values.len());
        prop_assert!(agent.iter().all(|a| rules.validate(&state, *a, Mover::Agent).is_ok()));
        prop_assert!(env.iter().all(|a| rules.validate(&state, *a, Mover::Env).is_ok()));
    }

    #[test]
    fn transition_changes_only_target_cell(
        state in arb_board(),
        position in any::<Index>(),
        value in any::<Index>(),
    ) {
        let empties: Vec<usize> = state.empties().collect();
        prop_assume!(!empties.is_empty());
        let unused: Vec<u8> = state.unused_values().collect();

        let action = Placement::new(*position.get(&empties), *value.get(&unused));
        let next = Rules::new().state_transitions(&state, action);

        for idx in 0..BOARD_SIZE {
            if idx == action.position {
                prop_assert_eq!(next.get(idx).value(), Some(action.value));
            } else {
                prop_assert_eq!(next.get(idx), state.get(idx));
            }
        }
        prop_assert!(state.is_empty(action.position));
    }

    #[test]
    fn is_terminal_is_pure(state in arb_board()) {
        let rules = Rules::new();
        let first = rules.is_terminal(&state);
        prop_assert_eq!(first, rules.is_terminal(&state));
        prop_assert_eq!(first.0, first.1.is_terminal());
    }

    #[test]
    fn episodes_use_fixed_rewards_and_parities(env_seed in any::<u64>(), agent_seed in any::<u64>()) {
        let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(env_seed));
        let mut agent_rng = EnvRng::new(agent_seed);
        let episode = play_episode(&mut env, random_agent(&mut agent_rng)).unwrap();

        prop_assert!(episode.is_finished());
        for t in &episode.transitions {
            prop_assert!([10, 0, -1, -10].contains(&t.reward));
            prop_assert_eq!(t.action.value % 2, 1);
            if let Some(reply) = t.env_action {
                prop_assert_eq!(reply.value % 2, 0);
            }

            let expected = match t.info {
                StepInfo::AgentWon => 10,
                StepInfo::EnvWon => -10,
                StepInfo::Tie => 0,
                StepInfo::Resume => -1,
            };
            prop_assert_eq!(t.reward, expected);
            prop_assert_eq!(t.done, t.info != StepInfo::Resume);

            let placed = t.next_state.occupied_count() - t.state.occupied_count();
            if t.env_action.is_none() {
                prop_assert!(matches!(t.info, StepInfo::AgentWon | StepInfo::Tie));
                prop_assert_eq!(placed, 1);
            } else {
                prop_assert_eq!(placed, 2);
            }
        }
    }
}

#[test]
fn empty_board_is_open() {
    let rules = Rules::new();
    let state = Board::empty();

    assert!(!rules.is_winning(&state));
    assert_eq!(rules.allowed_positions(&state), (0..9).collect::<Vec<_>>());
    let (agent, env) = rules.action_space(&state);
    assert_eq!(agent.len(), 45);
    assert_eq!(env.len(), 36);
}
