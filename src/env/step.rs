//! The environment: reset and step.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Board, EnvConfig, EnvRng, EnvRngState, Mover, Placement};
use crate::error::{EnvError, Result};
use crate::rules::{Outcome, Rules, RulesEngine};

use super::opponent::{OpponentPolicy, UniformOpponent};

/// Why a step ended the way it did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepInfo {
    /// Agent completed a winning line.
    AgentWon,
    /// Opponent completed a winning line.
    EnvWon,
    /// Board filled without a winner.
    Tie,
    /// Game continues.
    Resume,
}

impl StepInfo {
    /// Label handed to external drivers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            StepInfo::AgentWon => "agent_won",
            StepInfo::EnvWon => "env_won",
            StepInfo::Tie => "tie",
            StepInfo::Resume => "resume",
        }
    }
}

impl std::fmt::Display for StepInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one environment tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the agent's move and, if the game went on, the opponent's.
    pub next_state: Board,
    /// Reward for the agent.
    pub reward: i32,
    /// Whether the episode is over.
    pub done: bool,
    /// Outcome label.
    pub info: StepInfo,
    /// The opponent's reply, `None` when the agent's move ended the game.
    pub env_action: Option<Placement>,
}

impl StepResult {
    /// `(next_state, reward, done, info)`.
    #[must_use]
    pub fn into_tuple(self) -> (Board, i32, bool, &'static str) {
        (self.next_state, self.reward, self.done, self.info.as_str())
    }
}

/// Numeric Tic-Tac-Toe environment.
///
/// Holds no board of its own: callers pass the current board into `step`
/// and keep the returned one. The only mutable state is the opponent's RNG.
///
/// ## Example
///
/// ```
/// use numeric_ttt::{EnvConfig, NumericTicTacToe, Placement};
///
/// let mut env = NumericTicTacToe::new(EnvConfig::default().with_seed(42));
/// let board = env.reset();
/// let result = env.step(&board, Placement::new(4, 5)).unwrap();
///
/// assert_eq!(result.reward, -1);
/// assert!(!result.done);
/// assert_eq!(result.next_state.occupied_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct NumericTicTacToe<O = UniformOpponent> {
    rules: Rules,
    config: EnvConfig,
    rng: EnvRng,
    opponent: O,
}

impl NumericTicTacToe<UniformOpponent> {
    /// Environment with a uniform random opponent.
    #[must_use]
    pub fn new(config: EnvConfig) -> Self {
        Self::with_opponent(config, UniformOpponent)
    }
}

impl Default for NumericTicTacToe<UniformOpponent> {
    fn default() -> Self {
        Self::new(EnvConfig::default())
    }
}

impl<O: OpponentPolicy<Rules>> NumericTicTacToe<O> {
    /// Environment with a custom opponent policy.
    #[must_use]
    pub fn with_opponent(config: EnvConfig, opponent: O) -> Self {
        let rng = config.seed.map_or_else(EnvRng::from_entropy, EnvRng::new);
        Self {
            rules: Rules::from_config(&config),
            config,
            rng,
            opponent,
        }
    }

    /// The rule engine in use.
    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    /// The configuration this environment was built from.
    #[must_use]
    pub const fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Seed of the opponent RNG, including one drawn from entropy.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Checkpoint of the opponent RNG.
    #[must_use]
    pub fn rng_state(&self) -> EnvRngState {
        self.rng.state()
    }

    /// Resume the opponent RNG from a checkpoint.
    pub fn restore_rng(&mut self, state: &EnvRngState) {
        self.rng = EnvRng::from_state(state);
    }

    /// Start an episode: a board with every cell empty.
    pub fn reset(&mut self) -> Board {
        debug!(seed = self.rng.seed(), "reset");
        Board::empty()
    }

    /// Apply the agent's placement, then the opponent's reply if the game
    /// is still running.
    ///
    /// The agent action must target an empty cell with an unused odd value.
    /// Anything else is rejected and the RNG is left untouched.
    pub fn step(&mut self, state: &Board, action: Placement) -> Result<StepResult> {
        if let Err(err) = self.rules.validate(state, action, Mover::Agent) {
            warn!(%action, %err, "rejected agent action");
            return Err(err);
        }

        let rewards = self.config.rewards;
        let next_state = self.rules.state_transitions(state, action);
        match self.rules.is_terminal(&next_state) {
            (true, Outcome::Win) => {
                return Ok(self.finish(next_state, rewards.agent_win, true, StepInfo::AgentWon, None));
            }
            (true, Outcome::Tie) => {
                return Ok(self.finish(next_state, rewards.tie, true, StepInfo::Tie, None));
            }
            _ => {}
        }

        let env_action = self
            .opponent
            .choose_action(&self.rules, &next_state, &mut self.rng)
            .ok_or(EnvError::NoOpponentMove)?;
        let next_state = self.rules.state_transitions(&next_state, env_action);

        let (reward, done, info) = match self.rules.is_terminal(&next_state) {
            (true, Outcome::Win) => (rewards.env_win, true, StepInfo::EnvWon),
            (true, Outcome::Tie) => (rewards.tie, true, StepInfo::Tie),
            _ => (rewards.step, false, StepInfo::Resume),
        };
        Ok(self.finish(next_state, reward, done, info, Some(env_action)))
    }

    fn finish(
        &self,
        next_state: Board,
        reward: i32,
        done: bool,
        info: StepInfo,
        env_action: Option<Placement>,
    ) -> StepResult {
        debug!(%info, reward, done, board = %next_state.key(), "step");
        StepResult {
            next_state,
            reward,
            done,
            info,
            env_action,
        }
    }
}
