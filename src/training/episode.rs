//! Episode recording for agent training loops.
//!
//! An episode records every agent step from `reset` to a terminal board:
//! - The board the agent saw
//! - The agent's placement and the opponent's reply
//! - Reward, terminal flag and outcome label
//!
//! Episodes serialize with bincode so drivers can store them for replay.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, EnvRng, Mover, Placement};
use crate::env::{NumericTicTacToe, OpponentPolicy, StepInfo, StepResult};
use crate::error::{EnvError, Result};
use crate::rules::{Rules, RulesEngine};

/// One agent step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board before the agent moved.
    pub state: Board,
    /// The agent's placement.
    pub action: Placement,
    /// The opponent's reply, if the game went on.
    pub env_action: Option<Placement>,
    /// Reward for this step.
    pub reward: i32,
    /// Board after both moves.
    pub next_state: Board,
    /// Whether this step ended the episode.
    pub done: bool,
    /// Outcome label.
    pub info: StepInfo,
}

impl Transition {
    /// Pair the board the agent acted on with what `step` returned.
    pub fn new(state: Board, action: Placement, result: StepResult) -> Self {
        Self {
            state,
            action,
            env_action: result.env_action,
            reward: result.reward,
            next_state: result.next_state,
            done: result.done,
            info: result.info,
        }
    }
}

/// A complete episode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    /// Seed of the opponent RNG when the episode was played.
    pub seed: u64,

    /// Agent steps in order.
    pub transitions: Vec<Transition>,
}

impl Episode {
    /// Create an empty episode.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            transitions: Vec::new(),
        }
    }

    /// Add a transition.
    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    /// Number of agent steps.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if no step has been recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Sum of rewards.
    pub fn total_reward(&self) -> i32 {
        self.transitions.iter().map(|t| t.reward).sum()
    }

    /// Board after the last step.
    pub fn final_state(&self) -> Option<Board> {
        self.transitions.last().map(|t| t.next_state)
    }

    /// Outcome label of the last step.
    pub fn outcome(&self) -> Option<StepInfo> {
        self.transitions.last().map(|t| t.info)
    }

    /// Check if the last step ended the game.
    pub fn is_finished(&self) -> bool {
        self.transitions.last().is_some_and(|t| t.done)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// Play one episode from `reset` until the game ends.
///
/// `agent` receives the current board and its legal placements (never
/// empty) and returns the placement to make.
pub fn play_episode<O, F>(env: &mut NumericTicTacToe<O>, mut agent: F) -> Result<Episode>
where
    O: OpponentPolicy<Rules>,
    F: FnMut(&Board, &[Placement]) -> Placement,
{
    let mut episode = Episode::new(env.seed());
    let mut state = env.reset();

    loop {
        let actions = env.rules().legal_actions(&state, Mover::Agent);
        if actions.is_empty() {
            return Err(EnvError::NoAgentMove);
        }

        let action = agent(&state, &actions);
        let result = env.step(&state, action)?;
        episode.push(Transition::new(state, action, result));
        state = result.next_state;

        if result.done {
            break;
        }
    }

    debug!(
        steps = episode.len(),
        total_reward = episode.total_reward(),
        outcome = ?episode.outcome(),
        "episode finished"
    );
    Ok(episode)
}

/// Agent that picks uniformly among its legal placements.
pub fn random_agent(rng: &mut EnvRng) -> impl FnMut(&Board, &[Placement]) -> Placement + '_ {
    move |_, actions| actions[rng.gen_index(actions.len())]
}

/// Bounded store of recent episodes.
///
/// Uses a FIFO strategy: when full, the oldest episode is dropped.
#[derive(Clone, Debug)]
pub struct EpisodeBuffer {
    episodes: VecDeque<Episode>,
    max_episodes: usize,
}

impl EpisodeBuffer {
    /// Create a buffer holding at most `max_episodes`.
    pub fn new(max_episodes: usize) -> Self {
        Self {
            episodes: VecDeque::with_capacity(max_episodes),
            max_episodes,
        }
    }

    /// Add an episode, evicting the oldest if full. A zero-capacity buffer
    /// drops every episode.
    pub fn push(&mut self, episode: Episode) {
        if self.max_episodes == 0 {
            return;
        }
        if self.episodes.len() >= self.max_episodes {
            self.episodes.pop_front();
        }
        self.episodes.push_back(episode);
    }

    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.max_episodes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Episode> {
        self.episodes.iter()
    }

    /// Total transitions across all episodes.
    pub fn total_transitions(&self) -> usize {
        self.episodes.iter().map(Episode::len).sum()
    }

    /// Sample `batch_size` distinct transitions, reproducibly for a given seed.
    pub fn sample_batch(&self, batch_size: usize, seed: u64) -> Vec<Transition> {
        let all: Vec<&Transition> = self.episodes.iter().flat_map(|e| e.transitions.iter()).collect();
        if all.is_empty() || batch_size == 0 {
            return vec![];
        }

        let mut rng = EnvRng::new(seed);

        // Partial Fisher-Yates over the first `batch_size` slots
        let mut indices: Vec<usize> = (0..all.len()).collect();
        let n = indices.len();
        let limit = batch_size.min(n);
        for i in 0..limit {
            let j = i + rng.gen_index(n - i);
            indices.swap(i, j);
        }

        indices.into_iter().take(limit).map(|i| *all[i]).collect()
    }
}

impl Default for EpisodeBuffer {
    fn default() -> Self {
        Self::new(10000)
    }
}
