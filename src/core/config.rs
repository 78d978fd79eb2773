//! Environment configuration.
//!
//! `EnvConfig` collects everything a driver may tune: the opponent seed,
//! the reward table and the win-line rule. Defaults reproduce the standard
//! game exactly.

use serde::{Deserialize, Serialize};

/// Line sum that wins the game.
pub const DEFAULT_WIN_TARGET: i32 = 15;

/// How lines with empty cells take part in win detection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRule {
    /// Rows and columns are summed over their occupied cells, empty cells
    /// adding zero. Diagonals only count once all three cells are filled.
    #[default]
    PartialRowsColumns,
    /// Every line, diagonals included, is summed over its occupied cells.
    PartialSums,
    /// Only lines with all three cells occupied can win.
    FullLines,
}

impl std::str::FromStr for LineRule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "partial_rows_columns" => Ok(LineRule::PartialRowsColumns),
            "partial_sums" => Ok(LineRule::PartialSums),
            "full_lines" => Ok(LineRule::FullLines),
            other => Err(format!("unknown line rule: {other}")),
        }
    }
}

/// Rewards handed back by `step`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardTable {
    /// Agent completes a winning line with its own move.
    pub agent_win: i32,
    /// Opponent completes a winning line.
    pub env_win: i32,
    /// Board fills with no winning line.
    pub tie: i32,
    /// Per-step cost while the game continues.
    pub step: i32,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            agent_win: 10,
            env_win: -10,
            tie: 0,
            step: -1,
        }
    }
}

impl RewardTable {
    /// All distinct rewards this table can produce.
    #[must_use]
    pub fn values(&self) -> [i32; 4] {
        [self.agent_win, self.env_win, self.tie, self.step]
    }
}

/// Environment configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Seed for opponent moves. `None` draws a seed from OS entropy.
    pub seed: Option<u64>,

    /// Reward for each outcome.
    pub rewards: RewardTable,

    /// Which partially filled lines count towards a win.
    pub line_rule: LineRule,

    /// Line sum that wins.
    pub win_target: i32,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rewards: RewardTable::default(),
            line_rule: LineRule::default(),
            win_target: DEFAULT_WIN_TARGET,
        }
    }
}

impl EnvConfig {
    /// Fix the opponent seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the reward table.
    #[must_use]
    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Choose how partial lines are treated.
    #[must_use]
    pub fn with_line_rule(mut self, line_rule: LineRule) -> Self {
        self.line_rule = line_rule;
        self
    }

    /// Change the winning line sum.
    #[must_use]
    pub fn with_win_target(mut self, target: i32) -> Self {
        self.win_target = target;
        self
    }
}
