//! Simulation configuration.

use crate::core::constants::DEFAULT_MATH_DIFFICULTY;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Combat ticks per run
    pub max_ticks_per_run: u64,

    /// Dig attempts the bot makes between combat ticks
    pub digs_per_tick: u32,

    pub math_difficulty: u8,
    pub resource_multiplier: u32,

    /// Free purchases and the wider multiplier range
    pub testing_mode: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 2_000,
            digs_per_tick: 1,
            math_difficulty: DEFAULT_MATH_DIFFICULTY,
            resource_multiplier: 1,
            testing_mode: false,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small, fast config for smoke checks.
    pub fn quick() -> Self {
        Self {
            num_runs: 10,
            max_ticks_per_run: 300,
            ..Default::default()
        }
    }

    /// Long sessions with an aggressive digger, for late-game pacing.
    pub fn marathon() -> Self {
        Self {
            num_runs: 20,
            max_ticks_per_run: 20_000,
            digs_per_tick: 3,
            ..Default::default()
        }
    }
}
