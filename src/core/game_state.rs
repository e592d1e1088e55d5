use rand::Rng;
use serde::{Deserialize, Serialize};

use super::constants::{REWARD_DIG_COUNT_MAX, REWARD_DIG_COUNT_MIN};
use super::settings::Settings;
use crate::character::SuperpowerState;
use crate::equipment::EquipmentLevels;
use crate::mine::{generate_mine, MineGrid};
use crate::resources::Resources;

/// Everything that survives a save/load cycle.
///
/// IMPORTANT: new fields need `#[serde(default)]` so older saves still load.
/// Combat HP and any open challenge are transient and rebuilt on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub resources: Resources,
    pub grid: MineGrid,
    /// Deepest row ever dug. Only grows, except on regeneration or reset.
    pub deepest_row: usize,
    pub equipment: EquipmentLevels,
    /// Index into the monster roster. Grows by one per kill, without bound.
    pub current_mob_index: u64,
    pub digs_since_last_reward: u32,
    pub next_reward_dig_count: u32,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub superpower: SuperpowerState,
    /// Unix timestamp of the last save, 0 if never saved.
    #[serde(default)]
    pub last_save_time: i64,
}

impl GameState {
    /// A brand-new session with a freshly generated mine.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_grid(generate_mine(rng), rng)
    }

    /// A brand-new session around an existing grid.
    pub fn with_grid<R: Rng>(grid: MineGrid, rng: &mut R) -> Self {
        Self {
            resources: Resources::new(),
            grid,
            deepest_row: 0,
            equipment: EquipmentLevels::new(),
            current_mob_index: 0,
            digs_since_last_reward: 0,
            next_reward_dig_count: roll_reward_threshold(rng),
            settings: Settings::default(),
            superpower: SuperpowerState::default(),
            last_save_time: 0,
        }
    }
}

/// Dig count until the next free upgrade, uniform in 20..=30.
pub fn roll_reward_threshold<R: Rng>(rng: &mut R) -> u32 {
    rng.gen_range(REWARD_DIG_COUNT_MIN..=REWARD_DIG_COUNT_MAX)
}
