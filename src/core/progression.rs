//! Dig-count driven free upgrades.

use rand::Rng;
use tracing::info;

use super::game_state::{roll_reward_threshold, GameState};
use crate::equipment::{grant_free_upgrade, EquipmentSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeUpgrade {
    pub slot: EquipmentSlot,
    pub level: u8,
}

/// Adds `tiles_dug` to the dig counter and checks the free-upgrade threshold.
///
/// On reaching the threshold the threshold is subtracted (the remainder
/// carries over) and a new one is rolled, even when every slot is already
/// maxed and no upgrade can be granted.
pub fn record_digs<R: Rng>(state: &mut GameState, tiles_dug: u32, rng: &mut R) -> Option<FreeUpgrade> {
    if tiles_dug == 0 {
        return None;
    }
    state.digs_since_last_reward = state.digs_since_last_reward.saturating_add(tiles_dug);
    if state.digs_since_last_reward < state.next_reward_dig_count {
        return None;
    }

    state.digs_since_last_reward -= state.next_reward_dig_count;
    state.next_reward_dig_count = roll_reward_threshold(rng);

    let (slot, level) = grant_free_upgrade(&mut state.equipment, rng)?;
    info!(slot = slot.name(), level, "free upgrade granted");
    Some(FreeUpgrade { slot, level })
}
