//! Lenient decoding of persisted sessions.
//!
//! Every field is read on its own. A missing or malformed field falls back to
//! what a fresh session would have, so one bad value never costs the rest of
//! the save.

use rand::Rng;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::core::constants::{MAX_MOB_INDEX, TILE_COLS, TILE_ROWS};
use crate::core::game_state::{roll_reward_threshold, GameState};
use crate::core::settings::Settings;
use crate::equipment::{EquipmentLevels, EquipmentSlot};
use crate::mine::{generate_mine, MineGrid};
use crate::resources::{ResourceKind, Resources};

fn field<T: DeserializeOwned>(root: &Value, key: &str) -> Option<T> {
    let raw = root.get(key)?;
    match serde_json::from_value(raw.clone()) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(field = key, error = %e, "malformed save field, using default");
            None
        }
    }
}

fn missing(key: &str) {
    warn!(field = key, "missing save field, using default");
}

/// Non-negative integer, accepting floats and negatives from older saves.
fn lenient_u64(value: &Value) -> Option<u64> {
    if let Some(v) = value.as_u64() {
        return Some(v);
    }
    if value.as_i64().is_some() {
        return Some(0);
    }
    value.as_f64().map(|f| if f > 0.0 { f.floor() as u64 } else { 0 })
}

fn read_resources(root: &Value) -> Resources {
    let mut resources = Resources::new();
    let Some(obj) = root.get("resources").and_then(Value::as_object) else {
        missing("resources");
        return resources;
    };
    for kind in ResourceKind::ALL {
        let key = kind.name().to_lowercase();
        match obj.get(&key).map(lenient_u64) {
            Some(Some(amount)) => resources.set(kind, amount),
            Some(None) => warn!(field = %key, "malformed resource count, using 0"),
            None => {}
        }
    }
    resources
}

fn read_equipment(root: &Value) -> EquipmentLevels {
    let mut levels = EquipmentLevels::new();
    let Some(obj) = root.get("equipment").and_then(Value::as_object) else {
        missing("equipment");
        return levels;
    };
    for slot in EquipmentSlot::ALL {
        let key = slot.name().to_lowercase();
        if let Some(level) = obj.get(&key).and_then(lenient_u64) {
            levels.set(slot, level.min(u8::MAX as u64) as u8);
        }
    }
    levels
}

fn read_grid<R: Rng>(root: &Value, rng: &mut R) -> MineGrid {
    match field::<MineGrid>(root, "grid") {
        Some(grid) if grid.is_well_formed() && grid.rows == TILE_ROWS && grid.cols == TILE_COLS => {
            grid
        }
        Some(_) => {
            warn!("saved grid has wrong dimensions, generating a new mine");
            generate_mine(rng)
        }
        None => {
            if root.get("grid").is_none() {
                missing("grid");
            }
            generate_mine(rng)
        }
    }
}

fn read_settings(root: &Value) -> Settings {
    match field::<Settings>(root, "settings") {
        Some(settings) => settings.sanitized(),
        None => {
            if root.get("settings").is_none() {
                missing("settings");
            }
            Settings::default()
        }
    }
}

impl GameState {
    /// Rebuilds a session from a JSON value, never failing.
    pub fn from_save_value<R: Rng>(root: &Value, rng: &mut R) -> GameState {
        let mut state = GameState::with_grid(read_grid(root, rng), rng);

        state.resources = read_resources(root);
        state.equipment = read_equipment(root);
        state.settings = read_settings(root);

        if let Some(row) = root.get("deepest_row").and_then(lenient_u64) {
            state.deepest_row = (row as usize).min(state.grid.rows.saturating_sub(1));
        }
        match root.get("current_mob_index").and_then(lenient_u64) {
            Some(index) if index <= MAX_MOB_INDEX => state.current_mob_index = index,
            Some(index) => warn!(index, "saved monster index out of range, using 0"),
            None => {}
        }
        if let Some(count) = root.get("digs_since_last_reward").and_then(lenient_u64) {
            state.digs_since_last_reward = count.min(u32::MAX as u64) as u32;
        }
        match root.get("next_reward_dig_count").and_then(lenient_u64) {
            Some(count) if count > 0 => {
                state.next_reward_dig_count = count.min(u32::MAX as u64) as u32;
            }
            _ => state.next_reward_dig_count = roll_reward_threshold(rng),
        }
        if let Some(superpower) = field(root, "superpower") {
            state.superpower = superpower;
        }
        if let Some(time) = root.get("last_save_time").and_then(Value::as_i64) {
            state.last_save_time = time;
        }

        state
    }

    /// Parses JSON text leniently. Text that is not JSON at all yields a
    /// fresh session.
    pub fn from_save_json<R: Rng>(text: &str, rng: &mut R) -> GameState {
        match serde_json::from_str::<Value>(text) {
            Ok(root) => GameState::from_save_value(&root, rng),
            Err(e) => {
                warn!(error = %e, "save is not valid JSON, starting fresh");
                GameState::new(rng)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    #[test]
    fn test_full_roundtrip() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut state = GameState::new(&mut rng);
        state.resources.add(ResourceKind::Gold, 12);
        state.equipment.set(EquipmentSlot::Armor, 4);
        state.current_mob_index = 120;
        state.deepest_row = 17;
        state.settings.set_math_difficulty(2);

        let value = serde_json::to_value(&state).unwrap();
        let loaded = GameState::from_save_value(&value, &mut rng);
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_missing_fields_fall_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let value = json!({ "current_mob_index": 7 });
        let loaded = GameState::from_save_value(&value, &mut rng);
        assert_eq!(loaded.current_mob_index, 7);
        assert!(loaded.resources.is_empty());
        assert_eq!(loaded.grid.rows, TILE_ROWS);
        assert!((20..=30).contains(&loaded.next_reward_dig_count));
        assert_eq!(loaded.settings, Settings::default());
    }

    #[test]
    fn test_malformed_fields_fall_back_individually() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let value = json!({
            "resources": { "dirt": -5, "stone": "lots", "gold": 9.7 },
            "equipment": { "weapon": 99, "boots": 2 },
            "grid": "not a grid",
            "settings": { "math_difficulty": 12, "resource_multiplier": 500 },
            "deepest_row": 10000,
            "next_reward_dig_count": 0,
        });
        let loaded = GameState::from_save_value(&value, &mut rng);
        assert_eq!(loaded.resources.dirt, 0);
        assert_eq!(loaded.resources.stone, 0);
        assert_eq!(loaded.resources.gold, 9);
        assert_eq!(loaded.equipment.weapon, 30);
        assert_eq!(loaded.equipment.boots, 2);
        assert!(loaded.grid.is_well_formed());
        assert_eq!(loaded.settings.math_difficulty, 5);
        assert_eq!(loaded.settings.resource_multiplier, 10);
        assert_eq!(loaded.deepest_row, TILE_ROWS - 1);
        assert!(loaded.next_reward_dig_count >= 20);
    }

    #[test]
    fn test_out_of_range_mob_index_resets() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for index in [u64::MAX, MAX_MOB_INDEX + 1, 100_000_000] {
            let value = json!({ "current_mob_index": index });
            let loaded = GameState::from_save_value(&value, &mut rng);
            assert_eq!(loaded.current_mob_index, 0);
        }

        let value = json!({ "current_mob_index": MAX_MOB_INDEX });
        let loaded = GameState::from_save_value(&value, &mut rng);
        assert_eq!(loaded.current_mob_index, MAX_MOB_INDEX);
    }

    #[test]
    fn test_wrong_grid_size_regenerated() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let small = MineGrid::filled_with_size(3, 3, crate::mine::TileType::Dirt);
        let value = json!({ "grid": serde_json::to_value(&small).unwrap() });
        let loaded = GameState::from_save_value(&value, &mut rng);
        assert_eq!(loaded.grid.rows, TILE_ROWS);
        assert_eq!(loaded.grid.cols, TILE_COLS);
    }

    #[test]
    fn test_not_json_starts_fresh() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let loaded = GameState::from_save_json("{{{{", &mut rng);
        assert_eq!(loaded.current_mob_index, 0);
        assert!(loaded.resources.is_empty());
    }
}
