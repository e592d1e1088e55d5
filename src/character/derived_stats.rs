use super::superpower::SuperpowerState;
use crate::combat::CharacterStats;
use crate::core::constants::*;
use crate::equipment::{total_bonuses, EquipmentLevels};
use crate::monsters::SpriteKey;

/// Hero stats from equipment and buff state.
///
/// Pure: only the inputs are stored, the result is recomputed whenever
/// equipment or the superpower changes. The returned block is at full HP;
/// callers keeping a live fight clamp instead (see
/// `CombatState::update_hero_stats`).
pub fn compute_hero_stats(levels: &EquipmentLevels, superpower: &SuperpowerState) -> CharacterStats {
    let bonus = total_bonuses(levels);

    let max_hp = HERO_BASE_MAX_HP as u64 + bonus.max_hp;
    let mut attack = HERO_BASE_ATTACK as u64 + bonus.attack;
    let mut defense = HERO_BASE_DEFENSE as u64 + bonus.defense;
    let mut evasion = HERO_BASE_EVASION + bonus.evasion;
    let mut crit_chance = HERO_BASE_CRIT_CHANCE;

    if superpower.is_active() {
        attack *= 2;
        defense *= 2;
        evasion = (evasion * 2).min(SUPERPOWER_EVASION_CAP);
        crit_chance = (crit_chance * 2).min(SUPERPOWER_CRIT_CAP);
    }

    CharacterStats {
        name: "Hero".to_string(),
        name_key: "hero_name".to_string(),
        hp: max_hp,
        max_hp,
        attack,
        defense,
        evasion,
        crit_chance,
        sprite: Some(SpriteKey::Hero),
        hue_rotate: None,
    }
}
