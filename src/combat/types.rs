use serde::{Deserialize, Serialize};

use crate::monsters::SpriteKey;

/// A combatant's stat block. Used for both the hero and monsters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// English display name.
    pub name: String,
    /// Localization key for the display name.
    pub name_key: String,
    pub hp: u64,
    pub max_hp: u64,
    pub attack: u64,
    pub defense: u64,
    /// Percent chance to dodge an incoming attack.
    pub evasion: u32,
    /// Percent chance to land a critical hit.
    pub crit_chance: u32,
    #[serde(default)]
    pub sprite: Option<SpriteKey>,
    #[serde(default)]
    pub hue_rotate: Option<f64>,
}

impl CharacterStats {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u64) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn heal_full(&mut self) {
        self.hp = self.max_hp;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Side {
    Hero,
    Monster,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Hero => Side::Monster,
            Side::Monster => Side::Hero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackOutcome {
    Miss,
    Hit { damage: u64, crit: bool },
}

/// Live combat between the hero and the current monster.
///
/// Transient: rebuilt from equipment levels and the monster index on load.
#[derive(Debug, Clone)]
pub struct CombatState {
    pub hero: CharacterStats,
    pub monster: CharacterStats,
    /// Who attacks on the next combat tick.
    pub turn: Side,
    /// Set once a combatant hits 0 HP until its defeat has been processed.
    pub pending_defeat: Option<Side>,
    /// An attack has been declared and not yet resolved.
    pub attack_in_flight: Option<Side>,
}

impl CombatState {
    pub fn new(hero: CharacterStats, monster: CharacterStats) -> Self {
        Self {
            hero,
            monster,
            turn: Side::Hero,
            pending_defeat: None,
            attack_in_flight: None,
        }
    }

    pub fn combatant(&self, side: Side) -> &CharacterStats {
        match side {
            Side::Hero => &self.hero,
            Side::Monster => &self.monster,
        }
    }

    /// Ticks are ignored while a defeat is unresolved, an attack is winding
    /// up, or either side is already down.
    pub fn is_idle(&self) -> bool {
        self.pending_defeat.is_none()
            && self.attack_in_flight.is_none()
            && self.hero.is_alive()
            && self.monster.is_alive()
    }

    /// Swaps in recomputed hero stats, keeping current HP clamped to the new max.
    pub fn update_hero_stats(&mut self, mut stats: CharacterStats) {
        stats.hp = self.hero.hp.min(stats.max_hp);
        self.hero = stats;
    }

    /// Replaces the monster, which enters at full HP.
    pub fn set_monster(&mut self, mut monster: CharacterStats) {
        monster.hp = monster.max_hp;
        self.monster = monster;
    }
}
