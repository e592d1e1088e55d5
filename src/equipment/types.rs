use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_EQUIPMENT_LEVEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentSlot {
    Weapon,
    Shield,
    Helmet,
    Armor,
    Legs,
    Boots,
}

impl EquipmentSlot {
    pub const ALL: [EquipmentSlot; 6] = [
        EquipmentSlot::Weapon,
        EquipmentSlot::Shield,
        EquipmentSlot::Helmet,
        EquipmentSlot::Armor,
        EquipmentSlot::Legs,
        EquipmentSlot::Boots,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "Weapon",
            EquipmentSlot::Shield => "Shield",
            EquipmentSlot::Helmet => "Helmet",
            EquipmentSlot::Armor => "Armor",
            EquipmentSlot::Legs => "Legs",
            EquipmentSlot::Boots => "Boots",
        }
    }
}

/// Per-slot equipment level. 0 means nothing equipped.
///
/// IMPORTANT: every field carries `#[serde(default)]` so saves from before a
/// slot existed still load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLevels {
    #[serde(default)]
    pub weapon: u8,
    #[serde(default)]
    pub shield: u8,
    #[serde(default)]
    pub helmet: u8,
    #[serde(default)]
    pub armor: u8,
    #[serde(default)]
    pub legs: u8,
    #[serde(default)]
    pub boots: u8,
}

impl EquipmentLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> u8 {
        match slot {
            EquipmentSlot::Weapon => self.weapon,
            EquipmentSlot::Shield => self.shield,
            EquipmentSlot::Helmet => self.helmet,
            EquipmentSlot::Armor => self.armor,
            EquipmentSlot::Legs => self.legs,
            EquipmentSlot::Boots => self.boots,
        }
    }

    /// Sets a slot's level, clamped to the max level.
    pub fn set(&mut self, slot: EquipmentSlot, level: u8) {
        let level = level.min(MAX_EQUIPMENT_LEVEL);
        match slot {
            EquipmentSlot::Weapon => self.weapon = level,
            EquipmentSlot::Shield => self.shield = level,
            EquipmentSlot::Helmet => self.helmet = level,
            EquipmentSlot::Armor => self.armor = level,
            EquipmentSlot::Legs => self.legs = level,
            EquipmentSlot::Boots => self.boots = level,
        }
    }

    pub fn is_maxed(&self, slot: EquipmentSlot) -> bool {
        self.get(slot) >= MAX_EQUIPMENT_LEVEL
    }

    /// Slots that can still be upgraded, in slot order.
    pub fn upgradable_slots(&self) -> Vec<EquipmentSlot> {
        EquipmentSlot::ALL
            .into_iter()
            .filter(|&slot| !self.is_maxed(slot))
            .collect()
    }

    pub fn total_level(&self) -> u32 {
        EquipmentSlot::ALL
            .iter()
            .map(|&slot| self.get(slot) as u32)
            .sum()
    }
}
