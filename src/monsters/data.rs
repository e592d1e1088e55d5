//! Authored monster roster.
//!
//! Ninety hand-placed archetypes in nine tiers of ten. Stats are not stored
//! here; they are derived from the roster index in `roster`.

use serde::{Deserialize, Serialize};

/// Visual archetype of a monster. Also drives its stat profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpriteKey {
    Hero,
    Slime,
    Bat,
    GiantRat,
    Goblin,
    Spider,
    Orc,
    Worm,
    Skeleton,
    Golem,
    Ghoul,
    Wraith,
    Mimic,
    Lich,
    Shadow,
    Gazer,
    Troll,
    Gargoyle,
    Elemental,
    LivingArmor,
    Demon,
    Hydra,
    Dragon,
}

/// Stat profile shared by a group of archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchetypeProfile {
    /// High evasion that grows with depth.
    Evasive,
    /// High crit chance that grows with depth.
    CritFocused,
    /// Never dodges.
    Tanky,
    /// Never crits.
    Armored,
    Balanced,
}

impl SpriteKey {
    pub fn name(&self) -> &'static str {
        match self {
            SpriteKey::Hero => "Hero",
            SpriteKey::Slime => "Slime",
            SpriteKey::Bat => "Bat",
            SpriteKey::GiantRat => "Giant Rat",
            SpriteKey::Goblin => "Goblin",
            SpriteKey::Spider => "Spider",
            SpriteKey::Orc => "Orc",
            SpriteKey::Worm => "Worm",
            SpriteKey::Skeleton => "Skeleton",
            SpriteKey::Golem => "Golem",
            SpriteKey::Ghoul => "Ghoul",
            SpriteKey::Wraith => "Wraith",
            SpriteKey::Mimic => "Mimic",
            SpriteKey::Lich => "Lich",
            SpriteKey::Shadow => "Shadow",
            SpriteKey::Gazer => "Gazer",
            SpriteKey::Troll => "Troll",
            SpriteKey::Gargoyle => "Gargoyle",
            SpriteKey::Elemental => "Elemental",
            SpriteKey::LivingArmor => "Living Armor",
            SpriteKey::Demon => "Demon",
            SpriteKey::Hydra => "Hydra",
            SpriteKey::Dragon => "Dragon",
        }
    }

    pub fn profile(&self) -> ArchetypeProfile {
        match self {
            SpriteKey::Bat | SpriteKey::Spider | SpriteKey::Wraith | SpriteKey::Shadow => {
                ArchetypeProfile::Evasive
            }
            SpriteKey::Goblin | SpriteKey::Demon => ArchetypeProfile::CritFocused,
            SpriteKey::Slime | SpriteKey::Worm | SpriteKey::Troll => ArchetypeProfile::Tanky,
            SpriteKey::Golem | SpriteKey::LivingArmor | SpriteKey::Gargoyle => {
                ArchetypeProfile::Armored
            }
            _ => ArchetypeProfile::Balanced,
        }
    }
}

/// One authored roster entry: archetype plus sprite tint in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonsterArchetype {
    pub sprite: SpriteKey,
    pub hue_rotate: f64,
}

const fn mob(sprite: SpriteKey, hue_rotate: f64) -> MonsterArchetype {
    MonsterArchetype { sprite, hue_rotate }
}

use SpriteKey::*;

/// Tier names, one per ten authored monsters.
pub const TIER_NAMES: [&str; 9] = [
    "Grimy Tunnels",
    "Goblin Warrens",
    "Forgotten Crypt",
    "Cavern of Whispers",
    "The Great Forge",
    "Labyrinth of Beasts",
    "Crystalline Maze",
    "The Dragon's Maw",
    "The Core",
];

pub const AUTHORED_MONSTERS: [MonsterArchetype; 90] = [
    // Tier 1: Grimy Tunnels
    mob(Slime, 0.0),
    mob(Bat, 0.0),
    mob(GiantRat, 200.0),
    mob(Goblin, 0.0),
    mob(Spider, 200.0),
    mob(Slime, 120.0),
    mob(GiantRat, 300.0),
    mob(Goblin, 30.0),
    mob(Slime, 240.0),
    mob(Goblin, -45.0),
    // Tier 2: Goblin Warrens
    mob(Orc, -20.0),
    mob(Spider, 280.0),
    mob(Worm, 200.0),
    mob(Goblin, 90.0),
    mob(Orc, 0.0),
    mob(Bat, 270.0),
    mob(Skeleton, 0.0),
    mob(Golem, 220.0),
    mob(Goblin, 150.0),
    mob(Orc, 330.0),
    // Tier 3: Forgotten Crypt
    mob(Skeleton, 20.0),
    mob(Ghoul, 0.0),
    mob(Wraith, 180.0),
    mob(Mimic, 0.0),
    mob(Skeleton, 60.0),
    mob(Wraith, 90.0),
    mob(Ghoul, 120.0),
    mob(Skeleton, 270.0),
    mob(Worm, 300.0),
    mob(Lich, 270.0),
    // Tier 4: Cavern of Whispers
    mob(Spider, 0.0),
    mob(Shadow, 0.0),
    mob(Gazer, 120.0),
    mob(Troll, 0.0),
    mob(Slime, 60.0),
    mob(Shadow, 180.0),
    mob(Gargoyle, 220.0),
    mob(Spider, 220.0),
    mob(Gazer, 0.0),
    mob(Shadow, 270.0),
    // Tier 5: The Great Forge
    mob(Bat, 350.0),
    mob(Slime, 30.0),
    mob(Golem, 0.0),
    mob(Elemental, 0.0),
    mob(LivingArmor, 0.0),
    mob(GiantRat, 0.0),
    mob(Golem, 300.0),
    mob(Troll, 330.0),
    mob(LivingArmor, 180.0),
    mob(Demon, 0.0),
    // Tier 6: Labyrinth of Beasts
    mob(Orc, 30.0),
    mob(Bat, 60.0),
    mob(Hydra, 120.0),
    mob(Bat, 40.0),
    mob(Hydra, 200.0),
    mob(Gazer, 300.0),
    mob(Dragon, 30.0),
    mob(Hydra, 90.0),
    mob(Troll, 60.0),
    mob(Dragon, 0.0),
    // Tier 7: Crystalline Maze
    mob(Golem, 180.0),
    mob(Worm, 180.0),
    mob(Spider, 180.0),
    mob(Elemental, 330.0),
    mob(Elemental, 240.0),
    mob(LivingArmor, 60.0),
    mob(Elemental, 120.0),
    mob(Golem, 300.0),
    mob(Lich, 180.0),
    mob(Dragon, 150.0),
    // Tier 8: The Dragon's Maw
    mob(Dragon, 0.0),
    mob(Orc, 180.0),
    mob(Demon, -120.0),
    mob(Dragon, 120.0),
    mob(Dragon, 300.0),
    mob(Demon, 330.0),
    mob(Hydra, 0.0),
    mob(Demon, 60.0),
    mob(Dragon, 50.0),
    mob(Demon, 20.0),
    // Tier 9: The Core
    mob(Slime, 270.0),
    mob(Golem, 120.0),
    mob(Lich, 220.0),
    mob(Dragon, 260.0),
    mob(Troll, 50.0),
    mob(LivingArmor, 50.0),
    mob(Demon, 200.0),
    mob(Elemental, 150.0),
    mob(Worm, 260.0),
    mob(Gazer, 150.0),
];

/// Tier name for a roster index, `None` past the authored roster.
pub fn tier_name(index: usize) -> Option<&'static str> {
    TIER_NAMES.get(index / 10).copied()
}
