//! Equipment names, per-level stat bonuses and the upgrade cost curve.

use super::types::{EquipmentLevels, EquipmentSlot};
use crate::resources::{ResourceKind, Resources};

/// Stat bonuses granted by one equipped item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EquipmentStats {
    pub attack: u64,
    pub defense: u64,
    pub max_hp: u64,
    pub evasion: u32,
}

impl EquipmentStats {
    pub fn combine(&self, other: &EquipmentStats) -> EquipmentStats {
        EquipmentStats {
            attack: self.attack + other.attack,
            defense: self.defense + other.defense,
            max_hp: self.max_hp + other.max_hp,
            evasion: self.evasion + other.evasion,
        }
    }
}

const WEAPON_NAMES: [&str; 30] = [
    "Wooden Stick",
    "Rusty Dagger",
    "Iron Shortsword",
    "Steel Longsword",
    "Mithril Blade",
    "Elven Glaive",
    "Dwarven Axe",
    "Orcish Cleaver",
    "Obsidian Katana",
    "Runic Claymore",
    "Knight's Lance",
    "Holy Avenger",
    "Demonslayer",
    "Blade of the Phoenix",
    "Dragonfang",
    "Frostbrand",
    "Stormcaller",
    "Void Reaver",
    "Celestial Scythe",
    "Soul Eater",
    "Glimmering Rapier",
    "Titan's Maul",
    "Shadowspike",
    "Sunforged Saber",
    "Aetherius",
    "Heartseeker Bow",
    "Worldbreaker",
    "Galactic Halberd",
    "Nebula Pike",
    "Dragonfire Blade",
];

const SHIELD_NAMES: [&str; 30] = [
    "Pot Lid",
    "Wooden Buckler",
    "Iron Targe",
    "Steel Kite Shield",
    "Tower Shield",
    "Mithril Aegis",
    "Elven Spellshield",
    "Dwarven Bulwark",
    "Orcish War-Door",
    "Obsidian Barrier",
    "Runic Ward",
    "Knight's Guard",
    "Holy Protector",
    "Demonwall",
    "Phoenix Embrace",
    "Dragonscale Shield",
    "Aegis of Storms",
    "Void Mirror",
    "Celestial Bastion",
    "Soul Warden",
    "Crystal Deflector",
    "Titan's Guard",
    "Shadow Barrier",
    "Sunstone Aegis",
    "Aetherium Wall",
    "Heartwood Shield",
    "World-Shell",
    "Galactic Barricade",
    "Nebula Ward",
    "Aegis of the Dragonheart",
];

const HELMET_NAMES: [&str; 30] = [
    "Leather Cap",
    "Iron Pot Helm",
    "Steel Sallet",
    "Full Helm",
    "Mithril Coif",
    "Elven Circlet",
    "Dwarven Greathelm",
    "Orcish Skull-helm",
    "Obsidian Visage",
    "Runic Casque",
    "Knight's Armet",
    "Crown of Light",
    "Helm of Domination",
    "Phoenix Crest",
    "Dragon-Skull Helm",
    "Helm of Winter",
    "Crown of Tempests",
    "Void Gaze",
    "Celestial Crown",
    "Soul Cage",
    "Crystal Diadem",
    "Titan's Visor",
    "Shadow Cowl",
    "Sun-Crest Helm",
    "Aetherium Crown",
    "Helm of the Guardian",
    "World-Helm",
    "Galactic Crown",
    "Nebula Veil",
    "Dragon-Visage Helm",
];

const ARMOR_NAMES: [&str; 30] = [
    "Padded Shirt",
    "Leather Jerkin",
    "Ring Mail",
    "Chainmail Hauberk",
    "Steel Plate",
    "Mithril Coat",
    "Elven Leaf-mail",
    "Dwarven Plating",
    "Orcish War-harness",
    "Obsidian Chestplate",
    "Runic Brigandine",
    "Knight's Cuirass",
    "Holy Vestments",
    "Demonbone Armor",
    "Phoenix Plume Raiment",
    "Dragonskin Tunic",
    "Storm-forged Plate",
    "Void Carapace",
    "Celestial Armor",
    "Soulforged Breastplate",
    "Crystal Mail",
    "Titan's Carapace",
    "Shadow-weave Tunic",
    "Sun-plate Armor",
    "Aetherium Plate",
    "Heart-Plate of the Forest",
    "World-Plate",
    "Galactic Raiment",
    "Nebula Carapace",
    "Dragonscale Platemail",
];

const LEGS_NAMES: [&str; 30] = [
    "Cloth Trousers",
    "Leather Breeches",
    "Ring Mail Leggings",
    "Chainmail Chausses",
    "Steel Greaves",
    "Mithril Leggings",
    "Elven Tights",
    "Dwarven Leg-guards",
    "Orcish Loincloth",
    "Obsidian Legplates",
    "Runic Greaves",
    "Knight's Tassets",
    "Holy Leggings",
    "Demonbone Greaves",
    "Phoenixfire Pants",
    "Dragonskin Breeches",
    "Stormrider's Legguards",
    "Void-touched Leggings",
    "Celestial Kilt",
    "Soul-woven Greaves",
    "Crystal Legguards",
    "Titan's Striders",
    "Shadow-Stalkers",
    "Sun-blessed Greaves",
    "Aetherium Greaves",
    "Earth-bound Leggings",
    "World-Greaves",
    "Galactic Striders",
    "Nebula Leggings",
    "Dragon-Bone Greaves",
];

const BOOTS_NAMES: [&str; 30] = [
    "Sandals",
    "Leather Shoes",
    "Iron Sollerets",
    "Steel Sabatons",
    "Plated Boots",
    "Mithril Boots",
    "Elven Slippers",
    "Dwarven Stompers",
    "Orcish War-boots",
    "Obsidian Sabatons",
    "Runic Treads",
    "Knight's Sabatons",
    "Boots of Light",
    "Demon-Stompers",
    "Phoenix-Talon Boots",
    "Dragon-Scale Boots",
    "Storm-Dancer's Boots",
    "Void-Walkers",
    "Celestial Sandals",
    "Soul-Treads",
    "Crystal Slippers",
    "Titan's Treads",
    "Shadow-step Boots",
    "Sun-Striders",
    "Aether-Walkers",
    "Boots of the Earth",
    "World-Stompers",
    "Galactic Greaves",
    "Nebula-Walkers",
    "Dragonflight Boots",
];

fn names_for(slot: EquipmentSlot) -> &'static [&'static str; 30] {
    match slot {
        EquipmentSlot::Weapon => &WEAPON_NAMES,
        EquipmentSlot::Shield => &SHIELD_NAMES,
        EquipmentSlot::Helmet => &HELMET_NAMES,
        EquipmentSlot::Armor => &ARMOR_NAMES,
        EquipmentSlot::Legs => &LEGS_NAMES,
        EquipmentSlot::Boots => &BOOTS_NAMES,
    }
}

/// Display name of the item at `level`. `None` for level 0.
pub fn item_name(slot: EquipmentSlot, level: u8) -> Option<String> {
    if level == 0 {
        return None;
    }
    Some(match names_for(slot).get(level as usize - 1) {
        Some(name) => name.to_string(),
        None => format!("{} Lv. {}", slot.name(), level),
    })
}

/// Stat bonuses of the item at `level`. Lower levels do not stack.
pub fn item_stats(slot: EquipmentSlot, level: u8) -> EquipmentStats {
    let l = level as u64;
    match slot {
        EquipmentSlot::Weapon => EquipmentStats {
            attack: l * 5 / 2,
            ..Default::default()
        },
        EquipmentSlot::Shield => EquipmentStats {
            defense: l * 3 / 2,
            max_hp: l * 5,
            ..Default::default()
        },
        EquipmentSlot::Helmet => EquipmentStats {
            defense: l,
            max_hp: l * 10,
            ..Default::default()
        },
        EquipmentSlot::Armor => EquipmentStats {
            defense: l * 2,
            max_hp: l * 15,
            ..Default::default()
        },
        EquipmentSlot::Legs => EquipmentStats {
            defense: l,
            evasion: level as u32 / 5,
            ..Default::default()
        },
        EquipmentSlot::Boots => EquipmentStats {
            evasion: (level as u32).div_ceil(2),
            ..Default::default()
        },
    }
}

/// Summed bonuses of everything equipped.
pub fn total_bonuses(levels: &EquipmentLevels) -> EquipmentStats {
    EquipmentSlot::ALL
        .iter()
        .fold(EquipmentStats::default(), |acc, &slot| {
            acc.combine(&item_stats(slot, levels.get(slot)))
        })
}

/// Cost of buying `level` (the level being purchased).
///
/// Dirt and stone from the start; minerals past level 5, silver past 15,
/// gold past 25.
pub fn upgrade_cost(level: u8) -> Resources {
    let l = level as f64;
    let curve = l.powf(1.5);
    let mut cost = Resources::new();

    cost.add(ResourceKind::Dirt, (curve * 5.0 + 10.0 * l).floor() as u64);
    cost.add(ResourceKind::Stone, (curve * 3.0 + 8.0 * l).floor() as u64);

    if level > 5 {
        let over = l - 5.0;
        cost.add(ResourceKind::Mineral, (over.powf(1.4) * 2.0 + over).floor() as u64);
    }
    if level > 15 {
        let over = l - 15.0;
        cost.add(ResourceKind::Silver, (over.powf(1.5) * 1.5 + over).floor() as u64);
    }
    if level > 25 {
        let over = l - 25.0;
        cost.add(ResourceKind::Gold, (over.powf(1.6) + (over / 2.0).ceil()).floor() as u64);
    }

    cost
}
