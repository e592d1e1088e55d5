//! Monster stat derivation and the endless roster.

use rand::Rng;

use super::data::{ArchetypeProfile, MonsterArchetype, SpriteKey, AUTHORED_MONSTERS};
use crate::combat::CharacterStats;
use crate::core::constants::{EAGER_ROSTER_LEN, MONSTER_CRIT_CAP, MONSTER_EVASION_CAP};

/// Full stat template for one roster slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterTemplate {
    pub name: String,
    pub name_key: String,
    pub lore_key: String,
    pub sprite: SpriteKey,
    pub hue_rotate: f64,
    pub max_hp: u64,
    pub attack: u64,
    pub defense: u64,
    pub evasion: u32,
    pub crit_chance: u32,
    pub endless: bool,
}

impl MonsterTemplate {
    /// A combat-ready stat block at full HP.
    pub fn to_stats(&self) -> CharacterStats {
        CharacterStats {
            name: self.name.clone(),
            name_key: self.name_key.clone(),
            hp: self.max_hp,
            max_hp: self.max_hp,
            attack: self.attack,
            defense: self.defense,
            evasion: self.evasion,
            crit_chance: self.crit_chance,
            sprite: Some(self.sprite),
            hue_rotate: Some(self.hue_rotate),
        }
    }
}

/// Stats for the authored monster at `index`.
pub fn authored_template(index: usize, archetype: &MonsterArchetype) -> MonsterTemplate {
    let i = index as i32;
    let fi = index as f64;

    let mut evasion = 5;
    let mut crit_chance = 5;
    match archetype.sprite.profile() {
        ArchetypeProfile::Evasive => evasion = (10.0 + fi * 0.3).floor() as u32,
        ArchetypeProfile::CritFocused => crit_chance = (10.0 + fi * 0.25).floor() as u32,
        ArchetypeProfile::Tanky => evasion = 0,
        ArchetypeProfile::Armored => crit_chance = 0,
        ArchetypeProfile::Balanced => {}
    }

    MonsterTemplate {
        name: archetype.sprite.name().to_string(),
        name_key: format!("mob_{}_name", index + 1),
        lore_key: format!("mob_{}_lore", index + 1),
        sprite: archetype.sprite,
        hue_rotate: archetype.hue_rotate,
        max_hp: (20.0 * 1.11f64.powi(i)).floor() as u64,
        attack: (3.0 * 1.09f64.powi(i)).floor() as u64,
        defense: 1.10f64.powi(i).floor() as u64,
        evasion: evasion.min(MONSTER_EVASION_CAP),
        crit_chance: crit_chance.min(MONSTER_CRIT_CAP),
        endless: false,
    }
}

/// Scales the previous monster into a new one wearing `archetype`'s look.
pub fn endless_template<R: Rng>(
    previous: &MonsterTemplate,
    archetype_index: usize,
    archetype: &MonsterArchetype,
    rng: &mut R,
) -> MonsterTemplate {
    MonsterTemplate {
        name: format!("Endless {}", archetype.sprite.name()),
        name_key: format!("endless_mob_{}_name", archetype_index + 1),
        lore_key: "mob_endless_lore".to_string(),
        sprite: archetype.sprite,
        hue_rotate: (previous.hue_rotate + rng.gen::<f64>() * 40.0) % 360.0,
        max_hp: (previous.max_hp as f64 * 1.1).floor() as u64,
        attack: (previous.attack as f64 * 1.08).floor() as u64,
        defense: (previous.defense as f64 * 1.09).floor() as u64,
        evasion: (previous.evasion + 1).min(MONSTER_EVASION_CAP),
        crit_chance: (previous.crit_chance + 1).min(MONSTER_CRIT_CAP),
        endless: true,
    }
}

/// Ordered, append-only monster roster.
///
/// Starts with the authored monsters, eagerly extended to a fixed length, and
/// grows on demand so any non-negative index resolves.
#[derive(Debug, Clone)]
pub struct MonsterRoster {
    templates: Vec<MonsterTemplate>,
}

impl MonsterRoster {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut roster = Self {
            templates: AUTHORED_MONSTERS
                .iter()
                .enumerate()
                .map(|(i, archetype)| authored_template(i, archetype))
                .collect(),
        };
        roster.extend_to(EAGER_ROSTER_LEN, rng);
        roster
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Already-generated template at `index`, if any.
    pub fn peek(&self, index: usize) -> Option<&MonsterTemplate> {
        self.templates.get(index)
    }

    /// Template at `index`, extending the roster first if needed.
    pub fn template<R: Rng>(&mut self, index: usize, rng: &mut R) -> &MonsterTemplate {
        self.extend_to(index.saturating_add(1), rng);
        &self.templates[index]
    }

    fn extend_to<R: Rng>(&mut self, len: usize, rng: &mut R) {
        while self.templates.len() < len {
            let archetype_index = rng.gen_range(0..AUTHORED_MONSTERS.len());
            let archetype = &AUTHORED_MONSTERS[archetype_index];
            let next = match self.templates.last() {
                Some(previous) => endless_template(previous, archetype_index, archetype, rng),
                None => authored_template(0, archetype),
            };
            self.templates.push(next);
        }
    }
}
