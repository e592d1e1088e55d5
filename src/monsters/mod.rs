//! Monster roster: authored archetypes plus procedural endless monsters.

pub mod data;
pub mod roster;

pub use data::{tier_name, ArchetypeProfile, MonsterArchetype, SpriteKey, AUTHORED_MONSTERS};
pub use roster::{MonsterRoster, MonsterTemplate};
