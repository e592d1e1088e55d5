//! Events emitted by the engine as virtual time advances.
//!
//! A presentation layer maps these to animations, sounds and log lines; the
//! engine itself never renders anything.

use crate::combat::{AttackOutcome, Side};
use crate::equipment::EquipmentSlot;
use crate::resources::{ResourceKind, Resources};

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Combat ──────────────────────────────────────────────────
    /// A combat tick declared an attack; it resolves after the wind-up.
    AttackStarted { attacker: Side },

    /// An attack resolved.
    AttackResolved {
        attacker: Side,
        outcome: AttackOutcome,
        defender_hp: u64,
    },

    /// The attacker's recovery finished and both sides are back to idle.
    AttackSettled { attacker: Side },

    /// The current monster was defeated and its loot credited.
    MonsterDefeated {
        index: u64,
        name: String,
        loot: Resources,
    },

    /// A new monster entered at full HP.
    MonsterSpawned {
        index: u64,
        name: String,
        max_hp: u64,
    },

    /// The hero fell; both sides were healed to full.
    HeroDefeated,

    // ── Mining ──────────────────────────────────────────────────
    /// A dig resolved. `loot` is already scaled by the resource multiplier.
    DigResolved {
        row: usize,
        col: usize,
        area: bool,
        tiles_dug: u32,
        loot: Resources,
    },

    /// An easter egg was claimed without a problem.
    EasterEggFound {
        row: usize,
        col: usize,
        kind: ResourceKind,
        amount: u64,
    },

    // ── Progression ─────────────────────────────────────────────
    /// The dig counter crossed its threshold and a slot went up a level.
    FreeUpgrade { slot: EquipmentSlot, level: u8 },

    /// The superpower buff switched on or off.
    SuperpowerChanged { active: bool },
}
