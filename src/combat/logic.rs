//! Attack resolution and turn bookkeeping.
//!
//! These functions only touch `CombatState`. Timing (wind-up, recovery,
//! defeat delay) is owned by the scheduler in `core`.

use rand::Rng;

use super::types::{AttackOutcome, CharacterStats, CombatState, Side};
use crate::core::constants::CRIT_POWER_MULTIPLIER;

/// Roll a percent chance with a uniform float, `U * 100 < chance`.
pub fn roll_percent(chance: u32, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() * 100.0 < chance as f64
}

/// Resolve one attack without mutating either side.
///
/// # Arguments
/// * `attacker` - Stats of the side swinging
/// * `defender` - Stats of the side being hit
/// * `rng` - Random number generator
///
/// # Returns
/// `Miss` when the defender evades, otherwise `Hit` with at least 1 damage.
pub fn resolve_attack(
    attacker: &CharacterStats,
    defender: &CharacterStats,
    rng: &mut impl Rng,
) -> AttackOutcome {
    if roll_percent(defender.evasion, rng) {
        return AttackOutcome::Miss;
    }

    let crit = roll_percent(attacker.crit_chance, rng);
    let swing: i64 = rng.gen_range(-1..=1);
    let attack = i64::try_from(attacker.attack).unwrap_or(i64::MAX);
    let base = attack.saturating_add(swing).max(1) as f64;
    let power = if crit {
        base * CRIT_POWER_MULTIPLIER
    } else {
        base
    };
    let damage = (power - defender.defense as f64).floor().max(1.0) as u64;

    AttackOutcome::Hit { damage, crit }
}

/// Declares the next attack if combat is idle.
///
/// Returns the attacking side and flips the turn owner. Returns `None` when a
/// tick should be ignored.
pub fn begin_turn(combat: &mut CombatState) -> Option<Side> {
    if !combat.is_idle() {
        return None;
    }
    let attacker = combat.turn;
    combat.turn = attacker.opponent();
    combat.attack_in_flight = Some(attacker);
    Some(attacker)
}

/// Resolves the in-flight attack of `attacker` and applies its damage.
///
/// Returns `None` if `attacker` has no attack in flight, or if either side
/// went down in the meantime.
pub fn apply_attack(
    combat: &mut CombatState,
    attacker: Side,
    rng: &mut impl Rng,
) -> Option<AttackOutcome> {
    if combat.attack_in_flight != Some(attacker) {
        return None;
    }
    combat.attack_in_flight = None;
    if combat.pending_defeat.is_some() || !combat.hero.is_alive() || !combat.monster.is_alive() {
        return None;
    }

    let outcome = match attacker {
        Side::Hero => resolve_attack(&combat.hero, &combat.monster, rng),
        Side::Monster => resolve_attack(&combat.monster, &combat.hero, rng),
    };
    if let AttackOutcome::Hit { damage, .. } = outcome {
        match attacker {
            Side::Hero => combat.monster.take_damage(damage),
            Side::Monster => combat.hero.take_damage(damage),
        }
    }
    Some(outcome)
}

/// Marks a freshly defeated combatant. Returns the side only the first time,
/// so defeat processing is scheduled exactly once.
pub fn detect_defeat(combat: &mut CombatState) -> Option<Side> {
    if combat.pending_defeat.is_some() {
        return None;
    }
    let defeated = if !combat.monster.is_alive() {
        Side::Monster
    } else if !combat.hero.is_alive() {
        Side::Hero
    } else {
        return None;
    };
    combat.pending_defeat = Some(defeated);
    Some(defeated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn fighter(attack: u64, defense: u64, evasion: u32, crit_chance: u32) -> CharacterStats {
        CharacterStats {
            name: "Fighter".to_string(),
            name_key: "fighter".to_string(),
            hp: 50,
            max_hp: 50,
            attack,
            defense,
            evasion,
            crit_chance,
            sprite: None,
            hue_rotate: None,
        }
    }

    #[test]
    fn test_minimum_roll_hits_low_with_crit() {
        // Zero rolls: no evasion at 0%, crit at any positive chance, swing -1
        let mut rng = StepRng::new(0, 0);
        let outcome = resolve_attack(&fighter(10, 0, 0, 5), &fighter(1, 2, 0, 0), &mut rng);
        // base 9, crit 13.5, minus 2 defense
        assert_eq!(outcome, AttackOutcome::Hit { damage: 11, crit: true });
    }

    #[test]
    fn test_zero_roll_evades_when_defender_has_evasion() {
        let mut rng = StepRng::new(0, 0);
        let outcome = resolve_attack(&fighter(10, 0, 0, 0), &fighter(1, 0, 1, 0), &mut rng);
        assert_eq!(outcome, AttackOutcome::Miss);
    }

    #[test]
    fn test_hit_always_deals_at_least_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..500 {
            match resolve_attack(&fighter(1, 0, 0, 0), &fighter(1, 1000, 0, 0), &mut rng) {
                AttackOutcome::Hit { damage, .. } => assert_eq!(damage, 1),
                AttackOutcome::Miss => panic!("0% evasion never misses"),
            }
        }
    }

    #[test]
    fn test_saturated_attack_still_hits_hard() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let attacker = fighter(u64::MAX, 0, 0, 0);
        for _ in 0..50 {
            match resolve_attack(&attacker, &fighter(1, 1000, 0, 0), &mut rng) {
                AttackOutcome::Hit { damage, .. } => assert!(damage > 1_000_000),
                AttackOutcome::Miss => panic!("0% evasion never misses"),
            }
        }
    }

    #[test]
    fn test_damage_range_without_crit() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..500 {
            if let AttackOutcome::Hit { damage, crit } =
                resolve_attack(&fighter(20, 0, 0, 0), &fighter(1, 5, 0, 0), &mut rng)
            {
                assert!(!crit);
                assert!((14..=16).contains(&damage));
            }
        }
    }

    #[test]
    fn test_turns_alternate() {
        let mut combat = CombatState::new(fighter(5, 0, 0, 0), fighter(5, 0, 0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        assert_eq!(begin_turn(&mut combat), Some(Side::Hero));
        // Still winding up
        assert_eq!(begin_turn(&mut combat), None);
        assert!(apply_attack(&mut combat, Side::Hero, &mut rng).is_some());
        assert_eq!(begin_turn(&mut combat), Some(Side::Monster));
        assert!(apply_attack(&mut combat, Side::Monster, &mut rng).is_some());
        assert_eq!(combat.turn, Side::Hero);
    }

    #[test]
    fn test_apply_attack_without_declaration_is_ignored() {
        let mut combat = CombatState::new(fighter(5, 0, 0, 0), fighter(5, 0, 0, 0));
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(apply_attack(&mut combat, Side::Monster, &mut rng).is_none());
        assert_eq!(combat.hero.hp, 50);
    }

    #[test]
    fn test_defeat_detected_once() {
        let mut combat = CombatState::new(fighter(5, 0, 0, 0), fighter(5, 0, 0, 0));
        combat.monster.take_damage(100);
        assert_eq!(detect_defeat(&mut combat), Some(Side::Monster));
        assert_eq!(detect_defeat(&mut combat), None);
        assert_eq!(begin_turn(&mut combat), None);
    }

    #[test]
    fn test_hp_never_below_zero() {
        let mut combat = CombatState::new(fighter(5, 0, 0, 0), fighter(500, 0, 0, 0));
        combat.turn = Side::Monster;
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        begin_turn(&mut combat);
        apply_attack(&mut combat, Side::Monster, &mut rng);
        assert_eq!(combat.hero.hp, 0);
        assert_eq!(detect_defeat(&mut combat), Some(Side::Hero));
    }
}
