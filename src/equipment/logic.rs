//! Buying upgrades and granting free ones.

use rand::seq::SliceRandom;
use rand::Rng;

use super::data::upgrade_cost;
use super::types::{EquipmentLevels, EquipmentSlot};
use crate::resources::Resources;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Purchased { slot: EquipmentSlot, level: u8 },
    CannotAfford,
    MaxLevel,
}

/// Cost of the next level for `slot`, or `None` at max level.
pub fn next_level_cost(levels: &EquipmentLevels, slot: EquipmentSlot) -> Option<Resources> {
    if levels.is_maxed(slot) {
        None
    } else {
        Some(upgrade_cost(levels.get(slot) + 1))
    }
}

/// Buys the next level of `slot`.
///
/// Either the whole cost is debited and the level rises by one, or nothing
/// changes. `free` skips the cost check and the debit.
pub fn purchase(
    levels: &mut EquipmentLevels,
    resources: &mut Resources,
    slot: EquipmentSlot,
    free: bool,
) -> PurchaseOutcome {
    let cost = match next_level_cost(levels, slot) {
        Some(cost) => cost,
        None => return PurchaseOutcome::MaxLevel,
    };

    if !free && !resources.try_spend(&cost) {
        return PurchaseOutcome::CannotAfford;
    }

    let level = levels.get(slot) + 1;
    levels.set(slot, level);
    PurchaseOutcome::Purchased { slot, level }
}

/// Raises a uniformly chosen non-maxed slot by one level.
/// Returns `None`, changing nothing, when every slot is maxed.
pub fn grant_free_upgrade<R: Rng>(
    levels: &mut EquipmentLevels,
    rng: &mut R,
) -> Option<(EquipmentSlot, u8)> {
    let slot = *levels.upgradable_slots().choose(rng)?;
    let level = levels.get(slot) + 1;
    levels.set(slot, level);
    Some((slot, level))
}

/// The cheapest affordable upgrade by total resource count, ties in slot order.
pub fn cheapest_affordable(
    levels: &EquipmentLevels,
    resources: &Resources,
) -> Option<(EquipmentSlot, Resources)> {
    EquipmentSlot::ALL
        .iter()
        .filter_map(|&slot| next_level_cost(levels, slot).map(|cost| (slot, cost)))
        .filter(|(_, cost)| resources.can_afford(cost))
        .min_by_key(|(_, cost)| cost.total())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::MAX_EQUIPMENT_LEVEL;
    use crate::resources::ResourceKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rich() -> Resources {
        let mut res = Resources::new();
        for kind in ResourceKind::ALL {
            res.set(kind, 1_000_000);
        }
        res
    }

    #[test]
    fn test_purchase_debits_exact_cost() {
        let mut levels = EquipmentLevels::new();
        let mut res = Resources::new()
            .with(ResourceKind::Dirt, 20)
            .with(ResourceKind::Stone, 20);
        let outcome = purchase(&mut levels, &mut res, EquipmentSlot::Weapon, false);
        assert_eq!(
            outcome,
            PurchaseOutcome::Purchased {
                slot: EquipmentSlot::Weapon,
                level: 1
            }
        );
        assert_eq!(res.dirt, 5);
        assert_eq!(res.stone, 9);
        assert_eq!(levels.weapon, 1);
    }

    #[test]
    fn test_purchase_no_partial_debit() {
        let mut levels = EquipmentLevels::new();
        let mut res = Resources::new().with(ResourceKind::Dirt, 100);
        let outcome = purchase(&mut levels, &mut res, EquipmentSlot::Armor, false);
        assert_eq!(outcome, PurchaseOutcome::CannotAfford);
        assert_eq!(res.dirt, 100);
        assert_eq!(levels.armor, 0);
    }

    #[test]
    fn test_free_purchase_skips_cost() {
        let mut levels = EquipmentLevels::new();
        let mut res = Resources::new();
        let outcome = purchase(&mut levels, &mut res, EquipmentSlot::Legs, true);
        assert!(matches!(outcome, PurchaseOutcome::Purchased { level: 1, .. }));
        assert!(res.is_empty());
    }

    #[test]
    fn test_purchase_at_max_declined() {
        let mut levels = EquipmentLevels::new();
        levels.set(EquipmentSlot::Helmet, MAX_EQUIPMENT_LEVEL);
        let mut res = rich();
        let before = res;
        let outcome = purchase(&mut levels, &mut res, EquipmentSlot::Helmet, false);
        assert_eq!(outcome, PurchaseOutcome::MaxLevel);
        assert_eq!(res, before);
    }

    #[test]
    fn test_free_upgrade_skips_maxed() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut levels = EquipmentLevels::new();
        for slot in EquipmentSlot::ALL {
            if slot != EquipmentSlot::Shield {
                levels.set(slot, MAX_EQUIPMENT_LEVEL);
            }
        }
        assert_eq!(
            grant_free_upgrade(&mut levels, &mut rng),
            Some((EquipmentSlot::Shield, 1))
        );
    }

    #[test]
    fn test_free_upgrade_none_when_all_maxed() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut levels = EquipmentLevels::new();
        for slot in EquipmentSlot::ALL {
            levels.set(slot, MAX_EQUIPMENT_LEVEL);
        }
        let before = levels;
        assert_eq!(grant_free_upgrade(&mut levels, &mut rng), None);
        assert_eq!(levels, before);
    }

    #[test]
    fn test_cheapest_affordable() {
        let mut levels = EquipmentLevels::new();
        levels.set(EquipmentSlot::Weapon, 3);
        let res = Resources::new()
            .with(ResourceKind::Dirt, 15)
            .with(ResourceKind::Stone, 11);
        let (slot, cost) = cheapest_affordable(&levels, &res).unwrap();
        assert_eq!(slot, EquipmentSlot::Shield);
        assert_eq!(cost, upgrade_cost(1));
        assert!(cheapest_affordable(&levels, &Resources::new()).is_none());
    }
}
