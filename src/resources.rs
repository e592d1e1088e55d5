//! Resource kinds and the ledger used for balances, loot and costs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Dirt,
    Stone,
    Mineral,
    Silver,
    Gold,
    Dynamite,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Dirt,
        ResourceKind::Stone,
        ResourceKind::Mineral,
        ResourceKind::Silver,
        ResourceKind::Gold,
        ResourceKind::Dynamite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ResourceKind::Dirt => "Dirt",
            ResourceKind::Stone => "Stone",
            ResourceKind::Mineral => "Mineral",
            ResourceKind::Silver => "Silver",
            ResourceKind::Gold => "Gold",
            ResourceKind::Dynamite => "Dynamite",
        }
    }
}

/// A bundle of resource counts.
///
/// The same type serves as the player's ledger, as a loot drop and as an
/// equipment cost. Counts are unsigned; spending goes through
/// [`Resources::try_spend`] so balances never underflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(default)]
    pub dirt: u64,
    #[serde(default)]
    pub stone: u64,
    #[serde(default)]
    pub mineral: u64,
    #[serde(default)]
    pub silver: u64,
    #[serde(default)]
    pub gold: u64,
    #[serde(default)]
    pub dynamite: u64,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::Dirt => self.dirt,
            ResourceKind::Stone => self.stone,
            ResourceKind::Mineral => self.mineral,
            ResourceKind::Silver => self.silver,
            ResourceKind::Gold => self.gold,
            ResourceKind::Dynamite => self.dynamite,
        }
    }

    fn slot_mut(&mut self, kind: ResourceKind) -> &mut u64 {
        match kind {
            ResourceKind::Dirt => &mut self.dirt,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Mineral => &mut self.mineral,
            ResourceKind::Silver => &mut self.silver,
            ResourceKind::Gold => &mut self.gold,
            ResourceKind::Dynamite => &mut self.dynamite,
        }
    }

    pub fn set(&mut self, kind: ResourceKind, amount: u64) {
        *self.slot_mut(kind) = amount;
    }

    pub fn add(&mut self, kind: ResourceKind, amount: u64) {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
    }

    /// Builder-style [`Resources::add`].
    pub fn with(mut self, kind: ResourceKind, amount: u64) -> Self {
        self.add(kind, amount);
        self
    }

    /// Adds every count of `other` into `self`.
    pub fn merge(&mut self, other: &Resources) {
        for kind in ResourceKind::ALL {
            self.add(kind, other.get(kind));
        }
    }

    /// Returns a copy with every count multiplied by `multiplier` and rounded.
    pub fn scaled(&self, multiplier: u32) -> Resources {
        let mut out = Resources::new();
        for kind in ResourceKind::ALL {
            out.set(kind, scale_amount(self.get(kind), multiplier));
        }
        out
    }

    /// True when every count in `cost` is covered by `self`.
    pub fn can_afford(&self, cost: &Resources) -> bool {
        ResourceKind::ALL
            .iter()
            .all(|&kind| self.get(kind) >= cost.get(kind))
    }

    /// Debits `cost` if affordable. Nothing is debited otherwise.
    pub fn try_spend(&mut self, cost: &Resources) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        for kind in ResourceKind::ALL {
            let slot = self.slot_mut(kind);
            *slot = slot.saturating_sub(cost.get(kind));
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        ResourceKind::ALL.iter().all(|&kind| self.get(kind) == 0)
    }

    /// Non-zero entries in display order.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (ResourceKind, u64)> + '_ {
        ResourceKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
            .filter(|&(_, amount)| amount > 0)
    }

    pub fn total(&self) -> u64 {
        ResourceKind::ALL.iter().map(|&kind| self.get(kind)).sum()
    }
}

/// `round(amount * multiplier)` on integers.
pub fn scale_amount(amount: u64, multiplier: u32) -> u64 {
    (amount as f64 * multiplier as f64).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut res = Resources::new();
        res.add(ResourceKind::Dirt, 3);
        res.add(ResourceKind::Dirt, 2);
        res.add(ResourceKind::Gold, 1);
        assert_eq!(res.get(ResourceKind::Dirt), 5);
        assert_eq!(res.get(ResourceKind::Gold), 1);
        assert_eq!(res.get(ResourceKind::Stone), 0);
    }

    #[test]
    fn test_try_spend_is_all_or_nothing() {
        let mut res = Resources::new()
            .with(ResourceKind::Dirt, 10)
            .with(ResourceKind::Stone, 2);
        let cost = Resources::new()
            .with(ResourceKind::Dirt, 5)
            .with(ResourceKind::Stone, 3);

        assert!(!res.try_spend(&cost));
        assert_eq!(res.dirt, 10);
        assert_eq!(res.stone, 2);

        res.add(ResourceKind::Stone, 1);
        assert!(res.try_spend(&cost));
        assert_eq!(res.dirt, 5);
        assert_eq!(res.stone, 0);
    }

    #[test]
    fn test_scaled_rounds_each_kind() {
        let loot = Resources::new()
            .with(ResourceKind::Mineral, 5)
            .with(ResourceKind::Silver, 2);
        let scaled = loot.scaled(3);
        assert_eq!(scaled.mineral, 15);
        assert_eq!(scaled.silver, 6);
        assert_eq!(scaled.dirt, 0);
    }

    #[test]
    fn test_merge_and_iter_nonzero() {
        let mut a = Resources::new().with(ResourceKind::Dirt, 1);
        let b = Resources::new()
            .with(ResourceKind::Dirt, 2)
            .with(ResourceKind::Dynamite, 1);
        a.merge(&b);
        let entries: Vec<_> = a.iter_nonzero().collect();
        assert_eq!(
            entries,
            vec![(ResourceKind::Dirt, 3), (ResourceKind::Dynamite, 1)]
        );
        assert_eq!(a.total(), 4);
        assert!(!a.is_empty());
        assert!(Resources::new().is_empty());
    }

    #[test]
    fn test_json_uses_field_names() {
        let res = Resources::new().with(ResourceKind::Gold, 7);
        let json = serde_json::to_string(&res).unwrap();
        assert!(json.contains("\"gold\":7"));
        let back: Resources = serde_json::from_str("{\"dirt\":4}").unwrap();
        assert_eq!(back.dirt, 4);
        assert_eq!(back.gold, 0);
    }
}
