//! Six equipment slots, each levelled 0..=30.

pub mod data;
pub mod logic;
pub mod types;

pub use data::{item_name, item_stats, total_bonuses, upgrade_cost, EquipmentStats};
pub use logic::{cheapest_affordable, grant_free_upgrade, next_level_cost, purchase, PurchaseOutcome};
pub use types::{EquipmentLevels, EquipmentSlot};
