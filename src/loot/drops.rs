//! Resource yields for dug tiles, defeated monsters and easter eggs.

use rand::Rng;

use crate::mine::TileType;
use crate::problems::difficulty_for_depth;
use crate::resources::{scale_amount, ResourceKind, Resources};

/// Unscaled loot for digging one tile at `row`.
///
/// Chest gold scales with the problem difficulty of the chest's row. Easter
/// eggs and empty tiles yield nothing here.
pub fn tile_loot<R: Rng>(tile_type: TileType, row: usize, rng: &mut R) -> Resources {
    let mut loot = Resources::new();
    match tile_type {
        TileType::Dirt => loot.add(ResourceKind::Dirt, 1),
        TileType::Stone => loot.add(ResourceKind::Stone, 1),
        TileType::Mineral => loot.add(ResourceKind::Mineral, 5),
        TileType::SilverOre => loot.add(ResourceKind::Silver, rng.gen_range(1..=3)),
        TileType::GoldOre => loot.add(ResourceKind::Gold, rng.gen_range(1..=2)),
        TileType::Chest => {
            loot.add(ResourceKind::Silver, rng.gen_range(10..=30));
            loot.add(ResourceKind::Gold, chest_gold(difficulty_for_depth(row), rng));
        }
        TileType::EasterEgg | TileType::Empty => {}
    }
    loot
}

/// `ceil(difficulty / 2 + U * difficulty)`
pub fn chest_gold<R: Rng>(difficulty: u32, rng: &mut R) -> u64 {
    let d = difficulty as f64;
    (d / 2.0 + rng.gen::<f64>() * d).ceil() as u64
}

/// Loot for defeating the monster at `monster_index`, already scaled.
///
/// Dirt and stone always drop. Mineral, silver and gold unlock past kill
/// difficulties 10, 20 and 50 and then drop with a slowly rising chance.
/// The dynamite every kill grants is not part of this table.
pub fn kill_loot<R: Rng>(monster_index: u64, multiplier: u32, rng: &mut R) -> Resources {
    let difficulty = (monster_index + 1) as f64;
    let mut loot = Resources::new();

    let dirt = 5 + (rng.gen::<f64>() * difficulty * 0.5).floor() as u64;
    loot.add(ResourceKind::Dirt, scale_amount(dirt, multiplier));

    let stone = 3 + (rng.gen::<f64>() * difficulty * 0.4).floor() as u64;
    loot.add(ResourceKind::Stone, scale_amount(stone, multiplier));

    if difficulty > 10.0 && rng.gen::<f64>() < (0.1 + difficulty * 0.001).min(0.9) {
        let mineral = 1 + (rng.gen::<f64>() * difficulty * 0.1).floor() as u64;
        loot.add(ResourceKind::Mineral, scale_amount(mineral, multiplier));
    }

    if difficulty > 20.0 && rng.gen::<f64>() < (0.05 + (difficulty - 20.0) * 0.001).min(0.75) {
        let silver = 1 + (rng.gen::<f64>() * difficulty * 0.05).floor() as u64;
        loot.add(ResourceKind::Silver, scale_amount(silver, multiplier));
    }

    if difficulty > 50.0 && rng.gen::<f64>() < (0.01 + (difficulty - 50.0) * 0.0005).min(0.5) {
        let gold = 1 + (rng.gen::<f64>() * difficulty * 0.025).floor() as u64;
        loot.add(ResourceKind::Gold, scale_amount(gold, multiplier));
    }

    loot
}

/// An easter egg pays out either gold or silver, already scaled.
pub fn easter_egg_reward<R: Rng>(multiplier: u32, rng: &mut R) -> (ResourceKind, u64) {
    if rng.gen_bool(0.5) {
        (ResourceKind::Gold, scale_amount(rng.gen_range(5..=20), multiplier))
    } else {
        (ResourceKind::Silver, scale_amount(rng.gen_range(20..=50), multiplier))
    }
}
