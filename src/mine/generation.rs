//! Procedural mine generation.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{MineGrid, Tile, TileType};
use crate::core::constants::{
    CHEST_BAND, EARLY_REWARD_EDGE_MARGIN, EARLY_REWARD_FIRST_ROW, EARLY_REWARD_LAST_ROW,
    EARLY_REWARD_MINERALS, EASTER_EGG_BAND, GOLD_ORE_BAND, MINERAL_BAND, OPENING_FIRST_COL,
    OPENING_LAST_COL, SILVER_ORE_BAND, STONE_SHARE, TILE_COLS, TILE_ROWS, TILE_VARIANTS,
};

/// Generates a fresh mine of the standard size.
pub fn generate_mine<R: Rng>(rng: &mut R) -> MineGrid {
    generate_mine_with_size(TILE_ROWS, TILE_COLS, rng)
}

/// Generates a mine of arbitrary size.
///
/// Layout rules:
/// - row 0, columns 3..=6 are pre-carved `Empty`
/// - one chest and three minerals are reserved in rows 3..=14, away from the
///   side walls, the minerals never sharing the chest's row
/// - every other cell comes from one draw against cumulative depth bands
pub fn generate_mine_with_size<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> MineGrid {
    let mut types = vec![vec![TileType::Dirt; cols]; rows];
    let mut reserved = vec![vec![false; cols]; rows];

    let (chest, minerals) = reserve_early_rewards(rows, cols, rng);
    if let Some((r, c)) = chest {
        reserved[r][c] = true;
        types[r][c] = TileType::Chest;
    }
    for (r, c) in minerals {
        reserved[r][c] = true;
        types[r][c] = TileType::Mineral;
    }

    for r in 0..rows {
        for c in 0..cols {
            if r == 0 && (OPENING_FIRST_COL..=OPENING_LAST_COL).contains(&c) {
                types[r][c] = TileType::Empty;
            } else if !reserved[r][c] {
                types[r][c] = roll_tile(r, rng.gen::<f64>());
            }
        }
    }

    let mut tiles = Vec::with_capacity(rows);
    for (r, row) in types.into_iter().enumerate() {
        let mut out = Vec::with_capacity(cols);
        for (c, tile_type) in row.into_iter().enumerate() {
            out.push(Tile::new(r, c, tile_type, rng.gen_range(0..TILE_VARIANTS)));
        }
        tiles.push(out);
    }

    MineGrid { rows, cols, tiles }
}

/// Picks the early chest cell, then three distinct mineral cells off the
/// chest's row. Both come from rows 3..=14 with a margin from the side walls.
/// Grids too small to hold the window get no reserved rewards.
fn reserve_early_rewards<R: Rng>(
    rows: usize,
    cols: usize,
    rng: &mut R,
) -> (Option<(usize, usize)>, Vec<(usize, usize)>) {
    let candidate_rows: Vec<usize> = (EARLY_REWARD_FIRST_ROW..=EARLY_REWARD_LAST_ROW)
        .filter(|&r| r < rows)
        .collect();
    if cols <= EARLY_REWARD_EDGE_MARGIN * 2 {
        return (None, Vec::new());
    }
    let candidate_cols: Vec<usize> =
        (EARLY_REWARD_EDGE_MARGIN..cols - EARLY_REWARD_EDGE_MARGIN).collect();

    let (chest_row, chest_col) = match (candidate_rows.choose(rng), candidate_cols.choose(rng)) {
        (Some(&r), Some(&c)) => (r, c),
        _ => return (None, Vec::new()),
    };

    let cells: Vec<(usize, usize)> = candidate_rows
        .iter()
        .filter(|&&r| r != chest_row)
        .flat_map(|&r| candidate_cols.iter().map(move |&c| (r, c)))
        .collect();
    let minerals = cells
        .choose_multiple(rng, EARLY_REWARD_MINERALS)
        .copied()
        .collect();

    (Some((chest_row, chest_col)), minerals)
}

/// Classifies one uniform draw for a cell at `row` against the depth bands.
pub fn roll_tile(row: usize, roll: f64) -> TileType {
    let bands = [
        (GOLD_ORE_BAND, TileType::GoldOre),
        (SILVER_ORE_BAND, TileType::SilverOre),
        (MINERAL_BAND, TileType::Mineral),
        (CHEST_BAND, TileType::Chest),
        (EASTER_EGG_BAND, TileType::EasterEgg),
    ];

    let mut cumulative = 0.0;
    for ((min_row, chance), tile_type) in bands {
        if row > min_row {
            cumulative += chance;
            if roll < cumulative {
                return tile_type;
            }
        }
    }

    if roll < cumulative + STONE_SHARE {
        TileType::Stone
    } else {
        TileType::Dirt
    }
}
