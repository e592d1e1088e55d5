//! Digging: turning tiles into `Empty` and converting them into loot.

use rand::Rng;

use super::reachability::orthogonal_neighbors;
use super::types::{MineGrid, TileType};
use crate::loot::tile_loot;
use crate::resources::Resources;

/// Outcome of a single or area dig. Loot is unscaled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigResult {
    pub loot: Resources,
    /// Deepest row among the tiles actually dug, if any were.
    pub deepest_dug_row: Option<usize>,
    pub tiles_dug: u32,
}

impl DigResult {
    pub fn is_empty(&self) -> bool {
        self.tiles_dug == 0
    }
}

/// A tile can be dug when it is in bounds, not yet empty, and touches an
/// empty tile orthogonally.
pub fn is_diggable(grid: &MineGrid, row: usize, col: usize) -> bool {
    match grid.tile_type(row, col) {
        Some(t) if !t.is_empty() => orthogonal_neighbors(row, col, grid.rows, grid.cols)
            .into_iter()
            .any(|(r, c)| grid.tile_type(r, c).is_some_and(|n| n.is_empty())),
        _ => false,
    }
}

/// Cells targeted by a dig: the cell itself, or the 3×3 block around it
/// clipped to the grid.
pub fn dig_targets(grid: &MineGrid, row: usize, col: usize, area: bool) -> Vec<(usize, usize)> {
    if !area {
        return if grid.get(row, col).is_some() {
            vec![(row, col)]
        } else {
            Vec::new()
        };
    }

    let mut targets = Vec::with_capacity(9);
    for dr in -1isize..=1 {
        for dc in -1isize..=1 {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if grid.in_bounds(r, c) {
                targets.push((r as usize, c as usize));
            }
        }
    }
    targets
}

/// Digs at `(row, col)`, mutating the grid in place.
///
/// Empty and out-of-bounds cells are skipped, so digging the same place twice
/// yields nothing the second time. Easter eggs dug here count toward
/// `tiles_dug` but carry no loot.
pub fn dig<R: Rng>(grid: &mut MineGrid, row: usize, col: usize, area: bool, rng: &mut R) -> DigResult {
    let mut result = DigResult::default();

    for (r, c) in dig_targets(grid, row, col, area) {
        let tile_type = match grid.tile_type(r, c) {
            Some(t) if t != TileType::Empty => t,
            _ => continue,
        };

        result.loot.merge(&tile_loot(tile_type, r, rng));
        grid.set_tile_type(r, c, TileType::Empty);
        result.tiles_dug += 1;
        result.deepest_dug_row = Some(result.deepest_dug_row.map_or(r, |d| d.max(r)));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn shaft_grid() -> MineGrid {
        let mut grid = MineGrid::filled_with_size(6, 5, TileType::Dirt);
        grid.set_tile_type(0, 2, TileType::Empty);
        grid
    }

    #[test]
    fn test_is_diggable_requires_empty_neighbor() {
        let grid = shaft_grid();
        assert!(is_diggable(&grid, 1, 2));
        assert!(is_diggable(&grid, 0, 1));
        assert!(!is_diggable(&grid, 0, 2));
        assert!(!is_diggable(&grid, 1, 1));
        assert!(!is_diggable(&grid, 3, 3));
        assert!(!is_diggable(&grid, 99, 0));
    }

    #[test]
    fn test_single_dig() {
        let mut grid = shaft_grid();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let result = dig(&mut grid, 1, 2, false, &mut rng);
        assert_eq!(result.tiles_dug, 1);
        assert_eq!(result.loot.dirt, 1);
        assert_eq!(result.deepest_dug_row, Some(1));
        assert_eq!(grid.tile_type(1, 2), Some(TileType::Empty));
    }

    #[test]
    fn test_dig_is_idempotent() {
        let mut grid = shaft_grid();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        dig(&mut grid, 1, 2, false, &mut rng);
        let again = dig(&mut grid, 1, 2, false, &mut rng);
        assert!(again.is_empty());
        assert!(again.loot.is_empty());
        assert_eq!(again.deepest_dug_row, None);
    }

    #[test]
    fn test_area_dig_skips_empty_and_out_of_bounds() {
        let mut grid = shaft_grid();
        grid.set_tile_type(1, 2, TileType::Stone);
        grid.set_tile_type(1, 1, TileType::Empty);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = dig(&mut grid, 0, 1, true, &mut rng);
        // Block rows 0..=1, cols 0..=2: six cells, two already empty
        assert_eq!(result.tiles_dug, 4);
        assert_eq!(result.loot.dirt, 3);
        assert_eq!(result.loot.stone, 1);
        assert_eq!(result.deepest_dug_row, Some(1));
        for r in 0..=1 {
            for c in 0..=2 {
                assert_eq!(grid.tile_type(r, c), Some(TileType::Empty));
            }
        }
    }

    #[test]
    fn test_area_dig_full_block() {
        let mut grid = MineGrid::filled_with_size(6, 5, TileType::Mineral);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let result = dig(&mut grid, 3, 2, true, &mut rng);
        assert_eq!(result.tiles_dug, 9);
        assert_eq!(result.loot.mineral, 45);
        assert_eq!(result.deepest_dug_row, Some(4));
    }

    #[test]
    fn test_easter_egg_counts_without_loot() {
        let mut grid = MineGrid::filled_with_size(3, 3, TileType::EasterEgg);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = dig(&mut grid, 1, 1, false, &mut rng);
        assert_eq!(result.tiles_dug, 1);
        assert!(result.loot.is_empty());
    }

    #[test]
    fn test_out_of_bounds_dig_is_noop() {
        let mut grid = shaft_grid();
        let before = grid.clone();
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        assert!(dig(&mut grid, 40, 40, false, &mut rng).is_empty());
        assert_eq!(grid, before);
    }
}
