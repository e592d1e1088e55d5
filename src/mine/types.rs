//! Mine grid data structures.
//!
//! The mine is a fixed rows × cols grid indexed as `tiles[row][col]`, row 0 at
//! the surface. A tile's type only ever changes to `Empty`.

use serde::{Deserialize, Serialize};

use crate::core::constants::{TILE_COLS, TILE_ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TileType {
    Empty,
    Dirt,
    Stone,
    Mineral,
    SilverOre,
    GoldOre,
    Chest,
    EasterEgg,
}

impl TileType {
    pub fn is_empty(&self) -> bool {
        matches!(self, TileType::Empty)
    }
}

/// A single cell of the mine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    /// Stable identifier, `"row-col"`.
    pub id: String,
    /// Cosmetic variant in `0..TILE_VARIANTS`.
    pub variant: u8,
}

impl Tile {
    pub fn new(row: usize, col: usize, tile_type: TileType, variant: u8) -> Self {
        Self {
            tile_type,
            id: format!("{}-{}", row, col),
            variant,
        }
    }
}

/// The full mine grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MineGrid {
    pub rows: usize,
    pub cols: usize,
    /// Indexed as tiles[row][col].
    pub tiles: Vec<Vec<Tile>>,
}

impl MineGrid {
    /// A grid of the standard size filled with `fill`, variant 0.
    pub fn filled(fill: TileType) -> Self {
        Self::filled_with_size(TILE_ROWS, TILE_COLS, fill)
    }

    pub fn filled_with_size(rows: usize, cols: usize, fill: TileType) -> Self {
        let tiles = (0..rows)
            .map(|r| (0..cols).map(|c| Tile::new(r, c, fill, 0)).collect())
            .collect();
        Self { rows, cols, tiles }
    }

    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.rows && (col as usize) < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.tiles.get(row).and_then(|r| r.get(col))
    }

    pub fn tile_type(&self, row: usize, col: usize) -> Option<TileType> {
        self.get(row, col).map(|t| t.tile_type)
    }

    /// Overwrites a tile's type. Returns false when out of bounds.
    pub fn set_tile_type(&mut self, row: usize, col: usize, tile_type: TileType) -> bool {
        match self.tiles.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(tile) => {
                tile.tile_type = tile_type;
                true
            }
            None => false,
        }
    }

    /// Whether the stored dimensions agree with the tile rows.
    pub fn is_well_formed(&self) -> bool {
        self.rows > 0
            && self.cols > 0
            && self.tiles.len() == self.rows
            && self.tiles.iter().all(|r| r.len() == self.cols)
    }

    pub fn count(&self, tile_type: TileType) -> usize {
        self.tiles
            .iter()
            .flatten()
            .filter(|t| t.tile_type == tile_type)
            .count()
    }
}
