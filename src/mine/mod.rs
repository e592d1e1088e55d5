//! The mine: grid types, generation, digging and reachability.

pub mod generation;
pub mod logic;
pub mod reachability;
pub mod types;

pub use generation::{generate_mine, generate_mine_with_size};
pub use logic::{dig, is_diggable, DigResult};
pub use reachability::accessible_depth;
pub use types::{MineGrid, Tile, TileType};
