//! Surface reachability through dug-out tiles.

use std::collections::VecDeque;

use super::types::MineGrid;

/// Orthogonal neighbours of a cell that lie inside the grid.
pub fn orthogonal_neighbors(row: usize, col: usize, rows: usize, cols: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(4);
    if row > 0 {
        neighbors.push((row - 1, col));
    }
    if row + 1 < rows {
        neighbors.push((row + 1, col));
    }
    if col > 0 {
        neighbors.push((row, col - 1));
    }
    if col + 1 < cols {
        neighbors.push((row, col + 1));
    }
    neighbors
}

/// Deepest row connected to the surface through `Empty` tiles.
///
/// Breadth-first search seeded with every empty tile of row 0, expanding through
/// 4-adjacent empty tiles. Returns 0 when row 0 has no empty tile.
pub fn accessible_depth(grid: &MineGrid) -> usize {
    let mut visited = vec![vec![false; grid.cols]; grid.rows];
    let mut queue = VecDeque::new();

    if let Some(surface) = grid.tiles.first() {
        for (col, tile) in surface.iter().enumerate() {
            if tile.tile_type.is_empty() {
                visited[0][col] = true;
                queue.push_back((0usize, col));
            }
        }
    }

    let mut deepest = 0;
    while let Some((row, col)) = queue.pop_front() {
        deepest = deepest.max(row);
        for (nr, nc) in orthogonal_neighbors(row, col, grid.rows, grid.cols) {
            if visited[nr][nc] {
                continue;
            }
            if grid.tile_type(nr, nc).is_some_and(|t| t.is_empty()) {
                visited[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }

    deepest
}
