//! Arc-consistency propagation shared by every solver: a directed-arc work
//! queue that revises one cell's domain against a neighbour's, re-enqueuing
//! arcs toward any cell whose domain just changed.

use std::collections::VecDeque;

use crate::direction::{ALL_DIRECTIONS, Direction};
use crate::grid::Grid;
use crate::rules::Rules;
use crate::tile::TileId;

/// A directed arc: the cell to revise, and the direction from it toward the
/// neighbour supplying support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    /// The cell this arc is revised from.
    pub pos: (usize, usize),
    /// The direction, from `pos`, toward the neighbour supplying support.
    pub dir: Direction,
}

/// Every arc pointing out of `pos`, toward each in-bounds neighbour.
fn arcs_from(grid: &Grid, pos: (usize, usize)) -> impl Iterator<Item = Arc> + '_ {
    ALL_DIRECTIONS.into_iter().filter_map(move |dir| {
        let n = dir.step(pos.0, pos.1)?;
        grid.in_bounds(n.0, n.1).then_some(Arc { pos, dir })
    })
}

/// The full initial arc queue: every cell's arc toward every in-bounds
/// neighbour.
pub fn initial_arcs(grid: &Grid) -> VecDeque<Arc> {
    grid.positions().flat_map(|pos| arcs_from(grid, pos)).collect()
}

/// The arcs to seed after collapsing `pos`: one arc from each in-bounds
/// neighbour back toward `pos`.
pub fn arcs_after_collapse(grid: &Grid, pos: (usize, usize)) -> VecDeque<Arc> {
    ALL_DIRECTIONS
        .into_iter()
        .filter_map(|dir| {
            let n = dir.step(pos.0, pos.1)?;
            grid.in_bounds(n.0, n.1)
                .then_some(Arc { pos: n, dir: dir.opposite() })
        })
        .collect()
}

/// Run arc-consistency propagation from `seed` to completion.
///
/// Returns `Err(pos)` the moment an uncollapsed cell's domain is pruned to
/// empty, leaving the grid in whatever partially-pruned state it had
/// reached -- the caller decides whether that is terminal (non-backtracking
/// solvers) or triggers a rollback (`algorithm::backtracking`).
pub fn propagate(
    grid: &mut Grid,
    rules: &Rules,
    seed: VecDeque<Arc>,
) -> Result<(), (usize, usize)> {
    let mut queue = seed;

    while let Some(Arc { pos, dir }) = queue.pop_front() {
        if grid.at(pos.0, pos.1).is_collapsed() {
            continue;
        }
        let Some(neighbor) = dir.step(pos.0, pos.1) else {
            continue;
        };
        if !grid.in_bounds(neighbor.0, neighbor.1) {
            continue;
        }

        let neighbor_bits = grid.at(neighbor.0, neighbor.1).domain_bits().clone();
        let to_remove: Vec<TileId> = grid
            .at(pos.0, pos.1)
            .domain()
            .filter(|&tile| !rules.has_support(tile, dir, &neighbor_bits))
            .collect();

        if to_remove.is_empty() {
            continue;
        }
        for tile in to_remove {
            grid.at_mut(pos.0, pos.1).remove(tile);
        }
        if grid.at(pos.0, pos.1).is_contradiction() {
            return Err(pos);
        }

        for other_dir in ALL_DIRECTIONS {
            if other_dir == dir {
                continue;
            }
            if let Some(n2) = other_dir.step(pos.0, pos.1) {
                if grid.in_bounds(n2.0, n2.1) {
                    queue.push_back(Arc { pos: n2, dir: other_dir.opposite() });
                }
            }
        }
    }

    Ok(())
}

/// Whether every collapsed pair of adjacent cells agrees on its shared edge
/// label -- the label-level half of "consistent" that `Grid` alone cannot
/// check.
pub fn grid_is_consistent(grid: &Grid, tiles: &[crate::tile::Tile]) -> bool {
    grid.positions().all(|(r, c)| {
        let Some(tile) = grid.at(r, c).collapsed() else {
            return true;
        };
        for dir in [Direction::South, Direction::East] {
            if let Some((nr, nc)) = dir.step(r, c) {
                if grid.in_bounds(nr, nc) {
                    if let Some(other) = grid.at(nr, nc).collapsed() {
                        if !tiles[tile as usize].is_compatible(&tiles[other as usize], dir) {
                            return false;
                        }
                    }
                }
            }
        }
        true
    })
}
