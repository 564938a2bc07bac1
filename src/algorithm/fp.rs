//! Fast-Propagation solver: a single pass over the grid in raster or
//! anti-diagonal order, collapsing each cell and pruning only its forward
//! (south, east) neighbours. Not globally arc-consistent.

use rand::Rng;

use crate::algorithm::backtracking::{self, SolveStats, Strategy};
use crate::direction::Direction;
use crate::grid::Grid;
use crate::rules::Rules;
use crate::tile::TileId;

/// Cell visitation order for FP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Row-major visitation order.
    Raster,
    /// Anti-diagonal visitation order.
    AntiDiagonal,
}

fn positions_for(grid: &Grid, traversal: Traversal) -> Vec<(usize, usize)> {
    match traversal {
        Traversal::Raster => grid.positions().collect(),
        Traversal::AntiDiagonal => grid.anti_diagonal_positions().collect(),
    }
}

/// Prune the south and east neighbours of the just-collapsed cell at `pos`.
/// Returns `Err` with the pruned neighbour's position on contradiction.
fn forward_prune(grid: &mut Grid, rules: &Rules, pos: (usize, usize)) -> Result<(), (usize, usize)> {
    let tile = grid
        .at(pos.0, pos.1)
        .collapsed()
        .expect("forward_prune called on an uncollapsed cell");

    for dir in [Direction::South, Direction::East] {
        let Some(n) = dir.step(pos.0, pos.1) else { continue };
        if !grid.in_bounds(n.0, n.1) {
            continue;
        }
        let compatible = rules.compatible(tile, dir).clone();
        let to_remove: Vec<TileId> = grid
            .at(n.0, n.1)
            .domain()
            .filter(|t| !compatible.contains(*t as usize))
            .collect();
        for t in to_remove {
            grid.at_mut(n.0, n.1).remove(t);
        }
        if grid.at(n.0, n.1).is_contradiction() {
            return Err(n);
        }
    }
    Ok(())
}

/// Run FP without backtracking. On contradiction, stops immediately and
/// leaves the grid in its inconsistent state.
pub fn solve(grid: &mut Grid, rules: &Rules, rng: &mut impl Rng, traversal: Traversal) {
    for pos in positions_for(grid, traversal) {
        let domain: Vec<TileId> = grid.at(pos.0, pos.1).domain().collect();
        if domain.is_empty() {
            return; // a prior prune already emptied this cell: terminal.
        }
        let tile = domain[rng.random_range(0..domain.len())];
        grid.at_mut(pos.0, pos.1).collapse(tile);
        if forward_prune(grid, rules, pos).is_err() {
            return;
        }
    }
}

struct OrderedStrategy<'a> {
    rules: &'a Rules,
    positions: Vec<(usize, usize)>,
    cursor: usize,
}

impl<'a> Strategy for OrderedStrategy<'a> {
    fn select(&mut self, grid: &Grid) -> Option<((usize, usize), usize)> {
        while self.cursor < self.positions.len() {
            let pos = self.positions[self.cursor];
            self.cursor += 1;
            if !grid.at(pos.0, pos.1).is_collapsed() {
                return Some((pos, self.cursor));
            }
        }
        None
    }

    fn restore_cursor(&mut self, checkpoint: usize) {
        self.cursor = checkpoint;
    }

    fn propagate(&self, grid: &mut Grid, pos: (usize, usize)) -> Result<(), (usize, usize)> {
        forward_prune(grid, self.rules, pos)
    }
}

/// Run FP under the decision-frame backtracking protocol, using
/// forward-only pruning as its propagate step.
pub fn solve_with_backtracking(
    grid: &mut Grid,
    rules: &Rules,
    rng: &mut impl Rng,
    traversal: Traversal,
) -> Option<SolveStats> {
    let mut strategy = OrderedStrategy {
        rules,
        positions: positions_for(grid, traversal),
        cursor: 0,
    };
    backtracking::run(grid, rules.num_tiles(), rng, &mut strategy)
}
