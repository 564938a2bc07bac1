//! Wave-Function-Collapse solver: MRV or anti-diagonal cell selection, full
//! four-direction AC-3 propagation after every collapse.

use rand::Rng;

use crate::algorithm::backtracking::{self, SolveStats, Strategy};
use crate::algorithm::common;
use crate::grid::Grid;
use crate::rules::Rules;
use crate::tile::TileId;

/// Cell-selection strategy for WFC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Minimum-remaining-values: smallest live domain, ties broken
    /// row-major.
    Mrv,
    /// Anti-diagonal traversal, skipping already-collapsed cells.
    AntiDiagonal,
}

fn mrv_select(grid: &Grid) -> Option<(usize, usize)> {
    grid.positions()
        .filter(|&(r, c)| !grid.at(r, c).is_collapsed())
        .min_by_key(|&(r, c)| (grid.at(r, c).domain_size(), r, c))
}

fn collapse_and_propagate(
    grid: &mut Grid,
    rules: &Rules,
    rng: &mut impl Rng,
    pos: (usize, usize),
) -> Result<(), (usize, usize)> {
    let domain: Vec<TileId> = grid.at(pos.0, pos.1).domain().collect();
    let tile = domain[rng.random_range(0..domain.len())];
    grid.at_mut(pos.0, pos.1).collapse(tile);
    let seed = common::arcs_after_collapse(grid, pos);
    common::propagate(grid, rules, seed)
}

/// Run WFC without backtracking. On contradiction, stops immediately and
/// leaves the grid in its inconsistent state.
pub fn solve(grid: &mut Grid, rules: &Rules, rng: &mut impl Rng, selection: Selection) {
    match selection {
        Selection::Mrv => loop {
            let Some(pos) = mrv_select(grid) else { return };
            if grid.at(pos.0, pos.1).domain_size() == 0 {
                return; // contradiction: terminal.
            }
            if collapse_and_propagate(grid, rules, rng, pos).is_err() {
                return;
            }
        },
        Selection::AntiDiagonal => {
            for pos in grid.anti_diagonal_positions().collect::<Vec<_>>() {
                if grid.at(pos.0, pos.1).is_collapsed() {
                    continue;
                }
                if grid.at(pos.0, pos.1).domain_size() == 0 {
                    return;
                }
                if collapse_and_propagate(grid, rules, rng, pos).is_err() {
                    return;
                }
            }
        }
    }
}

struct MrvStrategy<'a> {
    rules: &'a Rules,
}

impl<'a> Strategy for MrvStrategy<'a> {
    fn select(&mut self, grid: &Grid) -> Option<((usize, usize), usize)> {
        mrv_select(grid).map(|pos| (pos, 0))
    }

    fn restore_cursor(&mut self, _checkpoint: usize) {
        // MRV recomputes the next cell from live grid state every call.
    }

    fn propagate(&self, grid: &mut Grid, pos: (usize, usize)) -> Result<(), (usize, usize)> {
        let seed = common::arcs_after_collapse(grid, pos);
        common::propagate(grid, self.rules, seed)
    }
}

struct AntiDiagonalStrategy<'a> {
    rules: &'a Rules,
    positions: Vec<(usize, usize)>,
    cursor: usize,
}

impl<'a> Strategy for AntiDiagonalStrategy<'a> {
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
        let seed = common::arcs_after_collapse(grid, pos);
        common::propagate(grid, self.rules, seed)
    }
}

/// Run WFC under the decision-frame backtracking protocol.
pub fn solve_with_backtracking(
    grid: &mut Grid,
    rules: &Rules,
    rng: &mut impl Rng,
    selection: Selection,
) -> Option<SolveStats> {
    match selection {
        Selection::Mrv => {
            let mut strategy = MrvStrategy { rules };
            backtracking::run(grid, rules.num_tiles(), rng, &mut strategy)
        }
        Selection::AntiDiagonal => {
            let mut strategy = AntiDiagonalStrategy {
                rules,
                positions: grid.anti_diagonal_positions().collect(),
                cursor: 0,
            };
            backtracking::run(grid, rules.num_tiles(), rng, &mut strategy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::tile::Tile;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn four_tile_alphabet() -> Vec<Tile> {
        vec![
            Tile::new(0, 'A', 'A', 'A', 'A'),
            Tile::new(1, 'A', 'A', 'B', 'B'),
            Tile::new(2, 'B', 'B', 'A', 'A'),
            Tile::new(3, 'B', 'B', 'B', 'B'),
        ]
    }

    #[test]
    fn mrv_solves_a_three_by_three_grid() {
        let tiles = four_tile_alphabet();
        let rules = Rules::compile(&tiles);
        let mut grid = Grid::initialize(3, 3, &Cell::full(4));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        solve(&mut grid, &rules, &mut rng, Selection::Mrv);
        assert!(grid.is_fully_collapsed());
        assert!(common::grid_is_consistent(&grid, &tiles));
    }

    #[test]
    fn anti_diagonal_solves_a_three_by_three_grid() {
        let tiles = four_tile_alphabet();
        let rules = Rules::compile(&tiles);
        let mut grid = Grid::initialize(3, 3, &Cell::full(4));
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        solve(&mut grid, &rules, &mut rng, Selection::AntiDiagonal);
        assert!(grid.is_fully_collapsed());
        assert!(common::grid_is_consistent(&grid, &tiles));
    }

    #[test]
    fn mrv_backtracking_solves_a_five_by_five_grid() {
        let tiles = four_tile_alphabet();
        let rules = Rules::compile(&tiles);
        let mut grid = Grid::initialize(5, 5, &Cell::full(4));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let stats = solve_with_backtracking(&mut grid, &rules, &mut rng, Selection::Mrv);
        assert!(stats.is_some());
        assert!(grid.is_fully_collapsed());
        assert!(common::grid_is_consistent(&grid, &tiles));
    }
}
