//! Sub-grid orchestrator: partitions the full grid into overlapping `S × S`
//! windows that share a border row/column, solves each with WFC-MRV, and
//! stitches the results back together via copy-in/reconcile/solve/copy-out.

use std::collections::VecDeque;

use rand::Rng;

use crate::algorithm::{common, wfc};
use crate::cell::Cell;
use crate::grid::Grid;
use crate::rules::Rules;

/// Diagnostics aggregated across every window.
#[derive(Debug, Clone, Copy, Default)]
pub struct NwfcStats {
    /// Total rollback count across every window solved under backtracking.
    pub backtrack_count: usize,
    /// Sum of each window's peak snapshot memory.
    pub peak_snapshot_bytes: usize,
}

/// The effective grid dimensions for `window_rows × window_cols` windows of
/// side `subgrid_size`, sharing one row/column of border between neighbours.
pub fn effective_dims(window_rows: usize, window_cols: usize, subgrid_size: usize) -> (usize, usize) {
    (
        window_rows * (subgrid_size - 1) + 1,
        window_cols * (subgrid_size - 1) + 1,
    )
}

/// Solve the full grid window by window, in row-major window order.
///
/// `backtracking` selects mode (B): each window gains a one-cell lookahead
/// row/column (when a following window exists in that dimension) and its
/// WFC pass runs under the decision-frame protocol; without it, mode (A)
/// windows are exactly `S × S` and WFC runs without backtracking.
pub fn solve(
    window_rows: usize,
    window_cols: usize,
    subgrid_size: usize,
    rules: &Rules,
    rng: &mut impl Rng,
    backtracking: bool,
) -> (Grid, NwfcStats) {
    debug_assert!(subgrid_size >= 2, "subgrid_size must be at least 2");

    let (rows, cols) = effective_dims(window_rows, window_cols, subgrid_size);
    let mut grid = Grid::initialize(rows, cols, &Cell::full(rules.num_tiles()));
    let mut stats = NwfcStats::default();

    for sr in 0..window_rows {
        for sc in 0..window_cols {
            let row0 = sr * (subgrid_size - 1);
            let col0 = sc * (subgrid_size - 1);
            let extra_row = backtracking && sr + 1 < window_rows;
            let extra_col = backtracking && sc + 1 < window_cols;
            let win_rows = subgrid_size + extra_row as usize;
            let win_cols = subgrid_size + extra_col as usize;

            let mut window = Grid::initialize(win_rows, win_cols, &Cell::full(rules.num_tiles()));
            copy_in(&grid, &mut window, row0, col0, subgrid_size);
            reconcile_borders(&mut window, rules, sr, sc, subgrid_size);

            if backtracking {
                if let Some(window_stats) = wfc::solve_with_backtracking(&mut window, rules, rng, wfc::Selection::Mrv) {
                    stats.backtrack_count += window_stats.backtrack_count;
                    stats.peak_snapshot_bytes += window_stats.peak_snapshot_bytes;
                }
            } else {
                wfc::solve(&mut window, rules, rng, wfc::Selection::Mrv);
            }

            copy_out(&mut grid, &window, row0, col0, subgrid_size);
        }
    }

    (grid, stats)
}

fn copy_in(grid: &Grid, window: &mut Grid, row0: usize, col0: usize, subgrid_size: usize) {
    for r in 0..subgrid_size {
        for c in 0..subgrid_size {
            *window.at_mut(r, c) = grid.at(row0 + r, col0 + c).clone();
        }
    }
}

fn copy_out(grid: &mut Grid, window: &Grid, row0: usize, col0: usize, subgrid_size: usize) {
    for r in 0..subgrid_size {
        for c in 0..subgrid_size {
            *grid.at_mut(row0 + r, col0 + c) = window.at(r, c).clone();
        }
    }
}

/// Propagate from every already-collapsed cell on the window's inherited
/// top/left edge, so constraints from neighbouring windows reach in before
/// any new collapse happens.
fn reconcile_borders(window: &mut Grid, rules: &Rules, sr: usize, sc: usize, subgrid_size: usize) {
    let mut seed = VecDeque::new();
    if sr > 0 {
        for c in 0..subgrid_size {
            if window.at(0, c).is_collapsed() {
                seed.extend(common::arcs_after_collapse(window, (0, c)));
            }
        }
    }
    if sc > 0 {
        for r in 0..subgrid_size {
            if window.at(r, 0).is_collapsed() {
                seed.extend(common::arcs_after_collapse(window, (r, 0)));
            }
        }
    }
    if !seed.is_empty() {
        let _ = common::propagate(window, rules, seed);
    }
}
