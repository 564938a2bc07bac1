//! The row-major matrix of `Cell`s being solved, with deep snapshot support.

use ndarray::Array2;
use std::ops::{Index, IndexMut};

use crate::cell::Cell;

/// A `rows × columns` matrix of `Cell`s.
///
/// The grid exclusively owns its cells and their domains. `snapshot`/
/// `restore` provide the deep-copy round trip the backtracking engine
/// depends on: a snapshot must be unaffected by subsequent mutation of the
/// live grid, and vice versa.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Array2<Cell>,
}

/// A deep copy of a `Grid`'s cells at one instant, independent of later
/// mutation of either the snapshot or the grid it was taken from.
#[derive(Debug, Clone)]
pub struct Snapshot {
    cells: Array2<Cell>,
}

impl Grid {
    /// Fill a `rows × cols` grid with independent copies of `template`.
    pub fn initialize(rows: usize, cols: usize, template: &Cell) -> Self {
        debug_assert!(rows > 0 && cols > 0, "grid dimensions must be positive");
        let cells = Array2::from_shape_fn((rows, cols), |_| template.clone());
        Self { rows, cols, cells }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Immutable access to the cell at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[(row, col)]
    }

    /// Mutable access to the cell at `(row, col)`.
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[(row, col)]
    }

    /// Whether `(row, col)` lies within the grid.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Iterate all `(row, col)` positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    /// Iterate positions by anti-diagonal, then increasing row within each
    /// diagonal.
    pub fn anti_diagonal_positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.rows;
        let cols = self.cols;
        (0..(rows + cols).saturating_sub(1)).flat_map(move |d| {
            let row_lo = d.saturating_sub(cols - 1);
            let row_hi = d.min(rows - 1);
            (row_lo..=row_hi).filter_map(move |r| {
                let c = d - r;
                (c < cols).then_some((r, c))
            })
        })
    }

    /// Whether every cell is collapsed. Label-level adjacency agreement
    /// additionally requires a `Rules` reference -- see
    /// `algorithm::common::grid_is_consistent`.
    pub fn is_fully_collapsed(&self) -> bool {
        self.positions().all(|(r, c)| self.at(r, c).is_collapsed())
    }

    /// Whether any uncollapsed cell has an empty domain.
    pub fn has_contradiction(&self) -> bool {
        self.positions().any(|(r, c)| self.at(r, c).is_contradiction())
    }

    /// Take a deep snapshot of the current cells.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            cells: self.cells.clone(),
        }
    }

    /// Replace this grid's contents in place from `snapshot`.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.cells.assign(&snapshot.cells);
    }

    /// Render the solved grid as a row-major integer matrix, with
    /// uncollapsed cells reported as `-1`.
    pub fn to_matrix(&self) -> Array2<i64> {
        self.cells
            .mapv(|cell| cell.collapsed().map_or(-1, |id| id as i64))
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, idx: (usize, usize)) -> &Cell {
        &self.cells[idx]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Cell {
        &mut self.cells[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_deep_copies_the_template() {
        let template = Cell::full(3);
        let mut grid = Grid::initialize(2, 2, &template);
        grid.at_mut(0, 0).collapse(1);
        assert!(grid.at(0, 0).is_collapsed());
        assert!(!grid.at(0, 1).is_collapsed());
    }

    #[test]
    fn snapshot_round_trip_restores_exact_state() {
        let template = Cell::full(3);
        let mut grid = Grid::initialize(2, 2, &template);
        let snap = grid.snapshot();

        grid.at_mut(0, 0).collapse(2);
        grid.at_mut(1, 1).remove(0);
        grid.restore(&snap);

        assert!(!grid.at(0, 0).is_collapsed());
        assert_eq!(grid.at(1, 1).domain_size(), 3);
    }

    #[test]
    fn snapshot_is_independent_of_later_mutation() {
        let template = Cell::full(2);
        let mut grid = Grid::initialize(1, 1, &template);
        let snap = grid.snapshot();
        grid.at_mut(0, 0).collapse(0);
        // Mutating a second snapshot must not retroactively affect the first.
        let snap2 = grid.snapshot();
        grid.restore(&snap);
        assert!(!grid.at(0, 0).is_collapsed());
        grid.restore(&snap2);
        assert!(grid.at(0, 0).is_collapsed());
    }

    #[test]
    fn anti_diagonal_visits_every_cell_exactly_once() {
        let template = Cell::full(2);
        let grid = Grid::initialize(3, 4, &template);
        let mut seen: Vec<_> = grid.anti_diagonal_positions().collect();
        seen.sort();
        let mut expected: Vec<_> = grid.positions().collect();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn to_matrix_reports_sentinel_for_uncollapsed_cells() {
        let template = Cell::full(2);
        let mut grid = Grid::initialize(1, 2, &template);
        grid.at_mut(0, 0).collapse(1);
        let m = grid.to_matrix();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], -1);
    }
}
