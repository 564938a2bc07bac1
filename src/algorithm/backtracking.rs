//! The decision-frame backtracking engine shared by every `*_BACKTRACK`
//! solver variant: a stack of snapshot/tried-tiles frames, updated in place
//! on a failed choice and popped only when a frame's domain is exhausted.

use fixedbitset::FixedBitSet;
use rand::Rng;

use crate::grid::{Grid, Snapshot};
use crate::tile::TileId;

/// One pending decision: the grid state before it was made, the cell it
/// decided, and the tile ids already tried and rejected there.
struct Frame {
    snapshot: Snapshot,
    position: (usize, usize),
    tried: FixedBitSet,
    /// Opaque traversal cursor, for solvers whose cell-selection order is
    /// stateful (`fp::RasterOrder`/`fp::AntiDiagonalOrder`). MRV selection
    /// ignores this; it recomputes the next cell from the grid each call.
    selector_checkpoint: usize,
}

/// Diagnostics returned alongside a solved grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveStats {
    /// Number of times the engine rolled back to a shallower frame.
    pub backtrack_count: usize,
    /// Sum of the byte size of every snapshot ever held on the stack at
    /// once, sampled at its high-water mark -- a rough bound on the
    /// engine's peak memory use, not an exact accounting.
    pub peak_snapshot_bytes: usize,
}

/// Per-algorithm hooks the generic engine drives: how to pick the next cell
/// to decide, and how to propagate constraints after a decision.
pub trait Strategy {
    /// Select the next uncollapsed cell to decide, advancing (and returning)
    /// an opaque cursor the engine will restore on rollback.
    fn select(&mut self, grid: &Grid) -> Option<((usize, usize), usize)>;

    /// Restore the selector's internal cursor to a checkpoint returned by an
    /// earlier `select` call, so that a later `select` resumes scanning
    /// from exactly where that decision left off.
    fn restore_cursor(&mut self, checkpoint: usize);

    /// Propagate constraints after collapsing `pos`. `Err` carries the
    /// position whose domain was pruned empty.
    fn propagate(&self, grid: &mut Grid, pos: (usize, usize)) -> Result<(), (usize, usize)>;
}

/// Run the decision-frame protocol to a fully collapsed, consistent grid,
/// or `None` if the root frame is exhausted (unsolvable).
///
/// `strategy.select` is called once per successful decision to choose the
/// *next* cell; this function performs no cell selection of its own beyond
/// driving that call and the choose/apply/propagate/rollback loop.
pub fn run<S: Strategy>(
    grid: &mut Grid,
    num_tiles: usize,
    rng: &mut impl Rng,
    strategy: &mut S,
) -> Option<SolveStats> {
    let mut stats = SolveStats::default();
    let mut stack_bytes = 0usize;

    let Some((pos, checkpoint)) = strategy.select(grid) else {
        return Some(stats); // already fully collapsed, nothing to decide
    };
    let mut frames = vec![push_frame(grid, pos, checkpoint, num_tiles)];
    stack_bytes += frame_bytes(&frames[0]);
    stats.peak_snapshot_bytes = stack_bytes;

    loop {
        let top = frames.last_mut().expect("frame stack is never empty mid-loop");
        let residual: Vec<TileId> = grid
            .at(top.position.0, top.position.1)
            .domain()
            .filter(|t| !top.tried.contains(*t as usize))
            .collect();

        if residual.is_empty() {
            // This decision has no untried options left: discard it and
            // escalate to the parent, restoring the grid to the state it
            // had right before the parent's own decision.
            stats.backtrack_count += 1;
            let exhausted = frames.pop().expect("just matched Some(top) above");
            stack_bytes -= frame_bytes(&exhausted);

            let Some(parent) = frames.last() else {
                return None;
            };
            grid.restore(&parent.snapshot);
            strategy.restore_cursor(parent.selector_checkpoint);
            continue;
        }

        let tile = residual[rng.random_range(0..residual.len())];
        top.tried.insert(tile as usize);
        let pos = top.position;
        grid.at_mut(pos.0, pos.1).collapse(tile);

        match strategy.propagate(grid, pos) {
            Ok(()) => match strategy.select(grid) {
                Some((next_pos, next_checkpoint)) => {
                    let frame = push_frame(grid, next_pos, next_checkpoint, num_tiles);
                    stack_bytes += frame_bytes(&frame);
                    stats.peak_snapshot_bytes = stats.peak_snapshot_bytes.max(stack_bytes);
                    frames.push(frame);
                }
                None => return Some(stats),
            },
            Err(_contradiction) => {
                // Undo this decision's mutation and retry the same frame --
                // its `tried` set already recorded the rejected tile.
                let top = frames.last().expect("frame stack is never empty mid-loop");
                grid.restore(&top.snapshot);
            }
        }
    }
}

fn push_frame(grid: &Grid, position: (usize, usize), checkpoint: usize, num_tiles: usize) -> Frame {
    Frame {
        snapshot: grid.snapshot(),
        position,
        tried: FixedBitSet::with_capacity(num_tiles),
        selector_checkpoint: checkpoint,
    }
}

fn frame_bytes(frame: &Frame) -> usize {
    std::mem::size_of_val(&frame.snapshot) + frame.tried.len().div_ceil(8)
}
