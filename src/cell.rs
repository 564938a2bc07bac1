//! A single grid position's live domain of candidate tiles.

use fixedbitset::FixedBitSet;

use crate::tile::TileId;

/// A position's live domain plus its collapsed state.
///
/// Invariant: if `collapsed()` is `Some(id)` then `domain` contains exactly
/// `id`; otherwise the cell is solvable iff its domain is non-empty, and an
/// uncollapsed cell with an empty domain is a *contradiction*.
#[derive(Debug, Clone)]
pub struct Cell {
    domain: FixedBitSet,
    collapsed: Option<TileId>,
}

impl Cell {
    /// A cell whose domain is the full alphabet `0..num_tiles`, uncollapsed.
    pub fn full(num_tiles: usize) -> Self {
        let mut domain = FixedBitSet::with_capacity(num_tiles);
        domain.insert_range(..);
        Self {
            domain,
            collapsed: None,
        }
    }

    /// A cell with an empty domain, uncollapsed. Used as an NWFC window's
    /// phantom lookahead row/column before anything has been copied in.
    pub fn empty(num_tiles: usize) -> Self {
        Self {
            domain: FixedBitSet::with_capacity(num_tiles),
            collapsed: None,
        }
    }

    /// A cell already collapsed to `tile`.
    pub fn fixed(tile: TileId, num_tiles: usize) -> Self {
        let mut domain = FixedBitSet::with_capacity(num_tiles);
        domain.insert(tile as usize);
        Self {
            domain,
            collapsed: Some(tile),
        }
    }

    /// The tile ids still considered possible, ascending.
    pub fn domain(&self) -> impl Iterator<Item = TileId> + '_ {
        self.domain.ones().map(|b| b as TileId)
    }

    /// Number of tiles still possible at this cell.
    pub fn domain_size(&self) -> usize {
        self.domain.count_ones(..)
    }

    /// Whether `tile` is still in the domain.
    pub fn contains(&self, tile: TileId) -> bool {
        self.domain.contains(tile as usize)
    }

    /// The raw domain bitset, for the propagation queue's intersection
    /// tests (`Rules::has_support`).
    pub(crate) fn domain_bits(&self) -> &FixedBitSet {
        &self.domain
    }

    /// The collapsed tile id, if any.
    pub fn collapsed(&self) -> Option<TileId> {
        self.collapsed
    }

    /// Whether this cell has been collapsed to a single tile.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.is_some()
    }

    /// An uncollapsed cell with an empty domain: unsolvable as-is.
    pub fn is_contradiction(&self) -> bool {
        self.collapsed.is_none() && self.domain.count_ones(..) == 0
    }

    /// Remove `tile` from the domain. No-op if the cell is already
    /// collapsed (a collapsed cell is frozen).
    /// Returns whether the domain actually changed.
    pub fn remove(&mut self, tile: TileId) -> bool {
        if self.collapsed.is_some() || !self.domain.contains(tile as usize) {
            return false;
        }
        self.domain.remove(tile as usize);
        true
    }

    /// Collapse this cell to `tile`, replacing the domain with the
    /// singleton `{tile}`.
    ///
    /// Panics if `tile` was not already in the domain -- collapsing to a
    /// tile outside the live domain is a programmer error.
    pub fn collapse(&mut self, tile: TileId) {
        debug_assert!(
            self.domain.contains(tile as usize),
            "collapsing cell to tile {tile} not present in its domain"
        );
        let num_tiles = self.domain.len();
        self.domain = FixedBitSet::with_capacity(num_tiles);
        self.domain.insert(tile as usize);
        self.collapsed = Some(tile);
    }
}
