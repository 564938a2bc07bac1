//! Compiled tile-adjacency compatibility masks.
//!
//! Every solver checks "is tile `u` compatible with some tile in the
//! neighbour's domain, across direction `d`?" in its innermost loop.
//! Precomputing one bitset per `(tile, direction)` turns that check into a
//! single `FixedBitSet` intersection test instead of a nested scan over
//! both domains.

use fixedbitset::FixedBitSet;

use crate::direction::{ALL_DIRECTIONS, Direction};
use crate::tile::{Tile, TileId};

/// Compiled adjacency rules for an alphabet of tiles.
pub struct Rules {
    num_tiles: usize,
    /// `masks[tile][dir]` is the set of tile ids that may sit in direction
    /// `dir` from `tile` without a contradiction.
    masks: Vec<[FixedBitSet; 4]>,
}

impl Rules {
    /// Compile compatibility masks for every tile in `tiles` against every
    /// other tile (including itself), across all four directions.
    ///
    /// `tiles[i].id()` is expected to equal `i`; this is how the tileset
    /// loader enumerates its alphabet.
    pub fn compile(tiles: &[Tile]) -> Self {
        let num_tiles = tiles.len();
        let masks = tiles
            .iter()
            .map(|tile| {
                ALL_DIRECTIONS.map(|dir| {
                    let mut mask = FixedBitSet::with_capacity(num_tiles);
                    for other in tiles {
                        if tile.is_compatible(other, dir) {
                            mask.insert(other.id() as usize);
                        }
                    }
                    mask
                })
            })
            .collect();

        Self { num_tiles, masks }
    }

    /// Number of tiles in the compiled alphabet.
    pub fn num_tiles(&self) -> usize {
        self.num_tiles
    }

    /// The set of tile ids compatible with `tile` in direction `dir`.
    pub fn compatible(&self, tile: TileId, dir: Direction) -> &FixedBitSet {
        &self.masks[tile as usize][dir.index()]
    }

    /// Whether `tile` has at least one supporter in `domain` across `dir`,
    /// i.e. whether some tile in `domain` may sit in direction `dir` from
    /// `tile`.
    pub fn has_support(&self, tile: TileId, dir: Direction, domain: &FixedBitSet) -> bool {
        self.compatible(tile, dir).intersection(domain).next().is_some()
    }
}
