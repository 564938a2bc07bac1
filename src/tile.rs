//! A single tile in the alphabet: an id plus its four edge labels.

use crate::direction::Direction;

/// Identifier of a `Tile`, dense and drawn from `0..num_tiles`.
pub type TileId = u32;

/// An immutable tile: an identifier and the label on each of its four edges.
///
/// Two tiles are compatible across a shared edge when the label each one
/// shows to the other agrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    north: char,
    south: char,
    east: char,
    west: char,
}

impl Tile {
    /// Construct a `Tile` from its id and its four edge labels.
    pub fn new(id: TileId, north: char, south: char, east: char, west: char) -> Self {
        Self {
            id,
            north,
            south,
            east,
            west,
        }
    }

    /// The tile's identifier.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// The label facing the given direction.
    pub fn label(&self, dir: Direction) -> char {
        match dir {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
        }
    }

    /// Whether `self` and `other` agree across the shared edge in direction
    /// `dir`, where `dir` points from `self` towards `other`.
    ///
    /// `self`'s label facing `dir` must equal `other`'s label facing
    /// `dir.opposite()`.
    pub fn is_compatible(&self, other: &Tile, dir: Direction) -> bool {
        self.label(dir) == other.label(dir.opposite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatible_edges_agree_on_label() {
        let a = Tile::new(0, 'A', 'A', 'B', 'B');
        let c = Tile::new(2, 'X', 'X', 'B', 'X');
        // a's east label ('B') must equal c's west label ('X') -- no match.
        assert!(!a.is_compatible(&c, Direction::East));

        let d = Tile::new(3, 'X', 'X', 'X', 'B');
        assert!(a.is_compatible(&d, Direction::East));
    }

    #[test]
    fn compatibility_is_symmetric_across_opposite_directions() {
        let a = Tile::new(0, 'N', 'S', 'E', 'W');
        let b = Tile::new(1, 'n', 'S', 'e', 'w');
        assert_eq!(
            a.is_compatible(&b, Direction::South),
            b.is_compatible(&a, Direction::North)
        );
    }
}
