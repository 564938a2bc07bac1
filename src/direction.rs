//! The four cardinal directions used to address a `Cell`'s neighbours.

use std::fmt;

/// One of the four edge-adjacency directions.
///
/// Numeric codes: `0 = north, 1 = east, 2 = south, 3 = west`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Negative-row neighbour.
    North,
    /// Positive-column neighbour.
    East,
    /// Positive-row neighbour.
    South,
    /// Negative-column neighbour.
    West,
}

/// All four directions in their canonical numeric order.
pub const ALL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    /// The numeric code for this direction (`0..=3`).
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// The direction whose code is `(index(self) + 2) mod 4`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row/column delta to step from a cell to its neighbour in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Apply `delta()` to `(row, col)`, returning `None` if the result would
    /// underflow (out of bounds on the negative side). Callers still need to
    /// check the positive bound against the grid's `rows`/`cols`.
    pub fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        Some((nr, nc))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for dir in ALL_DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn indices_match_spec_codes() {
        assert_eq!(Direction::North.index(), 0);
        assert_eq!(Direction::East.index(), 1);
        assert_eq!(Direction::South.index(), 2);
        assert_eq!(Direction::West.index(), 3);
    }

    #[test]
    fn step_rejects_negative_underflow() {
        assert_eq!(Direction::North.step(0, 0), None);
        assert_eq!(Direction::West.step(0, 0), None);
        assert_eq!(Direction::South.step(0, 0), Some((1, 0)));
    }
}
