//! Typed error kinds.
//!
//! A solver reports a contradiction in a non-backtracking run, a terminal
//! "unsolvable" under backtracking, and a configuration error that never
//! reaches a solver as three distinct kinds, so callers can match on why a
//! solve failed.

use thiserror::Error;

/// Failure reported by a solver.
#[derive(Debug, Error)]
pub enum SolveError {
    /// A backtracking solver exhausted its root decision frame: no
    /// consistent assignment exists for this tileset and grid size.
    #[error("no consistent assignment exists: backtracking exhausted the root decision frame")]
    Unsolvable,

    /// Internal bound check: a tileset exceeds the id range a solver can
    /// address.
    #[error("tileset has {0} tiles, which exceeds the supported alphabet size")]
    AlphabetTooLarge(usize),
}

/// Failure reported by the tileset loader.
#[derive(Debug, Error)]
pub enum TilesetError {
    /// The tileset directory does not exist or cannot be listed.
    #[error("tileset directory {0:?} could not be read: {1}")]
    MissingDirectory(std::path::PathBuf, #[source] std::io::Error),

    /// The tileset directory exists but contains no usable tile files.
    #[error("tileset directory {0:?} contains no tile files")]
    Empty(std::path::PathBuf),

    /// A filename stem is too short to encode all four edge labels.
    #[error("tile file {0:?} has a name too short to encode four edge labels")]
    MalformedName(std::path::PathBuf),

    /// A filename stem's edge-label positions are not single ASCII
    /// characters.
    #[error("tile file {0:?} has a non-single-character edge label")]
    NonCharacterLabel(std::path::PathBuf),
}

/// Failure reported by argument/configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `subgrid_size` was omitted for an NWFC algorithm variant.
    #[error("algorithm {0} requires --subgrid-size")]
    MissingSubgridSize(String),

    /// `subgrid_size` was given but is below the minimum of 2.
    #[error("subgrid size must be >= 2, got {0}")]
    SubgridTooSmall(usize),

    /// `grid_size` was zero or otherwise out of range.
    #[error("grid size must be a positive integer, got {0}")]
    InvalidGridSize(usize),

    /// `num_runs` was zero.
    #[error("num_runs must be a positive integer, got {0}")]
    InvalidNumRuns(usize),
}
