//! # `wfc_grid`
//!
//! A constraint-satisfaction solver for 2D edge-matched tile grids, using
//! wave-function collapse: arc-consistency propagation (AC-3) over an
//! MRV-ordered or raster cell-collapse sequence, with an optional
//! decision-frame backtracking engine and a windowed sub-grid orchestrator
//! (NWFC) for grids too large to hold fully in memory at once.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

/// Solver implementations: propagation, backtracking, FP, WFC, NWFC.
pub mod algorithm;
/// A single grid cell's live tile domain.
pub mod cell;
/// Command-line argument parsing.
pub mod cli;
/// The four cardinal directions and their arithmetic.
pub mod direction;
/// Typed error kinds.
pub mod error;
/// The 2D cell matrix a solver operates on.
pub mod grid;
/// Deterministic seeded RNG.
pub mod rng;
/// Compiled tile-adjacency compatibility tables.
pub mod rules;
/// Configuration validation and algorithm dispatch.
pub mod solver;
/// A tile and its four edge labels.
pub mod tile;
/// Tileset directory loader.
pub mod tileset;

pub use cell::Cell;
pub use direction::Direction;
pub use error::{ConfigError, SolveError, TilesetError};
pub use grid::Grid;
pub use rules::Rules;
pub use tile::Tile;
