//! Solver implementations sharing propagation and backtracking machinery.

/// The generic decision-frame backtracking engine.
pub mod backtracking;
/// Arc-consistency propagation shared by every solver.
pub mod common;
/// Fast-propagation solvers: raster/anti-diagonal, forward-only pruning.
pub mod fp;
/// Windowed sub-grid orchestrator.
pub mod nwfc;
/// MRV- or anti-diagonal-ordered wave-function-collapse solver.
pub mod wfc;

pub use backtracking::SolveStats;
