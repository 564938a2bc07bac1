//! Command-line surface, plus the ambient flags a complete binary needs
//! (`-v`/`--verbose`, `--output`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which solver variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    /// Fast-Propagation, raster order, no backtracking.
    Fp,
    /// Fast-Propagation, raster order, with backtracking.
    FpBacktrack,
    /// Fast-Propagation, anti-diagonal order, no backtracking.
    FpDiagonal,
    /// Fast-Propagation, anti-diagonal order, with backtracking.
    FpDiagonalBacktrack,
    /// Wave-Function-Collapse, MRV selection, no backtracking.
    Wfc,
    /// Wave-Function-Collapse, MRV selection, with backtracking.
    WfcBacktrack,
    /// Wave-Function-Collapse, anti-diagonal selection, no backtracking.
    WfcDiagonal,
    /// Wave-Function-Collapse, anti-diagonal selection, with backtracking.
    WfcDiagonalBacktrack,
    /// Windowed sub-grid orchestrator, mode (A) (no backtracking).
    Nwfc,
    /// Windowed sub-grid orchestrator, mode (B) (with backtracking).
    NwfcBacktrack,
}

impl Algorithm {
    /// Whether this variant is one of the two NWFC modes.
    pub fn is_nwfc(self) -> bool {
        matches!(self, Algorithm::Nwfc | Algorithm::NwfcBacktrack)
    }

    /// Whether this variant runs under the decision-frame backtracking
    /// protocol.
    pub fn is_backtracking(self) -> bool {
        matches!(
            self,
            Algorithm::FpBacktrack
                | Algorithm::FpDiagonalBacktrack
                | Algorithm::WfcBacktrack
                | Algorithm::WfcDiagonalBacktrack
                | Algorithm::NwfcBacktrack
        )
    }
}

/// Solve a tile-placement grid by constraint satisfaction.
#[derive(Debug, Parser)]
#[command(name = "wfc_grid", version, about)]
pub struct Cli {
    /// Which solver variant to run.
    #[arg(long, value_enum)]
    pub algorithm: Algorithm,

    /// Directory of named tile assets.
    #[arg(long)]
    pub tileset_path: PathBuf,

    /// Grid side length N; the solved grid is N×N (or, for an NWFC
    /// variant, the *logical* N×N window grid).
    #[arg(long)]
    pub grid_size: usize,

    /// 32-bit RNG seed.
    #[arg(long)]
    pub seed: u32,

    /// Number of runs; run k uses effective seed `seed + k`.
    #[arg(long, default_value_t = 1)]
    pub num_runs: u32,

    /// Window side S; required (and must be >= 2) iff `algorithm` is an
    /// NWFC variant.
    #[arg(long)]
    pub subgrid_size: Option<usize>,

    /// Accepted for command-surface completeness; raster image composition
    /// is out of scope, so this only emits a warning.
    #[arg(long, default_value_t = false)]
    pub generate_image: bool,

    /// Write the solved-grid matrix to this path instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Raise logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
