//! Top-level configuration validation and algorithm dispatch.

use log::{info, warn};

use crate::algorithm::{fp, nwfc, wfc};
use crate::cell::Cell;
use crate::cli::{Algorithm, Cli};
use crate::error::ConfigError;
use crate::grid::Grid;
use crate::rng;
use crate::rules::Rules;

/// Validated run configuration, derived from `Cli`. Configuration errors are
/// caught here, before they ever reach a solver.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which solver variant to run.
    pub algorithm: Algorithm,
    /// Grid side length (or, for NWFC, the logical window-grid side length).
    pub grid_size: usize,
    /// Base RNG seed; run `k` uses effective seed `seed + k`.
    pub seed: u32,
    /// Number of runs to perform.
    pub num_runs: u32,
    /// Window side S, present iff `algorithm` is an NWFC variant.
    pub subgrid_size: Option<usize>,
    /// Output path, or `None` to write to stdout.
    pub output: Option<std::path::PathBuf>,
}

impl Config {
    /// Validate `cli` into a `Config`, or report why it is invalid.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        if cli.grid_size == 0 {
            return Err(ConfigError::InvalidGridSize(cli.grid_size));
        }
        if cli.num_runs == 0 {
            return Err(ConfigError::InvalidNumRuns(cli.num_runs as usize));
        }
        if cli.algorithm.is_nwfc() {
            let size = cli
                .subgrid_size
                .ok_or_else(|| ConfigError::MissingSubgridSize(format!("{:?}", cli.algorithm)))?;
            if size < 2 {
                return Err(ConfigError::SubgridTooSmall(size));
            }
        }
        if cli.generate_image {
            warn!("--generate-image was set, but raster image composition is out of scope; ignoring it");
        }

        Ok(Self {
            algorithm: cli.algorithm,
            grid_size: cli.grid_size,
            seed: cli.seed,
            num_runs: cli.num_runs,
            subgrid_size: cli.subgrid_size,
            output: cli.output.clone(),
        })
    }
}

/// Result of a single run.
pub enum Outcome {
    /// A fully- or partially-collapsed grid, with backtracking diagnostics
    /// when the algorithm used the decision-frame protocol.
    Ran {
        grid: Grid,
        backtrack_count: Option<usize>,
        peak_snapshot_bytes: Option<usize>,
    },
    /// A backtracking algorithm exhausted its root decision frame.
    Unsolvable,
}

/// Run one solve with effective seed `config.seed + run_index`.
pub fn run_once(config: &Config, rules: &Rules, run_index: u32) -> Outcome {
    let seed = rng::seed_for_run(config.seed, run_index);
    let mut rng = rng::seeded(seed);
    info!(
        "running {:?} on a {}x{} grid with seed {seed}",
        config.algorithm, config.grid_size, config.grid_size
    );

    match config.algorithm {
        Algorithm::Fp | Algorithm::FpDiagonal => {
            let traversal = traversal_for(config.algorithm);
            let mut grid = Grid::initialize(config.grid_size, config.grid_size, &Cell::full(rules.num_tiles()));
            fp::solve(&mut grid, rules, &mut rng, traversal);
            Outcome::Ran { grid, backtrack_count: None, peak_snapshot_bytes: None }
        }
        Algorithm::FpBacktrack | Algorithm::FpDiagonalBacktrack => {
            let traversal = traversal_for(config.algorithm);
            let mut grid = Grid::initialize(config.grid_size, config.grid_size, &Cell::full(rules.num_tiles()));
            match fp::solve_with_backtracking(&mut grid, rules, &mut rng, traversal) {
                Some(stats) => Outcome::Ran {
                    grid,
                    backtrack_count: Some(stats.backtrack_count),
                    peak_snapshot_bytes: Some(stats.peak_snapshot_bytes),
                },
                None => Outcome::Unsolvable,
            }
        }
        Algorithm::Wfc | Algorithm::WfcDiagonal => {
            let selection = selection_for(config.algorithm);
            let mut grid = Grid::initialize(config.grid_size, config.grid_size, &Cell::full(rules.num_tiles()));
            wfc::solve(&mut grid, rules, &mut rng, selection);
            Outcome::Ran { grid, backtrack_count: None, peak_snapshot_bytes: None }
        }
        Algorithm::WfcBacktrack | Algorithm::WfcDiagonalBacktrack => {
            let selection = selection_for(config.algorithm);
            let mut grid = Grid::initialize(config.grid_size, config.grid_size, &Cell::full(rules.num_tiles()));
            match wfc::solve_with_backtracking(&mut grid, rules, &mut rng, selection) {
                Some(stats) => Outcome::Ran {
                    grid,
                    backtrack_count: Some(stats.backtrack_count),
                    peak_snapshot_bytes: Some(stats.peak_snapshot_bytes),
                },
                None => Outcome::Unsolvable,
            }
        }
        Algorithm::Nwfc | Algorithm::NwfcBacktrack => {
            let subgrid_size = config.subgrid_size.expect("validated by Config::from_cli");
            let backtracking = config.algorithm.is_backtracking();
            let (grid, stats) = nwfc::solve(config.grid_size, config.grid_size, subgrid_size, rules, &mut rng, backtracking);
            Outcome::Ran {
                grid,
                backtrack_count: backtracking.then_some(stats.backtrack_count),
                peak_snapshot_bytes: backtracking.then_some(stats.peak_snapshot_bytes),
            }
        }
    }
}

fn traversal_for(algorithm: Algorithm) -> fp::Traversal {
    match algorithm {
        Algorithm::FpDiagonal | Algorithm::FpDiagonalBacktrack => fp::Traversal::AntiDiagonal,
        _ => fp::Traversal::Raster,
    }
}

fn selection_for(algorithm: Algorithm) -> wfc::Selection {
    match algorithm {
        Algorithm::WfcDiagonal | Algorithm::WfcDiagonalBacktrack => wfc::Selection::AntiDiagonal,
        _ => wfc::Selection::Mrv,
    }
}
