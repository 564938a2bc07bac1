//! Command-line entry point.
//!
//! Parse a `clap` config, load a tileset, run a solve, report the result.
//! `anyhow` carries `main`'s top-level error path; the library itself
//! reports typed errors (`wfc_grid::error`).

use std::fs;
use std::io::Write as _;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use wfc_grid::cli::Cli;
use wfc_grid::rules::Rules;
use wfc_grid::solver::{self, Config, Outcome};
use wfc_grid::tileset;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::from_cli(&cli).context("invalid configuration")?;
    let tiles = tileset::load(&cli.tileset_path).context("failed to load tileset")?;
    let rules = Rules::compile(&tiles);

    let progress = ProgressBar::new(u64::from(config.num_runs));
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} run {pos}/{len}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut report = String::new();
    for run_index in 0..config.num_runs {
        match solver::run_once(&config, &rules, run_index) {
            Outcome::Ran { grid, backtrack_count, peak_snapshot_bytes } => {
                report.push_str(&format!("run {run_index}\n"));
                report.push_str(&format_matrix(&grid.to_matrix()));
                if let Some(count) = backtrack_count {
                    report.push_str(&format!("backtrack_count: {count}\n"));
                }
                if let Some(bytes) = peak_snapshot_bytes {
                    report.push_str(&format!("peak_snapshot_bytes: {bytes}\n"));
                }
            }
            Outcome::Unsolvable => {
                report.push_str(&format!("run {run_index}: unsolvable\n"));
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    match &config.output {
        Some(path) => fs::write(path, &report).with_context(|| format!("failed to write {}", path.display()))?,
        None => std::io::stdout().write_all(report.as_bytes())?,
    }

    Ok(())
}

fn format_matrix(matrix: &ndarray::Array2<i64>) -> String {
    let mut out = String::new();
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).init();
}
