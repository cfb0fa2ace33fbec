//! One run of the program: load, search, report.

use std::io::Write;

use mazer_core::Maze;
use mazer_crossterm::{FloodView, render_path};
use mazer_paths::{Algorithm, Report, solve};
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;

/// Find the configuration file for `args` and apply the flag overrides.
pub fn configure(args: &Args) -> Result<Config, AppError> {
    let mut config = Config::resolve(args.config.as_deref())?;
    config.apply(args);
    Ok(config)
}

/// Load the maze named by `args`, search it and print the outcome to `out`.
///
/// Returns whether a path was found. `config` must already carry the
/// command-line overrides.
pub fn run<W: Write>(args: &Args, config: &Config, out: &mut W) -> Result<bool, AppError> {
    let maze = mazer_core::load(&args.maze)?;
    log::info!(
        "loaded {}: {}x{}, {} -> {}",
        args.maze.display(),
        maze.width(),
        maze.height(),
        maze.start(),
        maze.goal()
    );
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("random seed {seed}");

    match args.algorithm {
        Some(algorithm) => {
            let report = search_one(&maze, algorithm, seed, config, out)?;
            if args.json {
                write_json(out, &report)?;
            } else {
                write_report(out, &maze, &report, config)?;
            }
            Ok(report.found)
        }
        None => {
            let reports = compare(&maze, seed);
            if args.json {
                write_json(out, &reports)?;
            } else {
                write_table(out, &reports)?;
            }
            Ok(reports.iter().any(|r| r.found))
        }
    }
}

fn search_one<W: Write>(
    maze: &Maze,
    algorithm: Algorithm,
    seed: u64,
    config: &Config,
    out: &mut W,
) -> Result<Report, AppError> {
    let rng = StdRng::seed_from_u64(seed);
    if !config.flood {
        return Ok(solve(maze, algorithm, rng, &mut ()));
    }
    let mut view = FloodView::new(&mut *out, maze, config.glyphs)
        .with_fps(config.fps)
        .with_color(config.color);
    let report = solve(maze, algorithm, rng, &mut view);
    view.finish()?;
    Ok(report)
}

/// Run every algorithm on `maze`, each with a fresh generator from `seed`.
pub fn compare(maze: &Maze, seed: u64) -> Vec<Report> {
    Algorithm::ALL
        .into_iter()
        .map(|a| solve(maze, a, StdRng::seed_from_u64(seed), &mut ()))
        .collect()
}

/// Print counts, the path and the maze with the path drawn in.
pub fn write_report<W: Write>(
    out: &mut W,
    maze: &Maze,
    report: &Report,
    config: &Config,
) -> Result<(), AppError> {
    let Some(path) = &report.path else {
        writeln!(out, "Path not found")?;
        return Ok(());
    };
    writeln!(out, "Expanded: {}", report.expanded)?;
    writeln!(out, "Path length: {}", path.len())?;
    if config.print_path {
        writeln!(out, "{path}")?;
        let glyphs = config.color.then_some(&config.glyphs);
        render_path(maze, path, &config.glyphs).write_to(out, glyphs)?;
    }
    Ok(())
}

/// Print one row per algorithm.
pub fn write_table<W: Write>(out: &mut W, reports: &[Report]) -> Result<(), AppError> {
    writeln!(out, "{:<10}{:>6}{:>10}{:>8}", "Algorithm", "Found", "Expanded", "Length")?;
    for r in reports {
        let length = match r.length {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        };
        writeln!(
            out,
            "{:<10}{:>6}{:>10}{:>8}",
            r.algorithm.label(),
            if r.found { "yes" } else { "no" },
            r.expanded,
            length
        )?;
    }
    Ok(())
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
