//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use mazer_paths::Algorithm;

/// Watch a search algorithm flood a text maze.
#[derive(Parser, Debug, Clone)]
#[command(name = "mazer", author, version, about, long_about = None)]
pub struct Args {
    /// Maze file: rows of `X` walls, then `start x, y` and `end x, y` lines
    pub maze: PathBuf,

    /// bfs, dfs, random, greedy or astar (`A*` also works)
    #[arg(required_unless_present = "compare")]
    pub algorithm: Option<Algorithm>,

    /// Configuration file (default: ./mazer.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for the random frontier
    #[arg(long)]
    pub seed: Option<u64>,

    /// Flooding frames per second; 0 draws without pausing
    #[arg(long)]
    pub fps: Option<u32>,

    /// Skip the live flooding view
    #[arg(long)]
    pub no_flood: bool,

    /// Print only the counts, not the path and maze
    #[arg(long)]
    pub no_path: bool,

    /// Colour the flooding view and the final maze
    #[arg(long)]
    pub color: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Run every algorithm and print a comparison table
    #[arg(long, conflicts_with = "algorithm")]
    pub compare: bool,
}
