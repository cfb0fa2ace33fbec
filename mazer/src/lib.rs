//! mazer: watch BFS, DFS, random, greedy and A* search a text maze.
//!
//! The library half of the `mazer` binary: argument parsing ([`Args`]),
//! configuration ([`Config`]) and the run itself ([`run`]).

pub mod app;
pub mod cli;
pub mod config;
mod error;

pub use app::run;
pub use cli::Args;
pub use config::{Config, ConfigError};
pub use error::AppError;
