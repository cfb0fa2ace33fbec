//! **mazer-core**: grid maze model.
//!
//! This crate provides the foundational types used across the *mazer*
//! workspace: geometry primitives, the immutable [`Maze`] grid with its start
//! and goal cells, and the loader for the plain-text maze format.

pub mod geom;
pub mod load;
pub mod maze;

pub use geom::{Point, Range};
pub use load::{LoadError, load, parse};
pub use maze::{Endpoint, Maze, MazeError, Tile};
