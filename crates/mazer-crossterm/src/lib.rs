//! Crossterm presentation for mazer.
//!
//! [`FloodView`] is a [`mazer_paths::SearchObserver`] that redraws the maze
//! in the terminal every time the search opens a cell. [`render_path`]
//! draws a finished path over the maze.

mod canvas;
mod flood;

pub use canvas::{Canvas, Glyphs, render_path};
pub use flood::FloodView;
