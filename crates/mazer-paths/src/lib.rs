//! Maze search with pluggable frontier policies.
//!
//! One traversal engine ([`search`]) drives every strategy. What differs
//! between breadth-first, depth-first, random, greedy and A* exploration is
//! only the order in which discovered cells leave the open set, and that
//! order is owned by a [`Frontier`]:
//!
//! | Algorithm | Frontier | Shortest path |
//! |---|---|---|
//! | [`Algorithm::Bfs`] | [`BfsFrontier`] | yes |
//! | [`Algorithm::Dfs`] | [`DfsFrontier`] | no |
//! | [`Algorithm::Random`] | [`RandomFrontier`] | no |
//! | [`Algorithm::Greedy`] | [`GreedyFrontier`] | no |
//! | [`Algorithm::AStar`] | [`AStarFrontier`] | yes |
//!
//! [`solve`] wires a [`mazer_core::Maze`] to the frontier chosen by an
//! [`Algorithm`] and returns a [`Report`].
//!
//! # Trait seams
//!
//! | Trait | Role |
//! |---|---|
//! | [`Pather`] | neighbor enumeration over the implicit graph |
//! | [`Frontier`] | open-set ordering |
//! | [`SearchObserver`] | opened / closed notifications for visualization |

mod algorithm;
mod distance;
mod frontier;
mod path;
mod search;
mod traits;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use distance::manhattan;
pub use frontier::{
    AStarFrontier, AnyFrontier, BfsFrontier, DfsFrontier, Frontier, GreedyFrontier,
    RandomFrontier,
};
pub use path::{Path, Report, solve};
pub use search::{SearchObserver, SearchTree, search};
pub use traits::Pather;
