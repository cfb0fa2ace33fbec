//! Path reconstruction and search reports.

use std::fmt;

use mazer_core::{Maze, Point};
use rand::Rng;

use crate::algorithm::Algorithm;
use crate::frontier::AnyFrontier;
use crate::search::{SearchObserver, SearchTree, search};

/// A start-to-goal sequence of 4-adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path(Vec<Point>);

impl Path {
    /// The cells from start to goal, both included.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.0
    }

    /// Number of steps, one less than the number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Whether the path has no steps (start == goal).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.0.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.iter().copied()
    }
}

/// `(x, y) -> (x, y) -> ...`
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

impl From<Path> for Vec<Point> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl SearchTree {
    /// Walk predecessors back from `goal` to the start.
    ///
    /// Returns `None` when the goal was never discovered ("path not found").
    pub fn reconstruct(&self, goal: Point) -> Option<Path> {
        if !self.contains(goal) {
            return None;
        }
        let mut cells = vec![goal];
        let mut cur = goal;
        while let Some(prev) = self.parent(cur) {
            cells.push(prev);
            cur = prev;
        }
        debug_assert_eq!(cur, self.start, "predecessor chain must end at the start");
        cells.reverse();
        Some(Path(cells))
    }
}

/// Outcome of one search run, ready for presentation.
///
/// `found` and `length` are derived from `path` when the report is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub algorithm: Algorithm,
    pub found: bool,
    /// Number of discovered cells, the start included.
    pub expanded: usize,
    /// Path length in steps, if a path was found.
    pub length: Option<usize>,
    /// `None` when the goal is unreachable.
    pub path: Option<Path>,
}

impl Report {
    /// Build a report from a finished search.
    pub fn new(algorithm: Algorithm, tree: &SearchTree, goal: Point) -> Self {
        let path = tree.reconstruct(goal);
        Self {
            algorithm,
            found: path.is_some(),
            expanded: tree.expanded(),
            length: path.as_ref().map(Path::len),
            path,
        }
    }
}

/// Search `maze` from its start to its goal with `algorithm`.
///
/// `rng` only drives [`Algorithm::Random`]. Each call owns fresh search
/// state; the maze is only borrowed.
pub fn solve<R, O>(maze: &Maze, algorithm: Algorithm, rng: R, observer: &mut O) -> Report
where
    R: Rng,
    O: SearchObserver + ?Sized,
{
    let mut frontier = AnyFrontier::new(algorithm, maze.goal(), rng);
    let tree = search(maze, maze.start(), maze.goal(), &mut frontier, observer);
    let report = Report::new(algorithm, &tree, maze.goal());
    log::info!(
        "{algorithm}: expanded {}, {}",
        report.expanded,
        match report.length {
            Some(n) => format!("path length {n}"),
            None => "no path".to_string(),
        }
    );
    report
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn report_round_trip() {
        let m = Maze::from_rows(&["  "], Point::new(0, 0), Point::new(1, 0)).unwrap();
        let tree = search(&m, m.start(), m.goal(), &mut crate::BfsFrontier::new(), &mut ());
        let report = Report::new(Algorithm::Bfs, &tree, m.goal());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"algorithm\":\"BFS\""));
        assert!(json.contains("\"found\":true"));
        assert!(json.contains("\"length\":1"));
        let back: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
