use mazer_core::{Maze, Point};

/// Minimal search interface: provides neighbor enumeration over an
/// implicit graph.
pub trait Pather {
    /// Append the passable neighbors of `p` into `buf`, in expansion order.
    /// The caller clears `buf` before calling.
    ///
    /// Implementations must only yield points that are safe to step on;
    /// out-of-range points are never neighbors.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// A maze is a 4-connected graph over its open tiles.
impl Pather for Maze {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}
