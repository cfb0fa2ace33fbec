//! The immutable maze grid.
//!
//! A [`Maze`] is a rectangle of [`Tile`]s plus two distinguished open cells,
//! the start and the goal. All invariants are checked once at construction;
//! afterwards every query is bounds checked and never panics.

use std::fmt;

use crate::geom::{Point, Range};

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Passable floor.
    Open,
    /// Impassable wall, remembering the character it was drawn with.
    Wall(char),
}

impl Tile {
    /// Map a maze-file character to a tile: whitespace is open, anything
    /// else is a wall.
    #[inline]
    pub fn from_char(ch: char) -> Self {
        if ch.is_whitespace() {
            Self::Open
        } else {
            Self::Wall(ch)
        }
    }

    /// Whether a search may step onto this tile.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// The character used to draw this tile.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => ' ',
            Self::Wall(ch) => ch,
        }
    }
}

/// Which of the two distinguished cells an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("end"),
        }
    }
}

/// A rectangular maze with a start and a goal cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    tiles: Vec<Tile>,
    bounds: Range,
    start: Point,
    goal: Point,
}

impl Maze {
    /// Build a maze from rows of tiles.
    ///
    /// Every row must have the same non-zero width, and `start`/`goal` must
    /// be inside the grid on open tiles.
    pub fn new(rows: Vec<Vec<Tile>>, start: Point, goal: Point) -> Result<Self, MazeError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty);
        }
        let mut tiles = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::Ragged {
                    row: y,
                    width: row.len(),
                    expected: width,
                });
            }
            tiles.extend_from_slice(row);
        }
        let maze = Self {
            tiles,
            bounds: Range::new(0, 0, width as i32, rows.len() as i32),
            start,
            goal,
        };
        maze.check_endpoint(Endpoint::Start, start)?;
        maze.check_endpoint(Endpoint::Goal, goal)?;
        Ok(maze)
    }

    /// Build a maze from text rows, one character per cell.
    ///
    /// See [`Tile::from_char`] for the character mapping.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], start: Point, goal: Point) -> Result<Self, MazeError> {
        let rows = rows
            .iter()
            .map(|r| r.as_ref().chars().map(Tile::from_char).collect())
            .collect();
        Self::new(rows, start, goal)
    }

    fn check_endpoint(&self, which: Endpoint, at: Point) -> Result<(), MazeError> {
        match self.at(at) {
            None => Err(MazeError::OutOfBounds {
                which,
                at,
                bounds: self.bounds,
            }),
            Some(Tile::Wall(_)) => Err(MazeError::Blocked { which, at }),
            Some(Tile::Open) => Ok(()),
        }
    }

    /// The grid rectangle, always anchored at (0, 0).
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The tile at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Tile> {
        if !self.bounds.contains(p) {
            return None;
        }
        let idx = (p.y * self.bounds.width() + p.x) as usize;
        self.tiles.get(idx).copied()
    }

    /// Whether `p` is inside the grid and open. Points outside the grid are
    /// never passable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(Tile::is_open)
    }

    /// Iterate over the rows as tile slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.bounds.width() as usize)
    }
}

/// Errors raised when a maze violates its structural invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row whose width differs from the first row.
    Ragged {
        row: usize,
        width: usize,
        expected: usize,
    },
    /// The start or goal lies outside the grid.
    OutOfBounds {
        which: Endpoint,
        at: Point,
        bounds: Range,
    },
    /// The start or goal lies on a wall.
    Blocked { which: Endpoint, at: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze has no cells"),
            Self::Ragged {
                row,
                width,
                expected,
            } => write!(f, "maze row {row} is {width} cells wide, expected {expected}"),
            Self::OutOfBounds { which, at, bounds } => {
                write!(f, "{which} point {at} lies outside the maze {bounds}")
            }
            Self::Blocked { which, at } => write!(f, "{which} point {at} lies on a wall"),
        }
    }
}

impl std::error::Error for MazeError {}
