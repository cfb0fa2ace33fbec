//! Maze text format.
//!
//! ```text
//! XXXXXXX
//! X     X
//! X XXX X
//! X     X
//! XXXXXXX
//! start 1, 1
//! end 5, 3
//! ```
//!
//! Leading lines beginning with `X` are maze rows, with trailing whitespace
//! removed. Inside a row whitespace is open floor and every other character
//! is a wall. The first line not beginning with `X` gives the start point,
//! the next non-blank line the end point, both as `column, row`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::geom::Point;
use crate::maze::{Maze, MazeError};

/// First character of every maze row.
const ROW_MARKER: char = 'X';

/// Read and parse a maze file.
pub fn load(path: impl AsRef<Path>) -> Result<Maze, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let maze = parse(&text)?;
    log::debug!(
        "loaded {}x{} maze from {}",
        maze.width(),
        maze.height(),
        path.display()
    );
    Ok(maze)
}

/// Parse maze text in the format described at the module level.
pub fn parse(text: &str) -> Result<Maze, LoadError> {
    let mut lines = text.lines().enumerate().peekable();

    let mut rows = Vec::new();
    while let Some((_, line)) = lines.next_if(|(_, l)| l.starts_with(ROW_MARKER)) {
        rows.push(line.trim_end());
    }
    if rows.is_empty() {
        return Err(LoadError::NoRows);
    }

    let mut next_line = |keyword: &'static str| -> Result<Point, LoadError> {
        let (idx, line) = lines
            .by_ref()
            .find(|(_, l)| !l.trim().is_empty())
            .ok_or(LoadError::MissingLine { keyword })?;
        parse_point(line, keyword).ok_or_else(|| LoadError::BadCoordinate {
            line: idx + 1,
            text: line.to_string(),
        })
    };
    let start = next_line("start")?;
    let goal = next_line("end")?;

    Ok(Maze::from_rows(rows.as_slice(), start, goal)?)
}

/// Parse `<keyword> <x>, <y>`.
fn parse_point(line: &str, keyword: &str) -> Option<Point> {
    let rest = line.trim().strip_prefix(keyword)?;
    let (x, y) = rest.split_once(',')?;
    Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
}

impl FromStr for Maze {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Errors that can occur while reading a maze description.
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The text contains no maze rows.
    NoRows,
    /// The start or end line is missing.
    MissingLine { keyword: &'static str },
    /// A start or end line that does not hold two integers.
    BadCoordinate { line: usize, text: String },
    /// The rows and endpoints do not form a valid maze.
    Maze(MazeError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "can not open file \"{}\": {source}", path.display())
            }
            Self::NoRows => f.write_str("maze description has no rows"),
            Self::MissingLine { keyword } => write!(f, "missing \"{keyword} x, y\" line"),
            Self::BadCoordinate { line, text } => {
                write!(f, "line {line}: expected \"<keyword> x, y\", found \"{text}\"")
            }
            Self::Maze(e) => write!(f, "invalid maze: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for LoadError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{Endpoint, Tile};

    const SMALL: &str = "\
XXXXXXX
X     X
X XXX X
X     X
XXXXXXX
start 1, 1
end 5, 3
";

    #[test]
    fn parse_small() {
        let m: Maze = SMALL.parse().unwrap();
        assert_eq!(m.width(), 7);
        assert_eq!(m.height(), 5);
        assert_eq!(m.start(), Point::new(1, 1));
        assert_eq!(m.goal(), Point::new(5, 3));
        assert_eq!(m.at(Point::new(2, 2)), Some(Tile::Wall('X')));
        assert!(m.is_passable(Point::new(1, 2)));
    }

    #[test]
    fn trailing_whitespace_and_blank_lines() {
        let text = "XXX \r\nX X\t\nXXX\n\nstart   1 ,1\n\n  end 1,1  \n";
        let m = parse(text).unwrap();
        assert_eq!(m.width(), 3);
        assert_eq!(m.start(), Point::new(1, 1));
        assert_eq!(m.goal(), Point::new(1, 1));
    }

    #[test]
    fn walls_keep_their_glyph() {
        let m = parse("X#X\nX X\nXXX\nstart 1, 1\nend 1, 1").unwrap();
        assert_eq!(m.at(Point::new(1, 0)), Some(Tile::Wall('#')));
    }

    #[test]
    fn no_rows() {
        assert!(matches!(parse("start 1, 1\nend 1, 1"), Err(LoadError::NoRows)));
        assert!(matches!(parse(""), Err(LoadError::NoRows)));
    }

    #[test]
    fn missing_end_line() {
        let err = parse("XXX\nX X\nXXX\nstart 1, 1\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingLine { keyword: "end" }));
        assert_eq!(err.to_string(), "missing \"end x, y\" line");
    }

    #[test]
    fn malformed_coordinates() {
        let err = parse("XXX\nX X\nXXX\nstart one, 1\nend 1, 1").unwrap_err();
        match err {
            LoadError::BadCoordinate { line, text } => {
                assert_eq!(line, 4);
                assert_eq!(text, "start one, 1");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(matches!(
            parse("XXX\nX X\nXXX\nend 1, 1\nstart 1, 1"),
            Err(LoadError::BadCoordinate { line: 4, .. })
        ));
    }

    #[test]
    fn endpoint_on_wall() {
        let err = parse("XXX\nX X\nXXX\nstart 0, 0\nend 1, 1").unwrap_err();
        assert!(matches!(
            err,
            LoadError::Maze(MazeError::Blocked {
                which: Endpoint::Start,
                ..
            })
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn missing_file() {
        let err = load("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("can not open file"));
    }
}
