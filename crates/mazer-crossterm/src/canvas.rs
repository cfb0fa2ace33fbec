//! A character canvas over a maze, and the glyphs drawn on it.

use std::fmt;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use mazer_core::{Maze, Point};
use mazer_paths::Path;

/// Characters used to mark search progress and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Glyphs {
    /// Discovered, waiting in the frontier.
    pub opened: char,
    /// Fully expanded.
    pub closed: char,
    /// On the final path.
    pub path: char,
    pub start: char,
    pub end: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            opened: 'o',
            closed: '.',
            path: '.',
            start: 'S',
            end: 'E',
        }
    }
}

impl Glyphs {
    /// Terminal colour for a marker glyph; walls and floor stay uncoloured.
    fn color(&self, ch: char) -> Option<Color> {
        if ch == self.start || ch == self.end {
            Some(Color::Green)
        } else if ch == self.opened {
            Some(Color::Yellow)
        } else if ch == self.closed || ch == self.path {
            Some(Color::Cyan)
        } else {
            None
        }
    }
}

/// A mutable character copy of a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Draw the maze's walls and floor.
    pub fn new(maze: &Maze) -> Self {
        let rows = maze
            .rows()
            .map(|r| r.iter().map(|t| t.glyph()).collect())
            .collect();
        Self { rows }
    }

    /// The character at `p`, or `None` outside the canvas.
    pub fn get(&self, p: Point) -> Option<char> {
        let x = usize::try_from(p.x).ok()?;
        let y = usize::try_from(p.y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// Set the character at `p`. Does nothing outside the canvas.
    pub fn set(&mut self, p: Point, ch: char) {
        let (Ok(x), Ok(y)) = (usize::try_from(p.x), usize::try_from(p.y)) else {
            return;
        };
        if let Some(c) = self.rows.get_mut(y).and_then(|r| r.get_mut(x)) {
            *c = ch;
        }
    }

    /// Number of text lines.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Write the canvas to `out`, one line per row. With `glyphs` set,
    /// marker characters are coloured.
    pub fn write_to<W: Write>(&self, out: &mut W, glyphs: Option<&Glyphs>) -> io::Result<()> {
        for row in &self.rows {
            match glyphs {
                None => {
                    let line: String = row.iter().collect();
                    writeln!(out, "{line}")?;
                }
                Some(g) => {
                    for &ch in row {
                        match g.color(ch) {
                            Some(c) => queue!(out, SetForegroundColor(c), Print(ch), ResetColor)?,
                            None => queue!(out, Print(ch))?,
                        }
                    }
                    writeln!(out)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for &ch in row {
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draw `path` over `maze`: path cells get the path glyph, then the start
/// and end glyphs are placed on top.
pub fn render_path(maze: &Maze, path: &Path, glyphs: &Glyphs) -> Canvas {
    let mut canvas = Canvas::new(maze);
    for p in path.iter() {
        canvas.set(p, glyphs.path);
    }
    canvas.set(maze.start(), glyphs.start);
    canvas.set(maze.goal(), glyphs.end);
    canvas
}
