//! Live flooding view: redraws the maze as the search discovers cells.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};
use mazer_core::{Maze, Point};
use mazer_paths::SearchObserver;

use crate::canvas::{Canvas, Glyphs};

/// A [`SearchObserver`] that draws every search step to a terminal.
pub struct FloodView<W: Write> {
    out: W,
    canvas: Canvas,
    glyphs: Glyphs,
    start: Option<Point>,
    delay: Duration,
    color: bool,
    frames: usize,
    error: Option<io::Error>,
}

impl<W: Write> FloodView<W> {
    /// Create a view over `maze` writing to `out`, with no delay between
    /// frames and no colour.
    pub fn new(out: W, maze: &Maze, glyphs: Glyphs) -> Self {
        Self {
            out,
            canvas: Canvas::new(maze),
            glyphs,
            start: None,
            delay: Duration::ZERO,
            color: false,
            frames: 0,
            error: None,
        }
    }

    /// Pause `1000 / fps` milliseconds after each frame. `0` disables the
    /// pause.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.delay = match fps {
            0 => Duration::ZERO,
            n => Duration::from_millis(1000 / u64::from(n)),
        };
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// The canvas as last drawn.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Number of frames written so far.
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Flush the output and hand it back, or the first error met while
    /// drawing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn draw(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.try_draw() {
            log::warn!("flood view stopped: {err}");
            self.error = Some(err);
        }
    }

    fn try_draw(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(ClearType::FromCursorDown)
        )?;
        let glyphs = self.color.then_some(&self.glyphs);
        self.canvas.write_to(&mut self.out, glyphs)?;
        self.out.flush()?;
        self.frames += 1;
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(())
    }
}

impl<W: Write> SearchObserver for FloodView<W> {
    fn started(&mut self, start: Point, goal: Point) {
        self.start = Some(start);
        self.canvas.set(start, self.glyphs.start);
        self.canvas.set(goal, self.glyphs.end);
        if self.error.is_none() {
            if let Err(err) = queue!(self.out, terminal::Clear(ClearType::All)) {
                self.error = Some(err);
            }
        }
        self.draw();
    }

    fn opened(&mut self, p: Point) {
        self.canvas.set(p, self.glyphs.opened);
        self.draw();
    }

    fn closed(&mut self, p: Point) {
        if self.start != Some(p) {
            self.canvas.set(p, self.glyphs.closed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_paths::{Algorithm, solve};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn marks_progress_on_canvas() {
        let m = Maze::from_rows(&["    "], p(0, 0), p(3, 0)).unwrap();
        let mut view = FloodView::new(Vec::new(), &m, Glyphs::default());
        view.started(m.start(), m.goal());
        assert_eq!(view.canvas().to_string(), "S  E\n");
        view.opened(p(1, 0));
        assert_eq!(view.canvas().to_string(), "So E\n");
        view.closed(p(0, 0));
        assert_eq!(view.canvas().get(p(0, 0)), Some('S'));
        view.closed(p(1, 0));
        assert_eq!(view.canvas().to_string(), "S. E\n");
        assert_eq!(view.frames(), 2);
    }

    #[test]
    fn one_frame_per_opened_cell() {
        let m = Maze::from_rows(&["     "], p(0, 0), p(4, 0)).unwrap();
        let mut view = FloodView::new(Vec::new(), &m, Glyphs::default()).with_fps(0);
        let report = solve(&m, Algorithm::Bfs, StdRng::seed_from_u64(0), &mut view);
        assert_eq!(report.length, Some(4));
        // Initial frame, then (1,0), (2,0), (3,0); discovering the goal ends
        // the search before (3,0) is closed.
        assert_eq!(view.frames(), 4);
        assert_eq!(view.canvas().to_string(), "S..oE\n");
        // Closing only marks the canvas, so the last frame written predates
        // the close of (2,0).
        let out = String::from_utf8(view.finish().unwrap()).unwrap();
        assert!(out.contains("S.ooE"));
        assert!(!out.contains("S..oE"));
    }

    #[test]
    fn trivial_search_draws_nothing() {
        let m = Maze::from_rows(&["  "], p(0, 0), p(0, 0)).unwrap();
        let mut view = FloodView::new(Vec::new(), &m, Glyphs::default());
        solve(&m, Algorithm::Dfs, StdRng::seed_from_u64(0), &mut view);
        assert_eq!(view.frames(), 0);
        assert!(view.finish().unwrap().is_empty());
    }

    #[test]
    fn custom_glyphs() {
        let glyphs = Glyphs {
            opened: '+',
            closed: '~',
            start: 'A',
            end: 'B',
            ..Glyphs::default()
        };
        let m = Maze::from_rows(&["   "], p(0, 0), p(2, 0)).unwrap();
        let mut view = FloodView::new(Vec::new(), &m, glyphs);
        view.started(m.start(), m.goal());
        view.opened(p(1, 0));
        assert_eq!(view.canvas().to_string(), "A+B\n");
    }

    #[test]
    fn write_error_is_kept_until_finish() {
        let m = Maze::from_rows(&["   "], p(0, 0), p(2, 0)).unwrap();
        let mut view = FloodView::new(Broken, &m, Glyphs::default());
        view.started(m.start(), m.goal());
        view.opened(p(1, 0));
        assert_eq!(view.frames(), 0);
        // The canvas still tracks the search.
        assert_eq!(view.canvas().to_string(), "SoE\n");
        assert!(view.finish().is_err());
    }
}
