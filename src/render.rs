//! Maze output as SVG line art or ASCII glyphs

use std::io::Write;

use anyhow::anyhow;
use itertools::Itertools;

use crate::grid::Grid;

/// Drawing parameters for [draw_svg]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgOptions {
    /// Stroke width in pixels
    pub pen_radius: u32,
    /// Distance between neighbouring walls in pixels
    pub corridor_width: u32,
    /// Stroke colour, any CSS color string
    pub fg_color: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            pen_radius: 1,
            corridor_width: 5,
            fg_color: String::from("black"),
        }
    }
}

/// A straight wall segment in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub x1: u64,
    pub y1: u64,
    pub x2: u64,
    pub y2: u64,
}

/// Collect the wall segments of a maze grid
///
/// Even rows are scanned left to right for horizontal walls, then even
/// columns top to bottom for vertical walls. Each maximal run of walls
/// becomes one stroke. Only odd cells of a run have length; even cells are
/// pillars sitting on the corner points.
///
/// # Examples
/// ```
/// use mazegen::{wall_strokes, MazeGenerator};
///
/// let maze = MazeGenerator::new(0).generate_maze(1, 1).unwrap();
/// assert_eq!(wall_strokes(&maze, 10).len(), 4);
/// ```
pub fn wall_strokes(maze: &Grid, corridor_width: u32) -> Vec<Stroke> {
    let step = u64::from(corridor_width);
    let mut strokes = Vec::new();

    for y in (0..maze.rows()).step_by(2) {
        let ypos = u64::from(y / 2) * step;
        strokes.extend(
            wall_runs(maze.columns(), |x| maze.get(x, y) != 0, step)
                .into_iter()
                .map(|(x1, x2)| Stroke { x1, y1: ypos, x2, y2: ypos }),
        );
    }

    for x in (0..maze.columns()).step_by(2) {
        let xpos = u64::from(x / 2) * step;
        strokes.extend(
            wall_runs(maze.rows(), |y| maze.get(x, y) != 0, step)
                .into_iter()
                .map(|(y1, y2)| Stroke { x1: xpos, y1, x2: xpos, y2 }),
        );
    }

    strokes
}

/// Pixel spans of the wall runs along one row or column of `len` cells.
fn wall_runs(len: u32, is_wall: impl Fn(u32) -> bool, step: u64) -> Vec<(u64, u64)> {
    let mut spans = Vec::new();
    let (mut start, mut end) = (0, 0);
    let mut i = 0;
    while i < len {
        while i < len && is_wall(i) {
            if i % 2 != 0 {
                end += step;
            }
            i += 1;
        }

        if end > start {
            spans.push((start, end));
        }

        while i < len && !is_wall(i) {
            end += step;
            start = end;
            i += 1;
        }
    }
    spans
}

/// Write `maze` as an SVG document
///
/// Returns error, if the picture size does not fit in 32 bits, or writing
/// to `out` fails.
pub fn draw_svg<W: Write>(maze: &Grid, options: &SvgOptions, out: &mut W) -> anyhow::Result<()> {
    let size = |cells: u32| (cells / 2).checked_mul(options.corridor_width);
    let (width, height) = size(maze.columns()).zip(size(maze.rows())).ok_or_else(|| {
        anyhow!(
            "SVG size of {}x{} grid with {}px corridors overflows",
            maze.columns(),
            maze.rows(),
            options.corridor_width
        )
    })?;

    writeln!(out, "<?xml version='1.0' standalone='no'?>")?;
    writeln!(
        out,
        "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {} {}'>",
        width, height
    )?;
    writeln!(
        out,
        "<g stroke-linecap='round' stroke-width='{}' stroke='{}'>",
        options.pen_radius, options.fg_color
    )?;

    let strokes = wall_strokes(maze, options.corridor_width);
    log::debug!("Drawing {} strokes for {}x{} grid", strokes.len(), maze.columns(), maze.rows());
    for Stroke { x1, y1, x2, y2 } in strokes {
        writeln!(out, " <line x1='{}' y1='{}' x2='{}' y2='{}'/>", x1, y1, x2, y2)?;
    }

    writeln!(out, "</g>")?;
    writeln!(out, "</svg>")?;
    Ok(())
}

/// Write `maze` as text, `fg` for every wall cell and `bg` for every open cell.
pub fn draw_ascii<W: Write>(maze: &Grid, fg: &str, bg: &str, out: &mut W) -> anyhow::Result<()> {
    for row in maze.rows_iter() {
        writeln!(out, "{}", row.iter().map(|c| if *c != 0 { fg } else { bg }).join(""))?;
    }
    Ok(())
}
