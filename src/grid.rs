//! Rectangular byte grids

use std::ops::{Add, Sub};

use anyhow::{anyhow, Context};

/// Location on a grid
///
/// Coordinates are signed, so that a step past the first row or column is
/// representable and can be rejected by [Grid::position].
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Fixed-shape grid of byte cells, stored row by row
///
/// Cell `(x, y)` lives at offset `y * columns + x`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Allocate a `columns` x `rows` grid with every cell set to `fill`.
    ///
    /// Returns error, if the cell count does not fit in memory addressing or
    /// the cell buffer cannot be allocated.
    pub fn new(columns: u32, rows: u32, fill: u8) -> anyhow::Result<Self> {
        let len = (columns as usize)
            .checked_mul(rows as usize)
            .ok_or_else(|| anyhow!("Grid dimensions {}x{} overflow", columns, rows))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .with_context(|| format!("Unable to allocate memory for {}x{} grid cells", columns, rows))?;
        cells.resize(len, fill);

        Ok(Grid {
            columns,
            rows,
            cells,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Cell value at column `x`, row `y`.
    ///
    /// Panics, if the coordinate is outside the grid.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.cells[self.offset(x, y)]
    }

    /// Overwrite the cell at column `x`, row `y`.
    ///
    /// Panics, if the coordinate is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: u8) {
        let offset = self.offset(x, y);
        self.cells[offset] = value;
    }

    /// Unsigned coordinates of `point`, or `None` when it lies outside the grid.
    pub fn position(&self, point: Point) -> Option<(u32, u32)> {
        let x = u32::try_from(point.x).ok().filter(|x| *x < self.columns)?;
        let y = u32::try_from(point.y).ok().filter(|y| *y < self.rows)?;
        Some((x, y))
    }

    /// Rows from top to bottom, each as a slice of `columns` cells.
    pub fn rows_iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        // chunks() rejects zero; an empty grid has no cells to split anyway
        self.cells.chunks(self.columns.max(1) as usize)
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.columns && y < self.rows,
            "Cell ({}, {}) outside of {}x{} grid",
            x,
            y,
            self.columns,
            self.rows
        );
        y as usize * self.columns as usize + x as usize
    }
}
