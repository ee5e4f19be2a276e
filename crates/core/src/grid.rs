//! Grid module - the playfield of locked cells
//!
//! A `width x height` matrix of attributes stored as a flat row-major vector.
//! Coordinates: (x, y) with x growing to the right and y growing downward;
//! row 0 is the top row, where new pieces spawn.
//!
//! The grid owns the single definition of "off-grid" ([`Grid::in_range`]);
//! piece collision and locking both defer to it.

use tracing::warn;

use crate::error::{EngineError, Result};
use crate::piece::Piece;
use crate::types::{Attribute, EMPTY};

/// Largest width or height a grid may have
pub const MAX_DIMENSION: u16 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    /// Row-major cells (y * width + x)
    cells: Vec<Attribute>,
}

impl Grid {
    /// Create an empty grid. Dimensions are fixed for the grid's lifetime.
    ///
    /// Sizes are not checked here; [`GameSession`](crate::GameSession) only
    /// accepts grids with both sides in `4..=MAX_DIMENSION`.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid from a text picture, one line per row, top row first.
    ///
    /// `.` is empty, `#` is attribute 1 and `1`-`9` are that attribute.
    /// Blank lines and surrounding whitespace are ignored.
    ///
    /// ```
    /// use fallgrid_core::Grid;
    ///
    /// let grid = Grid::parse(
    ///     "....
    ///      ..#.
    ///      7777",
    /// )
    /// .unwrap();
    /// assert_eq!((grid.width(), grid.height()), (4, 3));
    /// assert_eq!(grid.at(2, 1), 1);
    /// assert!(grid.is_row_full(2));
    /// ```
    pub fn parse(picture: &str) -> Result<Self> {
        let rows: Vec<&str> = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let Some(first) = rows.first() else {
            return Err(EngineError::EmptyGrid);
        };
        let width = first.chars().count();
        let height = rows.len();
        if width > MAX_DIMENSION as usize || height > MAX_DIMENSION as usize {
            return Err(EngineError::GridTooLarge { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(EngineError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let attr = match ch {
                    '.' => EMPTY,
                    '#' => 1,
                    '1'..='9' => ch as u8 - b'0',
                    _ => return Err(EngineError::BadCell { ch, x, y }),
                };
                cells.push(attr);
            }
        }

        Ok(Self {
            width: width as u16,
            height: height as u16,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_range(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// `0 <= x < width && 0 <= y < height`
    #[inline]
    pub fn in_range(&self, x: i32, y: i32) -> bool {
        (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y)
    }

    /// Attribute at (x, y); `EMPTY` when out of range
    #[inline]
    pub fn at(&self, x: i32, y: i32) -> Attribute {
        self.index(x, y).map_or(EMPTY, |idx| self.cells[idx])
    }

    /// Write a single cell. Out-of-range writes are dropped and return false.
    pub(crate) fn set(&mut self, x: i32, y: i32, attr: Attribute) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = attr;
                true
            }
            None => false,
        }
    }

    /// One row's cells, left to right. Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Attribute] {
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Every column of row `y` is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        self.row(y).iter().all(|&cell| cell != EMPTY)
    }

    /// No occupied cells at all
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == EMPTY)
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != EMPTY).count()
    }

    /// Copy a piece's filled cells into the grid.
    ///
    /// Callers lock only pieces that do not collide, so every filled cell should
    /// be in range. Cells that are not are skipped rather than written.
    pub fn place(&mut self, piece: &Piece) {
        let attr = piece.attribute();
        for (x, y) in piece.cells() {
            if !self.set(x, y, attr) {
                warn!(x, y, kind = ?piece.kind(), "skipped out-of-range cell while locking");
            }
        }
    }

    /// Remove every full row, shifting the rows above it down, and refill the top
    /// with empty rows. Returns how many rows were removed.
    ///
    /// Uses a single bottom-to-top compaction pass: a read cursor walks every row
    /// once and a write cursor trails it, so rows that become adjacent after a
    /// removal are still examined exactly once. The result is identical to
    /// removing each full row and inserting an empty row at index 0.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(EMPTY);
        cleared
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}
