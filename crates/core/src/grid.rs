//! Grid module - the playfield
//!
//! Cells live in one flat row-major buffer (`y * width + x`), so a row is a
//! contiguous slice and row removal is a `copy_within`.
//! Coordinates: x grows to the right, y grows downward, (0, 0) is top-left.

use crate::error::GridError;
use crate::piece::ActivePiece;
use crate::types::{Cell, MAX_GRID_EDGE, MIN_GRID_EDGE};

/// Fixed-size playfield of `(tag, status)` cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid; every cell is `(empty, clear)`
    ///
    /// Both edges must lie in `MIN_GRID_EDGE..=MAX_GRID_EDGE`, which
    /// [`GameConfig::validate`](crate::GameConfig::validate) checks for sessions.
    pub fn new(width: u8, height: u8) -> Self {
        debug_assert!(
            (MIN_GRID_EDGE..=MAX_GRID_EDGE).contains(&width)
                && (MIN_GRID_EDGE..=MAX_GRID_EDGE).contains(&height),
            "grid size {}x{} is outside the supported range",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width as usize * height as usize],
        }
    }

    /// Build a grid from explicit rows (top row first)
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).ok_or(GridError::NoRows)?;

        let edge = MIN_GRID_EDGE as usize..=MAX_GRID_EDGE as usize;
        if !edge.contains(&width) || !edge.contains(&height) {
            return Err(GridError::Dimensions { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }

        Ok(Self {
            width: width as u8,
            height: height as u8,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if !self.is_inside_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    pub fn is_inside_bounds(&self, x: i8, y: i8) -> bool {
        x >= 0 && y >= 0 && x < self.width as i8 && y < self.height as i8
    }

    /// True iff the cell is in bounds, merged and tagged
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        self.get(x, y).is_some_and(|cell| cell.is_occupied())
    }

    /// Out of bounds or occupied. Bounds are tested first.
    pub fn is_blocked(&self, x: i8, y: i8) -> bool {
        !self.is_inside_bounds(x, y) || self.is_occupied(x, y)
    }

    /// Row `y` as a slice, top row is 0
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        let width = self.width as usize;
        let start = y.checked_mul(width)?;
        self.cells.get(start..start + width)
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width as usize)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// A row is complete when every cell in it is merged
    pub fn is_row_complete(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(|cell| cell.is_occupied()))
    }

    /// Write the piece's filled cells as `(tag, merged)`
    ///
    /// The caller must have checked the placement; cells above the top edge
    /// are dropped.
    pub fn merge(&mut self, piece: &ActivePiece) {
        let Some(id) = piece.shape.id else {
            return;
        };
        for (x, y) in piece.cells() {
            self.set(x, y, Cell::merged(id));
        }
    }

    /// Write the piece's filled cells as `(tag, clear)` for drawing
    pub fn paint(&mut self, piece: &ActivePiece) {
        let Some(id) = piece.shape.id else {
            return;
        };
        for (x, y) in piece.cells() {
            self.set(x, y, Cell::falling(id));
        }
    }

    /// Remove every complete row in one pass and return how many went
    ///
    /// Kept rows slide down in their original order; the freed rows at the top
    /// are reset to empty.
    pub fn sweep_completed_rows(&mut self) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..height).rev() {
            if self.is_row_complete(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, write_y * width);
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = Cell::EMPTY;
        }

        cleared
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }
}
