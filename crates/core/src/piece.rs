//! Active piece - the falling shape and its moves
//!
//! Translation and rotation here never consult the grid on their own; the
//! session checks every placement with [`collides`] before committing it.
//! The only exception is [`ActivePiece::rotate`], which runs the bounded
//! wall-kick search itself.

use arrayvec::ArrayVec;

use crate::catalog::{self, Shape, MAX_SHAPE_SIZE};
use crate::collision::collides;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{ShapeId, Spin};

/// Falling piece: shape, top-left position on the grid, landing flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    /// Set only on the copy reported by the update in which it landed
    pub collided: bool,
}

impl ActivePiece {
    /// Spawn `id` centred on a grid of the given width, at the top row
    pub fn new(id: ShapeId, grid_width: u8) -> Self {
        let shape = catalog::shape_for(id);
        Self {
            shape,
            x: spawn_x(grid_width, shape.size()),
            y: 0,
            collided: false,
        }
    }

    /// Spawn a uniformly chosen shape
    pub fn spawn(rng: &mut SimpleRng, grid_width: u8) -> Self {
        Self::new(catalog::random_shape_id(rng), grid_width)
    }

    /// The "no piece" stand-in used before the first spawn and after game over
    pub fn placeholder() -> Self {
        Self {
            shape: catalog::placeholder(),
            x: 0,
            y: 0,
            collided: false,
        }
    }

    pub fn id(&self) -> Option<ShapeId> {
        self.shape.id
    }

    pub fn is_placeholder(&self) -> bool {
        self.shape.id.is_none()
    }

    /// Absolute grid coordinates of the filled cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }> {
        self.shape
            .matrix
            .filled_cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same piece moved by (dx, dy); legality is not checked
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix turned 90 degrees in place
    pub fn rotated(&self, spin: Spin) -> Self {
        Self {
            shape: self.shape.rotated(spin),
            ..*self
        }
    }

    /// Copy flagged as just landed
    pub fn landed(&self) -> Self {
        Self {
            collided: true,
            ..*self
        }
    }

    /// Rotate with the bounded wall kick, or `None` when no candidate fits
    ///
    /// The unshifted position is tried first, then horizontal shifts
    /// `+1, -1, +2, -2, ...`, at most `size` of them.
    pub fn try_rotate(&self, spin: Spin, grid: &Grid) -> Option<Self> {
        let rotated = self.rotated(spin);
        std::iter::once(0)
            .chain(kick_shifts(rotated.shape.size()))
            .find(|&dx| !collides(&rotated, grid, dx, 0))
            .map(|dx| rotated.translated(dx, 0))
    }

    /// Rotate with the bounded wall kick; a rejected rotation returns the
    /// piece exactly as it was
    pub fn rotate(&self, spin: Spin, grid: &Grid) -> Self {
        self.try_rotate(spin, grid).unwrap_or(*self)
    }
}

/// Horizontal spawn column: grid centre minus half the shape
pub fn spawn_x(grid_width: u8, shape_size: u8) -> i8 {
    (grid_width / 2) as i8 - (shape_size / 2) as i8
}

/// Kick candidates in search order: +1, -1, +2, -2, ... (`size` of them)
fn kick_shifts(size: u8) -> impl Iterator<Item = i8> {
    (1..=size as i8).map(|n| if n % 2 == 1 { (n + 1) / 2 } else { -(n / 2) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_spawn_is_centred() {
        let piece = ActivePiece::new(ShapeId::I, 10);
        assert_eq!((piece.x, piece.y), (3, 0));
        assert!(!piece.collided);

        let piece = ActivePiece::new(ShapeId::T, 20);
        assert_eq!(piece.x, 9);

        let piece = ActivePiece::new(ShapeId::O, 20);
        assert_eq!(piece.x, 9);
    }

    #[test]
    fn test_kick_shift_order() {
        let shifts: Vec<i8> = kick_shifts(4).collect();
        assert_eq!(shifts, vec![1, -1, 2, -2]);
        let shifts: Vec<i8> = kick_shifts(3).collect();
        assert_eq!(shifts, vec![1, -1, 2]);
        let shifts: Vec<i8> = kick_shifts(2).collect();
        assert_eq!(shifts, vec![1, -1]);
    }

    #[test]
    fn test_translate_keeps_shape() {
        let piece = ActivePiece::new(ShapeId::L, 10);
        let moved = piece.translated(-2, 3);
        assert_eq!((moved.x, moved.y), (piece.x - 2, piece.y + 3));
        assert_eq!(moved.shape, piece.shape);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = ActivePiece::new(ShapeId::O, 10).translated(0, 5);
        let cells = piece.cells();
        assert_eq!(cells.as_slice(), &[(4, 5), (5, 5), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_rotation_kicks_off_left_wall() {
        let grid = Grid::new(10, 20);
        // Vertical I in column 1 of its box, hugging the left wall.
        let piece = ActivePiece::new(ShapeId::I, 10).translated(-4, 5);
        assert_eq!(piece.cells()[0].0, 0);

        let rotated = piece.rotate(Spin::Clockwise, &grid);
        assert_ne!(rotated.shape, piece.shape);
        assert!(!collides(&rotated, &grid, 0, 0));
        assert!(rotated.x > piece.x);
    }

    #[test]
    fn test_rejected_rotation_is_unchanged() {
        let mut grid = Grid::new(10, 20);
        let piece = ActivePiece::new(ShapeId::I, 10).translated(0, 5);
        // Fill rows 5..9 around the vertical I so no kick leaves room to lie flat.
        for y in 5..9 {
            for x in 0..10 {
                if !piece.cells().contains(&(x, y)) {
                    grid.set(x, y, Cell::merged(ShapeId::O));
                }
            }
        }

        assert_eq!(piece.try_rotate(Spin::Clockwise, &grid), None);
        assert_eq!(piece.rotate(Spin::Clockwise, &grid), piece);
    }
}
