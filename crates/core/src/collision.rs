//! Collision detection against the grid edges and merged cells.

use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Would `piece`, moved by (dx, dy), overlap a wall, the floor or a merged cell?
///
/// Cells above the top edge never collide, so a piece may spawn partly
/// off-screen. Anything else outside the grid is blocked.
pub fn collides(piece: &ActivePiece, grid: &Grid, dx: i8, dy: i8) -> bool {
    piece
        .cells()
        .into_iter()
        .map(|(x, y)| (x + dx, y + dy))
        .filter(|&(_, y)| y >= 0)
        .any(|(x, y)| grid.is_blocked(x, y))
}
