//! Piece tests - catalog shapes, rotation, kicks and collision

use blockfall::core::{collides, colour, placeholder, shape_for, ActivePiece, Grid, Rgb};
use blockfall::types::{Cell, ShapeId, Spin};

#[test]
fn test_every_shape_has_four_cells() {
    for id in ShapeId::ALL {
        let shape = shape_for(id);
        assert_eq!(shape.id, Some(id));
        assert_eq!(shape.matrix.filled_cells().len(), 4, "{:?}", id);
        assert!(shape.size() >= 2 && shape.size() <= 4);
    }
}

#[test]
fn test_catalog_sizes() {
    assert_eq!(shape_for(ShapeId::I).size(), 4);
    assert_eq!(shape_for(ShapeId::O).size(), 2);
    for id in [ShapeId::J, ShapeId::L, ShapeId::S, ShapeId::T, ShapeId::Z] {
        assert_eq!(shape_for(id).size(), 3);
    }
}

#[test]
fn test_placeholder_is_empty() {
    let shape = placeholder();
    assert_eq!(shape.id, None);
    assert_eq!(shape.size(), 1);
    assert!(shape.matrix.filled_cells().is_empty());
    assert_eq!(colour(None), Rgb(0, 0, 0));
}

#[test]
fn test_colours_are_distinct() {
    for a in ShapeId::ALL {
        for b in ShapeId::ALL {
            if a != b {
                assert_ne!(colour(Some(a)), colour(Some(b)));
            }
        }
    }
}

#[test]
fn test_four_rotations_restore_matrix() {
    for id in ShapeId::ALL {
        for spin in [Spin::Clockwise, Spin::CounterClockwise] {
            let shape = shape_for(id);
            let turned = shape.rotated(spin).rotated(spin).rotated(spin).rotated(spin);
            assert_eq!(turned, shape, "{:?} {:?}", id, spin);
        }
        let shape = shape_for(id);
        assert_eq!(
            shape.rotated(Spin::Clockwise).rotated(Spin::CounterClockwise),
            shape
        );
    }
}

#[test]
fn test_four_rotations_in_open_space_restore_piece() {
    let grid = Grid::new(10, 20);
    for id in ShapeId::ALL {
        let start = ActivePiece::new(id, 10).translated(0, 8);
        let mut piece = start;
        for _ in 0..4 {
            piece = piece.rotate(Spin::Clockwise, &grid);
            assert!(!collides(&piece, &grid, 0, 0));
        }
        assert_eq!(piece, start, "{:?}", id);
    }
}

#[test]
fn test_spawn_is_centred_at_top() {
    let i = ActivePiece::new(ShapeId::I, 10);
    assert_eq!((i.x, i.y), (3, 0));
    let t = ActivePiece::new(ShapeId::T, 10);
    assert_eq!((t.x, t.y), (4, 0));
    let o = ActivePiece::new(ShapeId::O, 20);
    assert_eq!((o.x, o.y), (9, 0));
    assert!(!i.collided);
}

#[test]
fn test_collides_with_walls_and_floor() {
    let grid = Grid::new(10, 20);
    // Vertical I in the left-most column.
    let mut piece = ActivePiece::new(ShapeId::I, 10);
    piece.x = -1;
    assert!(!collides(&piece, &grid, 0, 0));
    assert!(collides(&piece, &grid, -1, 0));
    assert!(!collides(&piece, &grid, 1, 0));

    piece.y = 16;
    assert!(!collides(&piece, &grid, 0, 0));
    assert!(collides(&piece, &grid, 0, 1));
}

#[test]
fn test_cells_above_top_are_ignored() {
    let grid = Grid::new(10, 20);
    let piece = ActivePiece::new(ShapeId::I, 10).translated(0, -2);
    assert!(!collides(&piece, &grid, 0, 0));
}

#[test]
fn test_collides_with_merged_cells_only() {
    let mut grid = Grid::new(10, 20);
    let piece = ActivePiece::new(ShapeId::O, 10);
    grid.set(4, 2, Cell::falling(ShapeId::Z));
    assert!(!collides(&piece, &grid, 0, 1));

    grid.set(4, 2, Cell::merged(ShapeId::Z));
    assert!(collides(&piece, &grid, 0, 1));
}

#[test]
fn test_wall_kick_moves_off_wall() {
    let grid = Grid::new(10, 20);
    // Vertical I hugging the left wall; lying flat needs a shift right.
    let mut piece = ActivePiece::new(ShapeId::I, 10).translated(0, 5);
    piece.x = -1;

    let rotated = piece.rotate(Spin::Clockwise, &grid);
    assert_ne!(rotated.shape, piece.shape);
    assert!(!collides(&rotated, &grid, 0, 0));
    assert_eq!(rotated.x, 0);
}

#[test]
fn test_rejected_rotation_keeps_piece() {
    let mut grid = Grid::new(10, 20);
    for y in 4..20 {
        for x in 1..10 {
            grid.set(x, y, Cell::merged(ShapeId::L));
        }
    }
    let mut piece = ActivePiece::new(ShapeId::I, 10);
    piece.x = -1;
    piece.y = 10;
    assert!(!collides(&piece, &grid, 0, 0));

    assert_eq!(piece.try_rotate(Spin::Clockwise, &grid), None);
    assert_eq!(piece.rotate(Spin::Clockwise, &grid), piece);
    assert_eq!(piece.rotate(Spin::CounterClockwise, &grid), piece);
}
