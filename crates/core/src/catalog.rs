//! Piece catalog - shape matrices and colour tags
//!
//! Every shape is a square boolean matrix of size 1..=4 stored in a fixed
//! 4x4 array, so shapes are `Copy` and rotating never allocates.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{ShapeId, Spin};

/// Largest shape edge (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Local `(x, y)` offsets of the filled cells of one shape
pub type FilledCells = ArrayVec<(i8, i8), { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

const F: bool = true;
const E: bool = false;

/// Square filled-cell mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMatrix {
    size: u8,
    rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeMatrix {
    /// Build a matrix; only the top-left `size x size` block is used
    pub const fn new(size: u8, rows: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE]) -> Self {
        Self { size, rows }
    }

    /// Edge length of the bounding box
    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.size && y < self.size && self.rows[y as usize][x as usize]
    }

    /// Filled cells in row-major order
    pub fn filled_cells(&self) -> FilledCells {
        let n = self.size as usize;
        let mut cells = FilledCells::new();
        for (y, row) in self.rows.iter().take(n).enumerate() {
            for (x, &filled) in row.iter().take(n).enumerate() {
                if filled {
                    cells.push((x as i8, y as i8));
                }
            }
        }
        cells
    }

    /// Rotate 90 degrees: transpose, then reverse each row (clockwise) or
    /// the row order (counter-clockwise)
    pub fn rotated(&self, spin: Spin) -> Self {
        let n = self.size as usize;
        let mut transposed = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in transposed.iter_mut().take(n).enumerate() {
            for (x, cell) in row.iter_mut().take(n).enumerate() {
                *cell = self.rows[x][y];
            }
        }

        let mut rows = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..n {
            for x in 0..n {
                rows[y][x] = match spin {
                    Spin::Clockwise => transposed[y][n - 1 - x],
                    Spin::CounterClockwise => transposed[n - 1 - y][x],
                };
            }
        }

        Self {
            size: self.size,
            rows,
        }
    }
}

/// A shape matrix with its tag; `id == None` is the placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub id: Option<ShapeId>,
    pub matrix: ShapeMatrix,
}

impl Shape {
    pub const fn new(id: Option<ShapeId>, matrix: ShapeMatrix) -> Self {
        Self { id, matrix }
    }

    pub fn size(&self) -> u8 {
        self.matrix.size()
    }

    pub fn rotated(&self, spin: Spin) -> Self {
        Self {
            id: self.id,
            matrix: self.matrix.rotated(spin),
        }
    }
}

/// RGB colour tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

const PLACEHOLDER: Shape = Shape::new(
    None,
    ShapeMatrix::new(1, [[E, E, E, E], [E, E, E, E], [E, E, E, E], [E, E, E, E]]),
);

const I_SHAPE: Shape = Shape::new(
    Some(ShapeId::I),
    ShapeMatrix::new(4, [[E, F, E, E], [E, F, E, E], [E, F, E, E], [E, F, E, E]]),
);

const J_SHAPE: Shape = Shape::new(
    Some(ShapeId::J),
    ShapeMatrix::new(3, [[E, F, E, E], [E, F, E, E], [F, F, E, E], [E, E, E, E]]),
);

const L_SHAPE: Shape = Shape::new(
    Some(ShapeId::L),
    ShapeMatrix::new(3, [[E, F, E, E], [E, F, E, E], [E, F, F, E], [E, E, E, E]]),
);

const O_SHAPE: Shape = Shape::new(
    Some(ShapeId::O),
    ShapeMatrix::new(2, [[F, F, E, E], [F, F, E, E], [E, E, E, E], [E, E, E, E]]),
);

const S_SHAPE: Shape = Shape::new(
    Some(ShapeId::S),
    ShapeMatrix::new(3, [[E, F, F, E], [F, F, E, E], [E, E, E, E], [E, E, E, E]]),
);

const T_SHAPE: Shape = Shape::new(
    Some(ShapeId::T),
    ShapeMatrix::new(3, [[E, E, E, E], [F, F, F, E], [E, F, E, E], [E, E, E, E]]),
);

const Z_SHAPE: Shape = Shape::new(
    Some(ShapeId::Z),
    ShapeMatrix::new(3, [[F, F, E, E], [E, F, F, E], [E, E, E, E], [E, E, E, E]]),
);

/// Spawn-orientation shape for a shape id
pub fn shape_for(id: ShapeId) -> Shape {
    match id {
        ShapeId::I => I_SHAPE,
        ShapeId::J => J_SHAPE,
        ShapeId::L => L_SHAPE,
        ShapeId::O => O_SHAPE,
        ShapeId::S => S_SHAPE,
        ShapeId::T => T_SHAPE,
        ShapeId::Z => Z_SHAPE,
    }
}

/// The empty 1x1 "no piece" shape
pub fn placeholder() -> Shape {
    PLACEHOLDER
}

/// Uniform pick among the seven playable shapes
pub fn random_shape_id(rng: &mut SimpleRng) -> ShapeId {
    ShapeId::ALL[rng.next_range(ShapeId::ALL.len() as u32) as usize]
}

/// Colour tag for a cell tag; `None` is the empty/placeholder colour
pub fn colour(id: Option<ShapeId>) -> Rgb {
    match id {
        None => Rgb(0, 0, 0),
        Some(ShapeId::I) => Rgb(80, 227, 230),
        Some(ShapeId::J) => Rgb(36, 95, 223),
        Some(ShapeId::L) => Rgb(223, 173, 36),
        Some(ShapeId::O) => Rgb(223, 217, 36),
        Some(ShapeId::S) => Rgb(48, 211, 56),
        Some(ShapeId::T) => Rgb(132, 61, 198),
        Some(ShapeId::Z) => Rgb(227, 78, 76),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_shape_has_four_cells() {
        for id in ShapeId::ALL {
            let shape = shape_for(id);
            assert_eq!(shape.id, Some(id));
            assert_eq!(shape.matrix.filled_cells().len(), 4, "{:?}", id);
        }
    }

    #[test]
    fn test_placeholder_is_empty() {
        let shape = placeholder();
        assert_eq!(shape.id, None);
        assert_eq!(shape.size(), 1);
        assert!(shape.matrix.filled_cells().is_empty());
    }

    #[test]
    fn test_t_rotation_clockwise() {
        // ...      .#.
        // ###  ->  ##.
        // .#.      .#.
        let rotated = shape_for(ShapeId::T).matrix.rotated(Spin::Clockwise);
        let cells = rotated.filled_cells();
        assert_eq!(cells.as_slice(), &[(1, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_rotation_directions_are_inverse() {
        for id in ShapeId::ALL {
            let matrix = shape_for(id).matrix;
            let back = matrix
                .rotated(Spin::Clockwise)
                .rotated(Spin::CounterClockwise);
            assert_eq!(back, matrix);
        }
    }

    #[test]
    fn test_random_ids_cover_catalog() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let id = random_shape_id(&mut rng);
            let idx = ShapeId::ALL.iter().position(|&s| s == id).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_colours_are_distinct() {
        let colours: Vec<Rgb> = ShapeId::ALL.iter().map(|&id| colour(Some(id))).collect();
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
