use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for row and column indexes.
pub type Coord = u8;

/// Count type used for mine totals and revealed-cell totals.
pub type CellCount = u16;

/// Storage coordinates `(row, column)`, row 0 at the top of the grid.
pub type Coord2 = (Coord, Coord);

/// Caller-facing position with a bottom-left origin: display row 0 is the
/// bottom-most printed row. The inversion to storage rows happens inside
/// `Minefield::step_into` and nowhere else; every other operation speaks
/// storage coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPos {
    pub row: Coord,
    pub col: Coord,
}

impl DisplayPos {
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait NeighborIterExt {
    /// Iterates the up-to-8 in-bounds neighbors of `at`, clipped at the
    /// grid edges.
    fn iter_neighbors(&self, at: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, at: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        NeighborIter::new(at, (rows.try_into().unwrap(), cols.try_into().unwrap()))
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `at`, returning a value only when it stays in bounds.
fn apply_delta(at: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let row = at.0.checked_add_signed(delta.0)?;
    let col = at.1.checked_add_signed(delta.1)?;
    (row < bounds.0 && col < bounds.1).then_some((row, col))
}

/// Iterator over the neighbors of a cell. Holds no borrow of the grid, so
/// callers may mutate cells while walking it.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next) = apply_delta(self.center, delta, self.bounds) {
                return Some(next);
            }
        }
        None
    }
}
