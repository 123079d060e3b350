use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Strategy deciding which cells carry a mine.
///
/// Implementations must return a `rows` x `columns` grid in which every
/// cell is placed and no cell was assigned a bomb twice.
pub trait MinePlacement {
    fn place(self, rows: Coord, columns: Coord, mines: CellCount) -> Array2<Cell>;
}

/// Explicit mine coordinates in storage `(row, column)` form. Bombs land
/// exactly where listed; every other cell becomes a placed empty cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedPlacement<'a>(pub &'a [Coord2]);

impl MinePlacement for FixedPlacement<'_> {
    fn place(self, rows: Coord, columns: Coord, _mines: CellCount) -> Array2<Cell> {
        let mut grid: Array2<Cell> = Array2::default((rows as usize, columns as usize));
        for &coords in self.0 {
            debug_assert!(coords.0 < rows && coords.1 < columns);
            grid[coords.to_nd_index()].place_bomb();
        }
        for cell in grid.iter_mut() {
            cell.mark_placed();
        }
        grid
    }
}
