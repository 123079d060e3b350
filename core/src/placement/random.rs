use rand::prelude::*;

use super::*;

/// Uniform rejection sampling, seeded per construction.
///
/// Draws random coordinates and skips cells whose assignment is already
/// decided until the requested number of bombs is down, then sweeps the
/// grid marking the remaining cells as placed empty cells.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomPlacement {
    seed: u64,
}

impl RandomPlacement {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinePlacement for RandomPlacement {
    fn place(self, rows: Coord, columns: Coord, mines: CellCount) -> Array2<Cell> {
        // the sampling loop terminates only while at least one cell stays free
        debug_assert!(mines < mult(rows, columns));

        let mut grid: Array2<Cell> = Array2::default((rows as usize, columns as usize));
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut bombs_placed: CellCount = 0;

        while bombs_placed < mines {
            let row = rng.random_range(0..rows);
            let col = rng.random_range(0..columns);

            let cell = &mut grid[(row as usize, col as usize)];
            if cell.is_placed() {
                continue;
            }
            cell.place_bomb();
            bombs_placed += 1;
            log::trace!("bomb {bombs_placed}/{mines} at ({row}, {col})");
        }

        for cell in grid.iter_mut() {
            if !cell.is_placed() {
                cell.mark_placed();
            }
        }

        log::debug!(
            "placed {bombs_placed} bombs on a {rows}x{columns} board (seed {})",
            self.seed
        );
        grid
    }
}
