use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Outcome of stepping into a board position.
///
/// These are routine play results, not errors: out-of-range positions and
/// re-stepping a revealed cell happen constantly in interactive play, so
/// they travel the same channel as the happy path.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The target cell and its safe neighbors are now revealed.
    Revealed,
    /// The target cell held a mine; the game is over.
    HitMine,
    /// The target cell was already revealed; nothing changed.
    AlreadyRevealed,
    /// The display row falls outside the board; nothing changed.
    RowOutOfRange,
    /// The column falls outside the board; nothing changed.
    ColumnOutOfRange,
    /// Every safe cell is revealed; the game is won.
    AllClear,
}

impl StepOutcome {
    /// Whether the game ended with this step.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::HitMine | Self::AllClear)
    }

    /// Whether the step changed any cell.
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Revealed | Self::HitMine | Self::AllClear)
    }
}

/// An owned grid of cells with mine placement baked in at construction.
///
/// The field is mutated only through [`Minefield::step_into`]; it is never
/// resized or re-seeded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    grid: Array2<Cell>,
    density: u8,
    total_mines: CellCount,
    total_revealed: CellCount,
}

impl Minefield {
    /// Builds a field with mines drawn from the ambient RNG.
    pub fn create(rows: Coord, columns: Coord, density: u8) -> Result<Self> {
        Self::create_seeded(rows, columns, density, rand::random())
    }

    /// Builds a field whose mine layout is reproducible from `seed`.
    pub fn create_seeded(rows: Coord, columns: Coord, density: u8, seed: u64) -> Result<Self> {
        let config = FieldConfig::new(rows, columns, density)?;
        Ok(Self::with_placement(config, RandomPlacement::new(seed)))
    }

    /// Builds a field from an explicit placement strategy. Placement runs
    /// to completion here, before the first step is possible.
    pub fn with_placement(config: FieldConfig, placement: impl MinePlacement) -> Self {
        let grid = placement.place(config.rows(), config.columns(), config.total_mines());
        let total_mines = grid
            .iter()
            .filter(|cell| cell.has_bomb())
            .count()
            .try_into()
            .unwrap();
        debug_assert!(grid.iter().all(|cell| cell.is_placed()));

        Self {
            grid,
            density: config.density(),
            total_mines,
            total_revealed: 0,
        }
    }

    pub fn rows(&self) -> Coord {
        self.grid.nrows().try_into().unwrap()
    }

    pub fn columns(&self) -> Coord {
        self.grid.ncols().try_into().unwrap()
    }

    pub fn mine_density(&self) -> u8 {
        self.density
    }

    pub fn total_mines(&self) -> CellCount {
        self.total_mines
    }

    pub fn total_revealed(&self) -> CellCount {
        self.total_revealed
    }

    fn total_cells(&self) -> CellCount {
        self.grid.len().try_into().unwrap()
    }

    /// Steps into a caller-facing position (bottom-left origin).
    ///
    /// This is the only place display rows are converted to storage rows:
    /// `storage_row = rows - 1 - display_row`. A safe step also reveals the
    /// non-mine neighbors of the target, and only those: the expansion is
    /// single-depth by design, never a flood fill into further cells.
    pub fn step_into(&mut self, pos: DisplayPos) -> StepOutcome {
        use StepOutcome::*;

        let Some(row) = (self.rows() - 1).checked_sub(pos.row) else {
            return RowOutOfRange;
        };
        if pos.col >= self.columns() {
            return ColumnOutOfRange;
        }
        let at: Coord2 = (row, pos.col);

        let cell = self.grid[at.to_nd_index()];
        if cell.is_revealed() {
            return AlreadyRevealed;
        }

        if cell.has_bomb() {
            self.reveal_at(at);
            return HitMine;
        }

        self.reveal_at(at);
        if self.all_mines_discovered() {
            return AllClear;
        }

        for neighbor in self.grid.iter_neighbors(at) {
            if !self.grid[neighbor.to_nd_index()].has_bomb() {
                self.reveal_at(neighbor);
            }
        }

        if self.all_mines_discovered() {
            AllClear
        } else {
            Revealed
        }
    }

    /// The one reveal primitive. Idempotent: a cell revealed through any
    /// number of paths counts exactly once.
    fn reveal_at(&mut self, at: Coord2) {
        let cell = &mut self.grid[at.to_nd_index()];
        if cell.revealed {
            return;
        }
        cell.revealed = true;
        self.total_revealed += 1;
    }

    /// Direct lookup in storage coordinates. Staying in range is the
    /// caller's job; an out-of-range index is a programming error, not a
    /// game outcome.
    pub fn is_revealed(&self, row: Coord, col: Coord) -> bool {
        self.grid[(row as usize, col as usize)].is_revealed()
    }

    pub fn has_bomb(&self, row: Coord, col: Coord) -> bool {
        self.grid[(row as usize, col as usize)].has_bomb()
    }

    /// Bombs among the up-to-8 neighbors of `at`, clipped at the edges.
    pub fn adjacent_bomb_count(&self, at: Coord2) -> u8 {
        self.grid
            .iter_neighbors(at)
            .filter(|&pos| self.grid[pos.to_nd_index()].has_bomb())
            .count()
            .try_into()
            .unwrap()
    }

    /// Every bomb coordinate, in row-major scan order. Ground truth for
    /// harnesses rather than part of normal play.
    pub fn mine_positions(&self) -> Vec<Coord2> {
        let mut positions = Vec::new();
        for row in 0..self.rows() {
            for col in 0..self.columns() {
                if self.has_bomb(row, col) {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Win predicate: every non-mine cell has been revealed.
    pub fn all_mines_discovered(&self) -> bool {
        self.total_mines + self.total_revealed == self.total_cells()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(rows: Coord, columns: Coord, mines: &[Coord2]) -> Minefield {
        let config = FieldConfig::new(rows, columns, 25).unwrap();
        Minefield::with_placement(config, FixedPlacement(mines))
    }

    /// Steps by storage coordinates, applying the display inversion that a
    /// caller would.
    fn step_storage(field: &mut Minefield, row: Coord, col: Coord) -> StepOutcome {
        let display_row = field.rows() - 1 - row;
        field.step_into(DisplayPos::new(display_row, col))
    }

    #[test]
    fn stepping_on_a_mine_reveals_only_that_cell() {
        let mut field = field(3, 3, &[(0, 0)]);

        let outcome = step_storage(&mut field, 0, 0);

        assert_eq!(outcome, StepOutcome::HitMine);
        assert_eq!(field.total_revealed(), 1);
        assert!(field.is_revealed(0, 0));
        assert!(!field.is_revealed(0, 1));
        assert!(!field.is_revealed(1, 1));
    }

    #[test]
    fn safe_step_reveals_the_cell_and_its_non_mine_neighbors() {
        let mut field = field(3, 4, &[(0, 0), (2, 2)]);

        let outcome = step_storage(&mut field, 1, 1);

        assert_eq!(outcome, StepOutcome::Revealed);
        assert!(field.is_revealed(1, 1));
        // both mines stay hidden, the six safe neighbors open
        assert!(!field.is_revealed(0, 0));
        assert!(!field.is_revealed(2, 2));
        assert_eq!(field.total_revealed(), 7);
        assert!(!field.is_revealed(0, 3));
    }

    #[test]
    fn expansion_stops_at_depth_one() {
        let mut field = field(4, 4, &[(0, 0)]);

        let outcome = step_storage(&mut field, 3, 3);

        assert_eq!(outcome, StepOutcome::Revealed);
        // target plus its three corner neighbors, nothing further out
        assert_eq!(field.total_revealed(), 4);
        assert!(field.is_revealed(3, 3));
        assert!(field.is_revealed(2, 2));
        assert!(field.is_revealed(2, 3));
        assert!(field.is_revealed(3, 2));
        assert!(!field.is_revealed(1, 1));
        assert!(!field.is_revealed(0, 3));
    }

    #[test]
    fn re_stepping_a_revealed_cell_changes_nothing() {
        let mut field = field(4, 4, &[(0, 0)]);

        assert_eq!(step_storage(&mut field, 3, 3), StepOutcome::Revealed);
        let revealed_before = field.total_revealed();

        // directly stepped, then a cell opened by neighbor expansion
        assert_eq!(step_storage(&mut field, 3, 3), StepOutcome::AlreadyRevealed);
        assert_eq!(step_storage(&mut field, 2, 2), StepOutcome::AlreadyRevealed);
        assert_eq!(field.total_revealed(), revealed_before);
    }

    #[test]
    fn out_of_range_rows_and_columns_do_not_mutate() {
        let mut field = field(3, 3, &[(0, 0)]);

        assert_eq!(
            field.step_into(DisplayPos::new(3, 0)),
            StepOutcome::RowOutOfRange
        );
        assert_eq!(
            field.step_into(DisplayPos::new(200, 0)),
            StepOutcome::RowOutOfRange
        );
        assert_eq!(
            field.step_into(DisplayPos::new(0, 3)),
            StepOutcome::ColumnOutOfRange
        );
        assert_eq!(field.total_revealed(), 0);
    }

    #[test]
    fn clearing_every_safe_cell_wins() {
        let mut field = field(4, 4, &[(0, 0), (2, 1)]);
        let mut last = StepOutcome::Revealed;

        for row in 0..field.rows() {
            for col in 0..field.columns() {
                if field.has_bomb(row, col) || field.is_revealed(row, col) {
                    continue;
                }
                last = step_storage(&mut field, row, col);
                assert_ne!(last, StepOutcome::HitMine);
            }
        }

        assert_eq!(last, StepOutcome::AllClear);
        assert!(field.all_mines_discovered());
        assert_eq!(
            field.total_revealed() + field.total_mines(),
            u16::from(field.rows()) * u16::from(field.columns())
        );
    }

    #[test]
    fn final_reveal_through_expansion_also_wins() {
        // 2x2 with one mine: a single safe step opens the other two safe
        // cells by expansion and ends the game
        let mut field = field(2, 2, &[(0, 0)]);

        let outcome = step_storage(&mut field, 1, 1);

        assert_eq!(outcome, StepOutcome::AllClear);
        assert!(field.all_mines_discovered());
        assert!(!field.is_revealed(0, 0));
    }

    #[test]
    fn adjacency_counts_clip_at_edges() {
        let field = field(3, 3, &[(0, 0), (0, 1), (1, 0)]);

        assert_eq!(field.adjacent_bomb_count((1, 1)), 3);
        assert_eq!(field.adjacent_bomb_count((0, 0)), 2);
        assert_eq!(field.adjacent_bomb_count((2, 2)), 0);
    }

    #[test]
    fn mine_positions_scan_row_major() {
        let field = field(3, 3, &[(2, 0), (0, 1), (1, 2)]);

        assert_eq!(field.mine_positions(), vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn seeded_creation_honors_the_density_formula() {
        let field = Minefield::create_seeded(4, 4, 25, 99).unwrap();

        assert_eq!(field.total_mines(), 4);
        assert_eq!(field.mine_positions().len(), 4);
        assert_eq!(field.total_revealed(), 0);
    }

    #[test]
    fn stepping_on_a_known_mine_from_ground_truth() {
        let mut field = Minefield::create_seeded(4, 4, 25, 7).unwrap();
        let (row, col) = field.mine_positions()[0];

        assert_eq!(step_storage(&mut field, row, col), StepOutcome::HitMine);
    }

    #[test]
    fn snapshot_round_trips_through_serde() {
        let mut field = field(3, 3, &[(0, 0)]);
        step_storage(&mut field, 2, 2);

        let json = serde_json::to_string(&field).unwrap();
        let restored: Minefield = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, field);
        assert_eq!(restored.total_revealed(), field.total_revealed());
    }
}
