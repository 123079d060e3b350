//! Turn-based grid-reveal puzzle engine.
//!
//! The core is the [`Minefield`] state machine: mine placement, cell
//! reveal propagation, adjacency counting, and win/loss detection. It
//! owns no I/O; a presentation layer calls [`Minefield::step_into`] and
//! displays the resulting [`StepOutcome`].

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use field::*;
pub use placement::*;
pub use types::*;

mod cell;
mod error;
mod field;
mod placement;
mod types;

/// Validated board parameters: dimensions plus mine density percentage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    rows: Coord,
    columns: Coord,
    density: u8,
}

impl FieldConfig {
    pub const MIN_SIDE: Coord = 2;
    pub const MAX_SIDE: Coord = 50;
    pub const MIN_DENSITY: u8 = 1;
    pub const MAX_DENSITY: u8 = 99;

    pub const DEFAULT_ROWS: Coord = 4;
    pub const DEFAULT_COLUMNS: Coord = 4;
    pub const DEFAULT_DENSITY: u8 = 25;

    pub fn new(rows: Coord, columns: Coord, density: u8) -> Result<Self> {
        if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&rows) {
            return Err(CreateError::InvalidRows);
        }
        if !(Self::MIN_SIDE..=Self::MAX_SIDE).contains(&columns) {
            return Err(CreateError::InvalidColumns);
        }
        if !(Self::MIN_DENSITY..=Self::MAX_DENSITY).contains(&density) {
            return Err(CreateError::InvalidMineDensity);
        }

        // the stored density is in [1, 99] no matter what the checks above say
        let density = density.clamp(Self::MIN_DENSITY, Self::MAX_DENSITY);
        Ok(Self {
            rows,
            columns,
            density,
        })
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn density(&self) -> u8 {
        self.density
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    /// `max(1, floor(cells * density / 100))`, fixed for the field's
    /// lifetime. Always leaves at least one safe cell since density
    /// tops out at 99 percent.
    pub const fn total_mines(&self) -> CellCount {
        let mines = self.total_cells() as u32 * self.density as u32 / 100;
        if mines == 0 { 1 } else { mines as CellCount }
    }
}

impl Default for FieldConfig {
    /// The original game's defaults: a 4x4 board at 25% density.
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            columns: Self::DEFAULT_COLUMNS,
            density: Self::DEFAULT_DENSITY,
        }
    }
}
