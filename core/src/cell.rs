use serde::{Deserialize, Serialize};

/// A single square of the minefield.
///
/// `placed` records that the mine-assignment decision for this cell has
/// been made; placement marks every cell before the first reveal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_bomb: bool,
    pub(crate) revealed: bool,
    pub(crate) placed: bool,
}

impl Cell {
    pub(crate) fn place_bomb(&mut self) {
        self.has_bomb = true;
        self.placed = true;
    }

    pub(crate) fn mark_placed(&mut self) {
        self.placed = true;
    }

    pub const fn has_bomb(self) -> bool {
        self.has_bomb
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_placed(self) -> bool {
        self.placed
    }
}
