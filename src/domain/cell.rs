/// Cell represents the state of one position in the grid.
/// Position is implicit: a cell is identified by where the grid stores it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    /// Pure function to compute the next state (B3/S23):
    /// 1. Live cell with fewer than 2 or more than 3 neighbors dies
    /// 2. Live cell with 2-3 neighbors survives
    /// 3. Dead cell with exactly 3 neighbors becomes alive
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}
