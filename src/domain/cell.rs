/// Cell is the fundamental unit of the simulation.
/// Each cell is either Dead or Alive; there is no other per-cell state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Dead,
    Alive,
}

impl Cell {
    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    /// Pure function computing the next state from the live-neighbor count:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn next_state(self, live_neighbors: u8) -> Self {
        match (self, live_neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Terminal glyph for this state: `#` alive, `.` dead
    pub const fn glyph(self) -> char {
        match self {
            Cell::Alive => '#',
            Cell::Dead => '.',
        }
    }

    /// Inverse of [`Cell::glyph`]; `None` for any other character
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Alive),
            '.' => Some(Cell::Dead),
            _ => None,
        }
    }
}
