use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub rows: usize,
    pub columns: usize,
    /// Relative (row, column) offsets of the live cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let columns = cells.iter().map(|(_, column)| *column).max().unwrap_or(0) + 1;
        Self {
            name,
            rows,
            columns,
            cells,
        }
    }

    /// Stamp the pattern onto a grid with its top-left corner at
    /// (row, column). Cells that fall off the board are dropped.
    pub fn stamp(&self, grid: &mut Grid, row: usize, column: usize) {
        for (dr, dc) in &self.cells {
            grid.set(row + dr, column + dc, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 0), (0, 1), (0, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }
}
