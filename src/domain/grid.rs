use std::fmt::{self, Write as _};
use std::str::FromStr;

use rand::Rng;
use rayon::prelude::*;
use thiserror::Error;

use super::Cell;

/// Errors raised when building a grid from caller input.
/// The transition engine itself is total and never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Grids must have at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{columns}")]
    ZeroSized { rows: usize, columns: usize },
    /// A parsed row did not match the width of the first row.
    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A parsed character was neither `#` nor `.`.
    #[error("unrecognized glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        row: usize,
        column: usize,
    },
}

/// Grid is one generation of the automaton: a fixed-size rectangular board
/// of cells addressed by (row, column).
///
/// A grid value is an immutable snapshot; [`Grid::next_generation`] reads it
/// and allocates the successor, so a generation in hand never changes under
/// the caller. Dimensions are validated at construction and invariant from
/// then on, which keeps every later index in bounds by construction.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::ZeroSized { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        })
    }

    /// Create a randomly seeded grid: each cell is drawn independently,
    /// alive with probability 1/2
    pub fn random(rows: usize, columns: usize) -> Result<Self, GridError> {
        Ok(Self::new(rows, columns)?.randomize())
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Convert (row, column) to an index into the row-major cell store
    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        (row < self.rows && column < self.columns)
            .then(|| self.cells[self.index(row, column)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: usize, column: usize, cell: Cell) {
        if row < self.rows && column < self.columns {
            let idx = self.index(row, column);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells among the up-to-eight neighbors of (row, column).
    ///
    /// Scans the full 3x3 block around the cell, adding every in-bounds
    /// state, then subtracts the center cell's own state. Edges are hard:
    /// offsets that leave the board contribute nothing, and nothing wraps
    /// to the opposite side. Row offsets are bounded by the row count and
    /// column offsets by the column count.
    pub fn live_neighbors(&self, row: usize, column: usize) -> u8 {
        debug_assert!(row < self.rows && column < self.columns);

        let mut count = 0u8;
        for dr in -1i64..=1 {
            for dc in -1i64..=1 {
                let r = row as i64 + dr;
                let c = column as i64 + dc;
                if r >= 0 && (r as usize) < self.rows && c >= 0 && (c as usize) < self.columns {
                    count += self.cells[self.index(r as usize, c as usize)].is_alive() as u8;
                }
            }
        }

        count - self.cells[self.index(row, column)].is_alive() as u8
    }

    /// Pure state transition: compute the next generation into a newly
    /// allocated grid of identical dimensions, leaving `self` untouched.
    /// Every cell's next state is a function of the current generation
    /// only, so all cells transition simultaneously.
    pub fn next_generation(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|row| (0..self.columns).map(move |column| (row, column)))
            .map(|(row, column)| {
                let current = self.cells[self.index(row, column)];
                current.next_state(self.live_neighbors(row, column))
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Parallel transition using rayon; output is identical to
    /// [`Grid::next_generation`] because each cell reads only the prior
    /// generation. Worth it for large boards.
    pub fn next_generation_par(&self) -> Self {
        let cells: Vec<Cell> = (0..self.rows)
            .into_par_iter()
            .flat_map(|row| (0..self.columns).into_par_iter().map(move |column| (row, column)))
            .map(|(row, column)| {
                let current = self.cells[self.index(row, column)];
                current.next_state(self.live_neighbors(row, column))
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Reseed every cell from the thread rng, alive with probability 1/2.
    /// Consumes the old generation; the simulation's reset semantics replace
    /// the board wholesale.
    pub fn randomize(self) -> Self {
        self.randomize_with(&mut rand::rng())
    }

    /// [`Grid::randomize`] with a caller-supplied rng, for reproducible seeding
    pub fn randomize_with<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
        self
    }

    /// Count live cells on the whole board
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// True when no cell is alive
    pub fn is_extinct(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_alive())
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |column| (row, column)))
            .map(|(row, column)| (row, column, self.cells[self.index(row, column)]))
    }
}

/// Parse a `#`/`.` text block, one line per row. Blank lines and leading or
/// trailing whitespace on a line are ignored, so indented literals in tests
/// parse cleanly. Ragged rows and unknown glyphs are rejected.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parsed: Vec<Vec<Cell>> = Vec::new();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            let mut cells = Vec::with_capacity(line.len());
            for (column, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(GridError::UnknownGlyph { glyph, row, column })?;
                cells.push(cell);
            }
            parsed.push(cells);
        }

        let rows = parsed.len();
        let columns = parsed.first().map_or(0, Vec::len);
        if rows == 0 || columns == 0 {
            return Err(GridError::ZeroSized { rows, columns });
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for (row, parsed_row) in parsed.into_iter().enumerate() {
            if parsed_row.len() != columns {
                return Err(GridError::RaggedRow {
                    row,
                    expected: columns,
                    found: parsed_row.len(),
                });
            }
            cells.extend(parsed_row);
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }
}

/// Render the board as rows of `#`/`.` glyphs, one line per row. This is
/// the terminal representation of a generation.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for column in 0..self.columns {
                f.write_char(self.cells[self.index(row, column)].glyph())?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn parse(text: &str) -> Grid {
        text.parse().expect("test literal should parse")
    }

    #[test]
    fn test_zero_sized_rejected() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::ZeroSized { rows: 0, columns: 10 })
        );
        assert_eq!(
            Grid::new(10, 0),
            Err(GridError::ZeroSized { rows: 10, columns: 0 })
        );
        assert!(Grid::random(0, 0).is_err());
    }

    #[test]
    fn test_new_grid_is_all_dead() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.dimensions(), (4, 7));
        assert_eq!(grid.count_alive(), 0);
        assert!(grid.is_extinct());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(5, 5).unwrap();

        grid.set(0, 0, Cell::Alive);
        grid.set(4, 4, Cell::Alive);
        assert_eq!(grid.get(0, 0), Some(Cell::Alive));
        assert_eq!(grid.get(4, 4), Some(Cell::Alive));
        assert_eq!(grid.get(2, 2), Some(Cell::Dead));

        // Out of bounds reads are None, writes are ignored.
        assert_eq!(grid.get(5, 0), None);
        assert_eq!(grid.get(0, 5), None);
        grid.set(9, 9, Cell::Alive);
        assert_eq!(grid.count_alive(), 2);
    }

    #[test]
    fn test_live_neighbors_blinker() {
        let grid = parse(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );

        // Center of the blinker sees its two flanks.
        assert_eq!(grid.live_neighbors(2, 2), 2);
        // Cells above and below the center see all three.
        assert_eq!(grid.live_neighbors(1, 2), 3);
        assert_eq!(grid.live_neighbors(3, 2), 3);
        // Ends see one.
        assert_eq!(grid.live_neighbors(2, 0), 1);
    }

    #[test]
    fn test_live_neighbors_corner_no_wraparound() {
        let grid = parse(
            "
            #..#
            ....
            ....
            #..#
            ",
        );

        // On a torus each corner would see the other three; with hard
        // edges the corners are mutually invisible.
        assert_eq!(grid.live_neighbors(0, 0), 0);
        assert_eq!(grid.live_neighbors(0, 3), 0);
        assert_eq!(grid.live_neighbors(3, 0), 0);
        assert_eq!(grid.live_neighbors(3, 3), 0);
    }

    #[test]
    fn test_neighbor_counts_on_non_square_grid() {
        // 3 rows x 8 columns; a bound check that compared column offsets
        // against the row count would miss everything past column 2.
        let grid = parse(
            "
            ......#.
            ......#.
            ........
            ",
        );

        assert_eq!(grid.live_neighbors(0, 7), 2);
        assert_eq!(grid.live_neighbors(1, 7), 2);
        assert_eq!(grid.live_neighbors(2, 7), 1);
        assert_eq!(grid.live_neighbors(2, 6), 1);
        assert_eq!(grid.live_neighbors(0, 5), 2);
    }

    #[test]
    fn test_next_generation_is_deterministic() {
        let grid = Grid::new(16, 16)
            .unwrap()
            .randomize_with(&mut StdRng::seed_from_u64(7));

        assert_eq!(grid.next_generation(), grid.next_generation());
    }

    #[test]
    fn test_next_generation_does_not_mutate_input() {
        let grid = Grid::new(12, 9)
            .unwrap()
            .randomize_with(&mut StdRng::seed_from_u64(11));
        let snapshot = grid.clone();

        let _ = grid.next_generation();
        assert_eq!(grid, snapshot);
    }

    #[test]
    fn test_all_dead_grid_is_fixed_point() {
        for (rows, columns) in [(1, 1), (3, 3), (4, 7), (25, 50)] {
            let grid = Grid::new(rows, columns).unwrap();
            let next = grid.next_generation();
            assert_eq!(next.dimensions(), (rows, columns));
            assert!(next.is_extinct());
        }
    }

    #[test]
    fn test_block_still_life() {
        let block = parse(
            "
            ....
            .##.
            .##.
            ....
            ",
        );

        assert_eq!(block.next_generation(), block);
    }

    #[test]
    fn test_birth_with_three_neighbors() {
        let grid = parse(
            "
            ##.
            #..
            ...
            ",
        );

        // The center has exactly the three live L cells as neighbors.
        let next = grid.next_generation();
        assert_eq!(next.get(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_lone_cell_dies() {
        for (row, column) in [(1, 1), (0, 0), (2, 2)] {
            let mut grid = Grid::new(3, 3).unwrap();
            grid.set(row, column, Cell::Alive);
            assert!(grid.next_generation().is_extinct());
        }
    }

    #[test]
    fn test_dimensions_preserved() {
        for (rows, columns) in [(1, 1), (2, 5), (5, 9), (25, 50)] {
            let grid = Grid::random(rows, columns).unwrap();
            let next = grid.next_generation();
            assert_eq!(next.dimensions(), (rows, columns));
            assert_eq!(next.rows(), rows);
            assert_eq!(next.columns(), columns);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let grid = Grid::new(32, 48)
            .unwrap()
            .randomize_with(&mut StdRng::seed_from_u64(42));

        assert_eq!(grid.next_generation(), grid.next_generation_par());
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = parse(
            "
            .....
            .....
            .###.
            .....
            .....
            ",
        );
        let vertical = parse(
            "
            .....
            ..#..
            ..#..
            ..#..
            .....
            ",
        );

        let step1 = horizontal.next_generation();
        assert_eq!(step1, vertical);
        assert_eq!(step1.next_generation(), horizontal);
    }

    #[test]
    fn test_random_seeding_density() {
        let grid = Grid::new(50, 50)
            .unwrap()
            .randomize_with(&mut StdRng::seed_from_u64(3));

        // Each cell is an independent coin flip; a seeded run lands well
        // within these bounds.
        let alive = grid.count_alive();
        assert!(alive > 1000 && alive < 1500, "alive = {alive}");
    }

    #[test]
    fn test_display_renders_glyph_rows() {
        let grid = parse(
            "
            .#.
            ..#
            ###
            ",
        );

        assert_eq!(grid.to_string(), ".#.\n..#\n###\n");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        let err = "###\n##\n###".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_unknown_glyphs() {
        let err = "..#\n.x#\n...".parse::<Grid>().unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownGlyph {
                glyph: 'x',
                row: 1,
                column: 1
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert_eq!(
            "".parse::<Grid>().unwrap_err(),
            GridError::ZeroSized { rows: 0, columns: 0 }
        );
        assert!("  \n\n  ".parse::<Grid>().is_err());
    }
}
