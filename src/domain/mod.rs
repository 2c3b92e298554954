mod cell;
mod diff;
mod grid;
mod patterns;

pub use cell::Cell;
pub use diff::changed_cells;
pub use grid::{Grid, GridError};
pub use patterns::{Pattern, presets};
