mod button;

pub use button::Button;

// Board dimensions for the windowed driver
pub const GRID_ROWS: usize = 25;
pub const GRID_COLS: usize = 50;

/// Cells are drawn as 20px squares on a 21px lattice step, leaving a
/// one-pixel gutter between neighbors
pub const CELL_SIZE: f32 = 20.0;
pub const CELL_STRIDE: f32 = CELL_SIZE + 1.0;

pub const BOARD_WIDTH: f32 = GRID_COLS as f32 * CELL_STRIDE;
pub const BOARD_HEIGHT: f32 = GRID_ROWS as f32 * CELL_STRIDE;

// Control bar below the board
pub const CONTROL_BAR_HEIGHT: f32 = 60.0;
pub const BUTTON_WIDTH: f32 = 120.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 20.0;

/// Total window size including the control bar
pub const WINDOW_WIDTH: f32 = BOARD_WIDTH;
pub const WINDOW_HEIGHT: f32 = BOARD_HEIGHT + CONTROL_BAR_HEIGHT;

/// Create the control bar buttons, centered under the board.
/// Click handling identifies buttons by their index in this list.
pub fn create_buttons() -> Vec<Button> {
    let y = BOARD_HEIGHT + (CONTROL_BAR_HEIGHT - BUTTON_HEIGHT) / 2.0;
    let total_width = 2.0 * BUTTON_WIDTH + BUTTON_GAP;
    let left = (BOARD_WIDTH - total_width) / 2.0;

    vec![
        Button::new(left, y, "Pause/Play"),
        Button::new(left + BUTTON_WIDTH + BUTTON_GAP, y, "Restart"),
    ]
}
