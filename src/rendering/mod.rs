use macroquad::prelude::*;

use crate::application::{RunState, Session};
use crate::domain::Grid;
use crate::ui::{BOARD_HEIGHT, Button, CELL_SIZE, CELL_STRIDE, CONTROL_BAR_HEIGHT, WINDOW_WIDTH};

/// Draw the board as a lattice of filled squares, black for live cells
/// and white for dead ones. The one-pixel gutter between squares is the
/// background showing through.
pub fn draw_grid(grid: &Grid) {
    for (row, column, cell) in grid.iter_cells() {
        let x = column as f32 * CELL_STRIDE;
        let y = row as f32 * CELL_STRIDE;
        let color = if cell.is_alive() { BLACK } else { WHITE };
        draw_rectangle(x, y, CELL_SIZE, CELL_SIZE, color);
    }
}

/// Draw the control bar: buttons plus the session readout
pub fn draw_controls(session: &Session, buttons: &[Button], mouse_pos: (f32, f32)) {
    draw_rectangle(
        0.0,
        BOARD_HEIGHT,
        WINDOW_WIDTH,
        CONTROL_BAR_HEIGHT,
        Color::from_rgba(240, 240, 240, 255),
    );

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (status, status_color) = match session.run_state {
        RunState::Running => ("Running", DARKGREEN),
        RunState::Paused => ("Paused", Color::from_rgba(200, 120, 0, 255)),
    };

    let upper = BOARD_HEIGHT + 26.0;
    let lower = BOARD_HEIGHT + 48.0;
    let right = WINDOW_WIDTH - 170.0;

    // Define all labels declaratively
    let labels: [(String, f32, f32, f32, Color); 4] = [
        (
            format!("Generation: {}", session.generation),
            20.0,
            upper,
            18.0,
            BLACK,
        ),
        (
            format!("Population: {}", session.grid.count_alive()),
            20.0,
            lower,
            14.0,
            DARKGRAY,
        ),
        (status.to_string(), right, upper, 18.0, status_color),
        (
            format!("{:.0} gen/s", session.updates_per_second),
            right,
            lower,
            14.0,
            DARKGRAY,
        ),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}
