use macroquad::prelude::*;

use lifegrid::{
    Grid, Session, input, rendering,
    ui::{self, GRID_COLS, GRID_ROWS},
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ui::WINDOW_WIDTH as i32,
        window_height: ui::WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let grid = Grid::random(GRID_ROWS, GRID_COLS).expect("board dimensions are fixed and positive");
    let mut session = Session::new(grid).with_restart_on_death(true);
    let buttons = ui::create_buttons();

    loop {
        let mouse_pos = mouse_position();

        // Controls first, then time passes
        session = input::process_button_clicks(session, &buttons, mouse_pos);
        session = input::process_keyboard_input(session);
        session = session.tick(get_frame_time());

        clear_background(LIGHTGRAY);
        rendering::draw_grid(&session.grid);
        rendering::draw_controls(&session, &buttons, mouse_pos);

        next_frame().await;
    }
}
