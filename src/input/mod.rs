use macroquad::prelude::*;

use crate::application::{ControlEvent, Session};
use crate::ui::Button;

/// Process keyboard input functionally
pub fn process_keyboard_input(session: Session) -> Session {
    type KeyAction = (KeyCode, fn(Session) -> Session);

    let actions: [KeyAction; 4] = [
        (KeyCode::Space, |s| s.handle(ControlEvent::PausePlay)),
        (KeyCode::R, |s| s.handle(ControlEvent::Restart)),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(session, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally.
/// Indices follow the order of [`crate::ui::create_buttons`]: the
/// pause/play toggle first, then restart.
pub fn process_button_clicks(
    session: Session,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) -> Session {
    buttons.iter().enumerate().fold(session, |s, (idx, btn)| {
        if !btn.clicked(mouse_pos) {
            return s;
        }
        match idx {
            0 => s.handle(ControlEvent::PausePlay),
            1 => s.handle(ControlEvent::Restart),
            _ => s,
        }
    })
}
