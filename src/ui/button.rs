use macroquad::prelude::*;

use super::{BUTTON_HEIGHT, BUTTON_WIDTH};

/// Idle fill, close to the flat grey of a stock desktop toolkit
/// button. The hover and press shades are derived from this base.
const IDLE_FILL: Color = Color::new(0.85, 0.85, 0.85, 1.0);

const LABEL_SIZE: f32 = 20.0;

/// A fixed-label push button for the control bar. All buttons take the
/// bar's standard size; construction only places them.
#[derive(Clone)]
pub struct Button {
    label: &'static str,
    bounds: Rect,
}

impl Button {
    pub fn new(x: f32, y: f32, label: &'static str) -> Self {
        Self {
            label,
            bounds: Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    fn contains(&self, (x, y): (f32, f32)) -> bool {
        self.bounds.contains(vec2(x, y))
    }

    /// Draw the button for the current mouse state. A held press
    /// darkens the fill and nudges the label down a pixel.
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let hovered = self.contains(mouse_pos);
        let pressed = hovered && is_mouse_button_down(MouseButton::Left);

        draw_rectangle(
            self.bounds.x,
            self.bounds.y,
            self.bounds.w,
            self.bounds.h,
            fill(hovered, pressed),
        );
        draw_rectangle_lines(
            self.bounds.x,
            self.bounds.y,
            self.bounds.w,
            self.bounds.h,
            2.0,
            DARKGRAY,
        );

        let metrics = measure_text(self.label, None, LABEL_SIZE as u16, 1.0);
        let nudge = if pressed { 1.0 } else { 0.0 };
        draw_text(
            self.label,
            self.bounds.x + (self.bounds.w - metrics.width) / 2.0 + nudge,
            self.bounds.y + (self.bounds.h + metrics.height) / 2.0 + nudge,
            LABEL_SIZE,
            BLACK,
        );
    }

    /// True on the frame the left mouse button goes down over this
    /// button
    pub fn clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.contains(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

/// Fill for an interaction state: the idle base, darkened a step on
/// hover and a step further while held down
fn fill(hovered: bool, pressed: bool) -> Color {
    let factor = if pressed {
        0.78
    } else if hovered {
        0.90
    } else {
        1.0
    };
    Color::new(
        IDLE_FILL.r * factor,
        IDLE_FILL.g * factor,
        IDLE_FILL.b * factor,
        IDLE_FILL.a,
    )
}
