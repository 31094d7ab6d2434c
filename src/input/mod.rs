use macroquad::prelude::*;

/// Cursor position while the left button is held, otherwise None.
/// Held, not just pressed this frame: dragging keeps painting.
pub fn pointer_press() -> Option<(f32, f32)> {
    is_mouse_button_down(MouseButton::Left).then(mouse_position)
}
