//! Keyboard input collection for one rendered frame.

use core::Direction;
use macroquad::prelude::{KeyCode, is_key_pressed};

#[derive(Default)]
pub struct FrameInput {
    pub direction: Option<Direction>,
    pub toggle_pause: bool,
    pub new_game: bool,
}

pub fn capture_frame_input() -> FrameInput {
    FrameInput {
        direction: pressed_direction(),
        toggle_pause: is_key_pressed(KeyCode::Space),
        new_game: is_key_pressed(KeyCode::N),
    }
}

/// Last-pressed-wins is irrelevant here; macroquad reports edges per
/// frame and we take the first match in a fixed order.
fn pressed_direction() -> Option<Direction> {
    const BINDINGS: [(KeyCode, Direction); 8] = [
        (KeyCode::Up, Direction::Up),
        (KeyCode::W, Direction::Up),
        (KeyCode::Down, Direction::Down),
        (KeyCode::S, Direction::Down),
        (KeyCode::Left, Direction::Left),
        (KeyCode::A, Direction::Left),
        (KeyCode::Right, Direction::Right),
        (KeyCode::D, Direction::Right),
    ];

    BINDINGS.iter().find(|(key, _)| is_key_pressed(*key)).map(|(_, dir)| *dir)
}
