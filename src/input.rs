//! Keyboard handling outside of camera movement.

use winit::{event::ElementState, keyboard::KeyCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    /// `true` draws triangle edges only, `false` fills them again.
    Wireframe(bool),
}

/// Maps a key transition to an app-level action. Releases never trigger anything.
pub fn process_input(key: KeyCode, state: ElementState) -> Option<Action> {
    if !state.is_pressed() {
        return None;
    }
    match key {
        KeyCode::Escape => Some(Action::Exit),
        KeyCode::Digit1 => Some(Action::Wireframe(true)),
        KeyCode::Digit2 => Some(Action::Wireframe(false)),
        _ => None,
    }
}
