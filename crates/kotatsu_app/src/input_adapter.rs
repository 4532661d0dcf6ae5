//! Winit keyboard adapter.
//!
//! Translates winit key events into the installation's [`Key`] type.

use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::Key;

/// Converts a winit `PhysicalKey` into a [`Key`], if the installation
/// reacts to it.
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key = match code {
        KeyCode::Digit0 | KeyCode::Numpad0 => Key::Key0,
        KeyCode::Digit1 | KeyCode::Numpad1 => Key::Key1,
        KeyCode::Digit2 | KeyCode::Numpad2 => Key::Key2,
        KeyCode::Digit3 | KeyCode::Numpad3 => Key::Key3,
        KeyCode::Digit4 | KeyCode::Numpad4 => Key::Key4,
        KeyCode::Digit5 | KeyCode::Numpad5 => Key::Key5,
        KeyCode::Digit6 | KeyCode::Numpad6 => Key::Key6,
        KeyCode::Digit7 | KeyCode::Numpad7 => Key::Key7,
        KeyCode::Digit8 | KeyCode::Numpad8 => Key::Key8,
        KeyCode::Digit9 | KeyCode::Numpad9 => Key::Key9,

        KeyCode::KeyS => Key::S,
        KeyCode::KeyZ => Key::Z,
        KeyCode::Escape => Key::Escape,

        _ => return None,
    };

    Some(key)
}

/// The key of a fresh press in `event`. Releases and auto-repeats are
/// filtered out so holding a key fires its action once.
#[must_use]
pub fn pressed_key(event: &WindowEvent) -> Option<Key> {
    let WindowEvent::KeyboardInput {
        event:
            KeyEvent {
                physical_key,
                state: ElementState::Pressed,
                repeat: false,
                ..
            },
        ..
    } = event
    else {
        return None;
    };
    translate_key(*physical_key)
}
