//! Platform-agnostic keyboard input.
//!
//! Platform adapters (e.g. the winit adapter behind the `winit` feature)
//! translate their native key events into [`Key`].

/// Keys the installation reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Key0,
    Key1,
    Key2,
    Key3,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    Key9,

    S,
    Z,
    Escape,
}
