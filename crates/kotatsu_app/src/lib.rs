//! Input routing and action execution for the Kotatsu installation.
//!
//! - [`EventRouter`]: keyboard, MIDI and autoplay events to [`Action`]s
//! - [`Choreographer`]: runs actions against the scene and its tweens
//! - [`AutoplayScheduler`]: fixed-interval dice-roll timer
//! - [`midi`]: wire parsing and the [`MidiConnector`] device seam
//! - [`Installation`]: the per-frame facade tying it all together

pub mod action;
pub mod autoplay;
pub mod choreographer;
pub mod input;
#[cfg(feature = "winit")]
pub mod input_adapter;
pub mod installation;
pub mod midi;
pub mod router;
pub mod settings;

pub use action::Action;
pub use autoplay::{AutoplayScheduler, AutoplayState};
pub use choreographer::Choreographer;
pub use input::Key;
pub use installation::Installation;
pub use midi::{MidiConnection, MidiConnector, MidiMessage, MidiSender, NoMidiDevice, VirtualMidiPort};
pub use router::{ActionList, EventRouter, FallthroughPolicy, InputEvent};
pub use settings::InstallationSettings;
