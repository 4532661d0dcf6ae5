#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

//! # Kotatsu
//!
//! Input-to-animation dispatch engine for an interactive generative 3D
//! installation. Keyboard keys, MIDI controller messages and an autoplay
//! timer are normalized into a small action vocabulary that runs short
//! procedural tweens and flips alternating state on a two-model scene.
//!
//! ```rust,ignore
//! use kotatsu::prelude::*;
//!
//! let mut installation = Installation::new(InstallationSettings::default());
//! installation.load_scene(ProceduralProvider);
//! installation.set_autoplay(true);
//!
//! let mut clock = FrameClock::new(60);
//! loop {
//!     installation.update(clock.tick());
//!     clock.pace();
//! }
//! ```

pub use glam;
pub use kotatsu_animation as animation;
pub use kotatsu_app as app;
pub use kotatsu_core as core;
pub use kotatsu_scene as scene;

pub use kotatsu_animation::{AnimationEngine, Easing, FRAME_RATE, TargetPath};
pub use kotatsu_app::{
    Action, AutoplayScheduler, Choreographer, EventRouter, FallthroughPolicy, InputEvent,
    Installation, InstallationSettings, Key, MidiMessage,
};
pub use kotatsu_core::{
    FrameClock, KotatsuError, RandomSource, Result, ScriptedRandom, StdRandom,
};
pub use kotatsu_scene::{
    ActiveModel, ProceduralProvider, Rig, SceneGraphProvider, SceneModel, ToggleState,
};

pub mod prelude {
    pub use crate::{
        Action, ActiveModel, Easing, FallthroughPolicy, FrameClock, InputEvent, Installation,
        InstallationSettings, Key, KotatsuError, MidiMessage, ProceduralProvider, RandomSource,
        SceneGraphProvider, SceneModel, StdRandom,
    };
    pub use kotatsu_app::midi::{MidiConnector, MidiSender, VirtualMidiPort};
}
