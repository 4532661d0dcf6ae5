//! Procedural tween engine.
//!
//! A deliberately small fire-and-forget primitive: [`AnimationEngine::animate`]
//! starts an eased interpolation of one property on one target, and
//! [`AnimationEngine::update`] advances every in-flight tween once per frame.
//! Retriggering the same `(target, property)` pair replaces the old tween.

pub mod binding;
pub mod easing;
pub mod engine;
pub mod tween;
pub mod values;

pub use binding::{Animatable, TargetPath};
pub use easing::Easing;
pub use engine::{AnimationEngine, FRAME_RATE};
pub use tween::Tween;
pub use values::{Interpolatable, TrackValue};
