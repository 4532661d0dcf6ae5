//! Normalizes keyboard, MIDI and autoplay events into [`Action`]s.
//!
//! The router is pure with respect to the scene: it only keeps the small
//! amount of input state it needs (touch-pad position and gate level) and
//! returns the actions to run, in order. Unrecognized input yields an empty
//! list.

use std::f32::consts::{FRAC_PI_4, PI};

use glam::Vec2;
use kotatsu_core::random::RandomSource;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::action::Action;
use crate::input::Key;
use crate::midi::MidiMessage;

pub const CC_TOUCH_X: u8 = 12;
pub const CC_TOUCH_Y: u8 = 13;
pub const CC_TOUCH_DOWN: u8 = 92;
pub const CC_GATE: u8 = 79;
pub const CC_VELOCITY: u8 = 47;

/// Note groups are selected by `note % NOTE_GROUPS`.
pub const NOTE_GROUPS: u8 = 8;
/// This exact note switches models instead of running its group.
pub const MODEL_SWITCH_NOTE: u8 = 5;

/// Elevation used when the pitch wheel sits exactly at rest.
pub const PITCH_REST_ELEVATION: f32 = FRAC_PI_4;

/// Actions produced by one event.
pub type ActionList = SmallVec<[Action; 8]>;

/// One raw input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(Key),
    Midi(MidiMessage),
    AutoplayTick,
}

/// How a dice table expands the selected index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallthroughPolicy {
    /// Run the selected entry and every following entry until one that does
    /// not fall through.
    #[default]
    Cascade,
    /// Run only the selected entry.
    Single,
}

struct TableEntry {
    actions: &'static [Action],
    falls_through: bool,
}

const fn entry(actions: &'static [Action], falls_through: bool) -> TableEntry {
    TableEntry {
        actions,
        falls_through,
    }
}

/// Touch-down quadrants: top-left, top-right, bottom-left, bottom-right.
const QUADRANT_TABLE: [TableEntry; 4] = [
    entry(&[Action::ChangePalette], true),
    entry(&[Action::Dissolve], false),
    entry(&[Action::ChangeMaterials { wireframe: false }], false),
    entry(&[Action::MoveCamera], false),
];

const GATE_TABLE: [TableEntry; 5] = [
    entry(&[Action::MoveCamera], true),
    entry(&[Action::Dissolve, Action::ZoomToSubmesh], true),
    entry(&[Action::RotateTabletop, Action::ZoomToSubmesh], true),
    entry(&[Action::ChangeMaterials { wireframe: false }], true),
    entry(&[Action::ChangePalette], true),
];

const AUTOPLAY_TABLE: [TableEntry; 5] = [
    entry(&[Action::MoveCamera], true),
    entry(&[Action::Dissolve], true),
    entry(&[Action::RotateTabletop], true),
    entry(&[Action::ChangeMaterials { wireframe: false }], true),
    entry(&[Action::ChangeMaterials { wireframe: true }], true),
];

const NOTE_TABLE: [&[Action]; NOTE_GROUPS as usize] = [
    &[Action::ChangePalette],
    &[Action::MoveCamera],
    &[Action::Heat, Action::ZoomToSubmesh],
    &[Action::Dissolve, Action::ZoomToSubmesh],
    &[Action::RotateTabletop, Action::ZoomToSubmesh],
    &[Action::ChangeMaterials { wireframe: false }],
    &[Action::ChangeMaterials { wireframe: true }],
    &[Action::Reset],
];

/// Actions fired on every autoplay tick before the dice roll.
const AUTOPLAY_BASE: [Action; 3] = [Action::Heat, Action::Bounce, Action::ChangePalette];

pub struct EventRouter {
    policy: FallthroughPolicy,
    touch: Vec2,
    gate_high: bool,
}

impl Default for EventRouter {
    fn default() -> Self {
        Self::new(FallthroughPolicy::default())
    }
}

impl EventRouter {
    #[must_use]
    pub fn new(policy: FallthroughPolicy) -> Self {
        Self {
            policy,
            touch: Vec2::ZERO,
            gate_high: false,
        }
    }

    #[must_use]
    pub fn policy(&self) -> FallthroughPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: FallthroughPolicy) {
        self.policy = policy;
    }

    /// Last reported touch-pad position, both axes in `[0, 1]`.
    #[must_use]
    pub fn touch(&self) -> Vec2 {
        self.touch
    }

    /// Maps one event to the actions it triggers. Dice rolls draw from `rng`.
    pub fn route(&mut self, event: &InputEvent, rng: &mut dyn RandomSource) -> ActionList {
        match *event {
            InputEvent::Key(key) => route_key(key),
            InputEvent::Midi(message) => self.route_midi(message, rng),
            InputEvent::AutoplayTick => self.route_autoplay(rng),
        }
    }

    fn route_midi(&mut self, message: MidiMessage, rng: &mut dyn RandomSource) -> ActionList {
        match message {
            MidiMessage::NoteOn { note, velocity, .. } => route_note_on(note, velocity),
            MidiMessage::NoteOff { .. } => smallvec![Action::ScaleFromVelocity(0.0)],
            MidiMessage::ControlChange {
                controller, value, ..
            } => self.route_control_change(controller, value, rng),
            MidiMessage::PitchBend { value, .. } => {
                smallvec![Action::SetCameraElevation(elevation_from_bend(value))]
            }
        }
    }

    fn route_control_change(
        &mut self,
        controller: u8,
        value: f32,
        rng: &mut dyn RandomSource,
    ) -> ActionList {
        match controller {
            CC_TOUCH_X => {
                self.touch.x = value;
                smallvec![Action::SetCameraElevation(value * PI)]
            }
            CC_TOUCH_Y => {
                self.touch.y = value;
                smallvec![Action::FloatFuton(value)]
            }
            CC_TOUCH_DOWN if value >= 1.0 => {
                let quadrant = quadrant_of(self.touch);
                log::debug!("Touch-down at {:?} -> quadrant {quadrant}", self.touch);
                expand(&QUADRANT_TABLE, quadrant, self.policy)
            }
            CC_GATE => {
                let high = value >= 1.0;
                let rising = high && !self.gate_high;
                self.gate_high = high;
                if !rising {
                    return ActionList::new();
                }
                let mut actions: ActionList = smallvec![Action::Heat];
                let pick = rng.index(GATE_TABLE.len());
                actions.extend(expand(&GATE_TABLE, pick, self.policy));
                actions
            }
            CC_VELOCITY => smallvec![Action::ScaleFromVelocity(value)],
            _ => ActionList::new(),
        }
    }

    fn route_autoplay(&self, rng: &mut dyn RandomSource) -> ActionList {
        let mut actions: ActionList = AUTOPLAY_BASE.iter().copied().collect();
        let pick = rng.index(AUTOPLAY_TABLE.len());
        actions.extend(expand(&AUTOPLAY_TABLE, pick, self.policy));
        actions
    }
}

fn route_key(key: Key) -> ActionList {
    match key {
        Key::Key1 => smallvec![Action::ChangePalette],
        Key::Key2 => smallvec![Action::MoveCamera],
        Key::Key3 => smallvec![Action::Heat],
        Key::Key4 => smallvec![Action::Dissolve],
        Key::Key5 => smallvec![Action::RotateTabletop],
        Key::Key6 => smallvec![Action::ChangeMaterials { wireframe: false }],
        Key::Key7 => smallvec![Action::ChangeMaterials { wireframe: true }],
        Key::Key8 => smallvec![Action::Bounce],
        Key::Z => smallvec![Action::ZoomToSubmesh],
        Key::S => smallvec![Action::Reset, Action::ChangeModel],
        Key::Escape => smallvec![Action::Reset],
        Key::Key0 | Key::Key9 => ActionList::new(),
    }
}

fn route_note_on(note: u8, velocity: f32) -> ActionList {
    let mut actions: ActionList = smallvec![Action::ScaleFromVelocity(velocity)];
    if note == MODEL_SWITCH_NOTE {
        actions.extend([Action::Reset, Action::ChangeModel]);
    } else {
        let group = usize::from(note % NOTE_GROUPS);
        actions.extend(NOTE_TABLE[group].iter().copied());
    }
    actions
}

/// Quadrant index into the touch-down table. Top means `y > 0.5`, left
/// means `x < 0.5`.
#[must_use]
pub fn quadrant_of(touch: Vec2) -> usize {
    let top = touch.y > 0.5;
    let left = touch.x < 0.5;
    match (top, left) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

/// Camera elevation for a bend value in `[-1, 1]`, within `[0, π)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn elevation_from_bend(value: f32) -> f32 {
    if value == 0.0 {
        return PITCH_REST_ELEVATION;
    }
    let beta = (value.clamp(-1.0, 1.0) + 1.0) / 2.0 * PI;
    beta.min(PI.next_down())
}

fn expand(table: &[TableEntry], start: usize, policy: FallthroughPolicy) -> ActionList {
    let mut actions = ActionList::new();
    for entry in table.iter().skip(start) {
        actions.extend(entry.actions.iter().copied());
        if policy == FallthroughPolicy::Single || !entry.falls_through {
            break;
        }
    }
    actions
}
