//! MIDI wire parsing and the input-port seam.
//!
//! A device backend pushes raw MIDI bytes into a [`MidiConnection`] from its
//! own callback thread; the event loop drains and parses them once per
//! update. [`VirtualMidiPort`] is the in-process backend, used by the demo
//! and the tests.

use flume::{Receiver, Sender, TrySendError};
use kotatsu_core::errors::{KotatsuError, Result};

const STATUS_NOTE_OFF: u8 = 0x80;
const STATUS_NOTE_ON: u8 = 0x90;
const STATUS_CONTROL_CHANGE: u8 = 0xB0;
const STATUS_PITCH_BEND: u8 = 0xE0;

const DATA_MAX: f32 = 127.0;
const PITCH_BEND_CENTER: i32 = 8192;

/// A decoded channel message with data normalized to floats.
///
/// Velocities and controller values are in `[0, 1]`; pitch bend is in
/// `[-1, 1]` with the wheel's rest position at exactly `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MidiMessage {
    NoteOn { channel: u8, note: u8, velocity: f32 },
    NoteOff { channel: u8, note: u8 },
    ControlChange { channel: u8, controller: u8, value: f32 },
    PitchBend { channel: u8, value: f32 },
}

impl MidiMessage {
    /// Decodes one channel message. Unsupported status bytes, running
    /// status and truncated or malformed data yield `None`.
    #[must_use]
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        let (&status, data) = bytes.split_first()?;
        if status & 0x80 == 0 {
            return None;
        }
        let channel = status & 0x0F;
        let data1 = *data.first()?;
        let data2 = *data.get(1)?;
        if data1 > 0x7F || data2 > 0x7F {
            return None;
        }

        match status & 0xF0 {
            STATUS_NOTE_ON if data2 == 0 => Some(Self::NoteOff {
                channel,
                note: data1,
            }),
            STATUS_NOTE_ON => Some(Self::NoteOn {
                channel,
                note: data1,
                velocity: f32::from(data2) / DATA_MAX,
            }),
            STATUS_NOTE_OFF => Some(Self::NoteOff {
                channel,
                note: data1,
            }),
            STATUS_CONTROL_CHANGE => Some(Self::ControlChange {
                channel,
                controller: data1,
                value: f32::from(data2) / DATA_MAX,
            }),
            STATUS_PITCH_BEND => {
                let raw = i32::from(data1) | (i32::from(data2) << 7);
                let offset = raw - PITCH_BEND_CENTER;
                // 8192 steps below the centre but only 8191 above it.
                let span = if offset < 0 { 8192.0 } else { 8191.0 };
                Some(Self::PitchBend {
                    channel,
                    value: offset as f32 / span,
                })
            }
            _ => None,
        }
    }
}

/// Receiving end of an open MIDI input port.
pub struct MidiConnection {
    name: String,
    receiver: Receiver<Vec<u8>>,
}

impl MidiConnection {
    #[must_use]
    pub fn new(name: impl Into<String>, receiver: Receiver<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            receiver,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parses every message received since the last drain.
    /// Unparseable packets are skipped.
    pub fn drain(&self) -> Vec<MidiMessage> {
        self.receiver
            .try_iter()
            .filter_map(|bytes| {
                let parsed = MidiMessage::parse(&bytes);
                if parsed.is_none() {
                    log::trace!("Ignoring MIDI packet {bytes:02X?}");
                }
                parsed
            })
            .collect()
    }

    /// True once every sender has been dropped and the queue is empty.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        self.receiver.is_disconnected() && self.receiver.is_empty()
    }
}

/// Acquires a MIDI input port.
pub trait MidiConnector {
    fn connect(&mut self) -> Result<MidiConnection>;
}

/// Connector for hosts without any MIDI backend; always reports the device
/// as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMidiDevice;

impl MidiConnector for NoMidiDevice {
    fn connect(&mut self) -> Result<MidiConnection> {
        Err(KotatsuError::MidiUnavailable(
            "no MIDI input devices detected".to_string(),
        ))
    }
}

/// In-process MIDI port fed through a [`MidiSender`].
///
/// The port can be connected once; later attempts report it as taken.
pub struct VirtualMidiPort {
    name: String,
    receiver: Option<Receiver<Vec<u8>>>,
}

impl VirtualMidiPort {
    /// Creates the port together with the handle that feeds it.
    #[must_use]
    pub fn new(name: impl Into<String>) -> (Self, MidiSender) {
        let (sender, receiver) = flume::unbounded();
        let port = Self {
            name: name.into(),
            receiver: Some(receiver),
        };
        (port, MidiSender { sender })
    }
}

impl MidiConnector for VirtualMidiPort {
    fn connect(&mut self) -> Result<MidiConnection> {
        let receiver = self.receiver.take().ok_or_else(|| {
            KotatsuError::MidiUnavailable(format!("port '{}' is already connected", self.name))
        })?;
        Ok(MidiConnection::new(self.name.clone(), receiver))
    }
}

/// Producer side of a [`VirtualMidiPort`]. Cheap to clone and `Send`.
#[derive(Clone)]
pub struct MidiSender {
    sender: Sender<Vec<u8>>,
}

impl MidiSender {
    /// Queues a raw packet. Returns `false` once the connection is gone.
    pub fn send_raw(&self, bytes: &[u8]) -> bool {
        match self.sender.try_send(bytes.to_vec()) {
            Ok(()) => true,
            Err(TrySendError::Disconnected(_) | TrySendError::Full(_)) => false,
        }
    }

    pub fn note_on(&self, channel: u8, note: u8, velocity: u8) -> bool {
        self.send_raw(&[STATUS_NOTE_ON | (channel & 0x0F), note & 0x7F, velocity & 0x7F])
    }

    pub fn note_off(&self, channel: u8, note: u8) -> bool {
        self.send_raw(&[STATUS_NOTE_OFF | (channel & 0x0F), note & 0x7F, 0])
    }

    pub fn control_change(&self, channel: u8, controller: u8, value: u8) -> bool {
        self.send_raw(&[
            STATUS_CONTROL_CHANGE | (channel & 0x0F),
            controller & 0x7F,
            value & 0x7F,
        ])
    }

    /// Sends a 14-bit bend, `0..=16383` with the rest position at 8192.
    pub fn pitch_bend(&self, channel: u8, raw: u16) -> bool {
        let raw = raw.min(0x3FFF);
        self.send_raw(&[
            STATUS_PITCH_BEND | (channel & 0x0F),
            (raw & 0x7F) as u8,
            (raw >> 7) as u8,
        ])
    }
}
