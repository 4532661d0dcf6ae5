//! Headless Show
//!
//! Runs the installation without a window: the procedural rig is loaded on
//! the loader thread, autoplay drives the choreography, and a scripted
//! performer plays a short phrase into a virtual MIDI port.
//!
//! Usage: `headless_show [seconds] [settings.json]`

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;

use kotatsu::app::router::{CC_GATE, CC_TOUCH_DOWN, CC_TOUCH_X, CC_TOUCH_Y};
use kotatsu::prelude::*;

fn load_settings(path: Option<&str>) -> anyhow::Result<InstallationSettings> {
    let Some(path) = path else {
        return Ok(InstallationSettings::default());
    };
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

/// Plays a fixed phrase: a few notes, a touch-pad gesture, a gate pulse
/// and a pitch-bend sweep back to rest.
fn perform(sender: MidiSender) {
    let beat = Duration::from_millis(450);
    for note in [36, 38, 42, 45] {
        sender.note_on(0, note, 100);
        thread::sleep(beat);
        sender.note_off(0, note);
    }

    sender.control_change(0, CC_TOUCH_X, 20);
    sender.control_change(0, CC_TOUCH_Y, 110);
    sender.control_change(0, CC_TOUCH_DOWN, 127);
    thread::sleep(beat);

    sender.control_change(0, CC_GATE, 127);
    thread::sleep(beat);
    sender.control_change(0, CC_GATE, 0);

    for raw in (0..=16_383_u16).step_by(2048) {
        sender.pitch_bend(0, raw);
        thread::sleep(Duration::from_millis(60));
    }
    sender.pitch_bend(0, 8192);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seconds: u64 = match args.next() {
        Some(arg) => arg.parse().with_context(|| format!("invalid duration '{arg}'"))?,
        None => 10,
    };
    let settings = load_settings(args.next().as_deref())?;
    log::info!("Settings: {}", serde_json::to_string(&settings)?);

    let mut installation = Installation::new(settings);
    installation.load_scene(ProceduralProvider);

    let (mut port, sender) = VirtualMidiPort::new("headless-performer");
    if installation.connect_midi(&mut port) {
        thread::Builder::new()
            .name("performer".into())
            .spawn(move || perform(sender))
            .context("spawning performer thread")?;
    }
    installation.set_autoplay(true);

    let deadline = Instant::now() + Duration::from_secs(seconds);
    let mut clock = FrameClock::new(60);
    let mut last_report = Instant::now();

    while Instant::now() < deadline {
        installation.update(clock.tick());

        if last_report.elapsed() >= Duration::from_secs(1) {
            last_report = Instant::now();
            let choreographer = installation.choreographer();
            if let Some(scene) = choreographer.scene() {
                log::info!(
                    "frame {:>5} | palette {} | model {:?} | tweens {:>2} | camera a={:.2} b={:.2} r={:.2}",
                    clock.frame_count(),
                    choreographer.palette_index(),
                    choreographer.active_model(),
                    choreographer.animator().active_count(),
                    scene.camera.alpha,
                    scene.camera.beta,
                    scene.camera.radius,
                );
            }
        }

        clock.pace();
    }

    installation.set_autoplay(false);
    installation.choreographer_mut().settle();

    let choreographer = installation.choreographer();
    let summary = serde_json::json!({
        "ready": choreographer.is_ready(),
        "palette_index": choreographer.palette_index(),
        "zoom_index": choreographer.zoom_index(),
        "active_model": format!("{:?}", choreographer.active_model()),
        "kotatsu_flags": choreographer.toggles(ActiveModel::Kotatsu).map(|f| format!("{f:?}")),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
