//! Autoplay Scheduler Tests
//!
//! Tests for:
//! - Running/Stopped transitions and idempotent start/stop
//! - Tick accumulation against the fixed interval, one tick per frame at most
//! - Frame clock step capping and pacing
//! - Settings defaults and serde round trip

use std::time::Duration;

use kotatsu::app::{AutoplayScheduler, AutoplayState, FallthroughPolicy, InstallationSettings};
use kotatsu::core::FrameClock;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ============================================================================
// State machine
// ============================================================================

#[test]
fn scheduler_starts_stopped() {
    let scheduler = AutoplayScheduler::new(ms(800));
    assert_eq!(scheduler.state(), AutoplayState::Stopped);
    assert!(!scheduler.is_running());
}

#[test]
fn start_and_stop_are_idempotent() {
    let mut scheduler = AutoplayScheduler::new(ms(800));

    assert!(scheduler.start());
    assert!(!scheduler.start(), "start while running is a no-op");
    assert!(scheduler.is_running());

    assert!(scheduler.stop());
    assert!(!scheduler.stop(), "stop while stopped is a no-op");
    assert!(!scheduler.is_running());
}

#[test]
fn toggle_flips_state() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    assert_eq!(scheduler.toggle(), AutoplayState::Running);
    assert_eq!(scheduler.toggle(), AutoplayState::Stopped);
}

#[test]
fn set_running_follows_signal() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    assert!(scheduler.set_running(true));
    assert!(!scheduler.set_running(true));
    assert!(scheduler.set_running(false));
}

// ============================================================================
// Ticks
// ============================================================================

#[test]
fn stopped_scheduler_never_ticks() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    assert!(!scheduler.advance(ms(10_000)));
}

#[test]
fn ticks_once_per_interval() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    scheduler.start();

    assert!(!scheduler.advance(ms(799)));
    assert!(scheduler.advance(ms(1)));
    assert!(!scheduler.advance(ms(400)));
    assert!(scheduler.advance(ms(400)));
}

#[test]
fn long_frame_fires_single_tick_and_drops_backlog() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    scheduler.start();

    assert!(scheduler.advance(ms(2_500)));
    assert!(!scheduler.advance(Duration::ZERO), "missed intervals are not replayed");
    assert!(!scheduler.advance(ms(599)), "only the 100 ms remainder carries over");
    assert!(scheduler.advance(ms(1)));
}

#[test]
fn stall_of_minutes_yields_one_tick() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    scheduler.start();

    let fired = (0..10).filter(|_| scheduler.advance(ms(60_000))).count();
    assert_eq!(fired, 10, "one tick per frame however long the frame");
}

#[test]
fn restart_discards_partial_interval() {
    let mut scheduler = AutoplayScheduler::new(ms(800));
    scheduler.start();
    scheduler.advance(ms(700));
    scheduler.stop();
    scheduler.start();
    assert!(!scheduler.advance(ms(700)));
}

#[test]
fn zero_interval_is_clamped() {
    let scheduler = AutoplayScheduler::new(Duration::ZERO);
    assert_eq!(scheduler.interval(), ms(1));
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn settings_defaults() {
    let settings = InstallationSettings::default();
    assert_eq!(settings.autoplay_interval_ms, 800);
    assert_eq!(settings.autoplay_interval(), ms(800));
    assert_eq!(settings.fallthrough, FallthroughPolicy::Cascade);
}

#[test]
fn settings_deserialize_with_missing_fields() {
    let settings: InstallationSettings =
        serde_json::from_str(r#"{ "fallthrough": "single" }"#).unwrap();
    assert_eq!(settings.fallthrough, FallthroughPolicy::Single);
    assert_eq!(settings.autoplay_interval_ms, 800);
}

#[test]
fn settings_serialize_policy_in_snake_case() {
    let json = serde_json::to_value(InstallationSettings::default()).unwrap();
    assert_eq!(json["fallthrough"], "cascade");
    assert_eq!(json["autoplay_interval_ms"], 800);
}

// ============================================================================
// Frame clock
// ============================================================================

#[test]
fn frame_clock_budget_follows_rate() {
    let clock = FrameClock::new(50);
    assert_eq!(clock.frame(), ms(20));
    assert_eq!(FrameClock::new(0).frame(), ms(1_000), "zero rate is treated as one");
}

#[test]
fn frame_clock_caps_long_steps() {
    let mut clock = FrameClock::new(1_000).with_max_step(ms(2));
    std::thread::sleep(ms(10));
    assert_eq!(clock.tick(), ms(2));
    assert_eq!(clock.frame_count(), 1);
}

#[test]
fn frame_clock_pace_fills_frame_budget() {
    let mut clock = FrameClock::new(100);
    clock.tick();
    clock.pace();
    assert!(clock.tick() >= ms(10));
    assert_eq!(clock.frame_count(), 2);
}
