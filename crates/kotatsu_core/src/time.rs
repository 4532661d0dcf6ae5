use std::thread;
use std::time::{Duration, Instant};

/// Largest step handed to the installation after a stall.
pub const DEFAULT_MAX_STEP: Duration = Duration::from_millis(250);

/// Paced frame clock for loops that drive `Installation::update`.
///
/// [`FrameClock::tick`] returns the wall time since the previous tick,
/// capped at `max_step` so that a suspended process resumes with one
/// ordinary frame instead of minutes of tween and autoplay time.
/// [`FrameClock::pace`] sleeps out the rest of the frame budget.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    max_step: Duration,
    start: Instant,
    last_tick: Instant,
    frame_count: u64,
}

impl FrameClock {
    /// A clock targeting `frames_per_second`. Zero is treated as one.
    #[must_use]
    pub fn new(frames_per_second: u32) -> Self {
        let frame = Duration::from_secs(1) / frames_per_second.max(1);
        let now = Instant::now();
        Self {
            frame,
            max_step: DEFAULT_MAX_STEP.max(frame),
            start: now,
            last_tick: now,
            frame_count: 0,
        }
    }

    #[must_use]
    pub fn with_max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    #[must_use]
    pub fn frame(&self) -> Duration {
        self.frame
    }

    #[must_use]
    pub fn max_step(&self) -> Duration {
        self.max_step
    }

    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Starts a new frame and returns its step.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let raw = now - self.last_tick;
        self.last_tick = now;
        self.frame_count += 1;
        if raw > self.max_step {
            log::debug!("Frame step {raw:?} capped to {:?}", self.max_step);
        }
        raw.min(self.max_step)
    }

    /// Sleeps until the current frame has used its budget.
    pub fn pace(&self) {
        let spent = self.last_tick.elapsed();
        if let Some(rest) = self.frame.checked_sub(spent) {
            thread::sleep(rest);
        }
    }
}
