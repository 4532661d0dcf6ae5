use std::time::Duration;

/// Whether the autoplay timer is firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayState {
    #[default]
    Stopped,
    Running,
}

/// Fixed-interval timer that produces autoplay ticks.
///
/// The scheduler does not own a thread: the event loop feeds it frame time
/// through [`AutoplayScheduler::advance`] and dispatches an
/// `AutoplayTick` whenever an interval has elapsed. Starting while running
/// and stopping while stopped are no-ops.
#[derive(Debug, Clone)]
pub struct AutoplayScheduler {
    interval: Duration,
    state: AutoplayState,
    accumulated: Duration,
}

impl AutoplayScheduler {
    /// A zero `interval` is raised to one millisecond.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            state: AutoplayState::Stopped,
            accumulated: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == AutoplayState::Running
    }

    /// Starts the timer. Returns `false` if it was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = AutoplayState::Running;
        self.accumulated = Duration::ZERO;
        log::info!("Autoplay started ({} ms)", self.interval.as_millis());
        true
    }

    /// Stops the timer. Returns `false` if it was already stopped.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.state = AutoplayState::Stopped;
        self.accumulated = Duration::ZERO;
        log::info!("Autoplay stopped");
        true
    }

    /// Applies the start/stop signal from the UI.
    pub fn set_running(&mut self, running: bool) -> bool {
        if running { self.start() } else { self.stop() }
    }

    pub fn toggle(&mut self) -> AutoplayState {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
        self.state
    }

    /// Feeds `dt` of wall time and reports whether a tick is due.
    ///
    /// At most one tick fires per call. Whole intervals missed during a
    /// long frame are dropped and only the partial remainder carries over.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if !self.is_running() {
            return false;
        }
        self.accumulated += dt;
        if self.accumulated < self.interval {
            return false;
        }
        let missed = self.accumulated.as_nanos() / self.interval.as_nanos();
        if missed > 1 {
            log::debug!("Autoplay dropped {} missed ticks", missed - 1);
        }
        let remainder = self.accumulated.as_nanos() % self.interval.as_nanos();
        self.accumulated = Duration::from_nanos(u64::try_from(remainder).unwrap_or(0));
        true
    }
}
