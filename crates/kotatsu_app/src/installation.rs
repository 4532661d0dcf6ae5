//! The installation event loop facade.
//!
//! [`Installation`] wires the three input sources to the choreographer. The
//! host calls [`Installation::update`] once per frame; everything else
//! (keyboard, autoplay toggle, MIDI connection) is pushed in through the
//! methods below and handled to completion before returning.

use std::thread;
use std::time::Duration;

use flume::{Receiver, TryRecvError};
use kotatsu_core::errors::{KotatsuError, Result};
use kotatsu_core::random::{RandomSource, StdRandom};
use kotatsu_scene::{SceneGraphProvider, SceneModel};

use crate::autoplay::AutoplayScheduler;
use crate::choreographer::Choreographer;
use crate::input::Key;
use crate::midi::{MidiConnection, MidiConnector, MidiMessage};
use crate::router::{EventRouter, InputEvent};
use crate::settings::InstallationSettings;

pub struct Installation {
    settings: InstallationSettings,
    choreographer: Choreographer,
    router: EventRouter,
    autoplay: AutoplayScheduler,
    rng: Box<dyn RandomSource>,

    pending_scene: Option<Receiver<Result<SceneModel>>>,
    midi: Option<MidiConnection>,
}

impl Installation {
    #[must_use]
    pub fn new(settings: InstallationSettings) -> Self {
        Self::with_random(settings, Box::new(StdRandom::from_clock()))
    }

    /// Builds an installation that draws every random value from `rng`.
    #[must_use]
    pub fn with_random(settings: InstallationSettings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            router: EventRouter::new(settings.fallthrough),
            autoplay: AutoplayScheduler::new(settings.autoplay_interval()),
            choreographer: Choreographer::new(),
            rng,
            pending_scene: None,
            midi: None,
            settings,
        }
    }

    // ========================================================================
    // Scene loading
    // ========================================================================

    /// Populates a fresh scene on a loader thread.
    ///
    /// The result is picked up by a later [`Installation::update`]; until
    /// then every action is ignored.
    pub fn load_scene<P>(&mut self, mut provider: P)
    where
        P: SceneGraphProvider + Send + 'static,
    {
        let (tx, rx) = flume::bounded(1);
        let name = provider.name().to_string();
        log::info!("Loading scene from '{name}'");

        let spawned = thread::Builder::new()
            .name("scene-loader".into())
            .spawn(move || {
                let mut scene = SceneModel::new();
                let result = provider.populate(&mut scene).map(|()| scene);
                let _ = tx.send(result);
            });

        match spawned {
            Ok(_) => self.pending_scene = Some(rx),
            Err(e) => log::error!("Failed to spawn scene loader for '{name}': {e}"),
        }
    }

    /// Populates the scene on the calling thread and attaches it.
    pub fn load_scene_blocking(&mut self, provider: &mut dyn SceneGraphProvider) -> Result<()> {
        let mut scene = SceneModel::new();
        provider.populate(&mut scene)?;
        self.attach_scene(scene)
    }

    /// Hands a populated scene to the choreographer.
    pub fn attach_scene(&mut self, scene: SceneModel) -> Result<()> {
        self.pending_scene = None;
        self.choreographer.attach_scene(scene)
    }

    fn poll_scene(&mut self) {
        let Some(rx) = self.pending_scene.as_ref() else {
            return;
        };
        let outcome = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(KotatsuError::SceneLoad(
                "loader exited without a result".to_string(),
            )),
        };
        self.pending_scene = None;

        if let Err(e) = outcome.and_then(|scene| self.choreographer.attach_scene(scene)) {
            log::error!("Scene load failed: {e}");
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.pending_scene.is_some()
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.choreographer.is_ready()
    }

    // ========================================================================
    // Input sources
    // ========================================================================

    /// Opens a MIDI input through `connector`.
    ///
    /// Failure is logged and leaves keyboard and autoplay fully working.
    pub fn connect_midi(&mut self, connector: &mut dyn MidiConnector) -> bool {
        match connector.connect() {
            Ok(connection) => {
                log::info!("MIDI input '{}' connected", connection.name());
                self.midi = Some(connection);
                true
            }
            Err(e) => {
                log::warn!("MIDI unavailable, continuing without it: {e}");
                false
            }
        }
    }

    #[must_use]
    pub fn has_midi(&self) -> bool {
        self.midi.is_some()
    }

    pub fn handle_key(&mut self, key: Key) {
        self.dispatch(InputEvent::Key(key));
    }

    pub fn handle_midi(&mut self, message: MidiMessage) {
        self.dispatch(InputEvent::Midi(message));
    }

    /// Applies the autoplay start/stop signal. Repeating the current state
    /// is a no-op.
    pub fn set_autoplay(&mut self, running: bool) {
        self.autoplay.set_running(running);
    }

    #[must_use]
    pub fn autoplay(&self) -> &AutoplayScheduler {
        &self.autoplay
    }

    /// Routes one event and runs the resulting actions in order.
    pub fn dispatch(&mut self, event: InputEvent) {
        let actions = self.router.route(&event, self.rng.as_mut());
        if actions.is_empty() {
            log::trace!("No actions for {event:?}");
            return;
        }
        for action in actions {
            if self.choreographer.perform(action, self.rng.as_mut()).is_err() {
                // Not ready yet; the rest of the batch would be rejected too.
                break;
            }
        }
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Runs one frame: scene readiness, MIDI input, autoplay ticks, tweens.
    pub fn update(&mut self, dt: Duration) {
        self.poll_scene();

        if let Some(closed) = self.midi.take_if(|c| c.is_disconnected()) {
            log::warn!("MIDI input '{}' disconnected", closed.name());
        }
        let messages = self
            .midi
            .as_ref()
            .map(MidiConnection::drain)
            .unwrap_or_default();
        for message in messages {
            self.handle_midi(message);
        }

        if self.autoplay.advance(dt) {
            self.dispatch(InputEvent::AutoplayTick);
        }

        self.choreographer.advance(dt.as_secs_f32());
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn settings(&self) -> &InstallationSettings {
        &self.settings
    }

    #[must_use]
    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn choreographer_mut(&mut self) -> &mut Choreographer {
        &mut self.choreographer
    }

    #[must_use]
    pub fn router(&self) -> &EventRouter {
        &self.router
    }
}
