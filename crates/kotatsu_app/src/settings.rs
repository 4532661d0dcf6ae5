//! Installation configuration.
//!
//! Everything not listed here (controller numbers, palette, numeric ranges,
//! durations) is a fixed constant of the module that uses it.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::router::FallthroughPolicy;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 800;

/// Runtime settings for an [`Installation`](crate::Installation).
///
/// ```rust,ignore
/// let settings = InstallationSettings {
///     fallthrough: FallthroughPolicy::Single,
///     ..Default::default()
/// };
/// let mut installation = Installation::new(settings);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallationSettings {
    /// Period of the autoplay timer in milliseconds.
    pub autoplay_interval_ms: u64,
    /// How dice tables expand a roll.
    pub fallthrough: FallthroughPolicy,
}

impl Default for InstallationSettings {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            fallthrough: FallthroughPolicy::Cascade,
        }
    }
}

impl InstallationSettings {
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }
}
