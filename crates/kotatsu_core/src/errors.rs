//! Error Types
//!
//! This module defines the error types used throughout the installation.
//!
//! # Overview
//!
//! [`KotatsuError`] covers the failure modes of the core:
//! - actions dispatched before the scene graph is ready
//! - named nodes the scene graph provider did not deliver
//! - scene loading and MIDI device acquisition failures
//!
//! None of these are fatal. Callers log them and carry on with
//! "no visual effect" so the render loop is never interrupted.
//!
//! ```rust,ignore
//! use kotatsu_core::errors::{KotatsuError, Result};
//!
//! fn bind() -> Result<()> {
//!     Err(KotatsuError::NodeNotFound("tableTop".into()))
//! }
//! ```

use thiserror::Error;

/// The main error type for the installation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KotatsuError {
    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// An action was dispatched before the scene graph signalled readiness.
    #[error("Scene is not ready; action rejected")]
    SceneNotReady,

    /// A node the rig requires is missing from the scene graph.
    #[error("Scene node not found: {0}")]
    NodeNotFound(String),

    /// A node was expected to carry a light component but does not.
    #[error("Scene node is not a light: {0}")]
    NotALight(String),

    /// The scene graph provider failed to populate the scene.
    #[error("Scene load failed: {0}")]
    SceneLoad(String),

    // ========================================================================
    // Input Errors
    // ========================================================================
    /// No MIDI input device could be acquired.
    #[error("MIDI unavailable: {0}")]
    MidiUnavailable(String),
}

/// Alias for `Result<T, KotatsuError>`.
pub type Result<T> = std::result::Result<T, KotatsuError>;
