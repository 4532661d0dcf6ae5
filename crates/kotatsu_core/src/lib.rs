//! Foundational types shared by every Kotatsu crate.
//!
//! - [`errors`]: the [`KotatsuError`] type and [`Result`] alias
//! - [`random`]: the injectable [`RandomSource`] used by every randomized action
//! - [`time`]: a paced [`FrameClock`] for binaries driving the loop

pub mod errors;
pub mod random;
pub mod time;

pub use errors::{KotatsuError, Result};
pub use random::{RandomSource, ScriptedRandom, StdRandom};
pub use time::FrameClock;
