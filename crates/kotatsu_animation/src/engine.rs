use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::binding::{Animatable, TargetPath};
use crate::easing::Easing;
use crate::tween::Tween;
use crate::values::Interpolatable;

/// Fixed frame rate that converts frame counts into seconds.
pub const FRAME_RATE: f32 = 60.0;

/// Fire-and-forget tween runner keyed by `(target, property)`.
///
/// Starting a tween on a pair that is already animating replaces the old
/// entry outright: the newest request wins. There is no queueing, priority
/// or completion callback.
pub struct AnimationEngine<T> {
    tweens: FxHashMap<(T, TargetPath), Tween>,
}

impl<T> Default for AnimationEngine<T>
where
    T: Copy + Eq + Hash + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AnimationEngine<T>
where
    T: Copy + Eq + Hash + Debug,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            tweens: FxHashMap::default(),
        }
    }

    /// Starts interpolating `path` on `target` from `from` to `to` over
    /// `duration_frames` frames at [`FRAME_RATE`].
    pub fn animate<V: Interpolatable>(
        &mut self,
        target: T,
        path: TargetPath,
        duration_frames: u32,
        from: V,
        to: V,
        easing: Easing,
    ) {
        let duration = duration_frames as f32 / FRAME_RATE;
        if self
            .tweens
            .insert((target, path), Tween::new(from, to, duration, easing))
            .is_some()
        {
            log::trace!("Tween on {target:?}/{path:?} superseded");
        }
    }

    /// Advances every tween by `dt` seconds and writes the sampled values.
    ///
    /// Finished tweens are written at their exact end value, then dropped.
    pub fn update<S: Animatable<T> + ?Sized>(&mut self, dt: f32, sink: &mut S) {
        self.tweens.retain(|&(target, path), tween| {
            tween.advance(dt);
            if !sink.write_property(target, path, tween.sample()) {
                log::debug!("Dropping tween on vanished target {target:?}/{path:?}");
                return false;
            }
            !tween.is_finished()
        });
    }

    /// Jumps every tween to its end value and clears the engine.
    pub fn finish_all<S: Animatable<T> + ?Sized>(&mut self, sink: &mut S) {
        for ((target, path), tween) in self.tweens.drain() {
            sink.write_property(target, path, tween.end_value());
        }
    }

    /// Drops the tween on `(target, path)` without writing anything.
    pub fn stop(&mut self, target: T, path: TargetPath) -> bool {
        self.tweens.remove(&(target, path)).is_some()
    }

    #[must_use]
    pub fn is_animating(&self, target: T, path: TargetPath) -> bool {
        self.tweens.contains_key(&(target, path))
    }

    #[must_use]
    pub fn tween(&self, target: T, path: TargetPath) -> Option<&Tween> {
        self.tweens.get(&(target, path))
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }

    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}
