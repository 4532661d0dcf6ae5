use glam::Vec3;

use crate::easing::Easing;
use crate::values::{Interpolatable, TrackValue};

/// One in-flight interpolation from `from` to `to`.
///
/// Both endpoints come from the same [`Interpolatable`] type, so they are
/// always the same [`TrackValue`] variant.
#[derive(Debug, Clone)]
pub struct Tween {
    from: TrackValue,
    to: TrackValue,
    pub duration: f32,
    pub time: f32,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new<V: Interpolatable>(from: V, to: V, duration: f32, easing: Easing) -> Self {
        Self {
            from: from.into_track_value(),
            to: to.into_track_value(),
            duration: duration.max(0.0),
            time: 0.0,
            easing,
        }
    }

    /// Advances local time, clamped to the duration.
    pub fn advance(&mut self, dt: f32) {
        self.time = (self.time + dt).min(self.duration);
    }

    /// Normalized progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration <= f32::EPSILON {
            1.0
        } else {
            (self.time / self.duration).clamp(0.0, 1.0)
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Eased value at the current time.
    #[must_use]
    pub fn sample(&self) -> TrackValue {
        if self.is_finished() {
            return self.to;
        }
        let t = self.easing.apply(self.progress());
        match (self.from, self.to) {
            (TrackValue::Scalar(a), TrackValue::Scalar(b)) => {
                TrackValue::Scalar(f32::interpolate_linear(a, b, t))
            }
            (TrackValue::Vector3(a), TrackValue::Vector3(b)) => {
                TrackValue::Vector3(Vec3::interpolate_linear(a, b, t))
            }
            _ => self.to,
        }
    }

    #[must_use]
    pub fn start_value(&self) -> TrackValue {
        self.from
    }

    #[must_use]
    pub fn end_value(&self) -> TrackValue {
        self.to
    }
}
