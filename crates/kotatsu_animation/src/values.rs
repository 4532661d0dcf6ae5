use glam::Vec3;

pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    fn into_track_value(self) -> TrackValue;
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn into_track_value(self) -> TrackValue {
        TrackValue::Scalar(self)
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn into_track_value(self) -> TrackValue {
        TrackValue::Vector3(self)
    }
}

/// A sampled property value handed to an [`Animatable`](crate::Animatable) sink.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackValue {
    Scalar(f32),
    Vector3(Vec3),
}

impl TrackValue {
    #[must_use]
    pub fn as_scalar(self) -> Option<f32> {
        match self {
            TrackValue::Scalar(v) => Some(v),
            TrackValue::Vector3(_) => None,
        }
    }

    #[must_use]
    pub fn as_vec3(self) -> Option<Vec3> {
        match self {
            TrackValue::Vector3(v) => Some(v),
            TrackValue::Scalar(_) => None,
        }
    }
}
