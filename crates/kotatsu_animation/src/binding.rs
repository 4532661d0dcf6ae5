use crate::values::TrackValue;

/// Defines the target property a tween drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetPath {
    Position,  // Maps to transform.position
    Rotation,  // Maps to transform.rotation (Euler XYZ)
    Scale,     // Maps to transform.scale
    /// Maps to transform.rotation.y only. Keyed apart from `Rotation`, so a
    /// concurrent `Rotation` tween on the same node also writes `y`; the
    /// per-frame winner follows map iteration order and whichever finishes
    /// last sets the final value.
    RotationY,
    Intensity, // Maps to light.intensity
    OrbitAlpha,
    OrbitBeta,
    OrbitRadius,
}

/// Anything tweens can be written into.
///
/// Returns `false` when the target no longer exists or does not carry the
/// property, in which case the engine drops the tween.
pub trait Animatable<T> {
    fn write_property(&mut self, target: T, path: TargetPath, value: TrackValue) -> bool;
}
