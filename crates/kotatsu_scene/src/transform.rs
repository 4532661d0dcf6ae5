use glam::{Affine3A, EulerRot, Quat, Vec3};

/// Local TRS of a scene node.
///
/// Rotation is kept as Euler angles (XYZ, radians) because actions animate
/// individual axes past `2π` (the tabletop spins to `3π`), which a
/// quaternion would fold away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    #[must_use]
    pub fn new() -> Self {
        Self::IDENTITY
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Rotation as a quaternion, for renderers.
    #[must_use]
    pub fn quaternion(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    #[must_use]
    pub fn local_matrix(&self) -> Affine3A {
        Affine3A::from_scale_rotation_translation(self.scale, self.quaternion(), self.position)
    }

    #[must_use]
    pub fn is_identity(&self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(Vec3::ZERO, epsilon)
            && self.rotation.abs_diff_eq(Vec3::ZERO, epsilon)
            && self.scale.abs_diff_eq(Vec3::ONE, epsilon)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
