use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

use glam::Vec3;

/// Arc-rotate camera described in spherical coordinates around `target`.
///
/// - `alpha`: orbit angle around the vertical axis
/// - `beta`: elevation measured from the vertical axis
/// - `radius`: distance to `target`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    pub const DEFAULT_ALPHA: f32 = FRAC_PI_2;
    pub const DEFAULT_BETA: f32 = FRAC_PI_3;
    pub const DEFAULT_RADIUS: f32 = 5.0;

    #[must_use]
    pub fn new(alpha: f32, beta: f32, radius: f32) -> Self {
        Self {
            alpha,
            beta,
            radius,
            target: Vec3::ZERO,
        }
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        let sin_beta = self.beta.sin();
        self.target
            + Vec3::new(
                self.radius * self.alpha.cos() * sin_beta,
                self.radius * self.beta.cos(),
                self.radius * self.alpha.sin() * sin_beta,
            )
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ALPHA, Self::DEFAULT_BETA, Self::DEFAULT_RADIUS)
    }
}
