use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Point,
    Spot { direction: Vec3, angle: f32, exponent: f32 },
    Hemispheric { direction: Vec3 },
}

/// Light component attached to a scene node.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub color: Vec3,
    pub intensity: f32,
    pub enabled: bool,
}

impl Light {
    #[must_use]
    pub fn new_point(color: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Point,
            color,
            intensity,
            enabled: true,
        }
    }

    #[must_use]
    pub fn new_spot(color: Vec3, intensity: f32, direction: Vec3, angle: f32, exponent: f32) -> Self {
        Self {
            kind: LightKind::Spot {
                direction,
                angle,
                exponent,
            },
            color,
            intensity,
            enabled: true,
        }
    }

    #[must_use]
    pub fn new_hemispheric(direction: Vec3, intensity: f32) -> Self {
        Self {
            kind: LightKind::Hemispheric { direction },
            color: Vec3::ONE,
            intensity,
            enabled: true,
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}
