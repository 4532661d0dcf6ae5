use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaterialKind {
    Standard { diffuse: Vec3 },
    Emissive { emissive: Vec3 },
    /// Debug material that shades by surface normal.
    NormalDebug,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
    pub wireframe: bool,
}

impl Material {
    #[must_use]
    pub fn standard(name: impl Into<String>, diffuse: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Standard { diffuse },
            wireframe: false,
        }
    }

    #[must_use]
    pub fn emissive(name: impl Into<String>, emissive: Vec3) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::Emissive { emissive },
            wireframe: false,
        }
    }

    #[must_use]
    pub fn normal_debug(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: MaterialKind::NormalDebug,
            wireframe: false,
        }
    }
}
