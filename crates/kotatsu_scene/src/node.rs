use glam::Vec3;

use crate::light::Light;
use crate::transform::Transform;
use crate::{MaterialHandle, NodeHandle};

/// A named, transformable node.
///
/// Nodes are created once by the scene graph provider and never destroyed
/// during a session. Meshes carry a material; lights carry a [`Light`]
/// component; pure transform groups carry neither.
#[derive(Debug, Clone)]
pub struct SceneNode {
    pub name: String,

    // === Hierarchy ===
    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,
    pub material: Option<MaterialHandle>,
    pub light: Option<Light>,

    // === Load-time snapshots, used by reset ===
    pub(crate) initial_material: Option<MaterialHandle>,
    pub(crate) initial_position: Option<Vec3>,
}

impl SceneNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            material: None,
            light: None,
            initial_material: None,
            initial_position: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    /// Material captured when the scene finished loading.
    #[inline]
    #[must_use]
    pub fn initial_material(&self) -> Option<MaterialHandle> {
        self.initial_material
    }

    /// Position captured when the scene finished loading.
    #[inline]
    #[must_use]
    pub fn initial_position(&self) -> Option<Vec3> {
        self.initial_position
    }

    #[inline]
    #[must_use]
    pub fn is_mesh(&self) -> bool {
        self.material.is_some()
    }
}
