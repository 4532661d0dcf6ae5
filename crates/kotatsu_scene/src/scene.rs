use glam::Vec4;
use kotatsu_animation::{Animatable, AnimationEngine, TargetPath, TrackValue};
use kotatsu_core::errors::{KotatsuError, Result};
use rustc_hash::FxHashMap;
use slotmap::{SecondaryMap, SlotMap};

use crate::camera::OrbitCamera;
use crate::light::Light;
use crate::material::Material;
use crate::node::SceneNode;
use crate::toggle::ToggleState;
use crate::transform::Transform;
use crate::{MaterialHandle, NodeHandle};

/// What a tween can drive: a node property or the orbit camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimTarget {
    Node(NodeHandle),
    Camera,
}

/// Tween engine specialised to the scene model.
pub type SceneAnimator = AnimationEngine<AnimTarget>;

/// Named node hierarchy plus the scene-level state actions touch.
///
/// The scene graph provider populates it through the narrow API below
/// (`create_node`, `attach`, `set_material`, `set_enabled`, ...), then the
/// owner calls [`SceneModel::mark_ready`]. Until then nothing may dispatch
/// actions against it.
pub struct SceneModel {
    nodes: SlotMap<NodeHandle, SceneNode>,
    root_nodes: Vec<NodeHandle>,
    names: FxHashMap<String, NodeHandle>,

    materials: SlotMap<MaterialHandle, Material>,
    toggles: SecondaryMap<NodeHandle, ToggleState>,

    pub camera: OrbitCamera,
    pub background: Vec4,

    ready: bool,
}

impl Default for SceneModel {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneModel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
            names: FxHashMap::default(),
            materials: SlotMap::with_key(),
            toggles: SecondaryMap::new(),
            camera: OrbitCamera::default(),
            background: Vec4::new(0.0, 0.0, 0.0, 1.0),
            ready: false,
        }
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    fn insert(&mut self, node: SceneNode) -> NodeHandle {
        let name = node.name.clone();
        let handle = self.nodes.insert(node);
        if let Some(previous) = self.names.insert(name.clone(), handle) {
            log::warn!("Duplicate node name '{name}', shadowing {previous:?}");
        }
        handle
    }

    /// Adds a root-level node.
    pub fn create_node(&mut self, name: &str) -> NodeHandle {
        let handle = self.insert(SceneNode::new(name));
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node under `parent`.
    pub fn create_child(&mut self, name: &str, parent: NodeHandle) -> NodeHandle {
        let handle = self.create_node(name);
        self.attach(handle, parent);
        handle
    }

    /// Adds a node carrying a light component, optionally under `parent`.
    pub fn add_light(&mut self, name: &str, light: Light, parent: Option<NodeHandle>) -> NodeHandle {
        let handle = self.create_node(name);
        if let Some(node) = self.nodes.get_mut(handle) {
            node.light = Some(light);
        }
        if let Some(parent) = parent {
            self.attach(handle, parent);
        }
        handle
    }

    /// Re-parents `child` under `parent`, detaching it from its old parent.
    ///
    /// Attaching a node under itself or under one of its own descendants is
    /// rejected so the hierarchy stays a forest.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            log::error!("attach: unknown node {child:?} or parent {parent:?}");
            return;
        }
        if self.is_ancestor(child, parent) {
            log::warn!("attach: {child:?} is an ancestor of {parent:?}, ignoring");
            return;
        }

        // 1. Detach from old
        let old_parent = self.nodes.get(child).and_then(|n| n.parent);
        if let Some(p) = old_parent {
            if let Some(n) = self.nodes.get_mut(p) {
                n.children.retain(|&c| c != child);
            }
        } else {
            self.root_nodes.retain(|&r| r != child);
        }

        // 2. Attach to new
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    /// Whether `ancestor` appears on the parent chain above `node`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = self.nodes.get(node).and_then(|n| n.parent);
        while let Some(handle) = current {
            if handle == ancestor {
                return true;
            }
            current = self.nodes.get(handle).and_then(|n| n.parent);
        }
        false
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&SceneNode> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut SceneNode> {
        self.nodes.get_mut(handle)
    }

    #[must_use]
    pub fn node_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.names.get(name).copied()
    }

    /// Like [`SceneModel::node_by_name`] but reports the missing name.
    pub fn require(&self, name: &str) -> Result<NodeHandle> {
        self.node_by_name(name)
            .ok_or_else(|| KotatsuError::NodeNotFound(name.to_string()))
    }

    #[must_use]
    pub fn name(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(handle).map(|n| n.name.as_str())
    }

    #[must_use]
    pub fn root_nodes(&self) -> &[NodeHandle] {
        &self.root_nodes
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// All nodes below `root` in depth-first order, `root` excluded.
    #[must_use]
    pub fn descendants(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeHandle> = self
            .nodes
            .get(root)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();

        while let Some(handle) = stack.pop() {
            if let Some(node) = self.nodes.get(handle) {
                out.push(handle);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    /// Descendants of `root` that carry a material.
    #[must_use]
    pub fn meshes_under(&self, root: NodeHandle) -> Vec<NodeHandle> {
        self.descendants(root)
            .into_iter()
            .filter(|&h| self.nodes.get(h).is_some_and(SceneNode::is_mesh))
            .collect()
    }

    // ========================================================================
    // Transforms
    // ========================================================================

    #[must_use]
    pub fn transform(&self, handle: NodeHandle) -> Option<&Transform> {
        self.nodes.get(handle).map(|n| &n.transform)
    }

    pub fn transform_mut(&mut self, handle: NodeHandle) -> Option<&mut Transform> {
        self.nodes.get_mut(handle).map(|n| &mut n.transform)
    }

    /// Current transform, or identity for a stale handle.
    #[must_use]
    pub fn transform_or_identity(&self, handle: NodeHandle) -> Transform {
        self.transform(handle).copied().unwrap_or_default()
    }

    // ========================================================================
    // Materials
    // ========================================================================

    pub fn add_material(&mut self, material: Material) -> MaterialHandle {
        self.materials.insert(material)
    }

    #[must_use]
    pub fn material(&self, handle: MaterialHandle) -> Option<&Material> {
        self.materials.get(handle)
    }

    pub fn material_mut(&mut self, handle: MaterialHandle) -> Option<&mut Material> {
        self.materials.get_mut(handle)
    }

    /// Duplicates the node's current material into a fresh handle.
    pub fn clone_material(&mut self, node: NodeHandle) -> Option<MaterialHandle> {
        let source = self.nodes.get(node)?.material?;
        let copy = self.materials.get(source)?.clone();
        Some(self.materials.insert(copy))
    }

    pub fn set_material(&mut self, node: NodeHandle, material: MaterialHandle) -> bool {
        if !self.materials.contains_key(material) {
            return false;
        }
        match self.nodes.get_mut(node) {
            Some(n) => {
                n.material = Some(material);
                true
            }
            None => false,
        }
    }

    /// Snapshots material and position across `root` and its subtree.
    ///
    /// Only the first capture sticks, so calling this again after actions
    /// have run does not overwrite the load-time state.
    pub fn capture_initial_state(&mut self, root: NodeHandle) {
        let mut handles = self.descendants(root);
        handles.push(root);
        for handle in handles {
            if let Some(node) = self.nodes.get_mut(handle) {
                if node.initial_material.is_none() {
                    node.initial_material = node.material;
                }
                if node.initial_position.is_none() {
                    node.initial_position = Some(node.transform.position);
                }
            }
        }
    }

    // ========================================================================
    // Lights
    // ========================================================================

    #[must_use]
    pub fn light(&self, node: NodeHandle) -> Option<&Light> {
        self.nodes.get(node)?.light.as_ref()
    }

    pub fn light_mut(&mut self, node: NodeHandle) -> Option<&mut Light> {
        self.nodes.get_mut(node)?.light.as_mut()
    }

    pub fn set_enabled(&mut self, node: NodeHandle, enabled: bool) -> bool {
        match self.light_mut(node) {
            Some(light) => {
                light.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn set_intensity(&mut self, node: NodeHandle, intensity: f32) -> bool {
        match self.light_mut(node) {
            Some(light) => {
                light.intensity = intensity;
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Toggle state & readiness
    // ========================================================================

    /// Flags owned by `root`; defaults when none were ever written.
    #[must_use]
    pub fn toggles(&self, root: NodeHandle) -> ToggleState {
        self.toggles.get(root).copied().unwrap_or_default()
    }

    pub fn toggles_mut(&mut self, root: NodeHandle) -> Option<&mut ToggleState> {
        if !self.nodes.contains_key(root) {
            return None;
        }
        self.toggles.entry(root).map(|entry| entry.or_default())
    }

    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl Animatable<AnimTarget> for SceneModel {
    fn write_property(&mut self, target: AnimTarget, path: TargetPath, value: TrackValue) -> bool {
        match target {
            AnimTarget::Camera => {
                let Some(v) = value.as_scalar() else {
                    return false;
                };
                match path {
                    TargetPath::OrbitAlpha => self.camera.alpha = v,
                    TargetPath::OrbitBeta => self.camera.beta = v,
                    TargetPath::OrbitRadius => self.camera.radius = v,
                    _ => return false,
                }
                true
            }
            AnimTarget::Node(handle) => {
                let Some(node) = self.nodes.get_mut(handle) else {
                    return false;
                };
                match (path, value) {
                    (TargetPath::Position, TrackValue::Vector3(v)) => node.transform.position = v,
                    (TargetPath::Rotation, TrackValue::Vector3(v)) => node.transform.rotation = v,
                    (TargetPath::Scale, TrackValue::Vector3(v)) => node.transform.scale = v,
                    (TargetPath::RotationY, TrackValue::Scalar(v)) => node.transform.rotation.y = v,
                    (TargetPath::Intensity, TrackValue::Scalar(v)) => match node.light.as_mut() {
                        Some(light) => light.intensity = v,
                        None => return false,
                    },
                    _ => return false,
                }
                true
            }
        }
    }
}

