//! Scene model for the installation.
//!
//! Holds the node hierarchy delivered by a [`SceneGraphProvider`], plus the
//! explicit state records the action catalogue toggles:
//! - [`SceneModel`]: node arena, materials, light components, orbit camera
//! - [`ToggleState`]: per-model-root flags (shuffled, rotated, material, wireframe)
//! - [`ColorPalette`], [`ActiveModel`] / [`ModelTable`], [`ZoomCycle`]
//! - [`Rig`]: the named nodes the actions operate on, resolved once at load

pub mod camera;
pub mod light;
pub mod material;
pub mod model;
pub mod node;
pub mod palette;
pub mod provider;
pub mod rig;
pub mod scene;
pub mod toggle;
pub mod transform;
pub mod zoom;

pub use camera::OrbitCamera;
pub use light::{Light, LightKind};
pub use material::{Material, MaterialKind};
pub use model::{ActiveModel, ModelTable};
pub use node::SceneNode;
pub use palette::{ColorPalette, PaletteEntry};
pub use provider::{ProceduralProvider, SceneGraphProvider};
pub use rig::Rig;
pub use scene::{AnimTarget, SceneAnimator, SceneModel};
pub use toggle::ToggleState;
pub use transform::Transform;
pub use zoom::ZoomCycle;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MaterialHandle;
}
