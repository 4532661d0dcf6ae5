//! Executes [`Action`]s against the loaded scene.
//!
//! The choreographer owns the scene model once the provider hands it over,
//! together with the rig, the tween engine and the explicit state records
//! (palette cursor, zoom cursor, active model). Actions mutate state
//! immediately and start tweens; the tweens are advanced by
//! [`Choreographer::advance`] once per frame.

use std::f32::consts::{PI, TAU};

use glam::Vec3;
use kotatsu_animation::{Easing, TargetPath};
use kotatsu_core::errors::{KotatsuError, Result};
use kotatsu_core::random::RandomSource;
use kotatsu_scene::{
    ActiveModel, AnimTarget, ColorPalette, Material, MaterialHandle, NodeHandle, OrbitCamera,
    Rig, SceneAnimator, SceneModel, ToggleState, ZoomCycle,
};

use crate::action::Action;

const TRANSITION_FRAMES: u32 = 20;
const POP_FRAMES: u32 = 15;
const FLASH_FRAMES: u32 = 10;

/// Probability that dissolving an already shuffled kotatsu gathers it back.
pub const DISSOLVE_RESET_PROBABILITY: f32 = 0.3;

const DARK_AMBIENT_INTENSITY: f32 = 0.05;
const LIGHT_AMBIENT_INTENSITY: f32 = 1.0;

const HEAT_PEAK_MIN: f32 = 30.0;
const HEAT_PEAK_MAX: f32 = 45.0;
const HEAT_REST: f32 = 1.0;

const SCATTER_POSITION: (f32, f32) = (-2.0, 1.0);
const SCATTER_ROTATION: (f32, f32) = (-TAU, TAU);
const SCATTER_SCALE: (f32, f32) = (0.3, 1.8);

const CAMERA_RADIUS: (f32, f32) = (4.0, 7.0);

const TABLETOP_SPIN: f32 = 3.0 * PI;
const TABLETOP_POP: f32 = 1.4;
const BOUNCE_POP: f32 = 1.2;

/// Names of at most this many characters get the close-up zoom scale.
const SHORT_NAME_LEN: usize = 3;
const ZOOM_SCALE_SHORT: f32 = 5.0;
const ZOOM_SCALE_LONG: f32 = 2.0;

struct LoadedScene {
    scene: SceneModel,
    rig: Rig,
    debug_material: MaterialHandle,
}

pub struct Choreographer {
    loaded: Option<LoadedScene>,
    animator: SceneAnimator,
    palette: ColorPalette,
    zoom: ZoomCycle,
    active_model: ActiveModel,
}

impl Default for Choreographer {
    fn default() -> Self {
        Self::new()
    }
}

impl Choreographer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            loaded: None,
            animator: SceneAnimator::new(),
            palette: ColorPalette::new(),
            zoom: ZoomCycle::new(),
            active_model: ActiveModel::default(),
        }
    }

    /// Takes ownership of a populated scene and marks it ready.
    ///
    /// Binds the rig, snapshots the load-time materials and positions of
    /// both models, and enforces that only the active model is shown.
    pub fn attach_scene(&mut self, mut scene: SceneModel) -> Result<()> {
        let rig = Rig::bind(&scene)?;

        self.animator.clear();
        self.palette = ColorPalette::new();
        self.zoom = ZoomCycle::new();
        self.active_model = ActiveModel::default();

        let roots = rig.model_roots();
        for root in [roots.kotatsu, roots.embroidery] {
            scene.capture_initial_state(root);
        }

        let shown = self.active_model;
        let hidden = shown.other();
        if let Some(transform) = scene.transform_mut(roots.get(hidden)) {
            transform.scale = Vec3::ZERO;
        }
        let lights = rig.model_lights();
        scene.set_enabled(lights.get(shown), true);
        scene.set_enabled(lights.get(hidden), false);

        let debug_material = scene.add_material(Material::normal_debug("normalDebug"));
        scene.mark_ready();

        log::info!(
            "Scene ready: {} nodes, {} zoom targets",
            scene.node_count(),
            rig.zoom_targets.len()
        );

        self.loaded = Some(LoadedScene {
            scene,
            rig,
            debug_material,
        });
        Ok(())
    }

    /// Runs one action. Fails with [`KotatsuError::SceneNotReady`] before
    /// [`Choreographer::attach_scene`] has succeeded.
    pub fn perform(&mut self, action: Action, rng: &mut dyn RandomSource) -> Result<()> {
        let Some(loaded) = self.loaded.as_mut().filter(|l| l.scene.is_ready()) else {
            log::warn!("Ignoring {action}: scene not ready");
            return Err(KotatsuError::SceneNotReady);
        };
        log::debug!("Performing {action}");

        let LoadedScene {
            scene,
            rig,
            debug_material,
        } = loaded;
        let mut stage = Stage {
            scene,
            rig,
            animator: &mut self.animator,
            rng,
        };

        match action {
            Action::ChangePalette => stage.change_palette(&mut self.palette),
            Action::MoveCamera => stage.move_camera(),
            Action::Heat => stage.heat(),
            Action::Dissolve => stage.dissolve(),
            Action::RotateTabletop => stage.rotate_tabletop(),
            Action::ChangeMaterials { wireframe } => stage.change_materials(wireframe, *debug_material),
            Action::ZoomToSubmesh => stage.zoom_to_submesh(&mut self.zoom),
            Action::Bounce => stage.bounce(self.active_model),
            Action::Reset => stage.reset(*debug_material),
            Action::ScaleFromVelocity(velocity) => stage.scale_from_velocity(self.active_model, velocity),
            Action::FloatFuton(value) => stage.float_futon(value),
            Action::ChangeModel => self.active_model = stage.change_model(self.active_model),
            Action::SetCameraElevation(beta) => stage.set_camera_elevation(beta),
        }
        Ok(())
    }

    /// Advances running tweens by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if let Some(loaded) = self.loaded.as_mut() {
            self.animator.update(dt, &mut loaded.scene);
        }
    }

    /// Jumps every running tween to its end value.
    pub fn settle(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            self.animator.finish_all(&mut loaded.scene);
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.loaded.as_ref().is_some_and(|l| l.scene.is_ready())
    }

    #[must_use]
    pub fn scene(&self) -> Option<&SceneModel> {
        self.loaded.as_ref().map(|l| &l.scene)
    }

    pub fn scene_mut(&mut self) -> Option<&mut SceneModel> {
        self.loaded.as_mut().map(|l| &mut l.scene)
    }

    #[must_use]
    pub fn rig(&self) -> Option<&Rig> {
        self.loaded.as_ref().map(|l| &l.rig)
    }

    #[must_use]
    pub fn debug_material(&self) -> Option<MaterialHandle> {
        self.loaded.as_ref().map(|l| l.debug_material)
    }

    #[must_use]
    pub fn animator(&self) -> &SceneAnimator {
        &self.animator
    }

    /// Palette index the next [`Action::ChangePalette`] applies.
    #[must_use]
    pub fn palette_index(&self) -> usize {
        self.palette.index()
    }

    /// Sub-target index the next [`Action::ZoomToSubmesh`] focuses.
    #[must_use]
    pub fn zoom_index(&self) -> usize {
        self.zoom.index()
    }

    #[must_use]
    pub fn active_model(&self) -> ActiveModel {
        self.active_model
    }

    /// Toggle flags of the given model's root.
    #[must_use]
    pub fn toggles(&self, model: ActiveModel) -> Option<ToggleState> {
        let loaded = self.loaded.as_ref()?;
        Some(loaded.scene.toggles(loaded.rig.model_roots().get(model)))
    }

    /// Models whose light is currently on. Never holds both.
    #[must_use]
    pub fn visible_models(&self) -> Vec<ActiveModel> {
        let Some(loaded) = self.loaded.as_ref() else {
            return Vec::new();
        };
        let lights = loaded.rig.model_lights();
        [ActiveModel::Kotatsu, ActiveModel::Embroidery]
            .into_iter()
            .filter(|&m| loaded.scene.light(lights.get(m)).is_some_and(|l| l.enabled))
            .collect()
    }
}

/// Borrowed view over everything a single action touches.
struct Stage<'a> {
    scene: &'a mut SceneModel,
    rig: &'a Rig,
    animator: &'a mut SceneAnimator,
    rng: &'a mut dyn RandomSource,
}

impl Stage<'_> {
    fn tween_node(&mut self, node: NodeHandle, path: TargetPath, frames: u32, to: Vec3) {
        let transform = self.scene.transform_or_identity(node);
        let from = match path {
            TargetPath::Position => transform.position,
            TargetPath::Rotation => transform.rotation,
            _ => transform.scale,
        };
        self.animator
            .animate(AnimTarget::Node(node), path, frames, from, to, Easing::CircleOut);
    }

    fn tween_camera(&mut self, alpha: f32, beta: f32, radius: f32) {
        let camera = self.scene.camera;
        for (path, from, to) in [
            (TargetPath::OrbitAlpha, camera.alpha, alpha),
            (TargetPath::OrbitBeta, camera.beta, beta),
            (TargetPath::OrbitRadius, camera.radius, radius),
        ] {
            self.animator.animate(
                AnimTarget::Camera,
                path,
                TRANSITION_FRAMES,
                from,
                to,
                Easing::CircleOut,
            );
        }
    }

    fn flags(&mut self, root: NodeHandle) -> Option<&mut ToggleState> {
        self.scene.toggles_mut(root)
    }

    fn change_palette(&mut self, palette: &mut ColorPalette) {
        let entry = palette.step();
        self.scene.background = entry.color;

        let dark = entry.is_dark_mode();
        let ambient = if dark {
            DARK_AMBIENT_INTENSITY
        } else {
            LIGHT_AMBIENT_INTENSITY
        };
        self.scene.set_intensity(self.rig.hemi_light, ambient);
        self.scene.set_enabled(self.rig.spot_light, dark);
    }

    fn move_camera(&mut self) {
        let alpha = self.rng.range(0.0, TAU);
        let beta = self.rng.range(0.0, PI);
        let radius = self.rng.range(CAMERA_RADIUS.0, CAMERA_RADIUS.1);
        self.tween_camera(alpha, beta, radius);
    }

    fn heat(&mut self) {
        let peak = self.rng.range(HEAT_PEAK_MIN, HEAT_PEAK_MAX);
        self.animator.animate(
            AnimTarget::Node(self.rig.heater_light),
            TargetPath::Intensity,
            FLASH_FRAMES,
            peak,
            HEAT_REST,
            Easing::Linear,
        );
    }

    fn scatter(&mut self, node: NodeHandle) {
        let position = self.rng.vec3(SCATTER_POSITION.0, SCATTER_POSITION.1);
        let rotation = self.rng.vec3(SCATTER_ROTATION.0, SCATTER_ROTATION.1);
        let scale = Vec3::splat(self.rng.range(SCATTER_SCALE.0, SCATTER_SCALE.1));
        self.tween_node(node, TargetPath::Position, TRANSITION_FRAMES, position);
        self.tween_node(node, TargetPath::Rotation, TRANSITION_FRAMES, rotation);
        self.tween_node(node, TargetPath::Scale, TRANSITION_FRAMES, scale);
    }

    fn gather(&mut self, node: NodeHandle) {
        self.tween_node(node, TargetPath::Position, TRANSITION_FRAMES, Vec3::ZERO);
        self.tween_node(node, TargetPath::Rotation, TRANSITION_FRAMES, Vec3::ZERO);
        self.tween_node(node, TargetPath::Scale, TRANSITION_FRAMES, Vec3::ONE);
    }

    fn dissolve(&mut self) {
        let root = self.rig.kotatsu;
        let shuffled = self.scene.toggles(root).is_shuffled;
        // The gather roll is only drawn when there is something to gather.
        let gather = shuffled && self.rng.next_f32() < DISSOLVE_RESET_PROBABILITY;

        for node in self.rig.shuffle_targets() {
            if gather {
                self.gather(node);
            } else {
                self.scatter(node);
            }
        }
        if let Some(flags) = self.flags(root) {
            flags.is_shuffled = !gather;
        }
    }

    fn rotate_tabletop(&mut self) {
        let node = self.rig.table_top;
        let flags = self.scene.toggles(self.rig.kotatsu);
        let current = self.scene.transform_or_identity(node);

        let target_y = if flags.is_rotated { 0.0 } else { TABLETOP_SPIN };
        self.animator.animate(
            AnimTarget::Node(node),
            TargetPath::RotationY,
            POP_FRAMES,
            current.rotation.y,
            target_y,
            Easing::CircleOut,
        );

        let rest = if flags.is_shuffled {
            current.scale
        } else {
            Vec3::ONE
        };
        self.animator.animate(
            AnimTarget::Node(node),
            TargetPath::Scale,
            POP_FRAMES,
            rest * TABLETOP_POP,
            rest,
            Easing::CircleOut,
        );

        if let Some(flags) = self.flags(self.rig.kotatsu) {
            flags.is_rotated = !flags.is_rotated;
        }
    }

    fn restore_materials(&mut self, root: NodeHandle) {
        for mesh in self.scene.meshes_under(root) {
            let Some(initial) = self.scene.get_node(mesh).and_then(|n| n.initial_material()) else {
                continue;
            };
            self.scene.set_material(mesh, initial);
            if let Some(material) = self.scene.material_mut(initial) {
                material.wireframe = false;
            }
        }
    }

    fn change_materials(&mut self, wireframe: bool, debug_material: MaterialHandle) {
        let root = self.rig.kotatsu;
        let showing_debug = self.scene.toggles(root).is_normal_material;

        if showing_debug {
            self.restore_materials(root);
        } else {
            if let Some(material) = self.scene.material_mut(debug_material) {
                material.wireframe = wireframe;
            }
            for mesh in self.scene.meshes_under(root) {
                self.scene.set_material(mesh, debug_material);
            }
        }
        if let Some(flags) = self.flags(root) {
            flags.is_normal_material = !showing_debug;
        }

        if !wireframe {
            return;
        }
        let root = self.rig.embroidery;
        let enabled = !self.scene.toggles(root).is_wireframe;
        for mesh in self.scene.meshes_under(root) {
            let material = self.scene.get_node(mesh).and_then(|n| n.material);
            if let Some(material) = material.and_then(|m| self.scene.material_mut(m)) {
                material.wireframe = enabled;
            }
        }
        if let Some(flags) = self.flags(root) {
            flags.is_wireframe = enabled;
        }
    }

    fn zoom_to_submesh(&mut self, zoom: &mut ZoomCycle) {
        let targets = self.rig.zoom_targets.clone();
        let Some(focused) = zoom.advance(targets.len()) else {
            log::warn!("Zoom requested with no sub-targets");
            return;
        };

        for (i, node) in targets.into_iter().enumerate() {
            if i == focused {
                let short = self
                    .scene
                    .name(node)
                    .is_some_and(|name| name.chars().count() <= SHORT_NAME_LEN);
                let scale = if short { ZOOM_SCALE_SHORT } else { ZOOM_SCALE_LONG };
                self.tween_node(node, TargetPath::Position, TRANSITION_FRAMES, Vec3::ZERO);
                self.tween_node(node, TargetPath::Scale, TRANSITION_FRAMES, Vec3::splat(scale));
            } else {
                let position = self.rng.vec3(SCATTER_POSITION.0, SCATTER_POSITION.1);
                self.tween_node(node, TargetPath::Position, TRANSITION_FRAMES, position);
                self.tween_node(node, TargetPath::Scale, TRANSITION_FRAMES, Vec3::ONE);
            }
        }
    }

    fn bounce(&mut self, active: ActiveModel) {
        let root = self.rig.model_roots().get(active);
        self.animator.animate(
            AnimTarget::Node(root),
            TargetPath::Scale,
            POP_FRAMES,
            Vec3::splat(BOUNCE_POP),
            Vec3::ONE,
            Easing::CircleOut,
        );
    }

    fn scale_from_velocity(&mut self, active: ActiveModel, velocity: f32) {
        let root = self.rig.model_roots().get(active);
        self.tween_node(root, TargetPath::Scale, FLASH_FRAMES, Vec3::splat(1.0 + velocity));
    }

    fn float_futon(&mut self, value: f32) {
        let rig = self.rig;
        // Direct writes; stop tweens that would overwrite them next frame.
        self.animator.stop(AnimTarget::Node(rig.table_top), TargetPath::Position);
        self.animator.stop(AnimTarget::Node(rig.table_base), TargetPath::Position);
        self.animator.stop(AnimTarget::Node(rig.futon), TargetPath::Rotation);

        if let Some(t) = self.scene.transform_mut(rig.table_top) {
            t.position.y = value / 2.0;
        }
        if let Some(t) = self.scene.transform_mut(rig.table_base) {
            t.position.y = -value / 2.0;
        }
        if let Some(t) = self.scene.transform_mut(rig.futon) {
            t.rotation.y = PI * value / 2.0;
        }
    }

    fn change_model(&mut self, active: ActiveModel) -> ActiveModel {
        let incoming = active.other();
        let roots = self.rig.model_roots();
        let lights = self.rig.model_lights();

        self.tween_node(roots.get(active), TargetPath::Scale, TRANSITION_FRAMES, Vec3::ZERO);
        self.tween_node(roots.get(incoming), TargetPath::Scale, TRANSITION_FRAMES, Vec3::ONE);
        self.scene.set_enabled(lights.get(active), false);
        self.scene.set_enabled(lights.get(incoming), true);

        log::info!("Switching model {active:?} -> {incoming:?}");
        incoming
    }

    fn set_camera_elevation(&mut self, beta: f32) {
        self.animator.stop(AnimTarget::Camera, TargetPath::OrbitBeta);
        self.scene.camera.beta = beta;
    }

    fn reset(&mut self, debug_material: MaterialHandle) {
        for node in self.rig.shuffle_targets() {
            self.gather(node);
        }
        for node in self.rig.zoom_targets.clone() {
            let home = self
                .scene
                .get_node(node)
                .and_then(|n| n.initial_position())
                .unwrap_or(Vec3::ZERO);
            self.tween_node(node, TargetPath::Position, TRANSITION_FRAMES, home);
            self.tween_node(node, TargetPath::Scale, TRANSITION_FRAMES, Vec3::ONE);
        }

        let roots = self.rig.model_roots();
        for root in [roots.kotatsu, roots.embroidery] {
            self.restore_materials(root);
            if let Some(flags) = self.flags(root) {
                flags.clear();
            }
        }
        if let Some(material) = self.scene.material_mut(debug_material) {
            material.wireframe = false;
        }

        self.tween_camera(
            OrbitCamera::DEFAULT_ALPHA,
            OrbitCamera::DEFAULT_BETA,
            OrbitCamera::DEFAULT_RADIUS,
        );
    }
}
