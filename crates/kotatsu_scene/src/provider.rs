//! The seam to whatever builds the node hierarchy.
//!
//! Asset loading lives outside the core. A [`SceneGraphProvider`] fills a
//! [`SceneModel`] through its narrow construction API; the caller marks the
//! scene ready once population succeeds.

use std::f32::consts::FRAC_PI_3;

use glam::Vec3;
use kotatsu_core::errors::Result;

use crate::MaterialHandle;
use crate::light::Light;
use crate::material::Material;
use crate::rig;
use crate::scene::SceneModel;

/// Populates a scene model with the installation's node hierarchy.
pub trait SceneGraphProvider {
    /// Short label for logs.
    fn name(&self) -> &str {
        "provider"
    }

    fn populate(&mut self, scene: &mut SceneModel) -> Result<()>;
}

/// Builds the installation rig procedurally, without any asset files.
///
/// Stands in for the glTF loader in headless runs and tests. The layout
/// follows the production models: the kotatsu (tabletop, base, futon,
/// legs, heater with its point light, a dormant spotlight) and the
/// embroidery lettering, which starts hidden at scale zero.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProceduralProvider;

impl SceneGraphProvider for ProceduralProvider {
    fn name(&self) -> &str {
        "procedural"
    }

    fn populate(&mut self, scene: &mut SceneModel) -> Result<()> {
        scene.add_light(
            rig::HEMI_LIGHT,
            Light::new_hemispheric(Vec3::new(1.0, 1.0, 0.0), 1.0),
            None,
        );

        build_kotatsu(scene);
        build_embroidery(scene);
        Ok(())
    }
}

fn build_kotatsu(scene: &mut SceneModel) {
    let root = scene.create_node(rig::KOTATSU_ROOT);

    let wood = scene.add_material(Material::standard("wood", Vec3::new(0.55, 0.38, 0.22)));
    let picture = scene.add_material(Material::standard("picture", Vec3::new(0.9, 0.85, 0.7)));
    let cloth = scene.add_material(Material::standard("futonCloth", Vec3::new(0.75, 0.2, 0.25)));
    let heater_glow = scene.add_material(Material::emissive("heaterMaterial", Vec3::new(1.0, 0.0, 0.0)));

    let mesh = |scene: &mut SceneModel, name: &str, material: MaterialHandle, position: Vec3| {
        let handle = scene.create_child(name, root);
        if let Some(node) = scene.get_node_mut(handle) {
            node.material = Some(material);
            node.transform.position = position;
        }
        handle
    };

    // Shuffleable parts keep their offsets baked into geometry so that
    // their rest pose is the identity transform.
    let top_base = mesh(scene, rig::TABLE_TOP_BASE, wood, Vec3::ZERO);
    let top_picture = mesh(scene, rig::TABLE_TOP_PICTURE, picture, Vec3::new(0.0, 0.03, 0.0));
    mesh(scene, rig::TABLE_BASE, wood, Vec3::ZERO);
    mesh(scene, rig::FUTON, cloth, Vec3::ZERO);
    for (i, leg) in rig::LEGS.iter().enumerate() {
        let x = if i % 2 == 0 { -0.5 } else { 0.5 };
        let z = if i < 2 { -0.5 } else { 0.5 };
        mesh(scene, leg, wood, Vec3::new(x, 0.3, z));
    }
    mesh(scene, rig::HEATER, heater_glow, Vec3::new(0.0, 0.5, 0.0));

    // The tabletop pieces spin together under one transform group.
    let table_top = scene.create_child(rig::TABLE_TOP, root);
    scene.attach(top_base, table_top);
    scene.attach(top_picture, table_top);

    let heater_light = scene.add_light(
        rig::HEATER_LIGHT,
        Light::new_point(Vec3::new(1.0, 0.0, 0.0), 1.0),
        Some(root),
    );
    if let Some(t) = scene.transform_mut(heater_light) {
        t.position = Vec3::new(0.0, 0.3, 0.0);
    }

    let spot = scene.add_light(
        rig::SPOT_LIGHT,
        Light::new_spot(
            Vec3::new(0.4, 0.5, 0.8),
            40.0,
            Vec3::new(0.0, -1.0, -0.25),
            FRAC_PI_3,
            2.0,
        )
        .with_enabled(false),
        Some(root),
    );
    if let Some(t) = scene.transform_mut(spot) {
        t.position = Vec3::new(0.0, 5.0, 1.0);
    }
}

fn build_embroidery(scene: &mut SceneModel) {
    let root = scene.create_node(rig::EMBROIDERY_ROOT);
    if let Some(t) = scene.transform_mut(root) {
        t.scale = Vec3::ZERO;
    }

    let thread = scene.add_material(Material::standard("thread", Vec3::new(0.95, 0.95, 0.9)));

    let mut groups = Vec::with_capacity(rig::EMBROIDERY_GROUPS.len());
    for (i, name) in rig::EMBROIDERY_GROUPS.iter().enumerate() {
        let group = scene.create_child(name, root);
        if let Some(t) = scene.transform_mut(group) {
            t.position = Vec3::new(i as f32 - 1.0, 0.0, 0.0);
        }
        groups.push(group);
    }

    for (i, name) in rig::EMBROIDERY_GLYPHS.iter().enumerate() {
        let parent = groups[i * groups.len() / rig::EMBROIDERY_GLYPHS.len()];
        let glyph = scene.create_child(name, parent);
        if let Some(node) = scene.get_node_mut(glyph) {
            node.material = Some(thread);
            node.transform.position = Vec3::new(i as f32 * 0.3 - 0.9, 0.5, 0.0);
        }
    }

    scene.add_light(
        rig::EMBROIDERY_LIGHT,
        Light::new_point(Vec3::new(1.0, 0.85, 0.6), 1.0).with_enabled(false),
        Some(root),
    );
}
