//! Scene Model Tests
//!
//! Tests for:
//! - Transform helpers (identity, quaternion, local matrix)
//! - SceneModel hierarchy: create, attach, descendants, name lookup
//! - Materials, lights and load-time snapshots
//! - Toggle flags, palette cycling, zoom cycling, orbit camera
//! - ProceduralProvider + Rig binding
//! - Animatable writes through AnimTarget

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec3, Vec4};

use kotatsu::animation::{Animatable, TargetPath, TrackValue};
use kotatsu::core::KotatsuError;
use kotatsu::scene::palette::{DARK_MODE_INDEX, PALETTE, color_from_hex};
use kotatsu::scene::rig;
use kotatsu::scene::{
    ActiveModel, AnimTarget, ColorPalette, Light, Material, ModelTable, OrbitCamera,
    ProceduralProvider, Rig, SceneGraphProvider, SceneModel, ToggleState, Transform, ZoomCycle,
};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < EPSILON
}

fn procedural_scene() -> SceneModel {
    let mut scene = SceneModel::new();
    ProceduralProvider.populate(&mut scene).unwrap();
    scene
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t, Transform::IDENTITY);
    assert!(t.is_identity(EPSILON));
    assert_eq!(t.local_matrix(), glam::Affine3A::IDENTITY);
}

#[test]
fn transform_from_position_keeps_unit_scale() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.scale, Vec3::ONE);
    assert!(!t.is_identity(EPSILON));
}

#[test]
fn transform_euler_y_maps_to_quaternion() {
    let t = Transform {
        rotation: Vec3::new(0.0, FRAC_PI_2, 0.0),
        ..Transform::IDENTITY
    };
    let rotated = t.quaternion() * Vec3::X;
    assert!(vec3_approx(rotated, Vec3::new(0.0, 0.0, -1.0)), "got {rotated}");
}

#[test]
fn transform_local_matrix_applies_trs() {
    let t = Transform {
        position: Vec3::new(1.0, 0.0, 0.0),
        rotation: Vec3::ZERO,
        scale: Vec3::splat(2.0),
    };
    let p = t.local_matrix().transform_point3(Vec3::ONE);
    assert!(vec3_approx(p, Vec3::new(3.0, 2.0, 2.0)));
}

// ============================================================================
// SceneModel: Hierarchy
// ============================================================================

#[test]
fn scene_create_child_links_both_directions() {
    let mut scene = SceneModel::new();
    let parent = scene.create_node("parent");
    let child = scene.create_child("child", parent);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert_eq!(scene.get_node(parent).unwrap().children(), &[child]);
    assert_eq!(scene.root_nodes(), &[parent]);
}

#[test]
fn scene_attach_reparents_and_detaches() {
    let mut scene = SceneModel::new();
    let a = scene.create_node("a");
    let b = scene.create_node("b");
    let c = scene.create_child("c", a);

    scene.attach(c, b);
    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[c]);

    scene.attach(b, a);
    assert_eq!(scene.root_nodes(), &[a], "attached root leaves the root list");
}

#[test]
fn scene_attach_to_self_is_ignored() {
    let mut scene = SceneModel::new();
    let a = scene.create_node("a");
    scene.attach(a, a);
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
}

#[test]
fn scene_attach_under_descendant_is_rejected() {
    let mut scene = SceneModel::new();
    let a = scene.create_node("a");
    let b = scene.create_child("b", a);
    let c = scene.create_child("c", b);

    scene.attach(a, c);
    assert_eq!(scene.get_node(a).unwrap().parent(), None);
    assert_eq!(scene.root_nodes(), &[a]);
    assert!(scene.get_node(c).unwrap().children().is_empty());
    assert_eq!(scene.descendants(a), vec![b, c]);
    assert!(scene.is_ancestor(a, c));
    assert!(!scene.is_ancestor(c, a));
}

#[test]
fn scene_descendants_depth_first_excluding_root() {
    let mut scene = SceneModel::new();
    let root = scene.create_node("root");
    let a = scene.create_child("a", root);
    let a1 = scene.create_child("a1", a);
    let b = scene.create_child("b", root);

    assert_eq!(scene.descendants(root), vec![a, a1, b]);
    assert!(scene.descendants(a1).is_empty());
}

#[test]
fn scene_name_lookup_and_require() {
    let mut scene = SceneModel::new();
    let node = scene.create_node("futon");

    assert_eq!(scene.node_by_name("futon"), Some(node));
    assert_eq!(scene.name(node), Some("futon"));
    assert_eq!(
        scene.require("missing"),
        Err(KotatsuError::NodeNotFound("missing".to_string()))
    );
}

#[test]
fn scene_meshes_under_filters_material_carriers() {
    let mut scene = SceneModel::new();
    let root = scene.create_node("root");
    let group = scene.create_child("group", root);
    let mesh = scene.create_child("mesh", group);
    let material = scene.add_material(Material::standard("m", Vec3::ONE));
    assert!(scene.set_material(mesh, material));

    assert_eq!(scene.meshes_under(root), vec![mesh]);
}

// ============================================================================
// SceneModel: Materials & Lights
// ============================================================================

#[test]
fn scene_clone_material_yields_independent_copy() {
    let mut scene = SceneModel::new();
    let node = scene.create_node("n");
    let original = scene.add_material(Material::standard("wood", Vec3::ONE));
    scene.set_material(node, original);

    let copy = scene.clone_material(node).unwrap();
    assert_ne!(copy, original);
    scene.material_mut(copy).unwrap().wireframe = true;
    assert!(!scene.material(original).unwrap().wireframe);
}

#[test]
fn scene_capture_initial_state_only_first_sticks() {
    let mut scene = SceneModel::new();
    let root = scene.create_node("root");
    let mesh = scene.create_child("mesh", root);
    let first = scene.add_material(Material::standard("first", Vec3::ONE));
    let second = scene.add_material(Material::standard("second", Vec3::ZERO));
    scene.set_material(mesh, first);
    scene.transform_mut(mesh).unwrap().position = Vec3::X;

    scene.capture_initial_state(root);
    scene.set_material(mesh, second);
    scene.transform_mut(mesh).unwrap().position = Vec3::Y;
    scene.capture_initial_state(root);

    let node = scene.get_node(mesh).unwrap();
    assert_eq!(node.initial_material(), Some(first));
    assert_eq!(node.initial_position(), Some(Vec3::X));
}

#[test]
fn scene_light_toggles_only_on_light_nodes() {
    let mut scene = SceneModel::new();
    let lamp = scene.add_light("lamp", Light::new_point(Vec3::ONE, 1.0), None);
    let plain = scene.create_node("plain");

    assert!(scene.set_enabled(lamp, false));
    assert!(!scene.light(lamp).unwrap().enabled);
    assert!(scene.set_intensity(lamp, 3.0));
    assert!(approx(scene.light(lamp).unwrap().intensity, 3.0));

    assert!(!scene.set_enabled(plain, true));
    assert!(scene.light(plain).is_none());
}

#[test]
fn scene_toggles_default_until_written() {
    let mut scene = SceneModel::new();
    let root = scene.create_node("root");
    assert_eq!(scene.toggles(root), ToggleState::default());

    scene.toggles_mut(root).unwrap().is_rotated = true;
    assert!(scene.toggles(root).is_rotated);

    scene.toggles_mut(root).unwrap().clear();
    assert_eq!(scene.toggles(root), ToggleState::default());
}

#[test]
fn scene_starts_not_ready() {
    let mut scene = SceneModel::new();
    assert!(!scene.is_ready());
    scene.mark_ready();
    assert!(scene.is_ready());
}

// ============================================================================
// Palette / Zoom / Camera / Model table
// ============================================================================

#[test]
fn palette_steps_wrap_after_six() {
    let mut palette = ColorPalette::new();
    let indices: Vec<usize> = (0..8).map(|_| palette.step().index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 0, 1]);
    assert_eq!(palette.index(), 2);
}

#[test]
fn palette_dark_entry_is_black() {
    let mut palette = ColorPalette::new();
    let dark = (0..6).map(|_| palette.step()).find(|e| e.is_dark_mode()).unwrap();
    assert_eq!(dark.index, DARK_MODE_INDEX);
    assert_eq!(dark.color, Vec4::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(PALETTE.len(), 6);
}

#[test]
fn palette_hex_conversion() {
    let c = color_from_hex(0x33BF4F);
    assert!(approx(c.x, 0x33 as f32 / 255.0));
    assert!(approx(c.y, 0xBF as f32 / 255.0));
    assert!(approx(c.z, 0x4F as f32 / 255.0));
    assert!(approx(c.w, 1.0));
}

#[test]
fn zoom_cycle_wraps_and_handles_empty() {
    let mut zoom = ZoomCycle::new();
    let picks: Vec<usize> = (0..5).filter_map(|_| zoom.advance(3)).collect();
    assert_eq!(picks, vec![0, 1, 2, 0, 1]);
    assert_eq!(zoom.advance(0), None);
}

#[test]
fn orbit_camera_default_pose() {
    let camera = OrbitCamera::default();
    assert!(approx(camera.alpha, FRAC_PI_2));
    assert!(approx(camera.beta, PI / 3.0));
    assert!(approx(camera.radius, 5.0));
    assert!(approx(camera.position().length(), 5.0));
}

#[test]
fn orbit_camera_top_down_at_zero_beta() {
    let camera = OrbitCamera::new(0.3, 0.0, 4.0);
    assert!(vec3_approx(camera.position(), Vec3::new(0.0, 4.0, 0.0)));
}

#[test]
fn model_table_resolves_by_model() {
    let table = ModelTable {
        kotatsu: 'A',
        embroidery: 'B',
    };
    assert_eq!(table.get(ActiveModel::Kotatsu), 'A');
    assert_eq!(table.get(ActiveModel::Embroidery), 'B');
    assert_eq!(ActiveModel::default(), ActiveModel::Kotatsu);
    assert_eq!(ActiveModel::Kotatsu.other(), ActiveModel::Embroidery);
}

// ============================================================================
// ProceduralProvider + Rig
// ============================================================================

#[test]
fn procedural_scene_binds_rig() {
    let scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();

    assert_eq!(rig.zoom_targets.len(), 10);
    assert_eq!(scene.name(rig.zoom_targets[0]), Some("take"));
    assert_eq!(scene.name(rig.zoom_targets[9]), Some("o2"));
    assert_eq!(scene.name(rig.model_roots().embroidery), Some(rig::EMBROIDERY_ROOT));
}

#[test]
fn procedural_tabletop_groups_its_pieces() {
    let scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();
    let children: Vec<&str> = scene
        .get_node(rig.table_top)
        .unwrap()
        .children()
        .iter()
        .filter_map(|&c| scene.name(c))
        .collect();
    assert_eq!(children, vec![rig::TABLE_TOP_BASE, rig::TABLE_TOP_PICTURE]);
    assert_eq!(scene.get_node(rig.table_top).unwrap().parent(), Some(rig.kotatsu));
}

#[test]
fn procedural_initial_lighting() {
    let scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();

    assert!(scene.light(rig.heater_light).unwrap().enabled);
    assert!(!scene.light(rig.spot_light).unwrap().enabled);
    assert!(approx(scene.light(rig.spot_light).unwrap().intensity, 40.0));
    assert!(!scene.light(rig.embroidery_light).unwrap().enabled);
    assert_eq!(scene.transform(rig.embroidery).unwrap().scale, Vec3::ZERO);
}

#[test]
fn procedural_shuffle_targets_rest_at_identity() {
    let scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();
    for node in rig.shuffle_targets() {
        assert!(scene.transform(node).unwrap().is_identity(EPSILON));
    }
}

#[test]
fn rig_bind_reports_missing_node() {
    let mut scene = SceneModel::new();
    scene.create_node(rig::KOTATSU_ROOT);
    assert!(matches!(Rig::bind(&scene), Err(KotatsuError::NodeNotFound(_))));
}

#[test]
fn rig_bind_rejects_light_name_without_light() {
    let mut scene = procedural_scene();
    // Shadow the heater light with a plain node of the same name.
    scene.create_node(rig::HEATER_LIGHT);
    assert_eq!(
        Rig::bind(&scene).unwrap_err(),
        KotatsuError::NotALight(rig::HEATER_LIGHT.to_string())
    );
}

// ============================================================================
// Animatable
// ============================================================================

#[test]
fn animatable_writes_node_and_camera_properties() {
    let mut scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();
    let top = AnimTarget::Node(rig.table_top);

    assert!(scene.write_property(top, TargetPath::RotationY, TrackValue::Scalar(PI)));
    assert!(approx(scene.transform(rig.table_top).unwrap().rotation.y, PI));

    assert!(scene.write_property(top, TargetPath::Scale, TrackValue::Vector3(Vec3::splat(2.0))));
    assert_eq!(scene.transform(rig.table_top).unwrap().scale, Vec3::splat(2.0));

    assert!(scene.write_property(AnimTarget::Camera, TargetPath::OrbitRadius, TrackValue::Scalar(6.5)));
    assert!(approx(scene.camera.radius, 6.5));
}

#[test]
fn animatable_rejects_mismatched_writes() {
    let mut scene = procedural_scene();
    let rig = Rig::bind(&scene).unwrap();

    let intensity_on_mesh = scene.write_property(
        AnimTarget::Node(rig.futon),
        TargetPath::Intensity,
        TrackValue::Scalar(3.0),
    );
    assert!(!intensity_on_mesh);

    let vector_on_camera = scene.write_property(
        AnimTarget::Camera,
        TargetPath::OrbitAlpha,
        TrackValue::Vector3(Vec3::ONE),
    );
    assert!(!vector_on_camera);

    assert!(scene.write_property(
        AnimTarget::Node(rig.heater_light),
        TargetPath::Intensity,
        TrackValue::Scalar(30.0),
    ));
    assert!(approx(scene.light(rig.heater_light).unwrap().intensity, 30.0));
}
