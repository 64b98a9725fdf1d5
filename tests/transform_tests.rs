//! Transform and scene hierarchy tests
//!
//! Tests for:
//! - Transform TRS decomposition / recomposition
//! - Name lookup in the node tree
//! - World matrix accumulation through parents, with and without a transformer

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};
use polyrhythm::animation::AnimationHandler;
use polyrhythm::scene::{Node, Scene, Transform};

// ============================================================================
// Helper
// ============================================================================

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

fn nested_scene() -> Scene {
    let leaf = Node::new("Leaf").with_transform(Mat4::from_translation(Vec3::new(0.0, 0.0, 1.0)));
    let arm = Node::new("Arm")
        .with_transform(Mat4::from_rotation_translation(
            Quat::from_rotation_y(FRAC_PI_2),
            Vec3::new(10.0, 0.0, 0.0),
        ))
        .with_child(leaf);
    Scene::new(Node::new("Root").with_child(arm))
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn transform_default_is_identity() {
    let t = Transform::new();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.to_matrix(), Mat4::IDENTITY);
}

#[test]
fn transform_decomposes_trs() {
    let mat = Mat4::from_scale_rotation_translation(
        Vec3::new(2.0, 3.0, 4.0),
        Quat::from_rotation_z(FRAC_PI_2),
        Vec3::new(10.0, 20.0, 30.0),
    );

    let t = Transform::from_matrix(&mat);
    assert!(vec3_approx(t.position, Vec3::new(10.0, 20.0, 30.0)));
    assert!(vec3_approx(t.scale, Vec3::new(2.0, 3.0, 4.0)));
    assert!(t.rotation.angle_between(Quat::from_rotation_z(FRAC_PI_2)) < 1e-4);

    assert!(t.to_matrix().abs_diff_eq(mat, 1e-4));
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn find_node_searches_depth_first() {
    let scene = nested_scene();
    assert_eq!(scene.find_node("Leaf").map(|n| n.name.as_str()), Some("Leaf"));
    assert_eq!(scene.find_node("Root").map(|n| n.name.as_str()), Some("Root"));
    assert!(scene.find_node("Missing").is_none());
}

#[test]
fn world_matrix_accumulates_parents() {
    let scene = nested_scene();

    let (_, world) = scene
        .find_node_world::<AnimationHandler>("Leaf", None)
        .unwrap();

    // Arm rotates +Z onto +X, then translates by 10 along X
    let origin = world.transform_point3(Vec3::ZERO);
    assert!(vec3_approx(origin, Vec3::new(11.0, 0.0, 0.0)), "got {origin}");
}

#[test]
fn world_matrix_through_handler_matches_bind_pose() {
    let scene = nested_scene();
    let handler = AnimationHandler::new(&scene);

    let (_, bind) = scene.find_node_world::<AnimationHandler>("Leaf", None).unwrap();
    let (_, resolved) = scene.find_node_world("Leaf", Some(&handler)).unwrap();

    assert!(bind.abs_diff_eq(resolved, 1e-4));
}
