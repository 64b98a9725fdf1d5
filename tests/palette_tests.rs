//! Palette generation tests
//!
//! Tests for:
//! - Solid-color mode (shading depth 0)
//! - Shade sequences and the color-resolution admission filter
//! - Nearest-color lookup

use glam::Vec3;

use polyrhythm::palette::{generate, nearest, shade_step, shades};
use polyrhythm::scene::{Material, Node, Scene};

const EPSILON: f32 = 1e-5;

fn vec3_approx(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPSILON
}

fn scene_with_colors(colors: &[Vec3]) -> Scene {
    let mut scene = Scene::new(Node::new("Root"));
    scene.materials = colors
        .iter()
        .enumerate()
        .map(|(i, color)| Material::new(format!("Material{i}"), *color))
        .collect();
    scene
}

#[test]
fn solid_mode_yields_one_entry_per_material() {
    let scene = scene_with_colors(&[Vec3::new(1.0, 0.0, 0.0)]);
    let palette = generate(&scene, 0, 0.1);
    assert_eq!(palette, vec![Vec3::new(1.0, 0.0, 0.0)]);
}

#[test]
fn shade_step_of_zero_depth_is_infinite() {
    assert!(shade_step(0).is_infinite());
    assert_eq!(shades(Vec3::ONE, shade_step(0)).count(), 1);
}

#[test]
fn shades_walk_down_to_black() {
    let color = Vec3::new(1.0, 0.0, 0.0);
    let all: Vec<Vec3> = shades(color, shade_step(2)).collect();

    // 1.0 -> 1 - sqrt(3)/2 -> 0
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], color);
    assert!(vec3_approx(all[1], Vec3::new(1.0 - 3.0_f32.sqrt() / 2.0, 0.0, 0.0)));
    assert!(vec3_approx(all[2], Vec3::ZERO));
}

#[test]
fn shades_keep_direction() {
    let color = Vec3::new(0.6, 0.8, 0.0);
    for shade in shades(color, 0.25).filter(|s| s.length() > 0.0) {
        assert!(vec3_approx(shade.normalize(), color.normalize()));
    }
}

#[test]
fn lit_mode_adds_shades() {
    let scene = scene_with_colors(&[Vec3::new(1.0, 0.0, 0.0)]);
    let palette = generate(&scene, 2, 0.1);

    assert_eq!(palette.len(), 3);
    assert_eq!(palette[0], Vec3::new(1.0, 0.0, 0.0));
    assert!(vec3_approx(palette[2], Vec3::ZERO));
}

#[test]
fn close_materials_collapse() {
    let scene = scene_with_colors(&[
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.98, 0.01, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    ]);
    let palette = generate(&scene, 0, 0.1);
    assert_eq!(palette, vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)]);
}

#[test]
fn shared_black_is_admitted_once() {
    let scene = scene_with_colors(&[Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]);
    let palette = generate(&scene, 1, 0.05);

    // Each color shades straight to black; the second black is rejected.
    assert_eq!(palette.len(), 3);
    assert_eq!(palette.iter().filter(|c| **c == Vec3::ZERO).count(), 1);
}

#[test]
fn coarse_resolution_discards_shades() {
    let scene = scene_with_colors(&[Vec3::new(1.0, 1.0, 1.0)]);
    let fine = generate(&scene, 8, 0.01);
    let coarse = generate(&scene, 8, 0.5);
    assert!(coarse.len() < fine.len());
    for (i, a) in coarse.iter().enumerate() {
        for b in &coarse[i + 1..] {
            assert!(a.distance(*b) > 0.5);
        }
    }
}

#[test]
fn empty_scene_has_empty_palette() {
    let scene = scene_with_colors(&[]);
    assert!(generate(&scene, 3, 0.1).is_empty());
}

#[test]
fn nearest_picks_closest_color() {
    let palette = [Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)];
    assert_eq!(nearest(Vec3::new(1.1, 0.0, 0.0), &palette), 1);
    assert_eq!(nearest(Vec3::new(0.1, 0.0, 0.7), &palette), 2);
    assert_eq!(nearest(Vec3::splat(0.05), &palette), 0);
}

#[test]
fn nearest_on_empty_palette_is_zero() {
    assert_eq!(nearest(Vec3::ONE, &[]), 0);
}

#[test]
fn shades_end_for_huge_shading_depth() {
    // Step is far below the precision of a unit length
    let step = shade_step(100_000_000);
    let expected = (1.0 / step).ceil() as usize + 1;

    let (count, last) = shades(Vec3::X, step).fold((0_usize, Vec3::ONE), |(n, _), shade| (n + 1, shade));
    assert_eq!(count, expected);
    assert_eq!(last, Vec3::ZERO);
}

#[test]
fn shades_strictly_shrink() {
    let all: Vec<Vec3> = shades(Vec3::new(0.3, 0.5, 0.7), shade_step(10_000)).collect();
    for pair in all.windows(2) {
        assert!(pair[1].length() < pair[0].length());
    }
    assert_eq!(all.last(), Some(&Vec3::ZERO));
}

#[test]
fn black_has_no_shades() {
    assert_eq!(shades(Vec3::ZERO, shade_step(4)).count(), 1);
}
