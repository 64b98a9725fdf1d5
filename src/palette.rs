//! Palette (theme) generation
//!
//! Quantizes the scene's material colors into a small ordered palette.
//! Every material albedo contributes itself plus a run of darker shades;
//! candidates closer than `color_resolution` to an already admitted color
//! are discarded. Admission is first-come, so the result depends on
//! material order.

use glam::Vec3;

use crate::scene::Scene;

/// Length of the RGB cube diagonal, the largest possible color distance.
const SQRT_3: f32 = 1.732_050_8;

/// Ordered list of colors; triangles refer to entries by index.
pub type Palette = Vec<Vec3>;

/// Builds the palette for `scene`.
///
/// `shading_depth` controls how many shades each base color fans out into.
/// With `0` the step is infinite and every material yields exactly one
/// color.
#[must_use]
pub fn generate(scene: &Scene, shading_depth: u32, color_resolution: f32) -> Palette {
    let base_colors = admit(
        scene.materials.iter().map(|material| material.albedo),
        color_resolution,
    );
    let step = shade_step(shading_depth);

    let palette = admit(
        base_colors.into_iter().flat_map(|color| shades(color, step)),
        color_resolution,
    );

    log::debug!(
        "Generated palette of {} colors from {} materials (shading depth {})",
        palette.len(),
        scene.materials.len(),
        shading_depth
    );
    palette
}

/// Index of the palette entry nearest to `color` (Euclidean, first wins on ties).
///
/// An empty palette maps everything to `0`.
#[must_use]
pub fn nearest(color: Vec3, palette: &[Vec3]) -> usize {
    let mut min_index = 0;
    let mut min_distance = f32::INFINITY;
    for (index, other) in palette.iter().enumerate() {
        let distance = color.distance(*other);
        if distance < min_distance {
            min_distance = distance;
            min_index = index;
        }
    }
    min_index
}

/// Length removed from a color per shade.
///
/// `1 / 0` is `+inf`, which disables shading entirely.
#[must_use]
pub fn shade_step(shading_depth: u32) -> f32 {
    (1.0 / shading_depth as f32) * SQRT_3
}

/// The color itself, followed by progressively shorter versions of it
/// (same direction) down to black.
///
/// Shade `k` has length `length - k * step`. There are `ceil(length / step)`
/// of them and the last one is black.
pub fn shades(color: Vec3, step: f32) -> impl Iterator<Item = Vec3> {
    let length = color.length();
    let direction = color.normalize_or_zero();
    let count = if step.is_finite() && step <= SQRT_3 && length > 0.0 {
        (length / step).ceil() as u32
    } else {
        0
    };

    let darker = (1..=count).map(move |k| {
        if k == count {
            Vec3::ZERO
        } else {
            direction * (length - k as f32 * step).max(0.0)
        }
    });

    std::iter::once(color).chain(darker)
}

/// Farthest-first filter: keeps a candidate only if it is farther than
/// `resolution` from every color kept so far.
fn admit(candidates: impl IntoIterator<Item = Vec3>, resolution: f32) -> Vec<Vec3> {
    let mut admitted: Vec<Vec3> = Vec::new();
    for candidate in candidates {
        if min_distance(candidate, &admitted) > resolution {
            admitted.push(candidate);
        }
    }
    admitted
}

fn min_distance(value: Vec3, values: &[Vec3]) -> f32 {
    values
        .iter()
        .map(|other| value.distance(*other))
        .fold(f32::INFINITY, f32::min)
}
