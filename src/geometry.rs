//! Right-Triangle Geometry
//!
//! Any triangle splits into two right triangles along the altitude from its
//! widest vertex. Each right triangle is then fully described by a 2D
//! position, a rotation and a signed 2D scale applied to a unit right
//! triangle prefab.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::render::data::Triangle;

/// Placement of a unit right triangle: right angle at `position`, first leg
/// along `rotation` with length `scale.x`, second leg of length `|scale.y|`.
///
/// A negative `scale.y` mirrors the second leg so both halves of a split
/// keep the same winding.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RightTriangleTransform {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
}

/// A screen-space right triangle ready for packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RightTriangle {
    pub position: Vec2,
    pub scale: Vec2,
    pub rotation: f32,
    /// Mean NDC depth of the source triangle.
    pub depth: f32,
    /// Index into the color palette.
    pub theme_color: usize,
}

impl RightTriangle {
    #[must_use]
    pub fn new(transform: RightTriangleTransform, depth: f32, theme_color: usize) -> Self {
        Self {
            position: transform.position,
            scale: transform.scale,
            rotation: transform.rotation,
            depth,
            theme_color,
        }
    }
}

/// Splits `triangle` into `{H, A, B}` and `{H, A, C}`, where `A` is the
/// vertex with the largest interior angle and `H` is the foot of the
/// altitude from `A` onto `BC`. Both halves are right-angled at `H`.
#[must_use]
pub fn split(triangle: &Triangle<Vec2>) -> [Triangle<Vec2>; 2] {
    let Triangle { a, b, c } = *triangle;
    let mut corners = [
        (a, angle_between(b - a, c - a)),
        (b, angle_between(c - b, a - b)),
        (c, angle_between(b - c, a - c)),
    ];
    // Sort by angle (descending)
    corners.sort_by(|x, y| y.1.total_cmp(&x.1));

    let [(apex, _), (b, angle_b), (c, _)] = corners;

    let bc = c.distance(b);
    let altitude = 2.0 * area(triangle) / bc;
    let bh = altitude / angle_b.tan();
    let h = b.lerp(c, bh / bc);

    [Triangle::new(h, apex, b), Triangle::new(h, apex, c)]
}

/// Prefab transform of a right triangle whose right angle is at `a`.
#[must_use]
pub fn transform_of(triangle: &Triangle<Vec2>) -> RightTriangleTransform {
    let ab = triangle.b - triangle.a;
    let ac = triangle.c - triangle.a;

    let rotation = ab.y.atan2(ab.x);
    let local_ac = Vec2::from_angle(-rotation).rotate(ac.normalize_or_zero());
    let leg = ac.length();

    RightTriangleTransform {
        position: triangle.a,
        scale: Vec2::new(ab.length(), if local_ac.y < 0.0 { -leg } else { leg }),
        rotation,
    }
}

/// Unsigned area.
#[must_use]
pub fn area(triangle: &Triangle<Vec2>) -> f32 {
    let Triangle { a, b, c } = *triangle;
    ((b - a).perp_dot(c - a) / 2.0).abs()
}

fn angle_between(v0: Vec2, v1: Vec2) -> f32 {
    let cos = v0.dot(v1) / (v0.length() * v1.length());
    cos.clamp(-1.0, 1.0).acos()
}
