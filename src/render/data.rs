//! Per-frame value types flowing through the shading pipeline.
//!
//! Each stage produces fresh values and never mutates its input:
//! [`InputVertex`] → [`StagingVertex`] → [`Triangle<StagingVertex>`] → [`ShadedTriangle`].

use glam::{Vec3, Vec4};

/// A mesh vertex paired with the albedo of the material it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputVertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub albedo: Vec3,
}

/// A vertex after the vertex stage.
///
/// `position` is in clip space and has not been divided by `w` yet;
/// `normal` is in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagingVertex {
    pub position: Vec4,
    pub normal: Vec3,
    pub color: Vec3,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Triangle<T> {
    #[must_use]
    pub const fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Triangle<U> {
        Triangle {
            a: f(self.a),
            b: f(self.b),
            c: f(self.c),
        }
    }
}

/// A triangle in normalised device coordinates with one flat color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadedTriangle {
    pub triangle: Triangle<Vec3>,
    pub color: Vec3,
}

impl ShadedTriangle {
    /// Mean NDC depth of the three vertices.
    #[must_use]
    pub fn depth(&self) -> f32 {
        (self.triangle.a.z + self.triangle.b.z + self.triangle.c.z) / 3.0
    }

    /// Z component of the screen-space cross product `AB × AC`.
    ///
    /// Positive for counter-clockwise (front-facing) triangles.
    #[must_use]
    pub fn winding(&self) -> f32 {
        let Triangle { a, b, c } = self.triangle;
        (b - a).cross(c - a).z
    }
}
