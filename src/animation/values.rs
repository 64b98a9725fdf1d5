use glam::{Quat, Vec2, Vec3};

/// Values that can be blended between two keyframes.
///
/// Vectors and scalars blend linearly, rotations blend spherically.
pub trait Interpolatable: Copy + Sized {
    fn blend(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn blend(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec2 {
    fn blend(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Vec3 {
    fn blend(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn blend(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}
