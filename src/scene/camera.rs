use glam::{Mat4, Quat};

/// A perspective camera attached to the node of the same name.
#[derive(Debug, Clone)]
pub struct Camera {
    pub name: String,

    // === Projection ===
    /// Horizontal field of view in radians.
    pub horizontal_fov: f32,
    pub near: f32,
    pub far: f32,

    /// Intrinsic rotation, applied after the node's world rotation.
    pub rotation: Quat,
}

impl Camera {
    #[must_use]
    pub fn new(name: impl Into<String>, horizontal_fov: f32, near: f32, far: f32) -> Self {
        Self {
            name: name.into(),
            horizontal_fov,
            near,
            far,
            rotation: Quat::IDENTITY,
        }
    }

    /// Vertical field of view for a given output aspect ratio.
    #[inline]
    #[must_use]
    pub fn vertical_fov(&self, aspect_ratio: f32) -> f32 {
        self.horizontal_fov / aspect_ratio
    }

    /// OpenGL-style projection (clip z in `[-w, w]`).
    #[must_use]
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.vertical_fov(aspect_ratio), aspect_ratio, self.near, self.far)
    }
}
