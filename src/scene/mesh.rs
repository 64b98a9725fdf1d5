use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
}

impl Vertex {
    #[must_use]
    pub const fn new(position: Vec3, normal: Vec3, color: Vec3) -> Self {
        Self {
            position,
            normal,
            color,
        }
    }
}

/// Indexed triangle list.
///
/// `indices` are read three at a time; a trailing partial group is ignored.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub name: String,
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    #[must_use]
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            vertices,
            indices,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Material {
    pub name: String,
    pub albedo: Vec3,
    pub metallic: f32,
    pub roughness: f32,
}

impl Material {
    #[must_use]
    pub fn new(name: impl Into<String>, albedo: Vec3) -> Self {
        Self {
            name: name.into(),
            albedo,
            metallic: 0.0,
            roughness: 1.0,
        }
    }
}
