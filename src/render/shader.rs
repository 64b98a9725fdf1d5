use glam::{Mat4, Vec3};

use crate::render::data::{InputVertex, ShadedTriangle, StagingVertex, Triangle};

/// A pure per-element stage of the pipeline.
pub trait Shader<In> {
    type Output;

    fn process(&self, input: In) -> Self::Output;
}

/// Transforms vertices into clip space and normals into world space.
#[derive(Debug, Clone, Copy)]
pub struct VertexShader {
    model_view_projection: Mat4,
    normal_matrix: Mat4,
}

impl VertexShader {
    #[must_use]
    pub fn new(model: Mat4, view: Mat4, projection: Mat4) -> Self {
        Self {
            model_view_projection: projection * view * model,
            normal_matrix: model.transpose().inverse(),
        }
    }
}

impl Shader<InputVertex> for VertexShader {
    type Output = StagingVertex;

    fn process(&self, input: InputVertex) -> StagingVertex {
        StagingVertex {
            position: self.model_view_projection * input.position.extend(1.0),
            normal: self.normal_matrix.transform_vector3(input.normal),
            color: input.color,
        }
    }
}

/// How triangles are colored. Chosen once per render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadingMode {
    /// Lambertian lighting from the scene's directional light.
    Lit,
    /// Raw vertex colors, no lighting.
    SolidColor,
}

impl ShadingMode {
    /// Shading depth 0 means no tonal variation, so lighting is skipped.
    #[must_use]
    pub const fn from_shading_depth(shading_depth: u32) -> Self {
        if shading_depth == 0 { Self::SolidColor } else { Self::Lit }
    }
}

/// Perspective-divides a triangle and gives it one flat color.
#[derive(Debug, Clone, Copy)]
pub enum TriangleShader {
    Lit { ambient: Vec3, light_direction: Vec3 },
    SolidColor,
}

impl TriangleShader {
    #[must_use]
    pub fn new(mode: ShadingMode, ambient: Vec3, light_direction: Vec3) -> Self {
        match mode {
            ShadingMode::Lit => Self::Lit {
                ambient,
                light_direction,
            },
            ShadingMode::SolidColor => Self::SolidColor,
        }
    }

    fn shade_vertex(&self, vertex: StagingVertex) -> (Vec3, Vec3) {
        let position = vertex.position.truncate() / vertex.position.w;
        let color = match *self {
            Self::Lit {
                ambient,
                light_direction,
            } => {
                let light = vertex.normal.dot(-light_direction);
                vertex.color * (ambient + Vec3::splat(light))
            }
            Self::SolidColor => vertex.color,
        };
        (position, color)
    }
}

impl Shader<Triangle<StagingVertex>> for TriangleShader {
    type Output = ShadedTriangle;

    fn process(&self, input: Triangle<StagingVertex>) -> ShadedTriangle {
        let (a, color_a) = self.shade_vertex(input.a);
        let (b, color_b) = self.shade_vertex(input.b);
        let (c, color_c) = self.shade_vertex(input.c);
        ShadedTriangle {
            triangle: Triangle::new(a, b, c),
            color: (color_a + color_b + color_c) / 3.0,
        }
    }
}
