//! Shading Pipeline
//!
//! Turns the scene, as the transformer currently poses it, into a lazy
//! stream of [`ShadedTriangle`]s in normalised device coordinates.
//!
//! # Stages
//!
//! 1. Camera: world transform of the camera node composed with the camera's
//!    intrinsic rotation gives the view matrix.
//! 2. Traversal: depth-first walk of the node tree collecting every mesh
//!    instance with its model matrix.
//! 3. Vertex stage: [`VertexShader`] per mesh instance.
//! 4. Assembly: index buffer grouped into triangles.
//! 5. Triangle stage: [`TriangleShader`] perspective-divides and colors.
//!
//! Nothing is shaded until the returned iterator is pulled.

use glam::{Mat4, Quat, Vec3};

use crate::animation::transformer::{SceneTransformer, resolve_local};
use crate::errors::{ConvertError, Result};
use crate::render::assembly::assemble;
use crate::render::data::{InputVertex, ShadedTriangle};
use crate::render::shader::{Shader, ShadingMode, TriangleShader, VertexShader};
use crate::scene::{Material, Mesh, Node, Scene};

/// Ambient term added to the Lambertian factor of lit triangles.
pub const AMBIENT_COLOR: Vec3 = Vec3::splat(0.1);

/// One mesh instance found during traversal.
struct RenderData<'a> {
    mesh: &'a Mesh,
    material: &'a Material,
    model: Mat4,
}

pub struct Pipeline<'a> {
    scene: &'a Scene,
    shading: ShadingMode,
}

impl<'a> Pipeline<'a> {
    #[must_use]
    pub fn new(scene: &'a Scene, shading: ShadingMode) -> Self {
        Self { scene, shading }
    }

    #[must_use]
    pub fn shading(&self) -> ShadingMode {
        self.shading
    }

    /// Shades the scene for one instant.
    ///
    /// Camera and light lookups fail eagerly; the returned iterator itself
    /// cannot fail.
    pub fn render<T: SceneTransformer + ?Sized>(
        &self,
        transformer: Option<&T>,
        aspect_ratio: f32,
    ) -> Result<impl Iterator<Item = ShadedTriangle> + use<'a, T>> {
        let scene = self.scene;

        // 1. Camera
        let camera = scene.cameras.first().ok_or(ConvertError::NoCamera)?;
        let (_, camera_world) = scene
            .find_node_world(&camera.name, transformer)
            .ok_or_else(|| ConvertError::NodeNotFound {
                kind: "Camera",
                name: camera.name.clone(),
            })?;

        let (_, node_rotation, camera_position) = camera_world.to_scale_rotation_translation();
        let camera_rotation = node_rotation * camera.rotation;

        let view = Mat4::from_rotation_translation(camera_rotation, camera_position).inverse();
        let projection = camera.projection_matrix(aspect_ratio);

        // 2. Light
        let triangle_shader = TriangleShader::new(
            self.shading,
            AMBIENT_COLOR,
            self.light_direction(camera_rotation, transformer)?,
        );

        // 3. Traversal
        let mut render_datas = Vec::new();
        self.collect_render_data(&scene.root, Mat4::IDENTITY, transformer, &mut render_datas);

        // 4. Vertex stage + assembly + triangle stage
        let triangles = render_datas
            .into_iter()
            .flat_map(move |render_data| {
                let RenderData {
                    mesh,
                    material,
                    model,
                } = render_data;
                let vertex_shader = VertexShader::new(model, view, projection);
                let albedo = material.albedo;
                let staged: Vec<_> = mesh
                    .vertices
                    .iter()
                    .map(|vertex| {
                        vertex_shader.process(InputVertex {
                            position: vertex.position,
                            normal: vertex.normal,
                            color: vertex.color,
                            albedo,
                        })
                    })
                    .collect();
                assemble(staged, &mesh.indices)
            })
            .map(move |triangle| triangle_shader.process(triangle));

        Ok(triangles)
    }

    /// Direction of the first directional light, relative to the camera.
    fn light_direction<T: SceneTransformer + ?Sized>(
        &self,
        camera_rotation: Quat,
        transformer: Option<&T>,
    ) -> Result<Vec3> {
        let light = self
            .scene
            .directional_light()
            .ok_or(ConvertError::NoDirectionalLight)?;
        let (_, light_world) = self
            .scene
            .find_node_world(&light.name, transformer)
            .ok_or_else(|| ConvertError::NodeNotFound {
                kind: "Light",
                name: light.name.clone(),
            })?;

        let (_, light_rotation, _) = light_world.to_scale_rotation_translation();
        Ok((camera_rotation * light_rotation * Vec3::NEG_Z).normalize())
    }

    fn collect_render_data<T: SceneTransformer + ?Sized>(
        &self,
        node: &'a Node,
        parent: Mat4,
        transformer: Option<&T>,
        output: &mut Vec<RenderData<'a>>,
    ) {
        let model = parent * resolve_local(node, transformer);

        for node_mesh in &node.meshes {
            let Some(mesh) = self.scene.meshes.get(node_mesh.mesh) else {
                log::warn!("Node '{}' refers to missing mesh {}", node.name, node_mesh.mesh);
                continue;
            };
            let Some(material) = self.scene.materials.get(node_mesh.material) else {
                log::warn!("Node '{}' refers to missing material {}", node.name, node_mesh.material);
                continue;
            };
            output.push(RenderData {
                mesh,
                material,
                model,
            });
        }

        for child in &node.children {
            self.collect_render_data(child, model, transformer, output);
        }
    }
}
