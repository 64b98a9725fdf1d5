use std::sync::Arc;

use glam::Mat4;

use crate::animation::clip::SceneAnimation;
use crate::animation::transformer::{SceneTransformer, resolve_local};
use crate::scene::camera::Camera;
use crate::scene::light::Light;
use crate::scene::mesh::{Material, Mesh};
use crate::scene::node::Node;

/// Scene graph and its resource lists.
///
/// A scene is read-only input to a conversion. Everything that changes over
/// time goes through a [`SceneTransformer`].
#[derive(Debug, Clone)]
pub struct Scene {
    pub root: Node,
    pub cameras: Vec<Camera>,
    pub lights: Vec<Light>,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
    pub animations: Vec<Arc<SceneAnimation>>,
}

impl Scene {
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self {
            root,
            cameras: Vec::new(),
            lights: Vec::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
            animations: Vec::new(),
        }
    }

    /// Linear depth-first search by name.
    #[must_use]
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.root.find(name)
    }

    /// Finds a node by name together with its world matrix
    /// (parent × local, accumulated from the root).
    #[must_use]
    pub fn find_node_world<T: SceneTransformer + ?Sized>(
        &self,
        name: &str,
        transformer: Option<&T>,
    ) -> Option<(&Node, Mat4)> {
        find_with_world(&self.root, Mat4::IDENTITY, name, transformer)
    }

    /// First directional light in declaration order.
    #[must_use]
    pub fn directional_light(&self) -> Option<&Light> {
        self.lights.iter().find(|light| light.is_directional())
    }

    #[must_use]
    pub fn animation(&self, name: &str) -> Option<&Arc<SceneAnimation>> {
        self.animations.iter().find(|anim| anim.name == name)
    }
}

fn find_with_world<'a, T: SceneTransformer + ?Sized>(
    node: &'a Node,
    parent: Mat4,
    name: &str,
    transformer: Option<&T>,
) -> Option<(&'a Node, Mat4)> {
    let world = parent * resolve_local(node, transformer);
    if node.name == name {
        return Some((node, world));
    }
    node.children
        .iter()
        .find_map(|child| find_with_world(child, world, name, transformer))
}
