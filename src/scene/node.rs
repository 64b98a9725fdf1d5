use glam::Mat4;
use smallvec::SmallVec;

/// A mesh instance attached to a node.
///
/// Both fields index into the owning [`Scene`](crate::scene::Scene)'s
/// `meshes` and `materials` lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeMesh {
    pub mesh: usize,
    pub material: usize,
}

impl NodeMesh {
    #[must_use]
    pub const fn new(mesh: usize, material: usize) -> Self {
        Self { mesh, material }
    }
}

/// A named element of the scene tree.
///
/// # Hierarchy
///
/// Nodes own their children directly, so the whole scene is one tree rooted
/// at [`Scene::root`](crate::scene::Scene::root). Cameras and lights are
/// attached by name: a camera called `"Camera"` takes the world transform of
/// the node called `"Camera"`.
///
/// # Transform
///
/// `transform` is the bind-pose local matrix, relative to the parent.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub transform: Mat4,
    pub meshes: SmallVec<[NodeMesh; 2]>,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty node with an identity transform.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            meshes: SmallVec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: NodeMesh) -> Self {
        self.meshes.push(mesh);
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for a node by name, including `self`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Node> {
        if self.name == name {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(name))
    }
}
