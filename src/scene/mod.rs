//! Scene graph module
//!
//! Read-only description of the scene being converted:
//! - Node: named tree element with a local transform and mesh attachments
//! - Transform: decomposed TRS used by the animation handler
//! - Scene: node tree plus cameras, lights, meshes, materials and animations
//! - Camera / Light: attached to the node that shares their name

pub mod camera;
pub mod light;
pub mod mesh;
pub mod node;
pub mod scene;
pub mod transform;

pub use camera::Camera;
pub use light::{Light, LightKind};
pub use mesh::{Material, Mesh, Vertex};
pub use node::{Node, NodeMesh};
pub use scene::Scene;
pub use transform::Transform;
