#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod converter;
pub mod errors;
pub mod geometry;
pub mod palette;
pub mod pool;
pub mod render;
pub mod scene;

pub use animation::{AnimationHandler, Key, NodeAnimation, SceneAnimation, SceneTransformer};
pub use converter::{Converter, RenderResult, RenderSettings};
pub use errors::{ConvertError, Result};
pub use geometry::{RightTriangle, RightTriangleTransform};
pub use pool::{AnimatedRightTriangle, PrefabObjectPool};
pub use render::{Pipeline, ShadedTriangle, ShadingMode, Triangle};
pub use scene::{Camera, Light, LightKind, Material, Mesh, Node, NodeMesh, Scene, Vertex};
