pub mod assembly;
pub mod data;
pub mod pipeline;
pub mod shader;

pub use data::{InputVertex, ShadedTriangle, StagingVertex, Triangle};
pub use pipeline::Pipeline;
pub use shader::{Shader, ShadingMode, TriangleShader, VertexShader};
