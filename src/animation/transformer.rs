use glam::Mat4;

use crate::errors::Result;
use crate::scene::Node;

/// Capability that supplies the current local transform of scene nodes.
///
/// The pipeline never reads `Node::transform` directly; it asks
/// [`resolve_local`], which falls back to the bind pose when no transformer
/// is installed.
pub trait SceneTransformer {
    /// Local transform of `node` at the transformer's current instant.
    fn node_transform(&self, node: &Node) -> Mat4;

    /// Advances internal state to `time` seconds. The default does nothing.
    fn sample(&mut self, time: f32) -> Result<()> {
        let _ = time;
        Ok(())
    }
}

/// Local transform of `node`, through `transformer` when present.
#[inline]
#[must_use]
pub fn resolve_local<T: SceneTransformer + ?Sized>(node: &Node, transformer: Option<&T>) -> Mat4 {
    transformer.map_or(node.transform, |t| t.node_transform(node))
}
