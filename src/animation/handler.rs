use std::sync::Arc;

use glam::Mat4;
use rustc_hash::FxHashMap;

use crate::animation::clip::SceneAnimation;
use crate::animation::tracks;
use crate::animation::transformer::SceneTransformer;
use crate::errors::Result;
use crate::scene::{Node, Scene, Transform};

#[derive(Debug, Clone, Copy)]
struct TrackedNode {
    bind: Transform,
    current: Transform,
}

impl TrackedNode {
    fn new(node: &Node) -> Self {
        let bind = Transform::from_matrix(&node.transform);
        Self { bind, current: bind }
    }

    fn reset(&mut self) {
        self.current = self.bind;
    }
}

/// Plays a [`SceneAnimation`] over the node tree.
///
/// Keeps one cached [`Transform`] per node name, initialised from the bind
/// pose. Sampling overwrites the cache for nodes the bound animation has
/// tracks for; every other node keeps its last value.
#[derive(Debug, Clone)]
pub struct AnimationHandler {
    nodes: FxHashMap<String, TrackedNode>,
    animation: Option<Arc<SceneAnimation>>,
}

impl AnimationHandler {
    #[must_use]
    pub fn new(scene: &Scene) -> Self {
        let mut nodes = FxHashMap::default();
        collect_nodes(&scene.root, &mut nodes);
        Self {
            nodes,
            animation: None,
        }
    }

    /// Switches the active animation. Unbinding resets every node to its bind pose.
    pub fn bind(&mut self, animation: Option<Arc<SceneAnimation>>) {
        log::trace!(
            "Animation binding: {:?} -> {:?}",
            self.animation.as_ref().map(|a| a.name.as_str()),
            animation.as_ref().map(|a| a.name.as_str())
        );

        self.animation = animation;

        if self.animation.is_none() {
            for node in self.nodes.values_mut() {
                node.reset();
            }
        }
    }

    #[must_use]
    pub fn animation(&self) -> Option<&Arc<SceneAnimation>> {
        self.animation.as_ref()
    }

    /// Cached transform of a node, if it was part of the tree at construction.
    #[must_use]
    pub fn transform(&self, name: &str) -> Option<&Transform> {
        self.nodes.get(name).map(|node| &node.current)
    }
}

impl SceneTransformer for AnimationHandler {
    fn node_transform(&self, node: &Node) -> Mat4 {
        self.nodes
            .get(&node.name)
            .map_or(node.transform, |tracked| tracked.current.to_matrix())
    }

    fn sample(&mut self, time: f32) -> Result<()> {
        let Some(animation) = &self.animation else {
            return Ok(());
        };

        let ticks = if animation.duration_in_ticks > 0.0 {
            (time * animation.ticks_per_second) % animation.duration_in_ticks
        } else {
            0.0
        };

        for (name, node) in &mut self.nodes {
            let Some(channels) = animation.node_animation(name) else {
                continue;
            };

            node.current = Transform {
                position: tracks::sample(ticks, &channels.position_keys)?,
                rotation: tracks::sample(ticks, &channels.rotation_keys)?,
                scale: tracks::sample(ticks, &channels.scale_keys)?,
            };
        }

        Ok(())
    }
}

fn collect_nodes(node: &Node, nodes: &mut FxHashMap<String, TrackedNode>) {
    nodes.insert(node.name.clone(), TrackedNode::new(node));
    for child in &node.children {
        collect_nodes(child, nodes);
    }
}
