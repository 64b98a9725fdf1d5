use glam::{Quat, Vec3};

use crate::animation::tracks::Key;

/// Keyframe tracks driving the transform of one named node.
#[derive(Debug, Clone, Default)]
pub struct NodeAnimation {
    pub name: String,
    pub position_keys: Vec<Key<Vec3>>,
    pub scale_keys: Vec<Key<Vec3>>,
    pub rotation_keys: Vec<Key<Quat>>,
}

/// A named animation over the scene's node tree.
///
/// Time is expressed in ticks; `ticks_per_second` converts wall time.
#[derive(Debug, Clone)]
pub struct SceneAnimation {
    pub name: String,
    pub duration_in_ticks: f32,
    pub ticks_per_second: f32,
    pub node_animations: Vec<NodeAnimation>,
}

impl SceneAnimation {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        duration_in_ticks: f32,
        ticks_per_second: f32,
        node_animations: Vec<NodeAnimation>,
    ) -> Self {
        Self {
            name: name.into(),
            duration_in_ticks,
            ticks_per_second,
            node_animations,
        }
    }

    /// Looks up the tracks for `name`, if this animation drives that node.
    #[must_use]
    pub fn node_animation(&self, name: &str) -> Option<&NodeAnimation> {
        self.node_animations.iter().find(|anim| anim.name == name)
    }

    /// Length of one loop in seconds.
    #[must_use]
    pub fn duration_seconds(&self) -> f32 {
        if self.ticks_per_second > 0.0 {
            self.duration_in_ticks / self.ticks_per_second
        } else {
            0.0
        }
    }
}
