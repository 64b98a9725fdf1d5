//! Prefab Object Pool
//!
//! Packs a sequence of per-frame right-triangle lists into a fixed set of
//! animation slots.
//!
//! # Slot assignment
//!
//! Each frame is sorted by depth (back to front) and triangle `i` goes to
//! slot `i`. Slots are positional: nothing ties a slot to the same source
//! triangle across frames. Slots without a triangle in a frame receive a
//! zeroed placeholder key so every track stays dense in time, but the
//! placeholder does not extend the slot's alive window.
//!
//! # Compression
//!
//! Each channel only stores a key when its value differs from the previous
//! key of that channel.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::animation::tracks::Key;
use crate::errors::{ConvertError, Result};
use crate::geometry::RightTriangle;

/// Draw-depth range the slots are spread across, back to front.
pub const RENDER_DEPTH_START: f32 = -80.0;
pub const RENDER_DEPTH_END: f32 = 80.0;

/// One packed slot of the final animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimatedRightTriangle {
    pub position_keys: Vec<Key<Vec2>>,
    pub scale_keys: Vec<Key<Vec2>>,
    pub rotation_keys: Vec<Key<f32>>,
    pub color_keys: Vec<Key<usize>>,
    /// Time of the first frame holding a real triangle.
    pub start_time: f32,
    /// Time of the last frame holding a real triangle.
    pub kill_time: f32,
    /// Static draw-order bucket derived from the slot index.
    pub render_depth: i32,
}

#[derive(Debug, Clone)]
struct Slot {
    position_keys: Vec<Key<Vec2>>,
    scale_keys: Vec<Key<Vec2>>,
    rotation_keys: Vec<Key<f32>>,
    color_keys: Vec<Key<usize>>,
    start_time: f32,
    kill_time: f32,
}

impl Slot {
    fn new() -> Self {
        Self {
            position_keys: Vec::new(),
            scale_keys: Vec::new(),
            rotation_keys: Vec::new(),
            color_keys: Vec::new(),
            start_time: f32::INFINITY,
            kill_time: f32::NEG_INFINITY,
        }
    }

    fn ensure_alive(&mut self, time: f32) {
        self.start_time = self.start_time.min(time);
        self.kill_time = self.kill_time.max(time);
    }

    fn is_alive(&self) -> bool {
        self.start_time <= self.kill_time
    }

    fn add_keys(&mut self, time: f32, position: Vec2, scale: Vec2, rotation: f32, color: usize) {
        push_changed(&mut self.position_keys, time, position);
        push_changed(&mut self.scale_keys, time, scale);
        push_changed(&mut self.rotation_keys, time, rotation);
        push_changed(&mut self.color_keys, time, color);
    }

    fn add_placeholder(&mut self, time: f32) {
        self.add_keys(time, Vec2::ZERO, Vec2::ZERO, 0.0, 0);
    }
}

fn push_changed<T: PartialEq>(keys: &mut Vec<Key<T>>, time: f32, value: T) {
    if keys.last().is_none_or(|last| last.value != value) {
        keys.push(Key::new(time, value));
    }
}

#[derive(Debug, Clone)]
pub struct PrefabObjectPool {
    slots: Vec<Slot>,
}

impl PrefabObjectPool {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![Slot::new(); capacity],
        }
    }

    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Records one frame at `time`.
    ///
    /// Fails without touching any slot if the frame holds more triangles
    /// than the pool has slots.
    pub fn add_frame(&mut self, time: f32, mut triangles: Vec<RightTriangle>) -> Result<()> {
        if triangles.len() > self.capacity() {
            return Err(ConvertError::CapacityExceeded {
                count: triangles.len(),
                capacity: self.capacity(),
            });
        }

        // Sort by render depth
        triangles.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let (used, spare) = self.slots.split_at_mut(triangles.len());
        for (slot, triangle) in used.iter_mut().zip(&triangles) {
            slot.add_keys(
                time,
                triangle.position,
                triangle.scale,
                triangle.rotation,
                triangle.theme_color,
            );
            slot.ensure_alive(time);
        }
        for slot in spare {
            slot.add_placeholder(time);
        }

        Ok(())
    }

    /// Exports every slot that held at least one real triangle.
    #[must_use]
    pub fn build(self) -> Vec<AnimatedRightTriangle> {
        let depth_step = (RENDER_DEPTH_END - RENDER_DEPTH_START) / self.capacity() as f32;

        self.slots
            .into_iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_alive())
            .map(|(index, slot)| AnimatedRightTriangle {
                render_depth: (RENDER_DEPTH_START + index as f32 * depth_step).floor() as i32,
                position_keys: slot.position_keys,
                scale_keys: slot.scale_keys,
                rotation_keys: slot.rotation_keys,
                color_keys: slot.color_keys,
                start_time: slot.start_time,
                kill_time: slot.kill_time,
            })
            .collect()
    }
}
