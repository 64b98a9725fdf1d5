// src/animation/tracks.rs
use serde::{Deserialize, Serialize};

use crate::animation::values::Interpolatable;
use crate::errors::{ConvertError, Result};

/// A single `(time, value)` sample of an animated channel.
///
/// Tracks are slices of keys ordered ascending by time. They may hold any
/// number of keys and are not assumed to be deduplicated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Key<T> {
    pub time: f32,
    pub value: T,
}

impl<T> Key<T> {
    #[must_use]
    pub const fn new(time: f32, value: T) -> Self {
        Self { time, value }
    }
}

/// Samples `keys` at `time` with a caller-supplied blend function.
///
/// Times before the first key or at/after the last key clamp to the
/// boundary value; there is no extrapolation.
pub fn interpolate<T, F>(time: f32, keys: &[Key<T>], blend: F) -> Result<T>
where
    T: Copy,
    F: Fn(T, T, f32) -> T,
{
    let (first, last) = match keys {
        [] => return Err(ConvertError::EmptyTrack),
        [only] => return Ok(only.value),
        [first, .., last] => (first, last),
    };

    if time < first.time {
        return Ok(first.value);
    }
    if time >= last.time {
        return Ok(last.value);
    }

    let index = search_key_pair(time, keys);
    let a = &keys[index];
    let b = &keys[index + 1];
    Ok(blend(a.value, b.value, inverse_lerp(a.time, b.time, time)))
}

/// [`interpolate`] with the value type's own blend.
pub fn sample<T: Interpolatable>(time: f32, keys: &[Key<T>]) -> Result<T> {
    interpolate(time, keys, T::blend)
}

/// Index of the last key whose time is `<= time`.
///
/// Callers guarantee `keys[0].time <= time < keys[last].time`.
fn search_key_pair<T>(time: f32, keys: &[Key<T>]) -> usize {
    // partition_point finds the first index where key.time > time, i.e. next_index
    keys.partition_point(|key| key.time <= time).saturating_sub(1)
}

#[allow(clippy::float_cmp)]
fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if a == b { 0.0 } else { (value - a) / (b - a) }
}
