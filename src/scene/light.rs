use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    Directional,
    Point {
        range: f32,
        falloff: f32,
    },
    Spot {
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
        falloff: f32,
    },
}

/// A light attached to the node of the same name.
///
/// Only directional lights take part in shading; the others are carried so
/// scenes round-trip unchanged.
#[derive(Debug, Clone)]
pub struct Light {
    pub name: String,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,
}

impl Light {
    #[must_use]
    pub fn new_directional(name: impl Into<String>, color: Vec3, intensity: f32) -> Self {
        Self {
            name: name.into(),
            color,
            intensity,
            kind: LightKind::Directional,
        }
    }

    #[must_use]
    pub fn new_point(name: impl Into<String>, color: Vec3, intensity: f32, range: f32, falloff: f32) -> Self {
        Self {
            name: name.into(),
            color,
            intensity,
            kind: LightKind::Point { range, falloff },
        }
    }

    #[must_use]
    pub fn new_spot(
        name: impl Into<String>,
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_cone: f32,
        outer_cone: f32,
        falloff: f32,
    ) -> Self {
        Self {
            name: name.into(),
            color,
            intensity,
            kind: LightKind::Spot {
                range,
                inner_cone,
                outer_cone,
                falloff,
            },
        }
    }

    #[inline]
    #[must_use]
    pub fn is_directional(&self) -> bool {
        matches!(self.kind, LightKind::Directional)
    }
}
