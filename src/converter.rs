//! Frame Driver
//!
//! Orchestrates one complete conversion:
//!
//! 1. Generate the palette from the scene's materials.
//! 2. Step time from `0` to `duration` (exclusive) at `1 / frame_rate`,
//!    running the update hook, sampling the transformer and shading the
//!    scene at every step.
//! 3. Size the prefab pool to the largest frame (two right triangles per
//!    shaded triangle).
//! 4. Cull, project, split and color every frame, then pack it into the pool.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use polyrhythm::{AnimationHandler, Converter, RenderSettings};
//!
//! let mut handler = AnimationHandler::new(&scene);
//! handler.bind(scene.animations.first().cloned());
//!
//! let result = Converter::with_transformer(&scene, &mut handler, RenderSettings::default())
//!     .render()?;
//! println!("{}", result.to_json()?);
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::transformer::SceneTransformer;
use crate::errors::{ConvertError, Result};
use crate::geometry::{self, RightTriangle};
use crate::palette;
use crate::pool::{AnimatedRightTriangle, PrefabObjectPool};
use crate::render::data::ShadedTriangle;
use crate::render::pipeline::Pipeline;
use crate::render::shader::ShadingMode;
use crate::scene::Scene;

// ---------------------------------------------------------------------------
// RenderSettings
// ---------------------------------------------------------------------------

/// Numeric configuration of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Shades generated per material color. `0` disables lighting.
    pub shading_depth: u32,
    /// Minimum Euclidean distance between palette entries.
    pub color_resolution: f32,
    /// Length of the animation in seconds.
    pub duration: f32,
    /// Output width / height.
    pub aspect_ratio: f32,
    /// Sampled frames per second.
    pub frame_rate: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shading_depth: 0,
            color_resolution: 0.1,
            duration: 1.0,
            aspect_ratio: 16.0 / 9.0,
            frame_rate: 30.0,
        }
    }
}

impl RenderSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.frame_rate.is_finite() && self.frame_rate > 0.0) {
            return Err(ConvertError::InvalidSettings(format!(
                "frame_rate must be positive and finite, got {}",
                self.frame_rate
            )));
        }
        if !(self.color_resolution.is_finite() && self.color_resolution > 0.0) {
            return Err(ConvertError::InvalidSettings(format!(
                "color_resolution must be positive and finite, got {}",
                self.color_resolution
            )));
        }
        if !self.duration.is_finite() {
            return Err(ConvertError::InvalidSettings(format!(
                "duration must be finite, got {}",
                self.duration
            )));
        }
        if !(self.aspect_ratio.is_finite() && self.aspect_ratio > 0.0) {
            return Err(ConvertError::InvalidSettings(format!(
                "aspect_ratio must be positive and finite, got {}",
                self.aspect_ratio
            )));
        }
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn frame_duration(&self) -> f32 {
        1.0 / self.frame_rate
    }

    /// Sample times `0, dt, 2dt, …` strictly below `duration`.
    #[must_use]
    pub fn frame_times(&self) -> Vec<f32> {
        let frame_duration = self.frame_duration();
        (0_u32..)
            .map(|index| index as f32 * frame_duration)
            .take_while(|time| *time < self.duration)
            .collect()
    }
}

// ---------------------------------------------------------------------------
// RenderResult
// ---------------------------------------------------------------------------

/// The packed animation asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    pub animated_right_triangles: Vec<AnimatedRightTriangle>,
    pub color_palette: Vec<Vec3>,
    /// Pool capacity: the largest per-frame right-triangle count before culling.
    pub total_triangle_count: usize,
    pub total_frame_count: usize,
}

impl RenderResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ---------------------------------------------------------------------------
// Converter
// ---------------------------------------------------------------------------

type InitializeHook<'a, T> = Box<dyn FnMut(Option<&mut T>) + 'a>;
type UpdateHook<'a, T> = Box<dyn FnMut(f32, Option<&mut T>) + 'a>;

/// Drives a conversion of `scene` frame by frame.
///
/// The optional transformer is the only mutable state of a render. Hooks
/// receive it so they can rebind animations between frames.
pub struct Converter<'a, T: SceneTransformer + ?Sized + 'a = dyn SceneTransformer + 'a> {
    scene: &'a Scene,
    transformer: Option<&'a mut T>,
    settings: RenderSettings,
    initialize: Option<InitializeHook<'a, T>>,
    update: Option<UpdateHook<'a, T>>,
}

impl<'a> Converter<'a> {
    /// A converter that renders every node in its bind pose.
    #[must_use]
    pub fn new(scene: &'a Scene, settings: RenderSettings) -> Self {
        Self {
            scene,
            transformer: None,
            settings,
            initialize: None,
            update: None,
        }
    }
}

impl<'a, T: SceneTransformer + ?Sized + 'a> Converter<'a, T> {
    #[must_use]
    pub fn with_transformer(scene: &'a Scene, transformer: &'a mut T, settings: RenderSettings) -> Self {
        Self {
            scene,
            transformer: Some(transformer),
            settings,
            initialize: None,
            update: None,
        }
    }

    /// Runs once before the first frame.
    #[must_use]
    pub fn on_initialize(mut self, hook: impl FnMut(Option<&mut T>) + 'a) -> Self {
        self.initialize = Some(Box::new(hook));
        self
    }

    /// Runs before every frame with the frame's time, ahead of sampling.
    #[must_use]
    pub fn on_update(mut self, hook: impl FnMut(f32, Option<&mut T>) + 'a) -> Self {
        self.update = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn render(&mut self) -> Result<RenderResult> {
        self.settings.validate()?;
        let settings = self.settings;

        let palette = palette::generate(self.scene, settings.shading_depth, settings.color_resolution);
        let pipeline = Pipeline::new(self.scene, ShadingMode::from_shading_depth(settings.shading_depth));

        if let Some(initialize) = self.initialize.as_mut() {
            initialize(self.transformer.as_deref_mut());
        }

        // Render all frames
        let times = settings.frame_times();
        let mut frames: Vec<Vec<ShadedTriangle>> = Vec::with_capacity(times.len());
        for &time in &times {
            if let Some(update) = self.update.as_mut() {
                update(time, self.transformer.as_deref_mut());
            }
            if let Some(transformer) = self.transformer.as_deref_mut() {
                transformer.sample(time)?;
            }

            let triangles: Vec<ShadedTriangle> = pipeline
                .render(self.transformer.as_deref(), settings.aspect_ratio)?
                .collect();
            log::debug!("Frame at {time:.3}s: {} shaded triangles", triangles.len());
            frames.push(triangles);
        }

        // Pool all prefab objects
        let capacity = frames.iter().map(|frame| frame.len() * 2).max().unwrap_or(0);
        let mut pool = PrefabObjectPool::new(capacity);
        for (&time, frame) in times.iter().zip(&frames) {
            let right_triangles = right_triangles(frame, &palette);
            log::debug!(
                "Frame at {time:.3}s: {} right triangles after culling",
                right_triangles.len()
            );
            pool.add_frame(time, right_triangles)?;
        }

        let animated_right_triangles = pool.build();
        log::info!(
            "Converted {} frames ({:?}): capacity {}, {} live slots, {} palette colors",
            frames.len(),
            pipeline.shading(),
            capacity,
            animated_right_triangles.len(),
            palette.len()
        );

        Ok(RenderResult {
            animated_right_triangles,
            color_palette: palette,
            total_triangle_count: capacity,
            total_frame_count: frames.len(),
        })
    }
}

/// Culls, projects, splits and colors one frame.
#[must_use]
pub fn right_triangles(frame: &[ShadedTriangle], palette: &[Vec3]) -> Vec<RightTriangle> {
    frame
        .iter()
        .filter(|shaded| is_visible(shaded))
        .flat_map(|shaded| {
            let depth = shaded.depth();
            let theme_color = palette::nearest(shaded.color, palette);
            let flat = shaded.triangle.map(Vec3::truncate);
            geometry::split(&flat)
                .map(|half| RightTriangle::new(geometry::transform_of(&half), depth, theme_color))
        })
        .collect()
}

/// Inside the depth range and front-facing. Degenerate (zero winding)
/// triangles are culled with the back faces.
#[must_use]
pub fn is_visible(triangle: &ShadedTriangle) -> bool {
    let depth = triangle.depth();
    // Zero winding is culled too; a degenerate triangle has no altitude to split on.
    (0.0..=1.0).contains(&depth) && triangle.winding() > 0.0
}
