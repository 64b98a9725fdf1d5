//! Error Types
//!
//! This module defines the error types used throughout the converter.
//!
//! # Overview
//!
//! Every failure of a conversion is a precondition violation in the scene or
//! in the render settings. None of them are transient: the render is aborted
//! and no partial result is produced.
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, ConvertError>`.
//!
//! ```rust,ignore
//! use polyrhythm::errors::{ConvertError, Result};
//!
//! fn convert() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the converter.
#[derive(Error, Debug)]
pub enum ConvertError {
    // ========================================================================
    // Scene Errors
    // ========================================================================
    /// The scene does not contain any camera.
    #[error("No camera found in scene")]
    NoCamera,

    /// The scene does not contain a directional light.
    #[error("No directional light found in scene")]
    NoDirectionalLight,

    /// A camera or light refers to a node that is not part of the node tree.
    #[error("{kind} node '{name}' not found in scene")]
    NodeNotFound {
        /// What was looking for the node ("Camera", "Light")
        kind: &'static str,
        /// The node name that could not be resolved
        name: String,
    },

    // ========================================================================
    // Animation Errors
    // ========================================================================
    /// Keyframe interpolation was invoked on a track without keys.
    #[error("No keys to interpolate on")]
    EmptyTrack,

    // ========================================================================
    // Packing Errors
    // ========================================================================
    /// A single frame produced more right triangles than the pool can hold.
    #[error("Prefab object pool capacity exceeded: {count} triangles, capacity {capacity}")]
    CapacityExceeded {
        /// Number of right triangles in the offending frame
        count: usize,
        /// Fixed pool capacity
        capacity: usize,
    },

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Render settings are out of their valid range.
    #[error("Invalid render settings: {0}")]
    InvalidSettings(String),

    /// JSON (de)serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, ConvertError>`.
pub type Result<T> = std::result::Result<T, ConvertError>;
