//! # Error Types
//!
//! Error types for the conversion stages. Every stage returns a
//! [`ConvertResult`]; only the pipeline boundary turns failures into the
//! empty-path sentinel.
//!
//! ## Error Policy
//!
//! - Out-of-range parameters are rejected, never clamped
//! - No file is left behind when export fails
//! - Errors include context for debugging

use std::fmt;

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while converting an image into an STL file.
///
/// ## Example
///
/// ```rust
/// use heightmap_stl::ConvertError;
///
/// let err = ConvertError::invalid_image("width is zero");
/// assert!(err.to_string().contains("width is zero"));
/// ```
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input buffer is zero-sized or its samples do not match its shape.
    #[error("Invalid image: {message}")]
    InvalidImage {
        /// What was wrong with the buffer.
        message: String,
    },

    /// A scalar parameter fell outside its documented bounds.
    #[error("Parameter '{name}' out of range: {value} (expected {min}..={max})")]
    ParameterRange {
        /// Parameter name as the host exposes it.
        name: &'static str,
        /// Rejected value.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },

    /// Pipeline-wide settings were rejected by the config crate.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The grid was too small to produce a single triangle.
    #[error("Mesh has no faces to export")]
    EmptyMesh,

    /// A face references a vertex that does not exist.
    #[error("Invalid mesh: {message}")]
    InvalidMesh {
        /// Description of the offending face.
        message: String,
    },

    /// The export path could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Creates an invalid image error.
    pub fn invalid_image(message: impl Into<String>) -> Self {
        Self::InvalidImage {
            message: message.into(),
        }
    }

    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}

/// Result type alias for conversion stages.
pub type ConvertResult<T> = Result<T, ConvertError>;

// =============================================================================
// PIPELINE STAGES
// =============================================================================

/// Pipeline component that produced a failure.
///
/// Height sampling, grid building and normalization cannot fail once the
/// resampler has produced a non-empty image, so they have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parameter validation before any work starts.
    Parameters,
    /// Bounded bicubic resize.
    Resampler,
    /// Path resolution and STL serialization.
    Exporter,
}

impl Stage {
    /// Component name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Stage::Parameters => "parameters",
            Stage::Resampler => "image resampler",
            Stage::Exporter => "mesh exporter",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A [`ConvertError`] tagged with the stage that raised it.
#[derive(Debug, Error)]
#[error("{stage}: {source}")]
pub struct PipelineError {
    /// Failing component.
    pub stage: Stage,
    /// Underlying error.
    #[source]
    pub source: ConvertError,
}

impl PipelineError {
    /// Wraps `source` with the stage that produced it.
    pub fn new(stage: Stage, source: ConvertError) -> Self {
        Self { stage, source }
    }
}

/// Extension for tagging stage results in the pipeline.
pub(crate) trait StageContext<T> {
    fn stage(self, stage: Stage) -> Result<T, PipelineError>;
}

impl<T> StageContext<T> for ConvertResult<T> {
    fn stage(self, stage: Stage) -> Result<T, PipelineError> {
        self.map_err(|source| PipelineError::new(stage, source))
    }
}

// =============================================================================
// TESTS
// =============================================================================
