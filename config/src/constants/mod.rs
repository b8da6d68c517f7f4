//! Resolution limit, parameter bounds, and export naming conventions for the
//! heightmap-to-STL pipeline.
//!
//! Bounds are inclusive. Out-of-range values are rejected by the pipeline,
//! never clamped.

use std::fmt;

/// Upper bound, in pixels, for the longest side of the resampled image.
///
/// The resampler scales both axes by `min(R / w, R / h)`, so the larger
/// dimension lands on this value and the other follows the aspect ratio.
///
/// # Examples
/// ```
/// use config::constants::MAX_RESOLUTION;
/// let (w, h) = (1000.0_f64, 250.0_f64);
/// let scale = (MAX_RESOLUTION as f64 / w).min(MAX_RESOLUTION as f64 / h);
/// assert_eq!((w * scale) as u32, 500);
/// assert_eq!((h * scale) as u32, 125);
/// ```
pub const MAX_RESOLUTION: u32 = 500;

/// Largest value an 8-bit intensity sample can take.
///
/// # Examples
/// ```
/// use config::constants::MAX_INTENSITY;
/// assert_eq!(255.0 / MAX_INTENSITY, 1.0);
/// ```
pub const MAX_INTENSITY: f64 = 255.0;

/// Lower bound for the height scale parameter (Z units at full intensity).
///
/// # Examples
/// ```
/// use config::constants::HEIGHT_SCALE_MIN;
/// assert_eq!(HEIGHT_SCALE_MIN, 10.0);
/// ```
pub const HEIGHT_SCALE_MIN: f64 = 10.0;

/// Upper bound for the height scale parameter.
///
/// # Examples
/// ```
/// use config::constants::HEIGHT_SCALE_MAX;
/// assert_eq!(HEIGHT_SCALE_MAX, 40.0);
/// ```
pub const HEIGHT_SCALE_MAX: f64 = 40.0;

/// Height scale used when the caller does not supply one.
///
/// # Examples
/// ```
/// use config::constants::HEIGHT_SCALE_DEFAULT;
/// assert_eq!(HEIGHT_SCALE_DEFAULT, 20.0);
/// ```
pub const HEIGHT_SCALE_DEFAULT: f64 = 20.0;

/// Lower bound for the X and Y grid spacing parameters.
///
/// # Examples
/// ```
/// use config::constants::XY_SCALE_MIN;
/// assert!(XY_SCALE_MIN > 0.0);
/// ```
pub const XY_SCALE_MIN: f64 = 0.1;

/// Upper bound for the X and Y grid spacing parameters.
///
/// # Examples
/// ```
/// use config::constants::XY_SCALE_MAX;
/// assert_eq!(XY_SCALE_MAX, 10.0);
/// ```
pub const XY_SCALE_MAX: f64 = 10.0;

/// Grid spacing used when the caller does not supply one.
///
/// # Examples
/// ```
/// use config::constants::XY_SCALE_DEFAULT;
/// assert_eq!(XY_SCALE_DEFAULT, 1.0);
/// ```
pub const XY_SCALE_DEFAULT: f64 = 1.0;

/// Separator placed between the file stem and the disambiguation counter
/// (`model.stl` → `model_1.stl`).
///
/// # Examples
/// ```
/// use config::constants::COLLISION_SEPARATOR;
/// assert_eq!(format!("model{COLLISION_SEPARATOR}1.stl"), "model_1.stl");
/// ```
pub const COLLISION_SEPARATOR: &str = "_";

/// File extension of exported meshes, without the leading dot.
///
/// # Examples
/// ```
/// use config::constants::STL_EXTENSION;
/// assert_eq!(STL_EXTENSION, "stl");
/// ```
pub const STL_EXTENSION: &str = "stl";

/// Closed interval a scalar parameter must fall into.
///
/// # Examples
/// ```
/// use config::constants::HEIGHT_SCALE_BOUNDS;
/// assert!(HEIGHT_SCALE_BOUNDS.contains(20.0));
/// assert!(!HEIGHT_SCALE_BOUNDS.contains(40.5));
/// assert!(!HEIGHT_SCALE_BOUNDS.contains(f64::NAN));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    /// Smallest accepted value (inclusive).
    pub min: f64,
    /// Largest accepted value (inclusive).
    pub max: f64,
}

impl ScaleBounds {
    /// Returns true when `value` is finite and inside `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

/// Accepted range for the height scale parameter.
pub const HEIGHT_SCALE_BOUNDS: ScaleBounds = ScaleBounds {
    min: HEIGHT_SCALE_MIN,
    max: HEIGHT_SCALE_MAX,
};

/// Accepted range for the X and Y scale parameters.
pub const XY_SCALE_BOUNDS: ScaleBounds = ScaleBounds {
    min: XY_SCALE_MIN,
    max: XY_SCALE_MAX,
};

/// Immutable snapshot of the pipeline settings that are not per-call
/// parameters.
///
/// # Examples
/// ```
/// use config::constants::ConversionConfig;
/// let config = ConversionConfig::default();
/// assert_eq!(config.max_resolution, 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Longest side, in pixels, of the resampled image. At most
    /// [`MAX_RESOLUTION`], which keeps every vertex index inside `u32`.
    pub max_resolution: u32,
}

impl ConversionConfig {
    /// Validates and builds a config. The resolution must lie in
    /// `1..=MAX_RESOLUTION`.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ConversionConfig;
    /// let cfg = ConversionConfig::new(256).expect("valid config");
    /// assert_eq!(cfg.max_resolution, 256);
    /// assert!(ConversionConfig::new(501).is_err());
    /// ```
    pub fn new(max_resolution: u32) -> Result<Self, ConfigError> {
        if !(1..=MAX_RESOLUTION).contains(&max_resolution) {
            return Err(ConfigError::InvalidResolution(max_resolution));
        }
        Ok(Self { max_resolution })
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            max_resolution: MAX_RESOLUTION,
        }
    }
}

/// Rejected [`ConversionConfig`] values.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The resolution limit is zero or above [`MAX_RESOLUTION`].
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => write!(
                f,
                "max_resolution must be in 1..={MAX_RESOLUTION}: {value}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
