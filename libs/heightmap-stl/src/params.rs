//! # Conversion Parameters
//!
//! Per-call scalar parameters, validated once before the pipeline runs.

use config::constants::{
    ConversionConfig, ScaleBounds, HEIGHT_SCALE_BOUNDS, HEIGHT_SCALE_DEFAULT, XY_SCALE_BOUNDS,
    XY_SCALE_DEFAULT,
};

use crate::error::{ConvertError, ConvertResult};
use crate::export::StlFormat;

/// Scalar parameters of one conversion.
///
/// Values outside the documented bounds are rejected by [`ConversionParams::new`]
/// rather than clamped.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::ConversionParams;
///
/// let params = ConversionParams::new(20.0, 1.0, 0.5).unwrap();
/// assert_eq!(params.max_resolution, 500);
/// assert!(ConversionParams::new(5.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionParams {
    /// Z value reached by a full-intensity pixel, in `[10, 40]`.
    pub height_scale: f64,
    /// Spacing between grid columns, in `[0.1, 10]`.
    pub x_scale: f64,
    /// Spacing between grid rows, in `[0.1, 10]`.
    pub y_scale: f64,
    /// Longest side of the resampled image, in `1..=500` pixels.
    pub max_resolution: u32,
    /// STL encoding of the exported file.
    pub format: StlFormat,
}

impl ConversionParams {
    /// Builds validated parameters with the default resolution and binary STL.
    pub fn new(height_scale: f64, x_scale: f64, y_scale: f64) -> ConvertResult<Self> {
        let params = Self {
            height_scale,
            x_scale,
            y_scale,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Takes the resolution limit from a validated config.
    pub fn with_config(mut self, config: ConversionConfig) -> Self {
        self.max_resolution = config.max_resolution;
        self
    }

    /// Selects the STL encoding.
    pub fn with_format(mut self, format: StlFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks every parameter against its bounds.
    pub fn validate(&self) -> ConvertResult<()> {
        check("height_scale", self.height_scale, HEIGHT_SCALE_BOUNDS)?;
        check("x_scale", self.x_scale, XY_SCALE_BOUNDS)?;
        check("y_scale", self.y_scale, XY_SCALE_BOUNDS)?;
        ConversionConfig::new(self.max_resolution)?;
        Ok(())
    }
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            height_scale: HEIGHT_SCALE_DEFAULT,
            x_scale: XY_SCALE_DEFAULT,
            y_scale: XY_SCALE_DEFAULT,
            max_resolution: ConversionConfig::default().max_resolution,
            format: StlFormat::default(),
        }
    }
}

fn check(name: &'static str, value: f64, bounds: ScaleBounds) -> ConvertResult<()> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(ConvertError::ParameterRange {
            name,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{ConfigError, MAX_RESOLUTION};

    #[test]
    fn test_defaults_are_valid() {
        let params = ConversionParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.height_scale, 20.0);
        assert_eq!(params.x_scale, 1.0);
        assert_eq!(params.y_scale, 1.0);
        assert_eq!(params.format, StlFormat::Binary);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ConversionParams::new(10.0, 0.1, 0.1).is_ok());
        assert!(ConversionParams::new(40.0, 10.0, 10.0).is_ok());
    }

    #[test]
    fn test_rejects_each_parameter() {
        match ConversionParams::new(40.1, 1.0, 1.0) {
            Err(ConvertError::ParameterRange { name, .. }) => assert_eq!(name, "height_scale"),
            other => panic!("expected range error, got {other:?}"),
        }
        match ConversionParams::new(20.0, 0.0, 1.0) {
            Err(ConvertError::ParameterRange { name, .. }) => assert_eq!(name, "x_scale"),
            other => panic!("expected range error, got {other:?}"),
        }
        match ConversionParams::new(20.0, 1.0, 11.0) {
            Err(ConvertError::ParameterRange { name, .. }) => assert_eq!(name, "y_scale"),
            other => panic!("expected range error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_nan() {
        assert!(ConversionParams::new(f64::NAN, 1.0, 1.0).is_err());
        assert!(ConversionParams::new(20.0, f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_zero_resolution_is_config_error() {
        let params = ConversionParams {
            max_resolution: 0,
            ..ConversionParams::default()
        };
        assert!(matches!(params.validate(), Err(ConvertError::Config(_))));
    }

    #[test]
    fn test_oversized_resolution_is_config_error() {
        for max_resolution in [MAX_RESOLUTION + 1, 100_000, u32::MAX] {
            let params = ConversionParams {
                max_resolution,
                ..ConversionParams::default()
            };
            match params.validate() {
                Err(ConvertError::Config(ConfigError::InvalidResolution(value))) => {
                    assert_eq!(value, max_resolution)
                }
                other => panic!("expected resolution error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_with_config_overrides_resolution() {
        let config = ConversionConfig::new(64).unwrap();
        let params = ConversionParams::default().with_config(config);
        assert_eq!(params.max_resolution, 64);
    }
}
