//! # Conversion Pipeline
//!
//! Runs the stages in order and reports which one failed.
//!
//! ```text
//! RasterImage → resample → HeightField → grid Mesh → normalize → STL file
//! ```
//!
//! [`try_convert`] is the typed entry point. [`convert_image_to_stl`] is the
//! host-facing contract: it never returns an error, it logs the failure and
//! hands back an empty string instead of a path.

use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Stage, StageContext};
use crate::export::export_mesh;
use crate::grid::build_grid_mesh;
use crate::height::HeightField;
use crate::normalize::normalize;
use crate::params::ConversionParams;
use crate::raster::{resample, RasterImage};

/// Converts `image` into an STL file at (or next to) `save_path`.
///
/// Returns the path actually written, which differs from `save_path` when a
/// file already exists there.
pub fn try_convert(
    image: &RasterImage,
    save_path: &Path,
    params: &ConversionParams,
) -> Result<PathBuf, PipelineError> {
    params.validate().stage(Stage::Parameters)?;

    let resampled = resample(image, params.max_resolution).stage(Stage::Resampler)?;
    let field = HeightField::sample(&resampled, params.height_scale);
    if let Some((low, high)) = field.range() {
        log::debug!(
            "height field {}x{}, z in [{}, {}]",
            field.width(),
            field.height(),
            low,
            high
        );
    }

    // a 1-pixel-wide result yields vertices only; the exporter rejects it
    let mut mesh = build_grid_mesh(&field, params.x_scale, params.y_scale);
    normalize(
        &mut mesh,
        field.width(),
        field.height(),
        params.x_scale,
        params.y_scale,
    );

    export_mesh(&mesh, save_path, params.format).stage(Stage::Exporter)
}

/// Converts `image` with the given scales and returns the written path, or
/// an empty string if any stage failed.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::{convert_image_to_stl, RasterImage};
///
/// let empty = RasterImage::from_u8(0, 0, 1, vec![]).unwrap();
/// assert_eq!(convert_image_to_stl(&empty, "out.stl", 20.0, 1.0, 1.0), "");
/// ```
pub fn convert_image_to_stl(
    image: &RasterImage,
    save_path: &str,
    height_scale: f64,
    x_scale: f64,
    y_scale: f64,
) -> String {
    let params = ConversionParams {
        height_scale,
        x_scale,
        y_scale,
        ..ConversionParams::default()
    };
    convert_with_params(image, save_path, &params)
}

/// Like [`convert_image_to_stl`], taking the full parameter set.
pub fn convert_with_params(image: &RasterImage, save_path: &str, params: &ConversionParams) -> String {
    match try_convert(image, Path::new(save_path), params) {
        Ok(path) => host_path(path),
        Err(err) => {
            log::error!("{}: {}", err.stage, err.source);
            String::new()
        }
    }
}

/// The written path as a host string, or `""` when it is not valid UTF-8.
/// A lossy conversion would hand back a name that does not exist on disk.
fn host_path(path: PathBuf) -> String {
    match path.into_os_string().into_string() {
        Ok(path) => path,
        Err(raw) => {
            log::error!(
                "{}: written path is not valid UTF-8: {}",
                Stage::Exporter,
                raw.to_string_lossy()
            );
            String::new()
        }
    }
}
