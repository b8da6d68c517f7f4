//! # Raster Images
//!
//! Decoded pixel buffers and the bounded bicubic resampler.
//!
//! Samples are stored as interleaved `u8` channels in row-major order.
//! Channel 0 carries the intensity used for height; any further channels
//! travel along untouched.


use image::imageops::FilterType;
use image::{DynamicImage, GrayAlphaImage, GrayImage, RgbImage, RgbaImage};

use crate::error::{ConvertError, ConvertResult};

/// A decoded image with 1 to 4 interleaved `u8` channels.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::RasterImage;
///
/// let image = RasterImage::from_u8(2, 1, 1, vec![0, 255]).unwrap();
/// assert_eq!(image.intensities().collect::<Vec<_>>(), vec![0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl RasterImage {
    /// Wraps an interleaved byte buffer.
    ///
    /// Zero-sized images are accepted here and rejected by [`resample`];
    /// a sample count that does not match `width * height * channels` is not.
    pub fn from_u8(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> ConvertResult<Self> {
        if !(1..=4).contains(&channels) {
            return Err(ConvertError::invalid_image(format!(
                "unsupported channel count {channels}"
            )));
        }
        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(ConvertError::invalid_image(format!(
                "expected {expected} samples for {width}x{height}x{channels}, got {}",
                samples.len()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Converts normalized float samples (`0.0..=1.0`) into bytes.
    ///
    /// Each sample becomes `clamp(255 * v, 0, 255)` truncated toward zero;
    /// NaN maps to 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use heightmap_stl::RasterImage;
    ///
    /// let image = RasterImage::from_unit_f32(3, 1, 1, &[-0.5, 0.5, 2.0]).unwrap();
    /// assert_eq!(image.samples(), &[0, 127, 255]);
    /// ```
    pub fn from_unit_f32(
        width: u32,
        height: u32,
        channels: u8,
        samples: &[f32],
    ) -> ConvertResult<Self> {
        let bytes = samples
            .iter()
            .map(|&v| (v * 255.0).clamp(0.0, 255.0) as u8)
            .collect();
        Self::from_u8(width, height, channels, bytes)
    }

    /// Copies a decoded [`DynamicImage`], keeping its channel count.
    ///
    /// Wider sample types (16-bit, float) are narrowed to 8 bits.
    pub fn from_dynamic(image: &DynamicImage) -> Self {
        let (width, height) = (image.width(), image.height());
        let (channels, samples) = match image.color().channel_count() {
            1 => (1, image.to_luma8().into_raw()),
            2 => (2, image.to_luma_alpha8().into_raw()),
            3 => (3, image.to_rgb8().into_raw()),
            _ => (4, image.to_rgba8().into_raw()),
        };
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    /// Rebuilds an `image` buffer with the same channel layout.
    pub fn to_dynamic(&self) -> ConvertResult<DynamicImage> {
        let (w, h) = (self.width, self.height);
        let raw = self.samples.clone();
        let image = match self.channels {
            1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
            2 => GrayAlphaImage::from_raw(w, h, raw).map(DynamicImage::ImageLumaA8),
            3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
            _ => RgbaImage::from_raw(w, h, raw).map(DynamicImage::ImageRgba8),
        };
        image.ok_or_else(|| ConvertError::invalid_image("sample buffer does not match dimensions"))
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of interleaved channels per pixel.
    #[inline]
    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// Raw interleaved samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Returns true if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Channel 0 of every pixel, row-major.
    pub fn intensities(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples
            .chunks_exact(self.channels as usize)
            .map(|pixel| pixel[0])
    }
}

/// Computes the resampled size for a `width × height` image.
///
/// `scale = min(R / width, R / height)` is applied to both axes and the
/// results are floored. Scale is not clamped to 1, so images smaller than
/// `R` are enlarged.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::raster::target_dimensions;
///
/// assert_eq!(target_dimensions(1000, 500, 500).unwrap(), (500, 250));
/// assert_eq!(target_dimensions(100, 50, 500).unwrap(), (500, 250));
/// assert!(target_dimensions(0, 10, 500).is_err());
/// ```
pub fn target_dimensions(width: u32, height: u32, max_resolution: u32) -> ConvertResult<(u32, u32)> {
    if width == 0 || height == 0 {
        return Err(ConvertError::invalid_image(format!(
            "image has zero size ({width}x{height})"
        )));
    }
    let limit = max_resolution as f64;
    let scale = (limit / width as f64).min(limit / height as f64);
    let new_width = (width as f64 * scale).floor() as u32;
    let new_height = (height as f64 * scale).floor() as u32;
    if new_width == 0 || new_height == 0 {
        return Err(ConvertError::invalid_image(format!(
            "{width}x{height} collapses to {new_width}x{new_height} at resolution {max_resolution}"
        )));
    }
    Ok((new_width, new_height))
}

/// Resizes `image` so its longer side equals `max_resolution`, using
/// bicubic (Catmull-Rom) interpolation on every channel.
pub fn resample(image: &RasterImage, max_resolution: u32) -> ConvertResult<RasterImage> {
    let (new_width, new_height) = target_dimensions(image.width, image.height, max_resolution)?;
    log::debug!(
        "resampling {}x{} -> {}x{} ({} channels)",
        image.width,
        image.height,
        new_width,
        new_height,
        image.channels
    );

    if (new_width, new_height) == (image.width, image.height) {
        return Ok(image.clone());
    }

    let resized = image
        .to_dynamic()?
        .resize_exact(new_width, new_height, FilterType::CatmullRom);
    Ok(RasterImage::from_dynamic(&resized))
}
