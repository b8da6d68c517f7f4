//! # Height Sampling
//!
//! Maps pixel intensity to elevation: `h = intensity / 255 * height_scale`.

use config::constants::MAX_INTENSITY;

use crate::raster::RasterImage;

/// Row-major grid of heights, one per pixel.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::{HeightField, RasterImage};
///
/// let image = RasterImage::from_u8(2, 1, 1, vec![0, 255]).unwrap();
/// let field = HeightField::sample(&image, 20.0);
/// assert_eq!(field.height_at(0, 0), 0.0);
/// assert_eq!(field.height_at(1, 0), 20.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    width: usize,
    height: usize,
    heights: Vec<f64>,
}

impl HeightField {
    /// Samples channel 0 of every pixel of `image`.
    pub fn sample(image: &RasterImage, height_scale: f64) -> Self {
        let heights = image
            .intensities()
            .map(|intensity| intensity_to_height(intensity, height_scale))
            .collect();
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            heights,
        }
    }

    /// Builds a field from precomputed heights.
    ///
    /// Returns `None` when `heights.len() != width * height`.
    pub fn from_heights(width: usize, height: usize, heights: Vec<f64>) -> Option<Self> {
        (heights.len() == width * height).then_some(Self {
            width,
            height,
            heights,
        })
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Height of the cell at column `x`, row `y`.
    #[inline]
    pub fn height_at(&self, x: usize, y: usize) -> f64 {
        self.heights[y * self.width + x]
    }

    /// All heights, row-major.
    #[inline]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    /// `(x, y, height)` triples in row-major order.
    pub fn samples(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.heights
            .iter()
            .enumerate()
            .map(move |(i, &h)| (i % self.width, i / self.width, h))
    }

    /// Smallest and largest height, or `None` for an empty field.
    pub fn range(&self) -> Option<(f64, f64)> {
        let mut iter = self.heights.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), h| (lo.min(h), hi.max(h))))
    }
}

/// Converts one 8-bit intensity to a height.
#[inline]
pub fn intensity_to_height(intensity: u8, height_scale: f64) -> f64 {
    intensity as f64 / MAX_INTENSITY * height_scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_intensity_endpoints() {
        assert_eq!(intensity_to_height(0, 40.0), 0.0);
        assert_eq!(intensity_to_height(255, 40.0), 40.0);
        assert_relative_eq!(intensity_to_height(128, 20.0), 128.0 / 255.0 * 20.0);
    }

    #[test]
    fn test_sample_uses_first_channel() {
        let image = RasterImage::from_u8(2, 1, 3, vec![255, 0, 0, 0, 255, 255]).unwrap();
        let field = HeightField::sample(&image, 10.0);
        assert_eq!(field.heights(), &[10.0, 0.0]);
    }

    #[test]
    fn test_samples_are_row_major() {
        let image = RasterImage::from_u8(2, 2, 1, vec![0, 51, 102, 255]).unwrap();
        let field = HeightField::sample(&image, 10.0);
        let triples: Vec<_> = field.samples().collect();
        assert_eq!(triples.len(), 4);
        assert_eq!((triples[1].0, triples[1].1), (1, 0));
        assert_eq!((triples[2].0, triples[2].1), (0, 1));
        assert_relative_eq!(triples[1].2, 2.0, epsilon = 1e-12);
        assert_relative_eq!(triples[3].2, 10.0);
    }

    #[test]
    fn test_heights_never_negative() {
        let image = RasterImage::from_u8(256, 1, 1, (0..=255).collect()).unwrap();
        let field = HeightField::sample(&image, 10.0);
        let (lo, hi) = field.range().unwrap();
        assert_eq!(lo, 0.0);
        assert_eq!(hi, 10.0);
    }

    #[test]
    fn test_from_heights_checks_length() {
        assert!(HeightField::from_heights(2, 2, vec![0.0; 3]).is_none());
        assert!(HeightField::from_heights(2, 2, vec![0.0; 4]).is_some());
    }

    #[test]
    fn test_empty_field_has_no_range() {
        let field = HeightField::from_heights(0, 0, vec![]).unwrap();
        assert!(field.range().is_none());
    }
}
