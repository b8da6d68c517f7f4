//! # Heightmap STL
//!
//! Converts a 2D raster image into a printable STL relief: pixel intensity
//! becomes height over a regular triangulated grid.
//!
//! ## Architecture
//!
//! ```text
//! RasterImage
//!     │ raster::resample      (bicubic, longest side = max_resolution)
//!     ▼
//! HeightField                 (channel 0 / 255 · height_scale)
//!     │ grid::build_grid_mesh (2 triangles per cell)
//!     ▼
//! Mesh
//!     │ normalize::normalize  (center XY, rotate 180° about Z)
//!     ▼
//! export::export_mesh         (binary/ASCII STL, never overwrites)
//! ```
//!
//! Every stage returns a [`ConvertResult`]. [`convert_image_to_stl`] is the
//! only place failures are swallowed: it logs them and returns `""`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use heightmap_stl::{convert_image_to_stl, RasterImage};
//!
//! let image = RasterImage::from_dynamic(&image::open("terrain.png").unwrap());
//! let path = convert_image_to_stl(&image, "terrain.stl", 20.0, 1.0, 1.0);
//! if path.is_empty() {
//!     eprintln!("conversion failed");
//! }
//! ```

pub mod error;
pub mod export;
pub mod grid;
pub mod height;
pub mod mesh;
pub mod normalize;
pub mod params;
pub mod pipeline;
pub mod raster;

pub use error::{ConvertError, ConvertResult, PipelineError, Stage};
pub use export::StlFormat;
pub use height::HeightField;
pub use mesh::Mesh;
pub use params::ConversionParams;
pub use pipeline::{convert_image_to_stl, convert_with_params, try_convert};
pub use raster::RasterImage;
