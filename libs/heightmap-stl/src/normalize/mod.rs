//! Centering and orientation for freshly built grid meshes.
//!
//! The lattice is shifted by half its nominal footprint
//! (`width·x_scale / 2`, `height·y_scale / 2`) and then turned 180° about Z.
//! Z is left alone: heights are never negative, so the floor already sits at
//! zero whenever the image contains a black pixel.

use std::f64::consts::PI;

use glam::{DMat4, DVec3};

use crate::mesh::Mesh;

/// XY shift that moves a `width × height` lattice onto the origin.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use heightmap_stl::normalize::centering_offset;
///
/// assert_eq!(centering_offset(4, 2, 1.0, 0.5), DVec3::new(-2.0, -0.5, 0.0));
/// ```
pub fn centering_offset(width: usize, height: usize, x_scale: f64, y_scale: f64) -> DVec3 {
    DVec3::new(
        -(width as f64 * x_scale) / 2.0,
        -(height as f64 * y_scale) / 2.0,
        0.0,
    )
}

/// Fixed orientation applied after centering: 180° about +Z.
pub fn orientation() -> DMat4 {
    DMat4::from_rotation_z(PI)
}

/// Centers `mesh` in XY and applies the fixed orientation.
///
/// `width` and `height` are the lattice dimensions the mesh was built from.
///
/// # Examples
/// ```
/// use heightmap_stl::{grid::build_grid_mesh, normalize::normalize, HeightField};
///
/// let field = HeightField::from_heights(2, 2, vec![0.0; 4]).unwrap();
/// let mut mesh = build_grid_mesh(&field, 1.0, 1.0);
/// normalize(&mut mesh, 2, 2, 1.0, 1.0);
/// let (min, max) = mesh.bounding_box();
/// assert!(min.x.abs() < 1e-9 && (max.x - 1.0).abs() < 1e-9);
/// ```
pub fn normalize(mesh: &mut Mesh, width: usize, height: usize, x_scale: f64, y_scale: f64) {
    mesh.translate(centering_offset(width, height, x_scale, y_scale));
    mesh.transform(&orientation());

    let (min, max) = mesh.bounding_box();
    log::debug!("normalized mesh bounds: min {:?}, max {:?}", min, max);
}
