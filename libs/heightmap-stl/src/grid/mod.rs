//! # Grid Mesh Builder
//!
//! Turns a height field into a regular lattice of vertices joined by two
//! triangles per cell.
//!
//! ## Layout
//!
//! ```text
//!  i1 ── i2        vertex (x, y) at ((W-1-x)·sx, y·sy, h[y][x])
//!  │  ╲  │         index = y·W + x
//!  i3 ── i4        triangles (i1, i2, i4) and (i1, i4, i3)
//! ```
//!
//! The X axis is mirrored so the rightmost pixel sits at X = 0; the
//! normalizer's 180° turn about Z undoes the mirror in the final print.


use glam::DVec3;

use crate::height::HeightField;
use crate::mesh::Mesh;

/// Number of triangles a `width × height` lattice produces.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::grid::face_count;
///
/// assert_eq!(face_count(500, 250), 2 * 499 * 249);
/// assert_eq!(face_count(1, 10), 0);
/// ```
#[inline]
pub fn face_count(width: usize, height: usize) -> usize {
    if width < 2 || height < 2 {
        0
    } else {
        2 * (width - 1) * (height - 1)
    }
}

/// Position of the lattice vertex for column `x`, row `y`.
#[inline]
pub fn grid_vertex(width: usize, x: usize, y: usize, z: f64, x_scale: f64, y_scale: f64) -> DVec3 {
    DVec3::new(
        (width - 1 - x) as f64 * x_scale,
        y as f64 * y_scale,
        z,
    )
}

/// The two triangles of the cell whose top-left corner is `(x, y)`.
#[inline]
pub fn cell_triangles(width: usize, x: usize, y: usize) -> [[u32; 3]; 2] {
    let i1 = (y * width + x) as u32;
    let i2 = (y * width + x + 1) as u32;
    let i3 = ((y + 1) * width + x) as u32;
    let i4 = ((y + 1) * width + x + 1) as u32;
    [[i1, i2, i4], [i1, i4, i3]]
}

/// Builds the lattice mesh for `field`.
///
/// Grids narrower or shorter than 2 produce vertices only; the exporter
/// rejects such meshes.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::{grid::build_grid_mesh, HeightField};
///
/// let field = HeightField::from_heights(3, 2, vec![0.0; 6]).unwrap();
/// let mesh = build_grid_mesh(&field, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.face_count(), 4);
/// ```
pub fn build_grid_mesh(field: &HeightField, x_scale: f64, y_scale: f64) -> Mesh {
    let (width, height) = (field.width(), field.height());
    let mut mesh = Mesh::with_capacity(width * height, face_count(width, height));

    for (x, y, z) in field.samples() {
        mesh.push_vertex(grid_vertex(width, x, y, z, x_scale, y_scale));
    }

    if width >= 2 && height >= 2 {
        for y in 0..height - 1 {
            for x in 0..width - 1 {
                for face in cell_triangles(width, x, y) {
                    mesh.push_face(face);
                }
            }
        }
    }

    log::debug!(
        "built {}x{} grid: {} vertices, {} triangles",
        width,
        height,
        mesh.vertex_count(),
        mesh.face_count()
    );
    mesh
}
