//! # Relief Mesh
//!
//! Vertex positions plus index triples, the shape shared by the grid
//! builder, the normalizer and the exporter.
//!
//! A vertex is identified by its position in the vertex list. Coordinates
//! stay in f64 until the exporter narrows them for STL.

use glam::{DMat4, DVec3};

use crate::error::{ConvertError, ConvertResult};

/// Indexed triangle mesh.
///
/// Faces are wound so that the right-hand rule gives the facet normal.
///
/// # Example
///
/// ```rust
/// use heightmap_stl::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// let a = mesh.push_vertex(DVec3::ZERO);
/// let b = mesh.push_vertex(DVec3::X);
/// let c = mesh.push_vertex(DVec3::Y);
/// mesh.push_face([a, b, c]);
/// assert_eq!(mesh.facet_normal(0), DVec3::Z);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
}

impl Mesh {
    /// Empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given number of vertices and faces.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// True when there are no vertices at all. A vertices-only mesh is not
    /// empty, but still has nothing to export.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Appends a vertex, returning its ID.
    pub fn push_vertex(&mut self, position: DVec3) -> u32 {
        self.vertices.push(position);
        (self.vertices.len() - 1) as u32
    }

    /// Appends a face. Indices are checked by [`Mesh::validate`], not here.
    pub fn push_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Vertex positions, indexed by ID.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Index triples in insertion order.
    #[inline]
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Position of vertex `id`.
    #[inline]
    pub fn vertex(&self, id: u32) -> DVec3 {
        self.vertices[id as usize]
    }

    /// Corner positions of face `index`, in winding order.
    #[inline]
    pub fn face_corners(&self, index: usize) -> [DVec3; 3] {
        self.faces[index].map(|id| self.vertex(id))
    }

    /// Unit normal of face `index` by the right-hand rule,
    /// `normalize((v1 - v0) × (v2 - v0))`.
    ///
    /// Degenerate faces yield the zero vector.
    pub fn facet_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.face_corners(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// `(min, max)` corners of the axis-aligned bounds; both zero when the
    /// mesh has no vertices.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }

    /// Mean vertex position.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Lowest Z, or 0 for a mesh without vertices.
    pub fn min_z(&self) -> f64 {
        self.bounding_box().0.z
    }

    /// Applies an affine transform to every vertex. Faces are untouched, so
    /// a mirroring matrix would flip every normal.
    pub fn transform(&mut self, matrix: &DMat4) {
        self.vertices
            .iter_mut()
            .for_each(|v| *v = matrix.transform_point3(*v));
    }

    /// Shifts every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        self.vertices.iter_mut().for_each(|v| *v += offset);
    }

    /// Checks that every face names three distinct, existing vertices.
    pub fn validate(&self) -> ConvertResult<()> {
        let count = self.vertices.len();

        for (i, face) in self.faces.iter().enumerate() {
            if let Some(bad) = face.iter().find(|&&id| id as usize >= count) {
                return Err(ConvertError::invalid_mesh(format!(
                    "face {i} references vertex {bad} but mesh has {count} vertices"
                )));
            }
            let [a, b, c] = *face;
            if a == b || b == c || a == c {
                return Err(ConvertError::invalid_mesh(format!(
                    "face {i} repeats a vertex: {face:?}"
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.push_vertex(DVec3::ZERO);
        let b = mesh.push_vertex(DVec3::X);
        let c = mesh.push_vertex(DVec3::Y);
        mesh.push_face([a, b, c]);
        mesh
    }

    #[test]
    fn fresh_mesh_has_nothing() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!((mesh.vertex_count(), mesh.face_count()), (0, 0));
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn push_vertex_returns_sequential_ids() {
        let mut mesh = Mesh::with_capacity(2, 0);
        assert_eq!(mesh.push_vertex(DVec3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(mesh.push_vertex(DVec3::ONE), 1);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn normal_follows_winding() {
        let mut mesh = right_triangle();
        assert_eq!(mesh.facet_normal(0), DVec3::Z);

        mesh.push_face([0, 2, 1]);
        assert_eq!(mesh.facet_normal(1), DVec3::NEG_Z);
    }

    #[test]
    fn collinear_face_has_zero_normal() {
        let mut mesh = Mesh::new();
        for x in [0.0, 1.0, 2.0] {
            mesh.push_vertex(DVec3::new(x, 0.0, 0.0));
        }
        mesh.push_face([0, 1, 2]);
        assert_eq!(mesh.facet_normal(0), DVec3::ZERO);
    }

    #[test]
    fn bounds_and_lowest_point() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(DVec3::new(-1.0, 5.0, -3.0));
        mesh.push_vertex(DVec3::new(4.0, -2.0, 6.0));
        let (lo, hi) = mesh.bounding_box();
        assert_eq!(lo, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(hi, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(mesh.min_z(), -3.0);
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(DVec3::new(-2.0, 0.0, 1.0));
        mesh.push_vertex(DVec3::new(2.0, 4.0, 1.0));
        assert_eq!(mesh.centroid(), DVec3::new(0.0, 2.0, 1.0));
        assert_eq!(Mesh::new().centroid(), DVec3::ZERO);
    }

    #[test]
    fn translate_then_scale() {
        let mut mesh = right_triangle();
        mesh.translate(DVec3::new(1.0, 1.0, 0.0));
        assert_eq!(mesh.face_corners(0)[0], DVec3::new(1.0, 1.0, 0.0));

        mesh.transform(&DMat4::from_scale(DVec3::splat(2.0)));
        assert_eq!(mesh.vertex(1), DVec3::new(4.0, 2.0, 0.0));
    }

    #[test]
    fn validate_accepts_well_formed_faces() {
        assert!(right_triangle().validate().is_ok());
    }

    #[test]
    fn validate_rejects_dangling_index() {
        let mut mesh = Mesh::new();
        mesh.push_vertex(DVec3::ZERO);
        mesh.push_face([0, 1, 2]);
        match mesh.validate() {
            Err(ConvertError::InvalidMesh { message }) => assert!(message.contains("vertex 1")),
            other => panic!("expected InvalidMesh, got {other:?}"),
        }
    }

    #[test]
    fn validate_rejects_repeated_index() {
        let mut mesh = right_triangle();
        mesh.push_face([0, 0, 1]);
        assert!(matches!(mesh.validate(), Err(ConvertError::InvalidMesh { .. })));
    }
}
