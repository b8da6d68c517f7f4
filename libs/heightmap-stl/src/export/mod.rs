//! # STL Export
//!
//! Serializes a [`Mesh`] as binary or ASCII STL and writes it next to any
//! existing files without overwriting them.
//!
//! ## Collision Handling
//!
//! ```text
//! model.stl  (exists) → model_1.stl (exists) → model_2.stl (free, written)
//! ```
//!
//! Probing is sequential and not atomic; two writers racing for the same
//! base path may pick the same name.
//!
//! ## Failure Policy
//!
//! The whole file is encoded in memory before the disk is touched, so an
//! empty or malformed mesh never creates a file. A failed write removes
//! whatever partial file it left.


use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use config::constants::COLLISION_SEPARATOR;
use glam::DVec3;
use stl_io::{Normal, Triangle, Vertex};

use crate::error::{ConvertError, ConvertResult};
use crate::mesh::Mesh;

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    /// 80-byte header, facet count, 50 bytes per facet.
    #[default]
    Binary,
    /// Human-readable `solid … endsolid` text.
    Ascii,
}

/// Returns `path` if nothing exists there, otherwise the first free
/// `stem_N.ext` with `N = 1, 2, …`.
pub fn resolve_available_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }
    let mut counter: u64 = 1;
    loop {
        let candidate = numbered_path(path, counter);
        if !candidate.exists() {
            log::debug!("{} exists, using {}", path.display(), candidate.display());
            return candidate;
        }
        counter += 1;
    }
}

/// `path` with `_counter` inserted between the file stem and extension.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use heightmap_stl::export::numbered_path;
///
/// assert_eq!(numbered_path(Path::new("out/model.stl"), 2), Path::new("out/model_2.stl"));
/// assert_eq!(numbered_path(Path::new("model"), 1), Path::new("model_1"));
/// ```
pub fn numbered_path(path: &Path, counter: u64) -> PathBuf {
    let mut name = path
        .file_stem()
        .map(OsStr::to_os_string)
        .unwrap_or_default();
    name.push(COLLISION_SEPARATOR);
    name.push(counter.to_string());
    if let Some(extension) = path.extension() {
        name.push(".");
        name.push(extension);
    }
    path.with_file_name(name)
}

/// Checks that `mesh` has at least one face and no dangling indices.
pub fn ensure_exportable(mesh: &Mesh) -> ConvertResult<()> {
    if mesh.face_count() == 0 {
        return Err(ConvertError::EmptyMesh);
    }
    mesh.validate()
}

/// Encodes `mesh` in memory.
///
/// `name` is only used by the ASCII `solid` line.
pub fn encode_stl(mesh: &Mesh, format: StlFormat, name: &str) -> ConvertResult<Vec<u8>> {
    ensure_exportable(mesh)?;

    let mut buffer = Vec::new();
    match format {
        StlFormat::Binary => stl_io::write_stl(&mut buffer, facets(mesh))?,
        StlFormat::Ascii => write_ascii(&mut buffer, mesh, name)?,
    }
    Ok(buffer)
}

/// Writes `mesh` to the first free path derived from `requested` and
/// returns the path actually written.
pub fn export_mesh(mesh: &Mesh, requested: &Path, format: StlFormat) -> ConvertResult<PathBuf> {
    let name = requested
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("heightmap");
    let bytes = encode_stl(mesh, format, name)?;

    let path = resolve_available_path(requested);
    if let Err(err) = fs::write(&path, &bytes) {
        // the path was free before the write, so anything there is ours
        let _ = fs::remove_file(&path);
        return Err(err.into());
    }

    log::info!(
        "wrote {} facets ({} bytes, {:?}) to {}",
        mesh.face_count(),
        bytes.len(),
        format,
        path.display()
    );
    Ok(path)
}

fn to_f32(v: DVec3) -> [f32; 3] {
    v.as_vec3().to_array()
}

fn facets(mesh: &Mesh) -> impl ExactSizeIterator<Item = Triangle> + '_ {
    (0..mesh.face_count()).map(move |i| Triangle {
        normal: Normal::new(to_f32(mesh.facet_normal(i))),
        vertices: mesh
            .face_corners(i)
            .map(|v| Vertex::new(to_f32(v))),
    })
}

fn write_ascii<W: Write>(out: &mut W, mesh: &Mesh, name: &str) -> std::io::Result<()> {
    writeln!(out, "solid {name}")?;
    for i in 0..mesh.face_count() {
        let [nx, ny, nz] = to_f32(mesh.facet_normal(i));
        writeln!(out, "  facet normal {nx:e} {ny:e} {nz:e}")?;
        writeln!(out, "    outer loop")?;
        for vertex in mesh.face_corners(i) {
            let [x, y, z] = to_f32(vertex);
            writeln!(out, "      vertex {x:e} {y:e} {z:e}")?;
        }
        writeln!(out, "    endloop")?;
        writeln!(out, "  endfacet")?;
    }
    writeln!(out, "endsolid {name}")?;
    Ok(())
}
