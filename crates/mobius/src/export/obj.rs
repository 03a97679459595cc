//! Wavefront OBJ export.
//!
//! Vertices are written as `v x y z` lines in mesh order, followed by one
//! `f a b c` line per triangle with 1-based vertex references. No normals,
//! texture coordinates or groups are emitted.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::ExportError;
use crate::TriangleMesh;

/// File name offered for downloads.
pub const DEFAULT_FILE_NAME: &str = "mobius_strip.obj";

/// Stream `mesh` as OBJ text into `out`.
pub fn write_obj<W: Write>(mesh: &TriangleMesh, out: &mut W) -> Result<(), ExportError> {
    if mesh.num_vertices() == 0 {
        return Err(ExportError::EmptyGeometry);
    }

    for v in mesh.vertices.chunks(3) {
        writeln!(out, "v {} {} {}", v[0], v[1], v[2])?;
    }
    for tri in mesh.indices.chunks(3) {
        writeln!(out, "f {} {} {}", tri[0] + 1, tri[1] + 1, tri[2] + 1)?;
    }
    Ok(())
}

/// Export a mesh to OBJ bytes.
pub fn to_obj_bytes(mesh: &TriangleMesh) -> Result<Vec<u8>, ExportError> {
    let mut data = Vec::with_capacity(mesh.num_vertices() * 48 + mesh.num_triangles() * 24);
    write_obj(mesh, &mut data)?;
    Ok(data)
}

/// Write a mesh to an OBJ file.
pub fn export_obj(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path.as_ref())?);
    write_obj(mesh, &mut out)?;
    out.flush()?;
    log::debug!("wrote OBJ to {}", path.as_ref().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MobiusStrip, StripParams};

    fn obj_text(n: usize) -> String {
        let strip = MobiusStrip::new(StripParams::new(1.0, 0.3, n)).unwrap();
        String::from_utf8(strip.to_obj().unwrap()).unwrap()
    }

    #[test]
    fn test_obj_line_counts() {
        for n in [2, 3, 10, 31] {
            let text = obj_text(n);
            let verts = text.lines().filter(|l| l.starts_with("v ")).count();
            let faces = text.lines().filter(|l| l.starts_with("f ")).count();
            assert_eq!(verts, n * n, "n = {n}");
            assert_eq!(faces, 2 * (n - 1) * (n - 1), "n = {n}");
        }
    }

    #[test]
    fn test_obj_vertices_before_faces() {
        let text = obj_text(5);
        let first_face = text.lines().position(|l| l.starts_with('f')).unwrap();
        assert!(text.lines().take(first_face).all(|l| l.starts_with("v ")));
        assert!(text.lines().skip(first_face).all(|l| l.starts_with("f ")));
    }

    #[test]
    fn test_obj_face_indices() {
        let n = 3;
        let text = obj_text(n);
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        // Cell (0, 0): v1 = 1, v2 = 2, v3 = n + 2, v4 = n + 1
        assert_eq!(faces[0], "f 1 2 5");
        assert_eq!(faces[1], "f 1 5 4");
        // Last cell (1, 1): v1 = 5, v3 = 9
        assert_eq!(faces[7], "f 5 9 8");

        let max_ref = faces
            .iter()
            .flat_map(|l| l.split_whitespace().skip(1))
            .map(|s| s.parse::<usize>().unwrap())
            .max()
            .unwrap();
        assert_eq!(max_ref, n * n);
    }

    #[test]
    fn test_obj_vertex_values_roundtrip() {
        let strip = MobiusStrip::new(StripParams::new(1.0, 0.3, 4)).unwrap();
        let text = String::from_utf8(strip.to_obj().unwrap()).unwrap();
        let first: Vec<f64> = text
            .lines()
            .next()
            .unwrap()
            .split_whitespace()
            .skip(1)
            .map(|s| s.parse().unwrap())
            .collect();
        let p = strip.surface().point(0, 0);
        assert_eq!(first, vec![p.x, p.y, p.z]);
    }

    #[test]
    fn test_obj_empty_mesh() {
        assert!(matches!(
            to_obj_bytes(&TriangleMesh::new()),
            Err(ExportError::EmptyGeometry)
        ));
    }

    #[test]
    fn test_export_obj_file() {
        let strip = MobiusStrip::new(StripParams::new(1.2, 0.4, 8)).unwrap();
        let path = std::env::temp_dir().join("mobius_test_export.obj");
        strip.write_obj(&path).unwrap();
        let content = std::fs::read(&path).unwrap();
        assert_eq!(content, strip.to_obj().unwrap());
        let _ = std::fs::remove_file(path);
    }
}
