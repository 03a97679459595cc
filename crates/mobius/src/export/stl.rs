//! Binary STL export.

use std::path::Path;

use super::ExportError;
use crate::TriangleMesh;

const HEADER: &[u8; 80] =
    b"mobius binary STL export                                                        ";

/// Export a mesh to binary STL bytes.
///
/// Positions are narrowed to f32. Degenerate triangles get a `+Z` normal.
pub fn to_stl_bytes(mesh: &TriangleMesh) -> Result<Vec<u8>, ExportError> {
    if mesh.num_triangles() == 0 {
        return Err(ExportError::EmptyGeometry);
    }

    let num_triangles = mesh.num_triangles();
    let mut data = Vec::with_capacity(84 + num_triangles * 50);

    // 80-byte header
    data.extend_from_slice(HEADER);
    // Number of triangles
    data.extend_from_slice(&(num_triangles as u32).to_le_bytes());

    for t in 0..num_triangles {
        let [v0, v1, v2] = mesh.triangle(t);

        let n = (v1 - v0).cross(&(v2 - v0));
        let len = n.norm();
        let n = if len > 1e-12 {
            n / len
        } else {
            crate::Vec3::z()
        };

        // Normal
        for c in [n.x, n.y, n.z] {
            data.extend_from_slice(&(c as f32).to_le_bytes());
        }
        // Vertices
        for v in [v0, v1, v2] {
            data.extend_from_slice(&(v.x as f32).to_le_bytes());
            data.extend_from_slice(&(v.y as f32).to_le_bytes());
            data.extend_from_slice(&(v.z as f32).to_le_bytes());
        }
        // Attribute byte count
        data.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(data)
}

/// Write a mesh to a binary STL file.
pub fn export_stl(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let data = to_stl_bytes(mesh)?;
    std::fs::write(path.as_ref(), data)?;
    log::debug!("wrote STL to {}", path.as_ref().display());
    Ok(())
}
