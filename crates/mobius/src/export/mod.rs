//! Mesh export formats.
//!
//! - [`obj`]: Wavefront OBJ text, the explorer's download format
//! - [`stl`]: binary STL

use std::path::Path;
use thiserror::Error;

use crate::TriangleMesh;

pub mod obj;
pub mod stl;

/// Errors from mesh export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Empty geometry")]
    EmptyGeometry,
    #[error("Unknown output format: {0:?}")]
    UnknownFormat(String),
}

/// Output formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// `.obj`
    Obj,
    /// `.stl`
    Stl,
}

impl ExportFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ExportError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_lowercase().as_str() {
            "obj" => Ok(Self::Obj),
            "stl" => Ok(Self::Stl),
            _ => Err(ExportError::UnknownFormat(ext.to_string())),
        }
    }
}

/// Write `mesh` to `path` in the format implied by its extension.
pub fn export_mesh(mesh: &TriangleMesh, path: impl AsRef<Path>) -> Result<ExportFormat, ExportError> {
    let path = path.as_ref();
    let format = ExportFormat::from_path(path)?;
    match format {
        ExportFormat::Obj => obj::export_obj(mesh, path)?,
        ExportFormat::Stl => stl::export_stl(mesh, path)?,
    }
    Ok(format)
}
