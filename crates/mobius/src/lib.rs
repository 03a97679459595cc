//! mobius — Möbius strip geometry in Rust
//!
//! Samples the Möbius band on a uniform parameter grid, estimates its
//! surface area and edge length numerically, and exports the sampled mesh
//! (OBJ, STL).
//!
//! # Example
//!
//! ```rust,no_run
//! use mobius::{MobiusStrip, StripParams};
//!
//! let strip = MobiusStrip::new(StripParams::new(1.0, 0.3, 300)).unwrap();
//! println!("area = {:.4}", strip.surface_area());
//! strip.write_obj(mobius::export::obj::DEFAULT_FILE_NAME).unwrap();
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod export;

pub use mobius_kernel_geom::{BoundaryCurve, Curve3d, MobiusSurface, Surface};
pub use mobius_kernel_math::{Point3, Vec3};
pub use mobius_kernel_tessellate::{SurfaceGrid, TriangleMesh, MAX_RESOLUTION};

/// Errors from strip construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("radius must be positive and finite, got {0}")]
    InvalidRadius(f64),
    #[error("width must be positive and finite, got {0}")]
    InvalidWidth(f64),
    #[error("resolution must be between 2 and {max}, got {0}", max = MAX_RESOLUTION)]
    InvalidResolution(usize),
}

/// Inputs of the strip generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripParams {
    /// Radius `R` of the center circle.
    pub radius: f64,
    /// Full width `w` of the band.
    pub width: f64,
    /// Samples per parameter axis.
    pub resolution: usize,
}

impl StripParams {
    /// Bundle `(R, w, n)`.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Self {
        Self {
            radius,
            width,
            resolution,
        }
    }

    /// Check the parameters describe a band that can be sampled.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(GeometryError::InvalidRadius(self.radius));
        }
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(GeometryError::InvalidWidth(self.width));
        }
        if !(2..=MAX_RESOLUTION).contains(&self.resolution) {
            return Err(GeometryError::InvalidResolution(self.resolution));
        }
        Ok(())
    }
}

impl Default for StripParams {
    fn default() -> Self {
        Self::new(1.0, 0.3, 300)
    }
}

/// The two scalar properties reported for a strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripProperties {
    /// Estimated surface area.
    pub surface_area: f64,
    /// Estimated length of the `v = w/2` edge over one turn.
    pub edge_length: f64,
}

/// A sampled Möbius strip.
///
/// The grid is built once in [`MobiusStrip::new`]; changing any parameter
/// means building a new strip.
#[derive(Debug, Clone)]
pub struct MobiusStrip {
    params: StripParams,
    surface: MobiusSurface,
    grid: SurfaceGrid,
}

impl MobiusStrip {
    /// Validate `params` and sample the surface grid.
    pub fn new(params: StripParams) -> Result<Self, GeometryError> {
        params.validate()?;
        let surface = MobiusSurface::new(params.radius, params.width);
        let grid = SurfaceGrid::sample(&surface, params.resolution);
        log::debug!(
            "built strip R={} w={} n={}",
            params.radius,
            params.width,
            params.resolution
        );
        Ok(Self {
            params,
            surface,
            grid,
        })
    }

    /// Parameters this strip was built from.
    pub fn params(&self) -> &StripParams {
        &self.params
    }

    /// The sampled `(x, y, z)` grids.
    pub fn surface(&self) -> &SurfaceGrid {
        &self.grid
    }

    /// Numerical surface area from the sampled grid.
    pub fn surface_area(&self) -> f64 {
        mobius_kernel_tessellate::surface_area(&self.grid)
    }

    /// Numerical length of the `v = w/2` edge over `u ∈ [0, 2π]`, sampled at
    /// `n` points. Tends to `2πR` as the width shrinks.
    pub fn edge_length(&self) -> f64 {
        mobius_kernel_tessellate::edge_length(&self.surface.boundary(), self.params.resolution)
    }

    /// Numerical length of the whole boundary loop (two turns), sampled at
    /// `2n - 1` points so the spacing matches [`MobiusStrip::edge_length`].
    pub fn full_boundary_length(&self) -> f64 {
        mobius_kernel_tessellate::edge_length(
            &self.surface.full_boundary(),
            2 * self.params.resolution - 1,
        )
    }

    /// Surface area and edge length together.
    pub fn properties(&self) -> StripProperties {
        StripProperties {
            surface_area: self.surface_area(),
            edge_length: self.edge_length(),
        }
    }

    /// Triangle mesh over the sampled grid.
    pub fn to_mesh(&self) -> TriangleMesh {
        mobius_kernel_tessellate::triangulate_grid(&self.grid)
    }

    /// Export to Wavefront OBJ bytes (delegates to [`export::obj::to_obj_bytes`]).
    pub fn to_obj(&self) -> Result<Vec<u8>, export::ExportError> {
        export::obj::to_obj_bytes(&self.to_mesh())
    }

    /// Write OBJ to file (delegates to [`export::obj::export_obj`]).
    pub fn write_obj(&self, path: impl AsRef<std::path::Path>) -> Result<(), export::ExportError> {
        export::obj::export_obj(&self.to_mesh(), path)
    }

    /// Export to binary STL bytes (delegates to [`export::stl::to_stl_bytes`]).
    pub fn to_stl(&self) -> Result<Vec<u8>, export::ExportError> {
        export::stl::to_stl_bytes(&self.to_mesh())
    }
}
