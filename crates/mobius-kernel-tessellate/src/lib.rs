#![warn(missing_docs)]

//! Grid sampling, numerical integration and triangulation for the mobius
//! kernel.
//!
//! A surface is sampled on a uniform `n × n` parameter grid. From that grid:
//! 1. Surface area is estimated with finite-difference partials and a
//!    Riemann sum of `|∂P/∂u × ∂P/∂v|`
//! 2. Curve length is estimated as a polyline arc length
//! 3. A triangle mesh is built with two triangles per grid cell

use log::debug;
use mobius_kernel_geom::{Curve3d, Surface};
use mobius_kernel_math::{linspace, Point2, Point3, Vec3};

/// Largest samples-per-axis whose `n²` vertices can be indexed with `u32`.
pub const MAX_RESOLUTION: usize = u16::MAX as usize;

// =============================================================================
// SurfaceGrid
// =============================================================================

/// Surface coordinates sampled on a uniform `n × n` parameter grid.
///
/// Index `(i, j)` is the sample at `u = u_i`, `v = v_j`; `i` runs over u and
/// `j` over v. The x, y and z grids always share the same dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    n: usize,
    du: f64,
    dv: f64,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
}

impl SurfaceGrid {
    /// Sample `surface` at `n` evenly spaced values per axis, endpoints
    /// included.
    pub fn sample(surface: &dyn Surface, n: usize) -> Self {
        let ((u0, u1), (v0, v1)) = surface.domain();
        let us = linspace(u0, u1, n);
        let vs = linspace(v0, v1, n);

        let mut x = Vec::with_capacity(n * n);
        let mut y = Vec::with_capacity(n * n);
        let mut z = Vec::with_capacity(n * n);
        for &u in &us {
            for &v in &vs {
                let p = surface.evaluate(Point2::new(u, v));
                x.push(p.x);
                y.push(p.y);
                z.push(p.z);
            }
        }

        let steps = n.saturating_sub(1) as f64;
        debug!("sampled {n}x{n} surface grid");
        Self {
            n,
            du: (u1 - u0) / steps,
            dv: (v1 - v0) / steps,
            x,
            y,
            z,
        }
    }

    /// Samples per axis.
    pub fn resolution(&self) -> usize {
        self.n
    }

    /// Parameter spacing `(Δu, Δv)`.
    pub fn spacing(&self) -> (f64, f64) {
        (self.du, self.dv)
    }

    /// The sample at grid index `(i, j)`.
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        let k = i * self.n + j;
        Point3::new(self.x[k], self.y[k], self.z[k])
    }

    /// All samples in row-major `(i, j)` order.
    pub fn points(&self) -> impl Iterator<Item = Point3> + '_ {
        (0..self.x.len()).map(move |k| Point3::new(self.x[k], self.y[k], self.z[k]))
    }

    /// The x grid as `n` rows of `n` values.
    pub fn x_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.x, self.n)
    }

    /// The y grid as `n` rows of `n` values.
    pub fn y_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.y, self.n)
    }

    /// The z grid as `n` rows of `n` values.
    pub fn z_rows(&self) -> Vec<Vec<f64>> {
        to_rows(&self.z, self.n)
    }

    /// Finite-difference `∂P/∂u` at grid node `(i, j)`.
    ///
    /// Central differences in the interior, one-sided at the first and last
    /// row.
    pub fn partial_u(&self, i: usize, j: usize) -> Vec3 {
        let (lo, hi, span) = stencil(i, self.n);
        (self.point(hi, j) - self.point(lo, j)) / (span * self.du)
    }

    /// Finite-difference `∂P/∂v` at grid node `(i, j)`.
    pub fn partial_v(&self, i: usize, j: usize) -> Vec3 {
        let (lo, hi, span) = stencil(j, self.n);
        (self.point(i, hi) - self.point(i, lo)) / (span * self.dv)
    }
}

fn to_rows(values: &[f64], n: usize) -> Vec<Vec<f64>> {
    values.chunks(n).map(|row| row.to_vec()).collect()
}

/// Neighbour indices and their distance in grid steps for a difference at `k`.
fn stencil(k: usize, n: usize) -> (usize, usize, f64) {
    if k == 0 {
        (0, 1, 1.0)
    } else if k == n - 1 {
        (n - 2, n - 1, 1.0)
    } else {
        (k - 1, k + 1, 2.0)
    }
}

// =============================================================================
// Integration
// =============================================================================

/// Estimate surface area from a sampled grid.
///
/// Sums `|∂P/∂u × ∂P/∂v|` over every grid node and scales by `Δu·Δv`.
/// Every node contributes a full cell, so the estimate carries an
/// `O(1/n)` bias that vanishes as the grid is refined.
pub fn surface_area(grid: &SurfaceGrid) -> f64 {
    let n = grid.resolution();
    let (du, dv) = grid.spacing();
    let mut sum = 0.0;
    for i in 0..n {
        for j in 0..n {
            sum += grid.partial_u(i, j).cross(&grid.partial_v(i, j)).norm();
        }
    }
    sum * du * dv
}

/// Estimate the arc length of `curve` from `n` evenly spaced samples over its
/// domain, as the length of the resulting polyline.
pub fn edge_length(curve: &dyn Curve3d, n: usize) -> f64 {
    let (t0, t1) = curve.domain();
    let pts: Vec<Point3> = linspace(t0, t1, n)
        .into_iter()
        .map(|t| curve.evaluate(t))
        .collect();
    pts.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

// =============================================================================
// Triangulation
// =============================================================================

/// Output triangle mesh for export.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub vertices: Vec<f64>,
    /// Flat array of 0-based triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Position of vertex `i`.
    pub fn vertex(&self, i: usize) -> Point3 {
        Point3::new(
            self.vertices[i * 3],
            self.vertices[i * 3 + 1],
            self.vertices[i * 3 + 2],
        )
    }

    /// Corner positions of triangle `t`.
    pub fn triangle(&self, t: usize) -> [Point3; 3] {
        let tri = &self.indices[t * 3..t * 3 + 3];
        [
            self.vertex(tri[0] as usize),
            self.vertex(tri[1] as usize),
            self.vertex(tri[2] as usize),
        ]
    }

    /// Sum of triangle areas.
    pub fn area(&self) -> f64 {
        (0..self.num_triangles())
            .map(|t| {
                let [a, b, c] = self.triangle(t);
                (b - a).cross(&(c - a)).norm() / 2.0
            })
            .sum()
    }
}

/// Triangulate a grid: one vertex per sample in row-major order and two
/// triangles per cell.
///
/// The last row is not stitched back to the first, so a band closed in u
/// comes out with an open seam.
///
/// Grids larger than [`MAX_RESOLUTION`] per axis cannot be indexed.
pub fn triangulate_grid(grid: &SurfaceGrid) -> TriangleMesh {
    let n = grid.resolution();
    debug_assert!(
        n <= MAX_RESOLUTION,
        "grid of {n} samples per axis overflows u32 indices"
    );
    let cells = n.saturating_sub(1);
    let mut mesh = TriangleMesh {
        vertices: Vec::with_capacity(n * n * 3),
        indices: Vec::with_capacity(cells * cells * 6),
    };

    for p in grid.points() {
        mesh.vertices.extend_from_slice(&[p.x, p.y, p.z]);
    }

    let n32 = n as u32;
    for i in 0..cells as u32 {
        for j in 0..cells as u32 {
            let v1 = i * n32 + j;
            let v2 = v1 + 1;
            let v3 = (i + 1) * n32 + j + 1;
            let v4 = (i + 1) * n32 + j;
            mesh.indices.extend_from_slice(&[v1, v2, v3, v1, v3, v4]);
        }
    }

    debug!(
        "triangulated grid: {} vertices, {} triangles",
        mesh.num_vertices(),
        mesh.num_triangles()
    );
    mesh
}
