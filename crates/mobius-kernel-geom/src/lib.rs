#![warn(missing_docs)]

//! Parametric surface and curve types for the mobius kernel.
//!
//! Provides trait-based abstractions for parametric surfaces and curves,
//! with the Möbius band and its boundary iso-curve as concrete
//! implementations.

use mobius_kernel_math::{Dir3, Point2, Point3, Vec3};
use std::f64::consts::PI;

// =============================================================================
// Traits
// =============================================================================

/// A parametric surface in 3D space.
pub trait Surface: Send + Sync + std::fmt::Debug {
    /// Evaluate the surface at parameter `(u, v)` to get a 3D point.
    fn evaluate(&self, uv: Point2) -> Point3;

    /// Surface normal at parameter `(u, v)`.
    fn normal(&self, uv: Point2) -> Dir3;

    /// Partial derivative with respect to u at `(u, v)`.
    fn d_du(&self, uv: Point2) -> Vec3;

    /// Partial derivative with respect to v at `(u, v)`.
    fn d_dv(&self, uv: Point2) -> Vec3;

    /// Parameter domain as `((u_min, u_max), (v_min, v_max))`.
    fn domain(&self) -> ((f64, f64), (f64, f64));
}

/// A parametric curve in 3D space.
pub trait Curve3d: Send + Sync + std::fmt::Debug {
    /// Evaluate the curve at parameter `t` to get a 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Tangent vector at parameter `t`.
    fn tangent(&self, t: f64) -> Vec3;

    /// Parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}

// =============================================================================
// MobiusSurface
// =============================================================================

/// A Möbius band around the Z axis.
///
/// Parameterization, with `c = cos(u/2)` and `s = sin(u/2)`:
///
/// ```text
/// x = (R + v·c)·cos(u)
/// y = (R + v·c)·sin(u)
/// z = v·s
/// ```
///
/// over `u ∈ [0, 2π]`, `v ∈ [-w/2, w/2]`. The points `(u, v)` and
/// `(u + 2π, -v)` coincide, which is the half twist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    /// Radius `R` of the center circle.
    pub radius: f64,
    /// Full width `w` of the band, measured across v.
    pub width: f64,
}

impl MobiusSurface {
    /// Create a band with center-circle radius `radius` and full width `width`.
    pub fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    /// Half of the band width: the `|v|` of both edges.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    /// The edge iso-curve `v = w/2` over one turn, `u ∈ [0, 2π]`.
    ///
    /// One turn covers only half of the band's single boundary; the other
    /// half is the `v = -w/2` side, reached after the twist.
    pub fn boundary(&self) -> BoundaryCurve {
        BoundaryCurve {
            surface: *self,
            v: self.half_width(),
            turns: 1,
        }
    }

    /// The complete boundary loop: `v = w/2` over two turns, `u ∈ [0, 4π]`.
    pub fn full_boundary(&self) -> BoundaryCurve {
        BoundaryCurve {
            surface: *self,
            v: self.half_width(),
            turns: 2,
        }
    }
}

impl Surface for MobiusSurface {
    fn evaluate(&self, uv: Point2) -> Point3 {
        let (u, v) = (uv.x, uv.y);
        let (sin_u, cos_u) = u.sin_cos();
        let (s, c) = (u / 2.0).sin_cos();
        let r = self.radius + v * c;
        Point3::new(r * cos_u, r * sin_u, v * s)
    }

    fn normal(&self, uv: Point2) -> Dir3 {
        Dir3::new_normalize(self.d_du(uv).cross(&self.d_dv(uv)))
    }

    fn d_du(&self, uv: Point2) -> Vec3 {
        let (u, v) = (uv.x, uv.y);
        let (sin_u, cos_u) = u.sin_cos();
        let (s, c) = (u / 2.0).sin_cos();
        let r = self.radius + v * c;
        // dr/du = -(v/2)·s
        let dr = -0.5 * v * s;
        Vec3::new(dr * cos_u - r * sin_u, dr * sin_u + r * cos_u, 0.5 * v * c)
    }

    fn d_dv(&self, uv: Point2) -> Vec3 {
        let u = uv.x;
        let (sin_u, cos_u) = u.sin_cos();
        let (s, c) = (u / 2.0).sin_cos();
        Vec3::new(c * cos_u, c * sin_u, s)
    }

    fn domain(&self) -> ((f64, f64), (f64, f64)) {
        let h = self.half_width();
        ((0.0, 2.0 * PI), (-h, h))
    }
}

// =============================================================================
// BoundaryCurve
// =============================================================================

/// A constant-v iso-curve on a [`MobiusSurface`], traced for a whole number
/// of turns around the Z axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryCurve {
    /// Surface the curve lies on.
    pub surface: MobiusSurface,
    /// Fixed v parameter.
    pub v: f64,
    /// Number of full turns in u.
    pub turns: u32,
}

impl Curve3d for BoundaryCurve {
    fn evaluate(&self, t: f64) -> Point3 {
        self.surface.evaluate(Point2::new(t, self.v))
    }

    fn tangent(&self, t: f64) -> Vec3 {
        self.surface.d_du(Point2::new(t, self.v))
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 2.0 * PI * self.turns as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mobius_kernel_math::Tolerance;

    fn band() -> MobiusSurface {
        MobiusSurface::new(1.0, 0.3)
    }

    #[test]
    fn test_center_line_is_circle() {
        let m = MobiusSurface::new(2.0, 0.5);
        for k in 0..8 {
            let u = k as f64 * PI / 4.0;
            let p = m.evaluate(Point2::new(u, 0.0));
            assert_relative_eq!((p.x * p.x + p.y * p.y).sqrt(), 2.0, epsilon = 1e-12);
            assert!(p.z.abs() < 1e-12);
        }
    }

    #[test]
    fn test_evaluate_known_points() {
        let m = band();
        // u = 0: x = R + v, y = 0, z = 0
        let p = m.evaluate(Point2::new(0.0, 0.15));
        assert_relative_eq!(p.x, 1.15, epsilon = 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
        // u = π: cos(u/2) = 0, sin(u/2) = 1 → x = -R, z = v
        let p = m.evaluate(Point2::new(PI, 0.1));
        assert_relative_eq!(p.x, -1.0, epsilon = 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert_relative_eq!(p.z, 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_half_twist_identifies_opposite_edges() {
        let m = band();
        let tol = Tolerance { linear: 1e-12 };
        for &(u, v) in &[(0.0, 0.15), (0.7, -0.1), (2.5, 0.05)] {
            let a = m.evaluate(Point2::new(u, v));
            let b = m.evaluate(Point2::new(u + 2.0 * PI, -v));
            assert!(tol.points_equal(&a, &b));
        }
    }

    #[test]
    fn test_partials_match_finite_differences() {
        let m = band();
        let h = 1e-6;
        for &(u, v) in &[(0.3, 0.1), (1.9, -0.12), (4.4, 0.0)] {
            let uv = Point2::new(u, v);
            let fd_u = (m.evaluate(Point2::new(u + h, v)) - m.evaluate(Point2::new(u - h, v)))
                / (2.0 * h);
            let fd_v = (m.evaluate(Point2::new(u, v + h)) - m.evaluate(Point2::new(u, v - h)))
                / (2.0 * h);
            assert!((m.d_du(uv) - fd_u).norm() < 1e-6);
            assert!((m.d_dv(uv) - fd_v).norm() < 1e-6);
        }
    }

    #[test]
    fn test_normal_flips_after_one_turn() {
        let m = band();
        let n0 = m.normal(Point2::new(0.0, 0.0));
        let n1 = m.normal(Point2::new(2.0 * PI, 0.0));
        assert_relative_eq!(n0.as_ref().dot(n1.as_ref()), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_domain() {
        let ((u0, u1), (v0, v1)) = band().domain();
        assert_eq!(u0, 0.0);
        assert_relative_eq!(u1, 2.0 * PI);
        assert_relative_eq!(v0, -0.15);
        assert_relative_eq!(v1, 0.15);
    }

    #[test]
    fn test_boundary_endpoints() {
        let m = band();
        let half = m.boundary();
        assert_eq!(half.domain(), (0.0, 2.0 * PI));
        // One turn lands on the opposite edge: (R - w/2, 0, 0)
        let end = half.evaluate(2.0 * PI);
        assert_relative_eq!(end.x, 0.85, epsilon = 1e-12);

        let full = m.full_boundary();
        assert_relative_eq!(full.domain().1, 4.0 * PI);
        let start = full.evaluate(0.0);
        let end = full.evaluate(4.0 * PI);
        assert!(Tolerance { linear: 1e-12 }.points_equal(&start, &end));
    }

    #[test]
    fn test_boundary_tangent() {
        let c = band().boundary();
        let t = c.tangent(0.0);
        // At u = 0 the edge moves in +y at speed R + w/2
        assert!(t.x.abs() < 1e-12);
        assert_relative_eq!(t.y, 1.15, epsilon = 1e-12);
        assert_relative_eq!(t.z, 0.075, epsilon = 1e-12);
    }
}
