//! Projects the sampled strip into 2D point clouds for the terminal canvas.

use mobius::{MobiusStrip, Point3};
use mobius_ir::{Camera, ColorMap};

/// Colour bands used to shade by height. Each band is drawn in one call.
const BANDS: usize = 16;

/// Grid samples per axis drawn at most; denser grids are strided.
const MAX_DRAWN: usize = 90;

/// Points sharing one colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBand {
    pub rgb: [u8; 3],
    pub points: Vec<(f64, f64)>,
}

/// A projected strip ready for drawing.
#[derive(Debug, Clone)]
pub struct Projection {
    pub bands: Vec<ColorBand>,
    /// Half-size of a square view that contains the strip from any angle.
    pub extent: f64,
    /// Projected axis tips `(label, x, y)` for x, y and z.
    pub axes: [(&'static str, f64, f64); 3],
}

pub fn project(strip: &MobiusStrip, camera: &Camera, color_map: ColorMap) -> Projection {
    let grid = strip.surface();
    let n = grid.resolution();
    let stride = n.div_ceil(MAX_DRAWN).max(1);

    let half = strip.params().width / 2.0;
    let reach = ((strip.params().radius + half).powi(2) + half * half).sqrt();

    let mut bands: Vec<ColorBand> = (0..BANDS)
        .map(|b| ColorBand {
            rgb: color_map.sample((b as f64 + 0.5) / BANDS as f64),
            points: Vec::new(),
        })
        .collect();

    for i in (0..n).step_by(stride) {
        for j in (0..n).step_by(stride) {
            let p = grid.point(i, j);
            // Height runs over [-w/2, w/2]
            let t = if half > 0.0 { (p.z + half) / (2.0 * half) } else { 0.5 };
            let band = ((t * BANDS as f64) as usize).min(BANDS - 1);
            bands[band].points.push(camera.project(&p));
        }
    }

    let axis_len = reach * 1.05;
    let tip = |label, p: Point3| {
        let (x, y) = camera.project(&p);
        (label, x, y)
    };
    let axes = [
        tip("x", Point3::new(axis_len, 0.0, 0.0)),
        tip("y", Point3::new(0.0, axis_len, 0.0)),
        tip("z", Point3::new(0.0, 0.0, axis_len)),
    ];

    Projection {
        bands,
        extent: reach * 1.15,
        axes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mobius::StripParams;

    fn strip(n: usize) -> MobiusStrip {
        MobiusStrip::new(StripParams::new(1.0, 0.3, n)).unwrap()
    }

    #[test]
    fn strides_dense_grids() {
        let proj = project(&strip(300), &Camera::default(), ColorMap::Viridis);
        let drawn: usize = proj.bands.iter().map(|b| b.points.len()).sum();
        // stride 4 over 300 samples keeps 75 per axis
        assert_eq!(drawn, 75 * 75);
    }

    #[test]
    fn small_grids_drawn_fully() {
        let proj = project(&strip(20), &Camera::default(), ColorMap::Viridis);
        let drawn: usize = proj.bands.iter().map(|b| b.points.len()).sum();
        assert_eq!(drawn, 400);
        assert_eq!(proj.bands.len(), BANDS);
    }

    #[test]
    fn points_fit_in_extent() {
        let s = strip(120);
        for cam in mobius_ir::CameraOrbit::default().frames() {
            let proj = project(&s, &cam, ColorMap::Inferno);
            for band in &proj.bands {
                for &(x, y) in &band.points {
                    assert!(x.abs() <= proj.extent && y.abs() <= proj.extent);
                }
            }
            for (_, x, y) in proj.axes {
                assert!(x.abs() <= proj.extent && y.abs() <= proj.extent);
            }
        }
    }

    #[test]
    fn bands_follow_color_map() {
        let proj = project(&strip(50), &Camera::default(), ColorMap::Blues);
        assert_eq!(proj.bands[0].rgb, ColorMap::Blues.sample(0.5 / BANDS as f64));
        // Lowest and highest points land in the outer bands
        assert!(!proj.bands[0].points.is_empty());
        assert!(!proj.bands[BANDS - 1].points.is_empty());
    }

    #[test]
    fn top_view_is_ring() {
        let s = strip(60);
        let proj = project(&s, &Camera::new(0.0, 0.0, 3.0), ColorMap::Viridis);
        for band in &proj.bands {
            for &(x, y) in &band.points {
                let r = (x * x + y * y).sqrt();
                assert!((0.85 - 1e-9..=1.15 + 1e-9).contains(&r), "r = {r}");
            }
        }
    }
}
