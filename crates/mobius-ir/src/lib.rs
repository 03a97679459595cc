//! Figure description for the mobius explorer.
//!
//! This crate defines what a renderer should draw: the sampled surface, the
//! colour scale, layout and theme, and an optional camera orbit animation.
//! It also holds the slider definitions the front ends bind to the strip
//! parameters.
//!
//! The figure is purely declarative. It carries coordinates but no drawing
//! code; the terminal viewer and any external renderer interpret it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod camera;
pub mod colormap;
pub mod controls;

pub use camera::{Camera, CameraOrbit};
pub use colormap::ColorMap;
pub use controls::Slider;

/// Errors from parsing figure settings.
#[derive(Error, Debug)]
pub enum IrError {
    #[error("unknown color map {0:?}")]
    UnknownColorMap(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Page colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// White text on black.
    #[default]
    Dark,
    /// Black text on white.
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Background colour name.
    pub fn paper_color(self) -> &'static str {
        match self {
            Theme::Dark => "black",
            Theme::Light => "white",
        }
    }

    /// Text colour name.
    pub fn font_color(self) -> &'static str {
        match self {
            Theme::Dark => "white",
            Theme::Light => "black",
        }
    }
}

/// User-selectable display options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Colour scale applied over surface height.
    pub color_map: ColorMap,
    /// Show the coordinate axes and grid.
    pub show_grid: bool,
    /// Orbit the camera around the strip.
    pub auto_rotate: bool,
    /// Page colours.
    pub theme: Theme,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            color_map: ColorMap::Viridis,
            show_grid: true,
            auto_rotate: false,
            theme: Theme::Dark,
        }
    }
}

/// The surface to draw. Colour follows `z`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceTrace {
    /// x grid, `n` rows of `n` values.
    pub x: Vec<Vec<f64>>,
    /// y grid.
    pub y: Vec<Vec<f64>>,
    /// z grid.
    pub z: Vec<Vec<f64>>,
    /// Colour scale.
    pub colorscale: ColorMap,
    /// Surface opacity in `[0, 1]`.
    pub opacity: f64,
    /// Draw a colour bar.
    pub showscale: bool,
}

/// Page margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    /// Left.
    pub l: u32,
    /// Right.
    pub r: u32,
    /// Top.
    pub t: u32,
    /// Bottom.
    pub b: u32,
}

/// 3D scene options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Draw axes, ticks and grid planes.
    pub axes_visible: bool,
    /// Initial camera.
    pub camera: Camera,
}

/// Playback settings for the camera animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Label of the play control.
    pub label: String,
    /// Time each frame is shown.
    pub frame_duration_ms: u64,
    /// Transition time between frames.
    pub transition_ms: u64,
    /// Restart from the first frame after the last.
    pub looped: bool,
}

/// Page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Figure title.
    pub title: String,
    /// Page margins.
    pub margin: Margin,
    /// Scene options.
    pub scene: Scene,
    /// Background colour.
    pub paper_bgcolor: String,
    /// Text colour.
    pub font_color: String,
    /// Animation controls, present only when the figure has frames.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

/// A complete figure: surface, layout and animation frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// Surface trace.
    pub surface: SurfaceTrace,
    /// Layout.
    pub layout: Layout,
    /// Camera per animation frame; empty when not rotating.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Camera>,
}

impl Figure {
    /// Title used for every figure.
    pub const TITLE: &'static str = "Mobius Strip";

    /// Build a figure for the given grids and display settings.
    ///
    /// Rotation adds the orbit frames of [`CameraOrbit::default`] and a looping
    /// play control.
    pub fn new(
        x: Vec<Vec<f64>>,
        y: Vec<Vec<f64>>,
        z: Vec<Vec<f64>>,
        settings: &DisplaySettings,
    ) -> Self {
        let orbit = CameraOrbit::default();
        let (frames, animation) = if settings.auto_rotate {
            (
                orbit.frames(),
                Some(Animation {
                    label: "Play".to_string(),
                    frame_duration_ms: orbit.frame_duration_ms,
                    transition_ms: 0,
                    looped: true,
                }),
            )
        } else {
            (Vec::new(), None)
        };

        Self {
            surface: SurfaceTrace {
                x,
                y,
                z,
                colorscale: settings.color_map,
                opacity: 0.95,
                showscale: false,
            },
            layout: Layout {
                title: Self::TITLE.to_string(),
                margin: Margin {
                    l: 0,
                    r: 0,
                    t: 40,
                    b: 0,
                },
                scene: Scene {
                    axes_visible: settings.show_grid,
                    camera: Camera::default(),
                },
                paper_bgcolor: settings.theme.paper_color().to_string(),
                font_color: settings.theme.font_color().to_string(),
                animation,
            },
            frames,
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, IrError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self, IrError> {
        Ok(serde_json::from_str(json)?)
    }
}
