//! Interactive viewer state and event loop.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use mobius::{MobiusStrip, StripParams, StripProperties};
use mobius_ir::{controls, Camera, CameraOrbit, DisplaySettings, Slider};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::{input, ui};

/// The three parameter sliders, in display order.
pub const SLIDERS: [Slider; 3] = [controls::RADIUS, controls::WIDTH, controls::RESOLUTION];

pub struct App {
    pub params: StripParams,
    pub settings: DisplaySettings,
    pub strip: MobiusStrip,
    pub properties: StripProperties,
    /// Index into [`SLIDERS`] of the slider the arrow keys move.
    pub selected: usize,
    pub orbit: CameraOrbit,
    pub frame: usize,
    pub export_path: PathBuf,
    pub status: String,
    pub should_quit: bool,
}

impl App {
    /// Build the viewer, snapping `params` onto the slider grids.
    pub fn new(params: StripParams, settings: DisplaySettings, export_path: PathBuf) -> Result<Self> {
        let params = StripParams::new(
            SLIDERS[0].snap(params.radius),
            SLIDERS[1].snap(params.width),
            SLIDERS[2].snap(params.resolution as f64) as usize,
        );
        let strip = MobiusStrip::new(params)?;
        let properties = strip.properties();
        Ok(Self {
            params,
            settings,
            strip,
            properties,
            selected: 0,
            orbit: CameraOrbit::default(),
            frame: 0,
            export_path,
            status: String::new(),
            should_quit: false,
        })
    }

    /// Current value of slider `idx`.
    pub fn slider_value(&self, idx: usize) -> f64 {
        match idx {
            0 => self.params.radius,
            1 => self.params.width,
            _ => self.params.resolution as f64,
        }
    }

    /// Set slider `idx` and rebuild the strip if the value changed.
    pub fn set_slider(&mut self, idx: usize, value: f64) {
        let value = SLIDERS[idx].snap(value);
        if value == self.slider_value(idx) {
            return;
        }
        let mut params = self.params;
        match idx {
            0 => params.radius = value,
            1 => params.width = value,
            _ => params.resolution = value as usize,
        }
        match MobiusStrip::new(params) {
            Ok(strip) => {
                self.params = params;
                self.properties = strip.properties();
                self.strip = strip;
            }
            Err(e) => self.status = e.to_string(),
        }
    }

    /// Move the selected slider one step up (`up == true`) or down.
    pub fn step_selected(&mut self, up: bool) {
        let slider = SLIDERS[self.selected];
        let current = self.slider_value(self.selected);
        let next = if up {
            slider.increment(current)
        } else {
            slider.decrement(current)
        };
        self.set_slider(self.selected, next);
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SLIDERS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + SLIDERS.len() - 1) % SLIDERS.len();
    }

    /// Camera for the current frame.
    pub fn camera(&self) -> Camera {
        if self.settings.auto_rotate {
            self.orbit.camera(self.frame)
        } else {
            Camera::default()
        }
    }

    /// Advance the orbit animation by one frame.
    pub fn tick(&mut self) {
        if self.settings.auto_rotate {
            self.frame = (self.frame + 1) % self.orbit.steps.max(1);
        }
    }

    /// Write the current mesh to `export_path` (format from the extension),
    /// or to `path` when given.
    pub fn export(&mut self, path: Option<PathBuf>) {
        let path = path.unwrap_or_else(|| self.export_path.clone());
        self.status = match mobius::export::export_mesh(&self.strip.to_mesh(), &path) {
            Ok(_) => format!("Saved {}", path.display()),
            Err(e) => format!("Export failed: {e}"),
        };
        log::info!("{}", self.status);
    }
}

/// Run the interactive viewer until the user quits.
pub fn run_tui(mut app: App) -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.orbit.frame_duration_ms);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(app, key);
                }
            }
        }
        if last_tick.elapsed() >= tick {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}
