//! mobius CLI - Möbius strip explorer
//!
//! Opens an interactive terminal viewer by default, or computes properties
//! and writes meshes and figure documents from the command line.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mobius::{MobiusStrip, StripParams};
use mobius_ir::{ColorMap, DisplaySettings, Figure, Theme};
use std::path::{Path, PathBuf};

mod app;
mod config;
mod input;
mod render;
mod ui;

use config::Config;

#[derive(Parser)]
#[command(name = "mobius")]
#[command(about = "Explore Möbius strip geometry", long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    /// Configuration file (default: ./mobius.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Command-line values that take precedence over the config file.
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Center-circle radius R
    #[arg(short = 'R', long, global = true)]
    radius: Option<f64>,
    /// Strip width w
    #[arg(short, long, global = true)]
    width: Option<f64>,
    /// Samples per parameter axis n
    #[arg(short = 'n', long, global = true)]
    resolution: Option<usize>,
    /// Color map (viridis, blues, cividis, plasma, inferno)
    #[arg(long, global = true)]
    color_map: Option<ColorMap>,
    /// Hide axes and grid
    #[arg(long, global = true)]
    no_grid: bool,
    /// Orbit the camera
    #[arg(long, global = true)]
    rotate: bool,
    /// Use the light theme
    #[arg(long, global = true)]
    light: bool,
}

impl Overrides {
    fn apply(&self, config: &mut Config) {
        if let Some(r) = self.radius {
            config.strip.radius = r;
        }
        if let Some(w) = self.width {
            config.strip.width = w;
        }
        if let Some(n) = self.resolution {
            config.strip.resolution = n;
        }
        if let Some(map) = self.color_map {
            config.display.color_map = map;
        }
        if self.no_grid {
            config.display.show_grid = false;
        }
        if self.rotate {
            config.display.auto_rotate = true;
        }
        if self.light {
            config.display.theme = Theme::Light;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive viewer
    Tui,
    /// Print surface area, edge length and mesh size
    Info,
    /// Write the strip mesh (format from extension: .obj, .stl)
    Export {
        /// Output file (default: the configured export path)
        output: Option<PathBuf>,
    },
    /// Write the figure description as JSON
    Figure {
        /// Output .json file
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);

    match cli.command {
        Some(Commands::Info) => show_info(config.strip)?,
        Some(Commands::Export { output }) => {
            let output = output.unwrap_or_else(|| config.export.path.clone());
            export_file(config.strip, &output)?;
        }
        Some(Commands::Figure { output }) => {
            write_figure(config.strip, &config.display, &output)?;
        }
        Some(Commands::Tui) | None => {
            let app = app::App::new(config.strip, config.display, config.export.path)?;
            app::run_tui(app)?;
        }
    }

    Ok(())
}

/// Logs go to stderr. `RUST_LOG` wins over `-v` when set.
fn init_logging(verbosity: u8) {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
        return;
    }
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn show_info(params: StripParams) -> Result<()> {
    let strip = MobiusStrip::new(params)?;
    let props = strip.properties();
    let mesh = strip.to_mesh();

    println!("Möbius strip");
    println!("  Radius (R):     {}", params.radius);
    println!("  Width (w):      {}", params.width);
    println!("  Resolution (n): {}", params.resolution);
    println!("\nGeometric Properties:");
    println!("  Surface Area:   {:.4} units²", props.surface_area);
    println!("  Edge Length:    {:.4} units", props.edge_length);
    println!("  Full boundary:  {:.4} units", strip.full_boundary_length());
    println!("\nMesh stats:");
    println!("  Vertices:  {}", mesh.num_vertices());
    println!("  Triangles: {}", mesh.num_triangles());
    Ok(())
}

fn export_file(params: StripParams, output: &Path) -> Result<()> {
    let strip = MobiusStrip::new(params)?;
    let format = mobius::export::export_mesh(&strip.to_mesh(), output)
        .with_context(|| format!("exporting {}", output.display()))?;
    println!("Exported {format:?} to {}", output.display());
    Ok(())
}

fn write_figure(params: StripParams, settings: &DisplaySettings, output: &Path) -> Result<()> {
    let strip = MobiusStrip::new(params)?;
    let grid = strip.surface();
    let figure = Figure::new(grid.x_rows(), grid.y_rows(), grid.z_rows(), settings);
    std::fs::write(output, figure.to_json()?)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("Wrote figure to {}", output.display());
    Ok(())
}
