//! Frame layout: parameter sidebar on the left, strip canvas on the right.

use mobius_ir::Theme;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, SLIDERS};
use crate::input::HELP;
use crate::render;

const SIDEBAR_WIDTH: u16 = 38;
const BAR_WIDTH: usize = 20;

fn colors(theme: Theme) -> (Color, Color) {
    match theme {
        Theme::Dark => (Color::Black, Color::White),
        Theme::Light => (Color::White, Color::Black),
    }
}

pub fn draw(frame: &mut Frame, app: &App) {
    let (bg, fg) = colors(app.settings.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(bg).fg(fg)), area);

    let [sidebar, view] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(area);
    let [sliders, display, metrics, help] = Layout::vertical([
        Constraint::Length(SLIDERS.len() as u16 * 2 + 2),
        Constraint::Length(6),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .areas(sidebar);

    draw_sliders(frame, app, sliders);
    draw_display(frame, app, display);
    draw_metrics(frame, app, metrics);
    draw_help(frame, app, help);
    draw_strip(frame, app, view, fg, bg);
}

fn draw_sliders(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for (idx, slider) in SLIDERS.iter().enumerate() {
        let value = app.slider_value(idx);
        let style = if idx == app.selected {
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        let marker = if idx == app.selected { "> " } else { "  " };
        let text = match idx {
            0 => format!("{value:.1}"),
            1 => format!("{value:.2}"),
            _ => format!("{value:.0}"),
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{:<16}", slider.label), style),
            Span::raw(format!(" {text:>6}")),
        ]));
        let filled = (slider.fraction(value) * BAR_WIDTH as f64).round() as usize;
        lines.push(Line::from(format!(
            "  {}{}",
            "█".repeat(filled),
            "░".repeat(BAR_WIDTH - filled)
        )));
    }
    let block = Block::default().borders(Borders::ALL).title(" Parameters ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_display(frame: &mut Frame, app: &App, area: Rect) {
    let s = &app.settings;
    let on_off = |b: bool| if b { "on" } else { "off" };
    let theme = match s.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };
    let lines = vec![
        Line::from(format!("Color map    {}", s.color_map)),
        Line::from(format!("Grid         {}", on_off(s.show_grid))),
        Line::from(format!("Auto-rotate  {}", on_off(s.auto_rotate))),
        Line::from(format!("Theme        {theme}")),
    ];
    let block = Block::default().borders(Borders::ALL).title(" Display ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_metrics(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.properties;
    let lines = vec![
        Line::from(format!("Surface Area: {:.4} units²", p.surface_area)),
        Line::from(format!("Edge Length:  {:.4} units", p.edge_length)),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Geometric Properties ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_help(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = HELP
        .iter()
        .map(|(key, what)| {
            Line::from(vec![
                Span::styled(format!("{key:>5} "), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(*what),
            ])
        })
        .collect();
    if !app.status.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(app.status.as_str()));
    }
    let block = Block::default().borders(Borders::ALL).title(" Keys ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Canvas bounds for a square view of half-size `extent` in a `cols × rows`
/// cell area. Cells are about twice as tall as they are wide.
fn bounds(extent: f64, cols: u16, rows: u16) -> ([f64; 2], [f64; 2]) {
    let aspect = cols.max(1) as f64 / (2.0 * rows.max(1) as f64);
    if aspect >= 1.0 {
        ([-extent * aspect, extent * aspect], [-extent, extent])
    } else {
        ([-extent, extent], [-extent / aspect, extent / aspect])
    }
}

fn draw_strip(frame: &mut Frame, app: &App, area: Rect, fg: Color, bg: Color) {
    let camera = app.camera();
    let projection = render::project(&app.strip, &camera, app.settings.color_map);
    let inner_cols = area.width.saturating_sub(2);
    let inner_rows = area.height.saturating_sub(2);
    let (x_bounds, y_bounds) = bounds(projection.extent, inner_cols, inner_rows);
    let show_grid = app.settings.show_grid;
    let axis_color = Color::DarkGray;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", mobius_ir::Figure::TITLE))
                .style(Style::default().fg(fg).bg(bg)),
        )
        .marker(Marker::Braille)
        .background_color(bg)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(move |ctx| {
            if show_grid {
                for &(label, x, y) in &projection.axes {
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: axis_color,
                    });
                    ctx.print(x, y, label);
                }
                ctx.layer();
            }
            for band in &projection.bands {
                let [r, g, b] = band.rgb;
                ctx.draw(&Points {
                    coords: &band.points,
                    color: Color::Rgb(r, g, b),
                });
            }
        });
    frame.render_widget(canvas, area);
}
