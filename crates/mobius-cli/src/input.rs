//! Key bindings for the viewer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Help text shown in the sidebar, one binding per entry.
pub const HELP: &[(&str, &str)] = &[
    ("↑/↓", "select slider"),
    ("←/→", "adjust value"),
    ("c", "next color map"),
    ("g", "toggle grid"),
    ("r", "toggle rotation"),
    ("t", "toggle theme"),
    ("e", "export .obj"),
    ("s", "export .stl"),
    ("q", "quit"),
];

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => app.step_selected(true),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.step_selected(false),
        KeyCode::Char('c') => app.settings.color_map = app.settings.color_map.next(),
        KeyCode::Char('g') => app.settings.show_grid = !app.settings.show_grid,
        KeyCode::Char('r') => {
            app.settings.auto_rotate = !app.settings.auto_rotate;
            app.frame = 0;
        }
        KeyCode::Char('t') => app.settings.theme = app.settings.theme.toggled(),
        KeyCode::Char('e') => app.export(None),
        KeyCode::Char('s') => {
            let path = app.export_path.with_extension("stl");
            app.export(Some(path));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::small_app;
    use mobius_ir::{ColorMap, Theme};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = small_app();
            press(&mut app, code);
            assert!(app.should_quit);
        }
        let mut app = small_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn arrows_move_sliders() {
        let mut app = small_app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.params.width, 0.35);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.params.width, 0.25);
    }

    #[test]
    fn display_toggles() {
        let mut app = small_app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.settings.color_map, ColorMap::Blues);
        press(&mut app, KeyCode::Char('g'));
        assert!(!app.settings.show_grid);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.settings.auto_rotate);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.settings.theme, Theme::Light);
    }

    #[test]
    fn export_stl_key() {
        let mut app = small_app();
        app.export_path = std::env::temp_dir().join("mobius_input_test.obj");
        press(&mut app, KeyCode::Char('s'));
        let stl = app.export_path.with_extension("stl");
        assert!(app.status.starts_with("Saved"), "{}", app.status);
        assert!(stl.exists());
        let _ = std::fs::remove_file(stl);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut app = small_app();
        let params = app.params;
        press(&mut app, KeyCode::Char('z'));
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.params, params);
        assert!(!app.should_quit);
    }
}
