// Views module - screen-level rendering logic
//
// The shell (title bar, optional logs strip, status bar) is the same on every
// route; the content slot shows either the home grid or a demo page.
// Modals and the toast are drawn last, on top of everything.

mod modal;
mod page;

use super::app::App;
use crate::tui::components;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

const LOGS_HEIGHT: u16 = 8;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let logs_height = if app.show_logs { LOGS_HEIGHT } else { 0 };
    let [title, content, logs, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(logs_height),
        Constraint::Length(2),
    ])
    .areas(f.area());

    components::render_title(f, title, app);

    if app.page.is_home() {
        components::home::render(f, content, app);
    } else {
        page::render(f, content, app);
    }

    if app.show_logs {
        components::render_logs_panel(f, logs, app);
    }
    components::render_status(f, status, app);

    if let Some(modal_state) = &app.modal {
        modal::render(f, modal_state, app);
    }

    if let Some(toast) = &app.toast {
        let area = f.area();
        toast.render(f, area, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::copy::tests::FakeClipboard;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::router::ROUTES;
    use crate::tui::modal::Modal;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use std::time::Instant;

    fn app_at(route: &str) -> App {
        let config = Config {
            start_route: route.to_string(),
            show_logs: true,
            ..Config::default()
        };
        App::new(&config, LogBuffer::new(), Box::new(FakeClipboard::default()))
    }

    fn render(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal.backend().buffer().clone()
    }

    fn contains(buffer: &Buffer, needle: &str) -> bool {
        let area = buffer.area;
        (0..area.height).any(|y| {
            let row: String = (0..area.width)
                .map(|x| buffer[(x, y)].symbol().to_string())
                .collect();
            row.contains(needle)
        })
    }

    #[test]
    fn every_route_renders_wide_and_narrow() {
        for route in ROUTES {
            let app = app_at(route.path);
            for (width, height) in [(140, 45), (80, 30)] {
                let buffer = render(&app, width, height);
                assert!(
                    contains(&buffer, route.path),
                    "{} missing from the title bar at {}x{}",
                    route.path,
                    width,
                    height
                );
            }
            // Cramped terminals only need to not panic
            render(&app, 40, 12);
        }
    }

    #[test]
    fn home_lists_every_demo() {
        let buffer = render(&app_at("/"), 140, 40);
        for route in ROUTES.iter().skip(1) {
            assert!(contains(&buffer, route.name), "{} not on home grid", route.name);
        }
    }

    #[test]
    fn docs_panel_shows_copy_button_states() {
        let mut app = app_at("/demo/buttons");
        assert!(contains(&render(&app, 140, 45), "Copy Code"));

        app.copy_snippet(Instant::now());
        assert!(contains(&render(&app, 140, 45), "✓ Copied!"));
    }

    #[test]
    fn missing_snippet_renders_placeholder() {
        let mut app = app_at("/demo/dialog");
        let tooltip = app
            .page
            .cards
            .iter()
            .position(|c| c.id == "Tooltip")
            .expect("tooltip card");
        app.state.move_cursor(&app.page, tooltip as isize);

        assert!(contains(&render(&app, 140, 45), "No code example available"));
    }

    #[test]
    fn narrow_terminal_toggles_panes() {
        let mut app = app_at("/demo/form");
        assert!(contains(&render(&app, 80, 30), "Examples"));
        assert!(!contains(&render(&app, 80, 30), "Component Props"));

        app.toggle_pane();
        assert!(contains(&render(&app, 80, 30), "Component Props"));
    }

    #[test]
    fn dialog_modal_renders_on_top() {
        let mut app = app_at("/demo/dialog");
        app.modal = Some(Modal::dialog("Are you sure?", "This action cannot be undone."));
        let buffer = render(&app, 100, 30);
        assert!(contains(&buffer, "Are you sure?"));
        assert!(contains(&buffer, "This action cannot be undone."));
    }
}
