// Components module - reusable UI building blocks
//
// Shell components are rendered on every page:
// - Title bar: page title, route, dark-mode indicator
// - Status bar: key hints, copy state, uptime
// - Logs panel: recent tracing output
//
// Page components fill the content slot:
// - Home: demo grid
// - Cards panel: example cards with live previews
// - Docs panel: chip row, prop table, snippet and copy button

pub mod cards_panel;
pub mod docs_panel;
pub mod home;
pub mod logs_panel;
pub mod previews;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use toast::Toast;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}

/// Render the logs panel (convenience wrapper)
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    logs_panel::render(f, area, app);
}
