// Demo page view
//
// Subtitle line, then the two panes. Wide terminals show cards and docs side
// by side; narrower ones show whichever pane `p` selected.

use crate::tui::app::{App, Pane};
use crate::tui::components::{cards_panel, docs_panel};
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let [subtitle, panes] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    f.render_widget(
        Paragraph::new(app.page.subtitle).style(Style::default().fg(app.theme.muted)),
        subtitle,
    );

    if Breakpoint::from_width(area.width).shows_both_panes() {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(panes);
        cards_panel::render(f, left, app);
        docs_panel::render(f, right, app);
    } else {
        match app.pane {
            Pane::Cards => cards_panel::render(f, panes, app),
            Pane::Docs => docs_panel::render(f, panes, app),
        }
    }
}
