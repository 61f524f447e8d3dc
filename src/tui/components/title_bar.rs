// Title bar component
//
// Page title on the left, route and dark-mode toggle label on the right.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let title = Line::from(vec![
        Span::styled(
            format!(" ◆ {}", app.page.title),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.route()), Style::default().fg(theme.muted)),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border))
        .title_top(Line::from(format!(" d {} ", app.dark_mode.toggle_label())).right_aligned())
        .title_top(Line::from(" ? ").right_aligned());

    f.render_widget(Paragraph::new(title).block(block), area);
}
