// Home page: grid of demo cards
//
// Three columns on wide terminals, one on narrow ones. Each card shows the
// route name, description and its number key.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CARD_HEIGHT: u16 = 5;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let [header, grid] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let intro = Paragraph::new(vec![
        Line::from(Span::styled(
            app.page.title,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(app.page.subtitle, Style::default().fg(theme.muted))),
    ]);
    f.render_widget(intro, header);

    let columns: usize = if Breakpoint::from_width(area.width).shows_both_panes() {
        3
    } else {
        1
    };

    let routes: Vec<_> = app.demo_routes().collect();
    let row_count = routes.len().div_ceil(columns);

    // Keep the highlighted row on screen when the grid overflows
    let visible_rows = (grid.height / CARD_HEIGHT).max(1) as usize;
    let cursor_row = app.home_cursor / columns;
    let first_row = cursor_row.saturating_sub(visible_rows - 1);

    let rows = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(grid);

    for (slot, row) in (first_row..row_count).take(visible_rows).enumerate() {
        let cells =
            Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns]).split(rows[slot]);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            let Some(route) = routes.get(index) else {
                break;
            };
            let selected = index == app.home_cursor;

            let border = if selected {
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.border)
            };

            let card = Paragraph::new(vec![
                Line::from(Span::styled(route.description, Style::default().fg(theme.foreground))),
                Line::from(Span::styled(route.path, Style::default().fg(theme.muted))),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(border)
                    .title(format!(" {} {} ", index + 1, route.name)),
            );

            f.render_widget(card, *cell);
        }
    }
}
