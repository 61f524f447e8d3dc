// Modal overlay rendering
//
// Modals are rendered on top of the page:
// - Help modal: keyboard shortcuts
// - Dialog modal: the dialog / alert dialog / sheet demos

use crate::tui::app::App;
use crate::tui::layout::centered;
use crate::tui::modal::Modal;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Help => render_help(f, app, modal.title()),
        Modal::Dialog { body, .. } => render_dialog(f, app, modal.title(), body),
    }
}

fn overlay_block<'a>(title: impl Into<Line<'a>>, app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight))
        .style(Style::default().bg(app.theme.background))
        .title(title)
}

fn render_help(f: &mut Frame, app: &App, title: &str) {
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("1-6", "Open a demo page"),
        kb("g, Esc", "Back to the showcase"),
        kb("↑/↓, j/k", "Highlight a card"),
        kb("Enter", "Open demo / use widget"),
        Line::raw(""),
        Line::from(Span::styled("  Widgets", header_style)),
        kb("←/→, h/l", "Change value"),
        kb("Space", "Press / toggle"),
        kb("/", "Search the data table"),
        Line::raw(""),
        Line::from(Span::styled("  Docs", header_style)),
        kb("Tab", "Next example in the docs"),
        kb("Shift+Tab", "Previous example"),
        kb("y", "Copy code"),
        kb("Y", "Copy props as JSON"),
        kb("p", "Show / hide props (narrow)"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("d", "Toggle dark mode"),
        kb("L", "Toggle logs"),
        kb("?", "Close this help"),
        kb("q", "Quit"),
    ]);

    let area = centered(f.area(), 52, content.height() as u16 + 2);
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content).block(overlay_block(title.to_string(), app)),
        area,
    );
}

fn render_dialog(f: &mut Frame, app: &App, title: &str, body: &str) {
    let area: Rect = centered(f.area(), 56, 8);

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled(
            body.to_string(),
            Style::default().fg(app.theme.foreground),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Enter / Esc to close",
            Style::default().fg(app.theme.muted),
        ))
        .alignment(Alignment::Right),
    ]);

    let title = Line::from(Span::styled(
        format!(" {} ", title),
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    ));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(overlay_block(title, app).padding(ratatui::widgets::Padding::horizontal(1))),
        area,
    );
}
