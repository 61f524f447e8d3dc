// Status bar component
//
// Key hints for the current context, the copy indicator and uptime.
// Narrow terminals get the short hint set.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn hints(app: &App, bp: Breakpoint) -> &'static str {
    if app.searching {
        return "type to filter │ Backspace delete │ Enter done │ Esc clear";
    }
    match (app.page.is_home(), bp) {
        (true, Breakpoint::Compact) => "↑↓ Enter │ 1-6 │ q",
        (true, _) => "↑↓ select │ Enter open │ 1-6 jump │ d theme │ ? help │ q quit",
        (false, Breakpoint::Compact) => "↑↓ ←→ Space │ y │ p │ Esc",
        (false, Breakpoint::Normal) => "↑↓ card │ ←→ Space use │ y copy │ p props │ Esc home",
        (false, Breakpoint::Wide) => {
            "↑↓ card │ Tab chip │ ←→ Space use │ y copy │ Y props │ / search │ d theme │ Esc home │ ? help"
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let mut spans = vec![Span::styled(
        format!(" {} ", app.uptime()),
        Style::default().fg(theme.muted),
    )];

    if !app.page.is_home() && app.state.copy.is_copied() {
        spans.push(Span::styled(
            "✓ Copied! ",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        ));
    }

    spans.push(Span::styled(
        hints(app, bp),
        Style::default().fg(theme.status_bar),
    ));

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}
