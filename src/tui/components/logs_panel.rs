//! Logs strip
//!
//! Shows the tail of the in-memory log buffer, newest at the bottom,
//! colour-coded by level. Toggled with `L`.

use crate::logging::{LogEntry, LogLevel};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.destructive)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rows = area.height.saturating_sub(2) as usize;

    if app.log_buffer.is_empty() {
        let empty = Paragraph::new("No log entries yet")
            .style(Style::default().fg(theme.muted))
            .block(logs_block(app, theme));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .log_buffer
        .recent(rows)
        .iter()
        .map(|entry| ListItem::new(format_log_entry(entry)).style(log_level_style(entry.level, theme)))
        .collect();

    f.render_widget(List::new(items).block(logs_block(app, theme)), area);
}

fn logs_block(app: &App, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.panel_logs))
        .title(format!(" System Logs ({}) ", app.log_buffer.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn entry_format_has_time_level_and_message() {
        let entry = LogEntry {
            timestamp: Utc.with_ymd_and_hms(2024, 1, 15, 9, 5, 7).unwrap(),
            level: LogLevel::Warn,
            message: "Clipboard write failed".to_string(),
        };
        assert_eq!(
            format_log_entry(&entry),
            "[09:05:07] WARN  Clipboard write failed"
        );
    }
}
