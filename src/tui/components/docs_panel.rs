//! Docs panel - the right pane of every demo page
//!
//! Top to bottom:
//! - chip row with every registry identifier (Tab cycles it)
//! - prop table for the selected identifier
//! - the snippet, with the copy button label in the block title
//!
//! An identifier without a snippet shows the placeholder text instead.

use crate::catalogue::{CopyState, PropDoc};
use crate::theme::Theme;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

/// Label on the copy button
pub fn copy_label(state: CopyState) -> &'static str {
    match state {
        CopyState::Idle => "Copy Code",
        CopyState::Copied => "✓ Copied!",
    }
}

fn chip_row<'a>(ids: impl Iterator<Item = &'a str>, selected: &str, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for id in ids {
        let style = if id == selected {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.selection)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground).bg(theme.secondary)
        };
        spans.push(Span::styled(format!(" {} ", id), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn prop_table<'a>(props: &'a [PropDoc], theme: &Theme) -> Table<'a> {
    let rows = props.iter().map(|p| {
        Row::new(vec![
            Cell::from(p.name).style(Style::default().fg(theme.foreground).add_modifier(Modifier::BOLD)),
            Cell::from(p.ty).style(Style::default().fg(theme.panel_docs)),
            Cell::from(p.description).style(Style::default().fg(theme.muted)),
        ])
    });

    Table::new(
        rows,
        [
            Constraint::Percentage(22),
            Constraint::Percentage(30),
            Constraint::Percentage(48),
        ],
    )
    .header(
        Row::new(vec!["Prop", "Type", "Description"])
            .style(Style::default().fg(theme.title).add_modifier(Modifier::UNDERLINED)),
    )
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let page = &app.page;
    let selected = app.state.selected();
    let props = app.state.props(page);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.panel_docs))
        .title(format!(" {} ", page.panel_title))
        .title_top(Line::from(format!(" p {} ", app.pane.toggle_label())).right_aligned());
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    // Header + one row per prop, at least one row for the empty message
    let table_height = (props.len().max(1) as u16 + 1).min(inner.height / 2);
    let [chips, heading, table, code] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(table_height),
        Constraint::Min(3),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new(chip_row(page.registry.ids(), selected, theme)).wrap(Wrap { trim: false }),
        chips,
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            selected.to_string(),
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        ))),
        heading,
    );

    if props.is_empty() {
        f.render_widget(
            Paragraph::new("No props documented").style(Style::default().fg(theme.muted)),
            table,
        );
    } else {
        f.render_widget(prop_table(props, theme), table);
    }

    let lookup = app.state.lookup(page);
    let copy_state = app.state.copy.state();
    let button_style = match copy_state {
        CopyState::Idle => Style::default().fg(theme.code_fg()),
        CopyState::Copied => Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD),
    };
    let text_style = if lookup.is_found() {
        Style::default().fg(theme.code_fg())
    } else {
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC)
    };

    let snippet = Paragraph::new(lookup.text())
        .style(text_style.bg(theme.code_block))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border).bg(theme.code_block))
                .title(" Code ")
                .title_top(
                    Line::from(Span::styled(format!(" y {} ", copy_label(copy_state)), button_style))
                        .right_aligned(),
                ),
        );
    f.render_widget(snippet, code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_label_follows_state() {
        assert_eq!(copy_label(CopyState::Idle), "Copy Code");
        assert_eq!(copy_label(CopyState::Copied), "✓ Copied!");
    }

    #[test]
    fn chip_row_marks_only_the_selection() {
        let theme = Theme::light();
        let line = chip_row(["Dialog", "Popover", "Toast"].into_iter(), "Popover", &theme);
        let selected: Vec<_> = line
            .spans
            .iter()
            .filter(|s| s.style.bg == Some(theme.selection))
            .map(|s| s.content.trim().to_string())
            .collect();
        assert_eq!(selected, ["Popover"]);
    }
}
