// Cards panel - the example cards on the left pane
//
// Each card is a bordered box: title, blurb, live preview. Cards are sized by
// their preview and the list scrolls just enough to keep the highlighted card
// on screen.

use super::previews;
use crate::pages::ExampleCard;
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Border + blurb + preview
fn card_height(card: &ExampleCard) -> u16 {
    2 + 1 + previews::height(card.preview)
}

/// First card to draw so that `cursor` is fully visible in `available` rows
pub(crate) fn first_visible(heights: &[u16], cursor: usize, available: u16) -> usize {
    if heights.is_empty() {
        return 0;
    }
    let cursor = cursor.min(heights.len() - 1);
    let mut used = 0u16;
    let mut first = cursor;
    for (i, height) in heights[..=cursor].iter().enumerate().rev() {
        used = used.saturating_add(*height);
        if used > available {
            break;
        }
        first = i;
    }
    first
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let cards = &app.page.cards;

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.panel_cards))
        .title(format!(" Examples ({}/{}) ", app.state.cursor + 1, cards.len()));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    if cards.is_empty() {
        return;
    }

    let heights: Vec<u16> = cards.iter().map(card_height).collect();
    let first = first_visible(&heights, app.state.cursor, inner.height);

    let mut y = inner.y;
    for (index, card) in cards.iter().enumerate().skip(first) {
        let height = heights[index];
        // The highlighted card is clipped rather than skipped when it can't fit
        if y >= inner.bottom() || (index != first && y + height > inner.bottom()) {
            break;
        }
        let rect = Rect::new(inner.x, y, inner.width, height.min(inner.bottom() - y));
        render_card(f, rect, app, card, index == app.state.cursor);
        y += height;
    }
}

fn render_card(f: &mut Frame, area: Rect, app: &App, card: &ExampleCard, highlighted: bool) {
    let theme = &app.theme;
    let selected = card.id == app.state.selected();

    let border = if highlighted {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };

    let mut title = vec![Span::styled(
        format!(" {} ", card.title),
        Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
    )];
    if selected {
        title.push(Span::styled("● ", Style::default().fg(theme.panel_docs)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(border)
        .title(Line::from(title));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [blurb, preview] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
    f.render_widget(
        Paragraph::new(card.blurb).style(Style::default().fg(theme.muted)),
        blurb,
    );
    previews::render(f, preview, card.preview, &app.state.widgets, theme);
}
