/// Responsive breakpoints and rect helpers.
///
/// Single source of truth for width thresholds - no magic numbers scattered in render code.
use ratatui::layout::{Constraint, Flex, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: one pane, terse hints
    Compact,
    /// 60-99 cols: one pane at a time, `p` switches
    Normal,
    /// 100+ cols: cards and docs side by side
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    pub fn at_least(&self, min: Breakpoint) -> bool {
        *self >= min
    }

    /// Both panes fit next to each other
    pub fn shows_both_panes(&self) -> bool {
        self.at_least(Breakpoint::Wide)
    }
}

/// Rect of `width` x `height` centred in `area`, clamped to fit
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
