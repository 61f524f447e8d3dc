//! Live previews drawn inside the example cards
//!
//! Each `Preview` draws a small terminal rendition of its widget from the
//! page's `WidgetState`. `height` reports the rows a preview needs so the
//! cards panel can size cards before drawing them.

use crate::catalogue::SAMPLE_RECORDS;
use crate::pages::widgets::{
    Formatting, TextAlign, WidgetState, ACCORDION_ITEMS, CAROUSEL_SLIDES, COMBOBOX_OPTIONS, RADIO_OPTIONS,
    SELECT_OPTIONS, SHEET_SIDES, TAB_LABELS,
};
use crate::pages::{Preview, BREADCRUMB_TRAIL, CHART_DATA};
use crate::theme::{contrast_fg, Theme};
use chrono::{Datelike, Local, NaiveDate};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, LineGauge, Paragraph, Row, Table, Tabs},
    Frame,
};

/// Rows needed by a preview (excluding the card's own border and blurb)
pub fn height(preview: Preview) -> u16 {
    match preview {
        Preview::Calendar => 8,
        Preview::Chart => 6,
        Preview::DataTable => 2 + SAMPLE_RECORDS.len() as u16,
        Preview::Table => 4,
        Preview::Resizable | Preview::SidebarNav | Preview::Accordion | Preview::Cards => 3,
        Preview::Popover
        | Preview::HoverCard
        | Preview::Tooltip
        | Preview::Input
        | Preview::Textarea
        | Preview::Tabs
        | Preview::Carousel
        | Preview::Skeleton
        | Preview::Stats
        | Preview::ToggleGroup
        | Preview::Collapsible => 2,
        _ => 1,
    }
}

/// A filled "button" label
fn button(label: &str, bg: Color) -> Span<'static> {
    Span::styled(format!(" {} ", label), Style::default().bg(bg).fg(contrast_fg(bg)))
}

fn outline(label: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!("[{}]", label), Style::default().fg(theme.foreground))
}

fn muted<'a>(text: impl Into<std::borrow::Cow<'a, str>>, theme: &Theme) -> Span<'a> {
    Span::styled(text, Style::default().fg(theme.muted))
}

fn gap() -> Span<'static> {
    Span::raw(" ")
}

pub fn render(f: &mut Frame, area: Rect, preview: Preview, w: &WidgetState, theme: &Theme) {
    let fg = Style::default().fg(theme.foreground);
    let bold = fg.add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = match preview {
        Preview::ButtonVariants => vec![Line::from(vec![
            button("Default", theme.primary),
            gap(),
            button("Secondary", theme.secondary),
            gap(),
            button("Destructive", theme.destructive),
            gap(),
            outline("Outline", theme),
            gap(),
            Span::styled("Ghost", fg),
            gap(),
            Span::styled("Link", fg.add_modifier(Modifier::UNDERLINED)),
        ])],
        Preview::ButtonSizes => vec![Line::from(vec![
            button("Small", theme.primary),
            gap(),
            button(" Default ", theme.primary),
            gap(),
            button("   Large   ", theme.primary),
            gap(),
            button("⚙", theme.primary),
        ])],
        Preview::ButtonStates => {
            let load = if w.is_loading() {
                button("⟳ Please wait", theme.muted)
            } else {
                button("Click to Load", theme.primary)
            };
            vec![Line::from(vec![
                Span::styled(
                    " Disabled ",
                    Style::default()
                        .fg(theme.muted)
                        .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
                ),
                gap(),
                load,
            ])]
        }
        Preview::ButtonIcons => vec![Line::from(vec![
            button("✉ Login with Email", theme.primary),
            gap(),
            button("Next →", theme.secondary),
            gap(),
            outline("⚙", theme),
        ])],
        Preview::ButtonEvents => vec![Line::from(vec![
            button("Click Me", theme.primary),
            gap(),
            muted(format!("clicked {} times", w.click_count), theme),
        ])],
        Preview::Dialog => vec![Line::from(outline("Open Dialog", theme))],
        Preview::Popover => vec![
            Line::from(outline("Open Popover", theme)),
            Line::from(muted("Place content for the popover here.", theme)),
        ],
        Preview::AlertDialog => vec![Line::from(button("Delete Account", theme.destructive))],
        Preview::Toast => vec![Line::from(outline("Show Toast", theme))],
        Preview::HoverCard => vec![
            Line::from(Span::styled("@nextjs", fg.add_modifier(Modifier::UNDERLINED))),
            Line::from(muted("The React Framework, created and maintained by @vercel.", theme)),
        ],
        Preview::Tooltip => vec![
            Line::from(outline("Hover", theme)),
            Line::from(Span::styled(
                " Add to library ",
                Style::default().bg(theme.primary).fg(contrast_fg(theme.primary)),
            )),
        ],
        Preview::Input => vec![
            Line::from(Span::styled("Email", bold)),
            Line::from(muted("│ you@example.com                │", theme)),
        ],
        Preview::Textarea => vec![
            Line::from(muted("│ Type your message here.        │", theme)),
            Line::from(muted("│                                │", theme)),
        ],
        Preview::Select => vec![Line::from(vec![
            Span::styled("Country ", bold),
            outline(SELECT_OPTIONS[w.select % SELECT_OPTIONS.len()], theme),
            muted(" ▾", theme),
        ])],
        Preview::Radio => {
            let mut spans = Vec::new();
            for (i, option) in RADIO_OPTIONS.iter().enumerate() {
                let mark = if i == w.radio { "(•)" } else { "( )" };
                spans.push(Span::styled(format!("{} {}  ", mark, option), fg));
            }
            vec![Line::from(spans)]
        }
        Preview::Checkbox => {
            let mark = if w.checkbox { "[x]" } else { "[ ]" };
            vec![Line::from(Span::styled(
                format!("{} Accept terms and conditions", mark),
                fg,
            ))]
        }
        Preview::Switch => {
            let (knob, color) = if w.switch {
                ("──●", theme.success)
            } else {
                ("●──", theme.muted)
            };
            vec![Line::from(vec![
                Span::styled(format!("({})", knob), Style::default().fg(color)),
                Span::styled(" Enable notifications", fg),
            ])]
        }
        Preview::Calendar => calendar_lines(Local::now().date_naive(), theme),
        Preview::Cards => vec![
            Line::from(Span::styled("$12,400", bold)),
            Line::from(vec![
                button("+12%", theme.primary),
                muted(" this month", theme),
            ]),
            Line::from(muted("Conversion Rate 4.3%", theme)),
        ],
        Preview::Table => return render_invoice_table(f, area, theme),
        Preview::Tabs => return render_tabs(f, area, w, theme),
        Preview::Badges => vec![Line::from(vec![
            button("New", theme.primary),
            gap(),
            button("Beta", theme.secondary),
            gap(),
            button("Error", theme.destructive),
            gap(),
            outline("Draft", theme),
        ])],
        Preview::Progress => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(theme.highlight).bg(theme.secondary))
                .percent(u16::from(w.progress))
                .label(format!("{}%", w.progress));
            f.render_widget(gauge, area);
            return;
        }
        Preview::Slider => {
            let gauge = LineGauge::default()
                .filled_style(Style::default().fg(theme.highlight))
                .unfilled_style(Style::default().fg(theme.border))
                .ratio(f64::from(w.slider) / 100.0)
                .label(format!("{:>3}%", w.slider));
            f.render_widget(gauge, area);
            return;
        }
        Preview::Carousel => {
            let dots: Vec<Span> = (0..CAROUSEL_SLIDES)
                .map(|i| {
                    let dot = if i == w.carousel { "● " } else { "○ " };
                    Span::styled(dot, Style::default().fg(theme.highlight))
                })
                .collect();
            vec![
                Line::from(vec![
                    muted("‹  ", theme),
                    Span::styled(format!("Slide {}", w.carousel + 1), bold),
                    muted("  ›", theme),
                ])
                .alignment(Alignment::Center),
                Line::from(dots).alignment(Alignment::Center),
            ]
        }
        Preview::Skeleton => {
            let bar = Style::default().fg(theme.secondary);
            vec![
                Line::from(Span::styled("████████████████████████", bar)),
                Line::from(Span::styled("████████████████", bar)),
            ]
        }
        Preview::Stats => vec![
            Line::from(Span::styled("8,930", bold)),
            Line::from(muted("active users this week", theme)),
        ],
        Preview::Chart => {
            let chart = BarChart::default()
                .data(CHART_DATA)
                .bar_width(4)
                .bar_gap(2)
                .bar_style(Style::default().fg(theme.highlight))
                .value_style(Style::default().fg(contrast_fg(theme.highlight)).bg(theme.highlight))
                .label_style(Style::default().fg(theme.muted));
            f.render_widget(chart, area);
            return;
        }
        Preview::Pagination => {
            // Prev/Next grey out at the ends
            let edge = |disabled: bool| if disabled { Style::default().fg(theme.muted) } else { fg };
            let mut spans = vec![Span::styled("‹ Prev ", edge(w.pager.is_first()))];
            for page in w.pager.window() {
                if page == w.pager.current() {
                    spans.push(button(&page.to_string(), theme.primary));
                } else {
                    spans.push(Span::styled(format!(" {} ", page), fg));
                }
            }
            spans.push(Span::styled(" Next ›", edge(w.pager.is_last())));
            spans.push(muted(
                format!("   page {} of {}", w.pager.current(), w.pager.total()),
                theme,
            ));
            vec![Line::from(spans)]
        }
        Preview::Combobox => {
            let chosen = match w.combobox {
                Some(i) => Span::styled(COMBOBOX_OPTIONS[i % COMBOBOX_OPTIONS.len()], fg),
                None => muted("Select framework...", theme),
            };
            vec![Line::from(vec![
                Span::styled("Framework ", bold),
                muted("[", theme),
                chosen,
                muted(" ⌄]", theme),
            ])]
        }
        Preview::DataTable => return render_data_table(f, area, w, theme),
        Preview::Breadcrumbs => {
            let mut spans = Vec::new();
            for (i, crumb) in BREADCRUMB_TRAIL.iter().enumerate() {
                if i > 0 {
                    spans.push(muted(" › ", theme));
                }
                let style = if i + 1 == BREADCRUMB_TRAIL.len() { bold } else { fg };
                spans.push(Span::styled(*crumb, style));
            }
            vec![Line::from(spans)]
        }
        Preview::Toggle => {
            let mut spans = Vec::new();
            for (i, label) in Formatting::LABELS.iter().enumerate() {
                let mut style = if w.formatting.is_on(i) {
                    Style::default().bg(theme.primary).fg(contrast_fg(theme.primary))
                } else {
                    fg
                };
                if i == w.formatting.focus {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(format!(" {} ", label), style));
                spans.push(gap());
            }
            vec![Line::from(spans)]
        }
        Preview::ToggleGroup => {
            let mut spans = Vec::new();
            for align in [TextAlign::Left, TextAlign::Center, TextAlign::Right] {
                if align == w.align {
                    spans.push(button(align.label(), theme.primary));
                } else {
                    spans.push(Span::styled(format!(" {} ", align.label()), fg));
                }
            }
            let alignment = match w.align {
                TextAlign::Left => Alignment::Left,
                TextAlign::Center => Alignment::Center,
                TextAlign::Right => Alignment::Right,
            };
            vec![
                Line::from(spans),
                Line::from(muted("Aligned sample text", theme)).alignment(alignment),
            ]
        }
        Preview::Resizable => {
            let [left, right] = Layout::horizontal([
                Constraint::Percentage(w.split),
                Constraint::Percentage(100 - w.split),
            ])
            .areas(area);
            for (rect, label) in [(left, "One"), (right, "Two")] {
                let pane = Paragraph::new(label)
                    .alignment(Alignment::Center)
                    .style(fg)
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(theme.border)),
                    );
                f.render_widget(pane, rect);
            }
            return;
        }
        Preview::SidebarNav => {
            if w.sidebar_open {
                vec![
                    Line::from(Span::styled("▾ Dashboard", bold)),
                    Line::from(Span::styled("    Overview   Analytics", fg)),
                    Line::from(Span::styled("▸ Settings", fg)),
                ]
            } else {
                vec![Line::from(muted("▸ Dashboard", theme))]
            }
        }
        Preview::Sheet => vec![Line::from(vec![
            outline(
                &format!("Open {} Sheet", SHEET_SIDES[w.sheet_side % SHEET_SIDES.len()]),
                theme,
            ),
            muted("  ←/→ side", theme),
        ])],
        Preview::Collapsible => {
            let mut lines = vec![Line::from(Span::styled(
                if w.collapsible_open {
                    "▾ Toggle Content"
                } else {
                    "▸ Toggle Content"
                },
                bold,
            ))];
            if w.collapsible_open {
                lines.push(Line::from(Span::styled("  Hidden content revealed!", fg)));
            }
            lines
        }
        Preview::Accordion => {
            let mut lines = Vec::new();
            for (i, (title, body)) in ACCORDION_ITEMS.iter().enumerate() {
                let open = w.accordion_open == Some(i);
                let marker = if open { "▾" } else { "▸" };
                lines.push(Line::from(Span::styled(format!("{} {}", marker, title), bold)));
                if open {
                    lines.push(Line::from(muted(format!("  {}", body), theme)));
                }
            }
            lines
        }
    };

    f.render_widget(Paragraph::new(lines), area);
}

/// Month grid starting on Sunday with `today` highlighted
fn calendar_lines(today: NaiveDate, theme: &Theme) -> Vec<Line<'static>> {
    let Some(first) = NaiveDate::from_ymd_opt(today.year(), today.month(), 1) else {
        return Vec::new();
    };
    let days_in_month = first
        .checked_add_months(chrono::Months::new(1))
        .map(|next| next.signed_duration_since(first).num_days() as u32)
        .unwrap_or(31);
    let offset = first.weekday().num_days_from_sunday();

    let mut lines = vec![
        Line::from(Span::styled(
            first.format("%B %Y").to_string(),
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Left),
        Line::from(Span::styled(
            "Su Mo Tu We Th Fr Sa",
            Style::default().fg(theme.muted),
        )),
    ];

    let mut week: Vec<Span> = (0..offset).map(|_| Span::raw("   ")).collect();
    let mut slot = offset;
    for day in 1..=days_in_month {
        let style = if day == today.day() {
            Style::default().bg(theme.primary).fg(contrast_fg(theme.primary))
        } else {
            Style::default().fg(theme.foreground)
        };
        week.push(Span::styled(format!("{:>2}", day), style));
        week.push(Span::raw(" "));
        slot += 1;
        if slot % 7 == 0 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }
    lines
}

fn render_tabs(f: &mut Frame, area: Rect, w: &WidgetState, theme: &Theme) {
    let [bar, body] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let tabs = Tabs::new(TAB_LABELS.to_vec())
        .select(w.tab)
        .style(Style::default().fg(theme.muted))
        .highlight_style(
            Style::default()
                .fg(theme.foreground)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
    f.render_widget(tabs, bar);

    let content = match w.tab {
        0 => "Content for tab one.",
        1 => "Content for tab two.",
        _ => "Content for tab three.",
    };
    f.render_widget(
        Paragraph::new(content).style(Style::default().fg(theme.foreground)),
        body,
    );
}

fn render_invoice_table(f: &mut Frame, area: Rect, theme: &Theme) {
    let status = |label: &'static str, bg: Color| {
        Span::styled(label, Style::default().fg(contrast_fg(bg)).bg(bg))
    };
    let rows = vec![
        Row::new(vec![
            Span::raw("John Doe"),
            Span::raw("john@example.com"),
            status("Active", theme.primary),
        ]),
        Row::new(vec![
            Span::raw("Sarah Lee"),
            Span::raw("sarah@example.com"),
            status("Banned", theme.destructive),
        ]),
        Row::new(vec![
            Span::raw("Mike Johnson"),
            Span::raw("mike@example.com"),
            status("Pending", theme.secondary),
        ]),
    ];
    let table = Table::new(
        rows,
        [
            Constraint::Length(14),
            Constraint::Min(18),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new(vec!["Name", "Email", "Status"])
            .style(Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
    )
    .style(Style::default().fg(theme.foreground));
    f.render_widget(table, area);
}

fn render_data_table(f: &mut Frame, area: Rect, w: &WidgetState, theme: &Theme) {
    let [search, body] = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    let query = w.table.query();
    let prompt = if query.is_empty() {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(theme.foreground)),
            Span::styled("name or email...", Style::default().fg(theme.muted)),
        ])
    } else {
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(theme.foreground)),
            Span::styled(
                query.to_string(),
                Style::default()
                    .fg(theme.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    };
    f.render_widget(Paragraph::new(prompt), search);

    let visible = w.table.visible(SAMPLE_RECORDS);
    if visible.is_empty() {
        f.render_widget(
            Paragraph::new("No results.").style(Style::default().fg(theme.muted)),
            body,
        );
        return;
    }

    let rows: Vec<Row> = visible
        .iter()
        .map(|r| Row::new(vec![r.name, r.email, r.role, r.status]))
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Length(15),
            Constraint::Min(20),
            Constraint::Length(7),
            Constraint::Length(9),
        ],
    )
    .header(
        Row::new(vec!["Name", "Email", "Role", "Status"])
            .style(Style::default().fg(theme.muted).add_modifier(Modifier::BOLD)),
    )
    .style(Style::default().fg(theme.foreground));
    f.render_widget(table, body);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn calendar_starts_on_the_right_weekday() {
        // 1 Feb 2024 was a Thursday
        let today = NaiveDate::from_ymd_opt(2024, 2, 14).expect("valid date");
        let lines = text(&calendar_lines(today, &Theme::light()));

        assert_eq!(lines[0], "February 2024");
        assert!(lines[2].starts_with(&format!("{} 1 ", " ".repeat(12))));
        // Leap year: 29 days
        assert!(lines.last().expect("weeks").contains("29"));
        assert!(!lines.iter().any(|l| l.contains("30")));
    }

    #[test]
    fn data_table_fits_every_record() {
        assert_eq!(height(Preview::DataTable), 2 + SAMPLE_RECORDS.len() as u16);
    }
}
