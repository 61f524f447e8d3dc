//! Local widget state for the live previews
//!
//! Each example card renders a small live widget. The widgets are toys: a
//! slider, some toggles, a pager, a searchable table. All of them share one
//! `WidgetState` per page visit, driven by three actions.

use crate::catalogue::{Pager, ReversionTimer, TableView};
use std::time::{Duration, Instant};

/// How long the "Click to Load" button stays in its loading state
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

pub const SLIDER_STEP: u8 = 5;
pub const DEMO_PAGES: usize = 10;

pub const SELECT_OPTIONS: &[&str] = &["United States", "United Kingdom", "Canada", "Nigeria"];
pub const RADIO_OPTIONS: &[&str] = &["Option 1", "Option 2"];
pub const TAB_LABELS: &[&str] = &["Tab One", "Tab Two", "Tab Three"];
pub const CAROUSEL_SLIDES: usize = 5;
pub const COMBOBOX_OPTIONS: &[&str] = &["Next.js", "SvelteKit", "Nuxt.js", "Remix", "Astro"];
pub const ACCORDION_ITEMS: &[(&str, &str)] = &[
    ("Team", "Members, Invites"),
    ("Projects", "All Projects, Create Project"),
];
pub const SHEET_SIDES: &[&str] = &["Left", "Right", "Top", "Bottom"];

/// What a card renders as its live preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview {
    ButtonVariants,
    ButtonSizes,
    ButtonStates,
    ButtonIcons,
    ButtonEvents,
    Dialog,
    Popover,
    AlertDialog,
    Toast,
    HoverCard,
    Tooltip,
    Input,
    Textarea,
    Select,
    Radio,
    Checkbox,
    Switch,
    Calendar,
    Cards,
    Table,
    Tabs,
    Badges,
    Progress,
    Slider,
    Carousel,
    Skeleton,
    Stats,
    Chart,
    Pagination,
    Combobox,
    DataTable,
    Breadcrumbs,
    Toggle,
    ToggleGroup,
    Resizable,
    SidebarNav,
    Sheet,
    Collapsible,
    Accordion,
}

/// Input the focused preview receives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    /// → / l
    Increase,
    /// ← / h
    Decrease,
    /// Space / Enter
    Activate,
}

/// Side effect the app must carry out after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Toast(String),
    OpenDialog { title: String, body: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    fn next(self) -> Self {
        match self {
            Self::Left => Self::Center,
            Self::Center => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Center => Self::Left,
            Self::Right => Self::Center,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
        }
    }
}

/// Formatting toggles on the "toggle" example, cycled by ←/→
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    /// Which of the three has focus
    pub focus: usize,
}

impl Formatting {
    pub const LABELS: [&'static str; 3] = ["B", "I", "U"];

    fn flip_focused(&mut self) {
        match self.focus {
            0 => self.bold = !self.bold,
            1 => self.italic = !self.italic,
            _ => self.underline = !self.underline,
        }
    }

    pub fn is_on(&self, index: usize) -> bool {
        match index {
            0 => self.bold,
            1 => self.italic,
            _ => self.underline,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    pub slider: u8,
    pub progress: u8,
    pub tab: usize,
    pub formatting: Formatting,
    pub align: TextAlign,
    pub checkbox: bool,
    pub switch: bool,
    pub radio: usize,
    pub select: usize,
    pub carousel: usize,
    pub combobox: Option<usize>,
    pub collapsible_open: bool,
    pub accordion_open: Option<usize>,
    pub sidebar_open: bool,
    pub sheet_side: usize,
    pub split: u16,
    pub click_count: u32,
    pub pager: Pager,
    pub table: TableView,
    loading: ReversionTimer,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            slider: 50,
            progress: 60,
            tab: 0,
            formatting: Formatting::default(),
            align: TextAlign::default(),
            checkbox: false,
            switch: false,
            radio: 0,
            select: 0,
            carousel: 0,
            combobox: None,
            collapsible_open: false,
            accordion_open: Some(0),
            sidebar_open: true,
            sheet_side: 0,
            split: 50,
            click_count: 0,
            pager: Pager::new(DEMO_PAGES),
            table: TableView::new(),
            loading: ReversionTimer::new(),
        }
    }
}

fn step_index(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

impl WidgetState {
    pub fn is_loading(&self) -> bool {
        self.loading.is_armed()
    }

    /// Apply `action` to the widget shown by `preview`
    pub fn apply(&mut self, preview: Preview, action: WidgetAction, now: Instant) -> Effect {
        use WidgetAction::*;

        match (preview, action) {
            (Preview::Slider, Increase) => {
                self.slider = self.slider.saturating_add(SLIDER_STEP).min(100);
            }
            (Preview::Slider, Decrease) => {
                self.slider = self.slider.saturating_sub(SLIDER_STEP);
            }
            (Preview::Progress, Increase) => {
                self.progress = self.progress.saturating_add(10).min(100);
            }
            (Preview::Progress, Decrease) => {
                self.progress = self.progress.saturating_sub(10);
            }
            (Preview::Tabs, Increase) => self.tab = step_index(self.tab, TAB_LABELS.len(), true),
            (Preview::Tabs, Decrease) => self.tab = step_index(self.tab, TAB_LABELS.len(), false),
            (Preview::Carousel, Increase) => {
                self.carousel = step_index(self.carousel, CAROUSEL_SLIDES, true)
            }
            (Preview::Carousel, Decrease) => {
                self.carousel = step_index(self.carousel, CAROUSEL_SLIDES, false)
            }
            (Preview::Pagination, Increase) => {
                self.pager.next();
            }
            (Preview::Pagination, Decrease) => {
                self.pager.prev();
            }
            (Preview::Checkbox, Activate) => self.checkbox = !self.checkbox,
            (Preview::Switch, Activate) => self.switch = !self.switch,
            (Preview::Radio, Increase | Activate) => {
                self.radio = step_index(self.radio, RADIO_OPTIONS.len(), true)
            }
            (Preview::Radio, Decrease) => {
                self.radio = step_index(self.radio, RADIO_OPTIONS.len(), false)
            }
            (Preview::Select, Increase | Activate) => {
                self.select = step_index(self.select, SELECT_OPTIONS.len(), true)
            }
            (Preview::Select, Decrease) => {
                self.select = step_index(self.select, SELECT_OPTIONS.len(), false)
            }
            (Preview::Combobox, Increase) => {
                self.combobox = Some(self.combobox.map_or(0, |i| {
                    step_index(i, COMBOBOX_OPTIONS.len(), true)
                }));
            }
            (Preview::Combobox, Decrease) => {
                self.combobox = Some(self.combobox.map_or(COMBOBOX_OPTIONS.len() - 1, |i| {
                    step_index(i, COMBOBOX_OPTIONS.len(), false)
                }));
            }
            (Preview::Combobox, Activate) => self.combobox = None,
            (Preview::Toggle, Increase) => self.formatting.focus = (self.formatting.focus + 1) % 3,
            (Preview::Toggle, Decrease) => self.formatting.focus = (self.formatting.focus + 2) % 3,
            (Preview::Toggle, Activate) => self.formatting.flip_focused(),
            (Preview::ToggleGroup, Increase | Activate) => self.align = self.align.next(),
            (Preview::ToggleGroup, Decrease) => self.align = self.align.prev(),
            (Preview::Resizable, Increase) => self.split = (self.split + 10).min(80),
            (Preview::Resizable, Decrease) => self.split = self.split.saturating_sub(10).max(20),
            (Preview::Collapsible, Activate) => self.collapsible_open = !self.collapsible_open,
            (Preview::Accordion, Increase) => {
                let next = self
                    .accordion_open
                    .map_or(0, |i| step_index(i, ACCORDION_ITEMS.len(), true));
                self.accordion_open = Some(next);
            }
            (Preview::Accordion, Decrease) => {
                let prev = self.accordion_open.map_or(ACCORDION_ITEMS.len() - 1, |i| {
                    step_index(i, ACCORDION_ITEMS.len(), false)
                });
                self.accordion_open = Some(prev);
            }
            (Preview::Accordion, Activate) => {
                self.accordion_open = match self.accordion_open {
                    Some(_) => None,
                    None => Some(0),
                };
            }
            (Preview::SidebarNav, Activate) => self.sidebar_open = !self.sidebar_open,
            (Preview::ButtonStates, Activate) => {
                if !self.loading.is_armed() {
                    self.loading.arm(now, LOADING_DELAY);
                    tracing::debug!("loading button armed");
                }
            }
            (Preview::ButtonEvents, Activate) => {
                self.click_count += 1;
                return Effect::Toast(format!("Button clicked {} times", self.click_count));
            }
            (Preview::Dialog, Activate) => {
                return Effect::OpenDialog {
                    title: "Dialog Title".to_string(),
                    body: "This is a demo dialog. You can place forms, text, or buttons here."
                        .to_string(),
                };
            }
            (Preview::AlertDialog, Activate) => {
                return Effect::OpenDialog {
                    title: "Are you sure?".to_string(),
                    body: "This action cannot be undone.".to_string(),
                };
            }
            (Preview::Sheet, Increase) => {
                self.sheet_side = step_index(self.sheet_side, SHEET_SIDES.len(), true)
            }
            (Preview::Sheet, Decrease) => {
                self.sheet_side = step_index(self.sheet_side, SHEET_SIDES.len(), false)
            }
            (Preview::Sheet, Activate) => {
                let side = SHEET_SIDES[self.sheet_side % SHEET_SIDES.len()];
                return Effect::OpenDialog {
                    title: format!("{} Sheet", side),
                    body: format!(
                        "This sheet opens from {} and can contain collapsibles or accordions.",
                        side.to_lowercase()
                    ),
                };
            }
            (Preview::Toast, Activate) => {
                return Effect::Toast("This is a success toast!".to_string());
            }
            _ => {}
        }
        Effect::None
    }

    /// Advance widget timers. Returns true if the view should redraw.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.loading.fire_if_due(now)
    }

    pub fn cancel_timers(&mut self) {
        self.loading.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (WidgetState, Instant) {
        (WidgetState::default(), Instant::now())
    }

    #[test]
    fn slider_steps_by_five_within_bounds() {
        let (mut w, now) = state();
        w.apply(Preview::Slider, WidgetAction::Increase, now);
        assert_eq!(w.slider, 55);

        for _ in 0..20 {
            w.apply(Preview::Slider, WidgetAction::Increase, now);
        }
        assert_eq!(w.slider, 100);

        for _ in 0..30 {
            w.apply(Preview::Slider, WidgetAction::Decrease, now);
        }
        assert_eq!(w.slider, 0);
    }

    #[test]
    fn pagination_saturates() {
        let (mut w, now) = state();
        w.apply(Preview::Pagination, WidgetAction::Decrease, now);
        assert_eq!(w.pager.current(), 1);
        for _ in 0..15 {
            w.apply(Preview::Pagination, WidgetAction::Increase, now);
        }
        assert_eq!(w.pager.current(), DEMO_PAGES);
        assert_eq!(w.pager.window(), vec![8, 9, 10]);
    }

    #[test]
    fn loading_button_clears_after_two_seconds() {
        let (mut w, t0) = state();
        w.apply(Preview::ButtonStates, WidgetAction::Activate, t0);
        assert!(w.is_loading());

        // Pressing again while loading does not extend it
        w.apply(
            Preview::ButtonStates,
            WidgetAction::Activate,
            t0 + Duration::from_millis(1500),
        );

        assert!(!w.tick(t0 + Duration::from_millis(1999)));
        assert!(w.tick(t0 + LOADING_DELAY));
        assert!(!w.is_loading());
    }

    #[test]
    fn cancel_timers_stops_loading() {
        let (mut w, t0) = state();
        w.apply(Preview::ButtonStates, WidgetAction::Activate, t0);
        w.cancel_timers();
        assert!(!w.is_loading());
        assert!(!w.tick(t0 + LOADING_DELAY));
    }

    #[test]
    fn toggle_formatting_flips_focused_button() {
        let (mut w, now) = state();
        w.apply(Preview::Toggle, WidgetAction::Activate, now);
        assert!(w.formatting.bold);
        w.apply(Preview::Toggle, WidgetAction::Increase, now);
        w.apply(Preview::Toggle, WidgetAction::Activate, now);
        assert!(w.formatting.italic);
        w.apply(Preview::Toggle, WidgetAction::Decrease, now);
        w.apply(Preview::Toggle, WidgetAction::Activate, now);
        assert!(!w.formatting.bold);
        assert!(!w.formatting.underline);
    }

    #[test]
    fn alignment_is_single_choice_and_wraps() {
        let (mut w, now) = state();
        assert_eq!(w.align, TextAlign::Left);
        w.apply(Preview::ToggleGroup, WidgetAction::Decrease, now);
        assert_eq!(w.align, TextAlign::Right);
        w.apply(Preview::ToggleGroup, WidgetAction::Increase, now);
        assert_eq!(w.align, TextAlign::Left);
    }

    #[test]
    fn event_button_counts_clicks() {
        let (mut w, now) = state();
        w.apply(Preview::ButtonEvents, WidgetAction::Activate, now);
        let effect = w.apply(Preview::ButtonEvents, WidgetAction::Activate, now);
        assert_eq!(effect, Effect::Toast("Button clicked 2 times".into()));
    }

    #[test]
    fn dialog_cards_open_dialogs() {
        let (mut w, now) = state();
        let effect = w.apply(Preview::AlertDialog, WidgetAction::Activate, now);
        assert!(matches!(effect, Effect::OpenDialog { ref title, .. } if title.contains("sure")));
    }

    #[test]
    fn unrelated_action_is_noop() {
        let (mut w, now) = state();
        let before = w.slider;
        assert_eq!(w.apply(Preview::Badges, WidgetAction::Activate, now), Effect::None);
        w.apply(Preview::Slider, WidgetAction::Activate, now);
        assert_eq!(w.slider, before);
    }

    #[test]
    fn sheet_opens_from_chosen_side() {
        let (mut w, now) = state();
        w.apply(Preview::Sheet, WidgetAction::Decrease, now);
        let effect = w.apply(Preview::Sheet, WidgetAction::Activate, now);
        assert_eq!(
            effect,
            Effect::OpenDialog {
                title: "Bottom Sheet".into(),
                body: "This sheet opens from bottom and can contain collapsibles or accordions."
                    .into(),
            }
        );
    }

    #[test]
    fn accordion_starts_on_first_section() {
        let (mut w, now) = state();
        assert_eq!(w.accordion_open, Some(0));
        w.apply(Preview::Accordion, WidgetAction::Activate, now);
        assert_eq!(w.accordion_open, None);
        w.apply(Preview::Accordion, WidgetAction::Increase, now);
        assert_eq!(w.accordion_open, Some(0));
    }

    #[test]
    fn combobox_starts_empty_then_cycles() {
        let (mut w, now) = state();
        assert_eq!(w.combobox, None);
        w.apply(Preview::Combobox, WidgetAction::Decrease, now);
        assert_eq!(w.combobox, Some(COMBOBOX_OPTIONS.len() - 1));
        w.apply(Preview::Combobox, WidgetAction::Increase, now);
        assert_eq!(w.combobox, Some(0));
        w.apply(Preview::Combobox, WidgetAction::Activate, now);
        assert_eq!(w.combobox, None);
    }
}
