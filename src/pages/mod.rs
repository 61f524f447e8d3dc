//! Demo pages
//!
//! A page is data: a title, the snippet registry that feeds its docs panel,
//! and the ordered example cards shown on the left. Interactive bits live in
//! [`PageState`], created when the page is entered and dropped on leave.

mod buttons;
mod data_display;
mod dialog;
mod form;
mod fragments;
mod sidebar;
pub mod widgets;

use crate::catalogue::{CatalogueSelector, CopyController, Lookup, PropDoc, SnippetRegistry};
use std::time::{Duration, Instant};
pub use data_display::CHART_DATA;
pub use fragments::BREADCRUMB_TRAIL;
pub use widgets::{Effect, Preview, WidgetAction, WidgetState};

/// Every page reachable from the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    Buttons,
    Dialog,
    Form,
    DataDisplay,
    Fragments,
    Sidebar,
}

impl PageId {
    /// Demo pages in home-grid order
    pub const DEMOS: [PageId; 6] = [
        PageId::Buttons,
        PageId::Dialog,
        PageId::Form,
        PageId::DataDisplay,
        PageId::Fragments,
        PageId::Sidebar,
    ];

    /// Build the page definition
    pub fn build(self) -> Page {
        match self {
            PageId::Home => Page::home(),
            PageId::Buttons => buttons::page(),
            PageId::Dialog => dialog::page(),
            PageId::Form => form::page(),
            PageId::DataDisplay => data_display::page(),
            PageId::Fragments => fragments::page(),
            PageId::Sidebar => sidebar::page(),
        }
    }
}

/// One clickable example on the left pane
#[derive(Debug, Clone)]
pub struct ExampleCard {
    /// Identifier selected when the card is highlighted
    pub id: &'static str,
    pub title: &'static str,
    pub blurb: &'static str,
    pub preview: Preview,
}

impl ExampleCard {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        blurb: &'static str,
        preview: Preview,
    ) -> Self {
        Self {
            id,
            title,
            blurb,
            preview,
        }
    }
}

/// Static definition of a page
#[derive(Debug, Clone)]
pub struct Page {
    pub id: PageId,
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Heading of the docs panel ("Button Props", "Component Props")
    pub panel_title: &'static str,
    pub default_selection: &'static str,
    pub registry: SnippetRegistry,
    pub cards: Vec<ExampleCard>,
}

impl Page {
    fn home() -> Self {
        Self {
            id: PageId::Home,
            title: "Widget Showcase",
            subtitle: "Interactive demos of the installed widgets",
            panel_title: "",
            default_selection: "",
            registry: SnippetRegistry::default(),
            cards: Vec::new(),
        }
    }

    pub fn is_home(&self) -> bool {
        self.id == PageId::Home
    }

    pub fn card(&self, index: usize) -> Option<&ExampleCard> {
        self.cards.get(index)
    }
}

/// Per-visit state of a page
///
/// Owned by the app while the page is shown. `leave` must be called before
/// it's dropped so no reversion timer outlives the view.
#[derive(Debug)]
pub struct PageState {
    pub selector: CatalogueSelector,
    pub copy: CopyController,
    pub widgets: WidgetState,
    /// Highlighted card on the left pane
    pub cursor: usize,
}

impl PageState {
    pub fn new(page: &Page, copy_feedback: Duration) -> Self {
        let cursor = page
            .cards
            .iter()
            .position(|c| c.id == page.default_selection)
            .unwrap_or(0);
        Self {
            selector: CatalogueSelector::new(page.default_selection),
            copy: CopyController::new(copy_feedback),
            widgets: WidgetState::default(),
            cursor,
        }
    }

    pub fn selected(&self) -> &str {
        self.selector.current()
    }

    /// Snippet lookup for the current selection
    pub fn lookup(&self, page: &Page) -> Lookup<'static> {
        self.selector.resolve(&page.registry)
    }

    pub fn props(&self, page: &Page) -> &'static [PropDoc] {
        page.registry.props(self.selector.current())
    }

    /// Move the card highlight and select the card's identifier
    pub fn move_cursor(&mut self, page: &Page, delta: isize) {
        if page.cards.is_empty() {
            return;
        }
        let last = page.cards.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.selector.select(page.cards[self.cursor].id);
    }

    /// Apply a widget action to the highlighted card
    pub fn act(&mut self, page: &Page, action: WidgetAction, now: Instant) -> Effect {
        let Some(card) = page.card(self.cursor) else {
            return Effect::None;
        };
        // Interacting with a card also selects it
        self.selector.select(card.id);
        self.widgets.apply(card.preview, action, now)
    }

    /// Advance timers. Returns true if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let copy = self.copy.poll(now);
        let widgets = self.widgets.tick(now);
        copy || widgets
    }

    /// Cancel pending timers before the page goes away
    pub fn leave(&mut self) {
        self.copy.cancel();
        self.widgets.cancel_timers();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::NO_EXAMPLE;

    #[test]
    fn every_demo_default_is_in_its_registry() {
        for id in PageId::DEMOS {
            let page = id.build();
            assert!(
                page.registry.contains(page.default_selection),
                "{:?} default {:?} missing from registry",
                id,
                page.default_selection
            );
            assert!(!page.cards.is_empty(), "{:?} has no cards", id);
        }
    }

    #[test]
    fn card_ids_are_unique_per_page() {
        for id in PageId::DEMOS {
            let page = id.build();
            let mut ids: Vec<_> = page.cards.iter().map(|c| c.id).collect();
            ids.sort_unstable();
            let before = ids.len();
            ids.dedup();
            assert_eq!(before, ids.len(), "{:?} has duplicate card ids", id);
        }
    }

    #[test]
    fn state_starts_on_default_card() {
        let page = PageId::Buttons.build();
        let state = PageState::new(&page, Duration::from_secs(2));
        assert_eq!(state.selected(), "variants");
        assert_eq!(page.cards[state.cursor].id, "variants");
        assert!(state.lookup(&page).is_found());
    }

    #[test]
    fn cursor_moves_select_and_saturate() {
        let page = PageId::Buttons.build();
        let mut state = PageState::new(&page, Duration::from_secs(2));
        state.move_cursor(&page, -1);
        assert_eq!(state.cursor, 0);
        state.move_cursor(&page, 1);
        assert_eq!(state.selected(), page.cards[1].id);
        state.move_cursor(&page, 100);
        assert_eq!(state.cursor, page.cards.len() - 1);
    }

    #[test]
    fn card_outside_registry_degrades_to_placeholder() {
        let page = PageId::Dialog.build();
        let mut state = PageState::new(&page, Duration::from_secs(2));
        let tooltip = page
            .cards
            .iter()
            .position(|c| c.id == "Tooltip")
            .expect("dialog page has a tooltip card");
        state.move_cursor(&page, tooltip as isize - state.cursor as isize);

        assert_eq!(state.selected(), "Tooltip");
        assert_eq!(state.lookup(&page).text(), NO_EXAMPLE);
        assert!(state.props(&page).is_empty());
    }

    #[test]
    fn leave_cancels_copy_window() {
        use crate::catalogue::copy::tests::FakeClipboard;

        let page = PageId::Fragments.build();
        let mut state = PageState::new(&page, Duration::from_secs(2));
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let text = state.lookup(&page).text();
        state.copy.copy(text, &mut clip, t0);
        assert!(state.copy.is_copied());

        state.leave();
        assert!(!state.copy.is_copied());
        assert!(!state.tick(t0 + Duration::from_secs(3)));
    }
}
