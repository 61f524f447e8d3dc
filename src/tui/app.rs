// TUI application state
//
// Holds the current page and its per-visit state, plus the shell state that
// outlives navigation: dark mode, toast, modal, logs strip, pane toggle.
// Every method that depends on time takes `now` so tests stay deterministic.

use super::components::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use crate::catalogue::{ClipboardSink, CopyOutcome, DarkMode, Lookup, SAMPLE_RECORDS};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pages::{Effect, Page, PageId, PageState, Preview, WidgetAction};
use crate::router;
use crate::theme::Theme;
use anyhow::Context;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Which pane a narrow terminal shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    #[default]
    Cards,
    Docs,
}

impl Pane {
    /// Label of the button that switches away from this pane
    pub fn toggle_label(self) -> &'static str {
        match self {
            Pane::Cards => "Show Props",
            Pane::Docs => "Hide Props",
        }
    }
}

pub struct App {
    pub page: Page,
    pub state: PageState,
    pub dark_mode: DarkMode,
    pub theme: Theme,
    pub toast: Option<Toast>,
    pub modal: Option<Modal>,
    /// Narrow-terminal pane
    pub pane: Pane,
    pub show_logs: bool,
    /// Typing goes to the data table's search box
    pub searching: bool,
    /// Highlighted demo on the home grid
    pub home_cursor: usize,
    pub should_quit: bool,
    pub log_buffer: LogBuffer,
    pub start_time: Instant,
    copy_feedback: Duration,
    input_handler: InputHandler,
    clipboard: Box<dyn ClipboardSink>,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, clipboard: Box<dyn ClipboardSink>) -> Self {
        let now = Instant::now();
        let dark_mode = DarkMode::new(config.dark_mode);
        let copy_feedback = config.copy_feedback();

        let (start, toast) = match router::resolve(&config.start_route) {
            Some(page) => (page, None),
            None => {
                tracing::warn!(route = %config.start_route, "Unknown start route, showing home");
                let message = format!("Unknown route '{}'", config.start_route);
                (PageId::Home, Some(Toast::new(message, now)))
            }
        };

        let page = start.build();
        let state = PageState::new(&page, copy_feedback);

        Self {
            page,
            state,
            theme: Theme::for_mode(&dark_mode),
            dark_mode,
            toast,
            modal: None,
            pane: Pane::default(),
            show_logs: config.show_logs,
            searching: false,
            home_cursor: 0,
            should_quit: false,
            log_buffer,
            start_time: now,
            copy_feedback,
            input_handler: InputHandler::default(),
            clipboard,
        }
    }

    pub fn route(&self) -> &'static str {
        router::path_for(self.page.id)
    }

    /// Swap to another page. The leaving page's timers are cancelled first.
    pub fn navigate(&mut self, target: PageId) {
        if target == self.page.id {
            return;
        }
        self.state.leave();

        let from = self.route();
        self.page = target.build();
        self.state = PageState::new(&self.page, self.copy_feedback);
        self.pane = Pane::default();
        self.searching = false;
        if let Some(i) = PageId::DEMOS.iter().position(|&p| p == target) {
            self.home_cursor = i;
        }

        tracing::debug!(from, to = self.route(), "navigated");
    }

    pub fn go_home(&mut self) {
        self.navigate(PageId::Home);
    }

    /// Jump to the n-th demo (0-based, home-grid order)
    pub fn open_demo(&mut self, index: usize) {
        if let Some(&page) = PageId::DEMOS.get(index) {
            self.navigate(page);
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode.toggle();
        self.theme = Theme::for_mode(&self.dark_mode);
        tracing::info!(theme = self.theme.name, "theme changed");
    }

    pub fn toggle_pane(&mut self) {
        self.pane = match self.pane {
            Pane::Cards => Pane::Docs,
            Pane::Docs => Pane::Cards,
        };
    }

    pub fn show_toast(&mut self, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast::new(message, now));
    }

    /// ↑/↓ on the home grid or the card list
    pub fn move_selection(&mut self, delta: isize) {
        if self.page.is_home() {
            let last = PageId::DEMOS.len() - 1;
            self.home_cursor = self.home_cursor.saturating_add_signed(delta).min(last);
        } else {
            self.state.move_cursor(&self.page, delta);
            tracing::debug!(selected = self.state.selected(), "selection changed");
        }
    }

    /// Tab/BackTab through the docs chip row
    pub fn cycle_chip(&mut self, forward: bool) {
        if forward {
            self.state.selector.cycle_next(&self.page.registry);
        } else {
            self.state.selector.cycle_prev(&self.page.registry);
        }
        tracing::debug!(selected = self.state.selected(), "chip selected");
    }

    /// Drive the highlighted card's widget and carry out its effect
    pub fn act(&mut self, action: WidgetAction, now: Instant) {
        match self.state.act(&self.page, action, now) {
            Effect::None => {}
            Effect::Toast(message) => self.show_toast(message, now),
            Effect::OpenDialog { title, body } => self.modal = Some(Modal::dialog(title, body)),
        }
    }

    /// Copy the selected snippet and show the result
    ///
    /// A selection without a snippet copies an empty string; the placeholder
    /// is only ever rendered.
    pub fn copy_snippet(&mut self, now: Instant) -> Option<CopyOutcome> {
        if self.page.is_home() {
            return None;
        }
        let text = match self.state.lookup(&self.page) {
            Lookup::Found(text) => text,
            Lookup::Missing => "",
        };
        let outcome = self.state.copy.copy(text, self.clipboard.as_mut(), now);
        if let CopyOutcome::Copied { bytes } = outcome {
            tracing::debug!(id = self.state.selected(), bytes, "snippet copied");
        }
        self.show_toast(outcome.toast_message(), now);
        Some(outcome)
    }

    /// Copy the selected prop docs as pretty JSON
    pub fn copy_props(&mut self, now: Instant) -> Option<CopyOutcome> {
        if self.page.is_home() {
            return None;
        }
        let props = self.state.props(&self.page);
        let outcome = match serde_json::to_string_pretty(props)
            .context("Failed to serialize prop docs")
            .and_then(|json| {
                self.clipboard.write_text(&json)?;
                Ok(json.len())
            }) {
            Ok(bytes) => CopyOutcome::Copied { bytes },
            Err(e) => {
                tracing::warn!("Props copy failed: {:#}", e);
                CopyOutcome::Failed(e.to_string())
            }
        };
        self.show_toast(outcome.toast_message(), now);
        Some(outcome)
    }

    /// Index of the data-table card on this page, if it has one
    fn table_card(&self) -> Option<usize> {
        self.page
            .cards
            .iter()
            .position(|c| c.preview == Preview::DataTable)
    }

    /// `/` focuses the table search box, moving the highlight onto the table
    pub fn start_search(&mut self, now: Instant) {
        match self.table_card() {
            Some(index) => {
                let delta = index as isize - self.state.cursor as isize;
                self.state.move_cursor(&self.page, delta);
                self.searching = true;
            }
            None => self.show_toast("No searchable table on this page", now),
        }
    }

    pub fn search_input(&mut self, key: KeyCode) {
        let table = &mut self.state.widgets.table;
        match key {
            KeyCode::Enter => self.searching = false,
            // Esc cancels: drop the query too
            KeyCode::Esc => {
                table.clear();
                self.searching = false;
            }
            KeyCode::Backspace => table.pop_char(),
            KeyCode::Char(c) => table.push_char(c),
            _ => {}
        }
        tracing::trace!(
            query = table.query(),
            matches = table.visible(SAMPLE_RECORDS).len(),
            "table search"
        );
    }

    /// Advance timers and expire the toast
    pub fn tick(&mut self, now: Instant) {
        if self.state.tick(now) {
            tracing::trace!("page timers fired");
        }
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    /// Route entries for the home grid
    pub fn demo_routes(&self) -> impl Iterator<Item = &'static router::Route> {
        router::demos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::copy::tests::FakeClipboard;
    use crate::catalogue::{CopyState, NO_EXAMPLE};
    use anyhow::Result;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Shares a fake clipboard between the app and the test
    #[derive(Clone, Default)]
    struct SharedClipboard(Rc<RefCell<FakeClipboard>>);

    impl ClipboardSink for SharedClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.0.borrow_mut().write_text(text)
        }
    }

    fn app_at(route: &str) -> (App, SharedClipboard) {
        let config = Config {
            start_route: route.to_string(),
            ..Config::default()
        };
        let clip = SharedClipboard::default();
        let app = App::new(&config, LogBuffer::new(), Box::new(clip.clone()));
        (app, clip)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_on_configured_route() {
        let (app, _) = app_at("/demo/fragments");
        assert_eq!(app.page.id, PageId::Fragments);
        assert_eq!(app.state.selected(), "combobox");
        assert!(app.toast.is_none());
    }

    #[test]
    fn unknown_start_route_falls_back_home_with_toast() {
        let (app, _) = app_at("/demo/nope");
        assert_eq!(app.page.id, PageId::Home);
        let toast = app.toast.as_ref().expect("warning toast");
        assert!(toast.message.contains("/demo/nope"));
    }

    #[test]
    fn copy_snippet_writes_and_shows_copied() {
        let (mut app, clip) = app_at("/demo/buttons");
        let t0 = Instant::now();

        let outcome = app.copy_snippet(t0).expect("demo page");

        assert!(outcome.is_copied());
        assert_eq!(app.state.copy.state(), CopyState::Copied);
        let contents = clip.0.borrow().contents.clone().expect("written");
        assert!(contents.contains("<Button"));

        app.tick(t0 + ms(2000));
        assert_eq!(app.state.copy.state(), CopyState::Idle);
    }

    #[test]
    fn failed_copy_keeps_idle_and_toasts() {
        let (mut app, clip) = app_at("/demo/form");
        clip.0.borrow_mut().reject = true;

        let outcome = app.copy_snippet(Instant::now()).expect("demo page");

        assert!(!outcome.is_copied());
        assert_eq!(app.state.copy.state(), CopyState::Idle);
        let toast = app.toast.as_ref().expect("failure toast");
        assert!(toast.message.starts_with("✗"));
    }

    #[test]
    fn copying_a_missing_snippet_copies_empty_text() {
        let (mut app, clip) = app_at("/demo/dialog");
        let tooltip = app
            .page
            .cards
            .iter()
            .position(|c| c.id == "Tooltip")
            .expect("tooltip card");
        app.state.move_cursor(&app.page, tooltip as isize);

        let outcome = app.copy_snippet(Instant::now());

        assert_eq!(clip.0.borrow().contents.as_deref(), Some(""));
        assert_eq!(outcome, Some(CopyOutcome::Copied { bytes: 0 }));
        assert!(app.state.copy.is_copied());
        // The docs panel still shows the placeholder
        assert_eq!(app.state.lookup(&app.page).text(), NO_EXAMPLE);
    }

    #[test]
    fn copy_props_is_json() {
        let (mut app, clip) = app_at("/demo/sidebar");
        app.copy_props(Instant::now());

        let json = clip.0.borrow().contents.clone().expect("written");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert!(value.as_array().is_some_and(|a| !a.is_empty()));
        // Props copy doesn't drive the code button
        assert_eq!(app.state.copy.state(), CopyState::Idle);
    }

    #[test]
    fn navigation_cancels_pending_reversion() {
        let (mut app, clip) = app_at("/demo/buttons");
        let t0 = Instant::now();
        app.copy_snippet(t0);
        assert!(app.state.copy.is_copied());

        app.navigate(PageId::Form);

        assert_eq!(app.page.id, PageId::Form);
        assert_eq!(app.state.copy.state(), CopyState::Idle);
        assert!(!app.state.tick(t0 + ms(2000)));
        assert_eq!(clip.0.borrow().writes, 1);
    }

    #[test]
    fn home_copy_is_a_no_op() {
        let (mut app, clip) = app_at("/");
        assert!(app.copy_snippet(Instant::now()).is_none());
        assert_eq!(clip.0.borrow().writes, 0);
    }

    #[test]
    fn home_cursor_saturates_and_opens_demo() {
        let (mut app, _) = app_at("/");
        app.move_selection(-1);
        assert_eq!(app.home_cursor, 0);
        app.move_selection(10);
        assert_eq!(app.home_cursor, PageId::DEMOS.len() - 1);

        app.open_demo(app.home_cursor);
        assert_eq!(app.page.id, PageId::Sidebar);
        assert_eq!(app.route(), "/demo/sidebar");
    }

    #[test]
    fn dialog_effect_opens_modal() {
        let (mut app, _) = app_at("/demo/dialog");
        app.act(WidgetAction::Activate, Instant::now());
        assert_eq!(
            app.modal,
            Some(Modal::dialog(
                "Dialog Title",
                "This is a demo dialog. You can place forms, text, or buttons here."
            ))
        );
    }

    #[test]
    fn search_filters_the_data_table() {
        let (mut app, _) = app_at("/demo/fragments");
        app.start_search(Instant::now());
        assert!(app.searching);
        assert_eq!(
            app.page.card(app.state.cursor).map(|c| c.preview),
            Some(Preview::DataTable)
        );

        for c in "son".chars() {
            app.search_input(KeyCode::Char(c));
        }
        let names: Vec<_> = app
            .state
            .widgets
            .table
            .visible(SAMPLE_RECORDS)
            .iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, ["Bob Johnson", "Charlie Wilson"]);

        app.search_input(KeyCode::Esc);
        assert!(!app.searching);
        assert_eq!(app.state.widgets.table.query(), "");
    }

    #[test]
    fn search_without_table_only_toasts() {
        let (mut app, _) = app_at("/demo/buttons");
        app.start_search(Instant::now());
        assert!(!app.searching);
        assert!(app.toast.is_some());
    }

    #[test]
    fn dark_toggle_swaps_palette() {
        let (mut app, _) = app_at("/");
        assert_eq!(app.theme.name, "light");
        app.toggle_dark_mode();
        assert!(app.dark_mode.is_dark());
        assert_eq!(app.theme.name, "dark");
    }

    #[test]
    fn toast_expires_on_tick() {
        let (mut app, _) = app_at("/");
        let t0 = Instant::now();
        app.show_toast("hello", t0);
        app.tick(t0 + ms(1000));
        assert!(app.toast.is_some());
        app.tick(t0 + ms(2000));
        assert!(app.toast.is_none());
    }
}
