// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Key dispatch to the app state
// - Rendering the UI

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod layout;
pub mod modal;
pub mod views;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::pages::WidgetAction;
use anyhow::{Context, Result};
use app::App;
use clipboard::SystemClipboard;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not the loop failed.
pub async fn run(config: Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer, Box::new(SystemClipboard));

    let result = run_event_loop(&mut terminal, &mut app, config.tick_rate()).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// `select!` wakes on whichever comes first: keyboard input or the tick.
/// Every tick feeds `Instant::now()` to the page timers (copy reversion,
/// loading button) and expires the toast.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(tick_rate);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event, Instant::now());
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Modal → Search box → Global → Page
fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) {
    let key = key_event.code;

    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    // Layer 1: modal captures all input when active
    if let Some(modal) = &app.modal {
        if modal.handle_input(key) == ModalAction::Close {
            app.modal = None;
        }
        return;
    }

    // Layer 2: the search box takes raw typing, no debounce
    if app.searching {
        app.search_input(key);
        return;
    }

    if !app.handle_key_press(key) {
        return;
    }

    // Layer 3: global keys
    if handle_global_keys(app, key, now) {
        return;
    }

    // Layer 4: page keys
    if app.page.is_home() {
        match key {
            KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
            // Grid is three wide on wide terminals; ←/→ step one card
            KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') => app.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.open_demo(app.home_cursor),
            _ => {}
        }
        return;
    }

    match key {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Tab => app.cycle_chip(true),
        KeyCode::BackTab => app.cycle_chip(false),
        KeyCode::Left | KeyCode::Char('h') => app.act(WidgetAction::Decrease, now),
        KeyCode::Right | KeyCode::Char('l') => app.act(WidgetAction::Increase, now),
        KeyCode::Char(' ') | KeyCode::Enter => app.act(WidgetAction::Activate, now),
        KeyCode::Char('y') => {
            app.copy_snippet(now);
        }
        KeyCode::Char('Y') => {
            app.copy_props(now);
        }
        KeyCode::Char('/') => app.start_search(now),
        KeyCode::Char('p') => app.toggle_pane(),
        _ => {}
    }
}

/// Handle global keys - returns true if handled
/// Global keys work the same on every route
fn handle_global_keys(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(modal::Modal::help()),
        KeyCode::Char('d') => {
            app.toggle_dark_mode();
            let mode = if app.dark_mode.is_dark() { "Dark" } else { "Light" };
            app.show_toast(format!("{} mode", mode), now);
        }
        KeyCode::Char('L') => app.show_logs = !app.show_logs,
        KeyCode::Char('g') | KeyCode::Esc => app.go_home(),
        KeyCode::Char(c @ '1'..='6') => {
            // '1' -> first demo
            app.open_demo(c as usize - '1' as usize);
        }
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::copy::tests::FakeClipboard;
    use crate::catalogue::CopyState;
    use crate::pages::PageId;
    use crossterm::event::KeyModifiers;

    fn app_at(route: &str) -> App {
        let config = Config {
            start_route: route.to_string(),
            ..Config::default()
        };
        App::new(&config, LogBuffer::new(), Box::new(FakeClipboard::default()))
    }

    /// Press and release, so the debounce never swallows the next press
    fn tap(app: &mut App, code: KeyCode, now: Instant) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE), now);
        let mut release = KeyEvent::new(code, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        handle_key_event(app, release, now);
    }

    #[test]
    fn number_keys_jump_to_demos() {
        let mut app = app_at("/");
        let now = Instant::now();

        tap(&mut app, KeyCode::Char('4'), now);
        assert_eq!(app.page.id, PageId::DataDisplay);

        tap(&mut app, KeyCode::Esc, now);
        assert_eq!(app.page.id, PageId::Home);
        assert_eq!(app.home_cursor, 3);

        tap(&mut app, KeyCode::Enter, now);
        assert_eq!(app.page.id, PageId::DataDisplay);
    }

    #[test]
    fn y_copies_and_navigation_cancels() {
        let mut app = app_at("/demo/buttons");
        let now = Instant::now();

        tap(&mut app, KeyCode::Char('y'), now);
        assert_eq!(app.state.copy.state(), CopyState::Copied);

        tap(&mut app, KeyCode::Char('g'), now);
        assert_eq!(app.page.id, PageId::Home);
    }

    #[test]
    fn arrows_move_cards_and_drive_widgets() {
        let mut app = app_at("/demo/data-display");
        let now = Instant::now();
        let slider = app
            .page
            .cards
            .iter()
            .position(|c| c.id == "slider")
            .expect("slider card");

        // Back to the top card first, then down to the slider
        for _ in 0..app.page.cards.len() {
            tap(&mut app, KeyCode::Up, now);
        }
        for _ in 0..slider {
            tap(&mut app, KeyCode::Down, now);
        }
        assert_eq!(app.state.selected(), "slider");

        tap(&mut app, KeyCode::Right, now);
        assert_eq!(app.state.widgets.slider, 55);
        tap(&mut app, KeyCode::Left, now);
        tap(&mut app, KeyCode::Left, now);
        assert_eq!(app.state.widgets.slider, 45);
    }

    #[test]
    fn tab_cycles_docs_without_moving_cards() {
        let mut app = app_at("/demo/buttons");
        let now = Instant::now();

        tap(&mut app, KeyCode::Tab, now);
        assert_eq!(app.state.selected(), "sizes");
        assert_eq!(app.state.cursor, 0);

        tap(&mut app, KeyCode::BackTab, now);
        tap(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.state.selected(), "events");
    }

    #[test]
    fn modal_swallows_keys_until_closed() {
        let mut app = app_at("/demo/dialog");
        let now = Instant::now();

        tap(&mut app, KeyCode::Char(' '), now);
        assert!(app.modal.is_some());

        tap(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);
        assert!(app.modal.is_none());

        tap(&mut app, KeyCode::Char('q'), now);
        assert!(app.should_quit);
    }

    #[test]
    fn search_mode_takes_repeated_letters() {
        let mut app = app_at("/demo/fragments");
        let now = Instant::now();

        tap(&mut app, KeyCode::Char('/'), now);
        assert!(app.searching);

        // No release events in between: typing must not be debounced
        for c in "jj".chars() {
            handle_key_event(&mut app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
        }
        assert_eq!(app.state.widgets.table.query(), "jj");

        // Global keys are plain text while searching
        tap(&mut app, KeyCode::Char('q'), now);
        assert!(!app.should_quit);

        tap(&mut app, KeyCode::Enter, now);
        assert!(!app.searching);
    }

    #[test]
    fn dark_mode_key_toggles_palette() {
        let mut app = app_at("/");
        tap(&mut app, KeyCode::Char('d'), Instant::now());
        assert!(app.dark_mode.is_dark());
        assert_eq!(app.theme.name, "dark");
    }
}
