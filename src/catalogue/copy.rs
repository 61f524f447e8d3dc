//! Clipboard copy controller - the "Copy Code" → "✓ Copied!" indicator
//!
//! Two states: `Idle` and `Copied`. A successful copy enters `Copied` and arms
//! a reversion timer; the timer firing returns to `Idle`. Copying again while
//! `Copied` replaces the pending deadline, so the window restarts instead of
//! stacking or firing early.
//!
//! Time is always passed in. The TUI feeds `Instant::now()` on every tick,
//! tests feed synthetic instants.

use anyhow::Result;
use std::time::{Duration, Instant};

/// How long the "copied" indicator stays up after a copy
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Destination for copied text
///
/// The system clipboard implements this in `tui::clipboard`; tests use a fake.
pub trait ClipboardSink {
    /// Write text to the clipboard. An error means nothing was copied.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// Cancellable one-shot deadline
///
/// `arm` while armed supersedes the earlier deadline. `fire_if_due` consumes
/// the deadline, so a timer fires at most once per arm.
#[derive(Debug, Clone, Default)]
pub struct ReversionTimer {
    deadline: Option<Instant>,
}

impl ReversionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer `delay` after `now`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once when `now` reaches the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Copy-feedback state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyState {
    #[default]
    Idle,
    Copied,
}

/// Result of a copy attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text reached the clipboard
    Copied { bytes: usize },
    /// Clipboard rejected the write; state was left alone
    Failed(String),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }

    /// Message for the toast overlay
    pub fn toast_message(&self) -> String {
        match self {
            Self::Copied { bytes: 0 } => "✓ Copied (no example for this selection)".to_string(),
            Self::Copied { .. } => "✓ Copied to clipboard".to_string(),
            Self::Failed(reason) => format!("✗ Failed to copy: {}", reason),
        }
    }
}

/// Idle/Copied state machine backing the copy button
#[derive(Debug, Clone)]
pub struct CopyController {
    state: CopyState,
    timer: ReversionTimer,
    delay: Duration,
}

impl Default for CopyController {
    fn default() -> Self {
        Self::new(COPY_FEEDBACK)
    }
}

impl CopyController {
    pub fn new(delay: Duration) -> Self {
        Self {
            state: CopyState::Idle,
            timer: ReversionTimer::new(),
            delay,
        }
    }

    pub fn state(&self) -> CopyState {
        self.state
    }

    pub fn is_copied(&self) -> bool {
        self.state == CopyState::Copied
    }

    /// Write `text` to the clipboard and enter `Copied` on success
    ///
    /// The clipboard result is observed before any transition. On failure the
    /// state and any pending reversion are untouched.
    pub fn copy(&mut self, text: &str, sink: &mut dyn ClipboardSink, now: Instant) -> CopyOutcome {
        match sink.write_text(text) {
            Ok(()) => {
                self.state = CopyState::Copied;
                self.timer.arm(now, self.delay);
                CopyOutcome::Copied { bytes: text.len() }
            }
            Err(e) => {
                tracing::warn!("Clipboard write failed: {:#}", e);
                CopyOutcome::Failed(e.to_string())
            }
        }
    }

    /// Advance time. Returns true if the indicator reverted on this call.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.state = CopyState::Idle;
            return true;
        }
        false
    }

    /// Cancel the pending reversion (page is going away)
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.state = CopyState::Idle;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use anyhow::bail;

    /// In-memory clipboard that can be told to reject writes
    #[derive(Default)]
    pub(crate) struct FakeClipboard {
        pub contents: Option<String>,
        pub reject: bool,
        pub writes: usize,
    }

    impl ClipboardSink for FakeClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            self.writes += 1;
            if self.reject {
                bail!("permission denied");
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_copy_enters_copied_immediately() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();

        let outcome = ctl.copy("<Button />", &mut clip, t0);

        assert_eq!(outcome, CopyOutcome::Copied { bytes: 10 });
        assert_eq!(ctl.state(), CopyState::Copied);
        assert_eq!(clip.contents.as_deref(), Some("<Button />"));
    }

    #[test]
    fn test_reverts_after_exactly_two_seconds() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();
        ctl.copy("x", &mut clip, t0);

        assert!(!ctl.poll(t0 + ms(1999)));
        assert!(ctl.is_copied());

        assert!(ctl.poll(t0 + ms(2000)));
        assert_eq!(ctl.state(), CopyState::Idle);

        // Fires once only
        assert!(!ctl.poll(t0 + ms(5000)));
    }

    #[test]
    fn test_second_copy_restarts_window() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();

        ctl.copy("first", &mut clip, t0);
        ctl.copy("second", &mut clip, t0 + ms(1000));

        // The first deadline would have been t0+2000
        assert!(!ctl.poll(t0 + ms(2000)));
        assert!(ctl.is_copied());
        assert!(!ctl.poll(t0 + ms(2999)));
        assert!(ctl.poll(t0 + ms(3000)));
        assert_eq!(ctl.state(), CopyState::Idle);
        assert_eq!(clip.contents.as_deref(), Some("second"));
    }

    #[test]
    fn test_rejected_write_stays_idle() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard {
            reject: true,
            ..Default::default()
        };
        let mut ctl = CopyController::default();

        let outcome = ctl.copy("x", &mut clip, t0);

        assert!(!outcome.is_copied());
        assert_eq!(ctl.state(), CopyState::Idle);
        assert!(!ctl.poll(t0 + ms(5000)));
        assert!(outcome.toast_message().contains("permission denied"));
    }

    #[test]
    fn test_rejected_write_keeps_existing_window() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();
        ctl.copy("ok", &mut clip, t0);

        clip.reject = true;
        ctl.copy("nope", &mut clip, t0 + ms(1500));

        // Original window still applies, not restarted by the failed attempt
        assert!(ctl.poll(t0 + ms(2000)));
        assert_eq!(clip.contents.as_deref(), Some("ok"));
    }

    #[test]
    fn test_cancel_prevents_reversion_callback() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();
        ctl.copy("x", &mut clip, t0);

        ctl.cancel();

        assert_eq!(ctl.state(), CopyState::Idle);
        assert!(!ctl.poll(t0 + ms(2000)));
    }

    #[test]
    fn test_timer_rearm_supersedes_deadline() {
        let t0 = Instant::now();
        let mut timer = ReversionTimer::new();
        timer.arm(t0, ms(100));
        timer.arm(t0 + ms(50), ms(100));

        assert!(timer.is_armed());
        assert!(!timer.fire_if_due(t0 + ms(100)));
        assert!(timer.fire_if_due(t0 + ms(150)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_custom_delay() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::new(ms(500));
        ctl.copy("x", &mut clip, t0);
        assert!(!ctl.poll(t0 + ms(499)));
        assert!(ctl.poll(t0 + ms(500)));
    }

    #[test]
    fn test_empty_copy_toast_mentions_missing_example() {
        let t0 = Instant::now();
        let mut clip = FakeClipboard::default();
        let mut ctl = CopyController::default();
        let outcome = ctl.copy("", &mut clip, t0);
        assert_eq!(outcome, CopyOutcome::Copied { bytes: 0 });
        assert!(ctl.is_copied());
        assert!(outcome.toast_message().contains("no example"));
        assert_eq!(
            CopyOutcome::Copied { bytes: 3 }.toast_message(),
            "✓ Copied to clipboard"
        );
    }
}
