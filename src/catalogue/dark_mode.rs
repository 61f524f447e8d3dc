//! Dark-mode flag
//!
//! One shared boolean cell. The app owns a handle and injects clones where
//! the palette is needed, so there is no global to mutate behind anyone's
//! back. Starts light unless told otherwise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct DarkMode {
    cell: Arc<AtomicBool>,
}

impl DarkMode {
    pub fn new(dark: bool) -> Self {
        Self {
            cell: Arc::new(AtomicBool::new(dark)),
        }
    }

    pub fn is_dark(&self) -> bool {
        self.cell.load(Ordering::Relaxed)
    }

    /// Flip the flag and return the new value
    pub fn toggle(&self) -> bool {
        let next = !self.cell.fetch_xor(true, Ordering::Relaxed);
        tracing::debug!(dark = next, "dark mode toggled");
        next
    }

    /// Label for the toggle button: shows the mode you'd switch *to*
    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark() {
            "☀ Light"
        } else {
            "☾ Dark"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light() {
        assert!(!DarkMode::default().is_dark());
        assert!(!DarkMode::new(false).is_dark());
    }

    #[test]
    fn toggle_returns_new_value() {
        let mode = DarkMode::default();
        assert!(mode.toggle());
        assert!(mode.is_dark());
        assert!(!mode.toggle());
        assert!(!mode.is_dark());
    }

    #[test]
    fn clones_share_the_cell() {
        let mode = DarkMode::default();
        let view = mode.clone();
        mode.toggle();
        assert!(view.is_dark());
        view.toggle();
        assert!(!mode.is_dark());
    }

    #[test]
    fn label_names_the_other_mode() {
        let mode = DarkMode::new(true);
        assert_eq!(mode.toggle_label(), "☀ Light");
        mode.toggle();
        assert_eq!(mode.toggle_label(), "☾ Dark");
    }
}
