// Modal overlays
//
// Self-contained dialogs that handle their own input and return actions.
// App just holds Option<Modal>; input routing acts on the returned ModalAction.

use crossterm::event::KeyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, nothing to do
    None,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Keyboard shortcuts
    Help,
    /// A demo dialog opened from a preview (dialog, alert dialog, sheet)
    Dialog { title: String, body: String },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn dialog(title: impl Into<String>, body: impl Into<String>) -> Self {
        Modal::Dialog {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Dialog { .. } => match key {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('q') => {
                    ModalAction::Close
                }
                _ => ModalAction::None,
            },
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Modal::Help => " Keyboard Shortcuts ",
            Modal::Dialog { title, .. } => title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_closes_on_its_own_key() {
        let modal = Modal::help();
        assert_eq!(modal.handle_input(KeyCode::Char('?')), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::None);
    }

    #[test]
    fn dialog_closes_on_confirm_or_escape() {
        let modal = Modal::dialog("Are you sure?", "This action cannot be undone.");
        assert_eq!(modal.handle_input(KeyCode::Enter), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Esc), ModalAction::Close);
        assert_eq!(modal.handle_input(KeyCode::Char('x')), ModalAction::None);
        assert_eq!(modal.title(), "Are you sure?");
    }
}
