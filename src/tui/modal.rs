// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    /// Show older log entries
    ScrollUp,
    /// Show newer log entries
    ScrollDown,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Keyboard shortcuts and current navigation state
    Help,
    /// Recent log entries; `offset` counts entries skipped from the newest
    Logs { offset: usize },
}

impl Modal {
    pub fn help() -> Self {
        Modal::Help
    }

    pub fn logs() -> Self {
        Modal::Logs { offset: 0 }
    }

    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&mut self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::Logs { .. } => match key {
                KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                _ => ModalAction::None,
            },
        }
    }

    /// Apply a scroll action against `available` log entries
    pub fn scroll(&mut self, action: &ModalAction, available: usize) {
        let Modal::Logs { offset } = self else {
            return;
        };
        match action {
            ModalAction::ScrollUp => *offset = (*offset + 1).min(available.saturating_sub(1)),
            ModalAction::ScrollDown => *offset = offset.saturating_sub(1),
            _ => {}
        }
    }
}
