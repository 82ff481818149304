// Input routing
//
// Layered dispatch: Modal → Global → Page. Only key presses act; release and
// repeat events are dropped so a held key does not double-fire on terminals
// that report both.

use super::app::App;
use super::modal::{Modal, ModalAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Rows moved per wheel notch
const WHEEL_ROWS: i32 = 3;

/// Handle keyboard input
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, key_event.code) {
        return;
    }

    // Layer 2: Global keys
    if handle_global_keys(app, key_event.code) {
        return;
    }

    // Layer 3: Page keys
    handle_page_keys(app, key_event.code);
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key: KeyCode) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    match modal.handle_input(key) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        action @ (ModalAction::ScrollUp | ModalAction::ScrollDown) => {
            modal.scroll(&action, app.log_buffer.len());
        }
    }
    true
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::help()),
        KeyCode::Char('l') => app.modal = Some(Modal::logs()),
        KeyCode::Char('r') => {
            let message = match &app.portfolio.owner.resume_url {
                Some(url) => format!("Resume: {}", url),
                None => "No resume link configured".to_string(),
            };
            app.show_toast(message);
        }
        _ => return false,
    }
    true
}

fn handle_page_keys(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_rows(1);
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_rows(-1);
        }
        KeyCode::PageDown | KeyCode::Char(' ') => {
            app.scroll_pages(1);
        }
        KeyCode::PageUp => {
            app.scroll_pages(-1);
        }
        KeyCode::Home | KeyCode::Char('g') => app.jump_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.jump_to_end(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            app.activate_item(index);
        }
        KeyCode::Char('m') => {
            app.toggle_menu();
        }
        KeyCode::Esc => app.close_menu(),
        KeyCode::Char('p') => {
            app.scroll_to_cta("projects");
        }
        KeyCode::Char('c') => {
            app.scroll_to_cta("contact");
        }
        _ => {}
    }
}

/// Handle mouse input
pub fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_rows(-WHEEL_ROWS);
        }
        MouseEventKind::ScrollDown => {
            app.scroll_rows(WHEEL_ROWS);
        }
        MouseEventKind::Down(MouseButton::Left) => app.click(mouse_event.column, mouse_event.row),
        _ => {}
    }
}
