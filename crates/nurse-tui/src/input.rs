mod form_handlers;
mod picker_handlers;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::App;

/// Ctrl+D or F2: the calendar button
pub(crate) fn is_calendar_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::F(2))
        || (key.code == KeyCode::Char('d') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Route a key press to the date picker when it is open, otherwise to the form
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if app.is_date_picker_open() {
        picker_handlers::handle_picker_key(app, key);
    } else {
        form_handlers::handle_form_key(app, key);
    }
}
