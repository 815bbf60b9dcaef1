use crossterm::event::{KeyCode, KeyEvent};

use super::is_calendar_key;
use crate::ui::App;

/// Rows moved by PageUp / PageDown
const PAGE: i32 = 10;

/// Keys while the date picker is open. Every way out confirms.
pub(super) fn handle_picker_key(app: &mut App, key: KeyEvent) {
    if is_calendar_key(&key) {
        app.toggle_date_picker();
        return;
    }

    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.confirm_date_picker();
        return;
    }

    let Some(picker) = app.date_picker.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left | KeyCode::BackTab => picker.focus_prev_column(),
        KeyCode::Right | KeyCode::Tab => picker.focus_next_column(),
        KeyCode::Up | KeyCode::Char('k') => picker.scroll(-1),
        KeyCode::Down | KeyCode::Char('j') => picker.scroll(1),
        KeyCode::PageUp => picker.scroll(-PAGE),
        KeyCode::PageDown => picker.scroll(PAGE),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::input::handle_key;
    use crate::input::test_support::key;
    use crate::ui::App;
    use chrono::NaiveDate;
    use crossterm::event::KeyCode;
    use nurse_core::{FormConfig, PickerColumn};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    fn open_app() -> App {
        let mut app = App::with_clock(&FormConfig::default(), today);
        app.open_date_picker();
        app
    }

    #[test]
    fn esc_confirms_instead_of_cancelling() {
        let mut app = open_app();
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.is_date_picker_open());
        assert_eq!(app.record.display_date(), "2023/10/15");
    }

    #[test]
    fn wheel_navigation_commits_on_enter() {
        let mut app = open_app();
        handle_key(&mut app, key(KeyCode::Right));
        assert_eq!(app.date_picker.as_ref().unwrap().column, PickerColumn::Month);
        handle_key(&mut app, key(KeyCode::Up));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::PageUp));
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.record.display_date(), "2024/09/05");
    }

    #[test]
    fn scrolling_down_from_max_stays_before_today() {
        let mut app = open_app();
        for column in [KeyCode::Down, KeyCode::Right, KeyCode::Down, KeyCode::Right, KeyCode::Down] {
            handle_key(&mut app, key(column));
        }
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert_eq!(app.record.display_date(), "2024/10/15");
    }

    #[test]
    fn typing_while_open_does_not_edit_fields() {
        let mut app = open_app();
        handle_key(&mut app, key(KeyCode::Char('1')));
        assert!(app.is_date_picker_open());
        assert_eq!(app.record.vitals.blood_pressure, "");
    }
}
