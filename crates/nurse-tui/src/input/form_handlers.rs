use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::is_calendar_key;
use crate::ui::App;

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    if is_calendar_key(&key) {
        app.toggle_date_picker();
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => app.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
        KeyCode::Left => app.move_cursor_left(),
        KeyCode::Right => app.move_cursor_right(),
        KeyCode::Home => app.move_cursor_to_start(),
        KeyCode::End => app.move_cursor_to_end(),
        KeyCode::Backspace => app.delete_char_before(),
        KeyCode::Delete => app.delete_char_at(),
        KeyCode::Char('a') if ctrl => app.move_cursor_to_start(),
        KeyCode::Char('e') if ctrl => app.move_cursor_to_end(),
        KeyCode::Char('u') if ctrl => app.kill_to_start(),
        KeyCode::Char('k') if ctrl => app.kill_to_end(),
        KeyCode::Char(c) if !ctrl && !alt => app.enter_char(c),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::handle_key;
    use crate::input::test_support::{ctrl, key};
    use chrono::NaiveDate;
    use nurse_core::{FormConfig, FormField};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    fn app() -> App {
        App::with_clock(&FormConfig::default(), today)
    }

    fn type_keys(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_fills_vitals_in_order() {
        let mut app = app();
        type_keys(&mut app, "118/76");
        handle_key(&mut app, key(KeyCode::Tab));
        type_keys(&mut app, "36.8");
        handle_key(&mut app, key(KeyCode::Enter));
        type_keys(&mut app, "64");
        assert_eq!(app.record.vitals.blood_pressure, "118/76");
        assert_eq!(app.record.vitals.temperature, "36.8");
        assert_eq!(app.record.vitals.pulse, "64");
        assert_eq!(app.focus, FormField::Pulse);
    }

    #[test]
    fn vitals_echo_full_width_keys() {
        let mut app = app();
        app.focus_field(FormField::Temperature);
        type_keys(&mut app, "３６.５36.5");
        assert_eq!(app.record.vitals.temperature, "３６.５36.5");
    }

    #[test]
    fn back_tab_wraps_to_plan() {
        let mut app = app();
        handle_key(&mut app, key(KeyCode::BackTab));
        assert_eq!(app.focus, FormField::Plan);
        type_keys(&mut app, "継続観察");
        assert_eq!(app.record.soap.plan, "継続観察");
        assert_eq!(app.record.soap.subjective, "");
    }

    #[test]
    fn control_keys_do_not_insert() {
        let mut app = app();
        type_keys(&mut app, "120");
        handle_key(&mut app, ctrl('a'));
        handle_key(&mut app, ctrl('x'));
        type_keys(&mut app, "~");
        assert_eq!(app.record.vitals.blood_pressure, "~120");
        handle_key(&mut app, ctrl('k'));
        assert_eq!(app.record.vitals.blood_pressure, "~");
    }

    #[test]
    fn calendar_keys_open_picker() {
        let mut app = app();
        handle_key(&mut app, ctrl('d'));
        assert!(app.is_date_picker_open());
        handle_key(&mut app, ctrl('d'));
        assert!(!app.is_date_picker_open());
        handle_key(&mut app, key(KeyCode::F(2)));
        assert!(app.is_date_picker_open());
    }
}
