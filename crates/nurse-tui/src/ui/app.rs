use chrono::NaiveDate;
use nurse_core::{DatePickerState, FormConfig, FormField, NursingRecord};

use crate::ui::text_input::TextCursor;

/// Source of "today". Swapped out in tests.
pub type Clock = fn() -> NaiveDate;

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// All state of the nursing form screen
pub struct App {
    pub running: bool,
    /// First Ctrl+C arms this; a second one quits
    pub pending_quit: bool,

    pub record: NursingRecord,
    pub focus: FormField,
    pub cursor: TextCursor,

    /// `Some` while the date picker modal is shown
    pub date_picker: Option<DatePickerState>,

    clock: Clock,
}

impl App {
    pub fn new(config: &FormConfig) -> Self {
        Self::with_clock(config, local_today)
    }

    pub fn with_clock(config: &FormConfig, clock: Clock) -> Self {
        let record = NursingRecord::new(config.patient_name.clone(), clock());
        let focus = FormField::ALL[0];
        let cursor = TextCursor::at_end(record.field(focus));
        Self {
            running: true,
            pending_quit: false,
            record,
            focus,
            cursor,
            date_picker: None,
            clock,
        }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn quit(&mut self) {
        tracing::info!("quitting, record discarded");
        self.running = false;
    }

    // =========================================================================
    // Date picker
    // =========================================================================

    pub fn is_date_picker_open(&self) -> bool {
        self.date_picker.is_some()
    }

    /// Calendar button: opens the picker, or confirms it when already open
    pub fn toggle_date_picker(&mut self) {
        if self.is_date_picker_open() {
            self.confirm_date_picker();
        } else {
            self.open_date_picker();
        }
    }

    pub fn open_date_picker(&mut self) {
        let picker = DatePickerState::open(self.record.record_date(), self.today());
        tracing::debug!(max = %picker.max(), "date picker opened");
        self.date_picker = Some(picker);
    }

    /// Close the picker and commit whatever it has selected. There is no
    /// cancel: every way out of the picker lands here.
    pub fn confirm_date_picker(&mut self) {
        if let Some(picker) = self.date_picker.take() {
            let today = self.today();
            self.record.commit_date(picker.confirm(), today);
            tracing::info!(date = %self.record.display_date(), "record date committed");
        }
    }

    // =========================================================================
    // Field focus
    // =========================================================================

    pub fn focus_field(&mut self, field: FormField) {
        if self.focus != field {
            tracing::debug!(?field, "focus");
        }
        self.focus = field;
        self.cursor = TextCursor::at_end(self.record.field(field));
    }

    pub fn focus_next(&mut self) {
        self.focus_field(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.focus_field(self.focus.prev());
    }

    // =========================================================================
    // Editing - every change is written straight back into the record
    // =========================================================================

    /// Run `edit` against the focused field's text and store the result
    fn edit_focused(&mut self, edit: impl FnOnce(&mut TextCursor, &mut String) -> bool) {
        let mut text = self.record.field(self.focus).to_string();
        if edit(&mut self.cursor, &mut text) {
            self.record.set_field(self.focus, text);
        }
    }

    pub fn enter_char(&mut self, c: char) {
        self.edit_focused(|cursor, text| cursor.insert_char(text, c));
    }

    pub fn paste(&mut self, pasted: &str) {
        self.edit_focused(|cursor, text| cursor.insert_str(text, pasted));
    }

    /// Type a whole string key by key
    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.enter_char(c);
        }
    }

    pub fn delete_char_before(&mut self) {
        self.edit_focused(|cursor, text| cursor.delete_char_before(text));
    }

    pub fn delete_char_at(&mut self) {
        self.edit_focused(|cursor, text| cursor.delete_char_at(text));
    }

    pub fn kill_to_start(&mut self) {
        self.edit_focused(|cursor, text| cursor.kill_to_start(text));
    }

    pub fn kill_to_end(&mut self) {
        self.edit_focused(|cursor, text| cursor.kill_to_end(text));
    }

    pub fn move_cursor_left(&mut self) {
        let text = self.record.field(self.focus);
        self.cursor.move_left(text);
    }

    pub fn move_cursor_right(&mut self) {
        let text = self.record.field(self.focus);
        self.cursor.move_right(text);
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor.move_to_start();
    }

    pub fn move_cursor_to_end(&mut self) {
        let text = self.record.field(self.focus);
        self.cursor.move_to_end(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nurse_core::PickerColumn;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    fn app() -> App {
        App::with_clock(&FormConfig::default(), today)
    }

    #[test]
    fn defaults_on_load() {
        let app = app();
        assert!(app.running);
        assert!(!app.is_date_picker_open());
        assert_eq!(app.record.display_date(), "2024/10/15");
        assert_eq!(app.record.patient_name(), "〇〇〇〇 〇〇〇");
        assert_eq!(app.focus, FormField::BloodPressure);
    }

    #[test]
    fn toggle_twice_closes_picker() {
        let mut app = app();
        app.toggle_date_picker();
        assert!(app.is_date_picker_open());
        app.toggle_date_picker();
        assert!(!app.is_date_picker_open());
        assert_eq!(app.record.display_date(), "2024/10/15");
    }

    #[test]
    fn confirm_commits_selected_date() {
        let mut app = app();
        app.open_date_picker();
        let picker = app.date_picker.as_mut().unwrap();
        picker.column = PickerColumn::Day;
        picker.scroll(-5);
        picker.column = PickerColumn::Month;
        picker.scroll(-1);
        app.confirm_date_picker();
        assert!(!app.is_date_picker_open());
        assert_eq!(app.record.display_date(), "2024/09/10");
    }

    #[test]
    fn confirm_without_picker_is_noop() {
        let mut app = app();
        app.confirm_date_picker();
        assert_eq!(app.record.display_date(), "2024/10/15");
    }

    #[test]
    fn vitals_echo_typed_text() {
        let mut app = app();
        for (field, value) in [
            (FormField::BloodPressure, "120/80 mmHg"),
            (FormField::Temperature, "36.5"),
            (FormField::Pulse, "72 bpm"),
        ] {
            app.focus_field(field);
            app.type_str(value);
            assert_eq!(app.record.field(field), value);
        }
    }

    #[test]
    fn soap_typing_touches_only_focused_field() {
        let mut app = app();
        for field in FormField::SOAP {
            app.focus_field(field);
            app.type_str("既存");
        }
        app.focus_field(FormField::Assessment);
        app.type_str("：改善傾向");
        assert_eq!(app.record.soap.assessment, "既存：改善傾向");
        assert_eq!(app.record.soap.subjective, "既存");
        assert_eq!(app.record.soap.objective, "既存");
        assert_eq!(app.record.soap.plan, "既存");
    }

    #[test]
    fn refocus_puts_cursor_at_end() {
        let mut app = app();
        app.type_str("120");
        app.focus_next();
        app.focus_prev();
        app.type_str("/80");
        assert_eq!(app.record.vitals.blood_pressure, "120/80");
    }

    #[test]
    fn editing_keys() {
        let mut app = app();
        app.focus_field(FormField::Plan);
        app.type_str("経過観察");
        app.move_cursor_left();
        app.delete_char_before();
        assert_eq!(app.record.soap.plan, "経過察");
        app.move_cursor_to_start();
        app.delete_char_at();
        assert_eq!(app.record.soap.plan, "過察");
        app.move_cursor_to_end();
        app.kill_to_start();
        assert_eq!(app.record.soap.plan, "");
    }

    #[test]
    fn paste_keeps_full_width_vitals() {
        let mut app = app();
        app.paste("１２０／８０");
        assert_eq!(app.record.vitals.blood_pressure, "１２０／８０");
        app.focus_field(FormField::Temperature);
        app.type_str("３６.５");
        assert_eq!(app.record.vitals.temperature, "３６.５");
        app.focus_field(FormField::Objective);
        app.paste("発熱なし\n");
        assert_eq!(app.record.soap.objective, "発熱なし");
    }
}
