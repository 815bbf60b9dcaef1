use nurse_core::constants::PICKER_LOCALE;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::ui::components::render_statusbar;
use crate::ui::components::statusbar::Hint;
use crate::ui::{layout, theme, views, App};

const FORM_HINTS: &[Hint] = &[
    ("Tab", "next field"),
    ("S-Tab", "previous"),
    ("Ctrl+D", "record date"),
    ("Ctrl+C", "quit"),
];

const PICKER_HINTS: &[Hint] = &[
    ("←→", "column"),
    ("↑↓", "scroll"),
    ("PgUp/PgDn", "×10"),
    ("Enter", "OK"),
];

pub fn render(f: &mut Frame, app: &App) {
    let bg_block = Block::default().style(Style::default().bg(theme::BG_APP));
    f.render_widget(bg_block, f.area());

    let [main_area, statusbar_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(layout::STATUSBAR_HEIGHT),
    ])
    .areas(f.area());

    views::render_nursing_form(f, app, main_area);

    let hints = if app.is_date_picker_open() {
        PICKER_HINTS
    } else {
        FORM_HINTS
    };
    let right = format!("{} {}", PICKER_LOCALE, nurse_core::format_record_date(app.today()));
    render_statusbar(f, statusbar_area, hints, app.pending_quit, &right);

    // The picker draws last so it sits over everything, status bar included
    if let Some(picker) = &app.date_picker {
        views::render_date_picker(f, picker, f.area());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nurse_core::FormConfig;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 32)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        screen_text(terminal.backend().buffer())
    }

    // Wide characters occupy two cells; the second is blank. Strip those
    // blanks before searching for Japanese text.
    fn compact(screen: &str) -> String {
        screen.replace(' ', "")
    }

    #[test]
    fn form_shows_labels_and_default_date() {
        let app = App::with_clock(&FormConfig::default(), today);
        let screen = compact(&draw(&app));
        for text in ["看護記録", "記録日", "2024/10/15", "氏名", "バイタルデータ", "血圧", "体温", "脈拍", "S:", "P:", "主観的データ", "計画"] {
            assert!(screen.contains(text), "missing {text}");
        }
        assert!(!screen.contains("記録日選択"));
    }

    #[test]
    fn typed_values_are_drawn() {
        let mut app = App::with_clock(&FormConfig::default(), today);
        app.type_str("120/80");
        let screen = draw(&app);
        assert!(screen.contains("120/80"));
    }

    #[test]
    fn picker_modal_is_drawn_when_open() {
        let mut app = App::with_clock(&FormConfig::default(), today);
        app.open_date_picker();
        let screen = compact(&draw(&app));
        assert!(screen.contains("記録日選択"));
        assert!(screen.contains("2024年10月15日(火)"));
        assert!(screen.contains("OK"));
    }

    #[test]
    fn focused_vital_shows_half_width_hint() {
        let mut app = App::with_clock(&FormConfig::default(), today);
        assert!(compact(&draw(&app)).contains("半角英数"));
        app.focus_field(nurse_core::FormField::Subjective);
        assert!(!compact(&draw(&app)).contains("半角英数"));
    }

    #[test]
    fn tiny_terminals_render_without_panicking() {
        let mut app = App::with_clock(&FormConfig::default(), today);
        app.type_str("120/80");
        for picker_open in [false, true] {
            if picker_open {
                app.open_date_picker();
            }
            for (width, height) in [(10, 1), (80, 1), (80, 2), (3, 3), (1, 1), (5, 30)] {
                let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
                terminal.draw(|f| render(f, &app)).unwrap();
            }
        }
        assert!(app.is_date_picker_open());
    }

    #[test]
    fn one_row_terminal_keeps_status_bar() {
        let app = App::with_clock(&FormConfig::default(), today);
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();
        let screen = screen_text(terminal.backend().buffer());
        assert!(screen.contains("2024/10/16"));
        assert!(!compact(&screen).contains("看護記録"));
    }

    #[test]
    fn pending_quit_replaces_hints() {
        let mut app = App::with_clock(&FormConfig::default(), today);
        app.pending_quit = true;
        let screen = draw(&app);
        assert!(screen.contains("Press Ctrl+C again"));
        assert!(!screen.contains("next field"));
    }
}
