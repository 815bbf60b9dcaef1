//! The nursing record form: header, summary card, vitals card, SOAP card

use nurse_core::constants::{
    LABEL_PATIENT_NAME, LABEL_RECORD_DATE, SECTION_SOAP, SECTION_VITALS, TITLE,
};
use nurse_core::FormField;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::{layout, theme, App};

/// Label of the calendar button in the header
pub const CALENDAR_BUTTON: &str = "[Ctrl+D 日付]";

pub fn render_nursing_form(f: &mut Frame, app: &App, area: Rect) {
    let column = layout::centered_column(area, layout::FORM_MAX_WIDTH);

    let chunks = Layout::vertical([
        Constraint::Length(layout::HEADER_HEIGHT),
        Constraint::Length(layout::SUMMARY_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(layout::VITALS_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(layout::SOAP_HEIGHT),
        Constraint::Min(0),
    ])
    .split(column);

    render_header(f, app, chunks[0]);
    render_summary(f, app, chunks[1]);
    render_section(f, app, chunks[3], SECTION_VITALS, &FormField::VITALS);
    render_section(f, app, chunks[5], SECTION_SOAP, &FormField::SOAP);
}

/// Title centered, calendar button on the right
fn render_header(f: &mut Frame, app: &App, area: Rect) {
    // The title sits on the second row; nothing fits on shorter terminals
    if area.height < 2 {
        return;
    }
    let row = Rect::new(area.x, area.y + 1, area.width, 1);

    f.render_widget(
        Paragraph::new(Span::styled(TITLE, theme::title())).alignment(Alignment::Center),
        row,
    );

    let button_style = if app.is_date_picker_open() {
        theme::label_focused()
    } else {
        Style::default().fg(theme::ACCENT_PRIMARY)
    };
    f.render_widget(
        Paragraph::new(Span::styled(CALENDAR_BUTTON, button_style)).alignment(Alignment::Right),
        layout::with_content_padding(row),
    );
}

fn card(title: Option<&str>) -> Block<'_> {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme::border_inactive())
        .style(Style::default().bg(theme::BG_CARD));
    match title {
        Some(title) => block.title(Span::styled(format!(" {} ", title), theme::section_header())),
        None => block,
    }
}

/// Read-only rows: record date and patient name, value right-aligned
fn render_summary(f: &mut Frame, app: &App, area: Rect) {
    let block = card(None);
    let inner = layout::with_horizontal_padding(block.inner(area), 1);
    f.render_widget(block, area);

    let rows = [
        (LABEL_RECORD_DATE, app.record.display_date()),
        (LABEL_PATIENT_NAME, app.record.patient_name().to_string()),
    ];
    for (i, (label, value)) in rows.into_iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        f.render_widget(Paragraph::new(Span::styled(label, theme::text_muted())), row);
        f.render_widget(
            Paragraph::new(Span::styled(value, theme::text_primary())).alignment(Alignment::Right),
            row,
        );
    }
}

/// A titled card of editable rows
fn render_section(f: &mut Frame, app: &App, area: Rect, title: &str, fields: &[FormField]) {
    let block = card(Some(title));
    let inner = layout::with_horizontal_padding(block.inner(area), 1);
    f.render_widget(block, area);

    for (i, field) in fields.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        render_field_row(f, app, row, *field);
    }
}

fn render_field_row(f: &mut Frame, app: &App, row: Rect, field: FormField) {
    let focused = app.focus == field;
    let [label_area, input_area] =
        Layout::horizontal([Constraint::Length(layout::LABEL_WIDTH), Constraint::Min(0)]).areas(row);

    let (marker, label_style) = if focused {
        ("▸ ", theme::label_focused())
    } else {
        ("  ", theme::text_muted())
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(marker, label_style),
            Span::styled(field.label(), label_style),
        ])),
        label_area,
    );

    let text = app.record.field(field);
    let input_style = if focused {
        theme::input_active()
    } else {
        theme::input_inactive()
    };

    if text.is_empty() {
        let placeholder_style = if focused {
            theme::input_placeholder().bg(theme::BG_INPUT)
        } else {
            theme::input_placeholder()
        };
        f.render_widget(
            Paragraph::new(Span::styled(field.placeholder(), placeholder_style))
                .style(input_style),
            input_area,
        );
    } else {
        let cursor_col = if focused {
            app.cursor.display_column(text)
        } else {
            0
        };
        let (visible, _) = visible_window(text, cursor_col, input_area.width as usize);
        f.render_widget(
            Paragraph::new(Span::styled(visible, input_style)).style(input_style),
            input_area,
        );
    }

    if let Some(hint) = field.input_mode().hint().filter(|_| focused) {
        let shown = if text.is_empty() { field.placeholder() } else { text };
        if shown.width() + hint.width() + 1 < input_area.width as usize {
            f.render_widget(
                Paragraph::new(Span::styled(hint, theme::input_placeholder()))
                    .alignment(Alignment::Right),
                input_area,
            );
        }
    }

    if focused && !app.is_date_picker_open() {
        let (_, cursor_x) = visible_window(
            text,
            app.cursor.display_column(text),
            input_area.width as usize,
        );
        f.set_cursor_position((input_area.x + cursor_x as u16, input_area.y));
    }
}

/// The part of `text` that fits in `width` columns while keeping the cursor
/// in view. Returns the visible text and the cursor column inside it.
pub fn visible_window(text: &str, cursor_col: usize, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }
    // Leave one column for the cursor past the last character
    let mut skipped = 0;
    let mut graphemes = text.graphemes(true);
    while cursor_col.saturating_sub(skipped) >= width {
        match graphemes.next() {
            Some(g) => skipped += g.width(),
            None => break,
        }
    }

    let mut visible = String::new();
    let mut used = 0;
    for g in graphemes {
        let w = g.width();
        if used + w > width {
            break;
        }
        visible.push_str(g);
        used += w;
    }
    (visible, cursor_col.saturating_sub(skipped))
}
