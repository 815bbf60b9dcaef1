use nurse_core::calendar::format_japanese;
use nurse_core::constants::{PICKER_CONFIRM, PICKER_TITLE};
use nurse_core::{DatePickerState, PickerColumn};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::components::{
    modal_area, render_modal_background, render_modal_header, render_modal_overlay, ModalSize,
};
use crate::ui::{layout, theme};

/// Render the wheel date picker over a dimmed form
pub fn render_date_picker(f: &mut Frame, picker: &DatePickerState, area: Rect) {
    render_modal_overlay(f, area);

    let popup = modal_area(area, &ModalSize::default());
    render_modal_background(f, popup);

    // Vertical padding
    let inner = Rect::new(popup.x, popup.y + 1, popup.width, popup.height.saturating_sub(2))
        .intersection(area);
    let remaining = render_modal_header(f, inner, PICKER_TITLE, "Enter OK");
    let content = layout::with_modal_padding(remaining);

    let wheel_height = (layout::WHEEL_RADIUS * 2 + 1) as u16;
    let [selected_area, _, wheel_area, _, button_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(wheel_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(content);

    f.render_widget(
        Paragraph::new(Span::styled(
            format_japanese(picker.selected()),
            theme::text_primary(),
        ))
        .alignment(Alignment::Center),
        selected_area,
    );

    let columns = Layout::horizontal([
        Constraint::Ratio(2, 5),
        Constraint::Ratio(3, 10),
        Constraint::Ratio(3, 10),
    ])
    .split(wheel_area);
    for (column, column_area) in PickerColumn::ALL.into_iter().zip(columns.iter()) {
        render_wheel(f, picker, column, *column_area);
    }

    f.render_widget(
        Paragraph::new(Span::styled(format!("   {}   ", PICKER_CONFIRM), theme::button_primary()))
            .alignment(Alignment::Center),
        button_area,
    );
}

fn render_wheel(f: &mut Frame, picker: &DatePickerState, column: PickerColumn, area: Rect) {
    let suffix = match column {
        PickerColumn::Year => "年",
        PickerColumn::Month => "月",
        PickerColumn::Day => "日",
    };
    let focused = picker.column == column;
    let center = layout::WHEEL_RADIUS as usize;

    let lines: Vec<Line> = picker
        .wheel(column, layout::WHEEL_RADIUS)
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let Some(value) = value else {
                return Line::from("");
            };
            let style = if row == center {
                theme::wheel_selected(focused)
            } else if picker.is_disabled(column, value) {
                theme::text_dim()
            } else {
                theme::text_muted()
            };
            Line::from(Span::styled(format!(" {}{} ", value, suffix), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
