use crate::ui::layout;
use crate::ui::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Configuration for modal sizing
pub struct ModalSize {
    /// Maximum width in columns (will be capped by terminal width - 4)
    pub max_width: u16,
    /// Maximum height in rows (will be capped by terminal height - 2)
    pub max_height: u16,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self {
            max_width: layout::PICKER_WIDTH,
            max_height: layout::PICKER_HEIGHT,
        }
    }
}

/// Calculate centered modal area
pub fn modal_area(terminal_area: Rect, size: &ModalSize) -> Rect {
    let popup_width = size.max_width.min(terminal_area.width.saturating_sub(4));
    let popup_height = size.max_height.min(terminal_area.height.saturating_sub(2));
    let popup_x = terminal_area.x + (terminal_area.width.saturating_sub(popup_width)) / 2;
    let popup_y = terminal_area.y + (terminal_area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// Dims the existing content, like the translucent black sheet behind the picker
struct DimOverlay;

impl Widget for DimOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_style(
                        Style::default()
                            .add_modifier(Modifier::DIM)
                            .bg(theme::BG_MODAL_OVERLAY),
                    );
                }
            }
        }
    }
}

/// Render dimmed overlay over the entire terminal area
pub fn render_modal_overlay(f: &mut Frame, terminal_area: Rect) {
    f.render_widget(DimOverlay, terminal_area);
}

/// Render the modal background (clears area and fills with modal bg color)
pub fn render_modal_background(f: &mut Frame, area: Rect) {
    f.render_widget(Clear, area);
    let bg_block = Block::default().style(Style::default().bg(theme::BG_MODAL));
    f.render_widget(bg_block, area);
}

/// Render modal header with title on left and hint on right
/// Returns the remaining area below the header
pub fn render_modal_header(f: &mut Frame, area: Rect, title: &str, hint: &str) -> Rect {
    // Header takes 2 lines (1 for content + 1 for spacing)
    let chunks = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

    let header_area = layout::with_modal_padding(chunks[0]);

    // Display width, not byte length: the title is Japanese
    let available = header_area.width as usize;
    let spacing = available.saturating_sub(title.width() + hint.width());

    let header_line = Line::from(vec![
        Span::styled(title, theme::modal_title()),
        Span::raw(" ".repeat(spacing)),
        Span::styled(hint, theme::modal_hint()),
    ]);

    f.render_widget(Paragraph::new(header_line), header_area);

    chunks[1]
}
