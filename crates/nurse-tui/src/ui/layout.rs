// Layout constants and helpers for the form screen

use ratatui::layout::Rect;

/// Horizontal padding for the main content (left + right)
pub const CONTENT_PADDING_H: u16 = 2;

/// Horizontal padding for modal content (left + right)
pub const MODAL_PADDING_H: u16 = 2;

/// Header: blank line + title + blank line
pub const HEADER_HEIGHT: u16 = 3;

/// Record date + patient name rows inside a bordered card
pub const SUMMARY_HEIGHT: u16 = 4;

/// Section title + three vital rows inside a bordered card
pub const VITALS_HEIGHT: u16 = 6;

/// Section title + four SOAP rows inside a bordered card
pub const SOAP_HEIGHT: u16 = 7;

pub const STATUSBAR_HEIGHT: u16 = 1;

/// Display width reserved for row labels (血圧, S:, ...)
pub const LABEL_WIDTH: u16 = 8;

/// Widest the form gets on large terminals
pub const FORM_MAX_WIDTH: u16 = 72;

/// Date picker modal size
pub const PICKER_WIDTH: u16 = 40;
pub const PICKER_HEIGHT: u16 = 14;

/// Rows shown above and below the selection line of each wheel
pub const WHEEL_RADIUS: i32 = 2;

/// Apply horizontal padding to a Rect (reduces width and shifts x)
#[inline]
pub fn with_horizontal_padding(area: Rect, padding: u16) -> Rect {
    Rect {
        x: area.x + padding,
        y: area.y,
        width: area.width.saturating_sub(padding * 2),
        height: area.height,
    }
}

#[inline]
pub fn with_content_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, CONTENT_PADDING_H)
}

#[inline]
pub fn with_modal_padding(area: Rect) -> Rect {
    with_horizontal_padding(area, MODAL_PADDING_H)
}

/// Center a column of at most `max_width` inside `area`
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = max_width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_saturates() {
        let area = Rect::new(0, 0, 3, 1);
        assert_eq!(with_content_padding(area).width, 0);
        assert_eq!(with_content_padding(area).x, 2);
    }

    #[test]
    fn column_is_centered() {
        let column = centered_column(Rect::new(0, 0, 100, 10), FORM_MAX_WIDTH);
        assert_eq!(column.width, FORM_MAX_WIDTH);
        assert_eq!(column.x, 14);
        let narrow = centered_column(Rect::new(5, 0, 40, 10), FORM_MAX_WIDTH);
        assert_eq!(narrow, Rect::new(5, 0, 40, 10));
    }
}
