// Status bar displayed at the very bottom of the screen
// Shows key hints (or the quit warning) on the left and today's date on the right

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::theme;

/// A key and what it does, e.g. ("Tab", "next field")
pub type Hint = (&'static str, &'static str);

const QUIT_WARNING: &str = "Press Ctrl+C again to quit (the record is not saved)";

/// Render the status bar.
///
/// When `pending_quit` is set the hints are replaced by the quit warning.
pub fn render_statusbar(f: &mut Frame, area: Rect, hints: &[Hint], pending_quit: bool, right: &str) {
    let right_width = (right.width() + 2) as u16;
    let chunks = Layout::horizontal([Constraint::Min(0), Constraint::Length(right_width)]).split(area);

    let left_width = chunks[0].width as usize;
    let left = if pending_quit {
        Line::from(Span::styled(
            format!(" {}", truncate_with_ellipsis(QUIT_WARNING, left_width.saturating_sub(1))),
            Style::default().fg(theme::ACCENT_ERROR),
        ))
    } else {
        hint_line(hints, left_width)
    };

    f.render_widget(
        Paragraph::new(left).style(Style::default().bg(theme::BG_STATUSBAR)),
        chunks[0],
    );

    let padding = (chunks[1].width as usize).saturating_sub(right.width() + 1);
    f.render_widget(
        Paragraph::new(format!("{}{} ", " ".repeat(padding), right))
            .style(Style::default().fg(theme::TEXT_MUTED).bg(theme::BG_STATUSBAR)),
        chunks[1],
    );
}

/// Lay hints out as `Key action · Key action`, dropping trailing hints that
/// do not fit rather than cutting one in half
fn hint_line(hints: &[Hint], max_width: usize) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    let mut used = 1;
    for (i, (key, action)) in hints.iter().enumerate() {
        let separator = if i > 0 { " · " } else { "" };
        let needed = separator.width() + key.width() + 1 + action.width();
        if used + needed > max_width {
            break;
        }
        if i > 0 {
            spans.push(Span::styled(separator, theme::hint_text()));
        }
        spans.push(Span::styled(*key, theme::hint_key()));
        spans.push(Span::styled(format!(" {}", action), theme::hint_text()));
        used += needed;
    }
    Line::from(spans)
}

/// Truncate a string to fit within max_width, adding ellipsis if needed.
/// Uses grapheme-aware truncation so full-width characters are never split.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    // Too narrow for "..." - keep whatever whole graphemes fit
    let (target_width, suffix) = if max_width <= 3 {
        (max_width, "")
    } else {
        (max_width - 3, "...")
    };

    let mut current_width = 0;
    let mut result = String::new();
    for grapheme in s.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > target_width {
            break;
        }
        result.push_str(grapheme);
        current_width += grapheme_width;
    }

    result.push_str(suffix);
    result
}
