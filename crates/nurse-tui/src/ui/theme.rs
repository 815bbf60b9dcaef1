// Centralized theme for the nursing form
// All colors and styles are defined here - edit this file to change the look

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// App background
pub const BG_APP: Color = Color::Rgb(0, 0, 0);

/// Section card background (the grouped summary / vitals / SOAP boxes)
pub const BG_CARD: Color = Color::Rgb(18, 18, 18);

/// Focused row background
pub const BG_SELECTED: Color = Color::Rgb(32, 32, 32);

/// Status bar background
pub const BG_STATUSBAR: Color = Color::Rgb(12, 12, 12);

/// Input field background
pub const BG_INPUT: Color = Color::Rgb(28, 28, 32);

// -----------------------------------------------------------------------------
// Text Colors
// -----------------------------------------------------------------------------

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);

pub const TEXT_MUTED: Color = Color::Rgb(128, 128, 128);

/// Placeholders and values the picker will not reach
pub const TEXT_DIM: Color = Color::Rgb(90, 90, 90);

// -----------------------------------------------------------------------------
// Accent Colors
// -----------------------------------------------------------------------------

/// Focus and interactive elements
pub const ACCENT_PRIMARY: Color = Color::Rgb(86, 156, 214);

/// Key names in hints
pub const ACCENT_WARNING: Color = Color::Rgb(206, 145, 120);

pub const ACCENT_ERROR: Color = Color::Rgb(244, 112, 112);

// -----------------------------------------------------------------------------
// Border Colors
// -----------------------------------------------------------------------------

pub const BORDER_INACTIVE: Color = Color::Rgb(60, 60, 60);

// =============================================================================
// STYLES
// =============================================================================

pub fn text_primary() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn text_dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn section_header() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn border_inactive() -> Style {
    Style::default().fg(BORDER_INACTIVE)
}

pub fn label_focused() -> Style {
    Style::default()
        .fg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn input_active() -> Style {
    Style::default().fg(TEXT_PRIMARY).bg(BG_INPUT)
}

pub fn input_inactive() -> Style {
    Style::default().fg(TEXT_PRIMARY)
}

pub fn input_placeholder() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn hint_key() -> Style {
    Style::default().fg(ACCENT_WARNING)
}

pub fn hint_text() -> Style {
    Style::default().fg(TEXT_MUTED)
}

// -----------------------------------------------------------------------------
// Modal
// -----------------------------------------------------------------------------

/// Modal background - slightly lifted from app background
pub const BG_MODAL: Color = Color::Rgb(24, 24, 24);

/// Modal overlay - dims the form behind the date picker
pub const BG_MODAL_OVERLAY: Color = Color::Rgb(10, 10, 12);

pub fn modal_title() -> Style {
    Style::default()
        .fg(TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

pub fn modal_hint() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Wheel row under the selection line
pub fn wheel_selected(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(ACCENT_PRIMARY)
            .bg(BG_SELECTED)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_PRIMARY).bg(BG_SELECTED)
    }
}

/// The OK button
pub fn button_primary() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(ACCENT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}
