//! Core state and rules for the nursing record form.
//!
//! Everything here is pure: no terminal, no clock reads except where a caller
//! asks for "today" explicitly. The TUI crate owns the screen and drives these
//! types from key events.

pub mod calendar;
pub mod config;
pub mod constants;
pub mod date_picker;
pub mod error;
pub mod models;
pub mod tracing_setup;

pub use calendar::{default_record_date, format_record_date, is_selectable, latest_selectable};
pub use config::FormConfig;
pub use date_picker::{DatePickerState, PickerColumn};
pub use error::NurseError;
pub use models::{FormField, InputMode, NursingRecord, SoapNote, Vitals};
