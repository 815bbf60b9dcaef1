//! Fixed strings and formats shared by the model and the screen.

/// Display format for the committed record date
pub const RECORD_DATE_FORMAT: &str = "%Y/%m/%d";

/// Patient name shown when nothing is configured
pub const DEFAULT_PATIENT_NAME: &str = "〇〇〇〇 〇〇〇";

/// Locale of the date dialog. Only this one is supported.
pub const PICKER_LOCALE: &str = "ja_JP";

/// Weekday names for the picker, Sunday first
pub const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

// Screen text
pub const TITLE: &str = "看護記録";
pub const PICKER_TITLE: &str = "記録日選択";
pub const PICKER_CONFIRM: &str = "OK";
pub const LABEL_RECORD_DATE: &str = "記録日";
pub const LABEL_PATIENT_NAME: &str = "氏名";
pub const SECTION_VITALS: &str = "バイタルデータ";
pub const SECTION_SOAP: &str = "看護記録 (SOAP)";

/// Earliest year the wheel picker scrolls to
pub const PICKER_MIN_YEAR: i32 = 1900;

/// Environment variable that enables file logging
pub const LOG_FILE_ENV: &str = "NURSE_LOG_FILE";
