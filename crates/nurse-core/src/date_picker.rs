//! Wheel-style date picker state
//!
//! Three columns (year, month, day) scrolled independently. The selection is
//! clamped after every move so it can never reach the upper bound fixed when
//! the picker was opened. Out-of-range dates are unreachable rather than
//! rejected.

use chrono::{Datelike, NaiveDate};

use crate::calendar::{days_in_month, latest_selectable};
use crate::constants::PICKER_MIN_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerColumn {
    Year,
    Month,
    Day,
}

impl PickerColumn {
    pub const ALL: [PickerColumn; 3] = [PickerColumn::Year, PickerColumn::Month, PickerColumn::Day];

    pub fn next(&self) -> Self {
        match self {
            PickerColumn::Year => PickerColumn::Month,
            PickerColumn::Month => PickerColumn::Day,
            PickerColumn::Day => PickerColumn::Year,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            PickerColumn::Year => PickerColumn::Day,
            PickerColumn::Month => PickerColumn::Year,
            PickerColumn::Day => PickerColumn::Month,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerState {
    selected: NaiveDate,
    max: NaiveDate,
    pub column: PickerColumn,
}

impl DatePickerState {
    /// Open positioned at `current`, bounded by the day before `today`
    pub fn open(current: NaiveDate, today: NaiveDate) -> Self {
        let max = latest_selectable(today);
        Self {
            selected: current.min(max),
            max,
            column: PickerColumn::Year,
        }
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// Latest date this picker can produce
    pub fn max(&self) -> NaiveDate {
        self.max
    }

    pub fn min(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(PICKER_MIN_YEAR, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn focus_next_column(&mut self) {
        self.column = self.column.next();
    }

    pub fn focus_prev_column(&mut self) {
        self.column = self.column.prev();
    }

    /// Scroll the focused column by `delta` steps (negative scrolls back)
    pub fn scroll(&mut self, delta: i32) {
        let (year, month, day) = (
            self.selected.year(),
            self.selected.month(),
            self.selected.day(),
        );
        let (year, month, day) = match self.column {
            PickerColumn::Year => {
                let year = (year + delta).clamp(PICKER_MIN_YEAR, self.max.year());
                (year, month, day)
            }
            PickerColumn::Month => (year, wrap(month, delta, 12), day),
            PickerColumn::Day => (year, month, wrap(day, delta, days_in_month(year, month))),
        };
        self.set(year, month, day);
    }

    /// Values shown in `column` around the selection, `radius` rows above and
    /// below. `None` marks rows past the ends of the wheel.
    pub fn wheel(&self, column: PickerColumn, radius: i32) -> Vec<Option<u32>> {
        let current = match column {
            PickerColumn::Year => self.selected.year(),
            PickerColumn::Month => self.selected.month() as i32,
            PickerColumn::Day => self.selected.day() as i32,
        };
        (-radius..=radius)
            .map(|offset| match column {
                PickerColumn::Year => {
                    let year = current + offset;
                    (PICKER_MIN_YEAR..=self.max.year())
                        .contains(&year)
                        .then_some(year as u32)
                }
                PickerColumn::Month => Some(wrap(current as u32, offset, 12)),
                PickerColumn::Day => Some(wrap(
                    current as u32,
                    offset,
                    days_in_month(self.selected.year(), self.selected.month()),
                )),
            })
            .collect()
    }

    /// Whether a wheel value in `column` would land past the upper bound
    pub fn is_disabled(&self, column: PickerColumn, value: u32) -> bool {
        let (year, month) = (self.selected.year(), self.selected.month());
        match column {
            PickerColumn::Year => value as i32 > self.max.year(),
            PickerColumn::Month => {
                year == self.max.year() && value > self.max.month()
            }
            PickerColumn::Day => {
                year == self.max.year() && month == self.max.month() && value > self.max.day()
            }
        }
    }

    /// Close the picker, yielding the date to commit
    pub fn confirm(self) -> NaiveDate {
        self.selected
    }

    fn set(&mut self, year: i32, month: u32, day: u32) {
        let day = day.min(days_in_month(year, month));
        let candidate = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(self.selected);
        self.selected = candidate.clamp(self.min(), self.max);
    }
}

/// Step a 1-based wheel value, wrapping within `1..=len`
fn wrap(value: u32, delta: i32, len: u32) -> u32 {
    let len = len as i64;
    ((value as i64 - 1 + delta as i64).rem_euclid(len) + 1) as u32
}
