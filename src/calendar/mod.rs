/// Calendar grid builder for the monthly habit view
///
/// Pure layout computation: given a year and a 1-based month, produce the
/// sequence of cells a 7-column grid renders. The grid carries no
/// completion information; presentation composes it with the streak
/// engine's `is_day_completed` at render time.

use chrono::{Datelike, NaiveDate};

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    /// Padding before the first day of the month
    Blank,
    /// A day number (1-based)
    Day(u32),
}

/// Number of days in the given Gregorian month, leap-aware
///
/// Computed as "the day before day 1 of the next month".
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the month's first day, 0 = Sunday .. 6 = Saturday
///
/// Sunday-first matches the `S M T W T F S` header row the app renders.
pub fn first_weekday_of_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Build the renderable cell sequence for one month
///
/// Leading blanks align day 1 under its weekday column; the same inputs
/// always produce the same sequence.
pub fn month_grid(year: i32, month: u32) -> Vec<GridCell> {
    let blanks = first_weekday_of_month(year, month);
    let days = days_in_month(year, month);

    let mut cells = Vec::with_capacity((blanks + days) as usize);
    for _ in 0..blanks {
        cells.push(GridCell::Blank);
    }
    for day in 1..=days {
        cells.push(GridCell::Day(day));
    }
    cells
}

/// A navigable (year, month) position for the calendar view
///
/// Months are 1-based (1 = January). Navigation wraps the year at the
/// December/January boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Cursor at the month containing the given date
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month before this one
    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after this one
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Cells for the month under the cursor
    pub fn grid(self) -> Vec<GridCell> {
        month_grid(self.year, self.month)
    }
}
