//! Calendar month counting over a date range

use chrono::{DateTime, Datelike, Month, Months, Utc};
use std::fmt;

/// Calendar month identity, ignoring the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    pub fn of(date: &DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or(fmt::Error)?;
        write!(f, "{} {}", &month.name()[..3], self.year)
    }
}

/// Distinct calendar months touched by `start..end`, in walk order
///
/// Steps from `start` one calendar month at a time while the cursor is
/// strictly before `end`, then always adds `end`'s own month. A range
/// starting mid-month counts that month in full.
///
/// Stepping clamps the day-of-month (Jan 31 + 1 month = Feb 28/29), so a
/// cursor can drift to an earlier day for the rest of the walk. Boundary
/// months may be counted differently from a day-exact walk; that is accepted.
///
/// An inverted range (`end < start`) never enters the loop and yields only
/// `end`'s month.
pub fn months_spanned(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<MonthYear> {
    let mut months = Vec::new();
    let mut current = start;

    while current < end {
        let token = MonthYear::of(&current);
        if !months.contains(&token) {
            months.push(token);
        }
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }

    let last = MonthYear::of(&end);
    if !months.contains(&last) {
        months.push(last);
    }
    months
}

/// Number of distinct calendar months in `start..end`, always at least 1
pub fn months_in_range(start: DateTime<Utc>, end: DateTime<Utc>) -> usize {
    months_spanned(start, end).len()
}
