//! Day-grid and month-grid generation.
//!
//! Months are zero-based throughout (January = 0) and weekdays are
//! Monday-first (Monday = 0 .. Sunday = 6). Month indices outside [0, 11]
//! roll into the adjacent years: month -1 of 2024 is December 2023, month 12
//! is January 2025.
//!
//! Years are not bounded, but the year carry saturates at the ends of the
//! `i32` range: stepping past `i32::MAX` or `i32::MIN` stays in that year.

use crate::calendar_date::CalendarDate;

/// Number of columns in both the day grid and a week.
pub const DAYS_PER_WEEK: usize = 7;

/// Number of columns in the month grid.
pub const MONTHS_PER_ROW: usize = 3;

/// One cell of the day grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    /// False for the leading and trailing days borrowed from the
    /// neighbouring months.
    pub belongs_to_displayed_month: bool,
}

/// Fold an arbitrary month index into (year, month0) with month0 in [0, 11].
/// The year saturates instead of overflowing.
pub fn normalize_month(year: i32, month: i32) -> (i32, u32) {
    (
        year.saturating_add(month.div_euclid(12)),
        month.rem_euclid(12) as u32,
    )
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month, accepting out-of-range month indices.
pub fn days_in_month(year: i32, month: i32) -> u32 {
    let (year, month0) = normalize_month(year, month);
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 for a proleptic Gregorian date.
fn days_from_epoch(year: i32, month0: u32, day: u32) -> i64 {
    let month = month0 as i64 + 1;
    let year = year as i64 - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day as i64 - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Weekday of the given day, Monday = 0 .. Sunday = 6.
pub fn weekday_from_monday(year: i32, month0: u32, day: u32) -> u32 {
    // 1970-01-01 was a Thursday.
    (days_from_epoch(year, month0, day) + 3).rem_euclid(7) as u32
}

/// Compute the day grid for the month `month` of `year`. Out-of-range month
/// indices roll into the adjacent years like `days_in_month`.
///
/// The grid starts on the Monday on or before day 1 and ends on the Sunday on
/// or after the last day, so every row holds exactly seven cells. Most months
/// need five or six rows; a 28-day February starting on a Monday fits in four.
pub fn compute_date_grid(year: i32, month: i32) -> Vec<Vec<DayCell>> {
    let (year, month0) = normalize_month(year, month);
    let month = month0 as i32;
    let leading_offset = weekday_from_monday(year, month0, 1);
    let current_month_days = days_in_month(year, month);

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);

    let (prev_year, prev_month0) = normalize_month(year, month - 1);
    let prev_month_days = days_in_month(year, month - 1);
    for i in (0..leading_offset).rev() {
        cells.push(DayCell {
            date: CalendarDate::from_parts_unchecked(prev_year, prev_month0, prev_month_days - i),
            belongs_to_displayed_month: false,
        });
    }

    for day in 1..=current_month_days {
        cells.push(DayCell {
            date: CalendarDate::from_parts_unchecked(year, month0, day),
            belongs_to_displayed_month: true,
        });
    }

    let trailing_offset = (DAYS_PER_WEEK - cells.len() % DAYS_PER_WEEK) % DAYS_PER_WEEK;
    let (next_year, next_month0) = normalize_month(year, month + 1);
    for day in 1..=trailing_offset as u32 {
        cells.push(DayCell {
            date: CalendarDate::from_parts_unchecked(next_year, next_month0, day),
            belongs_to_displayed_month: false,
        });
    }

    cells
        .chunks(DAYS_PER_WEEK)
        .map(|week| week.to_vec())
        .collect()
}

/// Chunk the twelve short month names into four rows of three.
pub fn compute_month_grid<'a>(months_short: &[&'a str]) -> Vec<Vec<&'a str>> {
    months_short
        .chunks(MONTHS_PER_ROW)
        .map(|row| row.to_vec())
        .collect()
}

/// Zero-based month index of a month-grid cell.
pub fn month_index(row: usize, column: usize) -> u32 {
    (row * MONTHS_PER_ROW + column) as u32
}
