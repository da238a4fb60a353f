//! Calendar arithmetic for the monthly simulation clock
//!
//! The simulation ticks on calendar month-ends. Tenure is measured two ways:
//! whole calendar years (retirement) and fractional years of 365.25 days
//! (tenure-based promotion).

use chrono::{Datelike, Months, NaiveDate};

/// Average year length used for fractional service time
pub const DAYS_PER_YEAR: f64 = 365.25;

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// `count` consecutive month-end dates starting with the month of `anchor`
pub fn month_ends(anchor: NaiveDate, count: u32) -> Vec<NaiveDate> {
    let start = first_of_month(anchor);
    (0..count)
        .map_while(|offset| start.checked_add_months(Months::new(offset)))
        .map(month_end)
        .collect()
}

/// Whole-month difference between the calendar months of two dates (days ignored)
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32
}

/// Shift a date by whole years, clamping Feb 29 to Feb 28 where needed
pub fn add_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs() * 12);
    if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Calendar-year difference used by the retirement rule
pub fn calendar_years_between(start: NaiveDate, end: NaiveDate) -> i32 {
    end.year() - start.year()
}

/// Fractional service years from `start` to `end`
pub fn service_years(start: NaiveDate, end: NaiveDate) -> f64 {
    (end - start).num_days() as f64 / DAYS_PER_YEAR
}

/// True when `date` falls in the baseline's calendar month of a later year
pub fn is_anniversary(date: NaiveDate, baseline: NaiveDate) -> bool {
    date.month() == baseline.month() && date.year() > baseline.year()
}
