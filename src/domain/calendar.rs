//! Calendar rules
//!
//! Age computation and the annual dues window.

use chrono::{Datelike, Months, NaiveDate};

/// Number of monthly installments an annual dues enrollment is split into.
pub const INSTALLMENT_COUNT: u32 = 10;

/// Day of the month every dues date falls on.
const DUES_DAY: u32 = 15;

/// Age in whole years on `today`.
///
/// Calendar-year difference, minus one when today's (month, day) comes
/// before the birthday. Birth dates in the future yield negative ages.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// First day of the dues window: January 15 of `year`.
///
/// Returns `None` only for years chrono cannot represent.
pub fn dues_start(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, 1, DUES_DAY)
}

/// Last day of the dues window: January 14 of the following year.
pub fn dues_end(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, DUES_DAY - 1)
}

/// Due dates of the installments: `start + i months` for i in 0..count.
pub fn installment_due_dates(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    (0..count)
        .filter_map(|i| start.checked_add_months(Months::new(i)))
        .collect()
}
