//! Unit conversions and date-of-birth to age calculations.
//!
//! The concentration conversions reject infinite inputs but deliberately let
//! NaN propagate through the arithmetic unchanged; callers that feed
//! missing lab values as NaN get NaN back instead of an error.

use chrono::{Datelike, NaiveDate, Utc};

use crate::error::{MedimetryError, Result};

/// Conversion factor between umol/L and mg/dL (18.01528 mg per mmol)
const MGDL_PER_UMOLL: f64 = 18.01528;

fn reject_infinite(value: f64, target_unit: &str) -> Result<()> {
    if value == f64::INFINITY {
        return Err(MedimetryError::invalid_input(
            format!("cannot convert infinity to {target_unit}"),
            "a finite value",
        ));
    }
    if value == f64::NEG_INFINITY {
        return Err(MedimetryError::invalid_input(
            format!("cannot convert negative infinity to {target_unit}"),
            "a finite value",
        ));
    }
    // NaN passes through unchanged, see module docs
    Ok(())
}

/// Convert a concentration from umol/L to mg/dL.
pub fn umoll2mgdl(umoll: f64) -> Result<f64> {
    reject_infinite(umoll, "mg/dL")?;
    Ok(umoll * MGDL_PER_UMOLL)
}

/// Convert a concentration from mg/dL to umol/L.
pub fn mgdl2umoll(mgdl: f64) -> Result<f64> {
    reject_infinite(mgdl, "umol/L")?;
    Ok(mgdl / MGDL_PER_UMOLL)
}

/// Age in whole years at the reference date.
///
/// The reference date defaults to today (UTC). The year difference is
/// decremented by one when the birthday has not yet been reached in the
/// reference year.
#[must_use]
pub fn dob2age(dob: NaiveDate, reference: Option<NaiveDate>) -> i32 {
    let today = reference.unwrap_or_else(|| {
        log::trace!("no reference date given, using current UTC date");
        Utc::now().date_naive()
    });

    let mut years = today.year() - dob.year();
    // Birthday not yet reached in the reference year
    if today.month() < dob.month() || (today.month() == dob.month() && today.day() < dob.day()) {
        years -= 1;
    }
    years
}

/// Age as (years, months, days) at the reference date.
///
/// The reference date defaults to today (UTC). A negative day remainder
/// borrows one month and adds the actual day count of the month preceding
/// the reference month (leap-aware); a negative month remainder then
/// borrows one year.
#[must_use]
pub fn dob2age_parts(dob: NaiveDate, reference: Option<NaiveDate>) -> (i32, i32, i32) {
    let today = reference.unwrap_or_else(|| Utc::now().date_naive());

    let mut years = today.year() - dob.year();
    let mut months = today.month() as i32 - dob.month() as i32;
    let mut days = today.day() as i32 - dob.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if today.month() == 1 {
            (today.year() - 1, 12)
        } else {
            (today.year(), today.month() - 1)
        };
        days += days_in_month(prev_year, prev_month) as i32;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    (years, months, days)
}

/// Day count of a calendar month, leap-aware
const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}
