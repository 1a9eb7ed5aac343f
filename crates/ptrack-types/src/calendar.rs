//! Calendar month arithmetic.
//!
//! Month addition clamps the day-of-month to the length of the destination
//! month, so Jan 31 + 1 month is Feb 28 (or Feb 29 in a leap year).

use chrono::{Datelike, Months, NaiveDate};

/// Number of calendar months a lot stays valid after it is earned.
pub const LOT_LIFETIME_MONTHS: i32 = 12;

/// Number of days in `month` (1-based) of `year`, or `None` for an invalid
/// month or a year outside chrono's range.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if NaiveDate::from_ymd_opt(year, 1, 1)?.leap_year() => Some(29),
        2 => Some(28),
        _ => None,
    }
}

/// Add `months` whole calendar months to `date` (negative values step back).
///
/// The day is clamped to the length of the destination month. Returns `None`
/// if the result falls outside chrono's representable range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let step = Months::new(months.unsigned_abs());
    if months >= 0 {
        date.checked_add_months(step)
    } else {
        date.checked_sub_months(step)
    }
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn jan_31_plus_one_clamps_to_feb_28() {
        assert_eq!(add_months(d(2023, 1, 31), 1), Some(d(2023, 2, 28)));
    }

    #[test]
    fn jan_31_plus_one_clamps_to_feb_29_in_leap_year() {
        assert_eq!(add_months(d(2024, 1, 31), 1), Some(d(2024, 2, 29)));
    }

    #[test]
    fn leap_day_plus_twelve_clamps_to_feb_28() {
        assert_eq!(add_months(d(2024, 2, 29), 12), Some(d(2025, 2, 28)));
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(add_months(d(2023, 11, 15), 3), Some(d(2024, 2, 15)));
    }

    #[test]
    fn negative_months_step_back() {
        assert_eq!(add_months(d(2024, 3, 31), -1), Some(d(2024, 2, 29)));
        assert_eq!(add_months(d(2024, 1, 10), -13), Some(d(2022, 12, 10)));
    }

    #[test]
    fn zero_months_is_identity() {
        assert_eq!(add_months(d(2023, 7, 19), 0), Some(d(2023, 7, 19)));
    }

    #[test]
    fn extreme_month_counts_do_not_panic() {
        assert_eq!(add_months(d(2023, 1, 1), i32::MAX), None);
        assert_eq!(add_months(d(2023, 1, 1), i32::MIN), None);
    }

    #[test]
    fn out_of_range_is_none() {
        assert_eq!(add_months(NaiveDate::MAX, 12), None);
    }

    #[test]
    fn days_in_month_handles_century_leap_rules() {
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn first_of_month_resets_day() {
        assert_eq!(first_of_month(d(2024, 2, 29)), d(2024, 2, 1));
    }

    proptest! {
        #[test]
        fn twelve_months_keeps_month_and_clamped_day(
            year in 1900i32..2200,
            month in 1u32..=12,
            day in 1u32..=31,
        ) {
            prop_assume!(day <= days_in_month(year, month).unwrap());
            let start = d(year, month, day);
            let later = add_months(start, LOT_LIFETIME_MONTHS).unwrap();
            prop_assert_eq!(later.year(), year + 1);
            prop_assert_eq!(later.month(), month);
            prop_assert_eq!(later.day(), day.min(days_in_month(year + 1, month).unwrap()));
        }

        #[test]
        fn result_never_exceeds_original_day(
            year in 1900i32..2200,
            month in 1u32..=12,
            day in 1u32..=28,
            months in -240i32..240,
        ) {
            let start = d(year, month, day);
            prop_assert_eq!(add_months(start, months).unwrap().day(), day);
        }
    }
}
