//! Arithmetic of the fixed Hebrew calendar.
//!
//! Months here use calendar order: Nisan is `1`, Elul `6`, Tishri `7`,
//! Adar (Adar I in a leap year) `12` and Adar II `13`. A year still begins
//! at Tishri, so walking a year runs `7..=12|13` and then `1..=6`.

use crate::consts::{
    HEBREW_EPOCH, METONIC_CYCLE, MOLAD_BASE_PARTS, MOLAD_MONTH_PARTS, MONTHS_PER_CYCLE, NISAN,
    PARTS_PER_DAY, TISHRI, YEAR_ESTIMATE_DENOMINATOR, YEAR_ESTIMATE_NUMERATOR,
};

/// Determines if a Hebrew year has thirteen months.
///
/// Seven years of every 19-year cycle are leap years.
pub fn hebrew_leap(year: i32) -> bool {
    (i64::from(year) * 7 + 1).rem_euclid(i64::from(METONIC_CYCLE)) < 7
}

/// Number of months in a Hebrew year (12, or 13 in a leap year)
pub fn hebrew_year_months(year: i32) -> i32 {
    if hebrew_leap(year) { 13 } else { 12 }
}

/// Days from the epoch to the molad of Tishri of `year`, postponed by a day
/// when that day would make Rosh Hashanah fall on Sunday, Wednesday or Friday.
pub fn year_start_delay(year: i32) -> i64 {
    let months = (MONTHS_PER_CYCLE * i64::from(year) - 234).div_euclid(i64::from(METONIC_CYCLE));
    let parts = MOLAD_BASE_PARTS + MOLAD_MONTH_PARTS * months;
    let mut day = months * 29 + parts.div_euclid(PARTS_PER_DAY);

    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day += 1;
    }
    day
}

/// Further postponement keeping year lengths legal: a following year of 356
/// days pushes this one by two, a 382-day year behind it pushes by one.
pub fn adjacent_year_delay(year: i32) -> i64 {
    let last = year_start_delay(year - 1);
    let present = year_start_delay(year);
    let next = year_start_delay(year + 1);

    if next - present == 356 {
        2
    } else if present - last == 382 {
        1
    } else {
        0
    }
}

/// Number of days in a Hebrew year.
#[allow(clippy::cast_possible_truncation)]
pub fn hebrew_year_days(year: i32) -> i32 {
    (hebrew_to_jd(year + 1, TISHRI, 1) - hebrew_to_jd(year, TISHRI, 1)) as i32
}

/// Number of days in `month` (calendar order) of `year`.
///
/// ```
/// use jewish_date::hebrew::hebrew_month_days;
///
/// assert_eq!(30, hebrew_month_days(5783, 8)); // Cheshvan of a complete year
/// assert_eq!(29, hebrew_month_days(5784, 8));
/// ```
pub fn hebrew_month_days(year: i32, month: i32) -> i32 {
    match month {
        // Iyyar, Tammuz, Elul, Tevet, Adar II
        2 | 4 | 6 | 10 | 13 => 29,
        // Adar has 30 days only as Adar I
        12 if !hebrew_leap(year) => 29,
        // Cheshvan is long only in a complete year
        8 if hebrew_year_days(year).rem_euclid(10) != 5 => 29,
        // Kislev is short only in a deficient year
        9 if hebrew_year_days(year).rem_euclid(10) == 3 => 29,
        _ => 30,
    }
}

/// Converts a Hebrew date (calendar-order month) to its Julian day.
pub fn hebrew_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let months = hebrew_year_months(year);
    let start = year_start_delay(year) + adjacent_year_delay(year) + i64::from(day) + 1;

    let elapsed: i32 = if month < TISHRI {
        // Whole autumn-to-winter half of the year, then the spring months
        (TISHRI..=months)
            .chain(NISAN..month)
            .map(|mon| hebrew_month_days(year, mon))
            .sum()
    } else {
        (TISHRI..month).map(|mon| hebrew_month_days(year, mon)).sum()
    };

    HEBREW_EPOCH + (start + i64::from(elapsed)) as f64
}

/// Converts a Julian day to a Hebrew date, as `(year, month, day)` with the
/// month in calendar order.
///
/// The year is estimated from the mean year length and then found by a
/// forward scan; the month likewise.
#[allow(clippy::cast_possible_truncation)]
pub fn jd_to_hebrew(jd: f64) -> (i32, i32, i32) {
    let jd = jd.floor() + 0.5;
    let count =
        ((jd - HEBREW_EPOCH) * YEAR_ESTIMATE_NUMERATOR / YEAR_ESTIMATE_DENOMINATOR).floor() as i32;

    let mut year = count - 1;
    while jd >= hebrew_to_jd(year + 1, TISHRI, 1) {
        year += 1;
    }

    let first = if jd < hebrew_to_jd(year, NISAN, 1) {
        TISHRI
    } else {
        NISAN
    };
    let mut month = first;
    while jd > hebrew_to_jd(year, month, hebrew_month_days(year, month)) {
        month += 1;
    }
    debug_assert!(month <= hebrew_year_months(year), "month scan ran past year end");

    let day = (jd - hebrew_to_jd(year, month, 1)) as i32 + 1;
    (year, month, day)
}
