//! Julian day arithmetic for the proleptic Gregorian calendar.
//!
//! Julian days are noon-based, so a civil date at midnight lands on a
//! half-integer (`2000-01-01` is `2451544.5`). Years use astronomical
//! numbering: 1 BC is year `0`, 2 BC is `-1`.

use crate::consts::{
    CENTURY_CYCLE, DAYS_PER_CENTURY, DAYS_PER_QUAD, DAYS_PER_QUADRICENTENNIAL, DAYS_PER_YEAR,
    GREGORIAN_CYCLE, GREGORIAN_EPOCH, LEAP_YEAR_CYCLE,
};

/// Floored modulo: the result has the sign of `b`.
///
/// `modulo(-1.0, 5.0)` is `4.0`, where the `%` operator would give `-1.0`.
pub fn modulo(a: f64, b: f64) -> f64 {
    a - b * (a / b).floor()
}

/// Determines if `year` is a leap year in the proleptic Gregorian calendar.
pub const fn is_gregorian_leap(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && !(year % CENTURY_CYCLE == 0 && year % GREGORIAN_CYCLE != 0)
}

/// Converts a Gregorian calendar date to its Julian day.
///
/// ```
/// use jewish_date::julian::gregorian_to_jd;
///
/// assert_eq!(2_451_544.5, gregorian_to_jd(2000, 1, 1));
/// ```
pub fn gregorian_to_jd(year: i32, month: i32, day: i32) -> f64 {
    let prior_years = f64::from(year - 1);
    let leap_correction = if month <= 2 {
        0.0
    } else if is_gregorian_leap(year) {
        -1.0
    } else {
        -2.0
    };

    GREGORIAN_EPOCH - 1.0
        + DAYS_PER_YEAR * prior_years
        + (prior_years / 4.0).floor()
        - (prior_years / 100.0).floor()
        + (prior_years / 400.0).floor()
        + (f64::from(367 * month - 362) / 12.0 + leap_correction + f64::from(day)).floor()
}

/// Converts a Julian day to a Gregorian calendar date, as `(year, month, day)`.
///
/// Any time of day carried by `jd` is discarded.
///
/// ```
/// use jewish_date::julian::jd_to_gregorian;
///
/// assert_eq!((2000, 1, 1), jd_to_gregorian(2_451_544.5));
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn jd_to_gregorian(jd: f64) -> (i32, i32, i32) {
    let wjd = (jd - 0.5).floor() + 0.5;
    let depoch = wjd - GREGORIAN_EPOCH;
    let quadricent = (depoch / DAYS_PER_QUADRICENTENNIAL).floor();
    let dqc = modulo(depoch, DAYS_PER_QUADRICENTENNIAL);
    let cent = (dqc / DAYS_PER_CENTURY).floor();
    let dcent = modulo(dqc, DAYS_PER_CENTURY);
    let quad = (dcent / DAYS_PER_QUAD).floor();
    let dquad = modulo(dcent, DAYS_PER_QUAD);
    let yindex = (dquad / DAYS_PER_YEAR).floor();

    let mut year = (quadricent * 400.0 + cent * 100.0 + quad * 4.0 + yindex) as i32;
    // The last day of a leap cycle belongs to the year already counted.
    if !(cent == 4.0 || yindex == 4.0) {
        year += 1;
    }

    let yearday = wjd - gregorian_to_jd(year, 1, 1);
    let leapadj = if wjd < gregorian_to_jd(year, 3, 1) {
        0.0
    } else if is_gregorian_leap(year) {
        1.0
    } else {
        2.0
    };
    let month = (((yearday + leapadj) * 12.0 + 373.0) / 367.0).floor() as i32;
    let day = (wjd - gregorian_to_jd(year, month, 1)) as i32 + 1;

    (year, month, day)
}
