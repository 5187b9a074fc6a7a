//! Conversion between Gregorian and Hebrew calendar dates.
//!
//! ```
//! use jewish_date::{BasicJewishDate, GregorianDate, JewishMonth, to_gregorian_date, to_jewish_date};
//!
//! let date = to_jewish_date(GregorianDate::new(2022, 9, 26).unwrap());
//! assert_eq!("1 Tishri 5783", date.to_string());
//! assert_eq!(1, date.month);
//!
//! let adar = BasicJewishDate::new(5782, JewishMonth::AdarII, 1).unwrap();
//! assert_eq!("2022-03-04", to_gregorian_date(&adar).to_string());
//! ```

mod consts;
mod month;
mod prelude;
mod types;

pub mod format;
pub mod gematria;
pub mod hebrew;
pub mod julian;

pub use consts::*;
pub use format::{format_jewish_date, format_jewish_date_in_hebrew};
pub use gematria::{
    BasicJewishDateHebrew, GematriaOptions, convert_number_to_hebrew, convert_year_to_short_hebrew,
    get_jewish_month_in_hebrew, number_to_gematria, to_hebrew_jewish_date,
};
pub use hebrew::{hebrew_month_days, hebrew_to_jd, jd_to_hebrew};
pub use julian::{gregorian_to_jd, jd_to_gregorian};
pub use month::{
    JewishMonth, get_index_by_jewish_month, get_jewish_month_by_index, get_jewish_months_in_order,
};
pub use types::GregorianDate;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{error, trace, warn};

/// Errors from building or parsing dates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[error("Invalid year: {0} (must be {min} to {max})", min = MIN_GREGORIAN_YEAR, max = MAX_GREGORIAN_YEAR)]
    InvalidYear(i32),
    #[error("Invalid Hebrew year: {0} (must be {min} to {max})", min = MIN_HEBREW_YEAR, max = MAX_HEBREW_YEAR)]
    InvalidHebrewYear(i32),
    #[error("Invalid day {day} for {month} {year}")]
    InvalidHebrewDay {
        year: i32,
        month: JewishMonth,
        day: u8,
    },
    #[error("{month} does not occur in year {year}")]
    MonthNotInYear { year: i32, month: JewishMonth },
    #[error("Unknown month name: {0}")]
    UnknownMonth(String),
    #[error("Empty date string")]
    EmptyInput,
}

/// A Hebrew date as the caller names it, without its position in the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicJewishDate {
    pub year: i32,
    pub month_name: JewishMonth,
    pub day: u8,
}

/// A Hebrew date.
///
/// `month` is the position of `month_name` in
/// [`get_jewish_months_in_order`] for `year`, so Tishri is `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewishDate {
    pub year: i32,
    pub month_name: JewishMonth,
    pub month: i32,
    pub day: u8,
}

impl BasicJewishDate {
    /// Creates a date, checking that the month occurs in the year and the day
    /// in the month.
    ///
    /// `Adar` and `AdarI` are accepted in any year since both name the twelfth
    /// month of the calendar order.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidHebrewYear` for years outside
    /// `MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR`,
    /// `ParseError::MonthNotInYear` for `None` or a common-year `AdarII`, and
    /// `ParseError::InvalidHebrewDay` for a day outside the month.
    pub fn new(year: i32, month_name: JewishMonth, day: u8) -> Result<Self, ParseError> {
        if !(MIN_HEBREW_YEAR..=MAX_HEBREW_YEAR).contains(&year) {
            return Err(ParseError::InvalidHebrewYear(year));
        }
        if !month_name.occurs_in(is_leap_year(year)) {
            return Err(ParseError::MonthNotInYear {
                year,
                month: month_name,
            });
        }
        if day == 0 || day > calc_days_in_month(year, month_name) {
            return Err(ParseError::InvalidHebrewDay {
                year,
                month: month_name,
                day,
            });
        }
        Ok(Self {
            year,
            month_name,
            day,
        })
    }
}

impl From<JewishDate> for BasicJewishDate {
    fn from(date: JewishDate) -> Self {
        Self {
            year: date.year,
            month_name: date.month_name,
            day: date.day,
        }
    }
}

impl TryFrom<BasicJewishDate> for JewishDate {
    type Error = ParseError;

    /// Validates the date and fills in its position in the year. A leap-year
    /// `Adar` comes back as `AdarI`, a common-year `AdarI` as `Adar`.
    fn try_from(date: BasicJewishDate) -> Result<Self, Self::Error> {
        let BasicJewishDate {
            year,
            month_name,
            day,
        } = BasicJewishDate::new(date.year, date.month_name, date.day)?;
        let month_name = month_name.resolve(is_leap_year(year));
        Ok(Self {
            year,
            month_name,
            month: month_position(month_name, year),
            day,
        })
    }
}

impl From<GregorianDate> for JewishDate {
    fn from(date: GregorianDate) -> Self {
        to_jewish_date(date)
    }
}

impl From<&BasicJewishDate> for GregorianDate {
    fn from(date: &BasicJewishDate) -> Self {
        to_gregorian_date(date)
    }
}

impl fmt::Display for JewishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_jewish_date(self, None))
    }
}

impl fmt::Display for BasicJewishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_name, self.year)
    }
}

impl FromStr for BasicJewishDate {
    type Err = ParseError;

    /// Parses the `day monthName year` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let [day, month_name, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let day = day
            .parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        let month_name = month_name.parse::<JewishMonth>()?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;

        Self::new(year, month_name, day)
    }
}

/// Determines if a Hebrew year is a leap year (has Adar I and Adar II).
pub fn is_leap_year(year: i32) -> bool {
    LEAP_YEAR_RESIDUES.contains(&year.rem_euclid(METONIC_CYCLE))
}

/// Position of `month_name` in the ordered months of `year`, or `-1` when it
/// is not there.
fn month_position(month_name: JewishMonth, year: i32) -> i32 {
    let position = get_jewish_months_in_order(year)
        .iter()
        .position(|month| *month == month_name)
        .and_then(|index| i32::try_from(index).ok());
    debug_assert!(position.is_some(), "{month_name} is not a month of {year}");

    position.unwrap_or_else(|| {
        error!(%month_name, year, "month missing from the year's month list");
        -1
    })
}

/// Converts a Gregorian date to a Hebrew date.
///
/// ```
/// use jewish_date::{GregorianDate, JewishMonth, to_jewish_date};
///
/// let date = to_jewish_date(GregorianDate::new(2022, 2, 2).unwrap());
/// assert_eq!((5782, JewishMonth::AdarI, 6, 1), (date.year, date.month_name, date.month, date.day));
/// ```
pub fn to_jewish_date(date: GregorianDate) -> JewishDate {
    let jd = date.jd();
    let (year, month_index, day) = jd_to_hebrew(jd);
    trace!(%date, jd, year, month_index, day, "gregorian to hebrew");

    let month_name = get_jewish_month_by_index(month_index, year);
    JewishDate {
        year,
        month_name,
        month: month_position(month_name, year),
        day: narrow_day(day),
    }
}

/// Converts a Hebrew date to a Gregorian date.
///
/// The month name is not checked against the year; use
/// [`BasicJewishDate::new`] to build a validated date.
pub fn to_gregorian_date(date: &BasicJewishDate) -> GregorianDate {
    let month_index = get_index_by_jewish_month(date.month_name);
    if month_index == 0 {
        warn!(%date, "converting a date without a month");
    }

    let jd = hebrew_to_jd(date.year, month_index, i32::from(date.day));
    let gregorian = GregorianDate::from_jd(jd);
    trace!(%date, month_index, jd, %gregorian, "hebrew to gregorian");
    gregorian
}

/// Number of days in a month of a Hebrew year.
///
/// ```
/// use jewish_date::{JewishMonth, calc_days_in_month};
///
/// assert_eq!(29, calc_days_in_month(5784, JewishMonth::Cheshvan));
/// assert_eq!(30, calc_days_in_month(5783, JewishMonth::Cheshvan));
/// ```
pub fn calc_days_in_month(year: i32, month_name: JewishMonth) -> u8 {
    let month_index = get_index_by_jewish_month(month_name);
    if month_index == 0 {
        warn!(year, "days in month requested without a month");
    }
    narrow_day(hebrew_month_days(year, month_index))
}

/// Day numbers from the kernels lie in `1..=30`.
fn narrow_day(day: i32) -> u8 {
    debug_assert!((1..=30).contains(&day), "day {day} out of range");
    u8::try_from(day).unwrap_or_default()
}
