use crate::ParseError;
use crate::consts::{
    DATE_SEPARATOR, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, MAX_GREGORIAN_YEAR, MAX_MONTH,
    MIN_DAY, MIN_GREGORIAN_YEAR,
};
use crate::julian::{gregorian_to_jd, is_gregorian_leap, jd_to_gregorian};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A whole day in the proleptic Gregorian calendar.
///
/// Years use astronomical numbering (1 BC is `0`). Year, month and day are
/// validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGregorianDate")]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

#[derive(Deserialize)]
struct RawGregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl TryFrom<RawGregorianDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(raw: RawGregorianDate) -> Result<Self, Self::Error> {
        Self::new(raw.year, raw.month, raw.day)
    }
}

impl GregorianDate {
    /// Creates a new date, validating year, month and day
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` outside
    /// `MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR`, `ParseError::InvalidMonth` if
    /// the month is not `1..=12`, or `ParseError::InvalidDay` if the day does
    /// not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ParseError> {
        if !(MIN_GREGORIAN_YEAR..=MAX_GREGORIAN_YEAR).contains(&year) {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Builds the date containing the Julian day `jd`.
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day) = jd_to_gregorian(jd);
        debug_assert!((1..=12).contains(&month) && (1..=31).contains(&day));
        Self {
            year,
            month: u8::try_from(month).unwrap_or_default(),
            day: u8::try_from(day).unwrap_or_default(),
        }
    }

    /// Julian day of this date at midnight
    pub fn jd(&self) -> f64 {
        gregorian_to_jd(self.year, i32::from(self.month), i32::from(self.day))
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Day of week in ISO-8601 numbering (`1..=7` for Monday through Sunday)
    #[allow(clippy::cast_possible_truncation)]
    pub fn day_of_week(&self) -> u8 {
        // Julian day number 0 is a Monday
        ((self.jd() + 0.5).rem_euclid(7.0) as u8) + 1
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}", self.year.unsigned_abs())?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(f, "{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}", self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        // A leading separator is the sign of a proleptic year
        let (negative, rest) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let parts: Vec<&str> = rest.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let invalid = || ParseError::InvalidFormat(trimmed.to_owned());
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let day = day.parse::<u8>().map_err(|_| invalid())?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

// Helper functions

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        assert!(GregorianDate::new(2022, 9, 26).is_ok());
        assert!(GregorianDate::new(0, 1, 1).is_ok());
        assert!(GregorianDate::new(-100, 12, 31).is_ok());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_new_invalid_month() {
        assert!(matches!(
            GregorianDate::new(2024, 0, 1),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_new_invalid_day() {
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(GregorianDate::new(2023, 4, 0).is_err());
        assert!(GregorianDate::new(2023, 4, 31).is_err());
    }

    #[test]
    fn test_new_year_bounds() {
        assert!(GregorianDate::new(MIN_GREGORIAN_YEAR, 1, 1).is_ok());
        assert!(GregorianDate::new(MAX_GREGORIAN_YEAR, 12, 31).is_ok());
        assert!(matches!(
            GregorianDate::new(i32::MIN, 1, 1),
            Err(ParseError::InvalidYear(i32::MIN))
        ));
        assert!(matches!(
            GregorianDate::new(MAX_GREGORIAN_YEAR + 1, 1, 1),
            Err(ParseError::InvalidYear(_))
        ));
        assert!(matches!(
            "-2147483647-01-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_jd_at_year_bounds() {
        for date in [
            GregorianDate::new(MIN_GREGORIAN_YEAR, 1, 1).unwrap(),
            GregorianDate::new(MAX_GREGORIAN_YEAR, 12, 31).unwrap(),
        ] {
            assert_eq!(GregorianDate::from_jd(date.jd()), date);
        }
    }

    #[test]
    fn test_century_non_leap_year() {
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_jd_round_trip() {
        let date = GregorianDate::new(2022, 9, 26).unwrap();
        assert_eq!(date.jd(), 2_459_848.5);
        assert_eq!(GregorianDate::from_jd(date.jd()), date);
    }

    #[test]
    fn test_day_of_week() {
        // Saturday
        assert_eq!(GregorianDate::new(2000, 1, 1).unwrap().day_of_week(), 6);
        // Thursday
        assert_eq!(GregorianDate::new(1970, 1, 1).unwrap().day_of_week(), 4);
        // Monday, Rosh Hashanah 5783
        assert_eq!(GregorianDate::new(2022, 9, 26).unwrap().day_of_week(), 1);
    }

    #[test]
    fn test_display() {
        assert_eq!(GregorianDate::new(2022, 2, 2).unwrap().to_string(), "2022-02-02");
        assert_eq!(GregorianDate::new(1, 1, 1).unwrap().to_string(), "0001-01-01");
        assert_eq!(GregorianDate::new(-44, 3, 15).unwrap().to_string(), "-0044-03-15");
    }

    #[test]
    fn test_parse() {
        let date: GregorianDate = "2022-09-26".parse().unwrap();
        assert_eq!(date, GregorianDate::new(2022, 9, 26).unwrap());

        let date: GregorianDate = " 0000-01-01 ".parse().unwrap();
        assert_eq!(date, GregorianDate::new(0, 1, 1).unwrap());

        let date: GregorianDate = "-0044-03-15".parse().unwrap();
        assert_eq!(date.year(), -44);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<GregorianDate>(), Err(ParseError::EmptyInput)));
        assert!(matches!(
            "2022-09".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2022-ab-01".parse::<GregorianDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2022-02-30".parse::<GregorianDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering() {
        let a = GregorianDate::new(-1, 12, 31).unwrap();
        let b = GregorianDate::new(0, 1, 1).unwrap();
        let c = GregorianDate::new(0, 2, 1).unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_serde() {
        let date = GregorianDate::new(2022, 9, 26).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#"{"year":2022,"month":9,"day":26}"#);
        let back: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<GregorianDate, _> =
            serde_json::from_str(r#"{"year":2023,"month":2,"day":29}"#);
        assert!(result.is_err());
    }
}
