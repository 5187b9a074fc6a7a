//! Hebrew month names and the two orderings they are counted in.
//!
//! Calendar order numbers months from Nisan (`1`) and is what the kernel in
//! [`crate::hebrew`] computes with. Year order lists them from Tishri, and
//! is what [`crate::JewishDate::month`] reports a position in.

use crate::ParseError;
use crate::hebrew::hebrew_leap;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Hebrew month.
///
/// `Adar` names the single Adar of a common year; leap years have `AdarI`
/// and `AdarII` in its place. `None` stands for an unknown month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum JewishMonth {
    None,
    Tishri,
    Cheshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl JewishMonth {
    /// All variants, `None` first
    pub const ALL: [Self; 15] = [
        Self::None,
        Self::Tishri,
        Self::Cheshvan,
        Self::Kislev,
        Self::Tevet,
        Self::Shevat,
        Self::Adar,
        Self::AdarI,
        Self::AdarII,
        Self::Nisan,
        Self::Iyyar,
        Self::Sivan,
        Self::Tammuz,
        Self::Av,
        Self::Elul,
    ];

    /// Resolves the `Adar` slot for the kind of year it falls in.
    ///
    /// `Adar` and `AdarI` are the same month under two names; every other
    /// month is returned unchanged.
    pub const fn resolve(self, leap: bool) -> Self {
        match self {
            Self::Adar | Self::AdarI => {
                if leap {
                    Self::AdarI
                } else {
                    Self::Adar
                }
            }
            other => other,
        }
    }

    /// Returns whether this month exists in a year of the given kind
    pub const fn occurs_in(self, leap: bool) -> bool {
        match self {
            Self::None => false,
            Self::AdarII => leap,
            _ => true,
        }
    }
}

impl FromStr for JewishMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        Self::ALL
            .into_iter()
            .find(|month| month.to_string().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseError::UnknownMonth(trimmed.to_owned()))
    }
}

/// Calendar-order index of a month: Nisan is `1`, Tishri `7`, Adar and Adar I
/// `12`, Adar II `13`. `None` has index `0`, which is never a valid month.
///
/// ```
/// use jewish_date::{JewishMonth, get_index_by_jewish_month};
///
/// assert_eq!(8, get_index_by_jewish_month(JewishMonth::Cheshvan));
/// assert_eq!(0, get_index_by_jewish_month(JewishMonth::None));
/// ```
pub const fn get_index_by_jewish_month(month: JewishMonth) -> i32 {
    match month {
        JewishMonth::None => 0,
        JewishMonth::Nisan => 1,
        JewishMonth::Iyyar => 2,
        JewishMonth::Sivan => 3,
        JewishMonth::Tammuz => 4,
        JewishMonth::Av => 5,
        JewishMonth::Elul => 6,
        JewishMonth::Tishri => 7,
        JewishMonth::Cheshvan => 8,
        JewishMonth::Kislev => 9,
        JewishMonth::Tevet => 10,
        JewishMonth::Shevat => 11,
        JewishMonth::Adar | JewishMonth::AdarI => 12,
        JewishMonth::AdarII => 13,
    }
}

/// Month at calendar-order `index` in `year`.
///
/// Index `12` resolves to `AdarI` in a leap year and `Adar` otherwise.
/// Out-of-range indices give `JewishMonth::None`.
pub fn get_jewish_month_by_index(index: i32, year: i32) -> JewishMonth {
    const CALENDAR_ORDER: [JewishMonth; 14] = [
        JewishMonth::None,
        JewishMonth::Nisan,
        JewishMonth::Iyyar,
        JewishMonth::Sivan,
        JewishMonth::Tammuz,
        JewishMonth::Av,
        JewishMonth::Elul,
        JewishMonth::Tishri,
        JewishMonth::Cheshvan,
        JewishMonth::Kislev,
        JewishMonth::Tevet,
        JewishMonth::Shevat,
        JewishMonth::Adar,
        JewishMonth::AdarII,
    ];

    usize::try_from(index)
        .ok()
        .and_then(|i| CALENDAR_ORDER.get(i))
        .map_or(JewishMonth::None, |month| month.resolve(hebrew_leap(year)))
}

/// Months of `year` in the order the year runs, starting with Tishri at
/// position `1`. Position `0` holds `JewishMonth::None`.
///
/// ```
/// use jewish_date::{JewishMonth, get_jewish_months_in_order};
///
/// assert_eq!(JewishMonth::Elul, get_jewish_months_in_order(5781)[12]);
/// assert_eq!(JewishMonth::Av, get_jewish_months_in_order(5782)[12]);
/// ```
pub fn get_jewish_months_in_order(year: i32) -> Vec<JewishMonth> {
    const YEAR_ORDER: [JewishMonth; 14] = [
        JewishMonth::None,
        JewishMonth::Tishri,
        JewishMonth::Cheshvan,
        JewishMonth::Kislev,
        JewishMonth::Tevet,
        JewishMonth::Shevat,
        JewishMonth::AdarI,
        JewishMonth::AdarII,
        JewishMonth::Nisan,
        JewishMonth::Iyyar,
        JewishMonth::Sivan,
        JewishMonth::Tammuz,
        JewishMonth::Av,
        JewishMonth::Elul,
    ];

    let leap = hebrew_leap(year);
    YEAR_ORDER
        .into_iter()
        .filter(|month| leap || *month != JewishMonth::AdarII)
        .map(|month| month.resolve(leap))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_by_month() {
        assert_eq!(get_index_by_jewish_month(JewishMonth::Cheshvan), 8);
        assert_eq!(get_index_by_jewish_month(JewishMonth::Nisan), 1);
        assert_eq!(get_index_by_jewish_month(JewishMonth::Adar), 12);
        assert_eq!(get_index_by_jewish_month(JewishMonth::AdarI), 12);
        assert_eq!(get_index_by_jewish_month(JewishMonth::AdarII), 13);
        assert_eq!(get_index_by_jewish_month(JewishMonth::None), 0);
    }

    #[test]
    fn test_month_by_index() {
        assert_eq!(get_jewish_month_by_index(8, 5783), JewishMonth::Cheshvan);
        assert_eq!(get_jewish_month_by_index(12, 5783), JewishMonth::Adar);
        assert_eq!(get_jewish_month_by_index(12, 5782), JewishMonth::AdarI);
        assert_eq!(get_jewish_month_by_index(13, 5782), JewishMonth::AdarII);
    }

    #[test]
    fn test_month_by_index_out_of_range() {
        assert_eq!(get_jewish_month_by_index(0, 5783), JewishMonth::None);
        assert_eq!(get_jewish_month_by_index(15, 5783), JewishMonth::None);
        assert_eq!(get_jewish_month_by_index(-1, 5783), JewishMonth::None);
    }

    #[test]
    fn test_orderings_are_consistent() {
        for year in [5781, 5782, 5783, 5784] {
            let leap = hebrew_leap(year);
            for index in 1..=13 {
                let month = get_jewish_month_by_index(index, year);
                if index == 13 && !leap {
                    // No Adar II; the lookup table still names it
                    continue;
                }
                assert_eq!(get_index_by_jewish_month(month), index, "{year} {month}");
                assert!(get_jewish_months_in_order(year).contains(&month));
            }
        }
    }

    #[test]
    fn test_months_in_order_common_year() {
        let months = get_jewish_months_in_order(5781);
        assert_eq!(months.len(), 13);
        assert_eq!(months[0], JewishMonth::None);
        assert_eq!(months[1], JewishMonth::Tishri);
        assert_eq!(months[6], JewishMonth::Adar);
        assert_eq!(months[7], JewishMonth::Nisan);
        assert_eq!(months[12], JewishMonth::Elul);
        assert!(!months.contains(&JewishMonth::AdarI));
        assert!(!months.contains(&JewishMonth::AdarII));
    }

    #[test]
    fn test_months_in_order_leap_year() {
        let months = get_jewish_months_in_order(5782);
        assert_eq!(months.len(), 14);
        assert_eq!(months[6], JewishMonth::AdarI);
        assert_eq!(months[7], JewishMonth::AdarII);
        assert_eq!(months[12], JewishMonth::Av);
        assert_eq!(months[13], JewishMonth::Elul);
        assert!(!months.contains(&JewishMonth::Adar));
    }

    #[test]
    fn test_resolve() {
        assert_eq!(JewishMonth::Adar.resolve(true), JewishMonth::AdarI);
        assert_eq!(JewishMonth::AdarI.resolve(false), JewishMonth::Adar);
        assert_eq!(JewishMonth::AdarII.resolve(false), JewishMonth::AdarII);
        assert_eq!(JewishMonth::Nisan.resolve(true), JewishMonth::Nisan);
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(JewishMonth::AdarII.to_string(), "AdarII");
        assert_eq!("Tishri".parse::<JewishMonth>(), Ok(JewishMonth::Tishri));
        assert_eq!("adari".parse::<JewishMonth>(), Ok(JewishMonth::AdarI));
        assert_eq!("None".parse::<JewishMonth>(), Ok(JewishMonth::None));
        assert!(matches!(
            "invalid".parse::<JewishMonth>(),
            Err(ParseError::UnknownMonth(_))
        ));
        for month in JewishMonth::ALL {
            assert_eq!(month.to_string().parse::<JewishMonth>(), Ok(month));
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&JewishMonth::AdarI).unwrap();
        assert_eq!(json, r#""AdarI""#);
        let month: JewishMonth = serde_json::from_str(r#""Iyyar""#).unwrap();
        assert_eq!(month, JewishMonth::Iyyar);
    }
}
