//! Hebrew numerals (gematria) and Hebrew month names.

use crate::month::JewishMonth;
use crate::{BasicJewishDate, JewishDate};
use serde::{Deserialize, Serialize};

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';

const UNITS: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 4] = ["", "ק", "ר", "ש"];
const FOUR_HUNDRED: &str = "ת";

/// How numerals are punctuated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GematriaOptions {
    /// Use the Hebrew geresh and gershayim marks rather than ASCII quotes
    pub geresh: bool,
    /// Mark the numeral at all
    pub punctuate: bool,
}

impl Default for GematriaOptions {
    fn default() -> Self {
        Self {
            geresh: true,
            punctuate: true,
        }
    }
}

/// Letters for `0..1000`, without punctuation
fn letters_below_thousand(n: u32) -> String {
    let mut out = String::new();

    let mut hundreds = n / 100;
    while hundreds >= 4 {
        out.push_str(FOUR_HUNDRED);
        hundreds -= 4;
    }
    out.push_str(HUNDREDS[hundreds as usize]);

    // 15 and 16 avoid spelling a divine name
    match n % 100 {
        15 => out.push_str("טו"),
        16 => out.push_str("טז"),
        rest => {
            out.push_str(TENS[(rest / 10) as usize]);
            out.push_str(UNITS[(rest % 10) as usize]);
        }
    }
    out
}

/// Renders `n` in Hebrew numerals.
///
/// Thousands are written as a leading letter group with no separator. When
/// `punctuate` is set, a numeral of several letters gets gershayim before its
/// last letter and a single letter gets a trailing geresh; `geresh` picks the
/// Hebrew marks over ASCII `"` and `'`. Zero renders as an empty string.
///
/// ```
/// use jewish_date::gematria::number_to_gematria;
///
/// assert_eq!("התשפ״ג", number_to_gematria(5783, true, true));
/// assert_eq!("ה'", number_to_gematria(5, false, true));
/// assert_eq!("טו", number_to_gematria(15, true, false));
/// ```
pub fn number_to_gematria(n: u32, geresh: bool, punctuate: bool) -> String {
    let mut letters = String::new();
    if n >= 1000 {
        letters.push_str(&letters_below_thousand(n / 1000));
    }
    letters.push_str(&letters_below_thousand(n % 1000));

    if !punctuate || letters.is_empty() {
        return letters;
    }

    let (single, double) = if geresh {
        (GERESH, GERSHAYIM)
    } else {
        ('\'', '"')
    };
    match letters.char_indices().last() {
        Some((last, _)) if last > 0 => letters.insert(last, double),
        _ => letters.push(single),
    }
    letters
}

/// Renders `n` in Hebrew numerals with the given options
pub fn number_to_gematria_with(n: u32, options: GematriaOptions) -> String {
    number_to_gematria(n, options.geresh, options.punctuate)
}

/// Renders `n` in punctuated Hebrew numerals, e.g. `5783` as `התשפ״ג`.
pub fn convert_number_to_hebrew(n: u32) -> String {
    number_to_gematria_with(n, GematriaOptions::default())
}

/// Renders the last two digits of a year, e.g. `5783` as `פ״ג`.
pub fn convert_year_to_short_hebrew(year: i32) -> String {
    convert_number_to_hebrew(year.rem_euclid(100).unsigned_abs())
}

/// Hebrew name of a month
pub const fn get_jewish_month_in_hebrew(month: JewishMonth) -> &'static str {
    match month {
        JewishMonth::None => "ללא",
        JewishMonth::Tishri => "תשרי",
        JewishMonth::Cheshvan => "חשון",
        JewishMonth::Kislev => "כסלו",
        JewishMonth::Tevet => "טבת",
        JewishMonth::Shevat => "שבט",
        JewishMonth::Adar => "אדר",
        JewishMonth::AdarI => "אדר א",
        JewishMonth::AdarII => "אדר ב",
        JewishMonth::Nisan => "ניסן",
        JewishMonth::Iyyar => "אייר",
        JewishMonth::Sivan => "סיון",
        JewishMonth::Tammuz => "תמוז",
        JewishMonth::Av => "אב",
        JewishMonth::Elul => "אלול",
    }
}

/// A date spelled out in Hebrew letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicJewishDateHebrew {
    pub day: String,
    pub month_name: String,
    pub year: String,
}

/// Spells out a date in Hebrew: day and year as numerals, the month by name.
pub fn to_hebrew_jewish_date(date: &BasicJewishDate) -> BasicJewishDateHebrew {
    BasicJewishDateHebrew {
        day: convert_number_to_hebrew(u32::from(date.day)),
        month_name: get_jewish_month_in_hebrew(date.month_name).to_owned(),
        year: convert_number_to_hebrew(date.year.unsigned_abs()),
    }
}

impl From<&JewishDate> for BasicJewishDateHebrew {
    fn from(date: &JewishDate) -> Self {
        to_hebrew_jewish_date(&BasicJewishDate::from(*date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_tens() {
        assert_eq!(convert_number_to_hebrew(1), "א׳");
        assert_eq!(convert_number_to_hebrew(5), "ה׳");
        assert_eq!(convert_number_to_hebrew(10), "י׳");
        assert_eq!(convert_number_to_hebrew(11), "י״א");
        assert_eq!(convert_number_to_hebrew(29), "כ״ט");
        assert_eq!(convert_number_to_hebrew(30), "ל׳");
    }

    #[test]
    fn test_fifteen_and_sixteen() {
        assert_eq!(convert_number_to_hebrew(15), "ט״ו");
        assert_eq!(convert_number_to_hebrew(16), "ט״ז");
        assert_eq!(convert_number_to_hebrew(115), "קט״ו");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(convert_number_to_hebrew(400), "ת׳");
        assert_eq!(convert_number_to_hebrew(500), "ת״ק");
        assert_eq!(convert_number_to_hebrew(900), "תת״ק");
        assert_eq!(convert_number_to_hebrew(783), "תשפ״ג");
    }

    #[test]
    fn test_years() {
        assert_eq!(convert_number_to_hebrew(5783), "התשפ״ג");
        assert_eq!(convert_number_to_hebrew(5784), "התשפ״ד");
        assert_eq!(convert_number_to_hebrew(5000), "ה׳");
    }

    #[test]
    fn test_zero() {
        assert_eq!(convert_number_to_hebrew(0), "");
        assert_eq!(convert_year_to_short_hebrew(5800), "");
    }

    #[test]
    fn test_options() {
        assert_eq!(number_to_gematria(5783, false, true), "התשפ\"ג");
        assert_eq!(number_to_gematria(5783, true, false), "התשפג");
        assert_eq!(number_to_gematria(1, false, true), "א'");
        let plain = GematriaOptions {
            geresh: true,
            punctuate: false,
        };
        assert_eq!(number_to_gematria_with(83, plain), "פג");
    }

    #[test]
    fn test_short_year() {
        assert_eq!(convert_year_to_short_hebrew(5783), "פ״ג");
        assert_eq!(convert_year_to_short_hebrew(5785), "פ״ה");
        assert_eq!(convert_year_to_short_hebrew(5801), "א׳");
    }

    #[test]
    fn test_month_in_hebrew() {
        assert_eq!(get_jewish_month_in_hebrew(JewishMonth::Iyyar), "אייר");
        assert_eq!(get_jewish_month_in_hebrew(JewishMonth::AdarII), "אדר ב");
        assert_eq!(get_jewish_month_in_hebrew(JewishMonth::None), "ללא");
    }

    #[test]
    fn test_to_hebrew_jewish_date() {
        let date = BasicJewishDate::new(5783, JewishMonth::Tishri, 1).unwrap();
        assert_eq!(
            to_hebrew_jewish_date(&date),
            BasicJewishDateHebrew {
                day: "א׳".to_owned(),
                month_name: "תשרי".to_owned(),
                year: "התשפ״ג".to_owned(),
            }
        );
    }

    #[test]
    fn test_serde_field_names() {
        let date = BasicJewishDate::new(5783, JewishMonth::Tishri, 1).unwrap();
        let json = serde_json::to_value(to_hebrew_jewish_date(&date)).unwrap();
        assert_eq!(json["monthName"], "תשרי");
    }
}
