//! Pattern-driven formatting of Jewish dates.
//!
//! A pattern mixes literal text with tokens:
//!
//! | token  | English            | Hebrew                    |
//! |--------|--------------------|---------------------------|
//! | `d`    | day                | day                       |
//! | `dd`   | day, two digits    | day, two digits           |
//! | `D`    | day                | day in gematria           |
//! | `M`    | month number       | month number              |
//! | `MM`   | month, two digits  | month, two digits         |
//! | `MMMM` | month name         | Hebrew month name         |
//! | `yy`   | year mod 100       | year mod 100              |
//! | `YY`   | year mod 100       | year mod 100 in gematria  |
//! | `yyyy` | year               | year                      |
//! | `YYYY` | year               | year in gematria          |
//!
//! The month number is the calendar-order index, Nisan being `1`.

use crate::consts::{DEFAULT_PATTERN, DEFAULT_PATTERN_HEBREW};
use crate::gematria::{GematriaOptions, get_jewish_month_in_hebrew, number_to_gematria_with};
use crate::month::{JewishMonth, get_index_by_jewish_month};
use crate::prelude::*;
use crate::JewishDate;

/// A pattern token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Token {
    #[display(fmt = "yyyy")]
    Year,
    #[display(fmt = "YYYY")]
    YearLetters,
    #[display(fmt = "yy")]
    ShortYear,
    #[display(fmt = "YY")]
    ShortYearLetters,
    #[display(fmt = "MMMM")]
    MonthName,
    #[display(fmt = "MM")]
    PaddedMonth,
    #[display(fmt = "M")]
    Month,
    #[display(fmt = "dd")]
    PaddedDay,
    #[display(fmt = "D")]
    DayLetters,
    #[display(fmt = "d")]
    Day,
}

impl Token {
    /// Tokens in matching priority; a token never precedes one it prefixes.
    pub const PRIORITY: [Self; 10] = [
        Self::Year,
        Self::YearLetters,
        Self::ShortYear,
        Self::ShortYearLetters,
        Self::MonthName,
        Self::PaddedMonth,
        Self::Month,
        Self::PaddedDay,
        Self::DayLetters,
        Self::Day,
    ];

    /// Text of the token as it appears in a pattern
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "yyyy",
            Self::YearLetters => "YYYY",
            Self::ShortYear => "yy",
            Self::ShortYearLetters => "YY",
            Self::MonthName => "MMMM",
            Self::PaddedMonth => "MM",
            Self::Month => "M",
            Self::PaddedDay => "dd",
            Self::DayLetters => "D",
            Self::Day => "d",
        }
    }
}

/// Piece of a tokenized pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Token(Token),
}

/// Splits a pattern into tokens and the literal text between them.
///
/// At each position the first token of [`Token::PRIORITY`] that matches is
/// taken; anything else is literal.
pub fn tokenize(pattern: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut pos = 0;

    while pos < pattern.len() {
        let rest = &pattern[pos..];
        match Token::PRIORITY
            .into_iter()
            .find(|token| rest.starts_with(token.as_str()))
        {
            Some(token) => {
                if literal_start < pos {
                    segments.push(Segment::Literal(&pattern[literal_start..pos]));
                }
                segments.push(Segment::Token(token));
                pos += token.as_str().len();
                literal_start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }
    if literal_start < pattern.len() {
        segments.push(Segment::Literal(&pattern[literal_start..]));
    }
    segments
}

/// Values a pattern is rendered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatComponents {
    pub day: u8,
    pub month: i32,
    pub month_name: JewishMonth,
    pub year: i32,
}

impl From<&JewishDate> for FormatComponents {
    fn from(date: &JewishDate) -> Self {
        Self {
            day: date.day,
            month: get_index_by_jewish_month(date.month_name),
            month_name: date.month_name,
            year: date.year,
        }
    }
}

/// Renders a single token.
pub trait TokenFormatter {
    fn format_token(&self, token: Token, components: &FormatComponents) -> String;
}

/// Digits for a token. A letter token gives the digits of the value it spells.
fn digits(token: Token, c: &FormatComponents) -> String {
    match token {
        Token::Day | Token::DayLetters => c.day.to_string(),
        Token::PaddedDay => format!("{:02}", c.day),
        Token::Month | Token::MonthName => c.month.to_string(),
        Token::PaddedMonth => format!("{:02}", c.month),
        Token::ShortYear | Token::ShortYearLetters => format!("{:02}", c.year.rem_euclid(100)),
        Token::Year | Token::YearLetters => c.year.to_string(),
    }
}

/// Digits throughout, English month names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFormatter;

impl TokenFormatter for EnglishFormatter {
    fn format_token(&self, token: Token, c: &FormatComponents) -> String {
        match token {
            Token::MonthName => c.month_name.to_string(),
            Token::Day
            | Token::DayLetters
            | Token::PaddedDay
            | Token::Month
            | Token::PaddedMonth
            | Token::ShortYear
            | Token::ShortYearLetters
            | Token::Year
            | Token::YearLetters => digits(token, c),
        }
    }
}

/// Gematria for the uppercase tokens, Hebrew month names.
#[derive(Debug, Clone, Copy, Default)]
pub struct HebrewFormatter {
    pub options: GematriaOptions,
}

impl HebrewFormatter {
    pub const fn new(options: GematriaOptions) -> Self {
        Self { options }
    }
}

impl TokenFormatter for HebrewFormatter {
    fn format_token(&self, token: Token, c: &FormatComponents) -> String {
        match token {
            Token::MonthName => get_jewish_month_in_hebrew(c.month_name).to_owned(),
            Token::DayLetters => number_to_gematria_with(u32::from(c.day), self.options),
            Token::ShortYearLetters => {
                number_to_gematria_with(c.year.rem_euclid(100).unsigned_abs(), self.options)
            }
            Token::YearLetters => number_to_gematria_with(c.year.unsigned_abs(), self.options),
            Token::Day
            | Token::PaddedDay
            | Token::Month
            | Token::PaddedMonth
            | Token::ShortYear
            | Token::Year => digits(token, c),
        }
    }
}

/// Renders `components` through `pattern` with the given formatter.
pub fn format_with_pattern<F: TokenFormatter + ?Sized>(
    pattern: &str,
    components: &FormatComponents,
    formatter: &F,
) -> String {
    tokenize(pattern)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => text.to_owned(),
            Segment::Token(token) => formatter.format_token(token, components),
        })
        .collect()
}

/// Formats a date with digits and the English month name.
///
/// `pattern` defaults to `d MMMM yyyy`.
///
/// ```
/// use jewish_date::{GregorianDate, format_jewish_date, to_jewish_date};
///
/// let date = to_jewish_date(GregorianDate::new(2022, 9, 26).unwrap());
/// assert_eq!("1 Tishri 5783", format_jewish_date(&date, None));
/// assert_eq!("01/07/83", format_jewish_date(&date, Some("dd/MM/yy")));
/// ```
pub fn format_jewish_date(date: &JewishDate, pattern: Option<&str>) -> String {
    format_with_pattern(
        pattern.unwrap_or(DEFAULT_PATTERN),
        &FormatComponents::from(date),
        &EnglishFormatter,
    )
}

/// Formats a date in Hebrew.
///
/// `pattern` defaults to `D MMMM YYYY`.
///
/// ```
/// use jewish_date::{GregorianDate, format_jewish_date_in_hebrew, to_jewish_date};
///
/// let date = to_jewish_date(GregorianDate::new(2022, 9, 26).unwrap());
/// assert_eq!("א׳ תשרי התשפ״ג", format_jewish_date_in_hebrew(&date, None));
/// ```
pub fn format_jewish_date_in_hebrew(date: &JewishDate, pattern: Option<&str>) -> String {
    format_with_pattern(
        pattern.unwrap_or(DEFAULT_PATTERN_HEBREW),
        &FormatComponents::from(date),
        &HebrewFormatter::default(),
    )
}
