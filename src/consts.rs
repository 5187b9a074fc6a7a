/// Julian day of the Gregorian epoch (January 1, year 1, at midnight)
pub const GREGORIAN_EPOCH: f64 = 1_721_425.5;

/// Julian day of the Hebrew epoch (Tishri 1, year 1, at midnight)
pub const HEBREW_EPOCH: f64 = 347_995.5;

/// Earliest Gregorian year accepted by checked constructors
pub const MIN_GREGORIAN_YEAR: i32 = -1_000_000;
/// Latest Gregorian year accepted by checked constructors
pub const MAX_GREGORIAN_YEAR: i32 = 1_000_000;

/// Earliest Hebrew year accepted by checked constructors
pub const MIN_HEBREW_YEAR: i32 = 1;
/// Latest Hebrew year accepted by checked constructors. Every date up to
/// `MAX_GREGORIAN_YEAR` falls in a Hebrew year at or below it.
pub const MAX_HEBREW_YEAR: i32 = MAX_GREGORIAN_YEAR + 3761;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a full 400-year Gregorian cycle
pub(crate) const DAYS_PER_QUADRICENTENNIAL: f64 = 146_097.0;
/// Days in a Gregorian century without its final leap day
pub(crate) const DAYS_PER_CENTURY: f64 = 36_524.0;
/// Days in a four-year cycle
pub(crate) const DAYS_PER_QUAD: f64 = 1_461.0;
/// Days in a common year
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

/// Length of the Metonic cycle in years
pub const METONIC_CYCLE: i32 = 19;
/// Positions of the leap years within the Metonic cycle (`year % 19`)
pub const LEAP_YEAR_RESIDUES: [i32; 7] = [0, 3, 6, 8, 11, 14, 17];

/// Calendar-order index of Tishri, the first month of the year
pub const TISHRI: i32 = 7;
/// Calendar-order index of Nisan, the first month of the calendar ordering
pub const NISAN: i32 = 1;

/// Parts (chalakim) in a day
pub(crate) const PARTS_PER_DAY: i64 = 25_920;
/// Parts of the epoch molad past its day boundary
pub(crate) const MOLAD_BASE_PARTS: i64 = 12_084;
/// Parts in a lunation beyond its whole 29 days
pub(crate) const MOLAD_MONTH_PARTS: i64 = 13_753;
/// Months elapsed per Metonic cycle
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Ratio approximating years per day, used to seed the year search
pub(crate) const YEAR_ESTIMATE_NUMERATOR: f64 = 98_496.0;
pub(crate) const YEAR_ESTIMATE_DENOMINATOR: f64 = 35_975_351.0;

/// Default pattern for numeric formatting
pub const DEFAULT_PATTERN: &str = "d MMMM yyyy";

/// Default pattern for formatting in Hebrew (gematria)
pub const DEFAULT_PATTERN_HEBREW: &str = "D MMMM YYYY";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
