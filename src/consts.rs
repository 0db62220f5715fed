/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
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

/// Days elapsed in a non-leap year before the first of each month
/// (index 0 is unused, months are 1-indexed)
pub const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in a common year
pub(crate) const DAYS_PER_YEAR: i32 = 365;
/// Days in one 4-year cycle (one leap day)
pub(crate) const DAYS_PER_4_YEARS: i32 = 1_461;
/// Days in one 100-year cycle (24 leap days)
pub(crate) const DAYS_PER_100_YEARS: i32 = 36_524;
/// Days in one full 400-year Gregorian cycle (97 leap days)
pub(crate) const DAYS_PER_400_YEARS: i32 = 146_097;

/// Day number of 9999-12-31, counting 0001-01-01 as day 0
pub const MAX_DAY_NUMBER: i32 = 3_652_058;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval format)
pub const RANGE_SEPARATOR: char = '/';
