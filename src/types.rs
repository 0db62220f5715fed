use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::{NonZeroU8, NonZeroU16};

/// Longest month length in the Gregorian calendar
const MAX_DAYS_IN_ANY_MONTH: u8 = 31;

/// A calendar year in `1..=MAX_YEAR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    pub const MIN: Self = Self(NonZeroU16::MIN);
    pub const MAX: Self = match NonZeroU16::new(MAX_YEAR) {
        Some(year) => Self(year),
        None => unreachable!(),
    };

    /// Creates a new Year, rejecting 0 and anything past `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is out of range.
    pub fn new(value: u16) -> Result<Self, DateError> {
        match NonZeroU16::new(value) {
            Some(year) if value <= MAX_YEAR => Ok(Self(year)),
            _ => Err(DateError::InvalidYear(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether this year has a February 29th
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = DateError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.get())
    }
}

/// A month number in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);
    pub const DECEMBER: Self = match NonZeroU8::new(MAX_MONTH) {
        Some(month) => Self(month),
        None => unreachable!(),
    };

    /// Creates a new Month, rejecting 0 and anything past December
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is out of range.
    pub fn new(value: u8) -> Result<Self, DateError> {
        match NonZeroU8::new(value) {
            Some(month) if value <= MAX_MONTH => Ok(Self(month)),
            _ => Err(DateError::InvalidMonth(value)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

/// A day of month.
///
/// `Day::new` checks the value against the length of a specific month.
/// The context-free conversions (`TryFrom<u8>`, serde) can only check
/// `1..=31`; `Date::from_parts` redoes the month-aware check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);
    pub const THIRTY_FIRST: Self = match NonZeroU8::new(MAX_DAYS_IN_ANY_MONTH) {
        Some(day) => Self(day),
        None => unreachable!(),
    };

    /// Creates a new Day valid for the given year and month
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if `month` is out of range, or
    /// `DateError::InvalidDay` if the month has no such day.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, DateError> {
        Month::new(month)?;
        let invalid = DateError::InvalidDay { year, month, day: value };
        let day = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;
        if value > days_in_month(year, month) {
            return Err(invalid);
        }
        Ok(Self(day))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match NonZeroU8::new(value) {
            Some(day) if value <= MAX_DAYS_IN_ANY_MONTH => Ok(Self(day)),
            _ => Err(DateError::DayOutOfRange(value)),
        }
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.get())
    }
}

// Calendar helpers

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days of `year` that elapse before the first of `month`.
pub const fn days_before_month(year: u16, month: u8) -> u16 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    let days = DAYS_BEFORE_MONTH[month as usize];
    if month > FEBRUARY && is_leap_year(year) { days + 1 } else { days }
}
