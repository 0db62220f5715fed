//! Inclusive, day-by-day ranges of proleptic Gregorian calendar dates.
//!
//! ```
//! use day_range::{build, Date};
//!
//! let start = Date::new(2014, 6, 29)?;
//! let end = Date::new(2014, 7, 1)?;
//! let days: Vec<String> = build(start, end)?.iter().map(ToString::to_string).collect();
//! assert_eq!(days, ["2014-06-29", "2014-06-30", "2014-07-01"]);
//! # Ok::<(), day_range::RangeError>(())
//! ```

mod consts;
mod prelude;
mod range;
mod types;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use range::{DateRange, Days, RangeError, build, build_ymd};
pub use types::{Day, Month, Year, days_in_month, days_in_year, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;
use types::days_before_month;

/// A single day of the proleptic Gregorian calendar, between
/// `0001-01-01` and `9999-12-31`.
///
/// Every value names a real calendar day. Ordering is chronological, which
/// is the same as comparing `(year, month, day)` lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Invalid day of month: {_0} (must be 1-31)")]
    DayOutOfRange(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl Date {
    /// 0001-01-01, day number 0
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };

    /// 9999-12-31, day number `MAX_DAY_NUMBER`
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::DECEMBER,
        day:   Day::THIRTY_FIRST,
    };

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `DateError::InvalidMonth` or
    /// `DateError::InvalidDay` if the triple is not a real calendar day.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a date from component newtypes. The day is checked again
    /// against the month, since a `Day` may have been built without one.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the month has no such day.
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        Self::new(year.get(), month.get(), day.get())
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Length of this date's month
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// 1-based position of this date within its year
    pub fn day_of_year(&self) -> u16 {
        days_before_month(self.year(), self.month()) + u16::from(self.day())
    }

    /// Converts to database columns: (year, month, day)
    pub const fn to_columns(&self) -> (u16, u8, u8) {
        (self.year(), self.month(), self.day())
    }

    /// Creates from database columns: (year, month, day)
    ///
    /// # Errors
    /// Returns `DateError` if the columns do not form a real calendar day.
    pub fn from_columns(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(year, month, day)
    }
}

// --- day arithmetic ---
impl Date {
    /// The following calendar day, or `None` after `Date::MAX`.
    pub fn succ(&self) -> Option<Self> {
        let (year, month, day) = self.to_columns();
        let (year, month, day) = if day < self.days_in_month() {
            (year, month, day + 1)
        } else if month < DECEMBER {
            (year, month + 1, MIN_DAY)
        } else if year < MAX_YEAR {
            (year + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        Self::new(year, month, day).ok()
    }

    /// The preceding calendar day, or `None` before `Date::MIN`.
    pub fn pred(&self) -> Option<Self> {
        let (year, month, day) = self.to_columns();
        let (year, month, day) = if day > MIN_DAY {
            (year, month, day - 1)
        } else if month > JANUARY {
            (year, month - 1, days_in_month(year, month - 1))
        } else if year > 1 {
            (year - 1, DECEMBER, days_in_month(year - 1, DECEMBER))
        } else {
            return None;
        };
        Self::new(year, month, day).ok()
    }

    /// Days elapsed since 0001-01-01, which is day 0.
    pub fn day_number(&self) -> i32 {
        let past_years = i32::from(self.year()) - 1;
        let leap_days = past_years / 4 - past_years / 100 + past_years / 400;
        past_years * DAYS_PER_YEAR + leap_days + i32::from(self.day_of_year()) - 1
    }

    /// Inverse of [`Date::day_number`]. Returns `None` outside
    /// `0..=MAX_DAY_NUMBER`.
    pub fn from_day_number(number: i32) -> Option<Self> {
        if !(0..=MAX_DAY_NUMBER).contains(&number) {
            return None;
        }

        let cycles_400 = number / DAYS_PER_400_YEARS;
        let mut rem = number % DAYS_PER_400_YEARS;
        // The last day of a 400-year cycle (and of a 4-year cycle below) would
        // otherwise count as the start of one more century (year).
        let cycles_100 = (rem / DAYS_PER_100_YEARS).min(3);
        rem -= cycles_100 * DAYS_PER_100_YEARS;
        let cycles_4 = rem / DAYS_PER_4_YEARS;
        rem %= DAYS_PER_4_YEARS;
        let years = (rem / DAYS_PER_YEAR).min(3);
        rem -= years * DAYS_PER_YEAR;

        let year = u16::try_from(400 * cycles_400 + 100 * cycles_100 + 4 * cycles_4 + years + 1).ok()?;
        let ordinal = u16::try_from(rem).ok()?;
        let month = (JANUARY..=DECEMBER)
            .rev()
            .find(|&m| days_before_month(year, m) <= ordinal)?;
        let day = u8::try_from(ordinal - days_before_month(year, month) + 1).ok()?;

        Self::new(year, month, day).ok()
    }

    /// Signed number of days from `self` to `other`; positive when `other`
    /// is later.
    pub fn days_until(&self, other: Self) -> i32 {
        other.day_number() - self.day_number()
    }

    /// Moves `days` forward (or backward when negative). Returns `None` if
    /// the result leaves the representable range.
    pub fn checked_add_days(&self, days: i32) -> Option<Self> {
        self.day_number()
            .checked_add(days)
            .and_then(Self::from_day_number)
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses the ISO 8601 calendar form `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators in {trimmed}",
                parts.len() - 1
            )));
        };

        Self::new(parse_component(year)?, parse_component(month)?, parse_component(day)?)
    }
}

/// Parses one numeric date component, rejecting signs and empty strings.
fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(u16, u8, u8)> for Date {
    type Error = DateError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_columns(value.0, value.1, value.2)
    }
}

impl From<Date> for (u16, u8, u8) {
    fn from(date: Date) -> Self {
        date.to_columns()
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
