use std::{iter::FusedIterator, str::FromStr};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{Date, DateError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// One of the endpoints is not a valid date.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

/// Every date from `start` through `end`, both included, one day apart.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `start` is after `end`.
pub fn build(start: Date, end: Date) -> Result<Vec<Date>, RangeError> {
    Ok(DateRange::new(start, end)?.build())
}

/// Like [`build`], from raw `(year, month, day)` components.
///
/// # Errors
/// Returns `RangeError::Date` if either endpoint is not a real calendar day,
/// or `RangeError::InvalidRange` if `start` is after `end`.
pub fn build_ymd(start: (u16, u8, u8), end: (u16, u8, u8)) -> Result<Vec<Date>, RangeError> {
    build(Date::try_from(start)?, Date::try_from(end)?)
}

impl DateRange {
    /// Creates a new date range.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, RangeError> {
        if start > end {
            debug!("rejecting backwards date range {start}/{end}");
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day
    pub const fn single(date: Date) -> Self {
        Self { start: date, end: date }
    }

    pub const fn start(&self) -> Date {
        self.start
    }

    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Number of days in the range, counting both ends. Never zero.
    pub fn day_count(&self) -> usize {
        usize::try_from(self.start.days_until(self.end)).unwrap_or_default() + 1
    }

    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Whether the two ranges share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether every day of `self` is also in `other`
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Lazily walks the range one day at a time, from either end.
    pub fn iter(&self) -> Days {
        Days {
            front:     self.start,
            back:      self.end,
            remaining: self.day_count(),
        }
    }

    /// Materializes the range as an ordered list of dates.
    pub fn build(&self) -> Vec<Date> {
        let days: Vec<Date> = self.iter().collect();
        trace!("built {} days for {self}", days.len());
        days
    }
}

/// Iterator over the days of a [`DateRange`], created by [`DateRange::iter`].
#[derive(Debug, Clone)]
pub struct Days {
    front:     Date,
    back:      Date,
    remaining: usize,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            // remaining > 0 means back is still ahead, so succ cannot run out
            self.front = current.succ()?;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = current.pred()?;
        }
        Some(current)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start, end) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                Self::new(start.parse()?, end.parse()?)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{date, range};

    #[test]
    fn test_new_range_cases() {
        struct TestCase {
            start:          (u16, u8, u8),
            end:            (u16, u8, u8),
            should_succeed: bool,
            description:    &'static str,
        }

        let cases = [
            TestCase {
                start:          (2014, 6, 29),
                end:            (2014, 7, 1),
                should_succeed: true,
                description:    "start before end",
            },
            TestCase {
                start:          (2014, 7, 1),
                end:            (2014, 6, 29),
                should_succeed: false,
                description:    "start after end",
            },
            TestCase {
                start:          (2014, 7, 1),
                end:            (2014, 7, 1),
                should_succeed: true,
                description:    "start equals end",
            },
            TestCase {
                start:          (2015, 1, 1),
                end:            (2014, 12, 31),
                should_succeed: false,
                description:    "one day backwards across a year",
            },
        ];

        for case in &cases {
            let start = Date::try_from(case.start).unwrap();
            let end = Date::try_from(case.end).unwrap();
            let result = DateRange::new(start, end);

            if case.should_succeed {
                assert!(result.is_ok(), "Expected success for: {}", case.description);
            } else {
                assert_eq!(
                    result,
                    Err(RangeError::InvalidRange { start, end }),
                    "Expected failure for: {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_accessors() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        assert_eq!(r.start(), date(2014, 6, 29));
        assert_eq!(r.end(), date(2014, 7, 1));
        assert_eq!(r.dates(), (date(2014, 6, 29), date(2014, 7, 1)));
        assert_eq!(DateRange::single(date(2014, 7, 1)).dates(), (date(2014, 7, 1), date(2014, 7, 1)));
    }

    #[test]
    fn test_day_count() {
        assert_eq!(range((2014, 6, 29), (2014, 7, 1)).day_count(), 3);
        assert_eq!(range((2014, 7, 1), (2014, 7, 1)).day_count(), 1);
        assert_eq!(range((2016, 1, 1), (2016, 12, 31)).day_count(), 366);
        assert_eq!(range((2014, 1, 1), (2014, 12, 31)).day_count(), 365);
    }

    #[test]
    fn test_build_month_rollover() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        assert_eq!(r.build(), vec![date(2014, 6, 29), date(2014, 6, 30), date(2014, 7, 1)]);
    }

    #[test]
    fn test_build_leap_rollover() {
        let days = build(date(2016, 2, 27), date(2016, 3, 1)).unwrap();
        assert_eq!(days, vec![date(2016, 2, 27), date(2016, 2, 28), date(2016, 2, 29), date(2016, 3, 1)]);

        let days = build(date(2015, 2, 27), date(2015, 3, 1)).unwrap();
        assert_eq!(days, vec![date(2015, 2, 27), date(2015, 2, 28), date(2015, 3, 1)]);
    }

    #[test]
    fn test_build_year_rollover() {
        let days = build(date(2014, 12, 30), date(2015, 1, 2)).unwrap();
        assert_eq!(
            days,
            vec![date(2014, 12, 30), date(2014, 12, 31), date(2015, 1, 1), date(2015, 1, 2)]
        );
    }

    #[test]
    fn test_build_single_day() {
        let d = date(2014, 6, 29);
        assert_eq!(build(d, d).unwrap(), vec![d]);
    }

    #[test]
    fn test_build_rejects_reverse_range() {
        let (start, end) = (date(2014, 7, 1), date(2014, 6, 29));
        assert_eq!(build(start, end), Err(RangeError::InvalidRange { start, end }));
    }

    #[test]
    fn test_build_ymd() {
        assert_eq!(
            build_ymd((2014, 6, 29), (2014, 7, 1)).unwrap(),
            vec![date(2014, 6, 29), date(2014, 6, 30), date(2014, 7, 1)]
        );
        assert_eq!(
            build_ymd((2014, 2, 30), (2014, 3, 1)),
            Err(RangeError::Date(DateError::InvalidDay { year: 2014, month: 2, day: 30 }))
        );
        assert!(matches!(build_ymd((2014, 7, 1), (2014, 6, 29)), Err(RangeError::InvalidRange { .. })));
    }

    #[test]
    fn test_iter_reverse() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        let backwards: Vec<Date> = r.iter().rev().collect();
        assert_eq!(backwards, vec![date(2014, 7, 1), date(2014, 6, 30), date(2014, 6, 29)]);
    }

    #[test]
    fn test_iter_from_both_ends_meets_once() {
        let mut days = range((2014, 6, 28), (2014, 7, 2)).iter();
        assert_eq!(days.len(), 5);
        assert_eq!(days.next(), Some(date(2014, 6, 28)));
        assert_eq!(days.next_back(), Some(date(2014, 7, 2)));
        assert_eq!(days.len(), 3);
        assert_eq!(days.next_back(), Some(date(2014, 7, 1)));
        assert_eq!(days.next(), Some(date(2014, 6, 29)));
        assert_eq!(days.next(), Some(date(2014, 6, 30)));
        assert_eq!(days.len(), 0);
        assert_eq!(days.next(), None);
        assert_eq!(days.next_back(), None);
    }

    #[test]
    fn test_iter_at_calendar_limits() {
        let tail = DateRange::new(date(9999, 12, 30), Date::MAX).unwrap();
        assert_eq!(tail.build(), vec![date(9999, 12, 30), Date::MAX]);

        let head = DateRange::new(Date::MIN, date(1, 1, 2)).unwrap();
        assert_eq!(head.iter().rev().collect::<Vec<_>>(), vec![date(1, 1, 2), Date::MIN]);
    }

    #[test]
    fn test_into_iterator() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        let mut seen = Vec::new();
        for d in &r {
            seen.push(d.day());
        }
        assert_eq!(seen, vec![29, 30, 1]);
        assert_eq!(r.into_iter().count(), 3);
    }

    #[test]
    fn test_contains() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        assert!(r.contains(&date(2014, 6, 29)));
        assert!(r.contains(&date(2014, 6, 30)));
        assert!(r.contains(&date(2014, 7, 1)));
        assert!(!r.contains(&date(2014, 6, 28)));
        assert!(!r.contains(&date(2014, 7, 2)));
    }

    #[test]
    fn test_overlaps() {
        let june = range((2014, 6, 1), (2014, 6, 30));
        let summer = range((2014, 6, 21), (2014, 9, 22));
        let july = range((2014, 7, 1), (2014, 7, 31));
        let boundary = range((2014, 6, 30), (2014, 7, 1));

        assert!(june.overlaps(&summer));
        assert!(summer.overlaps(&june));
        assert!(!june.overlaps(&july));
        assert!(!july.overlaps(&june));
        assert!(june.overlaps(&boundary), "sharing a single end day counts");
        assert!(july.overlaps(&boundary));
    }

    #[test]
    fn test_is_within() {
        let year = range((2014, 1, 1), (2014, 12, 31));
        let july = range((2014, 7, 1), (2014, 7, 31));
        let straddle = range((2014, 12, 31), (2015, 1, 1));

        assert!(july.is_within(&year));
        assert!(!year.is_within(&july));
        assert!(year.is_within(&year));
        assert!(!straddle.is_within(&year));
    }

    #[test]
    fn test_ordering() {
        let a = range((2014, 6, 29), (2014, 7, 1));
        let b = range((2014, 6, 29), (2014, 7, 5));
        let c = range((2014, 6, 30), (2014, 7, 1));
        assert!(a < b, "same start, earlier end first");
        assert!(b < c, "earlier start first");
    }

    #[test]
    fn test_display_and_parse() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        assert_eq!(r.to_string(), "2014-06-29/2014-07-01");
        assert_eq!("2014-06-29/2014-07-01".parse::<DateRange>(), Ok(r));
        assert_eq!(" 2014-06-29 / 2014-07-01 ".parse::<DateRange>(), Ok(r));
    }

    #[test]
    fn test_parse_errors() {
        let err = "2014-06-29".parse::<DateRange>().unwrap_err();
        assert!(err.to_string().contains("No range separator found"));

        let err = "2014-06-29/2014-06-30/2014-07-01".parse::<DateRange>().unwrap_err();
        assert!(err.to_string().contains("expected 1, found 2"));

        assert!(matches!(
            "2014-07-01/2014-06-29".parse::<DateRange>(),
            Err(RangeError::InvalidRange { .. })
        ));
        assert!(matches!(
            "2014-02-30/2014-03-01".parse::<DateRange>(),
            Err(RangeError::Date(DateError::InvalidDay { .. }))
        ));
        assert!(matches!("2014-06-29..2014-07-01".parse::<DateRange>(), Err(RangeError::InvalidFormat(_))));
    }

    #[test]
    fn test_error_display() {
        let err = RangeError::InvalidRange { start: date(2014, 7, 1), end: date(2014, 6, 29) };
        assert_eq!(
            err.to_string(),
            "Invalid date range: start (2014-07-01) is after end (2014-06-29)"
        );
        let err = RangeError::from(DateError::InvalidMonth(13));
        assert_eq!(err.to_string(), "Invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn test_serde_string_format() {
        let r = range((2014, 6, 29), (2014, 7, 1));
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#""2014-06-29/2014-07-01""#);
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), r);

        assert!(serde_json::from_str::<DateRange>(r#""2014-07-01/2014-06-29""#).is_err());
    }
}
