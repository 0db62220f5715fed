//! Shorthand constructors for unit tests.

use crate::{Date, DateRange};

pub fn date(year: u16, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap_or_else(|e| panic!("bad test date {year}-{month}-{day}: {e}"))
}

pub fn range(start: (u16, u8, u8), end: (u16, u8, u8)) -> DateRange {
    let (start, end) = (date(start.0, start.1, start.2), date(end.0, end.1, end.2));
    DateRange::new(start, end).unwrap_or_else(|e| panic!("bad test range: {e}"))
}
