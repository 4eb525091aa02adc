//! Weekday labels used as the scheduling unit.
//!
//! # Invariants
//! - Exactly seven days exist, ordered `Mon..Sun`.
//! - Text and wire form of a day is its three-letter label.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// One of the seven fixed weekday labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// Stable label used in text and serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tue => "Tue",
            Self::Wed => "Wed",
            Self::Thu => "Thu",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }

    /// Zero-based position in the week (`Mon == 0`).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl Display for Day {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Day {
    type Err = DayParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_day(value)
    }
}

/// Day label parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayParseError {
    /// Input is not one of `Mon|Tue|Wed|Thu|Fri|Sat|Sun`.
    Unsupported(String),
}

impl Display for DayParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported(value) => write!(
                f,
                "unsupported day `{value}`; expected Mon|Tue|Wed|Thu|Fri|Sat|Sun"
            ),
        }
    }
}

impl Error for DayParseError {}

/// Parses one day label. Matching is exact after trimming.
pub fn parse_day(value: &str) -> Result<Day, DayParseError> {
    let trimmed = value.trim();
    Day::ALL
        .into_iter()
        .find(|day| day.as_str() == trimmed)
        .ok_or_else(|| DayParseError::Unsupported(trimmed.to_string()))
}

/// Parses a day picker value where blank input means "no day selected".
pub fn parse_day_selection(value: &str) -> Result<Option<Day>, DayParseError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_day(value).map(Some)
}

#[cfg(test)]
mod tests {
    use super::{parse_day, parse_day_selection, Day, DayParseError};

    #[test]
    fn labels_round_trip_through_parse() {
        for day in Day::ALL {
            assert_eq!(parse_day(day.as_str()), Ok(day));
        }
    }

    #[test]
    fn index_follows_week_order() {
        assert_eq!(Day::Mon.index(), 0);
        assert_eq!(Day::Sun.index(), 6);
    }

    #[test]
    fn parse_rejects_lowercase_and_full_names() {
        assert!(matches!(parse_day("mon"), Err(DayParseError::Unsupported(_))));
        assert!(matches!(
            parse_day("Monday"),
            Err(DayParseError::Unsupported(_))
        ));
    }

    #[test]
    fn blank_selection_means_no_day() {
        assert_eq!(parse_day_selection(""), Ok(None));
        assert_eq!(parse_day_selection("  "), Ok(None));
        assert_eq!(parse_day_selection("Fri"), Ok(Some(Day::Fri)));
        assert!(parse_day_selection("Funday").is_err());
    }
}
