//! Time-related types for NBA seasons and game windows.

use crate::error::{Result, StatsError};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First calendar month (1-based) of an NBA season.
pub const SEASON_START_MONTH: u32 = 10;

/// Type-safe wrapper for NBA season labels such as `2024-25`.
///
/// A season is identified by the year it starts in. Games from October
/// through December belong to the season starting that year; games from
/// January through September belong to the season that started the year before.
///
/// # Examples
///
/// ```rust
/// use basketify_stats::SeasonLabel;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
/// assert_eq!(SeasonLabel::from_date(date).to_string(), "2024-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeasonLabel(pub i32);

impl SeasonLabel {
    /// Create a season label from its starting year.
    pub fn new(start_year: i32) -> Self {
        Self(start_year)
    }

    /// The season a game played on `date` belongs to.
    pub fn from_date(date: NaiveDate) -> Self {
        if date.month() >= SEASON_START_MONTH {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }

    pub fn start_year(&self) -> i32 {
        self.0
    }

    pub fn end_year(&self) -> i32 {
        self.0 + 1
    }
}

impl fmt::Display for SeasonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, self.end_year().rem_euclid(100))
    }
}

impl FromStr for SeasonLabel {
    type Err = StatsError;

    /// Accepts `2024-25` and `2024-2025`; the end year must follow the start year.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || StatsError::InvalidSeason {
            value: s.to_string(),
        };

        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start_year: i32 = start.parse().map_err(|_| invalid())?;
        let end_year: i32 = end.parse().map_err(|_| invalid())?;

        let expected_end = start_year + 1;
        let matches = match end.len() {
            2 => end_year == expected_end.rem_euclid(100),
            4 => end_year == expected_end,
            _ => false,
        };
        if !matches {
            return Err(invalid());
        }
        Ok(Self(start_year))
    }
}

impl TryFrom<String> for SeasonLabel {
    type Error = StatsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SeasonLabel> for String {
    fn from(label: SeasonLabel) -> Self {
        label.to_string()
    }
}

/// Number of most recent games to keep, limited to 1–100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LastNGames(u8);

impl LastNGames {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    pub fn new(n: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(Self(n))
        } else {
            Err(StatsError::InvalidLastNGames {
                value: n.to_string(),
            })
        }
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for LastNGames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LastNGames {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        let n: u32 = s.trim().parse()?;
        let n = u8::try_from(n).map_err(|_| StatsError::InvalidLastNGames {
            value: s.to_string(),
        })?;
        Self::new(n)
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
}
