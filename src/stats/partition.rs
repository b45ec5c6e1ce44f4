//! Current-season partitioning of a flat game log.
//!
//! A game log mixes three kinds of records: games from the season in
//! progress, games from earlier seasons, and scheduled games carrying model
//! predictions. The stats views show the first and last groups side by
//! side; earlier seasons are only reachable through seasonal aggregation or
//! explicit date filters.
//!
//! Output order always follows input order. Views that want the most recent
//! game first must reverse the result themselves.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::types::GameRecord;
use crate::cli::types::time::SEASON_START_MONTH;


/// Last calendar month (1-based) counted in the current-season window.
pub const SEASON_END_MONTH: u32 = 8;

/// Inclusive date range treated as "this season".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SeasonWindow {
    /// Window anchored on `as_of`: October 1 through August 31 of the
    /// season `as_of` falls in.
    pub fn containing(as_of: NaiveDate) -> Self {
        let start_year = if as_of.month() >= SEASON_START_MONTH {
            as_of.year()
        } else {
            as_of.year() - 1
        };
        // October 1 and August 31 exist in every year.
        let start = NaiveDate::from_ymd_opt(start_year, SEASON_START_MONTH, 1)
            .unwrap_or(NaiveDate::MIN);
        let end = NaiveDate::from_ymd_opt(start_year + 1, SEASON_END_MONTH, 31)
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Classification of a single game relative to a season window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameBucket {
    Current,
    Future,
    Excluded,
}

pub fn classify(game: &GameRecord, window: &SeasonWindow) -> GameBucket {
    if game.is_future_game {
        GameBucket::Future
    } else if window.contains(game.date) {
        GameBucket::Current
    } else {
        GameBucket::Excluded
    }
}

/// Current-season and future games, each in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonPartition {
    pub current: Vec<GameRecord>,
    pub future: Vec<GameRecord>,
}

impl SeasonPartition {
    /// Current-season games in reverse input order, i.e. most recent first
    /// for a chronological log.
    pub fn current_reversed(&self) -> Vec<&GameRecord> {
        self.current.iter().rev().collect()
    }
}

/// Split `games` into current-season and future games relative to `as_of`.
///
/// Future games are recognized by `is_future_game` alone, whatever their
/// date. Played games outside the window are dropped.
pub fn partition(games: &[GameRecord], as_of: NaiveDate) -> SeasonPartition {
    let window = SeasonWindow::containing(as_of);
    let mut out = SeasonPartition::default();

    for game in games {
        match classify(game, &window) {
            GameBucket::Current => out.current.push(game.clone()),
            GameBucket::Future => out.future.push(game.clone()),
            GameBucket::Excluded => {}
        }
    }

    debug!(
        total = games.len(),
        current = out.current.len(),
        future = out.future.len(),
        "partitioned game log ({} to {})",
        window.start,
        window.end
    );
    out
}
