//! Client-side replay of the stats API's filtering.
//!
//! [`apply_filters`] takes the same query map the stats API receives and
//! narrows a game log the way the server does, so locally filtered results
//! can be reconciled with what the server returns for the same filter set.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::teams::{abbreviation_for, find_team, opponent_from_matchup, Team};
use super::types::{GameRecord, WinLoss};
use crate::cli::types::{parse_date, GameType, Outcome, SeasonLabel, SeasonType, ALL};
use crate::core::filters::{
    QueryMap, CONFERENCE, DATE_FROM, DATE_TO, DIVISION, GAME_TYPE, LAST_N_GAMES, OPPONENTS,
    OUTCOME, SEASON, SEASON_TYPE,
};


/// Season type implied by the calendar when a record does not carry one:
/// April 16 through the end of September counts as postseason.
pub fn season_type_by_date(date: NaiveDate) -> SeasonType {
    let postseason = match date.month() {
        4 => date.day() > 15,
        5..=9 => true,
        _ => false,
    };
    if postseason {
        SeasonType::Postseason
    } else {
        SeasonType::RegularSeason
    }
}

/// Opponent resolved against the team directory, from the explicit
/// `opponent` field or else the matchup string.
pub fn opponent_team(game: &GameRecord) -> Option<&'static Team> {
    if let Some(team) = game.opponent.as_deref().and_then(find_team) {
        return Some(team);
    }
    let matchup = game.matchup.as_deref()?;
    let own = game.team.as_deref().unwrap_or_default();
    opponent_from_matchup(matchup, own).and_then(find_team)
}

fn own_team(game: &GameRecord) -> Option<&'static Team> {
    game.team.as_deref().and_then(find_team)
}

/// `Some(true)` for East-vs-West games; `None` when either side is unknown.
pub fn is_interconference(game: &GameRecord) -> Option<bool> {
    let own = own_team(game)?;
    let opponent = opponent_team(game)?;
    Some(own.conference() != opponent.conference())
}

fn constraint<'a>(filters: &'a QueryMap, key: &str) -> Option<&'a str> {
    filters
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty() && *v != ALL)
}

fn date_bound(filters: &QueryMap, key: &str) -> Option<NaiveDate> {
    let raw = constraint(filters, key)?;
    match parse_date(raw) {
        Ok(d) => Some(d),
        Err(e) => {
            debug!("ignoring {key}={raw:?}: {e}");
            None
        }
    }
}

/// Narrow `games` by every criterion present in `filters`.
///
/// Unknown keys and unparseable values are ignored. Without `last_n_games`
/// the input order is kept; with it, the newest N games are returned
/// newest first.
pub fn apply_filters(games: &[GameRecord], filters: &QueryMap) -> Vec<GameRecord> {
    let mut kept: Vec<&GameRecord> = games.iter().collect();

    if let Some(from) = date_bound(filters, DATE_FROM) {
        kept.retain(|g| g.date >= from);
    }
    if let Some(to) = date_bound(filters, DATE_TO) {
        kept.retain(|g| g.date <= to);
    }

    if let Some(raw) = constraint(filters, SEASON) {
        match raw.parse::<SeasonLabel>() {
            Ok(label) => kept.retain(|g| g.season() == label),
            Err(e) => debug!("ignoring season: {e}"),
        }
    }

    if let Some(raw) = constraint(filters, SEASON_TYPE) {
        match raw.parse::<SeasonType>() {
            Ok(wanted) => kept.retain(|g| {
                g.season_type.unwrap_or_else(|| season_type_by_date(g.date)) == wanted
            }),
            Err(e) => debug!("ignoring season_type: {e}"),
        }
    }

    if let Some(raw) = constraint(filters, OUTCOME) {
        let wanted = match raw.parse::<Outcome>() {
            Ok(Outcome::Win) => Some(WinLoss::Win),
            Ok(Outcome::Loss) => Some(WinLoss::Loss),
            Ok(Outcome::All) => None,
            Err(e) => {
                debug!("ignoring outcome: {e}");
                None
            }
        };
        if let Some(wanted) = wanted {
            kept.retain(|g| g.outcome() == Some(wanted));
        }
    }

    if let Some(division) = constraint(filters, DIVISION) {
        kept.retain(|g| {
            opponent_team(g).is_some_and(|t| t.division.as_str().eq_ignore_ascii_case(division))
        });
    }

    if let Some(conference) = constraint(filters, CONFERENCE) {
        kept.retain(|g| {
            opponent_team(g)
                .is_some_and(|t| t.conference().as_str().eq_ignore_ascii_case(conference))
        });
    }

    if let Some(raw) = constraint(filters, GAME_TYPE) {
        let want_inter = match raw.parse::<GameType>() {
            Ok(GameType::Interconference) => Some(true),
            Ok(GameType::Intraconference) => Some(false),
            Ok(GameType::All) => None,
            Err(e) => {
                debug!("ignoring game_type: {e}");
                None
            }
        };
        if let Some(want_inter) = want_inter {
            kept.retain(|g| is_interconference(g) == Some(want_inter));
        }
    }

    if let Some(raw) = constraint(filters, OPPONENTS) {
        let wanted: Vec<&str> = raw.split(',').filter_map(abbreviation_for).collect();
        kept.retain(|g| opponent_team(g).is_some_and(|t| wanted.contains(&t.abbreviation)));
    }

    if let Some(raw) = constraint(filters, LAST_N_GAMES) {
        match raw.parse::<usize>() {
            Ok(n) => {
                kept.sort_by(|a, b| b.date.cmp(&a.date));
                kept.truncate(n);
            }
            Err(e) => debug!("ignoring last_n_games={raw:?}: {e}"),
        }
    }

    debug!(
        input = games.len(),
        kept = kept.len(),
        filters = filters.len(),
        "applied filters"
    );
    kept.into_iter().cloned().collect()
}
