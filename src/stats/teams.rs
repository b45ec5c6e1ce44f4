//! NBA team directory and matchup parsing.

use crate::cli::types::{Conference, Division};

/// One NBA franchise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Team {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub division: Division,
}

impl Team {
    pub fn conference(&self) -> Conference {
        self.division.conference()
    }
}

const fn team(name: &'static str, abbreviation: &'static str, division: Division) -> Team {
    Team {
        name,
        abbreviation,
        division,
    }
}

/// All thirty teams, alphabetical by full name.
pub const NBA_TEAMS: [Team; 30] = [
    team("Atlanta Hawks", "ATL", Division::Southeast),
    team("Boston Celtics", "BOS", Division::Atlantic),
    team("Brooklyn Nets", "BKN", Division::Atlantic),
    team("Charlotte Hornets", "CHA", Division::Southeast),
    team("Chicago Bulls", "CHI", Division::Central),
    team("Cleveland Cavaliers", "CLE", Division::Central),
    team("Dallas Mavericks", "DAL", Division::Southwest),
    team("Denver Nuggets", "DEN", Division::Northwest),
    team("Detroit Pistons", "DET", Division::Central),
    team("Golden State Warriors", "GSW", Division::Pacific),
    team("Houston Rockets", "HOU", Division::Southwest),
    team("Indiana Pacers", "IND", Division::Central),
    team("Los Angeles Clippers", "LAC", Division::Pacific),
    team("Los Angeles Lakers", "LAL", Division::Pacific),
    team("Memphis Grizzlies", "MEM", Division::Southwest),
    team("Miami Heat", "MIA", Division::Southeast),
    team("Milwaukee Bucks", "MIL", Division::Central),
    team("Minnesota Timberwolves", "MIN", Division::Northwest),
    team("New Orleans Pelicans", "NOP", Division::Southwest),
    team("New York Knicks", "NYK", Division::Atlantic),
    team("Oklahoma City Thunder", "OKC", Division::Northwest),
    team("Orlando Magic", "ORL", Division::Southeast),
    team("Philadelphia 76ers", "PHI", Division::Atlantic),
    team("Phoenix Suns", "PHX", Division::Pacific),
    team("Portland Trail Blazers", "POR", Division::Northwest),
    team("Sacramento Kings", "SAC", Division::Pacific),
    team("San Antonio Spurs", "SAS", Division::Southwest),
    team("Toronto Raptors", "TOR", Division::Atlantic),
    team("Utah Jazz", "UTA", Division::Northwest),
    team("Washington Wizards", "WAS", Division::Southeast),
];

/// Look up a team by full name or abbreviation (case-insensitive).
pub fn find_team(name_or_abbr: &str) -> Option<&'static Team> {
    let needle = name_or_abbr.trim();
    NBA_TEAMS.iter().find(|t| {
        t.name.eq_ignore_ascii_case(needle) || t.abbreviation.eq_ignore_ascii_case(needle)
    })
}

pub fn abbreviation_for(name_or_abbr: &str) -> Option<&'static str> {
    find_team(name_or_abbr).map(|t| t.abbreviation)
}

/// Where a game was played from the listed team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLocation {
    Home,
    Away,
    Unknown,
}

impl GameLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameLocation::Home => "home",
            GameLocation::Away => "away",
            GameLocation::Unknown => "unknown",
        }
    }
}

const HOME_SEPARATOR: &str = " vs. ";
const AWAY_SEPARATOR: &str = " @ ";

/// `LAL vs. BOS` is a home game, `LAL @ BOS` an away game.
pub fn game_location(matchup: &str) -> GameLocation {
    if matchup.contains(HOME_SEPARATOR) {
        GameLocation::Home
    } else if matchup.contains(AWAY_SEPARATOR) {
        GameLocation::Away
    } else {
        GameLocation::Unknown
    }
}

/// The side of `matchup` that is not `team_abbr`.
pub fn opponent_from_matchup<'a>(matchup: &'a str, team_abbr: &str) -> Option<&'a str> {
    let (left, right) = matchup
        .split_once(HOME_SEPARATOR)
        .or_else(|| matchup.split_once(AWAY_SEPARATOR))?;
    let (left, right) = (left.trim(), right.trim());
    if left == team_abbr {
        Some(right)
    } else {
        Some(left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_has_fifteen_per_conference() {
        let east = NBA_TEAMS
            .iter()
            .filter(|t| t.conference() == Conference::East)
            .count();
        assert_eq!(east, 15);
        assert_eq!(NBA_TEAMS.len() - east, 15);
    }

    #[test]
    fn test_find_team_by_name_or_abbreviation() {
        assert_eq!(find_team("Boston Celtics").unwrap().abbreviation, "BOS");
        assert_eq!(find_team("lal").unwrap().name, "Los Angeles Lakers");
        assert_eq!(find_team(" Utah Jazz ").unwrap().division, Division::Northwest);
        assert!(find_team("Seattle SuperSonics").is_none());
    }

    #[test]
    fn test_game_location() {
        assert_eq!(game_location("LAL vs. BOS"), GameLocation::Home);
        assert_eq!(game_location("LAL @ OKC"), GameLocation::Away);
        assert_eq!(game_location("LAL-OKC"), GameLocation::Unknown);
        assert_eq!(GameLocation::Away.as_str(), "away");
    }

    #[test]
    fn test_opponent_from_matchup() {
        assert_eq!(opponent_from_matchup("LAL @ OKC", "LAL"), Some("OKC"));
        assert_eq!(opponent_from_matchup("BOS vs. LAL", "LAL"), Some("BOS"));
        assert_eq!(opponent_from_matchup("NYK @ BOS", "BOS"), Some("NYK"));
        assert_eq!(opponent_from_matchup("LAL-OKC", "LAL"), None);
    }
}
