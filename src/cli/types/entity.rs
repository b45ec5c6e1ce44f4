//! Entity kinds whose stats can be viewed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::SeasonLabel;

/// First season with team game logs available.
pub const FIRST_TEAM_SEASON: i32 = 2009;
/// First season with player game logs available.
pub const FIRST_PLAYER_SEASON: i32 = 2022;
/// Most recent season offered in the filter panel.
pub const LATEST_SEASON: i32 = 2024;

/// Players and teams are parallel entity kinds sharing every filter
/// vocabulary except the list of selectable seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Player,
    Team,
}

impl EntityKind {
    /// Path segment used by the stats API (`/api/stats/{kind}/{name}`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Team => "team",
        }
    }

    /// Seasons selectable for this kind, oldest first.
    pub fn season_options(&self) -> Vec<SeasonLabel> {
        let first = match self {
            EntityKind::Player => FIRST_PLAYER_SEASON,
            EntityKind::Team => FIRST_TEAM_SEASON,
        };
        (first..=LATEST_SEASON).map(SeasonLabel::new).collect()
    }

    pub fn offers_season(&self, season: SeasonLabel) -> bool {
        self.season_options().contains(&season)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
