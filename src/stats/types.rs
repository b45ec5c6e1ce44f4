use super::teams::{game_location, GameLocation};
use crate::cli::types::{SeasonLabel, SeasonType};
use chrono::NaiveDate;
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use tracing::debug;


/// Game dates arrive as `YYYY-MM-DD`, sometimes suffixed (`2025-04-06_1`)
/// when a date key had to be disambiguated upstream.
fn de_game_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = Deserialize::deserialize(deserializer)?;
    let day = raw.split('_').next().unwrap_or_default();
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(D::Error::custom)
}

/// Season types outside the known vocabulary (upstream writes `Unknown`
/// when it cannot tell) are read as absent.
fn de_season_type<'de, D>(deserializer: D) -> Result<Option<SeasonType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value.parse::<SeasonType>() {
        Ok(season_type) => Some(season_type),
        Err(e) => {
            debug!("treating season type as absent: {e}");
            None
        }
    }))
}

/// Result of a played game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinLoss {
    #[serde(alias = "W")]
    Win,
    #[serde(alias = "L")]
    Loss,
}

/// One game's statistics for a player or team.
///
/// Records are immutable once received. When `is_future_game` is set the
/// box-score numbers are model predictions and `win_loss` is always `None`
/// (enforced on deserialization and by [`GameRecord::outcome`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GameRecordWire")]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub date: NaiveDate,
    pub opponent: Option<String>,
    pub is_future_game: bool,
    pub season_type: Option<SeasonType>,
    pub game_location: Option<String>,
    pub win_loss: Option<WinLoss>,
    /// Raw matchup string, e.g. `LAL @ OKC` or `LAL vs. BOS`.
    pub matchup: Option<String>,
    /// Abbreviation of the team the record belongs to.
    pub team: Option<String>,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub field_goals_made: f64,
    pub field_goal_percentage: Option<f64>,
    pub three_points_made: f64,
    pub three_point_percentage: Option<f64>,
    pub free_throws_made: f64,
    pub free_throw_percentage: Option<f64>,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameRecordWire {
    #[serde(deserialize_with = "de_game_date")]
    date: NaiveDate,
    #[serde(default)]
    opponent: Option<String>,
    #[serde(default, alias = "is_future_game")]
    is_future_game: bool,
    #[serde(default, alias = "season_type", deserialize_with = "de_season_type")]
    season_type: Option<SeasonType>,
    #[serde(default, alias = "game_location")]
    game_location: Option<String>,
    #[serde(default, alias = "WinLoss")]
    win_loss: Option<WinLoss>,
    #[serde(default, alias = "Matchup")]
    matchup: Option<String>,
    #[serde(default, alias = "Team")]
    team: Option<String>,
    #[serde(default)]
    points: Option<f64>,
    #[serde(default)]
    rebounds: Option<f64>,
    #[serde(default)]
    assists: Option<f64>,
    #[serde(default)]
    field_goals_made: Option<f64>,
    #[serde(default)]
    field_goal_percentage: Option<f64>,
    #[serde(default)]
    three_points_made: Option<f64>,
    #[serde(default)]
    three_point_percentage: Option<f64>,
    #[serde(default)]
    free_throws_made: Option<f64>,
    #[serde(default)]
    free_throw_percentage: Option<f64>,
    #[serde(default)]
    steals: Option<f64>,
    #[serde(default)]
    blocks: Option<f64>,
    #[serde(default)]
    turnovers: Option<f64>,
}

impl From<GameRecordWire> for GameRecord {
    fn from(w: GameRecordWire) -> Self {
        GameRecord {
            date: w.date,
            opponent: w.opponent,
            is_future_game: w.is_future_game,
            season_type: w.season_type,
            game_location: w.game_location.or_else(|| {
                w.matchup
                    .as_deref()
                    .map(game_location)
                    .filter(|loc| *loc != GameLocation::Unknown)
                    .map(|loc| loc.as_str().to_string())
            }),
            win_loss: if w.is_future_game { None } else { w.win_loss },
            matchup: w.matchup,
            team: w.team,
            points: w.points.unwrap_or_default(),
            rebounds: w.rebounds.unwrap_or_default(),
            assists: w.assists.unwrap_or_default(),
            field_goals_made: w.field_goals_made.unwrap_or_default(),
            field_goal_percentage: w.field_goal_percentage,
            three_points_made: w.three_points_made.unwrap_or_default(),
            three_point_percentage: w.three_point_percentage,
            free_throws_made: w.free_throws_made.unwrap_or_default(),
            free_throw_percentage: w.free_throw_percentage,
            steals: w.steals.unwrap_or_default(),
            blocks: w.blocks.unwrap_or_default(),
            turnovers: w.turnovers.unwrap_or_default(),
        }
    }
}

impl GameRecord {
    /// A played game on `date` with every stat zeroed.
    pub fn new(date: NaiveDate) -> Self {
        GameRecord {
            date,
            opponent: None,
            is_future_game: false,
            season_type: None,
            game_location: None,
            win_loss: None,
            matchup: None,
            team: None,
            points: 0.0,
            rebounds: 0.0,
            assists: 0.0,
            field_goals_made: 0.0,
            field_goal_percentage: None,
            three_points_made: 0.0,
            three_point_percentage: None,
            free_throws_made: 0.0,
            free_throw_percentage: None,
            steals: 0.0,
            blocks: 0.0,
            turnovers: 0.0,
        }
    }

    /// A scheduled game whose numbers are predictions.
    pub fn future(date: NaiveDate) -> Self {
        GameRecord {
            is_future_game: true,
            ..GameRecord::new(date)
        }
    }

    pub fn season(&self) -> SeasonLabel {
        SeasonLabel::from_date(self.date)
    }

    /// Outcome of the game; future games never have one.
    pub fn outcome(&self) -> Option<WinLoss> {
        if self.is_future_game {
            None
        } else {
            self.win_loss
        }
    }

    pub fn field_goals_attempted(&self) -> f64 {
        attempts(self.field_goals_made, self.field_goal_percentage)
    }

    pub fn three_points_attempted(&self) -> f64 {
        attempts(self.three_points_made, self.three_point_percentage)
    }

    pub fn free_throws_attempted(&self) -> f64 {
        attempts(self.free_throws_made, self.free_throw_percentage)
    }
}

/// Attempts implied by makes and a make percentage. A zero, missing or
/// non-finite percentage means no attempts were recorded.
pub fn attempts(made: f64, percentage: Option<f64>) -> f64 {
    match percentage {
        Some(pct) if pct > 0.0 && pct.is_finite() => made / pct,
        _ => 0.0,
    }
}

/// `made / attempted`, or 0 when nothing was attempted.
pub fn percentage(made: f64, attempted: f64) -> f64 {
    if attempted > 0.0 {
        made / attempted
    } else {
        0.0
    }
}

/// One season's aggregated totals.
///
/// Percentages are always recomputed from summed makes and attempts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonalSummary {
    pub season: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub field_goals_made: f64,
    pub field_goals_attempted: f64,
    pub field_goal_percentage: f64,
    pub three_points_made: f64,
    pub three_points_attempted: f64,
    pub three_point_percentage: f64,
    pub free_throws_made: f64,
    pub free_throws_attempted: f64,
    pub free_throw_percentage: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    #[serde(alias = "games_played")]
    pub games_played: u32,
}

/// Per-game averages derived from a [`SeasonalSummary`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerGameAverages {
    pub season: String,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
    pub field_goals_made: f64,
    pub three_points_made: f64,
    pub free_throws_made: f64,
    pub steals: f64,
    pub blocks: f64,
    pub turnovers: f64,
    pub games_played: u32,
}

impl SeasonalSummary {
    pub fn new(season: SeasonLabel) -> Self {
        SeasonalSummary {
            season: season.to_string(),
            ..SeasonalSummary::default()
        }
    }

    pub fn per_game(&self) -> PerGameAverages {
        let avg = |total: f64| {
            if self.games_played == 0 {
                0.0
            } else {
                total / f64::from(self.games_played)
            }
        };
        PerGameAverages {
            season: self.season.clone(),
            points: avg(self.points),
            rebounds: avg(self.rebounds),
            assists: avg(self.assists),
            field_goals_made: avg(self.field_goals_made),
            three_points_made: avg(self.three_points_made),
            free_throws_made: avg(self.free_throws_made),
            steals: avg(self.steals),
            blocks: avg(self.blocks),
            turnovers: avg(self.turnovers),
            games_played: self.games_played,
        }
    }
}

/// Inbound payload of `GET /api/stats/{kind}/{name}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub stats: Vec<GameRecord>,
    #[serde(default)]
    pub seasonal_stats: Vec<SeasonalSummary>,
}

/// A saved game log: either a full API response or a bare `stats` array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum GameLog {
    Games(Vec<GameRecord>),
    Response(StatsResponse),
}

impl GameLog {
    pub fn into_response(self) -> StatsResponse {
        match self {
            GameLog::Response(r) => r,
            GameLog::Games(stats) => StatsResponse {
                stats,
                seasonal_stats: Vec::new(),
            },
        }
    }
}
