//! Filter vocabularies shared by player and team stats views.
//!
//! Each enum renders to the exact string the stats API expects (`Display`)
//! and parses leniently from user input (`FromStr`). The `All` variants of
//! [`GameType`] and [`Outcome`] mean "no constraint" and are never sent.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel filter value meaning "no constraint".
pub const ALL: &str = "All";

fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn invalid(field: &str, value: &str) -> StatsError {
    StatsError::InvalidFilterValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}

/// Phase of the NBA calendar a game was played in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum SeasonType {
    #[serde(rename = "Preseason")]
    Preseason,
    #[serde(rename = "Regular Season")]
    RegularSeason,
    #[serde(rename = "Postseason", alias = "Playoffs")]
    Postseason,
    #[serde(rename = "NBA Cup Finals", alias = "NBA Cup")]
    NbaCup,
    #[serde(rename = "Play-In Tournament", alias = "Play-In")]
    PlayIn,
}

impl SeasonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeasonType::Preseason => "Preseason",
            SeasonType::RegularSeason => "Regular Season",
            SeasonType::Postseason => "Postseason",
            SeasonType::NbaCup => "NBA Cup Finals",
            SeasonType::PlayIn => "Play-In Tournament",
        }
    }
}

impl fmt::Display for SeasonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeasonType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "preseason" => Ok(SeasonType::Preseason),
            "regularseason" | "regular" => Ok(SeasonType::RegularSeason),
            "postseason" | "playoffs" => Ok(SeasonType::Postseason),
            "nbacupfinals" | "nbacup" | "cup" => Ok(SeasonType::NbaCup),
            "playintournament" | "playin" => Ok(SeasonType::PlayIn),
            _ => Err(invalid("season type", s)),
        }
    }
}

/// NBA conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Conference {
    East,
    West,
}

impl Conference {
    pub fn as_str(&self) -> &'static str {
        match self {
            Conference::East => "East",
            Conference::West => "West",
        }
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Conference {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "east" | "eastern" => Ok(Conference::East),
            "west" | "western" => Ok(Conference::West),
            _ => Err(invalid("conference", s)),
        }
    }
}

/// NBA division.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum Division {
    Atlantic,
    Central,
    Southeast,
    Northwest,
    Pacific,
    Southwest,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Atlantic => "Atlantic",
            Division::Central => "Central",
            Division::Southeast => "Southeast",
            Division::Northwest => "Northwest",
            Division::Pacific => "Pacific",
            Division::Southwest => "Southwest",
        }
    }

    /// Conference the division belongs to.
    pub fn conference(&self) -> Conference {
        match self {
            Division::Atlantic | Division::Central | Division::Southeast => Conference::East,
            Division::Northwest | Division::Pacific | Division::Southwest => Conference::West,
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Division {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "atlantic" => Ok(Division::Atlantic),
            "central" => Ok(Division::Central),
            "southeast" => Ok(Division::Southeast),
            "northwest" => Ok(Division::Northwest),
            "pacific" => Ok(Division::Pacific),
            "southwest" => Ok(Division::Southwest),
            _ => Err(invalid("division", s)),
        }
    }
}

/// Whether the opponent plays in the same conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum GameType {
    #[default]
    All,
    Interconference,
    Intraconference,
}

impl GameType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameType::All => ALL,
            GameType::Interconference => "Interconference",
            GameType::Intraconference => "Intraconference",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "all" => Ok(GameType::All),
            "interconference" | "inter" => Ok(GameType::Interconference),
            "intraconference" | "intra" => Ok(GameType::Intraconference),
            _ => Err(invalid("game type", s)),
        }
    }
}

/// Game outcome filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Outcome {
    #[default]
    All,
    Win,
    Loss,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::All => ALL,
            Outcome::Win => "Win",
            Outcome::Loss => "Loss",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match normalize(s).as_str() {
            "all" => Ok(Outcome::All),
            "win" | "w" => Ok(Outcome::Win),
            "loss" | "l" => Ok(Outcome::Loss),
            _ => Err(invalid("outcome", s)),
        }
    }
}
