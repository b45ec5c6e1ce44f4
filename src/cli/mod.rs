//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::core::filters::FilterModel;
use types::{
    parse_date, Conference, Division, EntityKind, GameType, LastNGames, Outcome, SeasonLabel,
    SeasonType,
};

/// Filter arguments shared between commands, mirroring the stats API
/// query parameters.
#[derive(Debug, Default, Args)]
pub struct FilterArgs {
    /// Earliest game date, inclusive (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub date_from: Option<NaiveDate>,

    /// Latest game date, inclusive (YYYY-MM-DD).
    #[clap(long, value_parser = parse_date)]
    pub date_to: Option<NaiveDate>,

    /// Only the most recent N games (1-100).
    #[clap(long, short = 'n')]
    pub last_n_games: Option<LastNGames>,

    /// Season label (e.g. 2024-25).
    #[clap(long, short)]
    pub season: Option<SeasonLabel>,

    #[clap(long, value_enum)]
    pub season_type: Option<SeasonType>,

    /// Opponent division.
    #[clap(long, value_enum)]
    pub division: Option<Division>,

    /// Opponent conference.
    #[clap(long, value_enum)]
    pub conference: Option<Conference>,

    /// Interconference or intraconference games.
    #[clap(long, value_enum)]
    pub game_type: Option<GameType>,

    #[clap(long, value_enum)]
    pub outcome: Option<Outcome>,

    /// Opponent team (repeatable): `--opponent "Boston Celtics" --opponent MIA`.
    #[clap(long = "opponent")]
    pub opponents: Vec<String>,
}

impl FilterArgs {
    /// The filter model these arguments describe.
    pub fn to_filter_model(&self) -> FilterModel {
        let mut model = FilterModel::new();
        model.set_date_from(self.date_from);
        model.set_date_to(self.date_to);
        model.set_last_n_games(self.last_n_games);
        if let Some(season) = self.season {
            model.set_season(season.to_string());
        }
        if let Some(v) = self.season_type {
            model.set_season_type(v.as_str());
        }
        if let Some(v) = self.division {
            model.set_division(v.as_str());
        }
        if let Some(v) = self.conference {
            model.set_conference(v.as_str());
        }
        if let Some(v) = self.game_type {
            model.set_game_type(v.as_str());
        }
        if let Some(v) = self.outcome {
            model.set_outcome(v.as_str());
        }
        for team in &self.opponents {
            if !model.criteria().opponents.contains(team.trim()) {
                model.toggle_opponent(team);
            }
        }
        model
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch a game log from the stats API and show the current season
    /// split and per-season totals.
    Stats {
        #[clap(value_enum)]
        kind: EntityKind,

        /// Player or team name as the stats API knows it.
        name: String,

        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of tables.
        #[clap(long)]
        json: bool,

        /// Reference date for the current season window (defaults to today).
        #[clap(long, value_parser = parse_date)]
        as_of: Option<NaiveDate>,
    },

    /// Per-season totals only, preferring the server's precomputed summaries.
    Seasonal {
        #[clap(value_enum)]
        kind: EntityKind,

        name: String,

        #[clap(flatten)]
        filters: FilterArgs,

        #[clap(long)]
        json: bool,
    },

    /// Run the same pipeline over a saved game log, filtering locally.
    Local {
        /// JSON file holding a stats response or a bare array of games.
        path: PathBuf,

        #[clap(flatten)]
        filters: FilterArgs,

        #[clap(long)]
        json: bool,

        #[clap(long, value_parser = parse_date)]
        as_of: Option<NaiveDate>,
    },

    /// Print the query parameters a filter set serializes to.
    FilterQuery {
        #[clap(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "basketify", about = "NBA player and team stats CLI")]
pub struct Basketify {
    /// Stats API base URL (or set `BASKETIFY_API_URL`).
    #[clap(long, global = true)]
    pub api_url: Option<String>,

    /// Debug logging on stderr (`RUST_LOG` overrides).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
