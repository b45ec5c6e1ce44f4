//! Report building and rendering shared across commands.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    cli::types::{EntityKind, SeasonLabel},
    core::filters::{FilterCriteria, FilterModel},
    stats::{
        apply::opponent_team,
        compute::{newest_first, seasonal_or_aggregate},
        http::{resolve_api_url, StatsClient},
        partition::{partition, SeasonWindow},
        types::{GameRecord, SeasonalSummary, StatsResponse, WinLoss},
    },
    Result, StatsError,
};

/// Today's date in local time, the default reference for the season window.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Build a client from `--api-url` or `BASKETIFY_API_URL`.
pub fn build_client(api_url: Option<String>) -> Result<StatsClient> {
    Ok(StatsClient::new(resolve_api_url(api_url)?))
}

/// Reject a season filter outside the seasons offered for `kind`.
pub fn check_season(kind: EntityKind, filters: &FilterModel) -> Result<()> {
    let Some(raw) = filters
        .criteria()
        .season
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };
    let season: SeasonLabel = raw.parse()?;
    if kind.offers_season(season) {
        Ok(())
    } else {
        Err(StatsError::InvalidFilterValue {
            field: format!("{kind} season"),
            value: raw.to_string(),
        })
    }
}

/// Everything a stats view shows for one game log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    pub as_of: NaiveDate,
    pub window_start: NaiveDate,
    pub window_end: NaiveDate,
    pub filters: Vec<String>,
    /// Current-season games, most recent first.
    pub current: Vec<GameRecord>,
    pub future: Vec<GameRecord>,
    /// Seasonal totals, newest season first.
    pub seasons: Vec<SeasonalSummary>,
}

impl StatsReport {
    pub fn is_empty(&self) -> bool {
        self.current.is_empty() && self.future.is_empty() && self.seasons.is_empty()
    }
}

/// Partition and aggregate `response`. Server-side seasonal totals are
/// used as-is when the response carries any.
pub fn build_report(
    response: &StatsResponse,
    as_of: NaiveDate,
    criteria: &FilterCriteria,
) -> StatsReport {
    let window = SeasonWindow::containing(as_of);
    let split = partition(&response.stats, as_of);
    let current = split.current_reversed().into_iter().cloned().collect();
    StatsReport {
        as_of,
        window_start: window.start,
        window_end: window.end,
        filters: criteria.describe(),
        current,
        future: split.future,
        seasons: newest_first(seasonal_or_aggregate(
            &response.seasonal_stats,
            &response.stats,
        )),
    }
}

fn opponent_label(game: &GameRecord) -> String {
    if let Some(team) = opponent_team(game) {
        return team.name.to_string();
    }
    game.opponent
        .clone()
        .or_else(|| game.matchup.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn result_label(game: &GameRecord) -> &'static str {
    match game.outcome() {
        Some(WinLoss::Win) => "W",
        Some(WinLoss::Loss) => "L",
        None if game.is_future_game => "P",
        None => "-",
    }
}

/// Percentage as a 0-100 value with one decimal.
pub fn format_pct(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn format_game_row(game: &GameRecord) -> String {
    format!(
        "{}  {:<24} {:<1}  {:>5.1} pts {:>4.1} reb {:>4.1} ast  FG {:.0}/{:.0}  3P {:.0}/{:.0}  FT {:.0}/{:.0}",
        game.date,
        opponent_label(game),
        result_label(game),
        game.points,
        game.rebounds,
        game.assists,
        game.field_goals_made,
        game.field_goals_attempted(),
        game.three_points_made,
        game.three_points_attempted(),
        game.free_throws_made,
        game.free_throws_attempted(),
    )
}

/// Season totals followed by per-game averages on a second line.
pub fn format_summary_rows(summary: &SeasonalSummary) -> [String; 2] {
    let avg = summary.per_game();
    [
        format!(
            "{}  GP {:>3}  PTS {:.0}  REB {:.0}  AST {:.0}  FG {:.0}/{:.0} ({})  3P {:.0}/{:.0} ({})  FT {:.0}/{:.0} ({})  STL {:.0}  BLK {:.0}  TOV {:.0}",
            summary.season,
            summary.games_played,
            summary.points,
            summary.rebounds,
            summary.assists,
            summary.field_goals_made,
            summary.field_goals_attempted,
            format_pct(summary.field_goal_percentage),
            summary.three_points_made,
            summary.three_points_attempted,
            format_pct(summary.three_point_percentage),
            summary.free_throws_made,
            summary.free_throws_attempted,
            format_pct(summary.free_throw_percentage),
            summary.steals,
            summary.blocks,
            summary.turnovers,
        ),
        format!(
            "         per game  {:.1} pts  {:.1} reb  {:.1} ast  {:.1} stl  {:.1} blk  {:.1} tov",
            avg.points, avg.rebounds, avg.assists, avg.steals, avg.blocks, avg.turnovers,
        ),
    ]
}

pub fn print_summaries(summaries: &[SeasonalSummary]) {
    if summaries.is_empty() {
        println!("No seasonal totals.");
        return;
    }
    for summary in summaries {
        for line in format_summary_rows(summary) {
            println!("{line}");
        }
    }
}

pub fn print_filters(filters: &[String]) {
    if filters.is_empty() {
        println!("Filters: none");
    } else {
        println!("Filters: {}", filters.join("; "));
    }
}

/// Print a report as tables or pretty JSON.
pub fn print_report(report: &StatsReport, as_json: bool) -> Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    print_filters(&report.filters);
    println!(
        "\nCurrent season ({} to {}): {} games",
        report.window_start,
        report.window_end,
        report.current.len()
    );
    for game in &report.current {
        println!("{}", format_game_row(game));
    }

    if !report.future.is_empty() {
        println!("\nUpcoming (predicted): {} games", report.future.len());
        for game in &report.future {
            println!("{}", format_game_row(game));
        }
    }

    println!("\nSeasonal totals:");
    print_summaries(&report.seasons);
    Ok(())
}

/// Log the serialized filter map at debug level.
pub fn log_filters(model: &FilterModel) {
    let query = model.serialize();
    tracing::debug!(filters = ?query, "active filters");
}
