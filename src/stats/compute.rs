use std::collections::HashMap;

use tracing::debug;

use super::types::{percentage, GameRecord, SeasonalSummary};
use crate::cli::types::SeasonLabel;


/// Group played games by season, in first-seen order of season labels.
pub fn group_by_season(games: &[GameRecord]) -> Vec<(SeasonLabel, Vec<&GameRecord>)> {
    let mut index: HashMap<SeasonLabel, usize> = HashMap::new();
    let mut groups: Vec<(SeasonLabel, Vec<&GameRecord>)> = Vec::new();

    for game in games.iter().filter(|g| !g.is_future_game) {
        let season = game.season();
        let slot = *index.entry(season).or_insert_with(|| {
            groups.push((season, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(game);
    }
    groups
}

/// Add one game's counting stats and implied attempts to a running summary.
fn accumulate(summary: &mut SeasonalSummary, game: &GameRecord) {
    summary.points += game.points;
    summary.rebounds += game.rebounds;
    summary.assists += game.assists;
    summary.field_goals_made += game.field_goals_made;
    summary.field_goals_attempted += game.field_goals_attempted();
    summary.three_points_made += game.three_points_made;
    summary.three_points_attempted += game.three_points_attempted();
    summary.free_throws_made += game.free_throws_made;
    summary.free_throws_attempted += game.free_throws_attempted();
    summary.steals += game.steals;
    summary.blocks += game.blocks;
    summary.turnovers += game.turnovers;
    summary.games_played += 1;
}

/// Recompute shooting percentages from the summed makes and attempts.
fn finalize(summary: &mut SeasonalSummary) {
    summary.field_goal_percentage =
        percentage(summary.field_goals_made, summary.field_goals_attempted);
    summary.three_point_percentage =
        percentage(summary.three_points_made, summary.three_points_attempted);
    summary.free_throw_percentage =
        percentage(summary.free_throws_made, summary.free_throws_attempted);
}

/// Reduce a game log into one summary per season.
///
/// Future games are predictions and never count toward season totals.
/// Percentages are made / attempted over the whole season, not an average
/// of per-game percentages.
pub fn aggregate(games: &[GameRecord]) -> Vec<SeasonalSummary> {
    let summaries: Vec<SeasonalSummary> = group_by_season(games)
        .into_iter()
        .map(|(season, group)| {
            let mut summary = SeasonalSummary::new(season);
            for game in group {
                accumulate(&mut summary, game);
            }
            finalize(&mut summary);
            summary
        })
        .collect();

    debug!(
        games = games.len(),
        seasons = summaries.len(),
        "aggregated seasonal totals"
    );
    summaries
}

/// Summaries sorted newest season first, for display.
pub fn newest_first(mut summaries: Vec<SeasonalSummary>) -> Vec<SeasonalSummary> {
    summaries.sort_by(|a, b| b.season.cmp(&a.season));
    summaries
}

/// Server-provided seasonal totals when present, otherwise the client-side
/// aggregation of `games`.
pub fn seasonal_or_aggregate(
    server: &[SeasonalSummary],
    games: &[GameRecord],
) -> Vec<SeasonalSummary> {
    if server.is_empty() {
        aggregate(games)
    } else {
        server.to_vec()
    }
}

/// True when two summaries agree within `tolerance` on every field.
pub fn summaries_match(a: &SeasonalSummary, b: &SeasonalSummary, tolerance: f64) -> bool {
    let close = |x: f64, y: f64| (x - y).abs() <= tolerance;
    a.season == b.season
        && a.games_played == b.games_played
        && close(a.points, b.points)
        && close(a.rebounds, b.rebounds)
        && close(a.assists, b.assists)
        && close(a.field_goals_made, b.field_goals_made)
        && close(a.field_goals_attempted, b.field_goals_attempted)
        && close(a.field_goal_percentage, b.field_goal_percentage)
        && close(a.three_points_made, b.three_points_made)
        && close(a.three_points_attempted, b.three_points_attempted)
        && close(a.three_point_percentage, b.three_point_percentage)
        && close(a.free_throws_made, b.free_throws_made)
        && close(a.free_throws_attempted, b.free_throws_attempted)
        && close(a.free_throw_percentage, b.free_throw_percentage)
        && close(a.steals, b.steals)
        && close(a.blocks, b.blocks)
        && close(a.turnovers, b.turnovers)
}
