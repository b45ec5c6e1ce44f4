//! Offline pipeline over a saved game log.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::common::{build_report, print_report, today, StatsReport};
use crate::{
    core::filters::FilterModel,
    stats::{
        apply::apply_filters,
        types::{GameLog, StatsResponse},
    },
    Result,
};

/// Read a saved stats response, or a bare array of games, from `path`.
pub fn load_game_log(path: &Path) -> Result<StatsResponse> {
    let raw = std::fs::read_to_string(path)?;
    let log: GameLog = serde_json::from_str(&raw)?;
    let response = log.into_response();
    debug!(
        games = response.stats.len(),
        "loaded game log from {}",
        path.display()
    );
    Ok(response)
}

/// Filter a saved log locally and build the report over the result.
///
/// Seasonal totals saved alongside the games were computed before any
/// filtering, so they are dropped whenever a filter is active and the
/// totals are re-aggregated from the filtered games.
pub fn local_report(path: &Path, filters: &FilterModel, as_of: NaiveDate) -> Result<StatsReport> {
    let saved = load_game_log(path)?;
    let query = filters.serialize();

    let response = if query.is_empty() {
        saved
    } else {
        StatsResponse {
            stats: apply_filters(&saved.stats, &query),
            seasonal_stats: Vec::new(),
        }
    };
    info!(
        games = response.stats.len(),
        filters = query.len(),
        "filtered local game log"
    );
    Ok(build_report(&response, as_of, filters.criteria()))
}

pub fn handle_local(
    path: &Path,
    filters: &FilterModel,
    as_json: bool,
    as_of: Option<NaiveDate>,
) -> Result<()> {
    let report = local_report(path, filters, as_of.unwrap_or_else(today))?;
    if !as_json {
        println!("{}", path.display());
    }
    print_report(&report, as_json)
}
