//! Stats view command: fetch, partition and aggregate one game log.

use chrono::NaiveDate;
use tracing::info;

use super::common::{
    build_client, build_report, check_season, log_filters, print_report, today,
};
use crate::{cli::types::EntityKind, core::filters::FilterModel, Result, StatsError};

/// Parameters for the stats command
#[derive(Debug)]
pub struct StatsParams {
    pub api_url: Option<String>,
    pub kind: EntityKind,
    pub name: String,
    pub filters: FilterModel,
    pub as_json: bool,
    pub as_of: Option<NaiveDate>,
}

pub async fn handle_stats(params: StatsParams) -> Result<()> {
    check_season(params.kind, &params.filters)?;
    let client = build_client(params.api_url)?;
    log_filters(&params.filters);

    let response = client
        .get_stats(params.kind, &params.name, &params.filters.serialize())
        .await?;
    if response.stats.is_empty() && response.seasonal_stats.is_empty() {
        return Err(StatsError::NoData);
    }

    let as_of = params.as_of.unwrap_or_else(today);
    let report = build_report(&response, as_of, params.filters.criteria());
    info!(
        current = report.current.len(),
        future = report.future.len(),
        seasons = report.seasons.len(),
        "built {} report for {}",
        params.kind,
        params.name
    );

    if !params.as_json {
        println!("{} {}", params.kind, params.name);
    }
    print_report(&report, params.as_json)
}
