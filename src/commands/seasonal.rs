//! Seasonal totals command.

use super::common::{build_client, check_season, log_filters, print_filters, print_summaries};
use crate::{
    cli::types::EntityKind,
    core::filters::FilterModel,
    stats::compute::{newest_first, seasonal_or_aggregate},
    Result, StatsError,
};

pub async fn handle_seasonal(
    api_url: Option<String>,
    kind: EntityKind,
    name: &str,
    filters: &FilterModel,
    as_json: bool,
) -> Result<()> {
    check_season(kind, filters)?;
    let client = build_client(api_url)?;
    log_filters(filters);

    let response = client.get_stats(kind, name, &filters.serialize()).await?;
    let seasons = newest_first(seasonal_or_aggregate(
        &response.seasonal_stats,
        &response.stats,
    ));
    if seasons.is_empty() {
        return Err(StatsError::NoData);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&seasons)?);
        return Ok(());
    }

    println!("{kind} {name}");
    print_filters(&filters.criteria().describe());
    print_summaries(&seasons);
    Ok(())
}
