//! Game logs, season bucketing and aggregation.
//!
//! - `types`: game records and seasonal summaries as the stats API sends them
//! - `partition`: current/future split of a game log around a reference date
//! - `compute`: per-season aggregation
//! - `apply`: client-side filter application
//! - `teams`: NBA team directory and matchup parsing
//! - `http`: stats API client

pub mod apply;
pub mod compute;
pub mod http;
pub mod partition;
pub mod teams;
pub mod types;

pub use apply::apply_filters;
pub use compute::{aggregate, seasonal_or_aggregate};
pub use http::{resolve_api_url, StatsClient};
pub use partition::{partition, SeasonPartition, SeasonWindow};
pub use types::{GameLog, GameRecord, SeasonalSummary, StatsResponse, WinLoss};
