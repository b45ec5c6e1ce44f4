//! Basketify stats engine
//!
//! NBA player and team game logs from the Basketify stats API, bucketed into
//! the season in progress and upcoming games, aggregated per season, and
//! narrowed by a filter model that serializes to the API's query string.
//!
//! ## Features
//!
//! - **Season partitioning**: split a game log into current-season and future games
//! - **Seasonal aggregation**: per-season totals with percentages recomputed from makes and attempts
//! - **Filter model**: editable filter state that serializes to API query parameters
//! - **Local filtering**: replay the API's filter semantics over a saved game log
//!
//! ## Quick Start
//!
//! ```rust
//! use basketify_stats::{aggregate, partition, FilterModel, GameRecord};
//! use chrono::NaiveDate;
//!
//! let day = |m, d| NaiveDate::from_ymd_opt(2024, m, d).unwrap();
//! let games = vec![GameRecord::new(day(11, 2)), GameRecord::future(day(12, 25))];
//!
//! let split = partition(&games, day(12, 1));
//! assert_eq!((split.current.len(), split.future.len()), (1, 1));
//! assert_eq!(aggregate(&games)[0].games_played, 1);
//!
//! let mut filters = FilterModel::new();
//! filters.set_outcome("All");
//! assert!(filters.serialize().is_empty());
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export BASKETIFY_API_URL=http://localhost:8000
//! export BASKETIFY_API_TOKEN=...   # optional bearer token
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{EntityKind, LastNGames, SeasonLabel, SeasonType};
pub use core::filters::{FilterCriteria, FilterModel, FilterPanel, QueryMap};
pub use error::{Result, StatsError};
pub use stats::{
    aggregate, apply_filters, partition, GameRecord, SeasonPartition, SeasonalSummary,
    StatsClient, StatsResponse,
};

pub use core::http::API_TOKEN_ENV_VAR;
pub use stats::http::API_URL_ENV_VAR;
