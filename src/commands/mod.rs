//! Command implementations for the basketify CLI

pub mod common;
pub mod filter_query;
pub mod local;
pub mod seasonal;
pub mod stats_view;


pub use filter_query::handle_filter_query;
pub use local::handle_local;
pub use seasonal::handle_seasonal;
pub use stats_view::{handle_stats, StatsParams};
