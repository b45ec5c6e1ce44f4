//! Type-safe wrappers and enums for NBA stats filtering.

pub mod entity;
pub mod filters;
pub mod time;

pub use entity::EntityKind;
pub use filters::{Conference, Division, GameType, Outcome, SeasonType, ALL};
pub use time::{parse_date, LastNGames, SeasonLabel};
