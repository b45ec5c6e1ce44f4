//! Error types for the Basketify stats engine and CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("API URL not provided and {env_var} environment variable not set")]
    MissingApiUrl { env_var: String },

    #[error("Invalid API URL: {url}")]
    InvalidApiUrl { url: String },

    #[error("Invalid season: {value} (expected e.g. 2024-25)")]
    InvalidSeason { value: String },

    #[error("Invalid {field}: {value}")]
    InvalidFilterValue { field: String, value: String },

    #[error("Last N games must be between 1 and 100, got {value}")]
    InvalidLastNGames { value: String },

    #[error("{kind} not found: {name}")]
    EntityNotFound { kind: String, name: String },

    #[error("Stats API returned no data")]
    NoData,
}
