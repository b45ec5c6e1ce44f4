//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod stats_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let stats_error = StatsError::from(json_error);

        match stats_error {
            StatsError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        match stats_error {
            StatsError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let stats_error = StatsError::from(header_error);

        match stats_error {
            StatsError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_date_parse_error_conversion() {
        let parse_error = chrono::NaiveDate::parse_from_str("2025-13-45", "%Y-%m-%d").unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidDate(_) => (),
            _ => panic!("Expected InvalidDate error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "ten".parse::<u32>().unwrap_err();
        let stats_error = StatsError::from(parse_error);

        match stats_error {
            StatsError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_missing_api_url_error() {
        let error = StatsError::MissingApiUrl {
            env_var: "BASKETIFY_API_URL".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("API URL not provided"));
        assert!(error_string.contains("BASKETIFY_API_URL"));
    }

    #[test]
    fn test_invalid_api_url_error() {
        let error = StatsError::InvalidApiUrl {
            url: "localhost".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid API URL: localhost");
    }

    #[test]
    fn test_invalid_last_n_games_error() {
        let error = StatsError::InvalidLastNGames {
            value: "250".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Last N games must be between 1 and 100, got 250"
        );
    }

    #[test]
    fn test_entity_not_found_error() {
        let error = StatsError::EntityNotFound {
            kind: "player".to_string(),
            name: "John Doe".to_string(),
        };
        assert_eq!(error.to_string(), "player not found: John Doe");
    }

    #[test]
    fn test_no_data_error() {
        let error = StatsError::NoData;
        assert_eq!(error.to_string(), "Stats API returned no data");
        assert_eq!(format!("{:?}", error), "NoData");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let stats_error = StatsError::from(io_error);

        let error_trait: &dyn std::error::Error = &stats_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(StatsError::NoData)
        }

        match test_function().unwrap_err() {
            StatsError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }
}
