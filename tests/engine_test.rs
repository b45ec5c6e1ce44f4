//! Integration tests for season partitioning and aggregation

use basketify_stats::{
    aggregate, partition,
    stats::{
        compute::{seasonal_or_aggregate, summaries_match},
        types::GameLog,
    },
    GameRecord, SeasonLabel, SeasonalSummary,
};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scored(y: i32, m: u32, d: u32, points: f64) -> GameRecord {
    GameRecord {
        points,
        ..GameRecord::new(date(y, m, d))
    }
}

fn shooting(made: f64, pct: f64) -> GameRecord {
    GameRecord {
        field_goals_made: made,
        field_goal_percentage: Some(pct),
        ..GameRecord::new(date(2024, 12, 1))
    }
}

fn mixed_log() -> Vec<GameRecord> {
    vec![
        scored(2023, 3, 10, 18.0),
        scored(2024, 9, 30, 12.0),
        scored(2024, 10, 1, 25.0),
        scored(2025, 2, 14, 30.0),
        GameRecord::future(date(2025, 3, 1)),
        scored(2025, 8, 31, 9.0),
        GameRecord::future(date(2023, 1, 1)),
    ]
}

#[test]
fn test_partition_is_exhaustive_without_duplicates() {
    let games = mixed_log();
    let split = partition(&games, date(2025, 1, 1));

    let excluded: Vec<&GameRecord> = games
        .iter()
        .filter(|g| !split.current.contains(g) && !split.future.contains(g))
        .collect();
    assert_eq!(
        split.current.len() + split.future.len() + excluded.len(),
        games.len()
    );
    assert!(split.current.iter().all(|g| !split.future.contains(g)));

    let current: Vec<NaiveDate> = split.current.iter().map(|g| g.date).collect();
    assert_eq!(current, vec![date(2024, 10, 1), date(2025, 2, 14), date(2025, 8, 31)]);
    assert_eq!(split.future.len(), 2);
}

#[test]
fn test_window_boundaries() {
    assert_eq!(SeasonLabel::from_date(date(2024, 9, 30)), SeasonLabel::new(2023));
    assert_eq!(SeasonLabel::from_date(date(2024, 10, 1)), SeasonLabel::new(2024));

    let games = vec![scored(2024, 9, 30, 1.0), scored(2024, 10, 1, 2.0)];
    let before = partition(&games, date(2024, 9, 30));
    assert_eq!(before.current.len(), 0);
    let after = partition(&games, date(2024, 10, 1));
    assert_eq!(after.current.len(), 1);
    assert_eq!(after.current[0].points, 2.0);
}

#[test]
fn test_empty_input() {
    let split = partition(&[], date(2025, 1, 1));
    assert!(split.current.is_empty() && split.future.is_empty());
    assert!(aggregate(&[]).is_empty());
}

#[test]
fn test_points_sum_per_season() {
    let games = vec![
        scored(2024, 11, 1, 20.0),
        scored(2024, 12, 1, 21.0),
        scored(2025, 1, 1, 22.0),
    ];
    let seasons = aggregate(&games);
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].season, "2024-25");
    assert_eq!(seasons[0].points, 63.0);
    assert_eq!(seasons[0].games_played, 3);
}

#[test]
fn test_percentage_recomputed_from_totals() {
    let seasons = aggregate(&[shooting(8.0, 0.5), shooting(2.0, 1.0)]);
    let s = &seasons[0];
    assert_eq!(s.field_goals_made, 10.0);
    assert_eq!(s.field_goals_attempted, 18.0);
    assert!((s.field_goal_percentage - 10.0 / 18.0).abs() < 1e-12);
    assert_eq!(s.three_point_percentage, 0.0);
}

#[test]
fn test_future_games_never_aggregated() {
    let predicted = GameRecord {
        points: 40.0,
        ..GameRecord::future(date(2024, 12, 2))
    };
    let seasons = aggregate(&[scored(2024, 12, 1, 10.0), predicted]);
    assert_eq!(seasons.len(), 1);
    assert_eq!(seasons[0].points, 10.0);
    assert_eq!(seasons[0].games_played, 1);
}

#[test]
fn test_repeated_calls_are_identical() {
    let games = mixed_log();
    assert_eq!(partition(&games, date(2025, 1, 1)), partition(&games, date(2025, 1, 1)));
    assert_eq!(aggregate(&games), aggregate(&games));
}

#[test]
fn test_client_totals_match_server_totals() {
    let raw = r#"{
        "stats": [
            {"date": "2024-11-01_00-00-00", "points": 28, "fieldGoalsMade": 10, "fieldGoalPercentage": 0.5,
             "freeThrowsMade": 6, "freeThrowPercentage": 0.75},
            {"date": "2024-11-03_00-00-00", "points": 22, "fieldGoalsMade": 9, "fieldGoalPercentage": 0.45}
        ],
        "seasonal_stats": [
            {"season": "2024-25", "points": 50, "fieldGoalsMade": 19, "fieldGoalsAttempted": 40,
             "fieldGoalPercentage": 0.475, "freeThrowsMade": 6, "freeThrowsAttempted": 8,
             "freeThrowPercentage": 0.75, "gamesPlayed": 2}
        ]
    }"#;
    let response = serde_json::from_str::<GameLog>(raw).unwrap().into_response();

    let client = aggregate(&response.stats);
    let server: Vec<SeasonalSummary> =
        seasonal_or_aggregate(&response.seasonal_stats, &response.stats);
    assert_eq!(client.len(), server.len());
    assert!(summaries_match(&client[0], &server[0], 1e-9));
}
