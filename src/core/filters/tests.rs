//! Unit tests for filter functionality

use super::*;

fn map(pairs: &[(&str, &str)]) -> QueryMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[cfg(test)]
mod opponent_set_tests {
    use super::*;

    #[test]
    fn test_from_joined_preserves_order_and_dedupes() {
        let set = OpponentSet::from_joined("Boston Celtics, Los Angeles Lakers,,Boston Celtics");
        let names: Vec<&str> = set.iter().collect();
        assert_eq!(names, vec!["Boston Celtics", "Los Angeles Lakers"]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut set = OpponentSet::new();
        set.toggle("Miami Heat");
        assert!(set.contains("Miami Heat"));
        set.toggle("Miami Heat");
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut set: OpponentSet = ["Atlanta Hawks", "Boston Celtics", "Chicago Bulls", "Utah Jazz"]
            .into_iter()
            .collect();
        set.toggle("Boston Celtics");
        assert_eq!(set.join(), "Atlanta Hawks,Chicago Bulls,Utah Jazz");
    }

    #[test]
    fn test_insert_rejects_blank_and_duplicates() {
        let mut set = OpponentSet::new();
        assert!(set.insert("Utah Jazz"));
        assert!(!set.insert("Utah Jazz"));
        assert!(!set.insert("   "));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_join_has_no_whitespace() {
        let set = OpponentSet::from_joined(" Denver Nuggets ,Phoenix Suns ");
        assert_eq!(set.join(), "Denver Nuggets,Phoenix Suns");
    }
}

#[cfg(test)]
mod filter_model_tests {
    use super::*;

    #[test]
    fn test_empty_model_serializes_to_empty_map() {
        assert!(FilterModel::new().serialize().is_empty());
    }

    #[test]
    fn test_outcome_all_is_omitted() {
        let mut model = FilterModel::new();
        model.set_outcome("All");
        assert!(!model.serialize().contains_key(OUTCOME));

        model.set_outcome("Win");
        assert_eq!(model.serialize().get(OUTCOME).map(String::as_str), Some("Win"));
    }

    #[test]
    fn test_all_sentinel_omitted_for_every_vocabulary_field() {
        let mut model = FilterModel::new();
        model.set_season_type("All");
        model.set_division("All");
        model.set_conference("All");
        model.set_game_type("All");
        model.set_outcome("All");
        assert!(model.serialize().is_empty());
    }

    #[test]
    fn test_empty_strings_omitted() {
        let mut model = FilterModel::new();
        model.set_season("");
        model.set_division("  ");
        model.set_conference("");
        assert!(model.serialize().is_empty());
    }

    #[test]
    fn test_full_serialization_keys() {
        let mut model = FilterModel::new();
        model.set_date_from(Some(date(2025, 1, 1)));
        model.set_date_to(Some(date(2025, 12, 31)));
        model.set_last_n_games(Some(LastNGames::new(10).unwrap()));
        model.set_season("2024-25");
        model.set_season_type("Regular Season");
        model.set_division("Pacific");
        model.set_conference("West");
        model.set_game_type("Interconference");
        model.set_outcome("Loss");
        model.toggle_opponent("Boston Celtics");
        model.toggle_opponent("Miami Heat");

        let expected = map(&[
            ("date_from", "2025-01-01"),
            ("date_to", "2025-12-31"),
            ("last_n_games", "10"),
            ("season", "2024-25"),
            ("season_type", "Regular Season"),
            ("division", "Pacific"),
            ("conference", "West"),
            ("game_type", "Interconference"),
            ("outcome", "Loss"),
            ("opponents", "Boston Celtics,Miami Heat"),
        ]);
        assert_eq!(model.serialize(), expected);
    }

    #[test]
    fn test_opponent_round_trip() {
        let mut model =
            FilterModel::initialize(&map(&[("opponents", "Boston Celtics,Los Angeles Lakers")]));
        model.toggle_opponent("Boston Celtics");
        assert_eq!(
            model.serialize(),
            map(&[("opponents", "Los Angeles Lakers")])
        );
    }

    #[test]
    fn test_removing_last_opponent_omits_key() {
        let mut model = FilterModel::initialize(&map(&[("opponents", "Utah Jazz")]));
        model.toggle_opponent("Utah Jazz");
        assert!(!model.serialize().contains_key(OPPONENTS));
    }

    #[test]
    fn test_initialize_reproduces_applied_map() {
        let applied = map(&[
            ("date_from", "2024-11-01"),
            ("last_n_games", "5"),
            ("season", "2024-25"),
            ("outcome", "Win"),
            ("opponents", "Atlanta Hawks,Chicago Bulls"),
        ]);
        assert_eq!(FilterModel::initialize(&applied).serialize(), applied);
    }

    #[test]
    fn test_initialize_drops_unparseable_values() {
        let model = FilterModel::initialize(&map(&[
            ("date_from", "not-a-date"),
            ("last_n_games", "500"),
            ("season", "2023-24"),
        ]));
        let criteria = model.criteria();
        assert!(criteria.date_from.is_none());
        assert!(criteria.last_n_games.is_none());
        assert_eq!(model.serialize(), map(&[("season", "2023-24")]));
    }

    #[test]
    fn test_initialize_with_all_sentinel_stays_empty() {
        let model = FilterModel::initialize(&map(&[("game_type", "All"), ("outcome", "All")]));
        assert!(model.serialize().is_empty());
        assert!(model.criteria().is_empty());
    }

    #[test]
    fn test_clear_resets_fully() {
        let mut model = FilterModel::initialize(&map(&[
            ("date_to", "2025-02-01"),
            ("division", "Atlantic"),
            ("opponents", "Boston Celtics"),
        ]));
        model.set_outcome("Win");
        model.clear();
        assert!(model.serialize().is_empty());
        assert_eq!(model, FilterModel::new());
    }

    #[test]
    fn test_apply_filters_invokes_callback_with_serialized_map() {
        let mut model = FilterModel::new();
        model.set_date_from(Some(date(2025, 1, 1)));

        let mut received = None;
        model.apply_filters(|criteria| received = Some(criteria));
        assert_eq!(received, Some(map(&[("date_from", "2025-01-01")])));
    }

    #[test]
    fn test_serialize_is_pure() {
        let mut model = FilterModel::new();
        model.set_conference("East");
        assert_eq!(model.serialize(), model.serialize());
    }
}

#[cfg(test)]
mod describe_tests {
    use super::*;

    #[test]
    fn test_describe_date_variants() {
        let mut criteria = FilterCriteria {
            date_from: Some(date(2025, 1, 1)),
            date_to: Some(date(2025, 2, 1)),
            ..FilterCriteria::default()
        };
        assert_eq!(criteria.describe(), vec!["Date range: 2025-01-01 to 2025-02-01"]);

        criteria.date_to = None;
        assert_eq!(criteria.describe(), vec!["From date: 2025-01-01"]);

        criteria.date_from = None;
        criteria.date_to = Some(date(2025, 2, 1));
        assert_eq!(criteria.describe(), vec!["To date: 2025-02-01"]);
    }

    #[test]
    fn test_describe_skips_all_and_orders_messages() {
        let criteria = FilterCriteria {
            last_n_games: Some(LastNGames::new(7).unwrap()),
            season: Some("2023-24".to_string()),
            division: Some("Central".to_string()),
            conference: Some("East".to_string()),
            game_type: Some("All".to_string()),
            outcome: Some("Win".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(
            criteria.describe(),
            vec![
                "Last 7 games",
                "Season: 2023-24",
                "Conference: East",
                "Division: Central",
                "Outcome: Win",
            ]
        );
    }

    #[test]
    fn test_describe_opponents() {
        let two = FilterCriteria {
            opponents: OpponentSet::from_joined("Boston Celtics,Miami Heat"),
            ..FilterCriteria::default()
        };
        assert_eq!(two.describe(), vec!["Opponents: Boston Celtics, Miami Heat"]);

        let three = FilterCriteria {
            opponents: OpponentSet::from_joined("Boston Celtics,Miami Heat,Utah Jazz"),
            ..FilterCriteria::default()
        };
        assert_eq!(three.describe(), vec!["Opponents: 3 teams selected"]);
    }
}

#[cfg(test)]
mod panel_tests {
    use super::*;

    #[test]
    fn test_panel_starts_closed_and_rejects_edits() {
        let mut panel = FilterPanel::new();
        assert_eq!(panel.state(), PanelState::Closed);
        assert!(panel.model().is_none());
        assert!(!panel.edit(|m| m.set_outcome("Win")));
        assert!(panel.apply().is_none());
        assert!(panel.clear().is_none());
    }

    #[test]
    fn test_apply_returns_map_and_closes() {
        let mut panel = FilterPanel::new();
        panel.open();
        assert!(panel.edit(|m| m.set_outcome("Win")));

        let applied = panel.apply().unwrap();
        assert_eq!(applied, map(&[("outcome", "Win")]));
        assert!(!panel.is_open());
        assert!(panel.is_filtered());
    }

    #[test]
    fn test_reopen_seeds_from_last_applied() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.edit(|m| m.toggle_opponent("Utah Jazz"));
        panel.apply();

        panel.open();
        let model = panel.model().unwrap();
        assert!(model.criteria().opponents.contains("Utah Jazz"));
    }

    #[test]
    fn test_close_discards_pending_edits() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.edit(|m| m.set_division("Pacific"));
        panel.close();

        panel.open();
        assert!(panel.model().unwrap().serialize().is_empty());
        assert!(!panel.is_filtered());
    }

    #[test]
    fn test_clear_without_active_filters_needs_no_refetch() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.edit(|m| m.set_conference("West"));
        assert_eq!(panel.clear(), Some(ClearOutcome { refetch: false }));
        assert!(!panel.is_open());
    }

    #[test]
    fn test_clear_after_apply_requests_refetch() {
        let mut panel = FilterPanel::new();
        panel.open();
        panel.edit(|m| m.set_conference("West"));
        panel.apply();

        panel.open();
        assert_eq!(panel.clear(), Some(ClearOutcome { refetch: true }));
        assert!(panel.last_applied().is_empty());

        panel.open();
        assert!(panel.model().unwrap().serialize().is_empty());
    }
}
