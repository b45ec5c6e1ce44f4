//! Multi-criteria filter model for stats views.
//!
//! The filter panel edits a [`FilterModel`]; on "Apply" the model is
//! serialized into a flat string map that is sent to the stats API as query
//! parameters and can be replayed client-side with
//! [`crate::stats::apply::apply_filters`].
//!
//! # Wire format
//!
//! | Field | Key | Emitted when |
//! | --- | --- | --- |
//! | date from / to | `date_from`, `date_to` | set |
//! | last N games | `last_n_games` | set |
//! | season | `season` | non-empty |
//! | season type, division, conference, game type, outcome | `season_type`, `division`, `conference`, `game_type`, `outcome` | non-empty and not `All` |
//! | opponents | `opponents` | at least one selected, comma-joined in selection order |
//!
//! Unset criteria never appear as keys.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::cli::types::{parse_date, LastNGames, ALL};

#[cfg(test)]
mod tests;

/// Serialized filter criteria, keyed by query parameter name.
pub type QueryMap = BTreeMap<String, String>;

pub const DATE_FROM: &str = "date_from";
pub const DATE_TO: &str = "date_to";
pub const LAST_N_GAMES: &str = "last_n_games";
pub const SEASON: &str = "season";
pub const SEASON_TYPE: &str = "season_type";
pub const DIVISION: &str = "division";
pub const CONFERENCE: &str = "conference";
pub const GAME_TYPE: &str = "game_type";
pub const OUTCOME: &str = "outcome";
pub const OPPONENTS: &str = "opponents";

/// Insertion-ordered set of opponent team names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpponentSet(Vec<String>);

impl OpponentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a comma-joined list, trimming names and dropping blanks and repeats.
    pub fn from_joined(joined: &str) -> Self {
        let mut set = Self::new();
        for name in joined.split(',') {
            set.insert(name);
        }
        set
    }

    /// Add `team` at the end unless already present. Returns whether it was added.
    pub fn insert(&mut self, team: &str) -> bool {
        let team = team.trim();
        if team.is_empty() || self.contains(team) {
            return false;
        }
        self.0.push(team.to_string());
        true
    }

    pub fn remove(&mut self, team: &str) -> bool {
        let team = team.trim();
        let before = self.0.len();
        self.0.retain(|t| t != team);
        self.0.len() != before
    }

    /// Remove `team` if selected, otherwise add it.
    pub fn toggle(&mut self, team: &str) {
        if !self.remove(team) {
            self.insert(team);
        }
    }

    pub fn contains(&self, team: &str) -> bool {
        self.0.iter().any(|t| t == team.trim())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Comma-joined with no surrounding whitespace.
    pub fn join(&self) -> String {
        self.0.join(",")
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> FromIterator<&'a str> for OpponentSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for team in iter {
            set.insert(team);
        }
        set
    }
}

/// The active filter selection. Everything is unset by default.
///
/// Vocabulary fields hold the raw selected value; `All` (or an empty
/// string) means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub last_n_games: Option<LastNGames>,
    pub season: Option<String>,
    pub season_type: Option<String>,
    pub division: Option<String>,
    pub conference: Option<String>,
    pub game_type: Option<String>,
    pub outcome: Option<String>,
    pub opponents: OpponentSet,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn constraining(value: &Option<String>) -> Option<&str> {
    non_empty(value).filter(|v| *v != ALL)
}

impl FilterCriteria {
    /// Seed criteria from a previously applied filter map.
    ///
    /// Values that cannot be parsed (a malformed date, say) are left unset.
    pub fn from_query_map(initial: &QueryMap) -> Self {
        let text = |key: &str| initial.get(key).map(|v| v.trim().to_string());
        let date = |key: &str| {
            initial.get(key).and_then(|v| match parse_date(v) {
                Ok(d) => Some(d),
                Err(e) => {
                    debug!("ignoring {key}={v:?}: {e}");
                    None
                }
            })
        };

        FilterCriteria {
            date_from: date(DATE_FROM),
            date_to: date(DATE_TO),
            last_n_games: initial.get(LAST_N_GAMES).and_then(|v| v.parse().ok()),
            season: text(SEASON),
            season_type: text(SEASON_TYPE),
            division: text(DIVISION),
            conference: text(CONFERENCE),
            game_type: text(GAME_TYPE),
            outcome: text(OUTCOME),
            opponents: initial
                .get(OPPONENTS)
                .map(|v| OpponentSet::from_joined(v))
                .unwrap_or_default(),
        }
    }

    /// Wire-format map of every constraining criterion.
    pub fn to_query_map(&self) -> QueryMap {
        let mut map = QueryMap::new();
        let mut put = |key: &str, value: String| {
            map.insert(key.to_string(), value);
        };

        if let Some(d) = self.date_from {
            put(DATE_FROM, d.format("%Y-%m-%d").to_string());
        }
        if let Some(d) = self.date_to {
            put(DATE_TO, d.format("%Y-%m-%d").to_string());
        }
        if let Some(n) = self.last_n_games {
            put(LAST_N_GAMES, n.to_string());
        }
        if let Some(season) = non_empty(&self.season) {
            put(SEASON, season.to_string());
        }
        for (key, value) in [
            (SEASON_TYPE, &self.season_type),
            (DIVISION, &self.division),
            (CONFERENCE, &self.conference),
            (GAME_TYPE, &self.game_type),
            (OUTCOME, &self.outcome),
        ] {
            if let Some(v) = constraining(value) {
                put(key, v.to_string());
            }
        }
        if !self.opponents.is_empty() {
            put(OPPONENTS, self.opponents.join());
        }
        map
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_map().is_empty()
    }

    /// Human-readable description of the active filters, one message each.
    pub fn describe(&self) -> Vec<String> {
        let mut messages = Vec::new();

        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => messages.push(format!("Date range: {from} to {to}")),
            (Some(from), None) => messages.push(format!("From date: {from}")),
            (None, Some(to)) => messages.push(format!("To date: {to}")),
            (None, None) => {}
        }
        if let Some(n) = self.last_n_games {
            messages.push(format!("Last {n} games"));
        }
        if let Some(season) = non_empty(&self.season) {
            messages.push(format!("Season: {season}"));
        }
        if let Some(v) = constraining(&self.season_type) {
            messages.push(format!("Season Type: {v}"));
        }
        if let Some(v) = constraining(&self.conference) {
            messages.push(format!("Conference: {v}"));
        }
        if let Some(v) = constraining(&self.division) {
            messages.push(format!("Division: {v}"));
        }
        if let Some(v) = constraining(&self.game_type) {
            messages.push(format!("Game Type: {v}"));
        }
        if let Some(v) = constraining(&self.outcome) {
            messages.push(format!("Outcome: {v}"));
        }
        if self.opponents.len() > 2 {
            messages.push(format!("Opponents: {} teams selected", self.opponents.len()));
        } else if !self.opponents.is_empty() {
            let names: Vec<&str> = self.opponents.iter().collect();
            messages.push(format!("Opponents: {}", names.join(", ")));
        }
        messages
    }
}

/// Editable filter state behind a filter panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterModel {
    criteria: FilterCriteria,
}

impl FilterModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from the last applied filters; `opponents` arrives comma-joined.
    pub fn initialize(initial: &QueryMap) -> Self {
        Self {
            criteria: FilterCriteria::from_query_map(initial),
        }
    }

    pub fn from_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        self.criteria.date_from = date;
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        self.criteria.date_to = date;
    }

    pub fn set_last_n_games(&mut self, n: Option<LastNGames>) {
        self.criteria.last_n_games = n;
    }

    pub fn set_season(&mut self, season: impl Into<String>) {
        self.criteria.season = Some(season.into());
    }

    pub fn set_season_type(&mut self, value: impl Into<String>) {
        self.criteria.season_type = Some(value.into());
    }

    pub fn set_division(&mut self, value: impl Into<String>) {
        self.criteria.division = Some(value.into());
    }

    pub fn set_conference(&mut self, value: impl Into<String>) {
        self.criteria.conference = Some(value.into());
    }

    pub fn set_game_type(&mut self, value: impl Into<String>) {
        self.criteria.game_type = Some(value.into());
    }

    pub fn set_outcome(&mut self, value: impl Into<String>) {
        self.criteria.outcome = Some(value.into());
    }

    /// Select `team` as an opponent, or deselect it if already selected.
    pub fn toggle_opponent(&mut self, team: &str) {
        self.criteria.opponents.toggle(team);
    }

    pub fn serialize(&self) -> QueryMap {
        self.criteria.to_query_map()
    }

    /// Reset every criterion. Does not apply anything.
    pub fn clear(&mut self) {
        self.criteria = FilterCriteria::default();
    }

    /// Hand the serialized criteria to `on_apply`.
    pub fn apply_filters<F>(&self, on_apply: F)
    where
        F: FnOnce(QueryMap),
    {
        on_apply(self.serialize());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Closed,
    Open,
}

/// What the caller should do after the panel was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearOutcome {
    /// Filters were active before the clear, so unfiltered data must be refetched.
    pub refetch: bool,
}

/// Filter panel lifecycle: Closed → Open → (edits) → Applied or Cleared → Closed.
///
/// The panel keeps only the last applied filter map between openings; the
/// editable model is reseeded from it every time the panel opens.
#[derive(Debug, Clone)]
pub struct FilterPanel {
    state: PanelState,
    model: FilterModel,
    last_applied: QueryMap,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::Closed,
            model: FilterModel::new(),
            last_applied: QueryMap::new(),
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == PanelState::Open
    }

    pub fn last_applied(&self) -> &QueryMap {
        &self.last_applied
    }

    /// Whether the view is currently showing filtered data.
    pub fn is_filtered(&self) -> bool {
        !self.last_applied.is_empty()
    }

    /// Open the panel, reseeding the model from the last applied filters.
    pub fn open(&mut self) {
        self.model = FilterModel::initialize(&self.last_applied);
        self.state = PanelState::Open;
    }

    /// Close without applying; pending edits are discarded.
    pub fn close(&mut self) {
        self.model = FilterModel::new();
        self.state = PanelState::Closed;
    }

    /// The model being edited, only while open.
    pub fn model(&self) -> Option<&FilterModel> {
        self.is_open().then_some(&self.model)
    }

    /// Run `edit` against the model. Returns `false` (and changes nothing)
    /// while the panel is closed.
    pub fn edit<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut FilterModel),
    {
        if !self.is_open() {
            return false;
        }
        edit(&mut self.model);
        true
    }

    /// Serialize the edited criteria, remember them and close.
    /// Returns `None` while closed.
    pub fn apply(&mut self) -> Option<QueryMap> {
        if !self.is_open() {
            return None;
        }
        let mut applied = QueryMap::new();
        self.model.apply_filters(|map| applied = map);
        self.last_applied = applied.clone();
        self.close();
        Some(applied)
    }

    /// Reset the criteria and close. Returns `None` while closed.
    pub fn clear(&mut self) -> Option<ClearOutcome> {
        if !self.is_open() {
            return None;
        }
        self.model.clear();
        let outcome = ClearOutcome {
            refetch: self.is_filtered(),
        };
        self.last_applied.clear();
        self.close();
        Some(outcome)
    }
}
