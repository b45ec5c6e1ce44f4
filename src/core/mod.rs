//! Core utilities shared across commands
//!
//! - `filters`: filter criteria, the editable filter model and panel
//! - `http`: token storage and request headers

pub mod filters;
pub mod http;

pub use filters::{
    ClearOutcome, FilterCriteria, FilterModel, FilterPanel, OpponentSet, PanelState, QueryMap,
};
pub use http::{auth_header_map, EnvTokenStore, MemoryTokenStore, TokenStore};
