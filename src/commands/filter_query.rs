//! Show the query parameters a filter set serializes to.

use crate::core::filters::FilterModel;

/// `key=value` lines for every serialized filter, then the description.
pub fn render_filter_query(filters: &FilterModel) -> Vec<String> {
    let query = filters.serialize();
    if query.is_empty() {
        return vec!["(no filters)".to_string()];
    }
    let mut lines: Vec<String> = query.iter().map(|(k, v)| format!("{k}={v}")).collect();
    lines.extend(filters.criteria().describe().into_iter().map(|d| format!("# {d}")));
    lines
}

pub fn handle_filter_query(filters: &FilterModel) {
    for line in render_filter_query(filters) {
        println!("{line}");
    }
}
