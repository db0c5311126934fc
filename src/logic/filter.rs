use crate::state::{AppState, NewsRecord, SourceCount};

/// What: Decide whether a record passes the source filter.
///
/// Inputs:
/// - `app`: Application state holding the active source set
/// - `record`: The record to test
///
/// Output:
/// - `true` when no sources are toggled on, or when the record's source is
///   one of the toggled ones.
///
/// This is the only filter predicate in the crate; row dimming and the
/// export batch both go through it so they can never disagree.
#[must_use]
pub fn passes_source_filter(app: &AppState, record: &NewsRecord) -> bool {
    app.active_sources.is_empty() || app.active_sources.contains(&record.source)
}

/// What: Flip one outlet in or out of the active source set.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `name`: Outlet name exactly as it appears on records
pub fn toggle_source(app: &mut AppState, name: &str) {
    if !app.active_sources.remove(name) {
        app.active_sources.insert(name.to_string());
    }
}

/// What: Drop every toggled source, returning to the show-all state.
pub fn clear_source_filter(app: &mut AppState) {
    app.active_sources.clear();
}

/// What: Whether an outlet is currently toggled on.
#[must_use]
pub fn source_filter_active(app: &AppState, name: &str) -> bool {
    app.active_sources.contains(name)
}

/// What: Count records per outlet, most common outlet first.
///
/// Inputs:
/// - `records`: The loaded result set
///
/// Output:
/// - One entry per distinct outlet; counts sum to `records.len()`. Ties
///   break by outlet name so the list is deterministic.
#[must_use]
pub fn source_counts(records: &[NewsRecord]) -> Vec<SourceCount> {
    let mut by_name = std::collections::BTreeMap::<&str, usize>::new();
    for r in records {
        *by_name.entry(r.source.as_str()).or_insert(0) += 1;
    }
    let mut counts: Vec<SourceCount> = by_name
        .into_iter()
        .map(|(name, count)| SourceCount {
            name: name.to_string(),
            count,
        })
        .collect();
    counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    counts
}
