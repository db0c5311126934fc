use crate::state::{AppState, NewsRecord};

/// What: Mark every loaded record as selected, dropping the previous set.
///
/// Inputs:
/// - `app`: Mutable application state whose `records` were just replaced
///
/// Output:
/// - `app.selected` holds the key of every record in `app.records`.
///
/// Runs once per successful query load; articles start opted in and the
/// user deselects the ones they do not want.
pub fn select_all(app: &mut AppState) {
    app.selected = app.records.iter().map(NewsRecord::key).collect();
}

/// What: Force one record's selection on or off.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `record`: The record to mark; does not have to be in `app.records`
/// - `on`: Desired membership
pub fn set_selected(app: &mut AppState, record: &NewsRecord, on: bool) {
    if on {
        app.selected.insert(record.key());
    } else {
        app.selected.remove(&record.key());
    }
}

/// What: Flip one record's selection.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `record`: The record under the cursor
pub fn toggle_selected(app: &mut AppState, record: &NewsRecord) {
    let on = is_selected(app, record);
    set_selected(app, record, !on);
}

/// What: Whether a record is currently marked for export.
#[must_use]
pub fn is_selected(app: &AppState, record: &NewsRecord) -> bool {
    app.selected.contains(&record.key())
}

/// What: Deselect everything.
pub fn clear_selection(app: &mut AppState) {
    app.selected.clear();
}
