use crossterm::event::{KeyCode, KeyEvent};
use tokio::sync::mpsc;

use crate::logic::{request_export, rows, toggle_selected, toggle_sort_order};
use crate::state::{AppState, ExportRequest, NewsRecord};

/// Handle key events while the results list is focused.
///
/// Space toggles the row under the cursor, `s` flips the date ordering,
/// `e` requests an export, and Enter or `o` opens the article link.
/// Returns `true` to exit the app, `false` to continue.
pub fn handle_results_key(
    ke: KeyEvent,
    app: &mut AppState,
    export_tx: &mpsc::UnboundedSender<ExportRequest>,
) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Char(' ') => {
            if let Some(record) = record_under_cursor(app) {
                toggle_selected(app, &record);
            }
        }
        KeyCode::Char('s') => {
            // Keep the cursor on the same article across the flip.
            let followed = record_under_cursor(app).map(|r| r.key());
            toggle_sort_order(app);
            if let Some(key) = followed
                && let Some(pos) = rows(app).iter().position(|row| row.record.key() == key)
            {
                app.results_state.select(Some(pos));
            }
        }
        KeyCode::Char('e') => request_export(app, export_tx),
        KeyCode::Enter | KeyCode::Char('o') => {
            if let Some(record) = record_under_cursor(app) {
                crate::util::open_url(&record.link);
            }
        }
        _ => {}
    }
    false
}

/// The record at the cursor position of the sorted view.
fn record_under_cursor(app: &AppState) -> Option<NewsRecord> {
    let idx = app.results_state.selected()?;
    rows(app).get(idx).map(|row| row.record.clone())
}

/// Move the results cursor by `delta`, clamped to the list.
fn move_cursor(app: &mut AppState, delta: isize) {
    let len = app.records.len();
    if len == 0 {
        return;
    }
    let cur = app.results_state.selected().unwrap_or(0) as isize;
    let idx = (cur + delta).clamp(0, len as isize - 1) as usize;
    app.results_state.select(Some(idx));
}
