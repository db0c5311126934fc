use crossterm::event::{KeyCode, KeyEvent};

use crate::logic::{clear_source_filter, toggle_source};
use crate::state::AppState;

/// Handle key events while the source filter list is focused.
///
/// Enter or Space toggles the outlet under the cursor, `c` clears every
/// toggle. Returns `true` to exit the app, `false` to continue.
pub fn handle_sources_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') => return true,
        KeyCode::Up | KeyCode::Char('k') => move_cursor(app, -1),
        KeyCode::Down | KeyCode::Char('j') => move_cursor(app, 1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            let name = app
                .sources_state
                .selected()
                .and_then(|i| app.source_counts.get(i))
                .map(|s| s.name.clone());
            if let Some(name) = name {
                toggle_source(app, &name);
            }
        }
        KeyCode::Char('c') => clear_source_filter(app),
        _ => {}
    }
    false
}

/// Move the source cursor by `delta`, clamped to the list.
fn move_cursor(app: &mut AppState, delta: isize) {
    let len = app.source_counts.len();
    if len == 0 {
        return;
    }
    let cur = app.sources_state.selected().unwrap_or(0) as isize;
    let idx = (cur + delta).clamp(0, len as isize - 1) as usize;
    app.sources_state.select(Some(idx));
}

#[cfg(test)]
mod tests {
    use super::handle_sources_key;
    use crate::logic::source_counts;
    use crate::state::{AppState, NewsRecord};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn record(source: &str, title: &str) -> NewsRecord {
        NewsRecord {
            title: title.into(),
            link: format!("https://news.example/{title}"),
            source: source.into(),
            published_at: "2026-08-20".into(),
            sentiment: None,
        }
    }

    #[test]
    /// What: Cursor movement clamps and toggling follows the cursor
    ///
    /// - Input: Two outlets; Down past the end, Space, then c
    /// - Output: Cursor stops at the last row, its outlet toggles on,
    ///   clear drops it again
    fn events_sources_toggle_under_cursor() {
        let mut app = AppState::default();
        app.records = vec![record("A", "a1"), record("A", "a2"), record("B", "b1")];
        app.source_counts = source_counts(&app.records);
        app.sources_state.select(Some(0));

        handle_sources_key(key(KeyCode::Down), &mut app);
        handle_sources_key(key(KeyCode::Down), &mut app);
        assert_eq!(app.sources_state.selected(), Some(1));

        handle_sources_key(key(KeyCode::Char(' ')), &mut app);
        assert!(app.active_sources.contains("B"));

        handle_sources_key(key(KeyCode::Char('c')), &mut app);
        assert!(app.active_sources.is_empty());
    }

    #[test]
    /// What: Keys on an empty source list are harmless
    ///
    /// - Input: Down and Enter with no loaded sources
    /// - Output: No cursor, no toggles, no exit
    fn events_sources_empty_list_noop() {
        let mut app = AppState::default();
        assert!(!handle_sources_key(key(KeyCode::Down), &mut app));
        assert!(!handle_sources_key(key(KeyCode::Enter), &mut app));
        assert!(app.sources_state.selected().is_none());
        assert!(app.active_sources.is_empty());
    }
}
