//! Event handling layer for the newsdeck TUI.
//!
//! `handle_event` owns the global chords and delegates pane-specific keys
//! to one submodule per pane.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::state::{AppState, ExportRequest, Focus, QueryInput};

mod form;
mod results;
mod sources;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    query_tx: &mpsc::UnboundedSender<QueryInput>,
    export_tx: &mpsc::UnboundedSender<ExportRequest>,
) -> bool {
    if let CEvent::Key(ke) = ev {
        if ke.kind != KeyEventKind::Press {
            return false;
        }

        // Global chords work regardless of focus. Esc stays global so the
        // app can always be left even while typing in the form.
        match (ke.code, ke.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc, _) => return true,
            (KeyCode::Tab, _) => {
                app.focus = match app.focus {
                    Focus::Query => Focus::Sources,
                    Focus::Sources => Focus::Results,
                    Focus::Results => Focus::Query,
                };
                return false;
            }
            (KeyCode::BackTab, _) => {
                app.focus = match app.focus {
                    Focus::Query => Focus::Results,
                    Focus::Sources => Focus::Query,
                    Focus::Results => Focus::Sources,
                };
                return false;
            }
            _ => {}
        }

        return match app.focus {
            Focus::Query => form::handle_form_key(ke, app, query_tx),
            Focus::Sources => sources::handle_sources_key(ke, app),
            Focus::Results => results::handle_results_key(ke, app, export_tx),
        };
    }
    false
}

#[cfg(test)]
mod tests {
    use super::handle_event;
    use crate::state::{AppState, Focus};
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    /// What: Tab cycles focus forward and BackTab cycles it backward
    ///
    /// - Input: Tab twice, then BackTab once, starting from the form
    /// - Output: Query -> Sources -> Results -> Sources
    fn events_tab_cycles_focus() {
        let mut app = AppState::default();
        let (qtx, _qrx) = mpsc::unbounded_channel();
        let (etx, _erx) = mpsc::unbounded_channel();
        assert_eq!(app.focus, Focus::Query);
        assert!(!handle_event(key(KeyCode::Tab), &mut app, &qtx, &etx));
        assert_eq!(app.focus, Focus::Sources);
        assert!(!handle_event(key(KeyCode::Tab), &mut app, &qtx, &etx));
        assert_eq!(app.focus, Focus::Results);
        assert!(!handle_event(key(KeyCode::BackTab), &mut app, &qtx, &etx));
        assert_eq!(app.focus, Focus::Sources);
    }

    #[test]
    /// What: Esc and Ctrl-C request exit from any pane
    ///
    /// - Input: Esc while the form has focus; Ctrl-C in results
    /// - Output: handle_event returns true both times
    fn events_exit_chords() {
        let mut app = AppState::default();
        let (qtx, _qrx) = mpsc::unbounded_channel();
        let (etx, _erx) = mpsc::unbounded_channel();
        assert!(handle_event(key(KeyCode::Esc), &mut app, &qtx, &etx));
        app.focus = Focus::Results;
        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(handle_event(ctrl_c, &mut app, &qtx, &etx));
    }
}
