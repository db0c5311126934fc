//! Central mutable state container for the application.

use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;

use ratatui::widgets::ListState;

use crate::config::Config;
use crate::state::{Focus, FormField, NewsRecord, Notice, RecordKey, SortOrder, SourceCount};

/// Everything the UI renders and the event handlers mutate.
///
/// One instance lives for the duration of the program and is owned by the
/// event loop; workers never touch it directly and communicate through
/// channels instead.
pub struct AppState {
    /// Keyword text in the query form.
    pub keyword: String,
    /// Keyword combination mode, "AND" or "OR", forwarded verbatim.
    pub logic: String,
    /// Inclusive window start in the query form (YYYY-MM-DD).
    pub start_date: String,
    /// Inclusive window end in the query form (YYYY-MM-DD).
    pub end_date: String,
    /// Form line the cursor sits on while the query pane has focus.
    pub form_field: FormField,

    /// Records of the most recent successful query, in arrival order.
    pub records: Vec<NewsRecord>,
    /// Per-outlet record counts, sorted most common first.
    pub source_counts: Vec<SourceCount>,
    /// Keys of the records currently marked for export.
    pub selected: HashSet<RecordKey>,
    /// Outlets toggled on in the source filter; empty means show all.
    pub active_sources: BTreeSet<String>,
    /// Direction of the date ordering in the results pane.
    pub sort_order: SortOrder,

    /// Pane that currently receives key input.
    pub focus: Focus,
    /// Cursor state of the results list.
    pub results_state: ListState,
    /// Cursor state of the source filter list.
    pub sources_state: ListState,

    /// Identifier handed to the next submitted query.
    pub next_query_id: u64,
    /// Identifier of the most recently submitted query; replies carrying
    /// any other id are stale and get dropped.
    pub latest_query_id: u64,
    /// True between query submission and arrival of its reply.
    pub search_in_flight: bool,
    /// True between export submission and arrival of its reply.
    pub export_in_flight: bool,

    /// Most recent success or error feedback, if any.
    pub notice: Option<Notice>,

    /// Directory exported spreadsheets are written into.
    pub export_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            logic: "OR".into(),
            start_date: String::new(),
            end_date: String::new(),
            form_field: FormField::default(),
            records: Vec::new(),
            source_counts: Vec::new(),
            selected: HashSet::new(),
            active_sources: BTreeSet::new(),
            sort_order: SortOrder::default(),
            focus: Focus::default(),
            results_state: ListState::default(),
            sources_state: ListState::default(),
            next_query_id: 1,
            latest_query_id: 0,
            search_in_flight: false,
            export_in_flight: false,
            notice: None,
            export_dir: PathBuf::from("."),
        }
    }
}

impl AppState {
    /// Build the startup state from the loaded configuration: form fields
    /// prefilled with the configured defaults, date window covering the
    /// configured number of days back from today.
    #[must_use]
    pub fn from_config(cfg: &Config) -> Self {
        let (start_date, end_date) = crate::util::last_days_range(cfg.default_days_back);
        Self {
            keyword: cfg.default_keyword.clone(),
            logic: cfg.default_logic.clone(),
            start_date,
            end_date,
            sort_order: cfg.sort_order,
            export_dir: cfg.export_dir.clone(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::config::Config;
    use crate::state::SortOrder;

    #[test]
    /// What: Default state starts idle with query ids ready to issue
    ///
    /// - Input: AppState::default()
    /// - Output: No records, nothing in flight, first query id will be 1
    fn state_default_is_idle() {
        let app = AppState::default();
        assert!(app.records.is_empty());
        assert!(app.selected.is_empty());
        assert!(app.active_sources.is_empty());
        assert!(!app.search_in_flight);
        assert!(!app.export_in_flight);
        assert_eq!(app.next_query_id, 1);
        assert_eq!(app.latest_query_id, 0);
        assert!(app.notice.is_none());
    }

    #[test]
    /// What: Startup state picks up configured defaults
    ///
    /// - Input: Config with a custom keyword, logic, and sort order
    /// - Output: Form prefilled and sort order applied; dates populated
    fn state_from_config_applies_defaults() {
        let cfg = Config {
            default_keyword: "economy".into(),
            default_logic: "AND".into(),
            sort_order: SortOrder::DateAsc,
            ..Config::default()
        };
        let app = AppState::from_config(&cfg);
        assert_eq!(app.keyword, "economy");
        assert_eq!(app.logic, "AND");
        assert_eq!(app.sort_order, SortOrder::DateAsc);
        assert_eq!(app.start_date.len(), 10);
        assert_eq!(app.end_date.len(), 10);
        assert!(app.start_date <= app.end_date);
    }
}
