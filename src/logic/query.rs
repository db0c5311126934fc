use tokio::sync::mpsc;

use crate::logic::{filter, selection};
use crate::state::{AppState, Notice, QueryInput, SearchReply};

/// What: Submit the query form over the search channel with a fresh id.
///
/// Inputs:
/// - `app`: Mutable application state; updates `next_query_id` and `latest_query_id`
/// - `query_tx`: Channel to the search worker
///
/// Output:
/// - Resets results, selection, filter, and notice, marks the search in
///   flight, and sends a `QueryInput` built from the form fields. The sort
///   direction is left alone so it survives across queries.
///
/// Details:
/// - Does nothing while a search is already in flight; the reply of an
///   abandoned query could otherwise race the new one.
/// - The id allows correlating responses so stale replies can be dropped.
pub fn submit_query(app: &mut AppState, query_tx: &mpsc::UnboundedSender<QueryInput>) {
    if app.search_in_flight {
        return;
    }
    app.notice = None;
    app.records.clear();
    app.source_counts.clear();
    selection::clear_selection(app);
    filter::clear_source_filter(app);
    app.results_state.select(None);
    app.sources_state.select(None);

    let id = app.next_query_id;
    app.next_query_id += 1;
    app.latest_query_id = id;
    app.search_in_flight = true;
    let _ = query_tx.send(QueryInput {
        id,
        keyword: app.keyword.clone(),
        logic: app.logic.clone(),
        start_date: app.start_date.clone(),
        end_date: app.end_date.clone(),
    });
    tracing::info!(id, keyword = %app.keyword, logic = %app.logic, "query submitted");
}

/// What: Fold a search worker reply into the state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `reply`: The worker's answer, correlated by query id
///
/// Output:
/// - On success: records stored in arrival order, source counts rebuilt,
///   every record selected, cursors reset, and a green notice with the
///   count. On failure: a red notice with the error text. Either way the
///   in-flight flag drops.
///
/// Details:
/// - Replies whose id is not the latest submitted one are logged and
///   dropped without touching any state.
pub fn apply_search_reply(app: &mut AppState, reply: SearchReply) {
    if reply.id != app.latest_query_id {
        tracing::info!(
            id = reply.id,
            latest = app.latest_query_id,
            "dropping stale search reply"
        );
        return;
    }
    app.search_in_flight = false;
    match reply.outcome {
        Ok(records) => {
            let count = records.len();
            app.source_counts = filter::source_counts(&records);
            app.records = records;
            selection::select_all(app);
            app.results_state
                .select(if count > 0 { Some(0) } else { None });
            app.sources_state
                .select(if app.source_counts.is_empty() {
                    None
                } else {
                    Some(0)
                });
            app.notice = Some(Notice::Success(format!("Loaded {count} article(s)")));
            tracing::info!(id = reply.id, count, "search results loaded");
        }
        Err(err) => {
            app.notice = Some(Notice::Error(err.to_string()));
            tracing::warn!(id = reply.id, error = %err, "search failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_search_reply, submit_query};
    use crate::state::{AppError, AppState, NewsRecord, Notice, SearchReply, SortOrder};
    use tokio::sync::mpsc;

    fn record(source: &str, title: &str) -> NewsRecord {
        NewsRecord {
            title: title.into(),
            link: format!("https://news.example/{title}"),
            source: source.into(),
            published_at: "2026-08-20".into(),
            sentiment: None,
        }
    }

    #[tokio::test]
    /// What: Submitting resets state, advances ids, and sends the form
    ///
    /// Inputs:
    /// - `AppState` with leftover results, selection, filter, and notice.
    ///
    /// Output:
    /// - State cleared, `latest_query_id` advances to 1, and the channel
    ///   receives a matching `QueryInput`; the sort direction survives.
    ///
    /// Details:
    /// - Uses a short timeout to guarantee the send occurs asynchronously.
    async fn query_submit_resets_and_sends() {
        let mut app = AppState {
            keyword: "storm".into(),
            logic: "AND".into(),
            start_date: "2026-08-13".into(),
            end_date: "2026-08-20".into(),
            sort_order: SortOrder::DateAsc,
            notice: Some(Notice::Error("old".into())),
            ..Default::default()
        };
        app.records = vec![record("A", "leftover")];
        app.selected.insert(app.records[0].key());
        app.active_sources.insert("A".into());

        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_query(&mut app, &tx);

        assert!(app.records.is_empty());
        assert!(app.selected.is_empty());
        assert!(app.active_sources.is_empty());
        assert!(app.notice.is_none());
        assert!(app.search_in_flight);
        assert_eq!(app.latest_query_id, 1);
        assert_eq!(app.sort_order, SortOrder::DateAsc);

        let q = tokio::time::timeout(std::time::Duration::from_millis(50), rx.recv())
            .await
            .ok()
            .flatten()
            .expect("query sent");
        assert_eq!(q.id, 1);
        assert_eq!(q.keyword, "storm");
        assert_eq!(q.logic, "AND");
        assert_eq!(q.start_date, "2026-08-13");
        assert_eq!(q.end_date, "2026-08-20");
    }

    #[tokio::test]
    /// What: A second submission is ignored while one is in flight
    ///
    /// Inputs:
    /// - Two `submit_query` calls with no reply in between.
    ///
    /// Output:
    /// - Only one `QueryInput` on the channel; ids unchanged by the second
    ///   call.
    async fn query_submit_blocked_while_in_flight() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        submit_query(&mut app, &tx);
        submit_query(&mut app, &tx);
        assert_eq!(app.latest_query_id, 1);
        assert_eq!(app.next_query_id, 2);
        let first = rx.try_recv();
        assert!(first.is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: A successful reply loads records selected and counted
    ///
    /// - Input: Reply with three records from two outlets
    /// - Output: Records stored, all selected, counts largest-first, green
    ///   notice mentions the count, in-flight flag drops
    fn query_success_reply_loads_everything() {
        let mut app = AppState::default();
        app.latest_query_id = 1;
        app.search_in_flight = true;
        let reply = SearchReply {
            id: 1,
            outcome: Ok(vec![
                record("A", "one"),
                record("B", "two"),
                record("A", "three"),
            ]),
        };
        apply_search_reply(&mut app, reply);
        assert!(!app.search_in_flight);
        assert_eq!(app.records.len(), 3);
        assert_eq!(app.selected.len(), 3);
        assert_eq!(app.source_counts[0].name, "A");
        assert_eq!(app.source_counts[0].count, 2);
        match &app.notice {
            Some(Notice::Success(msg)) => assert!(msg.contains('3')),
            other => panic!("expected success notice, got {other:?}"),
        }
    }

    #[test]
    /// What: A failed reply leaves results empty but always ends loading
    ///
    /// - Input: Reply carrying a query error
    /// - Output: Red notice with the error text, in-flight flag drops,
    ///   no records
    fn query_error_reply_sets_notice() {
        let mut app = AppState::default();
        app.latest_query_id = 1;
        app.search_in_flight = true;
        apply_search_reply(
            &mut app,
            SearchReply {
                id: 1,
                outcome: Err(AppError::Query("service unavailable".into())),
            },
        );
        assert!(!app.search_in_flight);
        assert!(app.records.is_empty());
        match &app.notice {
            Some(Notice::Error(msg)) => assert!(msg.contains("service unavailable")),
            other => panic!("expected error notice, got {other:?}"),
        }
    }

    #[test]
    /// What: Replies for superseded queries are dropped untouched
    ///
    /// - Input: State at latest id 2, reply carrying id 1
    /// - Output: No records, no notice, in-flight flag still set
    fn query_stale_reply_is_dropped() {
        let mut app = AppState::default();
        app.latest_query_id = 2;
        app.search_in_flight = true;
        apply_search_reply(
            &mut app,
            SearchReply {
                id: 1,
                outcome: Ok(vec![record("A", "late")]),
            },
        );
        assert!(app.search_in_flight);
        assert!(app.records.is_empty());
        assert!(app.notice.is_none());
    }
}
