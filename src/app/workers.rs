use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::net;
use crate::state::{AppError, ExportDone, ExportReply, ExportRequest, QueryInput, SearchReply};

/// What: Spawn the background worker that runs search queries against the
/// news service.
///
/// Inputs:
/// - `query_rx`: Channel receiver for submitted queries
/// - `reply_tx`: Channel sender for search replies
/// - `api_url`: Base URL of the news service
///
/// Details:
/// - Each reply carries the id of the query that produced it so the event
///   loop can drop replies from superseded queries.
pub fn spawn_search_worker(
    mut query_rx: mpsc::UnboundedReceiver<QueryInput>,
    reply_tx: mpsc::UnboundedSender<SearchReply>,
    api_url: String,
) {
    tokio::spawn(async move {
        while let Some(query) = query_rx.recv().await {
            let id = query.id;
            let outcome = net::search(&api_url, &query)
                .await
                .map_err(|e| AppError::Query(e.to_string()));
            if reply_tx.send(SearchReply { id, outcome }).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the background worker that exports selected articles.
///
/// Inputs:
/// - `export_rx`: Channel receiver for export requests
/// - `reply_tx`: Channel sender for export replies
/// - `api_url`: Base URL of the news service
///
/// Details:
/// - Posts the batch to the service, then writes the returned spreadsheet
///   bytes to the destination path.
pub fn spawn_export_worker(
    mut export_rx: mpsc::UnboundedReceiver<ExportRequest>,
    reply_tx: mpsc::UnboundedSender<ExportReply>,
    api_url: String,
) {
    tokio::spawn(async move {
        while let Some(req) = export_rx.recv().await {
            let outcome = run_export(&api_url, &req).await;
            if reply_tx.send(ExportReply { outcome }).is_err() {
                break;
            }
        }
    });
}

async fn run_export(api_url: &str, req: &ExportRequest) -> Result<ExportDone, AppError> {
    let bytes = net::export_selected(api_url, &req.records)
        .await
        .map_err(|e| AppError::Export(e.to_string()))?;
    if let Some(parent) = req.dest.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Export(e.to_string()))?;
    }
    std::fs::write(&req.dest, &bytes).map_err(|e| AppError::Export(e.to_string()))?;
    Ok(ExportDone {
        path: req.dest.clone(),
        count: req.records.len(),
    })
}

/// What: Spawn the thread that reads terminal input.
///
/// Inputs:
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag that tells the thread to exit
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked promptly
///   when the application exits.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(std::sync::atomic::Ordering::Relaxed) {
                            break;
                        }
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(_) => {
                        // ignore transient read errors and continue
                    }
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
