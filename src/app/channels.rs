use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::state::{ExportReply, ExportRequest, QueryInput, SearchReply};

use super::workers::{spawn_export_worker, spawn_search_worker};

/// What: Channel endpoints wired between the event loop and background workers.
///
/// Details:
/// - The event loop keeps every receiver plus the request senders; the
///   workers own the opposite ends.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub query_tx: mpsc::UnboundedSender<QueryInput>,
    pub search_reply_rx: mpsc::UnboundedReceiver<SearchReply>,
    pub export_tx: mpsc::UnboundedSender<ExportRequest>,
    pub export_reply_rx: mpsc::UnboundedReceiver<ExportReply>,
}

impl Channels {
    /// What: Create all channels and spawn the search and export workers.
    ///
    /// Inputs:
    /// - `api_url`: Base URL of the news service, shared by both workers
    ///
    /// Output:
    /// - Returns a `Channels` struct with all senders and receivers initialized
    pub fn new(api_url: String) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let event_thread_cancelled = Arc::new(AtomicBool::new(false));
        let (query_tx, query_rx) = mpsc::unbounded_channel::<QueryInput>();
        let (search_reply_tx, search_reply_rx) = mpsc::unbounded_channel::<SearchReply>();
        let (export_tx, export_rx) = mpsc::unbounded_channel::<ExportRequest>();
        let (export_reply_tx, export_reply_rx) = mpsc::unbounded_channel::<ExportReply>();

        spawn_search_worker(query_rx, search_reply_tx, api_url.clone());
        spawn_export_worker(export_rx, export_reply_tx, api_url);

        Self {
            event_tx,
            event_rx,
            event_thread_cancelled,
            query_tx,
            search_reply_rx,
            export_tx,
            export_reply_rx,
        }
    }
}
