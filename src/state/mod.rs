//! Application state: value types, the central container, and error kinds.
//!
//! Everything is re-exported here so the rest of the crate can keep using
//! `crate::state::*` paths.

pub mod app_state;
pub mod error;
pub mod types;

pub use app_state::AppState;
pub use error::AppError;
pub use types::{
    ExportDone, ExportReply, ExportRequest, Focus, FormField, NewsRecord, Notice, QueryInput,
    RecordKey, SearchReply, Sentiment, SortOrder, SourceCount,
};

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
