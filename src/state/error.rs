//! Error kinds surfaced to the user through the status pane.

use std::fmt;

/// Failures recovered at the event-loop boundary and rendered as a red
/// notice instead of crashing the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    /// The search request failed or the service reported an error.
    Query(String),
    /// Export was requested with nothing selected.
    NoSelection,
    /// Export was requested but the source filter hides every selected row.
    SelectionFilteredOut,
    /// The export request failed or the file could not be written.
    Export(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query(msg) => write!(f, "Search failed: {msg}"),
            Self::NoSelection => write!(f, "No articles are selected"),
            Self::SelectionFilteredOut => {
                write!(f, "Selected articles are all hidden by the source filter")
            }
            Self::Export(msg) => write!(f, "Export failed: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}
