use tokio::sync::mpsc;

use crate::logic::view;
use crate::state::{AppError, AppState, ExportReply, ExportRequest, Notice};

/// What: File name for a spreadsheet exported on the given day.
///
/// Inputs:
/// - `date`: The export date (today's local date in normal operation)
///
/// Output:
/// - `selected_news_YYYY-MM-DD.xlsx`.
#[must_use]
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("selected_news_{}.xlsx", date.format("%Y-%m-%d"))
}

/// What: Validate the current batch and hand it to the export worker.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `export_tx`: Channel to the export worker
///
/// Output:
/// - With a non-empty batch: marks the export in flight and sends an
///   `ExportRequest` aimed at the configured export directory. Otherwise
///   sets a red notice explaining what blocked the export and sends
///   nothing, so no pointless request leaves the machine.
///
/// Details:
/// - An empty selection is reported before a filtered-out selection; the
///   first tells the user to select something, the second to loosen the
///   filter.
pub fn request_export(app: &mut AppState, export_tx: &mpsc::UnboundedSender<ExportRequest>) {
    if app.export_in_flight {
        return;
    }
    if app.selected.is_empty() {
        app.notice = Some(Notice::Error(AppError::NoSelection.to_string()));
        return;
    }
    let records = view::export_batch(app);
    if records.is_empty() {
        app.notice = Some(Notice::Error(AppError::SelectionFilteredOut.to_string()));
        return;
    }
    let dest = app
        .export_dir
        .join(export_file_name(chrono::Local::now().date_naive()));
    let count = records.len();
    app.export_in_flight = true;
    let _ = export_tx.send(ExportRequest { records, dest });
    tracing::info!(count, "export requested");
}

/// What: Fold an export worker reply into the state.
///
/// Inputs:
/// - `app`: Mutable application state
/// - `reply`: The worker's answer
///
/// Output:
/// - Green notice naming the file and row count on success, red notice
///   with the failure detail otherwise. The in-flight flag drops either
///   way.
pub fn apply_export_reply(app: &mut AppState, reply: ExportReply) {
    app.export_in_flight = false;
    match reply.outcome {
        Ok(done) => {
            app.notice = Some(Notice::Success(format!(
                "Saved {} article(s) to {}",
                done.count,
                done.path.display()
            )));
            tracing::info!(count = done.count, path = %done.path.display(), "export finished");
        }
        Err(err) => {
            app.notice = Some(Notice::Error(err.to_string()));
            tracing::warn!(error = %err, "export failed");
        }
    }
}
