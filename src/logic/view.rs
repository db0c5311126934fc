use crate::logic::{filter, selection, sort};
use crate::state::{AppState, NewsRecord};

/// One results-pane row: a record plus the flags that drive its rendering.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    /// The underlying record.
    pub record: &'a NewsRecord,
    /// Whether the record is marked for export.
    pub selected: bool,
    /// Whether the record passes the source filter. Rows that do not are
    /// rendered dimmed rather than dropped, so toggling filters never
    /// shifts the list length under the cursor.
    pub visible: bool,
}

/// What: Produce the rows of the results pane in display order.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - Every loaded record exactly once, date-sorted in the configured
///   direction. The sort is stable, so records with equal or unparsable
///   timestamps keep their arrival order.
#[must_use]
pub fn rows(app: &AppState) -> Vec<RowView<'_>> {
    let mut out: Vec<RowView<'_>> = app
        .records
        .iter()
        .map(|record| RowView {
            record,
            selected: selection::is_selected(app, record),
            visible: filter::passes_source_filter(app, record),
        })
        .collect();
    out.sort_by(|a, b| sort::compare_by_date(app.sort_order, a.record, b.record));
    out
}

/// Membership test shared by the batch and its count.
fn in_batch(app: &AppState, record: &NewsRecord) -> bool {
    selection::is_selected(app, record) && filter::passes_source_filter(app, record)
}

/// What: Collect the records an export would write.
///
/// Inputs:
/// - `app`: Application state
///
/// Output:
/// - Clones of the records that are both selected and passing the source
///   filter, in arrival order.
#[must_use]
pub fn export_batch(app: &AppState) -> Vec<NewsRecord> {
    app.records
        .iter()
        .filter(|r| in_batch(app, r))
        .cloned()
        .collect()
}

/// What: How many records an export would write right now.
///
/// Recomputed on every render so selection and filter changes reflect
/// immediately in the status line.
#[must_use]
pub fn downloadable_count(app: &AppState) -> usize {
    app.records.iter().filter(|r| in_batch(app, r)).count()
}
