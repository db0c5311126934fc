//! Core non-UI logic split into modular submodules.

pub mod export;
pub mod filter;
pub mod query;
pub mod selection;
pub mod sort;
pub mod view;

// Re-export public APIs to preserve existing import paths (crate::logic::...)
pub use export::{apply_export_reply, export_file_name, request_export};
pub use filter::{
    clear_source_filter, passes_source_filter, source_counts, source_filter_active, toggle_source,
};
pub use query::{apply_search_reply, submit_query};
pub use selection::{clear_selection, is_selected, select_all, set_selected, toggle_selected};
pub use sort::{compare_by_date, published_ts, toggle_sort_order};
pub use view::{RowView, downloadable_count, export_batch, rows};
