//! Record tables - shared by every list page
//!
//! Filtering, sorting and header state for tables built from untyped records
//! and a fixed list of column definitions.

mod types;
mod helpers;
mod state;

pub use types::{ColumnDef, SortDirection, SortDirective, SortIndicator};
pub use helpers::{filter_records, sort_records, toggle_sort, sort_indicator, visible_rows, visible_indices};
pub use state::TableState;
