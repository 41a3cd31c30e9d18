//! Column declarations and per-render header state

pub mod base;
pub mod header;

pub use base::{Columns, SortSpec, SortableColumn, SortableColumns, remove_sortable_columns};
pub use header::ColumnHeaderState;
