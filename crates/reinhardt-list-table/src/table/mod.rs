//! Table renderers and the list table render pass

pub mod list_table;
pub mod renderer;
pub mod search;

pub use list_table::{ListTable, TableLabels};
pub use renderer::{BaseTableRenderer, BulkActions, TableRenderer};
