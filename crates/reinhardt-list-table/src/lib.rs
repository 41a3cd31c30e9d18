//! Admin list table rendering for Reinhardt
//!
//! This crate renders the sortable, paginated, searchable HTML list tables
//! used on admin screens (courses, lessons, quizzes, learners). A concrete
//! table declares its columns and maps each row to cell markup; the crate
//! takes care of the table chrome, column headers, row alternation,
//! hidden columns, the search form and the extension points around them.
//!
//! # Features
//!
//! - **Table Definition**: implement [`TableRenderer`] or configure a [`BaseTableRenderer`]
//! - **Hidden Columns**: per-screen column visibility from the [`RenderContext`]
//! - **Sorting Links**: sortable headers that round-trip `orderby` / `order`
//! - **Pagination**: page navigation with `?paged=N`
//! - **Search**: search form that keeps every other query parameter
//! - **Hooks**: typed actions and filters in [`ListTableHooks`]
//! - **Settings**: TOML-loadable [`ListTableSettings`]
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[ListTable] --> B[TableRenderer]
//!     A --> C[RenderContext]
//!     A --> D[ListTableHooks]
//!     A --> E[ListTableSettings]
//!     A --> F[Pagination]
//!     B --> G[Columns]
//!     B --> H[SortableColumns]
//!     B --> I[RenderedRow]
//!     A --> J[ColumnHeaderState]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_list_table::{
//!     Columns, ListTable, RenderContext, RenderedRow, Result, SortableColumn, SortableColumns,
//!     TableRenderer,
//! };
//!
//! struct Course {
//!     id: u64,
//!     title: String,
//! }
//!
//! struct CourseTable;
//!
//! impl TableRenderer for CourseTable {
//!     type Item = Course;
//!
//!     fn columns(&self) -> Columns {
//!         Columns::new().with("id", "ID").with("title", "Course")
//!     }
//!
//!     fn sortable_columns(&self) -> SortableColumns {
//!         SortableColumns::new().with("title", SortableColumn::new("title"))
//!     }
//!
//!     fn row_data(&self, course: &Course) -> Result<RenderedRow> {
//!         Ok(RenderedRow::new()
//!             .with_cell("id", course.id.to_string())
//!             .with_cell("title", course.title.clone()))
//!     }
//! }
//!
//! let context = RenderContext::from_query_string("edit-course", "page=courses").unwrap();
//! let table = ListTable::new("course", CourseTable, context).with_items(vec![Course {
//!     id: 1,
//!     title: "Intro to Rust".into(),
//! }]);
//!
//! let html = table.render().unwrap();
//! assert!(html.contains(r#"<td class="title column-title">Intro to Rust</td>"#));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod context;
pub mod error;
pub mod hooks;
pub mod html;
pub mod pagination;
pub mod row;
pub mod settings;
pub mod table;

// Re-exports for convenience
pub use column::{
	ColumnHeaderState, Columns, SortSpec, SortableColumn, SortableColumns, remove_sortable_columns,
};
pub use context::{RenderContext, SortOrder};
pub use error::{ListTableError, Result};
pub use hooks::{
	DEFAULT_PRIORITY, ListTableHooks, NavPosition, SEARCH_FORM_PRIORITY, TableNavEvent,
};
pub use pagination::Pagination;
pub use row::RenderedRow;
pub use settings::ListTableSettings;
pub use table::{BaseTableRenderer, BulkActions, ListTable, TableLabels, TableRenderer};
