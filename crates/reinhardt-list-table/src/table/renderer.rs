//! The capability set a concrete list table provides

use crate::column::{Columns, SortableColumns};
use crate::error::{ListTableError, Result};
use crate::row::RenderedRow;
use indexmap::IndexMap;
use std::fmt;

/// Bulk actions offered by a table, action slug to label
pub type BulkActions = IndexMap<String, String>;

/// Column configuration and row mapping for one kind of list table
///
/// [`row_data`](TableRenderer::row_data) is the only required method, so a
/// concrete table cannot compile without a row-to-cell mapping.
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::{Columns, RenderedRow, Result, TableRenderer};
///
/// struct Course {
///     id: u64,
///     title: String,
/// }
///
/// struct CourseTable;
///
/// impl TableRenderer for CourseTable {
///     type Item = Course;
///
///     fn columns(&self) -> Columns {
///         Columns::new().with("id", "ID").with("title", "Course")
///     }
///
///     fn row_data(&self, course: &Course) -> Result<RenderedRow> {
///         Ok(RenderedRow::new()
///             .with_cell("id", course.id.to_string())
///             .with_cell("title", course.title.clone()))
///     }
/// }
/// ```
pub trait TableRenderer {
	/// Opaque row handle; the list table never looks inside it
	type Item;

	/// Columns of the table in display order
	fn columns(&self) -> Columns;

	/// Columns that may be sorted by the user
	///
	/// Default: none
	fn sortable_columns(&self) -> SortableColumns {
		SortableColumns::new()
	}

	/// Maps one row to its cell markup
	fn row_data(&self, item: &Self::Item) -> Result<RenderedRow>;

	/// Bulk operations offered above and below the table
	///
	/// Default: none
	fn bulk_actions(&self) -> BulkActions {
		BulkActions::new()
	}
}

type RowMapper<T> = Box<dyn Fn(&T) -> RenderedRow + Send + Sync>;

/// Configurable [`TableRenderer`]
///
/// Holds columns, sortable columns and bulk actions set at configuration
/// time and returns them verbatim. The row mapping is a closure; a renderer
/// configured without one fails every [`row_data`](TableRenderer::row_data)
/// call with [`ListTableError::MissingRowRenderer`].
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::{BaseTableRenderer, Columns, RenderedRow, TableRenderer};
///
/// let renderer = BaseTableRenderer::new()
///     .with_columns(Columns::new().with("name", "Name"))
///     .with_row_data(|name: &String| RenderedRow::new().with_cell("name", name.clone()));
///
/// let row = renderer.row_data(&"Alice".to_string()).unwrap();
/// assert_eq!(row.get("name"), Some("Alice"));
/// ```
pub struct BaseTableRenderer<T> {
	columns: Columns,
	sortable_columns: SortableColumns,
	bulk_actions: BulkActions,
	row_mapper: Option<RowMapper<T>>,
}

impl<T> BaseTableRenderer<T> {
	/// Creates a renderer with no columns and no row mapping
	pub fn new() -> Self {
		Self {
			columns: Columns::new(),
			sortable_columns: SortableColumns::new(),
			bulk_actions: BulkActions::new(),
			row_mapper: None,
		}
	}

	/// Sets the columns
	pub fn with_columns(mut self, columns: Columns) -> Self {
		self.columns = columns;
		self
	}

	/// Sets the sortable columns
	pub fn with_sortable_columns(mut self, sortable_columns: SortableColumns) -> Self {
		self.sortable_columns = sortable_columns;
		self
	}

	/// Adds a bulk action
	pub fn with_bulk_action(mut self, action: impl Into<String>, label: impl Into<String>) -> Self {
		self.bulk_actions.insert(action.into(), label.into());
		self
	}

	/// Sets the row mapping
	pub fn with_row_data<F>(mut self, mapper: F) -> Self
	where
		F: Fn(&T) -> RenderedRow + Send + Sync + 'static,
	{
		self.row_mapper = Some(Box::new(mapper));
		self
	}
}

impl<T> Default for BaseTableRenderer<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> fmt::Debug for BaseTableRenderer<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("BaseTableRenderer")
			.field("columns", &self.columns)
			.field("sortable_columns", &self.sortable_columns)
			.field("bulk_actions", &self.bulk_actions)
			.field("has_row_mapper", &self.row_mapper.is_some())
			.finish()
	}
}

impl<T> TableRenderer for BaseTableRenderer<T> {
	type Item = T;

	fn columns(&self) -> Columns {
		self.columns.clone()
	}

	fn sortable_columns(&self) -> SortableColumns {
		self.sortable_columns.clone()
	}

	fn row_data(&self, item: &T) -> Result<RenderedRow> {
		match &self.row_mapper {
			Some(mapper) => Ok(mapper(item)),
			None => Err(ListTableError::missing_row_renderer("BaseTableRenderer")),
		}
	}

	fn bulk_actions(&self) -> BulkActions {
		self.bulk_actions.clone()
	}
}
