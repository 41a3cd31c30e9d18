//! Rendered row data

use std::collections::HashMap;

/// Cell markup for one row, keyed by column identifier
///
/// Produced fresh for every row by [`TableRenderer::row_data`](crate::TableRenderer::row_data).
/// Values are emitted verbatim, so they may contain markup such as links.
/// Keys that are not declared columns are ignored, and declared columns
/// missing from the row render as empty cells.
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::RenderedRow;
///
/// let row = RenderedRow::new()
///     .with_cell("id", "7")
///     .with_cell("title", "<a href=\"/courses/7\">Intro</a>");
///
/// assert_eq!(row.get("id"), Some("7"));
/// assert_eq!(row.get("learners"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedRow(HashMap<String, String>);

impl RenderedRow {
	/// Creates a row with no cells
	pub fn new() -> Self {
		Self(HashMap::new())
	}

	/// Sets a cell, builder style
	pub fn with_cell(mut self, column: impl Into<String>, markup: impl Into<String>) -> Self {
		self.insert(column, markup);
		self
	}

	/// Sets a cell
	pub fn insert(&mut self, column: impl Into<String>, markup: impl Into<String>) {
		self.0.insert(column.into(), markup.into());
	}

	/// Returns the markup for a column
	pub fn get(&self, column: &str) -> Option<&str> {
		self.0.get(column).map(String::as_str)
	}

	/// Number of cells
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when the row has no cells
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for RenderedRow
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(column, markup)| (column.into(), markup.into()))
				.collect(),
		)
	}
}
