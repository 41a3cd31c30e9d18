//! Column header state shared by every row of a render pass

use super::base::{Columns, SortSpec, SortableColumns};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Columns, hidden columns and normalized sortable columns for one render pass
///
/// Built once per table by [`ListTable::column_header_state`](crate::ListTable::column_header_state)
/// and reused for the header, every body row and the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeaderState {
	/// Declared columns in display order
	pub columns: Columns,
	/// Columns the current screen hides
	pub hidden: HashSet<String>,
	/// Sortable columns after filtering and normalization
	pub sortable: IndexMap<String, SortSpec>,
}

impl ColumnHeaderState {
	/// Builds the header state from already-filtered sortable declarations
	///
	/// Declarations with an empty sort key are dropped, as are declarations
	/// for columns that are not part of `columns`. A missing direction flag
	/// becomes `false`.
	pub fn new(columns: Columns, hidden: HashSet<String>, sortable: SortableColumns) -> Self {
		let mut normalized = IndexMap::with_capacity(sortable.len());
		for (id, declaration) in sortable.iter() {
			if declaration.sort_key.is_empty() {
				continue;
			}
			if !columns.contains(id) {
				tracing::warn!(
					column = %id,
					"Sortable column is not a declared column and will be ignored"
				);
				continue;
			}
			normalized.insert(
				id.to_string(),
				SortSpec {
					sort_key: declaration.sort_key.clone(),
					initially_descending: declaration.initially_descending.unwrap_or(false),
				},
			);
		}

		Self {
			columns,
			hidden,
			sortable: normalized,
		}
	}

	/// Returns whether a column is hidden on this screen
	pub fn is_hidden(&self, id: &str) -> bool {
		self.hidden.contains(id)
	}

	/// Returns the normalized sort entry for a column
	pub fn sort_spec(&self, id: &str) -> Option<&SortSpec> {
		self.sortable.get(id)
	}

	/// Number of columns that are not hidden
	pub fn visible_count(&self) -> usize {
		self.columns.keys().filter(|id| !self.is_hidden(id)).count()
	}
}
