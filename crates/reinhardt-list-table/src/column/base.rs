//! Column and sortable-column declarations

use indexmap::IndexMap;

/// Ordered set of table columns
///
/// Maps a column identifier to its display label. Insertion order is the
/// display order, and identifiers are unique: inserting an existing
/// identifier replaces its label without moving it.
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::Columns;
///
/// let columns = Columns::new()
///     .with("id", "ID")
///     .with("title", "Course");
///
/// assert_eq!(columns.len(), 2);
/// assert_eq!(columns.label("title"), Some("Course"));
/// assert_eq!(columns.keys().collect::<Vec<_>>(), vec!["id", "title"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Columns(IndexMap<String, String>);

impl Columns {
	/// Creates an empty column set
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Adds a column, builder style
	pub fn with(mut self, id: impl Into<String>, label: impl Into<String>) -> Self {
		self.insert(id, label);
		self
	}

	/// Adds a column or relabels an existing one
	pub fn insert(&mut self, id: impl Into<String>, label: impl Into<String>) {
		self.0.insert(id.into(), label.into());
	}

	/// Returns the label of a column
	pub fn label(&self, id: &str) -> Option<&str> {
		self.0.get(id).map(String::as_str)
	}

	/// Returns whether the column is declared
	pub fn contains(&self, id: &str) -> bool {
		self.0.contains_key(id)
	}

	/// Iterates over `(identifier, label)` pairs in display order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(id, label)| (id.as_str(), label.as_str()))
	}

	/// Iterates over column identifiers in display order
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// Number of columns
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no columns are declared
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for Columns
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(id, label)| (id.into(), label.into()))
				.collect(),
		)
	}
}

/// Sortability declaration for a single column
///
/// `initially_descending` mirrors the optional second element of a sortable
/// declaration: `Some(true)` means the first click sorts descending. When it
/// is left unspecified, header state normalization treats it as `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableColumn {
	/// Value sent as `orderby` when the column header is clicked
	pub sort_key: String,
	/// Whether the column sorts descending first
	pub initially_descending: Option<bool>,
}

impl SortableColumn {
	/// Creates a sortable declaration without a direction flag
	pub fn new(sort_key: impl Into<String>) -> Self {
		Self {
			sort_key: sort_key.into(),
			initially_descending: None,
		}
	}

	/// Sets the direction flag
	pub fn descending(mut self, initially_descending: bool) -> Self {
		self.initially_descending = Some(initially_descending);
		self
	}
}

/// Ordered map of column identifier to sortability declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortableColumns(IndexMap<String, SortableColumn>);

impl SortableColumns {
	/// Creates an empty sortable set
	pub fn new() -> Self {
		Self(IndexMap::new())
	}

	/// Adds a sortable column, builder style
	pub fn with(mut self, id: impl Into<String>, column: SortableColumn) -> Self {
		self.insert(id, column);
		self
	}

	/// Adds or replaces a sortable column
	pub fn insert(&mut self, id: impl Into<String>, column: SortableColumn) {
		self.0.insert(id.into(), column);
	}

	/// Removes a sortable column
	pub fn remove(&mut self, id: &str) -> Option<SortableColumn> {
		self.0.shift_remove(id)
	}

	/// Returns the declaration for a column
	pub fn get(&self, id: &str) -> Option<&SortableColumn> {
		self.0.get(id)
	}

	/// Iterates over declarations in order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &SortableColumn)> {
		self.0.iter().map(|(id, column)| (id.as_str(), column))
	}

	/// Number of sortable columns
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when nothing is sortable
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl<K: Into<String>> FromIterator<(K, SortableColumn)> for SortableColumns {
	fn from_iter<I: IntoIterator<Item = (K, SortableColumn)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(id, column)| (id.into(), column)).collect())
	}
}

/// Normalized sortable entry stored in the column header state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
	/// Value sent as `orderby`
	pub sort_key: String,
	/// Whether the column sorts descending first
	pub initially_descending: bool,
}

/// Sortable-columns filter that disables sorting entirely
///
/// Ignores its input and always returns an empty set. Register it as a
/// sortable-columns filter to force a table with no sortable headers.
///
/// # Example
///
/// ```rust
/// use reinhardt_list_table::{remove_sortable_columns, SortableColumn, SortableColumns};
///
/// let declared = SortableColumns::new().with("title", SortableColumn::new("title"));
/// assert!(remove_sortable_columns(declared).is_empty());
/// ```
pub fn remove_sortable_columns(_columns: SortableColumns) -> SortableColumns {
	SortableColumns::new()
}
